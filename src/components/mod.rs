mod delete_team_modal;
mod error_alert;
mod header;
mod loader_button;
mod status_bar;
mod team_list;

pub use delete_team_modal::DeleteTeamModal;
pub use error_alert::ErrorAlert;
pub use header::Header;
pub use loader_button::{ButtonVariant, LoaderButton};
pub use status_bar::StatusBar;
pub use team_list::TeamList;
