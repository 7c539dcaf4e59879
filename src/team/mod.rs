pub mod backend;
pub mod config;
pub mod delete;
pub mod memory;
pub mod types;

pub use backend::{MutationState, TeamsClient, use_delete_team};
pub use config::{AppConfig, load_config};
pub use delete::{cancel_delete, delete_team};
pub use memory::InMemoryTeams;
pub use types::{DeleteTeamError, Team};
