use crate::components::*;
use crate::diagnostics::Diagnostics;
use crate::state::{AppState, Message};
use crate::team::{AppConfig, InMemoryTeams, Team, TeamsClient};
use crate::telemetry::TelemetryHandle;
use dioxus::prelude::*;
use std::rc::Rc;
use std::time::Duration;

/// Launch-time inputs handed to the root component.
#[derive(Clone, Debug)]
pub struct Bootstrap {
    pub config: AppConfig,
    pub warning: Option<String>,
}

#[allow(non_snake_case)]
pub fn App() -> Element {
    let bootstrap = use_context::<Bootstrap>();

    let directory = use_hook(|| {
        InMemoryTeams::new(bootstrap.config.teams.clone())
            .with_latency(Duration::from_millis(bootstrap.config.simulated_latency_ms))
    });
    use_context_provider({
        let directory = directory.clone();
        move || TeamsClient::new(Rc::new(directory))
    });
    use_context_provider(Diagnostics::default);
    let telemetry = use_hook(|| TelemetryHandle::from_config(bootstrap.config.telemetry_enabled));

    let mut state = use_signal(|| {
        let mut state = AppState::new(directory.teams());
        if let Some(warning) = &bootstrap.warning {
            state.set_message(Message::error(warning.clone()));
        }
        state
    });

    let on_delete_request = move |team: Team| {
        tracing::debug!(team_id = %team.id, "delete requested");
        state.write().open_delete(team);
    };

    let on_cancel = move |_| {
        state.write().close_delete();
    };

    let (teams, pending_delete) = {
        let read_state = state.read();
        (read_state.teams.clone(), read_state.pending_delete.clone())
    };

    // May run after the dialog was dismissed; the request is not cancelled.
    let dialog = pending_delete.clone().map(|team| {
        let directory = directory.clone();
        let deleted = team.clone();
        let after_delete = move |_: ()| {
            state.write().finish_delete(&deleted, directory.teams());
        };
        (team, after_delete)
    });

    rsx! {
        style { {include_str!("../assets/main.css")} }
        div { class: "app-container",
            Header { team_count: teams.len() }
            div { class: "content",
                TeamList {
                    teams: teams,
                    disabled: pending_delete.is_some(),
                    on_delete: on_delete_request
                }
            }
            StatusBar { state: state }
            if let Some((team, after_delete)) = dialog {
                DeleteTeamModal {
                    key: "{team.id}",
                    team: team,
                    on_cancel: on_cancel,
                    after_delete: after_delete,
                    telemetry_recorder: telemetry.clone()
                }
            }
        }
    }
}
