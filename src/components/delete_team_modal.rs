use crate::components::{ButtonVariant, ErrorAlert, LoaderButton};
use crate::diagnostics::Diagnostics;
use crate::team::{
    DeleteTeamError, MutationState, Team, cancel_delete, delete_team, use_delete_team,
};
use crate::telemetry::TelemetryHandle;
use dioxus::core::spawn_forever;
use dioxus::prelude::*;

const LABEL_ID: &str = "deleteTeam";

const WARNING: &str =
    "Removing teams is irreversible and will cascade to existing child teams.";

/// Everything the dialog shows for a team in a given mutation state.
#[derive(Clone, Debug, PartialEq)]
pub struct DialogView {
    pub heading: String,
    pub loading: bool,
    pub controls_disabled: bool,
    pub error: Option<DeleteTeamError>,
}

impl DialogView {
    pub fn new(team: &Team, state: &MutationState) -> Self {
        Self {
            heading: format!("Delete team {}?", team.name),
            loading: state.loading,
            controls_disabled: state.loading,
            error: state.error.clone(),
        }
    }
}

#[component]
pub fn DeleteTeamModal(
    team: Team,
    on_cancel: EventHandler<()>,
    after_delete: EventHandler<()>,
    telemetry_recorder: TelemetryHandle,
) -> Element {
    let mutation = use_delete_team();
    let diagnostics = use_context::<Diagnostics>();

    let view = DialogView::new(&team, &mutation.state());

    let on_delete = {
        let team_id = team.id.clone();
        move |evt: MouseEvent| {
            evt.prevent_default();
            if !mutation.try_begin() {
                return;
            }

            let mutation = mutation.clone();
            let team_id = team_id.clone();
            let telemetry = telemetry_recorder.clone();
            let diagnostics = diagnostics.clone();
            // Not tied to this scope: dismissing the dialog must not abort the request.
            spawn_forever(async move {
                let outcome = delete_team(
                    &team_id,
                    |variables| async move { mutation.mutate(variables).await },
                    telemetry.recorder(),
                    diagnostics.log(),
                    || after_delete.call(()),
                )
                .await;
                tracing::debug!(team_id = %team_id, ?outcome, "team deletion settled");
            });
        }
    };

    let dismiss = {
        let team_id = team.id.clone();
        move || cancel_delete(&team_id, || on_cancel.call(()))
    };
    let (dismiss_overlay, dismiss_key) = (dismiss.clone(), dismiss.clone());

    rsx! {
        div {
            class: "dialog-overlay",
            onclick: move |_| dismiss_overlay(),
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    dismiss_key();
                }
            },
            div {
                class: "delete-confirm-dialog",
                role: "dialog",
                tabindex: "-1",
                "aria-modal": "true",
                "aria-labelledby": LABEL_ID,
                onmounted: move |evt| async move {
                    if let Err(e) = evt.set_focus(true).await {
                        tracing::debug!(error = ?e, "could not focus delete dialog");
                    }
                },
                onclick: move |evt| evt.stop_propagation(),
                h3 { id: LABEL_ID, "{view.heading}" }
                strong { class: "dialog-warning", "{WARNING}" }
                if let Some(error) = view.error {
                    ErrorAlert { error }
                }
                div { class: "dialog-buttons",
                    button {
                        class: ButtonVariant::Secondary.class(),
                        disabled: view.controls_disabled,
                        onclick: move |_| dismiss(),
                        "Cancel"
                    }
                    LoaderButton {
                        label: "Delete team",
                        loading: view.loading,
                        disabled: view.controls_disabled,
                        always_show_label: true,
                        variant: ButtonVariant::Danger,
                        onclick: on_delete,
                    }
                }
            }
        }
    }
}
