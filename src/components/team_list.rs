use crate::team::Team;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdDelete;

#[component]
pub fn TeamList(teams: Vec<Team>, disabled: bool, on_delete: EventHandler<Team>) -> Element {
    if teams.is_empty() {
        return rsx! {
            div { class: "team-list empty", "No teams." }
        };
    }

    rsx! {
        ul { class: "team-list",
            for team in teams {
                li { key: "{team.id}", class: "team-row",
                    div { class: "team-name",
                        span { "{team.title()}" }
                        if team.display_name.is_some() {
                            span { class: "team-handle", "@{team.name}" }
                        }
                    }
                    if team.readonly {
                        span { class: "badge", "read-only" }
                    }
                    button {
                        class: "secondary danger delete-btn",
                        title: "Delete team",
                        disabled: disabled,
                        onclick: {
                            let team = team.clone();
                            move |_| on_delete.call(team.clone())
                        },
                        Icon { width: 16, height: 16, icon: MdDelete }
                    }
                }
            }
        }
    }
}
