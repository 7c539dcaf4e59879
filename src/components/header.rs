use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdSupervisorAccount;

#[component]
pub fn Header(team_count: usize) -> Element {
    rsx! {
        div { class: "header",
            Icon {
                width: 28,
                height: 28,
                icon: MdSupervisorAccount
            }
            h1 { "Teams" }
            span { class: "team-count", "{team_count}" }
        }
    }
}
