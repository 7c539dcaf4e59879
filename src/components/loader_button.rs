use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Secondary,
    Danger,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Danger => "primary danger",
        }
    }
}

/// Button that shows a spinner while `loading`.
///
/// The label is hidden during loading unless `always_show_label` is set.
#[component]
pub fn LoaderButton(
    label: String,
    loading: bool,
    #[props(default)] disabled: bool,
    #[props(default)] always_show_label: bool,
    #[props(default)] variant: ButtonVariant,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let show_label = !loading || always_show_label;

    rsx! {
        button {
            class: "{variant.class()} loader-button",
            disabled: disabled,
            "aria-busy": loading,
            onclick: move |evt| onclick.call(evt),
            if loading {
                span { class: "spinner", "aria-hidden": true }
            }
            if show_label {
                span { class: "label", "{label}" }
            }
        }
    }
}
