use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct GenericPlaceholderProps {
    pub title: String,
    pub subtitle: String,
    pub button_title: String,
    pub on_action: EventHandler<()>,
}

/// Full-page placeholder with a single call to action
#[component]
pub fn GenericPlaceholder(props: GenericPlaceholderProps) -> Element {
    let on_action = props.on_action;

    rsx! {
        div {
            class: "generic-placeholder",
            div {
                class: "placeholder-image",
                "⚠️"
            }
            h2 {
                class: "placeholder-title",
                "{props.title}"
            }
            p {
                class: "placeholder-subtitle",
                "{props.subtitle}"
            }
            button {
                class: "button-primary",
                onclick: move |_| on_action.call(()),
                "{props.button_title}"
            }
        }
    }
}
