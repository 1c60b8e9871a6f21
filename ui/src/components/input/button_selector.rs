use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct BooleanSelectorProps {
    pub label: String,
    pub value: bool,
    pub false_label: String,
    pub true_label: String,
    #[props(default)]
    pub helper_text: String,
    pub disabled: bool,
    pub on_change: EventHandler<bool>,
}

/// Two-option segmented selector bound to a boolean field
#[component]
pub fn BooleanSelector(props: BooleanSelectorProps) -> Element {
    let on_change = props.on_change;
    let options = [
        (false, props.false_label.clone()),
        (true, props.true_label.clone()),
    ];

    rsx! {
        div {
            class: "button-selector",
            label {
                class: "input-label",
                "{props.label}"
            }
            div {
                class: "button-selector-options",
                for (option_value, option_label) in options {
                    button {
                        key: "{option_value}",
                        class: if props.value == option_value { "selector-option selected" } else { "selector-option" },
                        disabled: props.disabled,
                        onclick: move |_| on_change.call(option_value),
                        "{option_label}"
                    }
                }
            }
            if !props.helper_text.is_empty() {
                p {
                    class: "helper-text",
                    "{props.helper_text}"
                }
            }
        }
    }
}
