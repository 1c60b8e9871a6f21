use crate::utils::{field_class, field_style};
use dioxus::prelude::*;

#[derive(PartialEq, Clone, Debug)]
pub enum InputType {
    Text,
    Decimal,
    Integer,
}

impl InputType {
    /// Browser-side hint; the real filtering happens in the formatters
    pub fn pattern(&self) -> &'static str {
        match self {
            InputType::Text => ".*",
            InputType::Decimal => "[0-9]*[.,]?[0-9]*",
            InputType::Integer => "[0-9]*",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub label: String,
    pub value: String,
    #[props(default)]
    pub placeholder: String,
    pub input_type: InputType,
    /// Text rendered at the end of the field, e.g. a currency symbol
    #[props(default)]
    pub adornment: String,
    #[props(default)]
    pub has_error: bool,
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    let on_change = props.on_change;

    rsx! {
        div {
            class: "input-section",
            label {
                class: "input-label",
                "{props.label}"
            }
            div {
                class: "input-with-adornment",
                input {
                    class: field_class(props.has_error),
                    style: field_style(props.has_error),
                    r#type: "text",
                    pattern: props.input_type.pattern(),
                    value: "{props.value}",
                    placeholder: "{props.placeholder}",
                    disabled: props.disabled,
                    oninput: move |event| on_change.call(event.value())
                }
                if !props.adornment.is_empty() {
                    span {
                        class: "input-adornment",
                        "{props.adornment}"
                    }
                }
            }
        }
    }
}
