use crate::features::plans::SectionValidity;
use crate::services::i18n::translate;
use crate::utils::validity_style;
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct SectionValidityIndicatorProps {
    pub validity: SectionValidity,
}

/// Icon with tooltip summarizing whether a form section is complete
#[component]
pub fn SectionValidityIndicator(props: SectionValidityIndicatorProps) -> Element {
    let tooltip = translate(props.validity.tooltip_key());

    rsx! {
        span {
            class: props.validity.icon_class(),
            style: validity_style(props.validity),
            title: "{tooltip}",
            "✓"
        }
    }
}
