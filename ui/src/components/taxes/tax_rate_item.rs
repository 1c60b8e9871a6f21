use dioxus::prelude::*;

use crate::features::taxes::{TaxRate, TaxRateId};
use crate::services::i18n::translate;
use crate::utils::format_rate;

#[derive(Props, PartialEq, Clone)]
pub struct TaxRateItemProps {
    pub tax_rate: TaxRate,
    pub on_delete: EventHandler<TaxRateId>,
}

#[component]
pub fn TaxRateItem(props: TaxRateItemProps) -> Element {
    let on_delete = props.on_delete;
    let id = props.tax_rate.id.clone();
    let rate = format_rate(props.tax_rate.rate);
    let delete_label = translate("taxes.settings.delete");

    rsx! {
        div {
            class: "tax-rate-item",
            div {
                class: "tax-rate-main",
                div {
                    class: "tax-rate-name",
                    "{props.tax_rate.name}"
                }
                div {
                    class: "tax-rate-code",
                    "{props.tax_rate.code}"
                }
            }
            div {
                class: "tax-rate-meta",
                if props.tax_rate.applied_to_organization {
                    span {
                        class: "chip",
                        {translate("taxes.settings.default_badge")}
                    }
                }
                span {
                    class: "tax-rate-rate",
                    "{rate}"
                }
                button {
                    class: "icon-button",
                    title: "{delete_label}",
                    onclick: move |_| on_delete.call(id.clone()),
                    "🗑"
                }
            }
        }
    }
}

/// Placeholder row shown while tax rates are loading
#[component]
pub fn TaxRateItemSkeleton() -> Element {
    rsx! {
        div {
            class: "tax-rate-item skeleton",
            div {
                class: "tax-rate-main",
                div { class: "skeleton-bar wide" }
                div { class: "skeleton-bar narrow" }
            }
            div { class: "skeleton-bar short" }
        }
    }
}
