use dioxus::prelude::*;

use crate::components::display::LoadingIndicator;
use crate::features::taxes::PendingDeletion;
use crate::services::i18n::{translate, translate_with};

#[derive(Props, PartialEq, Clone)]
pub struct DeleteTaxRateDialogProps {
    pub pending: PendingDeletion,
    pub tax_rate_name: String,
    pub on_cancel: EventHandler<()>,
    pub on_confirm: EventHandler<()>,
}

/// Confirmation dialog, rendered only while a row is selected for deletion
#[component]
pub fn DeleteTaxRateDialog(props: DeleteTaxRateDialogProps) -> Element {
    let on_cancel = props.on_cancel;
    let on_confirm = props.on_confirm;
    let deleting = props.pending.is_deleting;
    let title = translate_with("taxes.delete_dialog.title", &[("name", props.tax_rate_name.as_str())]);

    rsx! {
        div {
            class: "dialog-backdrop",
            onclick: move |_| on_cancel.call(()),
            div {
                class: "dialog",
                onclick: move |event| event.stop_propagation(),
                h3 {
                    class: "dialog-title",
                    "{title}"
                }
                p {
                    class: "dialog-description",
                    {translate("taxes.delete_dialog.description")}
                }
                if props.pending.error.is_some() {
                    p {
                        class: "dialog-error",
                        {translate("taxes.delete_dialog.failed")}
                    }
                }
                div {
                    class: "dialog-actions",
                    button {
                        class: "button-quaternary",
                        disabled: deleting,
                        onclick: move |_| on_cancel.call(()),
                        {translate("taxes.delete_dialog.cancel")}
                    }
                    button {
                        class: "button-danger",
                        disabled: deleting,
                        onclick: move |_| on_confirm.call(()),
                        if deleting {
                            LoadingIndicator {}
                        } else {
                            {translate("taxes.delete_dialog.confirm")}
                        }
                    }
                }
            }
        }
    }
}
