use dioxus::prelude::*;

use crate::components::forms::FixedFeeSection;
use crate::features::plans::{PlanDraft, PlanForm};
use crate::services::i18n::translate;

#[derive(Props, PartialEq, Clone)]
pub struct PlanEditorProps {
    /// Draft to edit; passing a different draft reloads the form
    pub draft: PlanDraft,
    #[props(default)]
    pub is_edition: bool,
    #[props(default = true)]
    pub can_be_edited: bool,
}

/// Plan editing screen owning the form state shared by its sections
#[component]
pub fn PlanEditor(props: PlanEditorProps) -> Element {
    let mut form = use_signal(|| PlanForm::new(props.draft.clone()));

    use_effect(use_reactive((&props.draft,), move |(draft,)| {
        if form.peek().initial_values != draft {
            form.write().replace_draft(draft);
        }
    }));

    let is_dirty = form.read().is_dirty();

    rsx! {
        div {
            class: "plan-editor",
            div {
                class: "plan-editor-header",
                h1 {
                    class: "page-title",
                    {translate("plans.create.title")}
                }
                if is_dirty {
                    span {
                        class: "chip unsaved",
                        "•"
                    }
                }
            }
            FixedFeeSection {
                can_be_edited: props.can_be_edited,
                is_edition: props.is_edition,
                form: form
            }
        }
    }
}
