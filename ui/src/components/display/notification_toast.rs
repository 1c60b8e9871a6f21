use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct NotificationToastProps {
    pub message: String,
    pub on_dismiss: EventHandler<()>,
}

#[component]
pub fn NotificationToast(props: NotificationToastProps) -> Element {
    let on_dismiss = props.on_dismiss;

    rsx! {
        div {
            class: "notification-toast error",
            span {
                class: "toast-message",
                "{props.message}"
            }
            button {
                class: "toast-close",
                onclick: move |_| on_dismiss.call(()),
                "✕"
            }
        }
    }
}
