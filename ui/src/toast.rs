//! Transient toast notification.
//!
//! Auto-dismisses after a few seconds or on click; the owner decides what
//! happens on dismissal (typically resetting the profile status so the
//! toast never re-fires from stale state).

use dioxus::prelude::*;

use crate::icons::{FaCircleCheck, FaCircleExclamation, FaXmark};
use crate::Icon;

const DISMISS_AFTER_SECS: u64 = 4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[component]
pub fn Toast(kind: ToastKind, message: String, on_dismiss: EventHandler<()>) -> Element {
    // Schedule the auto-dismiss once, when the toast mounts.
    use_effect(move || {
        spawn(async move {
            #[cfg(target_arch = "wasm32")]
            gloo_timers::future::sleep(std::time::Duration::from_secs(DISMISS_AFTER_SECS)).await;
            #[cfg(not(target_arch = "wasm32"))]
            tokio::time::sleep(std::time::Duration::from_secs(DISMISS_AFTER_SECS)).await;

            on_dismiss.call(());
        });
    });

    let (class, icon) = match kind {
        ToastKind::Success => ("toast toast--success", rsx! { Icon { icon: FaCircleCheck, width: 16, height: 16 } }),
        ToastKind::Error => ("toast toast--error", rsx! { Icon { icon: FaCircleExclamation, width: 16, height: 16 } }),
    };

    rsx! {
        div {
            class: "{class}",
            role: "status",
            {icon}
            span { class: "toast-message", "{message}" }
            button {
                class: "toast-dismiss",
                onclick: move |_| on_dismiss.call(()),
                Icon { icon: FaXmark, width: 12, height: 12 }
            }
        }
    }
}
