use dioxus::prelude::*;

use crate::clipboard::{ChangeStatus, CopyMethod, CopyTarget, CopyTextOptions};
use crate::hooks::use_copy_text;

/// How long the "Copied!" label stays after a successful copy
const COPIED_FLASH_MS: u32 = 2000;

/// Reusable copy-to-clipboard button
#[component]
pub fn CopyButton(
    target: CopyTarget,
    #[props(default = CopyMethod::defaults())] methods: Vec<CopyMethod>,
    #[props(default = false)] auto: bool,
    #[props(default = false)] disabled: bool,
    label: Option<String>,
) -> Element {
    let copier = use_copy_text(
        CopyTextOptions::new(target.clone())
            .methods(methods)
            .auto(auto)
            .disabled(disabled),
    );
    let mut copied = use_signal(|| false);

    // Flash "Copied!" then fall back to the normal label
    use_effect(move || {
        if *copier.status.read() != Some(ChangeStatus::Done) {
            return;
        }
        copied.set(true);
        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(COPIED_FLASH_MS).await;
            copied.set(false);
        });
    });

    let state = copier.state();
    let status = state.status;
    let error_message = state.error_message();
    let label = label.unwrap_or_else(|| "Copy to clipboard".to_string());
    let copy = copier.copy;

    rsx! {
        div {
            class: "flex flex-col gap-1",

            button {
                class: "px-4 py-2 rounded-lg border hover:bg-accent transition disabled:opacity-50",
                disabled: status == Some(ChangeStatus::Loading),
                onclick: move |_| copy.call(target.clone()),
                if status == Some(ChangeStatus::Loading) {
                    "Copying..."
                } else if *copied.read() {
                    "Copied!"
                } else {
                    "{label}"
                }
            }

            if let Some(message) = error_message {
                p {
                    class: "text-xs text-destructive",
                    role: "alert",
                    "{message}"
                }
            }
        }
    }
}
