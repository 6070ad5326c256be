#![allow(non_snake_case)]

use dioxus::prelude::*;

use copytext::clipboard::{CopyMethod, CopyTarget};
use copytext::components::CopyButton;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting copytext demo");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let mut text = use_signal(|| "Hello from copytext".to_string());
    let mut as_html = use_signal(|| false);
    let mut legacy_first = use_signal(|| false);
    let mut auto = use_signal(|| false);

    let target = if *as_html.read() {
        let text = text.read().clone();
        CopyTarget::rich(text.clone(), format!("<strong>{}</strong>", text))
    } else {
        CopyTarget::from(text.read().clone())
    };

    let methods = if *legacy_first.read() {
        vec![CopyMethod::ExecCommand, CopyMethod::Clipboard]
    } else {
        vec![CopyMethod::Clipboard, CopyMethod::ExecCommand]
    };

    rsx! {
        div {
            class: "max-w-lg mx-auto p-6 flex flex-col gap-4",

            h1 { class: "text-xl font-bold", "copytext" }

            textarea {
                class: "w-full p-2 border border-border rounded-lg",
                rows: "4",
                value: "{text}",
                oninput: move |e| text.set(e.value()),
            }

            label {
                class: "flex items-center gap-2 text-sm",
                input {
                    r#type: "checkbox",
                    checked: *as_html.read(),
                    onchange: move |e| as_html.set(e.checked()),
                }
                "Copy as HTML too"
            }

            label {
                class: "flex items-center gap-2 text-sm",
                input {
                    r#type: "checkbox",
                    checked: *legacy_first.read(),
                    onchange: move |e| legacy_first.set(e.checked()),
                }
                "Try execCommand first"
            }

            label {
                class: "flex items-center gap-2 text-sm",
                input {
                    r#type: "checkbox",
                    checked: *auto.read(),
                    onchange: move |e| auto.set(e.checked()),
                }
                "Copy automatically on change"
            }

            CopyButton {
                target,
                methods,
                auto: *auto.read(),
            }
        }
    }
}
