use dioxus::prelude::*;

/// Footer noting where parsing happens
#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "av-footer",
            span { class: "av-footer-text",
                "Files are parsed by the remote service. Nothing is stored in the browser."
            }
        }
    }
}
