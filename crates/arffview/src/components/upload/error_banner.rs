use dioxus::prelude::*;

/// Banner shown below the upload card when the last selection failed.
///
/// `detail` is the server's secondary explanation, if it sent one.
#[component]
pub fn ErrorBanner(message: String, detail: Option<String>) -> Element {
    rsx! {
        div { class: "av-error", role: "alert",
            span { class: "av-error-icon", "⚠" }
            div { class: "av-error-body",
                p { class: "av-error-title", "Could not process the file" }
                p { class: "av-error-message", "{message}" }
                if let Some(detail) = detail {
                    p { class: "av-error-detail", "{detail}" }
                }
            }
        }
    }
}
