use dioxus::prelude::*;

/// Title banner above the upload card
#[component]
pub fn Header() -> Element {
    rsx! {
        header { class: "av-header",
            h1 { class: "av-header-title", "ARFF Viewer" }
            p { class: "av-header-subtitle",
                "Upload an ARFF file to inspect its attributes and data."
            }
        }
    }
}
