use dioxus::prelude::*;

/// Summary of the loaded file: name, attribute count, row count.
///
/// `reported_rows` is the server's own count, shown only when it differs from
/// the rows received.
#[component]
pub fn StatsStrip(
    file_name: Option<String>,
    attribute_count: usize,
    row_count: usize,
    reported_rows: Option<usize>,
) -> Element {
    rsx! {
        div { class: "av-stats",
            if let Some(name) = file_name {
                div { class: "av-stat",
                    span { class: "av-stat-label", "File" }
                    span { class: "av-stat-value av-stat-value--mono", "{name}" }
                }
            }
            div { class: "av-stat",
                span { class: "av-stat-label", "Attributes" }
                span { class: "av-stat-value", "{attribute_count}" }
            }
            div { class: "av-stat",
                span { class: "av-stat-label", "Rows" }
                span { class: "av-stat-value", "{row_count}" }
                if let Some(reported) = reported_rows {
                    span { class: "av-stat-note", "server reported {reported}" }
                }
            }
        }
    }
}
