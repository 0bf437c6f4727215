use arffview_core::format::CellText;
use arffview_core::{Attribute, Row};
use dioxus::prelude::*;

/// Table of the current page.
///
/// Columns follow attribute order. Long text cells get the truncate class and
/// keep their full value in the `title` tooltip.
#[component]
pub fn DataTable(attributes: Vec<Attribute>, rows: ReadSignal<Vec<Row>>) -> Element {
    rsx! {
        div { class: "av-table-wrap",
            table { class: "av-table",
                thead {
                    tr {
                        for attribute in attributes.iter() {
                            th { key: "{attribute.name}", class: "av-th",
                                span { class: "av-th-name", "{attribute.name}" }
                                if let Some(label) = attribute.type_label() {
                                    span { class: "av-type-badge", "{label}" }
                                }
                            }
                        }
                    }
                }
                tbody {
                    for (idx, row) in rows.read().iter().enumerate() {
                        tr { key: "{idx}", class: "av-tr",
                            for attribute in attributes.iter() {
                                TableCell { cell: CellText::of(row, &attribute.name) }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TableCell(cell: CellText) -> Element {
    if cell.truncated {
        rsx! {
            td { class: "av-td av-td--truncate", title: "{cell.text}", "{cell.text}" }
        }
    } else {
        rsx! {
            td { class: "av-td av-td--nowrap", "{cell.text}" }
        }
    }
}
