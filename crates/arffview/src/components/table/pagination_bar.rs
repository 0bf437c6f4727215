use arffview_core::RowsPerPage;
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

/// Rows-per-page selector and first/previous/next/last navigation.
///
/// Buttons are disabled at the boundaries; the parent owns the page state.
#[component]
pub fn PaginationBar(
    page: usize,
    total_pages: usize,
    rows_per_page: RowsPerPage,
    on_first: EventHandler<()>,
    on_previous: EventHandler<()>,
    on_next: EventHandler<()>,
    on_last: EventHandler<()>,
    on_rows_per_page: EventHandler<RowsPerPage>,
) -> Element {
    let at_start = page <= 1;
    let at_end = page >= total_pages;

    let handle_rows_per_page = move |evt: FormEvent| match RowsPerPage::from_value(&evt.value()) {
        Some(rpp) => on_rows_per_page.call(rpp),
        None => warn!("Ignoring unknown page size {:?}", evt.value()),
    };

    rsx! {
        nav { class: "av-pagination",
            div { class: "av-page-size",
                label { r#for: "av-rows-per-page", class: "av-page-size-label", "Show" }
                select {
                    id: "av-rows-per-page",
                    class: "av-select",
                    value: "{rows_per_page.get()}",
                    onchange: handle_rows_per_page,
                    for size in RowsPerPage::ALL {
                        option {
                            key: "{size.get()}",
                            value: "{size.get()}",
                            selected: size == rows_per_page,
                            "{size}"
                        }
                    }
                }
            }

            div { class: "av-page-nav",
                button {
                    class: "av-page-button",
                    title: "First page",
                    disabled: at_start,
                    onclick: move |_| on_first.call(()),
                    "«"
                }
                button {
                    class: "av-page-button",
                    title: "Previous page",
                    disabled: at_start,
                    onclick: move |_| on_previous.call(()),
                    "‹"
                }
                span { class: "av-page-indicator",
                    "Page "
                    strong { "{page}" }
                    " of "
                    strong { "{total_pages}" }
                }
                button {
                    class: "av-page-button",
                    title: "Next page",
                    disabled: at_end,
                    onclick: move |_| on_next.call(()),
                    "›"
                }
                button {
                    class: "av-page-button",
                    title: "Last page",
                    disabled: at_end,
                    onclick: move |_| on_last.call(()),
                    "»"
                }
            }
        }
    }
}
