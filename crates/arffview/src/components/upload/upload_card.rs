use arffview_core::config::PICKER_ACCEPT;
use arffview_core::error::FileReadError;
use arffview_core::PendingFile;
use dioxus::html::FileData;
use dioxus::html::HasFileData;
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

const FILE_INPUT_ID: &str = "av-file-input";

/// Upload card: click to pick or drop a single ARFF file.
/// Uses a native rfd dialog on desktop, a hidden file input plus drag and drop
/// in the browser.
///
/// Only the first file of a selection is used. `on_file_selected` fires as
/// soon as the file is chosen, with its contents still unread, so selections
/// are reported in the order the user made them. The picker stays enabled
/// while an upload is in flight; a newer selection supersedes the pending one.
#[component]
pub fn UploadCard(loading: bool, on_file_selected: EventHandler<PendingFile>) -> Element {
    if cfg!(all(not(target_arch = "wasm32"), feature = "desktop")) {
        rsx! { DesktopUploadCard { loading, on_file_selected } }
    } else {
        rsx! { WebUploadCard { loading, on_file_selected } }
    }
}

#[component]
fn UploadPrompt(loading: bool, hint: String) -> Element {
    rsx! {
        if loading {
            div { class: "av-upload-status",
                span { class: "av-spinner" }
                span { class: "av-upload-status-text", "Processing file..." }
            }
        } else {
            div { class: "av-upload-content",
                div { class: "av-dropzone-icon", "📄" }
                div { class: "av-dropzone-title", "{hint}" }
                div { class: "av-dropzone-subtitle", "ARFF files only" }
            }
        }
    }
}

// =============================================================================
// Desktop Implementation (using rfd native dialogs)
// =============================================================================

#[cfg(all(not(target_arch = "wasm32"), feature = "desktop"))]
#[component]
fn DesktopUploadCard(loading: bool, on_file_selected: EventHandler<PendingFile>) -> Element {
    let mut is_picking = use_signal(|| false);

    let handle_select_file = move |_| {
        spawn(async move {
            use rfd::AsyncFileDialog;

            is_picking.set(true);

            let picked = AsyncFileDialog::new()
                .set_title("Select an ARFF file")
                .add_filter("ARFF", &["arff"])
                .pick_file()
                .await;

            is_picking.set(false);

            if let Some(handle) = picked {
                let file_name = handle.file_name();
                on_file_selected.call(PendingFile::new(file_name, async move {
                    Ok::<_, FileReadError>(handle.read().await)
                }));
            }
        });
    };

    rsx! {
        section { class: "av-upload-card",
            button {
                class: "av-dropzone",
                disabled: is_picking(),
                onclick: handle_select_file,
                UploadPrompt { loading, hint: "Click to choose a file" }
            }
        }
    }
}

// Stub for builds without the desktop feature (never actually rendered)
#[cfg(not(all(not(target_arch = "wasm32"), feature = "desktop")))]
#[component]
fn DesktopUploadCard(loading: bool, on_file_selected: EventHandler<PendingFile>) -> Element {
    let _ = (loading, on_file_selected);
    rsx! {}
}

// =============================================================================
// Web Implementation (hidden file input behind a label, plus drag and drop)
// =============================================================================

#[component]
fn WebUploadCard(loading: bool, on_file_selected: EventHandler<PendingFile>) -> Element {
    let mut is_dragging = use_signal(|| false);

    let select_first = move |files: Vec<FileData>| {
        let Some(file) = files.into_iter().next() else {
            return;
        };
        let file_name = file.name().to_string();
        on_file_selected.call(PendingFile::new(file_name, async move {
            file.read_bytes()
                .await
                .map(|bytes| bytes.to_vec())
                .map_err(|e| FileReadError::new(e.to_string()))
        }));
    };

    let handle_change = move |evt: FormEvent| select_first(evt.files());

    let handle_drop = move |evt: DragEvent| {
        evt.prevent_default();
        is_dragging.set(false);
        let files = evt.files();
        if files.len() > 1 {
            warn!("{} files dropped, only the first is uploaded", files.len());
        }
        select_first(files);
    };

    let dropzone_class = if is_dragging() {
        "av-dropzone av-dropzone--active"
    } else {
        "av-dropzone"
    };

    rsx! {
        section { class: "av-upload-card",
            input {
                id: FILE_INPUT_ID,
                r#type: "file",
                class: "av-hidden-input",
                accept: PICKER_ACCEPT,
                onchange: handle_change,
            }

            label {
                r#for: FILE_INPUT_ID,
                class: dropzone_class,
                ondragover: move |evt: DragEvent| {
                    evt.prevent_default();
                    is_dragging.set(true);
                },
                ondragleave: move |_| is_dragging.set(false),
                ondrop: handle_drop,
                UploadPrompt { loading, hint: "Click to upload or drag and drop" }
            }
        }
    }
}
