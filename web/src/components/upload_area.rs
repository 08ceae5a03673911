//! Upload area component
//!
//! Produces either a local file (with a data-URL preview) or an image
//! URL string and hands it upward. No network calls happen here.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, File, FileReader};

#[component]
pub fn UploadArea<FF, FU>(
    busy: Signal<bool>,
    on_file_selected: FF,
    on_url_submitted: FU,
) -> impl IntoView
where
    FF: Fn(File, String) + 'static + Clone + Send,
    FU: Fn(String) + 'static + Clone + Send,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let (url_text, set_url_text) = signal(String::new());

    let on_drop = {
        let on_file_selected = on_file_selected.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if busy.get_untracked() {
                return;
            }

            if let Some(dt) = ev.data_transfer() {
                if let Some(files) = dt.files() {
                    if let Some(file) = files.get(0) {
                        read_preview(file, on_file_selected.clone());
                    }
                }
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if !busy.get_untracked() {
            set_is_dragover.set(true);
        }
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = {
        let on_file_selected = on_file_selected.clone();
        move |_| {
            if busy.get_untracked() {
                return;
            }

            // open the file picker
            let document = web_sys::window().unwrap().document().unwrap();
            let input: web_sys::HtmlInputElement = document
                .create_element("input")
                .unwrap()
                .dyn_into()
                .unwrap();
            input.set_type("file");
            input.set_accept("image/*");

            let on_file_selected = on_file_selected.clone();
            let picker = input.clone();
            let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Some(files) = picker.files() {
                    if let Some(file) = files.get(0) {
                        read_preview(file, on_file_selected.clone());
                    }
                }
            }) as Box<dyn FnMut(_)>);

            input.set_onchange(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
            input.click();
        }
    };

    let submit_url = {
        let on_url_submitted = on_url_submitted.clone();
        move |_| {
            if busy.get_untracked() {
                return;
            }
            let url = url_text.get_untracked().trim().to_string();
            if url.is_empty() {
                return;
            }
            on_url_submitted(url);
            set_url_text.set(String::new());
        }
    };

    view! {
        <div class="upload-section">
            <div
                class=move || {
                    let mut classes = vec!["upload-area"];
                    if is_dragover.get() {
                        classes.push("dragover");
                    }
                    if busy.get() {
                        classes.push("disabled");
                    }
                    classes.join(" ")
                }
                on:drop=on_drop
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:click=on_click
            >
                <div class="upload-icon">"🥕"</div>
                <p>"Drag & drop a produce photo, or click to choose"</p>
                <p class="text-muted">"Supported formats: JPEG, PNG"</p>
            </div>

            <div class="url-form">
                <input
                    type="text"
                    class="url-input"
                    placeholder="...or paste an image URL"
                    prop:value=url_text
                    prop:disabled=move || busy.get()
                    on:input=move |ev| set_url_text.set(event_target_value(&ev))
                />
                <button
                    class="btn btn-secondary"
                    disabled=move || busy.get()
                    on:click=submit_url
                >
                    "Use URL"
                </button>
            </div>
        </div>
    }
}

/// Reads the file as a data URL for the preview, then reports the
/// selection upward together with the original handle.
fn read_preview<F>(file: File, on_file_selected: F)
where
    F: Fn(File, String) + 'static,
{
    let reader = FileReader::new().unwrap();

    let reader_clone = reader.clone();
    let file_clone = file.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            if let Some(data_url) = result.as_string() {
                on_file_selected(file_clone.clone(), data_url);
            }
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let _ = reader.read_as_data_url(&file);
}
