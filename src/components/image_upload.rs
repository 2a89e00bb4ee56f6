//! Image Upload Component
//!
//! File chooser with a local preview. The chosen file is read into memory
//! and handed to the parent, which uploads it on submit.

use js_sys::Uint8Array;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement, Url};

use crate::api::{ApiError, ImageFile};

async fn read_file(file: &File) -> Result<ImageFile, ApiError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| ApiError::Browser(format!("{:?}", e)))?;
    Ok(ImageFile {
        name: file.name(),
        mime: file.type_(),
        bytes: Uint8Array::new(&buffer).to_vec(),
    })
}

#[component]
pub fn ImageUpload(
    #[prop(into)] on_file: Callback<Option<ImageFile>>,
    /// Image already stored on the item
    #[prop(optional, into)]
    current_url: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let (preview, set_preview) = signal::<Option<String>>(None);

    let on_change = move |ev: web_sys::Event| {
        let Some(input) = ev.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            set_preview.set(None);
            on_file.run(None);
            return;
        };

        if let Some(old) = preview.get_untracked() {
            let _ = Url::revoke_object_url(&old);
        }
        set_preview.set(Url::create_object_url_with_blob(&file).ok());

        spawn_local(async move {
            match read_file(&file).await {
                Ok(image) => {
                    log::debug!("picked image {} ({} bytes)", image.name, image.bytes.len());
                    on_file.run(Some(image));
                }
                Err(e) => {
                    log::error!("could not read {}: {}", file.name(), e);
                    on_file.run(None);
                }
            }
        });
    };

    let shown = move || preview.get().or_else(|| current_url.and_then(|url| url.get()));

    view! {
        <div class="space-y-2">
            <input type="file" accept="image/*" class="block w-full text-sm" on:change=on_change />
            <p class="text-xs text-gray-500">"Upload an image file (JPG, PNG, GIF, WebP)"</p>
            {move || shown().map(|src| view! {
                <img src=src alt="Preview" class="w-40 h-40 object-cover rounded border" />
            })}
        </div>
    }
}
