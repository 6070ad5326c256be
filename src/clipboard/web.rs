//! Browser implementation of [`ClipboardPlatform`]
//!
//! The async clipboard entry points are looked up reflectively so a browser
//! without `ClipboardItem` or `navigator.clipboard.write` is reported as
//! unsupported instead of throwing.

use async_trait::async_trait;
use js_sys::{Array, Function, Object, Reflect, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Blob, BlobPropertyBag, Document, HtmlDocument, HtmlElement, HtmlTextAreaElement, Range,
};

use super::blob::ClipboardPayload;
use super::errors::{ClipboardError, ClipboardResult};
use super::platform::{ClipboardPlatform, SelectionGuard};

/// Keeps the staged field out of view without `display: none`, which would
/// make it unselectable
const HIDDEN_FIELD_STYLE: &str = "position: fixed; top: 0; left: -9999px; \
    width: 1px; height: 1px; opacity: 0; border: 0; padding: 0;";

#[derive(Debug, Clone, Copy, Default)]
pub struct WebPlatform;

impl WebPlatform {
    fn window() -> ClipboardResult<web_sys::Window> {
        web_sys::window().ok_or_else(|| ClipboardError::unsupported("No window"))
    }

    fn document() -> ClipboardResult<Document> {
        Self::window()?
            .document()
            .ok_or_else(|| ClipboardError::unsupported("No document"))
    }

    /// `navigator.clipboard`, if the browser exposes it
    fn clipboard() -> Option<JsValue> {
        let navigator = web_sys::window()?.navigator();
        Reflect::get(&navigator, &JsValue::from_str("clipboard"))
            .ok()
            .filter(|c| !c.is_undefined() && !c.is_null())
    }

    /// `window.ClipboardItem` constructor, if present
    fn clipboard_item_constructor() -> Option<Function> {
        let window = web_sys::window()?;
        Reflect::get(&window, &JsValue::from_str("ClipboardItem"))
            .ok()
            .and_then(|ctor| ctor.dyn_into::<Function>().ok())
    }

    fn clipboard_write_fn(clipboard: &JsValue) -> Option<Function> {
        Reflect::get(clipboard, &JsValue::from_str("write"))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok())
    }

    fn to_blob(data: &[u8], mime_type: &str) -> ClipboardResult<Blob> {
        let bytes = Uint8Array::from(data);
        let parts = Array::of1(&bytes);
        let options = BlobPropertyBag::new();
        options.set_type(mime_type);
        Ok(Blob::new_with_u8_array_sequence_and_options(&parts, &options)?)
    }

    fn save_selection(window: &web_sys::Window) -> Vec<Range> {
        let Ok(Some(selection)) = window.get_selection() else {
            return Vec::new();
        };
        (0..selection.range_count())
            .filter_map(|i| selection.get_range_at(i).ok())
            .collect()
    }

    fn restore_selection(window: &web_sys::Window, ranges: &[Range]) {
        if let Ok(Some(selection)) = window.get_selection() {
            let _ = selection.remove_all_ranges();
            for range in ranges {
                let _ = selection.add_range(range);
            }
        }
    }
}

#[async_trait(?Send)]
impl ClipboardPlatform for WebPlatform {
    async fn supports_modern_write(&self) -> bool {
        Self::clipboard_item_constructor().is_some()
            && Self::clipboard()
                .as_ref()
                .and_then(Self::clipboard_write_fn)
                .is_some()
    }

    async fn write(&self, payload: &ClipboardPayload) -> ClipboardResult<()> {
        let ctor = Self::clipboard_item_constructor()
            .ok_or_else(|| ClipboardError::unsupported("ClipboardItem is not available"))?;
        let clipboard = Self::clipboard()
            .ok_or_else(|| ClipboardError::unsupported("navigator.clipboard is not available"))?;
        let write = Self::clipboard_write_fn(&clipboard).ok_or_else(|| {
            ClipboardError::unsupported("navigator.clipboard.write is not available")
        })?;

        let entries = Object::new();
        for part in &payload.parts {
            let blob = Self::to_blob(&part.data, part.mime_type)?;
            Reflect::set(&entries, &JsValue::from_str(part.mime_type), &blob)?;
        }

        let item = Reflect::construct(&ctor, &Array::of1(&entries))?;
        let promise = write
            .call1(&clipboard, &Array::of1(&item))?
            .dyn_into::<js_sys::Promise>()
            .map_err(|_| ClipboardError::platform("clipboard.write did not return a promise"))?;

        wasm_bindgen_futures::JsFuture::from(promise).await?;
        Ok(())
    }

    fn select_text(&self, text: &str) -> ClipboardResult<SelectionGuard> {
        let window = Self::window()?;
        let document = Self::document()?;
        let body = document
            .body()
            .ok_or_else(|| ClipboardError::unsupported("No document body"))?;

        let previous_focus = document
            .active_element()
            .and_then(|e| e.dyn_into::<HtmlElement>().ok());
        let previous_ranges = Self::save_selection(&window);

        let field = document
            .create_element("textarea")?
            .dyn_into::<HtmlTextAreaElement>()
            .map_err(|_| ClipboardError::platform("Failed to create text field"))?;
        field.set_value(text);
        field.set_attribute("style", HIDDEN_FIELD_STYLE)?;
        field.set_attribute("aria-hidden", "true")?;

        body.append_child(&field)?;
        let _ = field.focus();
        field.select();

        Ok(SelectionGuard::new(move || {
            field.remove();
            if let Some(element) = previous_focus {
                let _ = element.focus();
            }
            Self::restore_selection(&window, &previous_ranges);
        }))
    }

    fn exec_copy(&self) -> ClipboardResult<bool> {
        let document = Self::document()?
            .dyn_into::<HtmlDocument>()
            .map_err(|_| ClipboardError::unsupported("Document does not support execCommand"))?;
        Ok(document.exec_command("copy")?)
    }
}
