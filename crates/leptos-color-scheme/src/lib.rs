//! Leptos Color Scheme Utilities
//!
//! Reads and watches the platform `prefers-color-scheme` media query.
//! Subscriptions are scoped: dropping one unregisters its listener.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Media query matched when the platform prefers a dark color scheme
pub const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

fn dark_query_list() -> Option<web_sys::MediaQueryList> {
    web_sys::window()?.match_media(DARK_QUERY).ok().flatten()
}

/// Whether the platform currently reports a dark color-scheme preference.
///
/// Outside a browser, or where `matchMedia` is missing, this reports `false`.
pub fn prefers_dark() -> bool {
    dark_query_list().map(|list| list.matches()).unwrap_or(false)
}

/// A live `change` listener on the dark color-scheme media query
pub struct ColorSchemeSubscription {
    list: web_sys::MediaQueryList,
    callback: Closure<dyn FnMut(web_sys::MediaQueryListEvent)>,
}

impl Drop for ColorSchemeSubscription {
    fn drop(&mut self) {
        let removed = self
            .list
            .remove_event_listener_with_callback("change", self.callback.as_ref().unchecked_ref());
        match removed {
            Ok(()) => log::debug!("[COLOR-SCHEME] listener removed"),
            Err(err) => log::warn!("[COLOR-SCHEME] could not remove listener: {:?}", err),
        }
    }
}

/// Subscribe to platform color-scheme changes.
///
/// `on_change` receives `true` when the platform switches to dark.
/// Returns `None` when no media query list is available.
pub fn subscribe<F>(mut on_change: F) -> Option<ColorSchemeSubscription>
where
    F: FnMut(bool) + 'static,
{
    let list = dark_query_list()?;
    let callback = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
        move |ev: web_sys::MediaQueryListEvent| on_change(ev.matches()),
    );
    let registered =
        list.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref());
    if let Err(err) = registered {
        log::warn!("[COLOR-SCHEME] could not register listener: {:?}", err);
        return None;
    }
    log::debug!("[COLOR-SCHEME] listener registered");
    Some(ColorSchemeSubscription { list, callback })
}

/// Subscribe for the lifetime of the current reactive owner.
///
/// The listener is removed when the owner is cleaned up (for example when
/// the component that called this is unmounted).
pub fn watch_prefers_dark<F>(on_change: F)
where
    F: FnMut(bool) + 'static,
{
    let Some(subscription) = subscribe(on_change) else {
        return;
    };
    let held = StoredValue::new_local(Some(subscription));
    on_cleanup(move || {
        held.update_value(|sub| {
            sub.take();
        });
    });
}

/// Add or remove a class on the document root (`<html>`)
pub fn set_root_class(class: &str, enabled: bool) {
    let root = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element());
    if let Some(root) = root {
        if let Err(err) = root.class_list().toggle_with_force(class, enabled) {
            log::warn!("[COLOR-SCHEME] could not toggle root class {:?}: {:?}", class, err);
        }
    }
}

/// Whether the document root currently carries `class`
pub fn root_has_class(class: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
        .map(|root| root.class_list().contains(class))
        .unwrap_or(false)
}
