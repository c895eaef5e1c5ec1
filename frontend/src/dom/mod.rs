//! Thin web-sys helpers and the DOM-side implementations of the core traits.

pub mod binding;
pub mod feedback;
pub mod form;
pub mod stepper;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, Window};

use common::error::ClientError;

pub fn window() -> Result<Window, ClientError> {
    web_sys::window().ok_or_else(|| ClientError::MissingDomDependency("window".to_string()))
}

pub fn document() -> Result<Document, ClientError> {
    window()?
        .document()
        .ok_or_else(|| ClientError::MissingDomDependency("document".to_string()))
}

pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<T>().ok())
}

pub fn query<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<T>().ok())
}

/// Turns a lookup into a `MissingDomDependency` naming `what`.
pub fn require<T>(found: Option<T>, what: &str) -> Result<T, ClientError> {
    found.ok_or_else(|| ClientError::MissingDomDependency(what.to_string()))
}

/// Registers `handler` for the lifetime of the page.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), ClientError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|_| ClientError::MissingDomDependency(format!("`{}` listener", event)))?;
    closure.forget();
    Ok(())
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}

pub fn reload() {
    if let Some(window) = web_sys::window() {
        window.location().reload().ok();
    }
}

pub fn navigate(url: &str) {
    if let Some(window) = web_sys::window() {
        window.location().set_href(url).ok();
    }
}
