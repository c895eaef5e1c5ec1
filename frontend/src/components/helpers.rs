//! Non-blocking notifications for the list components.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use common::feedback::Tone;

const TOAST_MILLIS: u32 = 3000;

/// Displays a temporary notification at the bottom of the screen.
///
/// The element is appended to `<body>` and removes itself after a few
/// seconds. Used when a list fails to load, since list hosts have no message
/// region of their own.
pub fn show_toast(message: &str, tone: Tone) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_text_content(Some(message));
    toast.set_attribute("role", "status").ok();
    let html_toast: HtmlElement = toast.unchecked_into();
    let style = html_toast.style();
    let background = match tone {
        Tone::Success => "rgba(25, 135, 84, 0.9)",
        Tone::Error => "rgba(220, 53, 69, 0.9)",
    };
    style.set_property("position", "fixed").ok();
    style.set_property("bottom", "20px").ok();
    style.set_property("left", "50%").ok();
    style.set_property("transform", "translateX(-50%)").ok();
    style.set_property("background", background).ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 20px").ok();
    style.set_property("border-radius", "4px").ok();
    style.set_property("z-index", "10000").ok();

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MILLIS).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}
