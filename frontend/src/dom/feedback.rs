//! `Feedback` over the message regions the pages already render.
//!
//! Each page shows results its own way, so the surface is picked when the
//! feature is mounted rather than inferred from the notice.

use web_sys::{Element, HtmlElement};

use common::feedback::{Feedback, Notice, Tone};

/// The ways the site's pages present a notice.
pub enum MessageSurface {
    /// Bootstrap alert that is hidden until the first notice.
    AlertBox(HtmlElement),
    /// Region whose content is replaced by one green or red line.
    ColoredLine(Element),
    /// Success text in a hidden element; errors go to a browser alert.
    StatusLine(HtmlElement),
    /// Browser alert for every notice.
    Dialog,
}

impl Feedback for MessageSurface {
    fn show(&self, notice: &Notice) {
        match self {
            MessageSurface::AlertBox(element) => {
                element.set_text_content(Some(&notice.text));
                element.set_class_name(match notice.tone {
                    Tone::Success => "alert alert-success",
                    Tone::Error => "alert alert-danger",
                });
                element.style().set_property("display", "block").ok();
            }
            MessageSurface::ColoredLine(element) => {
                let Some(document) = element.owner_document() else {
                    return;
                };
                let Ok(line) = document.create_element("div") else {
                    return;
                };
                let color = match notice.tone {
                    Tone::Success => "green",
                    Tone::Error => "red",
                };
                line.set_text_content(Some(&notice.text));
                line.set_attribute("style", &format!("color: {};", color)).ok();
                element.set_inner_html("");
                element.append_child(&line).ok();
            }
            MessageSurface::StatusLine(element) => match notice.tone {
                Tone::Success => {
                    element.set_text_content(Some(&notice.text));
                    element.style().set_property("display", "block").ok();
                }
                Tone::Error => {
                    element.style().set_property("display", "none").ok();
                    super::alert(&notice.text);
                }
            },
            MessageSurface::Dialog => super::alert(&notice.text),
        }
    }

    fn reload(&self) {
        super::reload();
    }

    fn navigate(&self, url: &str) {
        super::navigate(url);
    }
}
