use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement, KeyboardEvent};

use common::error::ClientError;
use common::stepper::{NumericField, Stepper};

use super::listen;

/// `NumericField` backed by the input's `value`, `min` and `max` properties.
pub struct InputField(pub HtmlInputElement);

impl NumericField for InputField {
    fn value(&self) -> String {
        self.0.value()
    }

    fn min(&self) -> String {
        self.0.min()
    }

    fn max(&self) -> String {
        self.0.max()
    }

    fn set_value(&self, value: &str) {
        self.0.set_value(value);
    }
}

/// Wires the chevrons and the arrow keys of `input` to a stepper.
///
/// # Arguments
/// * `input` - The numeric input; its `min`/`max` attributes are read on
///   every step, so later changes to them are honoured.
/// * `up` - Element whose click increments.
/// * `down` - Element whose click decrements.
///
/// # Returns
/// `MissingDomDependency` if a listener could not be registered.
pub fn bind(input: HtmlInputElement, up: Element, down: Element) -> Result<(), ClientError> {
    let stepper = Rc::new(Stepper::new(InputField(input.clone())));

    let on_up = stepper.clone();
    listen(&up, "click", move |event: Event| {
        event.prevent_default();
        on_up.increment();
    })?;

    let on_down = stepper.clone();
    listen(&down, "click", move |event: Event| {
        event.prevent_default();
        on_down.decrement();
    })?;

    listen(&input, "keydown", move |event: Event| {
        if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
            if stepper.handle_key(&key_event.key()) {
                event.prevent_default();
            }
        }
    })
}
