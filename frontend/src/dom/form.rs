//! `FormView` over real DOM elements.
//!
//! Two shapes exist on the site:
//! - a `<form>` whose successful controls are read through `FormData`, so
//!   the captured fields match what a native submission would send;
//! - loose inputs (the profile page), read one by one and keyed by `name`
//!   or `id`.
//!
//! The optional trigger element is what gets disabled while a submission
//! is in flight.

use wasm_bindgen::JsCast;
use web_sys::{Element, FormData, HtmlFormElement, HtmlInputElement};

use common::error::ClientError;
use common::feedback::FormView;
use common::form::FormRequest;

/// Where a controller reads its fields from.
pub enum FieldScope {
    /// Every successful control of a `<form>`, as `FormData` sees them.
    Form(HtmlFormElement),
    /// Loose inputs, keyed by `name` or, failing that, `id`.
    Inputs(Vec<HtmlInputElement>),
}

/// Fields plus the element that starts a submission.
pub struct DomForm {
    scope: FieldScope,
    trigger: Option<Element>,
}

impl DomForm {
    /// # Arguments
    /// * `scope` - Where fields are read from.
    /// * `trigger` - Button toggled by `set_busy`; `None` when the form has
    ///   no dedicated button.
    pub fn new(scope: FieldScope, trigger: Option<Element>) -> Self {
        Self { scope, trigger }
    }
}

impl FormView for DomForm {
    fn fields(&self) -> Result<FormRequest, ClientError> {
        match &self.scope {
            FieldScope::Form(form) => form_entries(form),
            FieldScope::Inputs(inputs) => {
                FormRequest::from_pairs(inputs.iter().map(|input| (input_name(input), input.value())))
            }
        }
    }

    fn action(&self) -> Option<String> {
        match &self.scope {
            // The `action` property resolves to the page URL when the
            // attribute is missing, so read the attribute itself.
            FieldScope::Form(form) => form
                .get_attribute("action")
                .filter(|action| !action.trim().is_empty()),
            FieldScope::Inputs(_) => None,
        }
    }

    fn reset(&self) {
        match &self.scope {
            FieldScope::Form(form) => form.reset(),
            FieldScope::Inputs(inputs) => inputs.iter().for_each(|input| input.set_value("")),
        }
    }

    fn set_busy(&self, busy: bool) {
        if let Some(trigger) = &self.trigger {
            trigger.toggle_attribute_with_force("disabled", busy).ok();
            trigger
                .set_attribute("aria-busy", if busy { "true" } else { "false" })
                .ok();
        }
    }
}

fn input_name(input: &HtmlInputElement) -> String {
    let name = input.name();
    if name.is_empty() {
        input.id()
    } else {
        name
    }
}

/// Reads every string entry of `form` in document order.
///
/// Repeated names surface as `ClientError::FieldConflict` through
/// `FormRequest::from_pairs`.
fn form_entries(form: &HtmlFormElement) -> Result<FormRequest, ClientError> {
    let unreadable = || ClientError::MissingDomDependency("readable form data".to_string());

    let data = FormData::new_with_form(form).map_err(|_| unreadable())?;
    let entries = js_sys::try_iter(data.as_ref())
        .ok()
        .flatten()
        .ok_or_else(unreadable)?;

    let mut pairs = Vec::new();
    for entry in entries {
        let pair: js_sys::Array = entry.map_err(|_| unreadable())?.unchecked_into();
        // File inputs yield `File` objects, which have no place in these bodies.
        if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            pairs.push((name, value));
        }
    }
    FormRequest::from_pairs(pairs)
}
