//! Connects DOM events to a `SubmissionController`.
//!
//! When a `<form>` exists its `submit` event is the only path into the
//! controller; a separate trigger element re-enters through
//! `requestSubmit()`, so a click and the submit it causes are one action.

use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, HtmlFormElement};

use common::controller::{SubmissionController, SubmitStatus};
use common::error::ClientError;

use super::feedback::MessageSurface;
use super::form::DomForm;
use super::listen;
use crate::http::GlooClient;

#[derive(Clone)]
pub struct Binding {
    controller: Rc<SubmissionController<GlooClient>>,
    form: Rc<DomForm>,
    feedback: Rc<MessageSurface>,
}

impl Binding {
    pub fn new(
        controller: SubmissionController<GlooClient>,
        form: DomForm,
        feedback: MessageSurface,
    ) -> Self {
        Self {
            controller: Rc::new(controller),
            form: Rc::new(form),
            feedback: Rc::new(feedback),
        }
    }

    /// Runs one submission in the background. Re-entry is filtered by the
    /// controller, so calling this twice in a row sends one request.
    fn fire(&self) {
        let Binding {
            controller,
            form,
            feedback,
        } = self.clone();
        spawn_local(async move {
            match controller.submit(form.as_ref(), feedback.as_ref()).await {
                SubmitStatus::Completed(outcome) => {
                    log::info!("{}: {:?}", controller.workflow_name(), outcome)
                }
                SubmitStatus::Aborted(err) => {
                    log::debug!("{}: aborted: {}", controller.workflow_name(), err)
                }
                SubmitStatus::Ignored => {}
            }
        });
    }

    /// Registers the listeners that lead to `fire`.
    ///
    /// # Arguments
    /// * `form` - When present, its `submit` event is the only entry point.
    /// * `trigger` - A button outside the native submit path. With a form it
    ///   goes through `requestSubmit()`; without one its click fires directly.
    ///
    /// # Returns
    /// `MissingDomDependency` when neither element is given or a listener
    /// cannot be added.
    pub fn attach(
        self,
        form: Option<HtmlFormElement>,
        trigger: Option<Element>,
    ) -> Result<(), ClientError> {
        match (form, trigger) {
            (Some(form), trigger) => {
                let on_submit = self.clone();
                listen(&form, "submit", move |event: Event| {
                    event.prevent_default();
                    on_submit.fire();
                })?;

                if let Some(trigger) = trigger {
                    let on_click = self;
                    let target = form.clone();
                    listen(&trigger, "click", move |event: Event| {
                        event.prevent_default();
                        if target.request_submit().is_err() {
                            log::warn!("requestSubmit unavailable, submitting directly");
                            on_click.fire();
                        }
                    })?;
                }
                Ok(())
            }
            (None, Some(trigger)) => listen(&trigger, "click", move |event: Event| {
                event.prevent_default();
                self.fire();
            }),
            (None, None) => Err(ClientError::MissingDomDependency(
                "form or trigger element".to_string(),
            )),
        }
    }
}
