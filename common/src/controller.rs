//! The Form Submission Controller: one guarded path from a user action to a
//! rendered outcome.

use std::cell::Cell;
use std::rc::Rc;

use crate::error::ClientError;
use crate::feedback::{AfterSubmit, Feedback, FormView};
use crate::http::HttpClient;
use crate::identity::IdentityResolver;
use crate::outcome::SubmissionOutcome;
use crate::pipeline::SubmissionPipeline;
use crate::workflows::Workflow;

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitStatus {
    /// Another submission of the same form was still in flight.
    Ignored,
    /// Stopped before any request was sent.
    Aborted(ClientError),
    Completed(SubmissionOutcome),
}

pub struct SubmissionController<C> {
    pipeline: SubmissionPipeline<C>,
    identity: Rc<dyn IdentityResolver>,
    workflow: Box<dyn Workflow>,
    in_flight: Cell<bool>,
}

/// Clears the in-flight flag and re-enables the trigger on every exit path.
struct InFlight<'a> {
    flag: &'a Cell<bool>,
    form: &'a dyn FormView,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
        self.form.set_busy(false);
    }
}

impl<C: HttpClient> SubmissionController<C> {
    pub fn new(client: C, identity: Rc<dyn IdentityResolver>, workflow: Box<dyn Workflow>) -> Self {
        Self {
            pipeline: SubmissionPipeline::new(client),
            identity,
            workflow,
            in_flight: Cell::new(false),
        }
    }

    pub fn workflow_name(&self) -> &'static str {
        self.workflow.name()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    /// Runs one submission of `form`. Re-entry while a previous call has
    /// not finished returns `SubmitStatus::Ignored` without side effects.
    pub async fn submit(&self, form: &dyn FormView, feedback: &dyn Feedback) -> SubmitStatus {
        if self.in_flight.replace(true) {
            log::debug!("{}: submission already in flight, ignored", self.workflow.name());
            return SubmitStatus::Ignored;
        }
        form.set_busy(true);
        let _guard = InFlight {
            flag: &self.in_flight,
            form,
        };

        match self.run(form, feedback).await {
            Ok(outcome) => SubmitStatus::Completed(outcome),
            Err(err) => {
                log::warn!("{}: not sent: {}", self.workflow.name(), err);
                feedback.show(&self.workflow.abort_notice(&err));
                SubmitStatus::Aborted(err)
            }
        }
    }

    async fn run(
        &self,
        form: &dyn FormView,
        feedback: &dyn Feedback,
    ) -> Result<SubmissionOutcome, ClientError> {
        let identity = if self.workflow.requires_identity() {
            Some(self.identity.resolve().await?)
        } else {
            None
        };

        let fields = form.fields()?;
        let action = form.action();
        let (endpoint, request) =
            self.workflow
                .prepare(fields, identity.as_ref(), action.as_deref())?;

        let outcome = self.pipeline.submit(&endpoint, &request).await?;
        let rendering = self.workflow.render(&outcome);
        feedback.show(&rendering.notice);
        match rendering.after {
            AfterSubmit::Stay => {}
            AfterSubmit::ResetForm => form.reset(),
            AfterSubmit::Reload => feedback.reload(),
            AfterSubmit::Navigate(url) => feedback.navigate(&url),
        }
        Ok(outcome)
    }
}
