//! UI-facing seams of a submission: where fields come from and where the
//! result is shown.

use crate::error::ClientError;
use crate::form::FormRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

/// A message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub tone: Tone,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            tone: Tone::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            tone: Tone::Error,
            text: text.into(),
        }
    }
}

/// Page action that follows a rendered outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AfterSubmit {
    Stay,
    ResetForm,
    /// Displayed data is stale, e.g. the transaction list after a transfer.
    Reload,
    Navigate(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendering {
    pub notice: Notice,
    pub after: AfterSubmit,
}

impl Rendering {
    pub fn new(notice: Notice, after: AfterSubmit) -> Self {
        Self { notice, after }
    }

    pub fn stay(notice: Notice) -> Self {
        Self::new(notice, AfterSubmit::Stay)
    }
}

/// The form a controller is bound to.
pub trait FormView {
    /// Current name/value pairs.
    fn fields(&self) -> Result<FormRequest, ClientError>;

    /// The form's declared `action` attribute, if any.
    fn action(&self) -> Option<String> {
        None
    }

    fn reset(&self);

    /// Disables or re-enables the trigger while a request is in flight.
    fn set_busy(&self, busy: bool);
}

/// The message region and page-level actions of a controller.
pub trait Feedback {
    fn show(&self, notice: &Notice);
    fn reload(&self);
    fn navigate(&self, url: &str);
}
