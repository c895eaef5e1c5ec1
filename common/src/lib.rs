//! Browser-independent core of the PayMyBuddy client.
//!
//! Everything here runs against small traits (`HttpClient`, `FormView`,
//! `Feedback`, `NumericField`) so the submission workflows, identity
//! resolution, stepper rules and list rendering rules can be exercised on
//! the host without a live page. The `frontend` crate supplies the
//! web-sys / gloo-net implementations.

pub mod config;
pub mod controller;
pub mod error;
pub mod feedback;
pub mod form;
pub mod http;
pub mod identity;
pub mod listing;
pub mod model;
pub mod outcome;
pub mod pipeline;
pub mod requests;
pub mod stepper;
pub mod workflows;

pub use error::ClientError;
