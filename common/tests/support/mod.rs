#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use async_trait::async_trait;
use common::error::ClientError;
use common::feedback::{Feedback, FormView, Notice};
use common::form::FormRequest;
use common::http::{HttpClient, HttpRequest, HttpResponse};

/// Replays canned answers in order and records every request it receives.
/// Each call yields to the runtime once before answering so two submissions
/// can overlap inside `tokio::join!`.
#[derive(Default)]
pub struct ScriptedClient {
    answers: RefCell<VecDeque<Result<HttpResponse, ClientError>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        self.answers
            .borrow_mut()
            .push_back(Ok(HttpResponse::new(status, body)));
        self
    }

    pub fn respond_redirected(self, status: u16, body: &str, target: &str) -> Self {
        let mut response = HttpResponse::new(status, body);
        response.redirected_to = Some(target.to_string());
        self.answers.borrow_mut().push_back(Ok(response));
        self
    }

    pub fn fail(self, reason: &str) -> Self {
        self.answers
            .borrow_mut()
            .push_back(Err(ClientError::NetworkFailure(reason.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl HttpClient for ScriptedClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        self.requests.borrow_mut().push(request);
        tokio::task::yield_now().await;
        self.answers
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::NetworkFailure("no scripted answer".to_string())))
    }
}

pub struct FakeForm {
    pub fields: Vec<(String, String)>,
    pub action: Option<String>,
    pub resets: Cell<usize>,
    pub busy: RefCell<Vec<bool>>,
}

impl FakeForm {
    pub fn new(fields: &[(&str, &str)]) -> Self {
        Self {
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            action: None,
            resets: Cell::new(0),
            busy: RefCell::new(Vec::new()),
        }
    }

    pub fn with_action(mut self, action: &str) -> Self {
        self.action = Some(action.to_string());
        self
    }
}

impl FormView for FakeForm {
    fn fields(&self) -> Result<FormRequest, ClientError> {
        FormRequest::from_pairs(self.fields.clone())
    }

    fn action(&self) -> Option<String> {
        self.action.clone()
    }

    fn reset(&self) {
        self.resets.set(self.resets.get() + 1);
    }

    fn set_busy(&self, busy: bool) {
        self.busy.borrow_mut().push(busy);
    }
}

#[derive(Default)]
pub struct RecordingFeedback {
    pub notices: RefCell<Vec<Notice>>,
    pub reloads: Cell<usize>,
    pub navigations: RefCell<Vec<String>>,
}

impl RecordingFeedback {
    pub fn last(&self) -> Option<Notice> {
        self.notices.borrow().last().cloned()
    }
}

impl Feedback for RecordingFeedback {
    fn show(&self, notice: &Notice) {
        self.notices.borrow_mut().push(notice.clone());
    }

    fn reload(&self) {
        self.reloads.set(self.reloads.get() + 1);
    }

    fn navigate(&self, url: &str) {
        self.navigations.borrow_mut().push(url.to_string());
    }
}
