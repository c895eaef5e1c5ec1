//! Discovers which features the current page renders and attaches them.
//!
//! Pages are server-rendered; each one carries a subset of the forms and
//! lists below. A feature whose anchor element is absent is skipped, a
//! feature that is only partially present is reported as an error and left
//! inert. Nothing here stops the other features from attaching.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement};

use common::config::{Endpoints, PageConfig};
use common::controller::SubmissionController;
use common::error::ClientError;
use common::identity::{resolver_for, IdentityResolver};
use common::workflows::{AddRelation, CreateTransaction, Register, UpdateProfile, Workflow};

use crate::components::relations::select::{RelationSelect, RelationSelectProps};
use crate::components::transactions::history::{TransactionHistory, TransactionHistoryProps};
use crate::components::IdentityHandle;
use crate::dom::binding::Binding;
use crate::dom::feedback::MessageSurface;
use crate::dom::form::{DomForm, FieldScope};
use crate::dom::{by_id, listen, query, require, stepper};
use crate::http::GlooClient;

const USER_ID: &str = "userId";
const USER_ID_ATTR: &str = "data-user-id";
const MESSAGE: &str = "message";
const REGISTER_FORM: &str = "registerForm";
const ADD_RELATION_FORM: &str = "addRelationForm";
const ADD_BUTTON: &str = "addButton";
const TRANSACTION_FORM: &str = "transactionForm";
const AMOUNT: &str = "amount";
const CHEVRON_UP: &str = ".chevron-up";
const CHEVRON_DOWN: &str = ".chevron-down";
const RELATION_SELECT: &str = "relationSelect";
const HISTORY_BODY: &str = "#transactionsTable tbody";
const PROFILE_SUBMIT: &str = "submitButton";
const PROFILE_USER_NAME: &str = "userName";
const PROFILE_EMAIL: &str = "email";
const PROFILE_PASSWORD: &str = "password";
const PROFILE_SUCCESS: &str = "successMessage";
const SUBMIT_BUTTON: &str = "[type=submit]";

/// Reads `PageConfig` from the `data-*` attributes of `<body>`.
pub fn read_config(document: &Document) -> (PageConfig, Vec<String>) {
    let body = document.body();
    let anchor_present = document.get_element_by_id(USER_ID).is_some();
    PageConfig::from_attributes(
        |name| body.as_ref().and_then(|body| body.get_attribute(name)),
        anchor_present,
    )
}

/// Attaches every feature found on the page to one shared resolver.
pub fn mount(document: &Document, config: &PageConfig) {
    let endpoints = config.endpoints();
    let static_attribute = by_id::<Element>(document, USER_ID)
        .and_then(|anchor| anchor.get_attribute(USER_ID_ATTR));
    let identity = resolver_for(config.identity, static_attribute, GlooClient, &endpoints);
    log::debug!("identity strategy: {:?}", identity.strategy());

    let page = Page {
        document,
        endpoints,
        identity,
    };
    report("registration form", page.register());
    report("add relation form", page.add_relation());
    report("transaction form", page.transaction());
    report("profile form", page.profile());
    report("amount stepper", page.stepper());
    report("relation dropdown", page.relation_select());
    report("transaction history", page.history());
}

fn report(feature: &str, attached: Result<bool, ClientError>) {
    match attached {
        Ok(true) => log::info!("{} attached", feature),
        Ok(false) => log::debug!("{} not on this page", feature),
        Err(err) => log::error!("{} left inert: {}", feature, err),
    }
}

struct Page<'a> {
    document: &'a Document,
    endpoints: Endpoints,
    identity: Rc<dyn IdentityResolver>,
}

impl Page<'_> {
    fn controller(&self, workflow: impl Workflow + 'static) -> SubmissionController<GlooClient> {
        SubmissionController::new(GlooClient, self.identity.clone(), Box::new(workflow))
    }

    fn register(&self) -> Result<bool, ClientError> {
        let Some(form) = by_id::<HtmlFormElement>(self.document, REGISTER_FORM) else {
            return Ok(false);
        };
        let message = require(by_id::<Element>(self.document, MESSAGE), "#message")?;

        let trigger = submit_button(&form);
        Binding::new(
            self.controller(Register::new(self.endpoints.clone())),
            DomForm::new(FieldScope::Form(form.clone()), trigger),
            MessageSurface::ColoredLine(message),
        )
        .attach(Some(form), None)?;
        Ok(true)
    }

    fn add_relation(&self) -> Result<bool, ClientError> {
        let Some(form) = by_id::<HtmlFormElement>(self.document, ADD_RELATION_FORM) else {
            return Ok(false);
        };
        let message = require(by_id::<HtmlElement>(self.document, MESSAGE), "#message")?;

        let trigger = by_id::<Element>(self.document, ADD_BUTTON).or_else(|| submit_button(&form));
        Binding::new(
            self.controller(AddRelation::new(self.endpoints.clone())),
            DomForm::new(FieldScope::Form(form.clone()), trigger.clone()),
            MessageSurface::AlertBox(message),
        )
        .attach(Some(form), trigger)?;
        Ok(true)
    }

    fn transaction(&self) -> Result<bool, ClientError> {
        let Some(form) = by_id::<HtmlFormElement>(self.document, TRANSACTION_FORM) else {
            return Ok(false);
        };

        let trigger = submit_button(&form);
        Binding::new(
            self.controller(CreateTransaction::new(self.endpoints.clone())),
            DomForm::new(FieldScope::Form(form.clone()), trigger),
            MessageSurface::Dialog,
        )
        .attach(Some(form), None)?;
        Ok(true)
    }

    fn profile(&self) -> Result<bool, ClientError> {
        let (Some(button), Some(user_name)) = (
            by_id::<HtmlElement>(self.document, PROFILE_SUBMIT),
            by_id::<HtmlInputElement>(self.document, PROFILE_USER_NAME),
        ) else {
            return Ok(false);
        };
        let email = require(by_id::<HtmlInputElement>(self.document, PROFILE_EMAIL), "#email")?;
        let password = require(
            by_id::<HtmlInputElement>(self.document, PROFILE_PASSWORD),
            "#password",
        )?;
        let feedback = match by_id::<HtmlElement>(self.document, PROFILE_SUCCESS) {
            Some(status) => MessageSurface::StatusLine(status),
            None => MessageSurface::Dialog,
        };

        let form = button
            .closest("form")
            .ok()
            .flatten()
            .and_then(|form| form.dyn_into::<HtmlFormElement>().ok());
        let trigger: Element = button.into();
        Binding::new(
            self.controller(UpdateProfile::new(self.endpoints.clone())),
            DomForm::new(
                FieldScope::Inputs(vec![user_name, email, password]),
                Some(trigger.clone()),
            ),
            feedback,
        )
        .attach(form, Some(trigger))?;
        Ok(true)
    }

    fn stepper(&self) -> Result<bool, ClientError> {
        let Some(amount) = by_id::<HtmlInputElement>(self.document, AMOUNT) else {
            return Ok(false);
        };
        let up = require(query::<Element>(self.document, CHEVRON_UP), CHEVRON_UP)?;
        let down = require(query::<Element>(self.document, CHEVRON_DOWN), CHEVRON_DOWN)?;

        stepper::bind(amount, up, down)?;
        Ok(true)
    }

    fn relation_select(&self) -> Result<bool, ClientError> {
        let Some(select) = by_id::<HtmlSelectElement>(self.document, RELATION_SELECT) else {
            return Ok(false);
        };

        let watched = select.clone();
        listen(&select, "change", move |_: Event| {
            let label = watched
                .selected_options()
                .item(0)
                .and_then(|option| option.text_content())
                .unwrap_or_default();
            log::info!("relation selected: {} ({})", label.trim(), watched.value());
        })?;

        let host: Element = select.into();
        host.set_inner_html("");
        yew::Renderer::<RelationSelect>::with_root_and_props(
            host,
            RelationSelectProps {
                identity: IdentityHandle(self.identity.clone()),
                endpoints: self.endpoints.clone(),
            },
        )
        .render();
        Ok(true)
    }

    fn history(&self) -> Result<bool, ClientError> {
        let Some(host) = query::<Element>(self.document, HISTORY_BODY) else {
            return Ok(false);
        };

        host.set_inner_html("");
        yew::Renderer::<TransactionHistory>::with_root_and_props(
            host,
            TransactionHistoryProps {
                identity: IdentityHandle(self.identity.clone()),
                endpoints: self.endpoints.clone(),
            },
        )
        .render();
        Ok(true)
    }
}

fn submit_button(form: &HtmlFormElement) -> Option<Element> {
    form.query_selector(SUBMIT_BUTTON).ok().flatten()
}
