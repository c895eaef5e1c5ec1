mod support;

use std::rc::Rc;

use common::config::Endpoints;
use common::controller::{SubmissionController, SubmitStatus};
use common::error::ClientError;
use common::feedback::Notice;
use common::identity::{IdentityResolver, StaticIdentity};
use common::workflows::{AddRelation, CreateTransaction, IDENTITY_MESSAGE};
use support::{FakeForm, RecordingFeedback, ScriptedClient};

fn relation_controller(
    client: Rc<ScriptedClient>,
    identity: Rc<dyn IdentityResolver>,
) -> SubmissionController<Rc<ScriptedClient>> {
    SubmissionController::new(client, identity, Box::new(AddRelation::new(Endpoints::new(""))))
}

fn signed_in() -> Rc<dyn IdentityResolver> {
    Rc::new(StaticIdentity::from_attribute(Some("3".to_string())))
}

#[tokio::test]
async fn overlapping_submissions_send_one_request() {
    let client = Rc::new(ScriptedClient::new().respond(201, "ok").respond(201, "ok"));
    let ctl = relation_controller(client.clone(), signed_in());
    let form = FakeForm::new(&[("email", "bob@x.com")]);
    let feedback = RecordingFeedback::default();

    let (first, second) = tokio::join!(ctl.submit(&form, &feedback), ctl.submit(&form, &feedback));

    assert!(matches!(first, SubmitStatus::Completed(_)));
    assert_eq!(second, SubmitStatus::Ignored);
    assert_eq!(client.requests().len(), 1);
    assert_eq!(feedback.notices.borrow().len(), 1);
}

#[tokio::test]
async fn guard_is_released_after_completion() {
    let client = Rc::new(ScriptedClient::new().respond(201, "ok").respond(201, "ok"));
    let ctl = relation_controller(client.clone(), signed_in());
    let form = FakeForm::new(&[("email", "bob@x.com")]);
    let feedback = RecordingFeedback::default();

    ctl.submit(&form, &feedback).await;
    assert!(!ctl.is_in_flight());
    ctl.submit(&form, &feedback).await;

    assert_eq!(client.requests().len(), 2);
    assert_eq!(form.busy.borrow().as_slice(), [true, false, true, false]);
}

#[tokio::test]
async fn unresolved_identity_blocks_the_request() {
    let client = Rc::new(ScriptedClient::new());
    let identity: Rc<dyn IdentityResolver> = Rc::new(StaticIdentity::from_attribute(Some(" ".to_string())));
    let ctl = SubmissionController::new(
        client.clone(),
        identity,
        Box::new(CreateTransaction::new(Endpoints::new(""))),
    );
    let form = FakeForm::new(&[("receiverId", "2"), ("amount", "4")]);
    let feedback = RecordingFeedback::default();

    let status = ctl.submit(&form, &feedback).await;

    assert!(matches!(
        status,
        SubmitStatus::Aborted(ClientError::IdentityUnresolved(_))
    ));
    assert!(client.requests().is_empty());
    assert_eq!(feedback.last(), Some(Notice::error(IDENTITY_MESSAGE)));
    assert!(!ctl.is_in_flight());
    assert_eq!(form.busy.borrow().as_slice(), [true, false]);
}

#[tokio::test]
async fn duplicate_field_names_abort_before_sending() {
    let client = Rc::new(ScriptedClient::new());
    let ctl = relation_controller(client.clone(), signed_in());
    let form = FakeForm::new(&[("email", "a@x.com"), ("email", "b@x.com")]);
    let feedback = RecordingFeedback::default();

    let status = ctl.submit(&form, &feedback).await;

    assert_eq!(
        status,
        SubmitStatus::Aborted(ClientError::FieldConflict("email".to_string()))
    );
    assert!(client.requests().is_empty());
}
