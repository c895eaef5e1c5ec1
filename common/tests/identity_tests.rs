mod support;

use std::rc::Rc;

use common::config::{Endpoints, IdentityStrategy};
use common::error::ClientError;
use common::identity::{resolver_for, IdentityResolver, RemoteIdentity};
use common::listing::{fetch_relations, fetch_transactions, transaction_rows};
use common::model::user::UserId;
use support::ScriptedClient;

#[tokio::test]
async fn remote_identity_reads_id_with_credentials() {
    let client = Rc::new(ScriptedClient::new().respond(200, r#"{"id": 42, "userName": "ana"}"#));
    let resolver = RemoteIdentity::new(client.clone(), "/api/currentUser");

    let user = resolver.resolve().await.unwrap();

    assert_eq!(user.as_str(), "42");
    let requests = client.requests();
    assert_eq!(requests[0].url, "/api/currentUser");
    assert!(requests[0].include_credentials);
}

#[tokio::test]
async fn remote_identity_failures_become_unresolved() {
    let client = Rc::new(
        ScriptedClient::new()
            .respond(401, "")
            .respond(200, r#"{"userName": "ana"}"#)
            .respond(200, "not json")
            .fail("offline"),
    );
    let resolver = RemoteIdentity::new(client, "/api/currentUser");

    for _ in 0..4 {
        assert!(matches!(
            resolver.resolve().await,
            Err(ClientError::IdentityUnresolved(_))
        ));
    }
}

#[tokio::test]
async fn page_strategy_picks_the_resolver() {
    let endpoints = Endpoints::new("");
    let client = Rc::new(ScriptedClient::new());

    let static_one = resolver_for(IdentityStrategy::Static, Some("5".to_string()), client.clone(), &endpoints);
    assert_eq!(static_one.strategy(), IdentityStrategy::Static);
    assert_eq!(static_one.resolve().await.unwrap().as_str(), "5");

    let remote_one = resolver_for(IdentityStrategy::Remote, Some("5".to_string()), client.clone(), &endpoints);
    assert_eq!(remote_one.strategy(), IdentityStrategy::Remote);
    assert!(remote_one.resolve().await.is_err());
    assert_eq!(client.requests().len(), 1);
}

#[tokio::test]
async fn history_fetch_decodes_and_renders_rows() {
    let body = r#"[
        {"senderId":1,"senderName":"Ana","receiverId":2,"receiverName":"Bob","description":"cinema","amount":5},
        {"senderId":2,"senderName":"Bob","receiverId":1,"receiverName":"Ana","description":"refund","amount":2.5}
    ]"#;
    let client = ScriptedClient::new().respond(200, body);
    let me = UserId::parse("1").unwrap();

    let items = fetch_transactions(&client, &Endpoints::new(""), &me).await.unwrap();
    let labels: Vec<_> = transaction_rows(&items, &me)
        .iter()
        .map(|row| (row.counterparty.clone(), row.amount_label()))
        .collect();

    assert_eq!(client.requests()[0].url, "/api/transactions/allByUser/1");
    assert_eq!(
        labels,
        vec![
            ("Bob".to_string(), "- 5.00 €".to_string()),
            ("Bob".to_string(), "+ 2.50 €".to_string()),
        ]
    );
}

#[tokio::test]
async fn relation_fetch_rejection_is_reported() {
    let client = ScriptedClient::new().respond(403, "Forbidden");
    let me = UserId::parse("1").unwrap();

    let err = fetch_relations(&client, &Endpoints::new(""), &me).await.unwrap_err();

    assert_eq!(
        err,
        ClientError::ServerRejected {
            status: 403,
            message: "Forbidden".to_string()
        }
    );
}

#[tokio::test]
async fn empty_history_is_not_an_error() {
    let client = ScriptedClient::new().respond(200, "[]");
    let me = UserId::parse("1").unwrap();
    let items = fetch_transactions(&client, &Endpoints::new(""), &me).await.unwrap();
    assert!(transaction_rows(&items, &me).is_empty());
}
