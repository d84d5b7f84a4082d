//! Create, edit, delete, and load behavior of a flat registry view.

use registrar_console::RegistryView;
use registrar_console::resources::Colleges;
use registrar_core::{CollegeDraft, FormMode, RecordId};
use serde_json::json;

use crate::common::{ScriptedClient, Verb, api, colleges_json};

async fn mounted(client: &std::sync::Arc<ScriptedClient>) -> RegistryView<Colleges> {
    let view = RegistryView::<Colleges>::new(api(client));
    view.mount().await;
    view
}

#[tokio::test]
async fn test_mount_loads_collection() {
    let client = ScriptedClient::new();
    client.reply(Verb::Get, "colleges/", colleges_json());

    let view = mounted(&client).await;

    assert_eq!(view.collection().len(), 3);
    assert_eq!(view.collection()[0].code, "CCS");
    assert_eq!(view.mode(), FormMode::Create);
    assert!(view.error_message().is_none());
}

#[tokio::test]
async fn test_missing_fields_make_no_request() {
    let client = ScriptedClient::new();
    client.reply(Verb::Get, "colleges/", colleges_json());
    let view = mounted(&client).await;

    view.update_draft(|d| d.code = "CE".into());
    assert!(!view.submit().await);

    assert_eq!(
        view.error_message().as_deref(),
        Some("Both code and name are required")
    );
    assert!(client.mutations().is_empty());
    assert_eq!(client.count(Verb::Get, "colleges/"), 1);
}

#[tokio::test]
async fn test_create_posts_then_refetches_once() {
    let client = ScriptedClient::new();
    client
        .reply(Verb::Get, "colleges/", json!([]))
        .reply(
            Verb::Get,
            "colleges/",
            json!([{"id": 7, "code": "CE", "name": "Engineering"}]),
        )
        .reply(Verb::Post, "colleges/", json!({"id": 7}));
    let view = mounted(&client).await;

    view.update_draft(|d| {
        d.code = "CE".into();
        d.name = "Engineering".into();
    });
    assert!(view.submit().await);

    let posts = client.calls_to(Verb::Post, "colleges/");
    assert_eq!(posts.len(), 1);
    assert_eq!(
        posts[0].body,
        Some(json!({"code": "CE", "name": "Engineering"}))
    );
    assert_eq!(client.count(Verb::Get, "colleges/"), 2);
    assert_eq!(
        view.success_message().as_deref(),
        Some("College added successfully!")
    );
    assert_eq!(view.collection()[0].id, RecordId::new(7));
    assert_eq!(view.draft(), CollegeDraft::default());
}

#[tokio::test]
async fn test_edit_sends_put_to_item_route() {
    let client = ScriptedClient::new();
    client
        .reply(Verb::Get, "colleges/", colleges_json())
        .reply(Verb::Put, "colleges/2", json!({}));
    let view = mounted(&client).await;

    assert!(view.begin_edit_id(RecordId::new(2)));
    assert_eq!(view.mode(), FormMode::Update);
    assert_eq!(view.draft().name, "Arts");

    view.update_draft(|d| d.name = "Arts and Letters".into());
    assert!(view.submit().await);

    let puts = client.calls_to(Verb::Put, "colleges/2");
    assert_eq!(puts.len(), 1);
    assert_eq!(puts[0].body, Some(json!({"code": "CAS", "name": "Arts and Letters"})));
    assert_eq!(
        view.success_message().as_deref(),
        Some("College updated successfully!")
    );
    assert_eq!(view.mode(), FormMode::Create);
    assert_eq!(client.count(Verb::Get, "colleges/"), 2);
}

#[tokio::test]
async fn test_edit_then_cancel_makes_no_request() {
    let client = ScriptedClient::new();
    client.reply(Verb::Get, "colleges/", colleges_json());
    let view = mounted(&client).await;
    let before = client.calls().len();

    assert!(view.begin_edit_id(RecordId::new(1)));
    view.cancel();

    assert_eq!(view.mode(), FormMode::Create);
    assert_eq!(view.draft(), CollegeDraft::default());
    assert_eq!(client.calls().len(), before);
}

#[tokio::test]
async fn test_server_error_message_is_shown() {
    let client = ScriptedClient::new();
    client
        .reply(Verb::Get, "colleges/", colleges_json())
        .fail(Verb::Post, "colleges/", 400, Some("College code already exists"));
    let view = mounted(&client).await;

    view.update_draft(|d| {
        d.code = "CCS".into();
        d.name = "Computing".into();
    });
    assert!(!view.submit().await);

    assert_eq!(
        view.error_message().as_deref(),
        Some("College code already exists")
    );
    assert!(view.success_message().is_none());
    // The form keeps its contents and no refetch happens.
    assert_eq!(view.draft().code, "CCS");
    assert_eq!(client.count(Verb::Get, "colleges/"), 1);
}

#[tokio::test]
async fn test_server_error_without_message_falls_back() {
    let client = ScriptedClient::new();
    client
        .reply(Verb::Get, "colleges/", colleges_json())
        .fail(Verb::Post, "colleges/", 500, None);
    let view = mounted(&client).await;

    view.update_draft(|d| {
        d.code = "CE".into();
        d.name = "Engineering".into();
    });
    view.submit().await;

    assert_eq!(view.error_message().as_deref(), Some("Operation failed"));
}

#[tokio::test]
async fn test_confirmed_delete_refetches() {
    let client = ScriptedClient::new();
    client
        .reply(Verb::Get, "colleges/", colleges_json())
        .reply(
            Verb::Get,
            "colleges/",
            json!([{"id": 1, "code": "CCS", "name": "Computing"}]),
        )
        .reply(Verb::Delete, "colleges/3", serde_json::Value::Null);
    let view = mounted(&client).await;

    assert!(view.remove(RecordId::new(3), &|_: &str| true).await);

    assert_eq!(client.count(Verb::Delete, "colleges/3"), 1);
    assert_eq!(client.count(Verb::Get, "colleges/"), 2);
    assert!(view.find(RecordId::new(3)).is_none());
    assert_eq!(
        view.success_message().as_deref(),
        Some("College deleted successfully")
    );
}

#[tokio::test]
async fn test_declined_delete_is_a_no_op() {
    let client = ScriptedClient::new();
    client.reply(Verb::Get, "colleges/", colleges_json());
    let view = mounted(&client).await;
    let before = view.snapshot();

    assert!(!view.remove(RecordId::new(3), &|_: &str| false).await);

    assert!(client.mutations().is_empty());
    let after = view.snapshot();
    assert_eq!(after.collection, before.collection);
    assert_eq!(after.success_message, None);
    assert_eq!(after.error_message, None);
}

#[tokio::test]
async fn test_failed_delete_message() {
    let client = ScriptedClient::new();
    client
        .reply(Verb::Get, "colleges/", colleges_json())
        .fail(Verb::Delete, "colleges/1", 409, None);
    let view = mounted(&client).await;

    assert!(!view.remove(RecordId::new(1), &|_: &str| true).await);

    assert_eq!(
        view.error_message().as_deref(),
        Some("Failed to delete college")
    );
    assert_eq!(view.collection().len(), 3);
}

#[tokio::test]
async fn test_load_failure_keeps_collection() {
    let client = ScriptedClient::new();
    client
        .reply(Verb::Get, "colleges/", colleges_json())
        .fail(Verb::Get, "colleges/", 500, None);
    let view = mounted(&client).await;

    assert!(!view.load().await);

    assert_eq!(
        view.error_message().as_deref(),
        Some("Failed to fetch colleges")
    );
    assert_eq!(view.collection().len(), 3);
}
