//! Faculty accounts behind the `{success, faculty}` envelope.

use std::sync::Arc;

use registrar_console::RegistryView;
use registrar_console::resources::FacultyMembers;
use registrar_core::RecordId;
use serde_json::json;

use crate::common::{ScriptedClient, Verb, api, faculty_envelope, unreachable_api};

async fn mounted() -> (Arc<ScriptedClient>, RegistryView<FacultyMembers>) {
    let client = ScriptedClient::new();
    client.reply(Verb::Get, "registrar/faculty-list", faculty_envelope());
    let view = RegistryView::<FacultyMembers>::new(api(&client));
    view.mount().await;
    (client, view)
}

fn fill(view: &RegistryView<FacultyMembers>) {
    view.update_draft(|d| {
        d.username = "agarcia".into();
        d.full_name = "Ana Garcia".into();
        d.email = "a@udm.edu".into();
        d.password = "secret".into();
        d.employment_type = "Full-Time".into();
    });
}

#[tokio::test]
async fn test_list_is_unwrapped_from_envelope() {
    let (_client, view) = mounted().await;

    let names: Vec<_> = view.collection().into_iter().map(|f| f.full_name).collect();
    assert_eq!(names, ["Maria Santos", "Jose Rizal"]);
}

#[tokio::test]
async fn test_confirmed_delete_removes_row() {
    let client = ScriptedClient::new();
    client
        .reply(Verb::Get, "registrar/faculty-list", faculty_envelope())
        .reply(
            Verb::Get,
            "registrar/faculty-list",
            json!({"success": true, "faculty": [
                {"id": 4, "full_name": "Jose Rizal", "username": "jrizal", "email": "j@udm.edu", "employment_type": "Part-Time"}
            ]}),
        )
        .reply(Verb::Delete, "registrar/faculty/3", json!({"success": true}));
    let view = RegistryView::<FacultyMembers>::new(api(&client));
    view.mount().await;

    let prompts = std::sync::Mutex::new(Vec::new());
    let confirm = |prompt: &str| {
        prompts.lock().unwrap().push(prompt.to_string());
        true
    };
    assert!(view.remove(RecordId::new(3), &confirm).await);

    assert_eq!(
        prompts.lock().unwrap().as_slice(),
        ["Are you sure you want to delete this faculty?"]
    );
    assert_eq!(
        view.success_message().as_deref(),
        Some("Faculty deleted successfully")
    );
    assert!(view.find(RecordId::new(3)).is_none());
    assert_eq!(client.count(Verb::Get, "registrar/faculty-list"), 2);
}

#[tokio::test]
async fn test_create_posts_password() {
    let (client, view) = mounted().await;
    client.reply(Verb::Post, "registrar/register-faculty", json!({"success": true}));

    fill(&view);
    assert!(view.submit().await);

    let posts = client.calls_to(Verb::Post, "registrar/register-faculty");
    assert_eq!(posts[0].body.as_ref().unwrap()["password"], "secret");
    assert_eq!(
        view.success_message().as_deref(),
        Some("Faculty registered successfully!")
    );
}

#[tokio::test]
async fn test_update_omits_password() {
    let (client, view) = mounted().await;
    client.reply(Verb::Put, "registrar/faculty/4", json!({"success": true}));

    assert!(view.begin_edit_id(RecordId::new(4)));
    assert!(view.draft().password.is_empty());
    view.update_draft(|d| d.employment_type = "Full-Time".into());
    assert!(view.submit().await);

    let body = client.calls_to(Verb::Put, "registrar/faculty/4")[0]
        .body
        .clone()
        .unwrap();
    assert!(body.get("password").is_none());
    assert_eq!(body["employment_type"], "Full-Time");
}

#[tokio::test]
async fn test_envelope_rejection_surfaces_message() {
    let (client, view) = mounted().await;
    client.reply(
        Verb::Post,
        "registrar/register-faculty",
        json!({"success": false, "message": "Username already taken"}),
    );

    fill(&view);
    assert!(!view.submit().await);

    assert_eq!(
        view.error_message().as_deref(),
        Some("Username already taken")
    );
    assert!(view.success_message().is_none());
    assert_eq!(client.count(Verb::Get, "registrar/faculty-list"), 1);
}

#[tokio::test]
async fn test_missing_password_on_create() {
    let (client, view) = mounted().await;

    fill(&view);
    view.update_draft(|d| d.password.clear());
    assert!(!view.submit().await);

    assert_eq!(view.error_message().as_deref(), Some("All fields are required"));
    assert!(client.mutations().is_empty());
}

#[tokio::test]
async fn test_unreachable_server() {
    let view = RegistryView::<FacultyMembers>::new(unreachable_api());

    assert!(!view.load().await);
    assert_eq!(view.error_message().as_deref(), Some("Failed to fetch faculty"));

    fill(&view);
    assert!(!view.submit().await);
    assert_eq!(view.error_message().as_deref(), Some("Server not reachable"));
}
