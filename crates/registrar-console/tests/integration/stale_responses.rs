//! Overlapping loads: only the most recently issued response is applied.

use std::time::Duration;

use registrar_console::RegistryView;
use registrar_console::resources::{Colleges, Programs};
use registrar_core::RecordId;
use serde_json::json;

use crate::common::{ScriptedClient, Verb, api};

#[tokio::test(start_paused = true)]
async fn test_older_list_response_is_discarded() {
    let client = ScriptedClient::new();
    client
        .reply_after(
            Verb::Get,
            "colleges/",
            Duration::from_millis(100),
            json!([{"id": 1, "code": "OLD", "name": "Old"}]),
        )
        .reply_after(
            Verb::Get,
            "colleges/",
            Duration::from_millis(10),
            json!([{"id": 2, "code": "NEW", "name": "New"}]),
        );
    let view = RegistryView::<Colleges>::new(api(&client));

    let (first, second) = tokio::join!(view.load(), view.load());

    assert!(!first);
    assert!(second);
    let codes: Vec<_> = view.collection().into_iter().map(|c| c.code).collect();
    assert_eq!(codes, ["NEW"]);
}

#[tokio::test(start_paused = true)]
async fn test_slow_failure_after_newer_success_is_ignored() {
    let client = ScriptedClient::new();
    client
        .fail_after(Verb::Get, "colleges/", Duration::from_millis(100), 500)
        .reply_after(
            Verb::Get,
            "colleges/",
            Duration::from_millis(10),
            json!([{"id": 3, "code": "CL", "name": "Law"}]),
        );
    let view = RegistryView::<Colleges>::new(api(&client));

    let (first, second) = tokio::join!(view.load(), view.load());

    assert!(!first);
    assert!(second);
    assert!(view.error_message().is_none());
    assert_eq!(view.collection()[0].id, RecordId::new(3));
}

#[tokio::test(start_paused = true)]
async fn test_older_lookup_response_is_discarded() {
    let client = ScriptedClient::new();
    client
        .reply_after(
            Verb::Get,
            "colleges/",
            Duration::from_millis(50),
            json!([{"id": 1, "code": "CCS", "name": "Computing"}]),
        )
        .reply_after(
            Verb::Get,
            "colleges/",
            Duration::from_millis(5),
            json!([{"id": 2, "code": "CAS", "name": "Arts"}]),
        );
    let view = RegistryView::<Programs>::new(api(&client));

    let (first, second) = tokio::join!(view.load_lookups(), view.load_lookups());

    assert!(!first);
    assert!(second);
    let offered: Vec<_> = view.options(0).into_iter().map(|c| c.id).collect();
    assert_eq!(offered, [RecordId::new(2)]);
    assert_eq!(view.selections(), vec![Some(RecordId::new(2))]);
}
