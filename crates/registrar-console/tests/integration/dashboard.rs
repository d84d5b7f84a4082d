//! The five-tab dashboard.

use registrar_console::{Dashboard, Tab};
use registrar_core::RecordId;

use crate::common::{
    ScriptedClient, Verb, api, colleges_json, faculty_envelope, programs_json, sections_json,
    students_json,
};

#[tokio::test]
async fn test_mount_loads_every_tab() {
    let client = ScriptedClient::new();
    client
        .reply(Verb::Get, "registrar/faculty-list", faculty_envelope())
        .reply(Verb::Get, "students", students_json())
        .reply(Verb::Get, "sections", sections_json())
        .reply(Verb::Get, "colleges/", colleges_json())
        .reply(Verb::Get, "programs/", programs_json())
        .reply(Verb::Get, "sections/", sections_json());
    let mut dashboard = Dashboard::new(api(&client));

    dashboard.mount().await;

    assert_eq!(dashboard.active(), Tab::Faculty);
    assert_eq!(dashboard.faculty.collection().len(), 2);
    assert_eq!(dashboard.students.collection().len(), 2);
    assert_eq!(dashboard.colleges.collection().len(), 3);
    assert_eq!(dashboard.programs.collection().len(), 3);
    assert_eq!(dashboard.sections.collection().len(), 2);

    dashboard.select_tab(Tab::Sections);
    assert_eq!(dashboard.active(), Tab::Sections);
    assert_eq!(
        dashboard.sections.selections(),
        vec![Some(RecordId::new(1)), Some(RecordId::new(10))]
    );
}

#[tokio::test]
async fn test_one_failing_tab_does_not_affect_others() {
    let client = ScriptedClient::new();
    client
        .reply(Verb::Get, "colleges/", colleges_json())
        .fail(Verb::Get, "students", 500, None);
    let dashboard = Dashboard::new(api(&client));

    dashboard.mount().await;

    assert_eq!(dashboard.colleges.collection().len(), 3);
    assert!(dashboard.colleges.error_message().is_none());
    assert_eq!(
        dashboard.students.error_message().as_deref(),
        Some("Failed to fetch students")
    );
}
