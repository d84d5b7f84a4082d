//! End to end over HTTP: log in, open the dashboard, delete a faculty member.

use std::sync::Arc;

use registrar_auth::{Guard, SessionContext};
use registrar_client::{ApiClient, ClientConfig, HttpApiClient};
use registrar_console::{AssumeYes, Dashboard, login};
use registrar_core::RecordId;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_login_then_delete_faculty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(json!({"username": "reg", "password": "pw", "role": "registrar"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": true, "token": "tok-9"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/registrar/faculty-list"))
        .and(header("authorization", "Bearer tok-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "faculty": [
                {"id": 3, "full_name": "Maria Santos", "username": "msantos", "email": "m@udm.edu", "employment_type": "Full-Time"}
            ]
        })))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/registrar/faculty/3"))
        .and(header("authorization", "Bearer tok-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/registrar/faculty-list"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": true, "faculty": []})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let session = Arc::new(SessionContext::in_memory());
    let http = HttpApiClient::new(&ClientConfig::new(format!("{}/api", server.uri())))
        .unwrap()
        .with_session(Arc::clone(&session));
    let api: Arc<dyn ApiClient> = Arc::new(http);

    login(api.as_ref(), &session, "reg", "pw", "registrar")
        .await
        .unwrap();
    let dashboard = Dashboard::open(Arc::clone(&api), &Guard::new(&["registrar"]), &session)
        .unwrap();
    assert!(dashboard.faculty.load().await);
    assert_eq!(dashboard.faculty.collection().len(), 1);

    assert!(dashboard.faculty.remove(RecordId::new(3), &AssumeYes).await);

    assert!(dashboard.faculty.collection().is_empty());
    assert_eq!(
        dashboard.faculty.success_message().as_deref(),
        Some("Faculty deleted successfully")
    );
}
