//! Common test utilities: a scripted, recording API client and fixtures.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use registrar_client::{ApiClient, ClientConfig, Error, HttpApiClient, Query, Result};
use serde_json::{Value, json};

/// HTTP verb of a recorded call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

/// One request seen by the scripted client.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub verb: Verb,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

#[derive(Debug, Clone)]
enum Outcome {
    Body(Value),
    Status(u16, Option<String>),
}

#[derive(Debug, Clone)]
struct Reply {
    outcome: Outcome,
    delay: Option<Duration>,
}

/// An [`ApiClient`] answering from per-route reply queues.
///
/// Replies for a route are served in order; the last one repeats. An
/// unscripted route answers 404.
#[derive(Debug, Default)]
pub struct ScriptedClient {
    replies: Mutex<HashMap<(Verb, String), VecDeque<Reply>>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn push(&self, verb: Verb, path: &str, reply: Reply) -> &Self {
        self.replies
            .lock()
            .unwrap()
            .entry((verb, path.to_string()))
            .or_default()
            .push_back(reply);
        self
    }

    /// Answer `verb path` with `body`.
    pub fn reply(&self, verb: Verb, path: &str, body: Value) -> &Self {
        self.push(
            verb,
            path,
            Reply {
                outcome: Outcome::Body(body),
                delay: None,
            },
        )
    }

    /// Answer `verb path` with `body` after `delay`.
    pub fn reply_after(&self, verb: Verb, path: &str, delay: Duration, body: Value) -> &Self {
        self.push(
            verb,
            path,
            Reply {
                outcome: Outcome::Body(body),
                delay: Some(delay),
            },
        )
    }

    /// Answer `verb path` with an error status and optional message.
    pub fn fail(&self, verb: Verb, path: &str, status: u16, message: Option<&str>) -> &Self {
        self.push(
            verb,
            path,
            Reply {
                outcome: Outcome::Status(status, message.map(str::to_string)),
                delay: None,
            },
        )
    }

    /// Answer `verb path` with an error status after `delay`.
    pub fn fail_after(&self, verb: Verb, path: &str, delay: Duration, status: u16) -> &Self {
        self.push(
            verb,
            path,
            Reply {
                outcome: Outcome::Status(status, None),
                delay: Some(delay),
            },
        )
    }

    /// Every request, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Requests matching `verb path`.
    pub fn calls_to(&self, verb: Verb, path: &str) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| c.verb == verb && c.path == path)
            .collect()
    }

    /// Number of requests matching `verb path`.
    pub fn count(&self, verb: Verb, path: &str) -> usize {
        self.calls_to(verb, path).len()
    }

    /// Every non-GET request.
    pub fn mutations(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| c.verb != Verb::Get)
            .collect()
    }

    async fn answer(
        &self,
        verb: Verb,
        path: &str,
        query: &Query,
        body: Option<&Value>,
    ) -> Result<Value> {
        self.calls.lock().unwrap().push(Call {
            verb,
            path: path.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
            body: body.cloned(),
        });

        let reply = {
            let mut replies = self.replies.lock().unwrap();
            match replies.get_mut(&(verb, path.to_string())) {
                Some(queue) if queue.len() > 1 => queue.pop_front(),
                Some(queue) => queue.front().cloned(),
                None => None,
            }
        };
        let Some(reply) = reply else {
            return Err(Error::Api {
                status: 404,
                message: Some(format!("no scripted reply for {verb:?} {path}")),
            });
        };

        if let Some(delay) = reply.delay {
            tokio::time::sleep(delay).await;
        }
        match reply.outcome {
            Outcome::Body(value) => Ok(value),
            Outcome::Status(status, message) => Err(Error::Api { status, message }),
        }
    }
}

#[async_trait]
impl ApiClient for ScriptedClient {
    async fn get(&self, path: &str, query: &Query) -> Result<Value> {
        self.answer(Verb::Get, path, query, None).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        self.answer(Verb::Post, path, &[], Some(body)).await
    }

    async fn put(&self, path: &str, body: &Value) -> Result<Value> {
        self.answer(Verb::Put, path, &[], Some(body)).await
    }

    async fn delete(&self, path: &str) -> Result<Value> {
        self.answer(Verb::Delete, path, &[], None).await
    }
}

/// Coerce a scripted client into the trait object views expect.
pub fn api(client: &Arc<ScriptedClient>) -> Arc<dyn ApiClient> {
    Arc::clone(client) as Arc<dyn ApiClient>
}

/// An HTTP client pointed at a port nothing listens on.
pub fn unreachable_api() -> Arc<dyn ApiClient> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let client =
        HttpApiClient::new(&ClientConfig::new(format!("http://127.0.0.1:{port}/api"))).unwrap();
    Arc::new(client)
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn colleges_json() -> Value {
    json!([
        {"id": 1, "code": "CCS", "name": "Computing"},
        {"id": 2, "code": "CAS", "name": "Arts"},
        {"id": 3, "code": "CL", "name": "Law"}
    ])
}

pub fn programs_json() -> Value {
    json!([
        {"id": 10, "college_id": 1, "name": "CS"},
        {"id": 11, "college_id": 1, "name": "IT"},
        {"id": 20, "college_id": 2, "name": "Fine Arts"}
    ])
}

pub fn sections_json() -> Value {
    json!([
        {"id": 4, "program_id": 10, "section_code": "1A", "program_name": "CS", "college_id": 1, "college_name": "Computing"},
        {"id": 5, "program_id": 20, "section_code": "2B", "program_name": "Fine Arts", "college_id": 2, "college_name": "Arts"}
    ])
}

pub fn students_json() -> Value {
    json!([
        {
            "id": 1, "student_number": "2021-0001", "first_name": "Ana", "middle_name": null,
            "last_name": "Cruz", "email": "ana@udm.edu", "section_id": 4, "section_code": "1A",
            "created_at": "2024-06-01T08:00:00"
        },
        {
            "id": 2, "student_number": "2021-0002", "first_name": "Ben", "middle_name": "Reyes",
            "last_name": "Santos", "email": null, "section_id": 5, "section_code": "2B"
        }
    ])
}

pub fn faculty_envelope() -> Value {
    json!({
        "success": true,
        "faculty": [
            {"id": 3, "full_name": "Maria Santos", "username": "msantos", "email": "m@udm.edu", "employment_type": "Full-Time"},
            {"id": 4, "full_name": "Jose Rizal", "username": "jrizal", "email": "j@udm.edu", "employment_type": "Part-Time"}
        ]
    })
}
