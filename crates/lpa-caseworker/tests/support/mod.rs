//! Fake Sirius backend served over a real socket.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::{json, Value};
use url::Url;

pub const CASE_UID: &str = "M-1111-2222-3333";

#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub method: Method,
    pub path_and_query: String,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

impl SeenRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

pub struct FakeSirius {
    pub decisions: &'static str,
    pub reject_decisions: bool,
    seen: Mutex<Vec<SeenRequest>>,
}

impl FakeSirius {
    pub fn new(decisions: &'static str) -> Self {
        Self {
            decisions,
            reject_decisions: false,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn seen(&self) -> Vec<SeenRequest> {
        self.seen.lock().expect("request log mutex poisoned").clone()
    }

    pub fn writes(&self) -> Vec<SeenRequest> {
        self.seen()
            .into_iter()
            .filter(|request| request.method == Method::PUT)
            .collect()
    }

    fn digital_lpa(&self) -> Value {
        json!({
            "uId": CASE_UID,
            "opg.poas.sirius": {
                "id": 42,
                "uId": CASE_UID,
                "caseSubtype": "property-and-affairs",
                "status": "Registered"
            },
            "opg.poas.lpastore": {
                "howAttorneysMakeDecisions": self.decisions,
                "attorneys": [
                    attorney("U1", "Ada", "active", "original"),
                    attorney("U2", "Grace", "active", "original"),
                    attorney("U3", "Alan", "inactive", "replacement")
                ]
            }
        })
    }
}

fn attorney(uid: &str, first_names: &str, status: &str, appointment_type: &str) -> Value {
    json!({
        "uid": uid,
        "firstNames": first_names,
        "lastName": "Byron",
        "dateOfBirth": "1970-12-10",
        "status": status,
        "appointmentType": appointment_type
    })
}

async fn handle(
    State(sirius): State<Arc<FakeSirius>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path_and_query = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_default();
    sirius
        .seen
        .lock()
        .expect("request log mutex poisoned")
        .push(SeenRequest {
            method: method.clone(),
            path_and_query,
            headers,
            body: serde_json::from_slice(&body).ok(),
        });

    let lpa_path = format!("/api/lpa-api/v1/digital-lpas/{CASE_UID}");
    let path = uri.path();

    match (method.as_str(), path) {
        ("GET", p) if p == lpa_path => Json(sirius.digital_lpa()).into_response(),
        ("GET", "/api/lpa-api/v1/cases/42/tasks") => Json(json!({
            "tasks": [{ "id": 7, "name": "Review restrictions", "status": "Not started", "dueDate": "2026-11-02" }]
        }))
        .into_response(),
        ("GET", "/api/lpa-api/v1/cases/42/warnings") => Json(json!([
            { "id": 3, "warningType": "Complaint Received", "warningText": "Donor called", "dateAdded": "01/10/2026 09:00:00" }
        ]))
        .into_response(),
        ("GET", "/api/lpa-api/v1/reference-data/attorneyRemovedReason") => Json(json!([
            { "handle": "DECEASED", "label": "Deceased" },
            { "handle": "BANKRUPT", "label": "Bankrupt", "validSubTypes": ["property-and-affairs"] },
            { "handle": "LACKS_CAPACITY", "label": "Lacks capacity", "validSubTypes": ["personal-welfare"] }
        ]))
        .into_response(),
        ("PUT", p) if p == format!("{lpa_path}/attorney-status") => {
            StatusCode::NO_CONTENT.into_response()
        }
        ("PUT", p) if p == format!("{lpa_path}/attorney-decisions") => {
            if sirius.reject_decisions {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "detail": "Payload failed validation",
                        "validation_errors": {
                            "attorneyDecisions": { "isEmpty": "Value is required" }
                        }
                    })),
                )
                    .into_response()
            } else {
                StatusCode::OK.into_response()
            }
        }
        _ => (
            StatusCode::NOT_FOUND,
            [("Correlation-Id", "corr-404")],
            Json(json!({ "detail": "not found" })),
        )
            .into_response(),
    }
}

/// Serves `sirius` on an ephemeral port and returns its API base URL.
pub async fn spawn_backend(sirius: Arc<FakeSirius>) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake sirius");
    let addr = listener.local_addr().expect("local addr");
    let app = Router::new().fallback(handle).with_state(sirius);

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake sirius serves");
    });

    Url::parse(&format!("http://{addr}/api/")).expect("base url")
}
