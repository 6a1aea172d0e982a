use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header::AUTHORIZATION, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use client::ApiClient;
use serde_json::{json, Map, Value};
use shared_types::{CaseStatus, UserRole};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// One request as the fake backend received it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: HashMap<String, String>,
    pub body: Value,
    pub bearer: Option<String>,
}

/// In-memory court records served by the fake backend. Records are kept
/// as the JSON the real backend sends so the client's decoding is
/// exercised end to end.
#[derive(Debug, Default)]
pub struct Backend {
    pub users: Vec<Value>,
    pub cases: Vec<Value>,
    pub schedules: Vec<Value>,
    pub notifications: Vec<Value>,
    pub judgments: Vec<Value>,
    pub requests: Vec<Recorded>,
    /// `PATCH /api/notifications/:id/read` answers 500.
    pub fail_mark_read: bool,
    /// `POST /api/notifications/sync/:userId` answers 500.
    pub fail_sync: bool,
    /// Every request is answered with this status and raw body.
    pub canned: Option<(u16, String)>,
    next_id: u32,
}

pub type Shared = Arc<Mutex<Backend>>;

/// A running fake backend and a client pointed at it.
pub struct TestBackend {
    pub api: ApiClient,
    pub state: Shared,
}

impl TestBackend {
    pub async fn requests(&self) -> Vec<Recorded> {
        self.state.lock().await.requests.clone()
    }

    pub async fn requests_to(&self, method: &str, path: &str) -> Vec<Recorded> {
        self.requests()
            .await
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }

    pub async fn case_status(&self, id: &str) -> CaseStatus {
        let db = self.state.lock().await;
        db.cases
            .iter()
            .find(|c| c["_id"] == id)
            .map(|c| CaseStatus::parse(c["status"].as_str().unwrap_or_default()))
            .expect("case exists")
    }
}

/// Serve `seed` on an ephemeral port for the duration of the test.
pub async fn test_backend(seed: Backend) -> TestBackend {
    let state: Shared = Arc::new(Mutex::new(seed));
    let app = Router::new().fallback(dispatch).with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read listener address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test backend stopped");
    });

    TestBackend {
        api: ApiClient::new(format!("http://{addr}")),
        state,
    }
}

// ── Seed data ───────────────────────────────────────────────────────

pub const PASSWORD: &str = "secret";

pub fn user(id: &str, name: &str, email: &str, role: &str) -> Value {
    json!({
        "_id": id,
        "name": name,
        "email": email,
        "role": role,
        "password": PASSWORD,
        "createdAt": "2024-01-15T09:00:00.000Z",
    })
}

pub fn case(id: &str, title: &str, status: &str) -> Value {
    json!({
        "_id": id,
        "caseNumber": format!("CV-{id}"),
        "title": title,
        "description": "",
        "status": status,
        "filingDate": "2024-03-01T10:00:00.000Z",
    })
}

/// Copy the fields of `extra` over `base`.
pub fn with(mut base: Value, extra: Value) -> Value {
    if let (Some(target), Value::Object(fields)) = (base.as_object_mut(), extra) {
        target.extend(fields);
    }
    base
}

pub fn notification(id: &str, user_id: &str, status: &str, sent_at: &str) -> Value {
    json!({
        "_id": id,
        "userId": user_id,
        "title": format!("Notice {id}"),
        "message": "A case needs your attention",
        "status": status,
        "sentAt": sent_at,
    })
}

/// A small court: one user per role, a second judge, and six cases
/// spread over the lifecycle. Four of the cases mention "Smith" in a
/// searchable field; a fifth only in its description.
pub fn court() -> Backend {
    let users = vec![
        user("u-admin", "Ada Admin", "admin@court.test", "admin"),
        user("u-clerk", "Cole Clerk", "clerk@court.test", "Clerk"),
        user("u-reg", "Rita Registrar", "registrar@court.test", "registrar"),
        user("j1", "Judge Ellen Smith", "judge.smith@court.test", "judge"),
        user("j2", "Judge Omar Brown", "judge.brown@court.test", "judge"),
    ];
    let cases = vec![
        with(
            case("c1", "Smith v. Jones", "Filed"),
            json!({"plaintiff": {"name": "Paul Smith"}, "defendant": {"name": "Jane Jones"}, "filedBy": "u-clerk"}),
        ),
        with(
            case("c2", "Land dispute", "Registered"),
            json!({"plaintiff": "Anna Smith", "filedBy": {"_id": "u-clerk", "name": "Cole Clerk"}}),
        ),
        with(
            case("c3", "Contract claim", "Submitted"),
            json!({"defendant": {"name": "SMITHSON LLC"}, "filedBy": "u-clerk"}),
        ),
        with(
            case("c4", "Estate of Brown", "Assigned"),
            json!({"assignedJudge": {"_id": "j1", "name": "Judge Ellen Smith"}}),
        ),
        with(
            case("c5", "Traffic appeal", "Approved"),
            json!({"plaintiff": {"name": "John Doe"}, "defendant": {"name": "Richard Roe"}}),
        ),
        with(
            case("c6", "Noise complaint", "Disapproved"),
            json!({"description": "Neighbour of Mr Smith", "filedBy": "u-clerk"}),
        ),
    ];
    let notifications = vec![
        with(
            notification("n1", "j1", "Read", "2024-05-03T08:00:00.000Z"),
            json!({"caseId": "c1"}),
        ),
        notification("n2", "j1", "Unread", "2024-05-01T08:00:00.000Z"),
        with(
            notification("n3", "j1", "Unread", "2024-05-02T08:00:00.000Z"),
            json!({"caseId": {"_id": "c4", "caseNumber": "CV-c4", "title": "Estate of Brown", "status": "Assigned"}}),
        ),
        notification("n4", "j2", "Unread", "2024-05-04T08:00:00.000Z"),
    ];

    Backend {
        users,
        cases,
        notifications,
        ..Backend::default()
    }
}

// ── Dispatch ────────────────────────────────────────────────────────

async fn dispatch(
    State(state): State<Shared>,
    method: Method,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string);
    let path = uri.path().to_string();

    let mut db = state.lock().await;
    db.requests.push(Recorded {
        method: method.to_string(),
        path: path.clone(),
        query: query.clone(),
        body: body.clone(),
        bearer,
    });

    if let Some((status, raw)) = db.canned.clone() {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return (status, raw).into_response();
    }

    let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
    db.route(method.as_str(), &segments, &query, body)
}

fn ok(value: Value) -> Response {
    (StatusCode::OK, Json(value)).into_response()
}

fn created(value: Value) -> Response {
    (StatusCode::CREATED, Json(value)).into_response()
}

fn not_found(what: &str) -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "message": format!("{what} not found") }))).into_response()
}

fn done() -> Response {
    ok(json!({ "message": "ok" }))
}

/// Id of a reference that may be a bare string or a populated object.
fn ref_id(value: &Value) -> &str {
    value
        .as_str()
        .or_else(|| value["_id"].as_str())
        .unwrap_or_default()
}

fn status_of(record: &Value) -> CaseStatus {
    CaseStatus::parse(record["status"].as_str().unwrap_or_default())
}

fn public_user(user: &Value) -> Value {
    let mut user = user.clone();
    if let Some(fields) = user.as_object_mut() {
        fields.remove("password");
    }
    user
}

fn list(items: impl Iterator<Item = Value>) -> Response {
    ok(Value::Array(items.collect()))
}

impl Backend {
    fn fresh_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-new-{}", self.next_id)
    }

    fn find<'a>(records: &'a mut [Value], id: &str) -> Option<&'a mut Value> {
        records.iter_mut().find(|r| r["_id"] == id)
    }

    fn user_name(&self, id: &str) -> String {
        self.users
            .iter()
            .find(|u| u["_id"] == id)
            .and_then(|u| u["name"].as_str())
            .unwrap_or_default()
            .to_string()
    }

    fn case_ref(&self, id: &str) -> Value {
        match self.cases.iter().find(|c| c["_id"] == id) {
            Some(c) => json!({
                "_id": id,
                "title": c["title"],
                "caseNumber": c["caseNumber"],
                "status": c["status"],
            }),
            None => json!(id),
        }
    }

    fn cases_where(&self, keep: impl Fn(&Value) -> bool) -> Response {
        list(self.cases.iter().filter(|c| keep(c)).cloned())
    }

    fn update_case(&mut self, id: &str, change: impl FnOnce(&mut Value)) -> Response {
        match Self::find(&mut self.cases, id) {
            Some(record) => {
                change(record);
                done()
            }
            None => not_found("Case"),
        }
    }

    fn status_counts<'a>(cases: impl Iterator<Item = &'a Value>) -> Value {
        let mut counts = Map::new();
        for case in cases {
            let label = status_of(case).label().to_string();
            let n = counts.get(&label).and_then(Value::as_u64).unwrap_or(0);
            counts.insert(label, json!(n + 1));
        }
        Value::Object(counts)
    }

    fn route(
        &mut self,
        method: &str,
        segments: &[&str],
        query: &HashMap<String, String>,
        body: Value,
    ) -> Response {
        match (method, segments) {
            // ── Users ──
            ("POST", ["api", "users", "login"]) => {
                let email = body["email"].as_str().unwrap_or_default();
                let password = body["password"].as_str().unwrap_or_default();
                match self.users.iter().find(|u| u["email"] == email) {
                    None => (
                        StatusCode::NOT_FOUND,
                        Json(json!({ "error": "User not found" })),
                    )
                        .into_response(),
                    Some(u) if u["password"] != password => StatusCode::UNAUTHORIZED.into_response(),
                    Some(u) => ok(json!({
                        "token": format!("token-{}", ref_id(&u["_id"])),
                        "user": public_user(u),
                    })),
                }
            }
            ("GET", ["api", "users"]) => list(self.users.iter().map(public_user)),
            ("POST", ["api", "users"]) => {
                let id = self.fresh_id("u");
                let record = with(body, json!({ "_id": id }));
                self.users.push(record.clone());
                created(public_user(&record))
            }
            ("GET", ["api", "users", "count"]) => ok(json!({ "count": self.users.len() })),
            ("GET", ["api", "users", "recent"]) => {
                list(self.users.iter().rev().take(5).map(public_user))
            }
            ("GET", ["api", "users", "roles", "count"]) => {
                let mut counts = Map::new();
                for u in &self.users {
                    let role = u["role"].as_str().unwrap_or_default().to_string();
                    let n = counts.get(&role).and_then(Value::as_u64).unwrap_or(0);
                    counts.insert(role, json!(n + 1));
                }
                ok(Value::Object(counts))
            }
            ("GET", ["api", "users", "judges"]) => list(
                self.users
                    .iter()
                    .filter(|u| {
                        UserRole::from_str_or_default(u["role"].as_str().unwrap_or_default())
                            == UserRole::Judge
                    })
                    .map(public_user),
            ),
            ("GET", ["api", "users", id]) => match self.users.iter().find(|u| u["_id"] == *id) {
                Some(u) => ok(public_user(u)),
                None => not_found("User"),
            },
            ("PUT", ["api", "users", id]) => match Self::find(&mut self.users, id) {
                Some(record) => {
                    *record = with(record.clone(), body);
                    ok(public_user(record))
                }
                None => not_found("User"),
            },
            ("DELETE", ["api", "users", id]) => {
                let before = self.users.len();
                self.users.retain(|u| u["_id"] != *id);
                if self.users.len() < before { done() } else { not_found("User") }
            }

            // ── Case views and aggregates ──
            ("GET", ["api", "cases"]) => {
                let status = query.get("status").map(|s| CaseStatus::parse(s));
                let clerk = query.get("clerkId");
                self.cases_where(|c| {
                    status.as_ref().is_none_or(|s| &status_of(c) == s)
                        && clerk.is_none_or(|id| ref_id(&c["filedBy"]) == id.as_str())
                })
            }
            ("POST", ["api", "cases"]) => {
                let id = self.fresh_id("c");
                let filed_by = body["filedBy"].clone();
                let mut record = with(
                    json!({ "status": "Filed", "filingDate": "2024-06-01T09:00:00.000Z" }),
                    body,
                );
                record["_id"] = json!(id);
                record["filedBy"] = filed_by;
                self.cases.push(record.clone());
                created(record)
            }
            ("GET", ["api", "cases", "count"]) => ok(json!({ "count": self.cases.len() })),
            ("GET", ["api", "cases", "closed"]) => {
                let closed = self
                    .cases
                    .iter()
                    .filter(|c| status_of(c) == CaseStatus::Closed)
                    .count();
                ok(json!({ "closedCount": closed }))
            }
            ("GET", ["api", "cases", "submitted"]) => {
                self.cases_where(|c| status_of(c) == CaseStatus::Submitted)
            }
            ("GET", ["api", "cases", "approved"]) => {
                self.cases_where(|c| status_of(c) == CaseStatus::Approved)
            }
            ("GET", ["api", "cases", "disapproved"]) => {
                self.cases_where(|c| status_of(c) == CaseStatus::Disapproved)
            }
            ("GET", ["api", "cases", "status-stats"]) => ok(Self::status_counts(self.cases.iter())),
            ("GET", ["api", "cases", "status-stats", "judge", judge]) => ok(Self::status_counts(
                self.cases
                    .iter()
                    .filter(|c| ref_id(&c["assignedJudge"]) == *judge),
            )),
            ("GET", ["api", "cases", "summary"]) => {
                let clerk = query.get("clerkId").cloned().unwrap_or_default();
                let mine: Vec<CaseStatus> = self
                    .cases
                    .iter()
                    .filter(|c| ref_id(&c["filedBy"]) == clerk)
                    .map(status_of)
                    .collect();
                let count = |keep: fn(&CaseStatus) -> bool| mine.iter().filter(|s| keep(s)).count();
                ok(json!({
                    "total": mine.len(),
                    "pending": count(|s| matches!(s, CaseStatus::Filed | CaseStatus::Registered | CaseStatus::Submitted)),
                    "approved": count(|s| matches!(s, CaseStatus::Approved | CaseStatus::Assigned)),
                    "rejected": count(|s| *s == CaseStatus::Disapproved),
                }))
            }
            ("GET", ["api", "cases", "assigned", judge]) => {
                self.cases_where(|c| ref_id(&c["assignedJudge"]) == *judge)
            }

            // ── Case lifecycle ──
            ("POST", ["api", "cases", "approve", id]) => self.update_case(id, |c| {
                c["status"] = json!("Approved");
                c["registrarName"] = body["registrarName"].clone();
            }),
            ("POST", ["api", "cases", "disapprove", id]) => self.update_case(id, |c| {
                c["status"] = json!("Disapproved");
                c["registrarName"] = body["registrarName"].clone();
            }),
            ("POST", ["api", "cases", "endorse", id]) => {
                let judge = body["judgeId"].as_str().unwrap_or_default().to_string();
                let name = self.user_name(&judge);
                self.update_case(id, |c| {
                    c["status"] = json!("Assigned");
                    c["assignedJudge"] = json!({ "_id": judge, "name": name });
                })
            }
            ("PUT", ["api", "cases", id, "register"]) => self.update_case(id, |c| {
                c["status"] = json!("Registered");
                c["registeredBy"] = body["clerkId"].clone();
            }),
            ("PUT", ["api", "cases", id, "submit-to-registrar"]) => {
                self.update_case(id, |c| c["status"] = json!("Submitted"))
            }
            ("GET", ["api", "cases", id]) => match self.cases.iter().find(|c| c["_id"] == *id) {
                Some(c) => ok(c.clone()),
                None => not_found("Case"),
            },
            ("PUT", ["api", "cases", id]) => {
                self.update_case(id, |c| *c = with(c.clone(), body))
            }
            ("DELETE", ["api", "cases", id]) => {
                let before = self.cases.len();
                self.cases.retain(|c| c["_id"] != *id);
                if self.cases.len() < before { done() } else { not_found("Case") }
            }

            // ── Schedules ──
            ("GET", ["api", "schedules"]) => list(self.schedules.iter().cloned()),
            ("POST", ["api", "schedules"]) => {
                let id = self.fresh_id("s");
                let case = self.case_ref(body["caseId"].as_str().unwrap_or_default());
                let mut record = with(body, json!({ "_id": id, "progress": 0 }));
                record["caseId"] = case;
                self.schedules.push(record.clone());
                created(record)
            }
            ("GET", ["api", "schedules", "judge", judge])
            | ("GET", ["api", "schedules", "progress", judge]) => list(
                self.schedules
                    .iter()
                    .filter(|s| ref_id(&s["assignedJudge"]) == *judge)
                    .cloned(),
            ),
            ("PUT", ["api", "schedules", id]) => {
                let case = self.case_ref(body["caseId"].as_str().unwrap_or_default());
                match Self::find(&mut self.schedules, id) {
                    Some(record) => {
                        *record = with(record.clone(), body);
                        record["caseId"] = case;
                        ok(record.clone())
                    }
                    None => not_found("Schedule"),
                }
            }
            ("DELETE", ["api", "schedules", id]) => {
                let before = self.schedules.len();
                self.schedules.retain(|s| s["_id"] != *id);
                if self.schedules.len() < before { done() } else { not_found("Schedule") }
            }

            // ── Notifications ──
            ("POST", ["api", "notifications", "sync", _user]) if self.fail_sync => {
                (StatusCode::INTERNAL_SERVER_ERROR, "sync unavailable").into_response()
            }
            ("POST", ["api", "notifications", "sync", _user]) => done(),
            ("PATCH", ["api", "notifications", _id, "read"]) if self.fail_mark_read => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Could not update notification" })),
            )
                .into_response(),
            ("PATCH", ["api", "notifications", id, "read"]) => {
                match Self::find(&mut self.notifications, id) {
                    Some(n) => {
                        n["status"] = json!("Read");
                        done()
                    }
                    None => not_found("Notification"),
                }
            }
            ("GET", ["api", "notifications", user]) => list(
                self.notifications
                    .iter()
                    .filter(|n| n["userId"] == *user)
                    .cloned(),
            ),

            // ── Judgments ──
            ("GET", ["api", "judgments"]) => list(self.judgments.iter().cloned()),
            ("POST", ["api", "judgments"]) => {
                let id = self.fresh_id("jd");
                let case_id = body["caseId"].as_str().unwrap_or_default().to_string();
                let date = body["judgmentDate"].as_str().unwrap_or("2024-07-01");
                let record = json!({
                    "_id": id,
                    "caseId": self.case_ref(&case_id),
                    "judgeId": body["judgeId"],
                    "outcome": body["verdict"],
                    "summary": body["summary"],
                    "judgmentDate": format!("{date}T00:00:00.000Z"),
                });
                self.judgments.push(record.clone());
                if let Some(c) = Self::find(&mut self.cases, &case_id) {
                    c["status"] = json!("Judgment Recorded");
                }
                created(record)
            }
            ("GET", ["api", "judgments", "judge", judge]) => list(
                self.judgments
                    .iter()
                    .filter(|j| j["judgeId"] == *judge)
                    .cloned(),
            ),

            _ => not_found("Route"),
        }
    }
}
