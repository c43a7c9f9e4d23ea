use super::*;

use std::collections::HashMap;

use axum::extract::{Form, Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use model::{Role, TaskStatus};
use serde_json::{Value, json};

const ADMIN_TOKEN: &str = "admin-token";

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {ADMIN_TOKEN}"))
}

fn task_json(id: i64, owner: &str, status: &str, progress: i32) -> Value {
    json!({
        "id": id,
        "title": format!("task {id}"),
        "description": null,
        "status": status,
        "owner": owner,
        "created_at": "2024-05-01T09:30:00",
        "completed_at": null,
        "progress": progress,
    })
}

async fn login(Form(form): Form<HashMap<String, String>>) -> impl IntoResponse {
    if form.get("username").map(String::as_str) == Some("admin") && form.get("password").map(String::as_str) == Some("pw")
    {
        return (StatusCode::OK, Json(json!({"access_token": ADMIN_TOKEN, "token_type": "bearer"})));
    }
    (StatusCode::UNAUTHORIZED, Json(json!({"detail": "Incorrect username or password"})))
}

async fn register(Json(body): Json<Value>) -> impl IntoResponse {
    if body["username"] == "taken" {
        return (StatusCode::BAD_REQUEST, Json(json!({"detail": "Username already registered"})));
    }
    (StatusCode::OK, Json(json!({"id": 7, "username": body["username"], "role": body["role"]})))
}

async fn list_tasks(headers: HeaderMap, Query(query): Query<HashMap<String, String>>) -> impl IntoResponse {
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({"detail": "Not authenticated"})));
    }
    let owner = query.get("user").cloned().unwrap_or_else(|| "admin".to_owned());
    (StatusCode::OK, Json(json!([task_json(1, &owner, "To Do", 0), task_json(2, &owner, "Done", 40)])))
}

async fn update_task(Path(id): Path<i64>, Json(body): Json<Value>) -> Json<Value> {
    let status = body["status"].as_str().unwrap_or("To Do").to_owned();
    let progress = body["progress"].as_i64().map_or(0, |p| i32::try_from(p).unwrap());
    let mut task = task_json(id, "admin", &status, progress);
    if let Some(title) = body["title"].as_str() {
        task["title"] = json!(title);
    }
    Json(task)
}

async fn delete_user(Path(username): Path<String>) -> impl IntoResponse {
    if username == "admin" {
        return (StatusCode::FORBIDDEN, Json(json!({"detail": "Admins cannot delete themselves"})));
    }
    (StatusCode::OK, Json(json!({"detail": format!("User {username} and their tasks deleted")})))
}

async fn dashboard_status(Query(query): Query<HashMap<String, String>>) -> Json<Value> {
    let scale = if query.contains_key("user") { 1 } else { 3 };
    Json(json!([
        {"status": "To Do", "value": 2 * scale},
        {"status": "In Progress", "value": scale},
        {"status": "Done", "value": scale},
    ]))
}

fn stub_router() -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/register", post(register))
        .route("/tasks", get(list_tasks))
        .route("/tasks/{id}", axum::routing::put(update_task))
        .route("/users/count", get(|| async { Json(json!(12)) }))
        .route("/users/{username}", delete(delete_user))
        .route("/dashboard/status", get(dashboard_status))
        .route("/dashboard/productivity", get(|| async { Json(json!([{"date": "2024-05-01", "completed": 3}])) }))
        .route("/dashboard/progress", get(|| async { Json(json!([{"range": "0-25", "count": 4}])) }))
        .route(
            "/dashboard/upcoming",
            get(|| async {
                Json(json!([{"id": 3, "title": "ship", "deadline": "2024-05-03T00:00:00", "status": "In Progress"}]))
            }),
        )
        .route(
            "/dashboard/user_summary",
            get(|| async { Json(json!([{"username": "bob", "assigned": 4, "completed": 2, "comments": 1}])) }),
        )
}

async fn client(token: Option<&str>) -> ApiClient {
    let base = spawn(stub_router()).await;
    ApiClient::new(ServiceUrls::new(&base, &base), token.map(ToOwned::to_owned)).unwrap()
}

// =============================================================================
// AUTH
// =============================================================================

#[tokio::test]
async fn login_posts_form_and_returns_token() {
    let api = client(None).await;
    let token = api.login(&Credentials::normalized(" admin ", "pw").unwrap()).await.unwrap();
    assert_eq!(token.access_token, ADMIN_TOKEN);
    assert_eq!(token.token_type, "bearer");
}

#[tokio::test]
async fn login_failure_surfaces_detail_message() {
    let api = client(None).await;
    let err = api
        .login(&Credentials::normalized("admin", "nope").unwrap())
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert!(err.to_string().contains("Incorrect username or password"));
}

#[tokio::test]
async fn register_needs_no_token() {
    let api = client(None).await;
    let user = api
        .register(&Registration { username: "carol".into(), password: "pw".into(), role: Role::Guest })
        .await
        .unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(user.role, Role::Guest);
}

#[tokio::test]
async fn register_conflict_is_api_error() {
    let api = client(None).await;
    let err = api
        .register(&Registration { username: "taken".into(), password: "pw".into(), role: Role::User })
        .await
        .unwrap_err();
    assert!(matches!(err, CliError::Api { status: 400, ref message, .. } if message == "Username already registered"));
}

// =============================================================================
// TASKS
// =============================================================================

#[tokio::test]
async fn protected_call_without_token_fails_before_sending() {
    let api = client(None).await;
    let err = api.list_tasks(None).await.unwrap_err();
    assert!(matches!(err, CliError::MissingToken));
}

#[tokio::test]
async fn list_tasks_sends_bearer_and_user_filter() {
    let api = client(Some(ADMIN_TOKEN)).await;
    let tasks = api.list_tasks(Some("bob")).await.unwrap();
    assert_eq!(tasks.len(), 2);
    assert!(tasks.iter().all(|t| t.owner == "bob"));
    assert_eq!(tasks[1].display_progress(), 100);
}

#[tokio::test]
async fn wrong_token_is_rejected_by_service() {
    let api = client(Some("stale")).await;
    let err = api.list_tasks(None).await.unwrap_err();
    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn update_task_sends_progress_update() {
    let api = client(Some(ADMIN_TOKEN)).await;
    let task = api.update_task(5, &TaskUpdate::progress(65)).await.unwrap();
    assert_eq!(task.id, 5);
    assert_eq!(task.status, TaskStatus::InProgress);
    assert_eq!(task.progress, 65);
}

// =============================================================================
// USERS
// =============================================================================

#[tokio::test]
async fn count_users_accepts_bare_number() {
    let api = client(Some(ADMIN_TOKEN)).await;
    assert_eq!(api.count_users().await.unwrap().count, 12);
}

#[tokio::test]
async fn delete_user_reports_forbidden_detail() {
    let api = client(Some(ADMIN_TOKEN)).await;
    let err = api.delete_user("admin").await.unwrap_err();
    assert_eq!(err.status(), Some(403));
    assert!(err.to_string().contains("Admins cannot delete themselves"));

    let ack = api.delete_user("bob").await.unwrap();
    assert_eq!(ack.detail, "User bob and their tasks deleted");
}

// =============================================================================
// DASHBOARD
// =============================================================================

#[tokio::test]
async fn dashboard_fetches_all_sections() {
    let api = client(Some(ADMIN_TOKEN)).await;
    let dashboard = api.dashboard(None).await.unwrap();
    assert_eq!(dashboard.total_tasks(), 12);
    assert_eq!(dashboard.productivity[0].completed, 3);
    assert_eq!(dashboard.progress[0].range, "0-25");
    assert_eq!(dashboard.upcoming[0].due_label(), "Due: 2024-05-03 | Status: In Progress");
    assert_eq!(dashboard.user_summary[0].initial(), "B");
}

#[tokio::test]
async fn dashboard_user_filter_reaches_service() {
    let api = client(Some(ADMIN_TOKEN)).await;
    let dashboard = api.dashboard(Some("bob")).await.unwrap();
    assert_eq!(dashboard.total_tasks(), 4);
}
