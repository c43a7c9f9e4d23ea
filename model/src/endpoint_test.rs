use super::*;

#[test]
fn auth_endpoints_route_to_auth_service() {
    for endpoint in [Endpoint::Register, Endpoint::AdminRegister, Endpoint::Login] {
        assert_eq!(endpoint.service(), Service::Auth);
        assert_eq!(endpoint.method(), Method::Post);
    }
    assert!(!Endpoint::Register.requires_auth());
    assert!(!Endpoint::Login.requires_auth());
    assert!(Endpoint::AdminRegister.requires_auth());
}

#[test]
fn task_endpoints_have_expected_verbs_and_paths() {
    let cases = [
        (Endpoint::ListTasks { user: None }, Method::Get, "/tasks"),
        (Endpoint::CreateTask, Method::Post, "/tasks"),
        (Endpoint::GetTask(5), Method::Get, "/tasks/5"),
        (Endpoint::UpdateTask(5), Method::Put, "/tasks/5"),
        (Endpoint::DeleteTask(5), Method::Delete, "/tasks/5"),
        (Endpoint::TaskComments(5), Method::Get, "/tasks/5/comments"),
        (Endpoint::TaskActivity(5), Method::Get, "/tasks/5/activity"),
        (Endpoint::ListUsers, Method::Get, "/users"),
        (Endpoint::CountUsers, Method::Get, "/users/count"),
    ];
    for (endpoint, method, path) in cases {
        assert_eq!(endpoint.method(), method, "{endpoint:?}");
        assert_eq!(endpoint.path(), path, "{endpoint:?}");
        assert_eq!(endpoint.service(), Service::Tasks, "{endpoint:?}");
        assert!(endpoint.requires_auth(), "{endpoint:?}");
    }
}

#[test]
fn delete_user_encodes_username() {
    let endpoint = Endpoint::DeleteUser("jane doe/x".to_owned());
    assert_eq!(endpoint.path(), "/users/jane%20doe%2Fx");
    assert_eq!(endpoint.method(), Method::Delete);
}

#[test]
fn dashboard_scoped_to_user() {
    let endpoint = Endpoint::Dashboard { section: DashboardSection::UserSummary, user: Some("al ice".to_owned()) };
    assert_eq!(endpoint.path_and_query(), "/dashboard/user_summary?user=al%20ice");
}

#[test]
fn blank_user_filter_is_dropped() {
    let endpoint = Endpoint::ListTasks { user: Some("  ".to_owned()) };
    assert!(endpoint.query().is_empty());
    assert_eq!(endpoint.path_and_query(), "/tasks");
}

#[test]
fn service_urls_trim_trailing_slashes() {
    let urls = ServiceUrls::new("http://auth.local/", " http://tasks.local// ");
    assert_eq!(urls.url(&Endpoint::Login), "http://auth.local/login");
    assert_eq!(urls.url(&Endpoint::GetTask(1)), "http://tasks.local/tasks/1");
}

#[test]
fn default_urls_match_local_services() {
    let urls = ServiceUrls::default();
    assert_eq!(urls.base(Service::Auth), "http://localhost:8000");
    assert_eq!(urls.base(Service::Tasks), "http://localhost:8001");
}

#[test]
fn display_shows_method_and_path() {
    let endpoint = Endpoint::ListTasks { user: Some("bob".to_owned()) };
    assert_eq!(endpoint.to_string(), "GET /tasks?user=bob");
}
