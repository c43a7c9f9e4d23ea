use super::*;

fn user(id: i64, name: &str) -> UserSummary {
    UserSummary { id, username: name.to_owned(), email: None }
}

#[test]
fn starts_loading() {
    assert_eq!(UsersState::default().placeholder(), Some("Loading users..."));
}

#[test]
fn failure_shows_fixed_message() {
    let mut state = UsersState::default();
    state.finish_load(Err("network error: offline".into()));
    assert_eq!(state.placeholder(), Some("Failed to fetch users"));
}

#[test]
fn success_clears_placeholder() {
    let mut state = UsersState::default();
    state.finish_load(Ok(vec![user(1, "ann"), user(2, "bob")]));
    assert_eq!(state.placeholder(), None);
    assert_eq!(state.total(), 2);
}

#[test]
fn remove_updates_rows_and_count() {
    let mut state = UsersState::default();
    state.finish_load(Ok(vec![user(1, "ann"), user(2, "bob")]));
    state.count = Some(5);
    state.remove("bob");
    assert_eq!(state.items, vec![user(1, "ann")]);
    assert_eq!(state.total(), 4);
}
