use super::*;
use crate::test_support::task;
use model::{FormMode, TaskStatus};

#[test]
fn toggle_opens_blank_form_then_cancels() {
    let mut state = TasksState::default();
    assert_eq!(state.toggle_label(), "Add Task");
    state.toggle_form();
    assert!(state.show_form);
    assert_eq!(state.toggle_label(), "Cancel");
    assert_eq!(state.form().mode(), FormMode::Create);
    state.toggle_form();
    assert!(!state.show_form);
}

#[test]
fn open_edit_seeds_form_from_task() {
    let mut state = TasksState::default();
    state.open_edit(task(4, TaskStatus::InProgress, 35));
    assert!(state.show_form);
    let form = state.form();
    assert_eq!(form.mode(), FormMode::Edit(4));
    assert_eq!(form.progress(), 35);
}

#[test]
fn cancel_clears_selection() {
    let mut state = TasksState::default();
    state.open_edit(task(4, TaskStatus::ToDo, 0));
    state.toggle_form();
    assert_eq!(state.selected, None);
}

#[test]
fn after_save_closes_and_clears() {
    let mut state = TasksState::default();
    state.open_edit(task(4, TaskStatus::Done, 100));
    state.after_save();
    assert!(!state.show_form);
    assert_eq!(state.selected, None);
}

#[test]
fn blank_filter_means_everyone() {
    let mut state = TasksState { user_filter: "  ".into(), ..TasksState::default() };
    assert_eq!(state.filter(), None);
    state.user_filter = " bob ".into();
    assert_eq!(state.filter(), Some("bob"));
}

#[test]
fn failed_load_keeps_previous_items() {
    let mut state = TasksState::default();
    state.begin_load();
    state.finish_load(Ok(vec![task(1, TaskStatus::ToDo, 0)]));
    state.begin_load();
    assert!(state.loading);
    state.finish_load(Err("request failed: 500".into()));
    assert!(!state.loading);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.error.as_deref(), Some("request failed: 500"));
}
