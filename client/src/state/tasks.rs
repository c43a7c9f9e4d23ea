//! Task-list page state: the fetched tasks plus the inline create/edit form.
//!
//! DESIGN
//! ======
//! The form is either closed, open blank ("Add Task"), or open on a selected
//! task. Saving closes it and clears the selection so the next "Add Task"
//! starts blank.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use model::{Task, TaskForm};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TasksState {
    pub items: Vec<Task>,
    pub loading: bool,
    pub error: Option<String>,
    pub show_form: bool,
    pub selected: Option<Task>,
    /// Owner filter (admins only). Empty means everyone.
    pub user_filter: String,
}

impl TasksState {
    /// "Add Task" / "Cancel" button.
    pub fn toggle_form(&mut self) {
        self.show_form = !self.show_form;
        if !self.show_form {
            self.selected = None;
        }
    }

    /// Clicking a task name opens the form on that task.
    pub fn open_edit(&mut self, task: Task) {
        self.selected = Some(task);
        self.show_form = true;
    }

    pub fn after_save(&mut self) {
        self.show_form = false;
        self.selected = None;
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.show_form { "Cancel" } else { "Add Task" }
    }

    /// Form seeded from the current selection.
    pub fn form(&self) -> TaskForm {
        TaskForm::for_selection(self.selected.as_ref())
    }

    pub fn filter(&self) -> Option<&str> {
        Some(self.user_filter.trim()).filter(|u| !u.is_empty())
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_load(&mut self, result: Result<Vec<Task>, String>) {
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(message) => self.error = Some(message),
        }
    }
}
