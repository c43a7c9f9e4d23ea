//! Task create/edit form rules.
//!
//! DESIGN
//! ======
//! The browser form and the CLI `tasks create`/`tasks update` commands share
//! this state machine so both produce identical request bodies:
//!
//! - create mode only offers `To Do` and locks the status select
//! - leaving `In Progress` resets progress to 0
//! - `progress` is sent only while the status is `In Progress`

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::endpoint::Endpoint;
use crate::task::{NewTask, Task, TaskStatus, TaskUpdate};

static CREATE_OPTIONS: [TaskStatus; 1] = [TaskStatus::ToDo];
static EDIT_OPTIONS: [TaskStatus; 3] = TaskStatus::KNOWN;

/// Validation failures surfaced next to the form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Title is required")]
    MissingTitle,
}

/// Whether the form creates a new task or edits an existing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

/// Editable task fields plus the mode they are submitted in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskForm {
    mode: FormMode,
    pub title: String,
    pub description: String,
    status: TaskStatus,
    progress: u8,
    /// Owner override, only sent for admins in create mode.
    pub owner: String,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self::create()
    }
}

impl TaskForm {
    /// Blank form for a new task.
    #[must_use]
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            title: String::new(),
            description: String::new(),
            status: TaskStatus::ToDo,
            progress: 0,
            owner: String::new(),
        }
    }

    /// Form seeded from an existing task.
    #[must_use]
    pub fn edit(task: &Task) -> Self {
        let mut form = Self {
            mode: FormMode::Edit(task.id),
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            status: task.status.clone(),
            progress: u8::try_from(task.progress.clamp(0, 100)).unwrap_or(0),
            owner: String::new(),
        };
        if form.status != TaskStatus::InProgress {
            form.progress = 0;
        }
        form
    }

    /// Seed from an optional selection, the way the list page opens the form.
    #[must_use]
    pub fn for_selection(selected: Option<&Task>) -> Self {
        selected.map_or_else(Self::create, Self::edit)
    }

    #[must_use]
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    #[must_use]
    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    #[must_use]
    pub fn status(&self) -> &TaskStatus {
        &self.status
    }

    #[must_use]
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Statuses selectable in the current mode.
    #[must_use]
    pub fn status_options(&self) -> &'static [TaskStatus] {
        if self.is_edit() { &EDIT_OPTIONS } else { &CREATE_OPTIONS }
    }

    /// The status select is disabled while creating.
    #[must_use]
    pub fn status_locked(&self) -> bool {
        !self.is_edit()
    }

    /// Change status. Ignored in create mode; progress resets when the new
    /// status is not `In Progress`.
    pub fn set_status(&mut self, status: TaskStatus) {
        if self.status_locked() {
            return;
        }
        self.status = status;
        if self.status != TaskStatus::InProgress {
            self.progress = 0;
        }
    }

    /// The progress input is only rendered for `In Progress` tasks.
    #[must_use]
    pub fn shows_progress(&self) -> bool {
        self.status == TaskStatus::InProgress
    }

    /// Apply raw text from the progress input.
    pub fn set_progress_input(&mut self, raw: &str) {
        if self.shows_progress() {
            self.progress = clamp_progress_input(raw);
        }
    }

    /// # Errors
    ///
    /// Returns [`FormError::MissingTitle`] when the title is blank.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.title.trim().is_empty() {
            return Err(FormError::MissingTitle);
        }
        Ok(())
    }

    /// Build the request this form submits.
    ///
    /// # Errors
    ///
    /// Returns a [`FormError`] when validation fails.
    pub fn submission(&self, is_admin: bool) -> Result<Submission, FormError> {
        self.validate()?;
        let title = self.title.trim().to_owned();
        match self.mode {
            FormMode::Create => {
                let description = Some(self.description.trim().to_owned()).filter(|d| !d.is_empty());
                let owner = Some(self.owner.trim().to_owned()).filter(|o| is_admin && !o.is_empty());
                Ok(Submission::Create(NewTask { title, description, status: TaskStatus::ToDo, owner }))
            }
            FormMode::Edit(id) => {
                let progress = self.shows_progress().then_some(self.progress);
                let update = TaskUpdate {
                    title: Some(title),
                    description: Some(self.description.clone()),
                    status: Some(self.status.clone()),
                    progress,
                };
                Ok(Submission::Update { id, update })
            }
        }
    }

    /// Label of the submit button.
    #[must_use]
    pub fn submit_label(&self, loading: bool) -> &'static str {
        match (self.is_edit(), loading) {
            (true, true) => "Saving...",
            (true, false) => "Save",
            (false, true) => "Creating...",
            (false, false) => "Create",
        }
    }
}

/// A validated form ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    Create(NewTask),
    Update { id: i64, update: TaskUpdate },
}

impl Submission {
    #[must_use]
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::Create(_) => Endpoint::CreateTask,
            Self::Update { id, .. } => Endpoint::UpdateTask(*id),
        }
    }
}

/// Interpret progress input text: leading integer, clamped to 0..=100.
/// Anything without a leading number becomes 0.
#[must_use]
pub fn clamp_progress_input(raw: &str) -> u8 {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() || negative {
        return 0;
    }
    match digits.parse::<u64>() {
        Ok(value) => u8::try_from(value.min(100)).unwrap_or(100),
        Err(_) => 100,
    }
}
