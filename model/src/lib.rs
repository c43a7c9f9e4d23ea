//! Shared task-tracking model used by the browser client and the CLI.
//!
//! This crate owns the wire representation of the two backend services (auth
//! and tasks) together with the small set of client-side rules that both
//! front ends must agree on: how the task form builds its payloads, how the
//! progress bar is coloured, and how the bearer token is read. It performs no
//! I/O.

pub mod activity;
pub mod dashboard;
pub mod endpoint;
pub mod error;
pub mod form;
pub mod progress;
pub mod task;
pub mod token;
pub mod user;

mod timestamp;

pub use activity::{ActivityEntry, Comment};
pub use dashboard::{
    Dashboard, DashboardSection, ProductivityPoint, ProgressBucket, StatusSlice, UpcomingTask, UserActivity,
};
pub use endpoint::{Endpoint, Method, Service, ServiceUrls};
pub use error::{Acknowledgement, ApiDetail, detail_message};
pub use form::{FormError, FormMode, Submission, TaskForm, clamp_progress_input};
pub use progress::{ProgressBar, ProgressLevel};
pub use task::{NewTask, Task, TaskStatus, TaskUpdate, effective_progress};
pub use token::{Claims, Session, TokenError, bearer};
pub use user::{AccessToken, Credentials, RegisteredUser, Registration, Role, UserCount, UserSummary};
