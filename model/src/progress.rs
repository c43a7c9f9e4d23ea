//! Progress bar presentation.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use crate::task::{Task, TaskStatus, effective_progress};

/// Colour band of a progress bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressLevel {
    Low,
    Medium,
    High,
}

impl ProgressLevel {
    /// Bands: above 70 is high, above 30 is medium, otherwise low.
    #[must_use]
    pub fn for_percent(percent: u8) -> Self {
        if percent > 70 {
            Self::High
        } else if percent > 30 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Fill colour (hex).
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Low => "#ef4444",
            Self::Medium => "#facc15",
            Self::High => "#22c55e",
        }
    }

    /// CSS modifier class suffix.
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Everything needed to draw one progress bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressBar {
    pub percent: u8,
    pub level: ProgressLevel,
}

impl ProgressBar {
    #[must_use]
    pub fn new(progress: i32, status: &TaskStatus) -> Self {
        let percent = effective_progress(progress, status);
        Self { percent, level: ProgressLevel::for_percent(percent) }
    }

    #[must_use]
    pub fn for_task(task: &Task) -> Self {
        Self::new(task.progress, &task.status)
    }

    /// Text drawn inside the bar.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}%", self.percent)
    }

    /// Inline style for the filled portion.
    #[must_use]
    pub fn fill_style(&self) -> String {
        format!("width:{}%;background-color:{};", self.percent, self.level.color())
    }

    /// Fixed-width text rendering for terminals, e.g. `[#####-----]  50%`.
    #[must_use]
    pub fn render_text(&self, width: usize) -> String {
        let filled = (usize::from(self.percent) * width + 50) / 100;
        let filled = filled.min(width);
        format!("[{}{}] {:>3}%", "#".repeat(filled), "-".repeat(width - filled), self.percent)
    }
}
