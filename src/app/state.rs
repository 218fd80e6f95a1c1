use eframe::App as EApp;
use egui::TextureHandle;
use std::sync::{Arc, Mutex};

use crate::types::{CommitActivityWeek, Contributor, DisplaySeries, RepoMetadata};
use crate::utils::recent_daily_activity;

pub const NO_CONTRIBUTORS: &str = "No contributors found.";
pub const NO_ACTIVITY_DATA: &str = "No commit activity data.";
pub const NO_COMMIT_DATA: &str = "No commit data found.";

/// Main application state
///
/// Everything here is transient view state for one lookup cycle; a new
/// submission rebuilds it from scratch. The chart texture is an owned field,
/// so at most one chart is ever attached and replacing it releases the
/// previous one.
#[derive(Clone)]
pub struct App {
    /// Raw text of the URL input field
    pub repo_url: String,
    /// Summary payload, present once the metadata fetch lands
    pub metadata: Option<RepoMetadata>,
    /// Contributor list; `None` until the contributor step has run,
    /// `Some(empty)` renders the placeholder
    pub contributors: Option<Vec<Contributor>>,
    /// Derived daily series backing the chart
    pub chart_series: Option<DisplaySeries>,
    /// Placeholder text for the activity region when no chart is shown
    pub activity_notice: Option<String>,
    /// Single-line error text replacing any previous one
    pub error_message: Option<String>,
    /// A lookup cycle is running; the Fetch button is inert meanwhile
    pub in_flight: bool,
    /// The chart image needs rebuilding from `chart_series`
    pub chart_dirty: bool,
    /// Where the rendered chart PNG lives
    pub chart_path: String,
    pub chart_texture: Option<TextureHandle>,
}

impl App {
    /// Clear all result regions and drop the current chart before a new
    /// lookup cycle begins.
    pub fn reset_results(&mut self) {
        self.metadata = None;
        self.contributors = None;
        self.chart_series = None;
        self.activity_notice = None;
        self.error_message = None;
        self.chart_dirty = false;
        self.chart_texture = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    pub fn apply_metadata(&mut self, metadata: RepoMetadata) {
        self.metadata = Some(metadata);
    }

    pub fn apply_contributors(&mut self, contributors: Vec<Contributor>) {
        self.contributors = Some(contributors);
    }

    /// Derive the display series from the weekly buckets, or a placeholder
    /// when there is nothing to chart.
    pub fn apply_commit_activity(&mut self, weeks: &[CommitActivityWeek]) {
        if weeks.is_empty() {
            self.activity_notice = Some(NO_ACTIVITY_DATA.to_string());
            return;
        }
        match recent_daily_activity(weeks) {
            Some(series) => {
                self.chart_series = Some(series);
                self.chart_dirty = true;
            }
            None => {
                self.activity_notice = Some(NO_COMMIT_DATA.to_string());
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            repo_url: String::new(),
            metadata: None,
            contributors: None,
            chart_series: None,
            activity_notice: None,
            error_message: None,
            in_flight: false,
            chart_dirty: false,
            chart_path: "commit_activity.png".to_string(),
            chart_texture: None,
        }
    }
}

/// Thread-safe wrapper around App for use with eframe
pub struct AppWrapper {
    pub app: Arc<Mutex<App>>,
}

impl EApp for AppWrapper {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Ok(mut app) = self.app.lock() {
            super::ui::draw_ui(&mut app, ctx, Arc::clone(&self.app));
        } else {
            tracing::error!("failed to acquire app lock in update");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CommitActivityWeek;

    fn week(days: [u64; 7]) -> CommitActivityWeek {
        CommitActivityWeek {
            days,
            total: None,
            week: None,
        }
    }

    #[test]
    fn test_reset_clears_all_regions() {
        let mut app = App::default();
        app.set_error("boom");
        app.apply_contributors(Vec::new());
        app.apply_commit_activity(&[week([1, 0, 0, 0, 0, 0, 0])]);
        assert!(app.chart_series.is_some());

        app.reset_results();
        assert!(app.error_message.is_none());
        assert!(app.contributors.is_none());
        assert!(app.chart_series.is_none());
        assert!(app.activity_notice.is_none());
        assert!(!app.chart_dirty);
    }

    #[test]
    fn test_empty_weeks_yield_activity_placeholder() {
        let mut app = App::default();
        app.apply_commit_activity(&[]);
        assert_eq!(app.activity_notice.as_deref(), Some(NO_ACTIVITY_DATA));
        assert!(app.chart_series.is_none());
    }

    #[test]
    fn test_all_zero_weeks_yield_no_data_placeholder() {
        let mut app = App::default();
        app.apply_commit_activity(&[week([0; 7]), week([0; 7])]);
        assert_eq!(app.activity_notice.as_deref(), Some(NO_COMMIT_DATA));
        assert!(app.chart_series.is_none());
        assert!(!app.chart_dirty);
    }

    #[test]
    fn test_activity_marks_chart_dirty() {
        let mut app = App::default();
        app.apply_commit_activity(&[week([0, 2, 0, 1, 0, 3, 0])]);
        assert!(app.chart_dirty);
        let series = app.chart_series.unwrap();
        assert_eq!(series.values, vec![0, 2, 0, 1, 0, 3, 0]);
    }

    #[test]
    fn test_second_cycle_replaces_chart_series() {
        let mut app = App::default();
        app.apply_commit_activity(&[week([1, 0, 0, 0, 0, 0, 0])]);
        let first = app.chart_series.clone().unwrap();

        app.reset_results();
        app.apply_commit_activity(&[week([0, 0, 5, 0, 0, 0, 0])]);
        let second = app.chart_series.clone().unwrap();

        assert_ne!(first.values, second.values);
        assert_eq!(second.values, vec![0, 0, 5, 0, 0, 0, 0]);
    }
}
