//! # GitHub Repository Insight Library
//!
//! `repoinsight` is a library for looking up a public GitHub repository and
//! visualizing its recent commit activity. It parses a free-form repository
//! URL, fetches metadata, contributors, and weekly commit-activity statistics
//! from the GitHub REST API, and renders them in a desktop UI with a bar
//! chart of the most recent active days.
//!
//! ## Features
//!
//! - Parse `github.com/<owner>/<repo>` out of arbitrary URL text
//! - Fetch repository metadata, top contributors, and commit activity
//! - Distinct handling for missing repositories, rate limiting, and
//!   statistics that GitHub is still computing
//! - Derive a bounded daily series from sparse weekly buckets
//! - Render the series as a bar chart image
//!
//! ## Example
//!
//! ```no_run
//! use repoinsight::RepoInsightApp;
//! use repoinsight::app::AppWrapper;
//! use std::sync::{Arc, Mutex};
//! use eframe::NativeOptions;
//!
//! // Create a new application instance
//! let app = Arc::new(Mutex::new(RepoInsightApp::default()));
//! let app_wrapper = AppWrapper { app };
//!
//! // Run the application with eframe
//! eframe::run_native(
//!     "Repo Insight",
//!     NativeOptions::default(),
//!     Box::new(|_cc| Ok(Box::new(app_wrapper))),
//! ).unwrap();
//! ```

pub mod app;
pub mod github;
pub mod plotting;
pub mod types;
pub mod utils;

// Re-export main types for convenience
pub use app::App as RepoInsightApp;
pub use types::{CommitActivityWeek, Contributor, DisplaySeries, RepoIdentifier, RepoMetadata};
