//! The lookup cycle: one submission drives three sequential fetches.
//!
//! Metadata is fatal, contributors and commit activity degrade on their own.
//! Each step's result is applied to the shared app state as soon as it lands,
//! so the summary renders while the later fetches are still in flight.

use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use super::client::{FetchError, GitHubClient};
use crate::app::App;
use crate::types::RepoIdentifier;

pub const INVALID_URL: &str = "Invalid GitHub repo URL.";
pub const NOT_FOUND: &str = "Repository not found.";
pub const RATE_LIMITED: &str = "API rate limit exceeded. Please try again later.";
pub const FETCH_FAILED: &str = "Failed to fetch data from GitHub.";
pub const ACTIVITY_PENDING: &str =
    "Commit activity is being generated by GitHub. Please try again in a few seconds.";
pub const ACTIVITY_FAILED: &str = "Could not fetch commit activity.";

fn metadata_error_message(error: &FetchError) -> &'static str {
    match error.status() {
        Some(404) => NOT_FOUND,
        Some(403) => RATE_LIMITED,
        _ => FETCH_FAILED,
    }
}

/// Run one full lookup cycle against `client`, applying each step's outcome
/// to the shared app state.
///
/// The metadata fetch aborts the cycle on failure. The contributor fetch
/// falls back to an empty list. The commit-activity fetch reports 202 as a
/// pending message and any other failure as a generic one; the cycle finishes
/// either way. Clears `in_flight` on every exit path.
pub async fn run_lookup(app: Arc<Mutex<App>>, client: GitHubClient, id: RepoIdentifier) {
    let metadata = match client.fetch_repository(&id).await {
        Ok(metadata) => metadata,
        Err(error) => {
            warn!("metadata fetch for {id} failed: {error}");
            let mut app = app.lock().unwrap();
            app.set_error(metadata_error_message(&error));
            app.in_flight = false;
            return;
        }
    };
    app.lock().unwrap().apply_metadata(metadata);

    let contributors = match client.fetch_contributors(&id).await {
        Ok(contributors) => contributors,
        Err(error) => {
            warn!("contributor fetch for {id} failed: {error}");
            Vec::new()
        }
    };
    app.lock().unwrap().apply_contributors(contributors);

    match client.fetch_commit_activity(&id).await {
        Ok(weeks) => {
            debug!("fetched {} commit-activity weeks for {id}", weeks.len());
            app.lock().unwrap().apply_commit_activity(&weeks);
        }
        Err(error) => {
            warn!("commit-activity fetch for {id} failed: {error}");
            let message = if error.status() == Some(202) {
                ACTIVITY_PENDING
            } else {
                ACTIVITY_FAILED
            };
            app.lock().unwrap().set_error(message);
        }
    }

    app.lock().unwrap().in_flight = false;
}
