//! # Common Types
//!
//! This module contains the common types used throughout the application for
//! representing a looked-up repository and its activity data as returned by
//! the GitHub REST API.

use std::fmt;

use chrono::NaiveDate;
use serde::Deserialize;

/// The two-segment identifier locating a repository within GitHub's namespace.
///
/// Produced by parsing free-form user input and discarded once the lookup
/// cycle completes.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct RepoIdentifier {
    /// The account or organization owning the repository
    pub owner: String,
    /// The repository name within the owner's namespace
    pub repo: String,
}

impl fmt::Display for RepoIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Repository metadata as returned by `GET /repos/{owner}/{repo}`.
///
/// Only the fields consumed by the summary view are deserialized.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoMetadata {
    /// Canonical `owner/repo` name
    pub full_name: String,
    /// Free-form description, absent for many repositories
    pub description: Option<String>,
    /// Stargazer count
    pub stargazers_count: u64,
    /// Fork count
    pub forks_count: u64,
    /// Watcher count
    pub watchers_count: u64,
    /// Canonical web page for the repository
    pub html_url: String,
}

/// A single entry from `GET /repos/{owner}/{repo}/contributors`.
///
/// The API delivers contributors ordered by descending contribution count;
/// that order is preserved for display.
#[derive(Debug, Clone, Deserialize)]
pub struct Contributor {
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
    /// Number of commits credited to this account
    pub contributions: u64,
}

/// One weekly bucket from `GET /repos/{owner}/{repo}/stats/commit_activity`.
///
/// The endpoint returns one entry per week, oldest first, typically 52 of
/// them. `days` holds daily commit counts in Sunday-to-Saturday order.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitActivityWeek {
    /// Daily commit counts, Sunday through Saturday
    pub days: [u64; 7],
    /// Total commits for the week
    #[serde(default)]
    pub total: Option<u64>,
    /// Week start as a Unix timestamp
    #[serde(default)]
    pub week: Option<i64>,
}

/// A labeled series of at most 7 daily commit counts derived from the weekly
/// buckets, ready for charting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySeries {
    /// Weekday abbreviation for each retained day
    pub labels: Vec<&'static str>,
    /// Commit count for each retained day, chronological order
    pub values: Vec<u64>,
    /// Start date of the displayed week, when the series comes from a single
    /// week rather than the cross-week fallback scan
    pub week_start: Option<NaiveDate>,
}
