use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::RepoIdentifier;

// Lazy captures stop at the first `/` after the owner and at `/`, `#`, `?`,
// or end-of-string after the repo name. A trailing `.git` is kept verbatim.
static REPO_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)github\.com/(.+?)/(.+?)(?:$|[/#?])").expect("valid pattern"));

/// Extract an `owner/repo` pair from a free-form GitHub URL.
///
/// Returns `None` when the input contains no `github.com/<owner>/<repo>`
/// segment; callers must not issue any network request in that case.
pub fn parse_repo_url(input: &str) -> Option<RepoIdentifier> {
    let captures = REPO_URL.captures(input)?;
    Some(RepoIdentifier {
        owner: captures[1].to_string(),
        repo: captures[2].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parsed(input: &str) -> (String, String) {
        let id = parse_repo_url(input).expect("should parse");
        (id.owner, id.repo)
    }

    #[test]
    fn test_plain_https_url() {
        assert_eq!(
            parsed("https://github.com/rust-lang/regex"),
            ("rust-lang".to_string(), "regex".to_string())
        );
    }

    #[test]
    fn test_trailing_slash() {
        assert_eq!(
            parsed("https://github.com/rust-lang/regex/"),
            ("rust-lang".to_string(), "regex".to_string())
        );
    }

    #[test]
    fn test_deep_path_stops_at_repo() {
        assert_eq!(
            parsed("https://github.com/rust-lang/regex/tree/master/src"),
            ("rust-lang".to_string(), "regex".to_string())
        );
    }

    #[test]
    fn test_query_string_excluded() {
        assert_eq!(
            parsed("https://github.com/rust-lang/regex?tab=readme-ov-file"),
            ("rust-lang".to_string(), "regex".to_string())
        );
    }

    #[test]
    fn test_fragment_excluded() {
        assert_eq!(
            parsed("https://github.com/rust-lang/regex#usage"),
            ("rust-lang".to_string(), "regex".to_string())
        );
    }

    #[test]
    fn test_case_insensitive_host() {
        assert_eq!(
            parsed("HTTPS://GitHub.COM/Rust-Lang/Regex"),
            ("Rust-Lang".to_string(), "Regex".to_string())
        );
    }

    #[test]
    fn test_bare_host_without_scheme() {
        assert_eq!(
            parsed("github.com/tokio-rs/tokio"),
            ("tokio-rs".to_string(), "tokio".to_string())
        );
    }

    // Clone-style URLs keep the `.git` suffix; the name is passed to the API
    // verbatim. Known quirk, see DESIGN.md.
    #[test]
    fn test_git_suffix_kept() {
        assert_eq!(
            parsed("https://github.com/rust-lang/regex.git"),
            ("rust-lang".to_string(), "regex.git".to_string())
        );
    }

    #[test]
    fn test_missing_repo_segment() {
        assert_eq!(parse_repo_url("https://github.com/rust-lang"), None);
    }

    #[test]
    fn test_unrelated_host() {
        assert_eq!(parse_repo_url("https://gitlab.com/owner/repo"), None);
        assert_eq!(parse_repo_url("not a url at all"), None);
        assert_eq!(parse_repo_url(""), None);
    }
}
