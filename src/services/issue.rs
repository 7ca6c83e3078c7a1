// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::sync::LazyLock;

use regex::Regex;

// Leftmost `KEY-123` token. In `X-ABC-123` the `X-` run is not followed by
// digits, so the match starts at `ABC`.
static ISSUE_TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z0-9]+-[0-9]+").unwrap());

static ISSUE_KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]+-[0-9]+$").unwrap());

/// Find the first issue key (e.g. `ABC-123`) in a branch name.
pub fn detect_issue_key(branch: &str) -> Option<String> {
    ISSUE_TOKEN_REGEX
        .find(branch)
        .map(|m| m.as_str().to_string())
}

pub fn is_issue_key(input: &str) -> bool {
    ISSUE_KEY_REGEX.is_match(input)
}

/// Issue keys are stored upper-cased.
pub fn filter_issue_key(input: &str) -> String {
    input.trim().to_uppercase()
}

/// Check an already filtered issue key. `prefix` is only used in the hint.
pub fn validate_issue_key(input: &str, prefix: &str) -> std::result::Result<(), String> {
    if input.is_empty() {
        return Err(
            "An issue key is required. If no Jira issue is affected, answer no to the \
             previous question (Ctrl+C to cancel)"
                .into(),
        );
    }
    if !is_issue_key(input) {
        return Err(format!(
            "'{input}' is not an issue key, expected something like {prefix}-12345"
        ));
    }
    Ok(())
}

/// Smart commit directives end at whitespace, so transitions cannot contain spaces.
pub fn validate_workflow(input: &str) -> std::result::Result<(), String> {
    if input.contains(' ') {
        return Err(
            "Workflows cannot contain spaces in smart commits. If your workflow name \
             has a space, use a dash (-) instead"
                .into(),
        );
    }
    Ok(())
}
