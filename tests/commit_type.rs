// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use czjira::domain::{CommitType, WorkflowTransition};

#[test]
fn defaults_match_all() {
    let keys: Vec<String> = CommitType::defaults().into_iter().map(|t| t.key).collect();
    assert_eq!(keys.len(), 11);
    assert_eq!(keys, CommitType::ALL);
}

#[test]
fn defaults_have_titles_and_emoji() {
    for t in CommitType::defaults() {
        assert!(!t.description.is_empty(), "{} has no description", t.key);
        assert!(!t.title.is_empty(), "{} has no title", t.key);
        assert!(!t.emoji.is_empty(), "{} has no emoji", t.key);
    }
    let feat = &CommitType::defaults()[0];
    assert_eq!(feat.title, "Features");
    assert_eq!(feat.emoji, "✨");
}

#[test]
fn workflow_defaults() {
    let workflows = WorkflowTransition::defaults();
    let keys: Vec<&str> = workflows.iter().map(|w| w.key.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "nothing",
            "read-for-sprint",
            "dev-in-progress",
            "code-review",
            "blocked"
        ]
    );
    assert_eq!(workflows[0].key, WorkflowTransition::NOTHING);
    assert_eq!(workflows[3].title, "CODE REVIEW");
}

#[test]
fn workflow_keys_have_no_spaces() {
    for w in WorkflowTransition::defaults() {
        assert!(!w.key.contains(' '), "{:?} contains a space", w.key);
    }
}
