// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::fmt;

use serde::{Deserialize, Serialize};

/// A change type offered in the type picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitType {
    pub key: String,
    pub description: String,
    /// Changelog grouping heading
    pub title: String,
    #[serde(default)]
    pub emoji: String,
}

impl CommitType {
    /// Keys of the built-in catalog, in display order.
    pub const ALL: &'static [&'static str] = &[
        "feat", "fix", "refactor", "style", "chore", "docs", "test", "perf", "build", "ci",
        "revert",
    ];

    pub fn new(key: &str, description: &str, title: &str, emoji: &str) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
            title: title.into(),
            emoji: emoji.into(),
        }
    }

    /// The built-in type catalog.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(
                "feat",
                "A new feature for the project.",
                "Features",
                "✨",
            ),
            Self::new(
                "fix",
                "A fix for an error that causes bugs in the system.",
                "Bug Fixes",
                "🐛",
            ),
            Self::new(
                "refactor",
                "A code change that has no impact on business rules.",
                "Code Refactoring",
                "📦",
            ),
            Self::new(
                "style",
                "Formatting or code style changes that do not alter behaviour.",
                "Styles",
                "💎",
            ),
            Self::new(
                "chore",
                "Project changes that touch neither sources (/src) nor tests (/tests).",
                "Chores",
                "♻️",
            ),
            Self::new(
                "docs",
                "Documentation only changes.",
                "Documentation",
                "📚",
            ),
            Self::new("test", "Any change to test code.", "Tests", "🚨"),
            Self::new(
                "perf",
                "A change that improves performance.",
                "Performance Improvements",
                "🚀",
            ),
            Self::new(
                "build",
                "Changes to the build process or external dependencies.",
                "Builds",
                "🛠",
            ),
            Self::new(
                "ci",
                "Changes to CI configuration files.",
                "Continuous Integrations",
                "⚙️",
            ),
            Self::new("revert", "Reverts a previous commit.", "Reverts", "🗑"),
        ]
    }
}

/// A composed commit message. Only the header is mandatory; every other
/// section has already been wrapped when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    pub header: String,
    pub body: Option<String>,
    pub breaking: Option<String>,
    pub footer: Option<String>,
}

impl CommitMessage {
    /// Present sections in message order.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.header.as_str()).chain(
            [&self.body, &self.breaking, &self.footer]
                .into_iter()
                .filter_map(|s| s.as_deref()),
        )
    }
}

impl fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: Vec<&str> = self.sections().collect();
        write!(f, "{}", text.join("\n\n"))
    }
}
