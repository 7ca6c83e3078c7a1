// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};

/// A target ticket state, emitted as a `#<key>` smart commit directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowTransition {
    pub key: String,
    pub title: String,
    pub description: String,
}

impl WorkflowTransition {
    /// Key of the transition that leaves the ticket where it is.
    pub const NOTHING: &'static str = "nothing";

    pub fn new(key: &str, title: &str, description: &str) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(Self::NOTHING, "DO NOTHING", "Does not move the ticket."),
            Self::new(
                "read-for-sprint",
                "TO DO",
                "Moves the ticket to the pending column.",
            ),
            Self::new(
                "dev-in-progress",
                "DEV IN PROGRESS",
                "The ticket is under development.",
            ),
            Self::new(
                "code-review",
                "CODE REVIEW",
                "Development is done and the ticket goes to review.",
            ),
            Self::new(
                "blocked",
                "BLOCKED",
                "Moves the ticket to the impediments column.",
            ),
        ]
    }
}
