// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

/// One entry of a single-select question: the label shown and the key stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub name: String,
    pub value: String,
}

impl Choice {
    /// Build a choice whose label is `"<label>:"` right-padded to `width`,
    /// then a space and the description.
    pub fn padded(label: &str, description: &str, width: usize, value: &str) -> Self {
        let head = format!("{label}:");
        Self {
            name: format!("{head:<width$} {description}"),
            value: value.to_string(),
        }
    }
}
