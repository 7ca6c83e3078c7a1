// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of one answer in an [`AnswerSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnswerKey {
    Type,
    Scope,
    Subject,
    Body,
    IsBreaking,
    Breaking,
    IsIssueAffected,
    Jira,
    Workflow,
    Time,
    Comment,
}

impl AnswerKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Scope => "scope",
            Self::Subject => "subject",
            Self::Body => "body",
            Self::IsBreaking => "isBreaking",
            Self::Breaking => "breaking",
            Self::IsIssueAffected => "isIssueAffected",
            Self::Jira => "jira",
            Self::Workflow => "workflow",
            Self::Time => "time",
            Self::Comment => "comment",
        }
    }
}

impl fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerValue {
    Text(String),
    Bool(bool),
}

impl AnswerValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Text(_) => None,
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for AnswerValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// Answers collected in one pass. Questions whose gate was closed leave
/// their field empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnswerSet {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub commit_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_breaking: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breaking: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_issue_affected: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jira: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl AnswerSet {
    /// Fold one answer in. A value of the wrong kind for `key` is ignored.
    pub fn set(&mut self, key: AnswerKey, value: AnswerValue) {
        match (key, value) {
            (AnswerKey::IsBreaking, AnswerValue::Bool(b)) => self.is_breaking = Some(b),
            (AnswerKey::IsIssueAffected, AnswerValue::Bool(b)) => self.is_issue_affected = Some(b),
            (AnswerKey::IsBreaking | AnswerKey::IsIssueAffected, AnswerValue::Text(_)) => {}
            (_, AnswerValue::Bool(_)) => {}
            (key, AnswerValue::Text(s)) => {
                if let Some(slot) = self.text_slot(key) {
                    *slot = Some(s);
                }
            }
        }
    }

    pub fn get(&self, key: AnswerKey) -> Option<AnswerValue> {
        match key {
            AnswerKey::IsBreaking => self.is_breaking.map(AnswerValue::Bool),
            AnswerKey::IsIssueAffected => self.is_issue_affected.map(AnswerValue::Bool),
            key => self.text(key).map(AnswerValue::from),
        }
    }

    pub fn text(&self, key: AnswerKey) -> Option<&str> {
        let field = match key {
            AnswerKey::Type => &self.commit_type,
            AnswerKey::Scope => &self.scope,
            AnswerKey::Subject => &self.subject,
            AnswerKey::Body => &self.body,
            AnswerKey::Breaking => &self.breaking,
            AnswerKey::Jira => &self.jira,
            AnswerKey::Workflow => &self.workflow,
            AnswerKey::Time => &self.time,
            AnswerKey::Comment => &self.comment,
            AnswerKey::IsBreaking | AnswerKey::IsIssueAffected => return None,
        };
        field.as_deref()
    }

    /// True only when a confirm answer exists and is yes.
    pub fn is_true(&self, key: AnswerKey) -> bool {
        matches!(self.get(key), Some(AnswerValue::Bool(true)))
    }

    fn text_slot(&mut self, key: AnswerKey) -> Option<&mut Option<String>> {
        Some(match key {
            AnswerKey::Type => &mut self.commit_type,
            AnswerKey::Scope => &mut self.scope,
            AnswerKey::Subject => &mut self.subject,
            AnswerKey::Body => &mut self.body,
            AnswerKey::Breaking => &mut self.breaking,
            AnswerKey::Jira => &mut self.jira,
            AnswerKey::Workflow => &mut self.workflow,
            AnswerKey::Time => &mut self.time,
            AnswerKey::Comment => &mut self.comment,
            AnswerKey::IsBreaking | AnswerKey::IsIssueAffected => return None,
        })
    }
}
