// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use tracing::debug;

use crate::config::Config;
use crate::domain::{AnswerKey, AnswerSet, CommitMessage, WorkflowTransition};

pub const BREAKING_PREFIX: &str = "BREAKING CHANGE: ";

/// Stands in for a missing body when a breaking note or footer follows.
const PLACEHOLDER_BODY: &str = "-";

/// `type(scope): `, or `type: ` without a scope.
pub fn header_prefix(commit_type: &str, scope: Option<&str>) -> String {
    match scope.filter(|s| !s.is_empty()) {
        Some(scope) => format!("{commit_type}({scope}): "),
        None => format!("{commit_type}: "),
    }
}

/// Reflow `text` to `width` columns, breaking only at spaces. Words longer
/// than `width` are kept whole.
pub fn wrap(text: &str, width: usize) -> String {
    let options = textwrap::Options::new(width)
        .break_words(false)
        .wrap_algorithm(textwrap::WrapAlgorithm::FirstFit)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
        .word_splitter(textwrap::WordSplitter::NoHyphenation);
    textwrap::fill(text, options)
}

pub struct CommitComposer;

impl CommitComposer {
    /// Build the commit message from a complete answer set.
    pub fn compose(answers: &AnswerSet, config: &Config) -> CommitMessage {
        let width = config.max_line_width;

        let header = Self::header(answers, answers.subject.as_deref().unwrap_or_default());

        let body = answers
            .body
            .as_deref()
            .map(|b| wrap(b, width))
            .filter(|b| !b.is_empty());

        let breaking = Self::breaking_note(answers.breaking.as_deref()).map(|b| wrap(&b, width));

        let footer = Self::footer(answers);

        let body = match body {
            None if breaking.is_some() || footer.is_some() => Some(wrap(PLACEHOLDER_BODY, width)),
            body => body,
        };

        debug!(
            body = body.is_some(),
            breaking = breaking.is_some(),
            footer = footer.is_some(),
            "commit message composed"
        );

        CommitMessage {
            header,
            body,
            breaking,
            footer,
        }
    }

    /// Header line for `subject` under the type and scope already answered.
    pub fn header(answers: &AnswerSet, subject: &str) -> String {
        let prefix = header_prefix(
            answers.text(AnswerKey::Type).unwrap_or_default(),
            answers.text(AnswerKey::Scope),
        );
        format!("{prefix}{subject}")
    }

    fn breaking_note(breaking: Option<&str>) -> Option<String> {
        let breaking = breaking?.trim();
        if breaking.is_empty() {
            return None;
        }
        let note = breaking.strip_prefix(BREAKING_PREFIX).unwrap_or(breaking);
        Some(format!("{BREAKING_PREFIX}{note}"))
    }

    /// Smart commit line: `KEY-1 #time 1h #code-review #comment text`.
    pub fn footer(answers: &AnswerSet) -> Option<String> {
        if !answers.is_true(AnswerKey::IsIssueAffected) {
            return None;
        }
        let issue = answers.jira.as_deref().map(str::trim).filter(|j| !j.is_empty())?;

        let present = |value: &Option<String>| value.clone().filter(|v| !v.is_empty());

        let time = present(&answers.time).map(|t| format!("#time {t}"));
        let workflow = present(&answers.workflow)
            .filter(|w| w != WorkflowTransition::NOTHING)
            .map(|w| format!("#{w}"));
        let comment = present(&answers.comment).map(|c| format!("#comment {c}"));

        let parts: Vec<String> = std::iter::once(issue.to_string())
            .chain(time)
            .chain(workflow)
            .chain(comment)
            .collect();

        Some(parts.join(" "))
    }
}
