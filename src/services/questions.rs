// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::fmt;

use tracing::debug;

use crate::config::Config;
use crate::domain::{AnswerKey, AnswerSet, AnswerValue, Choice};
use crate::error::Result;
use crate::services::asker::Asker;
use crate::services::composer::{self, CommitComposer};
use crate::services::issue;

#[derive(Debug, Clone)]
pub enum QuestionKind {
    Select(Vec<Choice>),
    Input,
    /// Free text shown after the header built so far, capped so the whole
    /// header stays within `max_length`
    LimitedInput { max_length: usize },
    Confirm,
}

/// When a question is asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Always,
    Never,
    /// Asked only when the given confirm was answered yes
    WhenTrue(AnswerKey),
}

impl Gate {
    fn from_toggle(enabled: bool) -> Self {
        if enabled { Self::Always } else { Self::Never }
    }
}

type Filter = fn(&str) -> String;
type Validator = Box<dyn Fn(&str, &AnswerSet) -> std::result::Result<(), String> + Send + Sync>;

pub struct Question {
    pub key: AnswerKey,
    pub kind: QuestionKind,
    pub message: String,
    pub gate: Gate,
    pub default: Option<AnswerValue>,
    filter: Option<Filter>,
    validate: Option<Validator>,
}

impl fmt::Debug for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Question")
            .field("key", &self.key)
            .field("kind", &self.kind)
            .field("gate", &self.gate)
            .field("default", &self.default)
            .finish_non_exhaustive()
    }
}

impl Question {
    pub fn new(key: AnswerKey, kind: QuestionKind, message: impl Into<String>) -> Self {
        Self {
            key,
            kind,
            message: message.into(),
            gate: Gate::Always,
            default: None,
            filter: None,
            validate: None,
        }
    }

    pub fn when(mut self, gate: Gate) -> Self {
        self.gate = gate;
        self
    }

    pub fn default_value<V: Into<AnswerValue>>(mut self, value: Option<V>) -> Self {
        self.default = value.map(Into::into);
        self
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn validate<F>(mut self, validate: F) -> Self
    where
        F: Fn(&str, &AnswerSet) -> std::result::Result<(), String> + Send + Sync + 'static,
    {
        self.validate = Some(Box::new(validate));
        self
    }

    pub fn is_open(&self, answers: &AnswerSet) -> bool {
        match self.gate {
            Gate::Always => true,
            Gate::Never => false,
            Gate::WhenTrue(key) => answers.is_true(key),
        }
    }

    /// Text shown in front of the input, e.g. `feat(core): ` for the subject.
    pub fn leading_label(&self, answers: &AnswerSet) -> Option<String> {
        match self.kind {
            QuestionKind::LimitedInput { .. } => Some(composer::header_prefix(
                answers.text(AnswerKey::Type).unwrap_or_default(),
                answers.text(AnswerKey::Scope),
            )),
            _ => None,
        }
    }

    pub fn apply_filter(&self, value: AnswerValue) -> AnswerValue {
        match (value, self.filter) {
            (AnswerValue::Text(s), Some(filter)) => AnswerValue::Text(filter(&s)),
            (value, _) => value,
        }
    }

    /// Validate a filtered value. The error is the corrective message to show.
    pub fn check(&self, value: &AnswerValue, answers: &AnswerSet) -> std::result::Result<(), String> {
        let Some(text) = value.as_text() else {
            return Ok(());
        };

        if let Some(validate) = &self.validate {
            validate(text, answers)?;
        }

        if let QuestionKind::Select(choices) = &self.kind {
            let filtered = |v: &str| self.filter.map_or_else(|| v.to_string(), |f| f(v));
            if !choices.iter().any(|c| filtered(&c.value) == text) {
                return Err(format!("'{text}' is not one of the available choices"));
            }
        }

        Ok(())
    }
}

/// Trim and drop trailing periods.
pub fn filter_subject(subject: &str) -> String {
    subject
        .trim_start()
        .trim_end_matches(|c: char| c == '.' || c.is_whitespace())
        .to_string()
}

pub fn filter_scope(scope: &str) -> String {
    scope.trim().to_lowercase()
}

/// The ordered questions of one commit prompt.
#[derive(Debug)]
pub struct QuestionFlow {
    questions: Vec<Question>,
}

impl QuestionFlow {
    pub fn new(config: &Config) -> Self {
        let scope_kind = if config.has_scopes() {
            QuestionKind::Select(
                config
                    .scopes
                    .iter()
                    .map(|s| Choice {
                        name: s.clone(),
                        value: s.clone(),
                    })
                    .collect(),
            )
        } else {
            QuestionKind::Input
        };
        let scope_hint = if config.has_scopes() {
            "(select from the list)"
        } else {
            "(press enter to skip)"
        };

        let min_header = config.min_header_width;
        let max_header = config.max_header_width;
        let jira_prefix = config.jira_prefix.clone();
        let issue_gate = Gate::WhenTrue(AnswerKey::IsIssueAffected);

        let questions = vec![
            Question::new(
                AnswerKey::Type,
                QuestionKind::Select(config.type_choices.clone()),
                "Select the type of change that you're committing:",
            )
            .default_value(config.default_type.clone()),
            Question::new(
                AnswerKey::Scope,
                scope_kind,
                format!("What is the scope of this change (e.g. component or file name) {scope_hint}:"),
            )
            .when(Gate::from_toggle(!config.skip_scope))
            .default_value(config.default_scope.clone())
            .filter(filter_scope),
            Question::new(
                AnswerKey::Subject,
                QuestionKind::LimitedInput {
                    max_length: max_header,
                },
                "Write a short, imperative tense description of the change:",
            )
            .default_value(config.default_subject.clone())
            .filter(filter_subject)
            .validate(move |subject, answers| {
                if subject.contains(['\n', '\r']) {
                    return Err("The subject must be a single line".into());
                }
                let length = subject.chars().count();
                if length < min_header {
                    return Err(format!(
                        "The subject must have at least {min_header} characters"
                    ));
                }
                let header = CommitComposer::header(answers, subject).chars().count();
                if header > max_header {
                    return Err(format!(
                        "The header is {header} characters long, the limit is {max_header}"
                    ));
                }
                Ok(())
            }),
            Question::new(
                AnswerKey::Body,
                QuestionKind::Input,
                "Provide a longer description of the change (press enter to skip):",
            )
            .default_value(config.default_body.clone()),
            Question::new(
                AnswerKey::IsBreaking,
                QuestionKind::Confirm,
                "Are there any breaking changes?",
            )
            .default_value(Some(false)),
            Question::new(
                AnswerKey::IsBreaking,
                QuestionKind::Confirm,
                "A breaking change bumps the major version. Are you sure?",
            )
            .when(Gate::WhenTrue(AnswerKey::IsBreaking))
            .default_value(Some(false)),
            Question::new(
                AnswerKey::Breaking,
                QuestionKind::Input,
                "Describe the breaking changes:",
            )
            .when(Gate::WhenTrue(AnswerKey::IsBreaking)),
            Question::new(
                AnswerKey::IsIssueAffected,
                QuestionKind::Confirm,
                "Does this change affect any Jira issue?",
            )
            .when(Gate::from_toggle(config.jira_mode))
            .default_value(Some(config.default_issues.unwrap_or(false))),
            Question::new(
                AnswerKey::Jira,
                QuestionKind::Input,
                format!("Enter the Jira issue key ({}-12345):", config.jira_prefix),
            )
            .when(issue_gate)
            .default_value(config.branch_issue.clone())
            .filter(issue::filter_issue_key)
            .validate(move |key, _| issue::validate_issue_key(key, &jira_prefix)),
            Question::new(
                AnswerKey::Workflow,
                QuestionKind::Select(config.workflow_choices.clone()),
                "Select the workflow transition for the Jira issue:",
            )
            .when(issue_gate)
            .validate(|workflow, _| issue::validate_workflow(workflow)),
            Question::new(
                AnswerKey::Time,
                QuestionKind::Input,
                "Time spent (e.g. 3h 15m) (optional):",
            )
            .when(issue_gate),
            Question::new(
                AnswerKey::Comment,
                QuestionKind::Input,
                "Jira comment (optional):",
            )
            .when(issue_gate),
        ];

        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Ask every open question in order, folding each answer in before the
    /// next gate is evaluated. Rejected answers are asked again.
    pub fn ask<A: Asker + ?Sized>(&self, asker: &mut A) -> Result<AnswerSet> {
        let mut answers = AnswerSet::default();

        for question in &self.questions {
            if !question.is_open(&answers) {
                debug!(question = %question.key, "question skipped");
                continue;
            }

            let value = loop {
                let raw = asker.prompt(question, &answers)?;
                let value = question.apply_filter(raw);
                match question.check(&value, &answers) {
                    Ok(()) => break value,
                    Err(message) => asker.reject(question, &message)?,
                }
            };

            debug!(question = %question.key, "question answered");
            answers.set(question.key, value);
        }

        Ok(answers)
    }
}
