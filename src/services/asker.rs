// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::path::Path;

use console::style;
use dialoguer::{Confirm, Input, Select};

use crate::domain::{AnswerSet, AnswerValue};
use crate::error::{Error, Result};
use crate::services::questions::{Question, QuestionKind};

/// Source of answers for a [`QuestionFlow`](crate::services::questions::QuestionFlow).
pub trait Asker {
    /// Produce a raw (unfiltered) answer. `answers` holds everything
    /// collected earlier in the same pass.
    fn prompt(&mut self, question: &Question, answers: &AnswerSet) -> Result<AnswerValue>;

    /// Called when an answer fails validation. Returning `Ok` asks the
    /// question again.
    fn reject(&mut self, question: &Question, message: &str) -> Result<()>;

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;
}

/// Asks on the terminal with dialoguer widgets.
#[derive(Debug, Default)]
pub struct TerminalAsker;

impl TerminalAsker {
    pub fn new() -> Self {
        Self
    }

    fn text(prompt: &str, default: Option<&AnswerValue>) -> Result<AnswerValue> {
        let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
        if let Some(default) = default.and_then(AnswerValue::as_text) {
            input = input.default(default.to_string());
        }
        Ok(AnswerValue::Text(input.interact_text()?))
    }

    /// Question text, the remaining budget, then the header built so far
    /// (`feat(core): `) on its own line.
    pub fn limited_prompt(message: &str, label: &str, remaining: usize) -> String {
        format!(
            "{} {}\n{}",
            message,
            style(format!("({remaining} characters max)")).dim(),
            style(label).cyan()
        )
    }
}

impl Asker for TerminalAsker {
    fn prompt(&mut self, question: &Question, answers: &AnswerSet) -> Result<AnswerValue> {
        match &question.kind {
            QuestionKind::Select(choices) => {
                let items: Vec<&str> = choices.iter().map(|c| c.name.as_str()).collect();
                let default = question
                    .default
                    .as_ref()
                    .and_then(AnswerValue::as_text)
                    .and_then(|d| choices.iter().position(|c| c.value == d))
                    .unwrap_or(0);

                let selection = Select::new()
                    .with_prompt(&question.message)
                    .items(&items)
                    .default(default)
                    .interact_opt()?
                    .ok_or(Error::Cancelled)?;

                Ok(AnswerValue::Text(choices[selection].value.clone()))
            }
            QuestionKind::Input => Self::text(&question.message, question.default.as_ref()),
            QuestionKind::LimitedInput { max_length } => {
                let label = question.leading_label(answers).unwrap_or_default();
                let remaining = max_length.saturating_sub(label.chars().count());
                let prompt = Self::limited_prompt(&question.message, &label, remaining);
                Self::text(&prompt, question.default.as_ref())
            }
            QuestionKind::Confirm => {
                let default = question
                    .default
                    .as_ref()
                    .and_then(AnswerValue::as_bool)
                    .unwrap_or(false);
                let answer = Confirm::new()
                    .with_prompt(&question.message)
                    .default(default)
                    .interact_opt()?
                    .ok_or(Error::Cancelled)?;
                Ok(AnswerValue::Bool(answer))
            }
        }
    }

    fn reject(&mut self, _question: &Question, message: &str) -> Result<()> {
        eprintln!("{} {}", style(">>").red().bold(), style(message).red());
        Ok(())
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(message)
            .default(default)
            .interact_opt()?
            .ok_or(Error::Cancelled)
    }
}

/// Answers from a prepared [`AnswerSet`]. Unscripted questions take their
/// default, then the first choice, empty text or `false`.
#[derive(Debug, Clone)]
pub struct ScriptedAsker {
    answers: AnswerSet,
    confirm: bool,
}

impl ScriptedAsker {
    pub fn new(answers: AnswerSet) -> Self {
        Self {
            answers,
            confirm: true,
        }
    }

    /// Read answers from a JSON object keyed by question name.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::Answers(format!("{}: {e}", path.display())))?;
        let answers: AnswerSet =
            serde_json::from_str(&raw).map_err(|e| Error::Answers(e.to_string()))?;
        Ok(Self::new(answers))
    }

    /// Answer for the final confirmation.
    pub fn with_confirm(mut self, confirm: bool) -> Self {
        self.confirm = confirm;
        self
    }
}

impl Asker for ScriptedAsker {
    fn prompt(&mut self, question: &Question, _answers: &AnswerSet) -> Result<AnswerValue> {
        if let Some(value) = self.answers.get(question.key) {
            return Ok(value);
        }
        if let Some(default) = &question.default {
            return Ok(default.clone());
        }
        Ok(match &question.kind {
            QuestionKind::Select(choices) => AnswerValue::Text(
                choices.first().map(|c| c.value.clone()).unwrap_or_default(),
            ),
            QuestionKind::Confirm => AnswerValue::Bool(false),
            QuestionKind::Input | QuestionKind::LimitedInput { .. } => {
                AnswerValue::Text(String::new())
            }
        })
    }

    fn reject(&mut self, question: &Question, message: &str) -> Result<()> {
        Err(Error::InvalidAnswer {
            question: question.key.to_string(),
            message: message.to_string(),
        })
    }

    fn confirm(&mut self, _message: &str, _default: bool) -> Result<bool> {
        Ok(self.confirm)
    }
}
