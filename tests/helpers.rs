// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use czjira::config::Config;
use czjira::domain::AnswerSet;
use czjira::error::Result;
use czjira::services::asker::ScriptedAsker;
use czjira::services::prompter::{Delivery, Prompter};

/// Answers for a plain `type(scope): subject` commit with no Jira issue.
#[allow(dead_code)]
pub fn base_answers(commit_type: &str, scope: &str, subject: &str) -> AnswerSet {
    AnswerSet {
        commit_type: Some(commit_type.into()),
        scope: Some(scope.into()),
        subject: Some(subject.into()),
        is_issue_affected: Some(false),
        ..AnswerSet::default()
    }
}

/// Run the prompter in test mode and return what reached the commit callback.
#[allow(dead_code)]
pub fn run_test_mode(answers: AnswerSet, config: Config) -> Result<Option<String>> {
    let prompter = Prompter::new(config);
    let mut asker = ScriptedAsker::new(answers);
    let mut delivered = None;
    let delivery = prompter.run(
        &mut asker,
        |message| {
            delivered = Some(message.to_string());
            Ok(())
        },
        true,
    )?;
    assert_eq!(delivery, Delivery::Delivered);
    Ok(delivered)
}
