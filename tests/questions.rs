// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

mod helpers;

use std::collections::VecDeque;

use czjira::config::{Config, Options};
use czjira::domain::{AnswerKey, AnswerSet, AnswerValue, WorkflowTransition};
use czjira::error::{Error, Result};
use czjira::services::asker::{Asker, ScriptedAsker, TerminalAsker};
use czjira::services::questions::{
    Gate, Question, QuestionFlow, QuestionKind, filter_scope, filter_subject,
};
use helpers::base_answers;
use proptest::prelude::*;

/// Answers from a queue and records what was asked and rejected.
#[derive(Default)]
struct QueueAsker {
    replies: VecDeque<AnswerValue>,
    asked: Vec<AnswerKey>,
    rejected: Vec<String>,
}

impl QueueAsker {
    fn new(replies: Vec<AnswerValue>) -> Self {
        Self {
            replies: replies.into(),
            ..Self::default()
        }
    }
}

impl Asker for QueueAsker {
    fn prompt(&mut self, question: &Question, _answers: &AnswerSet) -> Result<AnswerValue> {
        self.asked.push(question.key);
        self.replies.pop_front().ok_or(Error::Cancelled)
    }

    fn reject(&mut self, _question: &Question, message: &str) -> Result<()> {
        self.rejected.push(message.to_string());
        Ok(())
    }

    fn confirm(&mut self, _message: &str, default: bool) -> Result<bool> {
        Ok(default)
    }
}

fn config_with(options: Options) -> Config {
    Config::resolve(&options, "").unwrap()
}

fn scripted(answers: AnswerSet, config: &Config) -> Result<AnswerSet> {
    QuestionFlow::new(config).ask(&mut ScriptedAsker::new(answers))
}

// ─── Step order and gates ─────────────────────────────────────────────────────

#[test]
fn questions_in_order() {
    let flow = QuestionFlow::new(&Config::default());
    let keys: Vec<AnswerKey> = flow.questions().iter().map(|q| q.key).collect();
    assert_eq!(
        keys,
        vec![
            AnswerKey::Type,
            AnswerKey::Scope,
            AnswerKey::Subject,
            AnswerKey::Body,
            AnswerKey::IsBreaking,
            AnswerKey::IsBreaking,
            AnswerKey::Breaking,
            AnswerKey::IsIssueAffected,
            AnswerKey::Jira,
            AnswerKey::Workflow,
            AnswerKey::Time,
            AnswerKey::Comment,
        ]
    );
}

#[test]
fn minimal_pass_asks_only_open_questions() {
    let mut asker = QueueAsker::new(vec![
        "feat".into(),
        "Core ".into(),
        "add widget.".into(),
        "".into(),
        false.into(),
        false.into(),
    ]);
    let answers = QuestionFlow::new(&Config::default())
        .ask(&mut asker)
        .unwrap();

    assert_eq!(
        asker.asked,
        vec![
            AnswerKey::Type,
            AnswerKey::Scope,
            AnswerKey::Subject,
            AnswerKey::Body,
            AnswerKey::IsBreaking,
            AnswerKey::IsIssueAffected,
        ]
    );
    assert_eq!(answers.scope.as_deref(), Some("core"));
    assert_eq!(answers.subject.as_deref(), Some("add widget"));
    assert_eq!(answers.is_issue_affected, Some(false));
    assert!(answers.jira.is_none());
}

#[test]
fn breaking_needs_second_confirmation() {
    let mut asker = QueueAsker::new(vec![
        "feat".into(),
        "".into(),
        "add widget".into(),
        "".into(),
        true.into(),
        false.into(),
        false.into(),
    ]);
    let answers = QuestionFlow::new(&Config::default())
        .ask(&mut asker)
        .unwrap();

    assert_eq!(answers.is_breaking, Some(false));
    assert!(answers.breaking.is_none());
    assert!(!asker.asked.contains(&AnswerKey::Breaking));
}

#[test]
fn breaking_confirmed_twice_asks_description() {
    let mut asker = QueueAsker::new(vec![
        "feat".into(),
        "".into(),
        "add widget".into(),
        "".into(),
        true.into(),
        true.into(),
        "drops v1 API".into(),
        false.into(),
    ]);
    let answers = QuestionFlow::new(&Config::default())
        .ask(&mut asker)
        .unwrap();

    assert_eq!(answers.is_breaking, Some(true));
    assert_eq!(answers.breaking.as_deref(), Some("drops v1 API"));
}

#[test]
fn skip_scope_omits_scope_question() {
    let config = config_with(Options {
        skip_scope: Some(true),
        ..Options::default()
    });
    let flow = QuestionFlow::new(&config);
    let scope = flow
        .questions()
        .iter()
        .find(|q| q.key == AnswerKey::Scope)
        .unwrap();
    assert_eq!(scope.gate, Gate::Never);

    let answers = scripted(base_answers("feat", "core", "add widget"), &config).unwrap();
    assert!(answers.scope.is_none());
}

#[test]
fn jira_mode_off_skips_issue_branch() {
    let mut config = Config::default();
    config.jira_mode = false;
    let answers = AnswerSet {
        is_issue_affected: Some(true),
        jira: Some("ABC-1".into()),
        ..base_answers("feat", "core", "add widget")
    };
    let answers = scripted(answers, &config).unwrap();
    assert!(answers.is_issue_affected.is_none());
    assert!(answers.jira.is_none());
}

#[test]
fn fixed_scopes_become_a_selection() {
    let config = config_with(Options {
        scopes: Some(vec!["API".into(), "cli".into()]),
        ..Options::default()
    });
    let flow = QuestionFlow::new(&config);
    let scope = &flow.questions()[1];
    assert!(matches!(scope.kind, QuestionKind::Select(ref c) if c.len() == 2));

    let answers = scripted(base_answers("feat", "API", "add widget"), &config).unwrap();
    assert_eq!(answers.scope.as_deref(), Some("api"));

    let err = scripted(base_answers("feat", "web", "add widget"), &config).unwrap_err();
    assert!(matches!(err, Error::InvalidAnswer { ref question, .. } if question == "scope"));
}

// ─── Subject validation ───────────────────────────────────────────────────────

#[test]
fn short_subject_is_asked_again() {
    let config = config_with(Options {
        min_header_width: Some(5),
        ..Options::default()
    });
    let mut asker = QueueAsker::new(vec![
        "feat".into(),
        "".into(),
        "fix".into(),
        "add widget".into(),
        "".into(),
        false.into(),
        false.into(),
    ]);
    let answers = QuestionFlow::new(&config).ask(&mut asker).unwrap();

    assert_eq!(asker.rejected.len(), 1);
    assert!(asker.rejected[0].contains("at least 5"));
    assert_eq!(answers.subject.as_deref(), Some("add widget"));
}

#[test]
fn header_over_limit_is_rejected() {
    let config = config_with(Options {
        max_header_width: Some(20),
        ..Options::default()
    });
    // "feat(core): " is 12 characters, leaving 8 for the subject
    assert!(scripted(base_answers("feat", "core", "12345678"), &config).is_ok());

    let err = scripted(base_answers("feat", "core", "123456789"), &config).unwrap_err();
    match err {
        Error::InvalidAnswer { question, message } => {
            assert_eq!(question, "subject");
            assert!(message.contains("limit is 20"), "got: {message}");
        }
        other => panic!("expected InvalidAnswer, got {other:?}"),
    }
}

#[test]
fn leading_label_shows_header_so_far() {
    let flow = QuestionFlow::new(&Config::default());
    let subject = &flow.questions()[2];
    let answers = AnswerSet {
        commit_type: Some("fix".into()),
        scope: Some("git".into()),
        ..AnswerSet::default()
    };
    assert_eq!(subject.leading_label(&answers).as_deref(), Some("fix(git): "));
    assert_eq!(flow.questions()[0].leading_label(&answers), None);
}

#[test]
fn limited_prompt_keeps_label_intact() {
    console::set_colors_enabled(false);
    let prompt = TerminalAsker::limited_prompt("Write a subject:", "fix(git): ", 62);
    assert_eq!(prompt, "Write a subject: (62 characters max)\nfix(git): ");
}

// ─── Issue questions ──────────────────────────────────────────────────────────

fn issue_answers(jira: Option<&str>, workflow: &str) -> AnswerSet {
    AnswerSet {
        is_issue_affected: Some(true),
        jira: jira.map(Into::into),
        workflow: Some(workflow.into()),
        ..base_answers("fix", "api", "handle empty payload")
    }
}

#[test]
fn issue_key_is_upper_cased() {
    let answers = scripted(issue_answers(Some("abc-42"), "code-review"), &Config::default()).unwrap();
    assert_eq!(answers.jira.as_deref(), Some("ABC-42"));
    assert_eq!(answers.workflow.as_deref(), Some("code-review"));
    assert_eq!(answers.time.as_deref(), Some(""));
}

#[test]
fn empty_issue_key_is_rejected() {
    let err = scripted(issue_answers(Some(""), "nothing"), &Config::default()).unwrap_err();
    match err {
        Error::InvalidAnswer { question, message } => {
            assert_eq!(question, "jira");
            assert!(message.contains("required"));
        }
        other => panic!("expected InvalidAnswer, got {other:?}"),
    }
}

#[test]
fn malformed_issue_key_is_rejected() {
    let err = scripted(issue_answers(Some("ABC123"), "nothing"), &Config::default()).unwrap_err();
    assert!(matches!(err, Error::InvalidAnswer { ref question, .. } if question == "jira"));
}

#[test]
fn issue_key_defaults_from_branch() {
    let config = Config::resolve(&Options::default(), "feature/X-ABC-123-login").unwrap();
    let answers = scripted(issue_answers(None, "nothing"), &config).unwrap();
    assert_eq!(answers.jira.as_deref(), Some("ABC-123"));
}

#[test]
fn workflow_with_space_is_rejected_even_in_catalog() {
    let config = config_with(Options {
        workflows: Some(vec![
            WorkflowTransition::new("nothing", "DO NOTHING", "Leave it"),
            WorkflowTransition::new("in review", "IN REVIEW", "Send to review"),
        ]),
        ..Options::default()
    });
    let err = scripted(issue_answers(Some("ABC-1"), "in review"), &config).unwrap_err();
    match err {
        Error::InvalidAnswer { question, message } => {
            assert_eq!(question, "workflow");
            assert!(message.contains("spaces"));
        }
        other => panic!("expected InvalidAnswer, got {other:?}"),
    }
}

#[test]
fn unknown_type_is_rejected() {
    let err = scripted(base_answers("yolo", "", "ship it"), &Config::default()).unwrap_err();
    assert!(matches!(err, Error::InvalidAnswer { ref question, .. } if question == "type"));
}

// ─── Filters ──────────────────────────────────────────────────────────────────

#[test]
fn subject_filter_strips_trailing_periods() {
    assert_eq!(filter_subject("  add widget...  "), "add widget");
    assert_eq!(filter_subject("v1.2 support"), "v1.2 support");
    assert_eq!(filter_subject("..."), "");
}

#[test]
fn scope_filter_trims_and_lowercases() {
    assert_eq!(filter_scope("  Core "), "core");
}

proptest! {
    #[test]
    fn subject_filter_is_idempotent(subject in ".{0,80}") {
        let once = filter_subject(&subject);
        prop_assert_eq!(filter_subject(&once), once.clone());
        prop_assert!(!once.ends_with('.'));
    }
}
