// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

#![no_main]

use czjira::config::Config;
use czjira::domain::AnswerSet;
use czjira::services::composer::CommitComposer;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let mut parts = s.split('\u{0}');
    let mut next = || parts.next().map(str::to_string);
    let answers = AnswerSet {
        commit_type: next(),
        scope: next(),
        subject: next(),
        body: next(),
        breaking: next(),
        jira: next(),
        workflow: next(),
        time: next(),
        comment: next(),
        is_issue_affected: Some(data.len() % 2 == 0),
        ..AnswerSet::default()
    };
    let message = CommitComposer::compose(&answers, &Config::default());
    let _ = message.to_string();
});
