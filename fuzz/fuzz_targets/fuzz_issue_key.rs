// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

#![no_main]

use czjira::services::issue::{detect_issue_key, is_issue_key};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Some(key) = detect_issue_key(s) {
            assert!(is_issue_key(&key));
        }
    }
});
