// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

pub mod asker;
pub mod composer;
pub mod git;
pub mod issue;
pub mod prompter;
pub mod questions;
