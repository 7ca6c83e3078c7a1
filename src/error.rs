// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

// miette's Diagnostic derive generates code that triggers this false positive
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("Operation cancelled by user")]
    Cancelled,

    #[error("Invalid answer for '{question}': {message}")]
    #[diagnostic(
        code(czjira::answers::invalid),
        help("Fix the value in the answers file")
    )]
    InvalidAnswer { question: String, message: String },

    #[error("Cannot read answers: {0}")]
    #[diagnostic(
        code(czjira::answers::unreadable),
        help("Answers are a JSON object keyed by question name")
    )]
    Answers(String),

    #[error("Not an interactive terminal")]
    #[diagnostic(
        code(czjira::terminal::required),
        help("Pass --answers <FILE> when running from scripts or hooks")
    )]
    NotATerminal,

    #[error("Configuration error: {0}")]
    #[diagnostic(code(czjira::config::error))]
    Config(String),

    #[error("Git error: {0}")]
    #[diagnostic(code(czjira::git::error))]
    Git(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Dialog error: {0}")]
    Dialog(String),
}

impl From<dialoguer::Error> for Error {
    fn from(e: dialoguer::Error) -> Self {
        Error::Dialog(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
