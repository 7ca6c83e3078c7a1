// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use console::{measure_text_width, style};
use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::services::asker::Asker;
use crate::services::composer::CommitComposer;
use crate::services::questions::QuestionFlow;

/// What happened to the composed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Delivered,
    /// The user declined the preview; nothing was delivered
    Declined,
}

pub struct Prompter {
    config: Config,
    flow: QuestionFlow,
}

impl Prompter {
    pub fn new(config: Config) -> Self {
        let flow = QuestionFlow::new(&config);
        Self { config, flow }
    }

    /// Ask all questions, compose the message and hand it to `commit`.
    ///
    /// In test mode the message goes straight to `commit`. Otherwise it is
    /// previewed and delivered only if the user confirms. `commit` is called
    /// at most once, always with the complete message.
    pub fn run<A, F>(&self, asker: &mut A, commit: F, test_mode: bool) -> Result<Delivery>
    where
        A: Asker + ?Sized,
        F: FnOnce(&str) -> Result<()>,
    {
        let answers = self.flow.ask(asker)?;
        let message = CommitComposer::compose(&answers, &self.config).to_string();

        if test_mode {
            commit(&message)?;
            return Ok(Delivery::Delivered);
        }

        eprintln!();
        eprintln!("{}", style("Commit preview:").underlined());
        eprintln!("{}", render_preview(&message));

        if asker.confirm("Do you want to commit with this message?", true)? {
            commit(&message)?;
            Ok(Delivery::Delivered)
        } else {
            debug!("commit declined at preview");
            Ok(Delivery::Declined)
        }
    }
}

/// Draw `message` in a padded single-line box, text in green.
pub fn render_preview(message: &str) -> String {
    const PAD_X: usize = 3;
    const MARGIN: &str = " ";

    let lines: Vec<&str> = message.lines().collect();
    let inner = lines.iter().map(|l| measure_text_width(l)).max().unwrap_or(0) + PAD_X * 2;

    let blank = format!("{MARGIN}│{}│", " ".repeat(inner));
    let mut out = vec![
        String::new(),
        format!("{MARGIN}┌{}┐", "─".repeat(inner)),
        blank.clone(),
    ];
    for line in &lines {
        let fill = inner - PAD_X - measure_text_width(line);
        out.push(format!(
            "{MARGIN}│{}{}{}│",
            " ".repeat(PAD_X),
            style(line).green(),
            " ".repeat(fill)
        ));
    }
    out.push(blank);
    out.push(format!("{MARGIN}└{}┘", "─".repeat(inner)));
    out.push(String::new());
    out.join("\n")
}
