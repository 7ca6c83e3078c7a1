// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "czjira")]
#[command(version)]
#[command(about = "Conventional commit prompt with Jira smart commits", long_about = None)]
pub struct Cli {
    /// Commit without the preview confirmation
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Print message only, don't commit
    #[arg(long)]
    pub dry_run: bool,

    /// Read answers from a JSON file instead of prompting (implies --yes)
    #[arg(long, value_name = "FILE")]
    pub answers: Option<PathBuf>,

    /// Do not ask for a scope
    #[arg(long)]
    pub skip_scope: bool,

    /// Do not ask about Jira issues
    #[arg(long)]
    pub no_jira: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Whether the message is delivered without preview and confirmation.
    pub fn test_mode(&self) -> bool {
        self.yes || self.answers.is_some()
    }
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Initialize config file
    Init,
    /// Show resolved configuration
    Config,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
