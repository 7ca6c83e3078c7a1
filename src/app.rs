// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::io::IsTerminal;

use console::style;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::config::{Config, Options};
use crate::error::{Error, Result};
use crate::services::{
    asker::{Asker, ScriptedAsker, TerminalAsker},
    git::GitService,
    prompter::{Delivery, Prompter},
};

pub struct App {
    cli: Cli,
    config: Config,
}

impl App {
    pub fn new(cli: Cli) -> Result<Self> {
        let options = Options::load()?;
        let branch = GitService::branch_name();
        let mut config = Config::resolve(&options, &branch)?;
        config.apply_cli(&cli);
        debug!(
            branch = %branch,
            jira_mode = config.jira_mode,
            skip_scope = config.skip_scope,
            "config loaded"
        );
        Ok(Self { cli, config })
    }

    pub fn run(&mut self) -> Result<()> {
        if let Some(ref cmd) = self.cli.command {
            return self.handle_command(cmd);
        }

        self.prompt_commit()
    }

    fn prompt_commit(&self) -> Result<()> {
        let prompter = Prompter::new(self.config.clone());
        let test_mode = self.cli.test_mode();

        let mut asker: Box<dyn Asker> = match &self.cli.answers {
            Some(path) => Box::new(ScriptedAsker::from_path(path)?),
            None => {
                let is_interactive =
                    std::io::stdout().is_terminal() && std::io::stdin().is_terminal();
                if !is_interactive {
                    return Err(Error::NotATerminal);
                }
                Box::new(TerminalAsker::new())
            }
        };

        let dry_run = self.cli.dry_run;
        let delivery = prompter.run(
            &mut *asker,
            |message| {
                if dry_run {
                    println!("{message}");
                    return Ok(());
                }
                GitService::discover()?.commit(message)?;
                eprintln!("{} Committed!", style("✓").green().bold());
                Ok(())
            },
            test_mode,
        )?;

        if delivery == Delivery::Declined {
            self.print_info("Commit discarded");
        }

        Ok(())
    }

    fn handle_command(&self, cmd: &Commands) -> Result<()> {
        match cmd {
            Commands::Init => {
                let path = Config::create_default()?;
                println!("Created config: {}", path.display());
                Ok(())
            }
            Commands::Config => {
                self.print_config();
                Ok(())
            }
            Commands::Completions { shell } => {
                let mut cmd = <Cli as clap::CommandFactory>::command();
                clap_complete::generate(*shell, &mut cmd, "czjira", &mut std::io::stdout());
                Ok(())
            }
        }
    }

    fn print_config(&self) {
        let config = &self.config;
        println!("Jira mode: {}", config.jira_mode);
        println!("Jira prefix: {}", config.jira_prefix);
        println!("Jira optional: {}", config.jira_optional);
        println!("Skip scope: {}", config.skip_scope);
        println!(
            "Header width: {}-{}",
            config.min_header_width, config.max_header_width
        );
        println!("Line width: {}", config.max_line_width);
        if config.has_scopes() {
            println!("Scopes: {}", config.scopes.join(", "));
        } else {
            println!("Scopes: (free text)");
        }
        if let Some(ref issue) = config.branch_issue {
            println!("Branch issue: {issue}");
        }
        println!();
        println!("[types]");
        for choice in &config.type_choices {
            println!("  {}", choice.name);
        }
        println!();
        println!("[workflows]");
        for choice in &config.workflow_choices {
            println!("  {}", choice.name);
        }
    }

    // ─── Output Helpers ───

    fn print_info(&self, msg: &str) {
        eprintln!("{} {}", style("info:").cyan(), msg);
    }
}
