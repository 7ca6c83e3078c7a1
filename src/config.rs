// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Toml};
use serde::Deserialize;
use tracing::debug;

use crate::cli::Cli;
use crate::domain::{Choice, CommitType, WorkflowTransition};
use crate::error::{Error, Result};
use crate::services::issue;

const DEFAULT_MAX_HEADER_WIDTH: usize = 72;
const DEFAULT_MIN_HEADER_WIDTH: usize = 2;
const DEFAULT_MAX_LINE_WIDTH: usize = 72;
const DEFAULT_JIRA_PREFIX: &str = "JNR";

/// Project-level config file, looked up in the current directory.
pub const PROJECT_CONFIG_FILE: &str = ".czjira.toml";

/// Raw overrides as supplied by the user. Every field is optional; a value
/// that is absent or falsy (false, 0, empty) falls back to the built-in
/// default during [`Config::resolve`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    pub types: Option<Vec<CommitType>>,
    pub workflows: Option<Vec<WorkflowTransition>>,
    #[serde(alias = "jira_mode")]
    pub jira_mode: Option<bool>,
    #[serde(alias = "skip_scope")]
    pub skip_scope: Option<bool>,
    #[serde(alias = "max_header_width")]
    pub max_header_width: Option<usize>,
    #[serde(alias = "min_header_width")]
    pub min_header_width: Option<usize>,
    #[serde(alias = "max_line_width")]
    pub max_line_width: Option<usize>,
    #[serde(alias = "jira_prefix")]
    pub jira_prefix: Option<String>,
    #[serde(alias = "jira_optional")]
    pub jira_optional: Option<bool>,
    pub scopes: Option<Vec<String>>,
    #[serde(alias = "default_type")]
    pub default_type: Option<String>,
    #[serde(alias = "default_scope")]
    pub default_scope: Option<String>,
    #[serde(alias = "default_subject")]
    pub default_subject: Option<String>,
    #[serde(alias = "default_body")]
    pub default_body: Option<String>,
    #[serde(alias = "default_issues")]
    pub default_issues: Option<bool>,
}

impl Options {
    /// Load with priority: ENV > project config > user config
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::load_from(&cwd, Config::config_path().as_deref())
    }

    pub fn load_from(project_dir: &Path, user_config: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new();

        if let Some(path) = user_config {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        let project_config = project_dir.join(PROJECT_CONFIG_FILE);
        if project_config.exists() {
            figment = figment.merge(Toml::file(&project_config));
        }

        // CZJIRA_MAX_LINE_WIDTH, CZJIRA_JIRA_PREFIX, ...
        figment = figment.merge(Env::prefixed("CZJIRA_"));

        figment.extract().map_err(|e| Error::Config(e.to_string()))
    }
}

/// Treats the zero value of a type as "not set".
trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for usize {
    fn is_truthy(&self) -> bool {
        *self != 0
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

fn truthy_or<T: Truthy + Clone>(value: &Option<T>, default: T) -> T {
    match value {
        Some(v) if v.is_truthy() => v.clone(),
        _ => default,
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.clone().filter(|s| s.is_truthy())
}

/// Fully resolved configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub types: Vec<CommitType>,
    pub workflows: Vec<WorkflowTransition>,
    pub jira_mode: bool,
    pub skip_scope: bool,
    pub max_header_width: usize,
    pub min_header_width: usize,
    /// Wrap width for body and breaking-change note
    pub max_line_width: usize,
    /// Hint shown in the issue question, e.g. "JNR" for "JNR-12345"
    pub jira_prefix: String,
    pub jira_optional: bool,
    /// Fixed scope list; empty means free-text scope
    pub scopes: Vec<String>,
    pub default_type: Option<String>,
    pub default_scope: Option<String>,
    pub default_subject: Option<String>,
    pub default_body: Option<String>,
    pub default_issues: Option<bool>,

    pub type_choices: Vec<Choice>,
    pub workflow_choices: Vec<Choice>,
    /// Issue key found in the current branch name
    pub branch_issue: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self::merge(&Options::default(), "")
    }
}

impl Config {
    /// Overlay `options` on the built-in defaults and derive the choice
    /// lists. `branch` is the current branch name, empty when unknown.
    pub fn resolve(options: &Options, branch: &str) -> Result<Self> {
        let config = Self::merge(options, branch);
        config.validate()?;
        debug!(
            types = config.types.len(),
            workflows = config.workflows.len(),
            scopes = config.scopes.len(),
            branch_issue = ?config.branch_issue,
            "config resolved"
        );
        Ok(config)
    }

    // Per-field rules:
    //   types, workflows, scopes  non-empty list wins
    //   jiraMode, skipScope,      true wins (false falls back)
    //   jiraOptional
    //   header/line widths        non-zero wins
    //   jiraPrefix                non-empty string wins
    //   default*                  non-empty string kept, no built-in
    //   defaultIssues             kept as given, no built-in
    fn merge(options: &Options, branch: &str) -> Self {
        let types = truthy_or(&options.types, CommitType::defaults());
        let workflows = truthy_or(&options.workflows, WorkflowTransition::defaults());

        let type_choices = Self::type_choices(&types);
        let workflow_choices = Self::workflow_choices(&workflows);

        Self {
            jira_mode: truthy_or(&options.jira_mode, true),
            skip_scope: truthy_or(&options.skip_scope, false),
            max_header_width: truthy_or(&options.max_header_width, DEFAULT_MAX_HEADER_WIDTH),
            min_header_width: truthy_or(&options.min_header_width, DEFAULT_MIN_HEADER_WIDTH),
            max_line_width: truthy_or(&options.max_line_width, DEFAULT_MAX_LINE_WIDTH),
            jira_prefix: truthy_or(&options.jira_prefix, DEFAULT_JIRA_PREFIX.to_string()),
            jira_optional: truthy_or(&options.jira_optional, true),
            scopes: truthy_or(&options.scopes, Vec::new()),
            default_type: non_empty(&options.default_type),
            default_scope: non_empty(&options.default_scope),
            default_subject: non_empty(&options.default_subject),
            default_body: non_empty(&options.default_body),
            default_issues: options.default_issues,
            type_choices,
            workflow_choices,
            branch_issue: issue::detect_issue_key(branch),
            types,
            workflows,
        }
    }

    fn type_choices(types: &[CommitType]) -> Vec<Choice> {
        let width = types
            .iter()
            .map(|t| t.key.chars().count())
            .max()
            .unwrap_or(0)
            + 1;
        types
            .iter()
            .map(|t| Choice::padded(&t.key, &t.description, width, &t.key))
            .collect()
    }

    // Padding follows the longest key, not the longest title.
    fn workflow_choices(workflows: &[WorkflowTransition]) -> Vec<Choice> {
        let width = workflows
            .iter()
            .map(|w| w.key.chars().count())
            .max()
            .unwrap_or(0)
            + 1;
        workflows
            .iter()
            .map(|w| Choice::padded(&w.title, &w.description, width, &w.key))
            .collect()
    }

    /// Scope is picked from a list rather than typed.
    pub fn has_scopes(&self) -> bool {
        !self.scopes.is_empty()
    }

    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "czjira").map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if cli.skip_scope {
            self.skip_scope = true;
        }
        if cli.no_jira {
            self.jira_mode = false;
        }
    }

    fn validate(&self) -> Result<()> {
        Self::check_unique("types", self.types.iter().map(|t| t.key.as_str()))?;
        Self::check_unique("workflows", self.workflows.iter().map(|w| w.key.as_str()))?;

        if let Some(default) = &self.default_type {
            if !self.types.iter().any(|t| &t.key == default) {
                return Err(Error::Config(format!(
                    "defaultType '{default}' is not a key in types"
                )));
            }
        }

        // Scope answers are lower-cased, so compare the same way
        if let Some(default) = self.default_scope.as_deref().filter(|_| self.has_scopes()) {
            let default = default.trim().to_lowercase();
            if !self.scopes.iter().any(|s| s.trim().to_lowercase() == default) {
                return Err(Error::Config(format!(
                    "defaultScope '{default}' is not one of scopes"
                )));
            }
        }

        if self.min_header_width > self.max_header_width {
            return Err(Error::Config(format!(
                "minHeaderWidth ({}) must not exceed maxHeaderWidth ({})",
                self.min_header_width, self.max_header_width
            )));
        }

        Ok(())
    }

    fn check_unique<'a>(catalog: &str, keys: impl Iterator<Item = &'a str>) -> Result<()> {
        let mut seen = HashSet::new();
        for key in keys {
            if key.is_empty() {
                return Err(Error::Config(format!("{catalog} contains an empty key")));
            }
            if !seen.insert(key) {
                return Err(Error::Config(format!(
                    "{catalog} contains duplicate key '{key}'"
                )));
            }
        }
        Ok(())
    }

    /// Create default config file with secure permissions
    pub fn create_default() -> Result<PathBuf> {
        let Some(dir) = Self::config_dir() else {
            return Err(Error::Config("Cannot determine config directory".into()));
        };

        fs::create_dir_all(&dir)?;

        let path = dir.join("config.toml");
        let content = r#"# czjira configuration
#
# Values that are absent, false, 0 or empty fall back to the built-in
# defaults. Use --no-jira to turn the Jira questions off for one run.

# Ask for a Jira issue, workflow transition, time spent and comment
jiraMode = true

# Skip the scope question entirely
skipScope = false

# Subject line bounds (the whole "type(scope): subject" header)
maxHeaderWidth = 72
minHeaderWidth = 2

# Wrap width for body and breaking change note
maxLineWidth = 72

# Issue key hint shown in the Jira question
jiraPrefix = "JNR"

# Fixed scope list; leave empty for free-text scopes
# scopes = ["api", "cli", "core"]

# Answer defaults
# defaultType = "feat"
# defaultScope = "core"
# defaultIssues = true

# Custom type catalog (replaces the built-in one)
# [[types]]
# key = "feat"
# description = "A new feature"
# title = "Features"
# emoji = "✨"

# Custom workflow catalog (replaces the built-in one)
# [[workflows]]
# key = "code-review"
# title = "CODE REVIEW"
# description = "Send the ticket to review"
"#;

        fs::write(&path, content)?;

        // Set secure permissions (0600)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&path, perms)?;
        }

        Ok(path)
    }
}
