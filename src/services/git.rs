// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::path::PathBuf;

use tracing::debug;

use crate::error::{Error, Result};

pub struct GitService {
    repo: gix::Repository,
    work_dir: PathBuf,
}

impl GitService {
    pub fn discover() -> Result<Self> {
        let repo = gix::discover(".").map_err(|_| Error::Git("Not a git repository".into()))?;

        let work_dir = repo
            .workdir()
            .ok_or_else(|| Error::Git("Bare repository not supported".into()))?
            .to_path_buf();

        Ok(Self { repo, work_dir })
    }

    /// Short name of the checked out branch, `None` when detached.
    pub fn current_branch(&self) -> Option<String> {
        let head = self.repo.head_name().ok().flatten()?;
        Some(head.shorten().to_string())
    }

    /// Current branch name, or an empty string when it cannot be read.
    pub fn branch_name() -> String {
        match Self::discover() {
            Ok(git) => git.current_branch().unwrap_or_default(),
            Err(e) => {
                debug!(error = %e, "no branch name available");
                String::new()
            }
        }
    }

    pub fn commit(&self, message: &str) -> Result<()> {
        let output = std::process::Command::new("git")
            .args(["commit", "-m", message])
            .current_dir(&self.work_dir)
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Git(stderr.to_string()));
        }

        Ok(())
    }
}
