use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::HostConfig;
use crate::domain::ReleaseId;
use crate::error::{ReleaseError, Result};
use crate::host::ReleaseHost;

/// Release host backed by the GitHub CLI
#[derive(Debug, Clone)]
pub struct GhCli {
    program: String,
    repo: Option<String>,
    cleanup_tag: bool,
    /// Directory the program runs in; `gh` infers the repository from it
    workdir: Option<PathBuf>,
}

impl GhCli {
    pub fn new(config: &HostConfig) -> Self {
        GhCli {
            program: config.program.clone(),
            repo: config.repo.clone(),
            cleanup_tag: config.cleanup_tag,
            workdir: None,
        }
    }

    /// Run the program from `dir` instead of the current directory
    pub fn with_workdir(mut self, dir: impl AsRef<Path>) -> Self {
        self.workdir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Arguments for `gh release delete`
    pub fn delete_args(&self, release: &ReleaseId) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["release".into(), "delete".into()];
        if self.cleanup_tag {
            args.push("--cleanup-tag".into());
        }
        args.push("--yes".into());
        self.push_repo(&mut args);
        args.push(release.as_str().into());
        args
    }

    /// Arguments for `gh release create`
    pub fn create_args(&self, release: &ReleaseId, target: &str, files: &[PathBuf]) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "release".into(),
            "create".into(),
            "--target".into(),
            target.into(),
        ];
        self.push_repo(&mut args);
        args.push(release.as_str().into());
        args.extend(files.iter().map(|f| f.as_os_str().to_os_string()));
        args
    }

    fn push_repo(&self, args: &mut Vec<OsString>) {
        if let Some(repo) = &self.repo {
            args.push("--repo".into());
            args.push(repo.into());
        }
    }

    /// Run the program and return its trimmed stdout.
    /// On failure the error carries the captured stderr.
    fn run(&self, action: &str, release: &ReleaseId, args: &[OsString]) -> Result<String> {
        log::debug!("running {} {:?}", self.program, args);

        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        if let Some(dir) = &self.workdir {
            cmd.current_dir(dir);
        }

        let output = cmd.output().map_err(|e| {
            ReleaseError::publish(format!(
                "{} release {} {}: failed to execute: {}",
                self.program, action, release, e
            ))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ReleaseError::publish(format!(
                "{} release {} {}: exited with code {}: {}",
                self.program,
                action,
                release,
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl ReleaseHost for GhCli {
    fn delete_release(&self, release: &ReleaseId) -> Result<()> {
        self.run("delete", release, &self.delete_args(release))?;
        Ok(())
    }

    fn create_release(&self, release: &ReleaseId, target: &str, files: &[PathBuf]) -> Result<()> {
        let url = self.run("create", release, &self.create_args(release, target, files))?;
        if !url.is_empty() {
            log::debug!("created {}", url);
        }
        Ok(())
    }
}
