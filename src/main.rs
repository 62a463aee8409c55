use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use dir_release::cli::{run_release_workflow, ReleaseWorkflowArgs};
use dir_release::config;
use dir_release::git::Git2Repository;
use dir_release::host::GhCli;
use dir_release::ui;

#[derive(clap::Parser)]
#[command(
    name = "dir-release",
    version,
    about = "Publish GitHub releases for a directory/semver tag, with floating vMAJOR and vMAJOR.MINOR aliases"
)]
struct Args {
    #[arg(
        long = "ref",
        env = "GITHUB_REF_NAME",
        value_name = "DIR/VERSION",
        help = "Tag to release, e.g. checktypes/v1.2.3"
    )]
    reference: String,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(
        long,
        value_name = "SECS",
        help = "Seconds to wait between deleting and recreating an alias"
    )]
    settle_delay: Option<u64>,

    #[arg(long, value_name = "PATH", help = "Run as if started in this directory")]
    workdir: Option<PathBuf>,

    #[arg(long, help = "Preview the releases without creating them")]
    dry_run: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    // A malformed tag is reported before any other diagnostic.
    dir_release::domain::TagReference::parse(&args.reference).context("parse ref")?;

    let config = config::load_config(args.config.as_deref()).context("load config")?;

    let settle_delay = args
        .settle_delay
        .map(Duration::from_secs)
        .unwrap_or_else(|| config.publish.settle_delay());

    // Attachment paths handed to the host must stay valid from inside the workdir.
    let workdir = args
        .workdir
        .as_deref()
        .map(|dir| {
            std::fs::canonicalize(dir).with_context(|| format!("workdir {}", dir.display()))
        })
        .transpose()?;

    let repo_path = workdir.clone().unwrap_or_else(|| PathBuf::from("."));
    let mut host = GhCli::new(&config.host);
    if let Some(dir) = &workdir {
        host = host.with_workdir(dir);
    }

    let workflow_args = ReleaseWorkflowArgs {
        reference: args.reference,
        root: workdir,
        settle_delay,
        dry_run: args.dry_run,
    };

    // Opened on first query, after the attachments have been listed.
    let repo = Git2Repository::discover_on_demand(&repo_path);

    let result = run_release_workflow(&workflow_args, &repo, &host)
        .with_context(|| format!("release {}", workflow_args.reference))?;

    if !workflow_args.dry_run {
        ui::display_success(&format!(
            "Published {} release(s) for {}",
            result.outcomes.len(),
            result.reference
        ));
    }

    Ok(())
}
