use std::io;

use anyhow::{Result, anyhow};
use camino::Utf8PathBuf;
use tracing::debug;

use crate::cli::Cli;
use crate::fs::{DryRunFs, FileSystem, LocalFs};
use crate::project::Project;

pub fn run(cli: Cli) -> Result<()> {
    let chdir = cli
        .chdir
        .map(|dir| {
            Utf8PathBuf::from_path_buf(dir)
                .map_err(|dir| anyhow!("--chdir path {} is not valid UTF-8", dir.display()))
        })
        .transpose()?;

    let project = Project::new(cli.name);
    debug!(?project, dry_run = cli.dry_run, "scaffolding");

    if cli.dry_run {
        generate(&project, &DryRunFs::new(chdir))
    } else {
        generate(&project, &LocalFs::new(chdir))
    }
}

fn generate(project: &Project, fs: &impl FileSystem) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    project.populate(fs, &mut out)
}
