pub mod templates;

use std::fmt;
use std::io::Write;

use anyhow::Result;
use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info};

use crate::fs::FileSystem;

use self::templates::{CMAKE_LISTS, MAIN_SOURCE, README, SECOND_MODULE_SOURCE, SOURCE_DIR};

/// A jakt project about to be generated under the current directory.
pub struct Project {
    name: String,
}

impl Project {
    pub fn new(name: String) -> Self {
        Self { name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn debug_description(&self) -> String {
        format!("Project(\n  name: \"{}\"\n)", self.name)
    }

    /// Create `<cwd>/<name>` with a build file, two sources and a README.
    ///
    /// Stops at the first failure. Anything created before it is left on disk.
    pub fn populate(&self, fs: &impl FileSystem, out: &mut impl Write) -> Result<()> {
        let current_directory = fs.current_directory()?;
        // Concatenated, not joined: an absolute name must stay under the current directory.
        let project_directory =
            Utf8PathBuf::from(format!("{}/{}", current_directory, self.name));
        let _ = writeln!(out, "Creating jakt project in {}..", project_directory);

        fs.make_directory(&project_directory)?;
        fs.make_directory(&project_directory.join(SOURCE_DIR))?;

        phase(out, CMAKE_LISTS, || {
            self.create_template_cmake_lists(fs, &project_directory)
        })?;
        phase(out, "jakt source code", || {
            self.create_sample_jakt_files(fs, &project_directory)
        })?;
        phase(out, README, || self.create_readme(fs, &project_directory))?;

        let _ = writeln!(out, "Done!");
        info!(project = self.name(), path = %project_directory, "project generated");
        Ok(())
    }

    pub fn create_template_cmake_lists(
        &self,
        fs: &impl FileSystem,
        project_directory: &Utf8Path,
    ) -> Result<()> {
        let contents = templates::cmake_lists(&self.name);
        fs.write_to_file(&contents, &project_directory.join(CMAKE_LISTS))
    }

    pub fn create_sample_jakt_files(
        &self,
        fs: &impl FileSystem,
        project_directory: &Utf8Path,
    ) -> Result<()> {
        let source_directory = project_directory.join(SOURCE_DIR);
        fs.write_to_file(&templates::main_jakt(), &source_directory.join(MAIN_SOURCE))?;
        fs.write_to_file(
            &templates::second_module_jakt(),
            &source_directory.join(SECOND_MODULE_SOURCE),
        )
    }

    pub fn create_readme(&self, fs: &impl FileSystem, project_directory: &Utf8Path) -> Result<()> {
        let contents = templates::readme(&self.name);
        fs.write_to_file(&contents, &project_directory.join(README))
    }
}

impl fmt::Debug for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.debug_description())
    }
}

/// Print `Generating <label>...`, run `step`, then ` done` if it succeeded.
fn phase(out: &mut impl Write, label: &str, step: impl FnOnce() -> Result<()>) -> Result<()> {
    let _ = write!(out, "\tGenerating {}...", label);
    let _ = out.flush();
    debug!(phase = label, "starting");
    step()?;
    let _ = writeln!(out, " done");
    Ok(())
}
