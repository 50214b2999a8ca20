use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::{debug, info};

use crate::config::{Config, TemplatesConfig};
use crate::error::{GenerateError, Result};
use crate::project::ProjectId;
use crate::template::Template;

/// Build the whole document: the preamble, then a heading and two badge lines
/// per project.
pub fn render_document(
    preamble: &str,
    projects: &[ProjectId],
    pypi: &Template,
    ci: &Template,
) -> String {
    let mut doc = String::from(preamble);
    for repo in projects {
        doc.push_str("## ");
        doc.push_str(repo.as_str());
        doc.push_str("\n\n");
        doc.push_str(&pypi.render(repo.as_str()));
        doc.push('\n');
        doc.push_str(&ci.render(repo.as_str()));
        doc.push('\n');
    }
    doc
}

/// Truncate `path` and write `contents`. The handle is closed on every path
/// out of this function; a failed write may leave a partial file behind.
pub fn write_document(path: &Path, contents: &str) -> Result<usize> {
    let io_err = |source: std::io::Error| GenerateError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(io_err)?;
    file.write_all(contents.as_bytes()).map_err(io_err)?;
    file.flush().map_err(io_err)?;
    Ok(contents.len())
}

/// Validated inputs ready to render.
#[derive(Debug, Clone)]
pub struct Generator {
    preamble: String,
    projects: Vec<ProjectId>,
    pypi: Template,
    ci: Template,
}

impl Generator {
    pub fn new(preamble: &str, projects: Vec<ProjectId>, pypi: Template, ci: Template) -> Self {
        Self {
            preamble: preamble.to_string(),
            projects,
            pypi,
            ci,
        }
    }

    /// Validate templates and identifiers up front so a bad config never
    /// touches the output file.
    pub fn from_config(config: &Config) -> Result<Self> {
        let (pypi, ci, projects) = config.validate()?;
        debug!("Template {}: {}", pypi.name(), pypi);
        debug!("Template {}: {}", ci.name(), ci);
        Ok(Self::new(&config.preamble, projects, pypi, ci))
    }

    pub fn projects(&self) -> &[ProjectId] {
        &self.projects
    }

    pub fn render(&self) -> String {
        render_document(&self.preamble, &self.projects, &self.pypi, &self.ci)
    }

    /// Render and write to `path`, replacing any previous content.
    pub fn write_to(&self, path: &Path) -> Result<usize> {
        debug!("Rendering {} project section(s)", self.projects.len());
        for repo in &self.projects {
            debug!("Section: {}", repo);
        }
        let doc = self.render();
        let written = write_document(path, &doc)?;
        info!("Wrote {} bytes to {}", written, path.display());
        Ok(written)
    }
}

/// One-shot generation from raw parts.
///
/// Templates and identifiers are checked before the output is opened: on a
/// [`GenerateError::Template`] the file at `output` is left unmodified.
pub fn generate<S: AsRef<str>>(
    preamble: &str,
    projects: &[S],
    pypi_template: &str,
    ci_template: &str,
    output: &Path,
) -> Result<()> {
    let config = Config {
        preamble: preamble.to_string(),
        projects: projects.iter().map(|p| p.as_ref().to_string()).collect(),
        templates: TemplatesConfig {
            pypi: pypi_template.to_string(),
            ci: ci_template.to_string(),
        },
    };
    Generator::from_config(&config)?.write_to(output)?;
    Ok(())
}
