use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::project::{self, ProjectId};
use crate::template::Template;

const PREAMBLE: &str = "
VOLTTRON™ is an open source platform for distributed sensing and control. The platform provides services for collecting and storing data from buildings and devices and provides an environment for developing applications which interact with that data.
";

const PROJECTS: &[&str] = &[
    "volttron-core",
    "volttron-platform-driver",
    "volttron-lib-base-driver",
    "volttron-lib-fake-driver",
    "volttron-lib-bacnet-driver",
    "volttron-lib-actuator",
    "volttron-lib-historian-base",
    "volttron-lib-sql-historian",
    "volttron-lib-historian-sqlite",
    "volttron-lib-historian-postgres",
];

const PYPI_TEMPLATE: &str =
    "[![pypi version](https://img.shields.io/pypi/v/{repo}.svg)](https://pypi.org/project/{repo}/)";

const CI_TEMPLATE: &str = "[![Run Pytests](https://github.com/eclipse-volttron/{repo}/actions/workflows/run-tests.yml/badge.svg)](https://github.com/eclipse-volttron/{repo}/actions/workflows/run-tests.yml)";

/// Everything the README is built from. `Default` is the baked-in VOLTTRON set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Written verbatim before the first project heading
    pub preamble: String,
    /// Output order follows this list; duplicates are kept
    pub projects: Vec<String>,
    pub templates: TemplatesConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplatesConfig {
    /// Package-index version badge
    pub pypi: String,
    /// Continuous-integration badge
    pub ci: String,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            pypi: PYPI_TEMPLATE.to_string(),
            ci: CI_TEMPLATE.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preamble: PREAMBLE.to_string(),
            projects: PROJECTS.iter().map(|p| p.to_string()).collect(),
            templates: TemplatesConfig::default(),
        }
    }
}

impl Config {
    pub fn pypi_template(&self) -> Result<Template> {
        Template::parse("pypi", &self.templates.pypi)
    }

    pub fn ci_template(&self) -> Result<Template> {
        Template::parse("ci", &self.templates.ci)
    }

    pub fn project_ids(&self) -> Result<Vec<ProjectId>> {
        project::parse_projects(&self.projects)
    }

    /// Parse the pypi template, then the ci template, then every identifier.
    /// Returns `(pypi, ci, projects)`.
    pub fn validate(&self) -> Result<(Template, Template, Vec<ProjectId>)> {
        let pypi = self.pypi_template()?;
        let ci = self.ci_template()?;
        let projects = self.project_ids()?;
        Ok((pypi, ci, projects))
    }

    /// Effective configuration as TOML, for `--print-config`
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}
