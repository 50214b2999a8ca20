use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::error::GenerateError;
use crate::generator::Generator;

pub const README_NAME: &str = "README.md";

/// `README.md` one directory above the directory holding `exe`.
pub fn readme_path_for(exe: &Path) -> Result<PathBuf, GenerateError> {
    let tool_dir = exe.parent().ok_or_else(|| {
        GenerateError::OutputPath(format!("{} has no parent directory", exe.display()))
    })?;
    let root = tool_dir.parent().ok_or_else(|| {
        GenerateError::OutputPath(format!("{} has no parent directory", tool_dir.display()))
    })?;
    Ok(root.join(README_NAME))
}

/// Resolve the default output from the running executable, following symlinks.
pub fn default_output_path() -> Result<PathBuf, GenerateError> {
    let exe = std::env::current_exe()
        .map_err(|e| GenerateError::OutputPath(format!("current executable unknown: {e}")))?;
    let exe = fs::canonicalize(&exe).unwrap_or(exe);
    readme_path_for(&exe)
}

pub fn run(output: Option<PathBuf>, dry_run: bool, print_config: bool) -> Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    run_with_writer(&Config::default(), output, dry_run, print_config, &mut handle)
}

/// Shared body of [`run`]; `out` receives anything meant for stdout.
pub fn run_with_writer<W: Write>(
    config: &Config,
    output: Option<PathBuf>,
    dry_run: bool,
    print_config: bool,
    out: &mut W,
) -> Result<()> {
    if print_config {
        let toml_str = config.to_toml().context("Failed to serialize config")?;
        out.write_all(toml_str.as_bytes())?;
        return Ok(());
    }

    let generator = Generator::from_config(config)?;
    info!("Projects: {}", generator.projects().len());

    if dry_run {
        info!("Dry run: printing document to stdout");
        out.write_all(generator.render().as_bytes())?;
        out.flush()?;
        return Ok(());
    }

    let path = match output {
        Some(path) => path,
        None => default_output_path()?,
    };
    info!("Output: {}", path.display());

    generator
        .write_to(&path)
        .with_context(|| format!("Failed to generate {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readme_path_for_exe() {
        let path = readme_path_for(Path::new("/repo/tooling/badgegen")).unwrap();
        assert_eq!(path, PathBuf::from("/repo/README.md"));
    }

    #[test]
    fn test_readme_path_for_shallow_exe() {
        let err = readme_path_for(Path::new("badgegen")).unwrap_err();
        assert!(matches!(err, GenerateError::OutputPath(_)));
    }

    #[test]
    fn test_default_output_path_is_readme() {
        let path = default_output_path().unwrap();
        assert_eq!(path.file_name().unwrap(), README_NAME);
    }

    #[test]
    fn test_run_print_config() {
        let mut out = Vec::new();
        run_with_writer(&Config::default(), None, false, true, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("volttron-core"));
    }

    #[test]
    fn test_run_dry_run_writes_no_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(README_NAME);
        let mut out = Vec::new();
        run_with_writer(&Config::default(), Some(path.clone()), true, false, &mut out).unwrap();
        assert!(!path.exists());
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("## volttron-lib-actuator\n\n"));
    }

    #[test]
    fn test_run_writes_output() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(README_NAME);
        let mut out = Vec::new();
        run_with_writer(&Config::default(), Some(path.clone()), false, false, &mut out).unwrap();
        assert!(out.is_empty());
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("\nVOLTTRON™"));
    }

    #[test]
    fn test_run_reports_unwritable_output() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nope").join(README_NAME);
        let mut out = Vec::new();
        let err = run_with_writer(&Config::default(), Some(path), false, false, &mut out)
            .unwrap_err();
        assert!(err.to_string().contains("Failed to generate"));
    }
}
