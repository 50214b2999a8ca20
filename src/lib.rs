//! badgegen - Generate the aggregated README for a family of sub-projects
//!
//! Every sub-project gets a level-2 heading plus a package-index version badge
//! and a CI badge, both rendered from `{repo}` templates.

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod project;
pub mod template;
