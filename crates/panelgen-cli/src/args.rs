//! Command-line argument definitions for the panelgen CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Global arguments select the configuration file and the
//! logging verbosity; the subcommand selects what to generate.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command-line arguments for the panelgen scaffolding tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a module to the manifest and, given a panel, generate its sources
    CreateModule(CreateModuleArgs),

    /// Write a default plugin.json manifest
    CreateManifest(CreateManifestArgs),

    /// Print the components found on a panel without writing anything
    Inspect(InspectArgs),
}

#[derive(clap::Args, Debug)]
pub struct CreateModuleArgs {
    /// Module slug (ASCII letters, digits, '-' and '_')
    pub slug: String,

    /// SVG panel with a "components" layer
    pub panel: Option<PathBuf>,

    /// Display name, defaults to the slug
    #[arg(long)]
    pub name: Option<String>,

    /// One-line description
    #[arg(long, default_value = "")]
    pub description: String,

    /// Comma-separated manifest tags
    #[arg(long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Overwrite an existing module source
    #[arg(long)]
    pub force: bool,

    /// Plugin project root
    #[arg(long, default_value = ".")]
    pub project_dir: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct CreateManifestArgs {
    /// Plugin slug
    pub slug: String,

    /// Plugin project root
    #[arg(long, default_value = ".")]
    pub project_dir: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    /// SVG panel with a "components" layer
    pub panel: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_module_defaults() {
        let args = Args::parse_from(["panelgen", "create-module", "Gain", "res/Gain.svg"]);

        let Command::CreateModule(create) = args.command else {
            panic!("expected create-module");
        };
        assert_eq!(create.slug, "Gain");
        assert_eq!(create.panel, Some(PathBuf::from("res/Gain.svg")));
        assert_eq!(create.name, None);
        assert!(create.tags.is_empty());
        assert!(!create.force);
        assert_eq!(create.project_dir, PathBuf::from("."));
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_tags_are_split() {
        let args = Args::parse_from([
            "panelgen",
            "--log-level",
            "debug",
            "create-module",
            "Gain",
            "--tags",
            "Utility, Attenuator",
        ]);

        let Command::CreateModule(create) = args.command else {
            panic!("expected create-module");
        };
        assert_eq!(create.tags, ["Utility", " Attenuator"]);
        assert_eq!(args.log_level, "debug");
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let args = Args::parse_from(["panelgen", "inspect", "panel.svg", "--config", "custom.toml"]);

        assert_eq!(args.config.as_deref(), Some("custom.toml"));
        assert!(matches!(args.command, Command::Inspect(_)));
    }
}
