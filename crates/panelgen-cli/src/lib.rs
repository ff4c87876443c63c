//! CLI logic for the panelgen scaffolding tool.
//!
//! The library crates work on in-memory text; this crate reads panels,
//! templates and aggregator files from a plugin project and writes the
//! results back.

pub mod error_adapter;
pub mod manifest;

mod args;
mod config;
mod project;

pub use args::{Args, Command, CreateManifestArgs, CreateModuleArgs, InspectArgs};

use std::{fs, path::Path};

use chrono::Datelike;
use log::{info, warn};

use panelgen::{
    PanelgenError, ScaffoldBuilder, aggregator::PatchOutcome, artifact::ArtifactKind,
    catalog::ComponentCatalog, config::AppConfig, enable_hint, identifier::Slug,
};

use manifest::{Manifest, ModuleEntry};
use project::Project;

/// Run the panelgen CLI application
///
/// # Errors
///
/// Returns `PanelgenError` for:
/// - Configuration loading errors
/// - Invalid slugs
/// - Missing or malformed panels and manifests
/// - Missing sentinels in aggregator files
/// - File I/O errors
pub fn run(args: &Args) -> Result<(), PanelgenError> {
    let app_config = config::load_config(args.config.as_ref())?;

    match &args.command {
        Command::CreateModule(create) => create_module(create, app_config),
        Command::CreateManifest(create) => create_manifest(create, &app_config),
        Command::Inspect(inspect) => inspect_panel(inspect, app_config),
    }
}

fn create_module(args: &CreateModuleArgs, app_config: AppConfig) -> Result<(), PanelgenError> {
    let slug = Slug::new(args.slug.as_str())?;
    info!(slug = slug.as_str(), project_dir = args.project_dir.display().to_string(); "Creating module");

    let project = Project::new(&args.project_dir, app_config.paths());
    let mut manifest = project.read_manifest()?;

    let builder = ScaffoldBuilder::new(app_config.clone()).with_templates(project.templates()?);
    let panel = match &args.panel {
        Some(panel) => Some(extract_panel(&builder, panel)?),
        None => None,
    };

    if manifest.contains(slug.as_str()) {
        warn!(
            "Module {slug} already exists in {}. Edit this file to modify the module manifest.",
            app_config.paths().manifest().display()
        );
    } else {
        manifest.push(ModuleEntry::new(
            slug.as_str(),
            args.name.clone(),
            args.description.as_str(),
            args.tags.iter().cloned(),
        ));
        project.write_manifest(&manifest)?;
        info!("Added {slug} to {}", app_config.paths().manifest().display());
    }

    let Some(catalog) = panel else {
        return Ok(());
    };

    let identifier = slug.identifier();
    let module_source = project.artifact_path(
        ArtifactKind::ModuleSource,
        &ArtifactKind::ModuleSource.file_name(&identifier),
    );
    if module_source.exists() && !args.force {
        warn!(
            path = module_source.display().to_string();
            "Module source already exists, pass --force to overwrite it"
        );
        return Ok(());
    }

    let year = chrono::Local::now().year();
    let artifacts = builder.generate(&slug, year, &catalog);

    // Patch in memory first so a missing aggregator file or sentinel leaves
    // the project untouched.
    let mut registry = project.read_registry()?;
    let files = project.read_aggregators()?;
    let outcome = builder.patcher().patch(&mut registry, &identifier, &files)?;

    project.write_artifacts(&artifacts)?;
    if let PatchOutcome::Patched { files, changed } = outcome {
        project.write_aggregators(&files, &changed)?;
        project.write_registry(&registry)?;
    }

    info!("{}", enable_hint(&identifier));
    Ok(())
}

fn create_manifest(args: &CreateManifestArgs, app_config: &AppConfig) -> Result<(), PanelgenError> {
    let project = Project::new(&args.project_dir, app_config.paths());
    let path = project.manifest_path();

    if path.exists() {
        warn!(path = path.display().to_string(); "Manifest already exists, leaving it unchanged");
        return Ok(());
    }

    project.write_manifest(&Manifest::new(&args.slug))?;
    info!(path = path.display().to_string(); "Manifest created");
    Ok(())
}

fn inspect_panel(args: &InspectArgs, app_config: AppConfig) -> Result<(), PanelgenError> {
    let builder = ScaffoldBuilder::new(app_config);
    let catalog = extract_panel(&builder, &args.panel)?;

    println!("{}", catalog.summary());
    for (category, components) in catalog.iter() {
        for component in components {
            let shape = component.shape();
            let placement = match (shape.top_left(), shape.size()) {
                (Some(top_left), Some((width, height))) => format!(
                    "rect at ({}, {}) size {width} x {height}",
                    top_left.x(),
                    top_left.y()
                ),
                _ => format!("centered at ({}, {})", shape.center().x(), shape.center().y()),
            };
            let class = component
                .override_class()
                .unwrap_or_else(|| builder.config().generator().default_class(category));

            println!(
                "  {:<7} {:<20} {class:<24} {placement}",
                category.to_string(),
                component.name().as_str()
            );
        }
    }

    Ok(())
}

fn extract_panel(builder: &ScaffoldBuilder, panel: &Path) -> Result<ComponentCatalog, PanelgenError> {
    if !panel.is_file() {
        return Err(PanelgenError::PanelNotFound(panel.to_path_buf()));
    }

    let source = fs::read_to_string(panel)?;
    builder.extract(&source)
}
