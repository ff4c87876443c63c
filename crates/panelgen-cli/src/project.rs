//! Filesystem access to a plugin project.
//!
//! All paths from the configuration are resolved against the project root.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info};

use panelgen::{
    PanelgenError,
    aggregator::{AggregatorFile, AggregatorFiles},
    artifact::{ArtifactKind, GeneratedArtifact, TemplateSet},
    config::PathsConfig,
    registry::Registry,
    template::Template,
};

use crate::manifest::Manifest;

/// A plugin project rooted at a directory.
#[derive(Debug)]
pub struct Project<'a> {
    root: PathBuf,
    paths: &'a PathsConfig,
}

impl<'a> Project<'a> {
    pub fn new(root: impl Into<PathBuf>, paths: &'a PathsConfig) -> Self {
        Self {
            root: root.into(),
            paths,
        }
    }

    fn resolve(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.resolve(self.paths.manifest())
    }

    pub fn read_manifest(&self) -> Result<Manifest, PanelgenError> {
        let path = self.manifest_path();
        let text = fs::read_to_string(&path).map_err(|err| {
            PanelgenError::Manifest(format!("Could not read {}: {err}", path.display()))
        })?;
        Ok(Manifest::from_json(&text)?)
    }

    pub fn write_manifest(&self, manifest: &Manifest) -> Result<(), PanelgenError> {
        fs::write(self.manifest_path(), manifest.to_json()?)?;
        Ok(())
    }

    /// Directory receiving artifacts of `kind`.
    fn artifact_dir(&self, kind: ArtifactKind) -> PathBuf {
        match kind {
            ArtifactKind::ModuleSource => self.resolve(self.paths.module_dir()),
            ArtifactKind::CompositeHeader => self.resolve(self.paths.composite_dir()),
            ArtifactKind::TestScaffold => self.resolve(self.paths.test_dir()),
        }
    }

    /// Where an artifact of `kind` named `file_name` is written.
    pub fn artifact_path(&self, kind: ArtifactKind, file_name: &str) -> PathBuf {
        self.artifact_dir(kind).join(file_name)
    }

    /// Templates for every artifact, preferring the project's own over the built-in ones.
    pub fn templates(&self) -> Result<TemplateSet, PanelgenError> {
        let template_dir = self.resolve(self.paths.template_dir());
        let mut templates = TemplateSet::default();

        for kind in ArtifactKind::ALL {
            let path = template_dir.join(kind.template_file_name());
            if path.is_file() {
                debug!(artifact:% = kind, path = path.display().to_string(); "Using project template");
                templates = templates.with(kind, Template::new(fs::read_to_string(&path)?));
            }
        }

        Ok(templates)
    }

    pub fn write_artifacts(&self, artifacts: &[GeneratedArtifact]) -> Result<(), PanelgenError> {
        for artifact in artifacts {
            let dir = self.artifact_dir(artifact.kind());
            fs::create_dir_all(&dir)?;

            let path = dir.join(artifact.file_name());
            fs::write(&path, artifact.contents())?;
            info!(path = path.display().to_string(); "Generated {}", artifact.kind());
        }
        Ok(())
    }

    /// Loads the registry, or an empty one if the project has none yet.
    pub fn read_registry(&self) -> Result<Registry, PanelgenError> {
        let path = self.resolve(self.paths.registry());
        if !path.exists() {
            debug!(path = path.display().to_string(); "No registry yet");
            return Ok(Registry::default());
        }
        Ok(Registry::from_toml(&fs::read_to_string(path)?)?)
    }

    pub fn write_registry(&self, registry: &Registry) -> Result<(), PanelgenError> {
        let path = self.resolve(self.paths.registry());
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, registry.to_toml()?)?;
        Ok(())
    }

    fn aggregator_path(&self, file: AggregatorFile) -> PathBuf {
        match file {
            AggregatorFile::PluginSource => self.resolve(self.paths.plugin_source()),
            AggregatorFile::PluginHeader => self.resolve(self.paths.plugin_header()),
            AggregatorFile::TestMain => self.resolve(self.paths.test_main()),
        }
    }

    pub fn read_aggregators(&self) -> Result<AggregatorFiles, PanelgenError> {
        let read = |file| fs::read_to_string(self.aggregator_path(file));
        Ok(AggregatorFiles::new(
            read(AggregatorFile::PluginSource)?,
            read(AggregatorFile::PluginHeader)?,
            read(AggregatorFile::TestMain)?,
        ))
    }

    /// Writes back the aggregator files listed in `changed`.
    pub fn write_aggregators(
        &self,
        files: &AggregatorFiles,
        changed: &[AggregatorFile],
    ) -> Result<(), PanelgenError> {
        for file in changed {
            let path = self.aggregator_path(*file);
            fs::write(&path, files.get(*file))?;
            info!(path = path.display().to_string(); "Patched {file}");
        }
        Ok(())
    }
}
