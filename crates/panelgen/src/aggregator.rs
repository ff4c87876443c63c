//! Splicing registration lines into aggregator files.
//!
//! Aggregator files (the plugin source and header, and the test harness
//! entry point) list every module of a plugin. Each contains sentinel
//! comments marking where new registration lines go. The raw
//! [`insert_before_sentinel`] primitive always inserts; [`AggregatorPatcher`]
//! consults a [`Registry`] so that patching the same module twice is a no-op.

use std::fmt;

use log::{debug, info};
use thiserror::Error;

use panelgen_core::identifier::Identifier;

use crate::{config::SentinelConfig, registry::Registry};

/// An aggregator file patched when a module is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregatorFile {
    PluginSource,
    PluginHeader,
    TestMain,
}

impl fmt::Display for AggregatorFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PluginSource => "plugin source",
            Self::PluginHeader => "plugin header",
            Self::TestMain => "test main",
        };
        f.write_str(name)
    }
}

/// A sentinel-marked insertion point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregationPoint {
    /// `p->addModel(model<Id>);` in the plugin source.
    ModelRegistration,
    /// `extern Model* model<Id>;` in the plugin header.
    ModelDeclaration,
    /// `extern void test<Id>();` in the test harness.
    TestDeclaration,
    /// `test<Id>();` in the test harness.
    TestInvocation,
}

impl AggregationPoint {
    /// Every aggregation point, in the order they are applied.
    pub const ALL: [AggregationPoint; 4] = [
        AggregationPoint::ModelRegistration,
        AggregationPoint::ModelDeclaration,
        AggregationPoint::TestDeclaration,
        AggregationPoint::TestInvocation,
    ];

    /// The file this point lives in.
    pub fn file(self) -> AggregatorFile {
        match self {
            Self::ModelRegistration => AggregatorFile::PluginSource,
            Self::ModelDeclaration => AggregatorFile::PluginHeader,
            Self::TestDeclaration | Self::TestInvocation => AggregatorFile::TestMain,
        }
    }

    /// The sentinel marking this point.
    pub fn sentinel(self, sentinels: &SentinelConfig) -> &str {
        match self {
            Self::ModelRegistration => sentinels.add_model(),
            Self::ModelDeclaration => sentinels.model_extern(),
            Self::TestDeclaration => sentinels.test_extern(),
            Self::TestInvocation => sentinels.test_call(),
        }
    }

    /// The registration line for `identifier`, without indentation.
    pub fn line(self, identifier: &Identifier) -> String {
        match self {
            Self::ModelRegistration => format!("p->addModel(model{identifier});"),
            Self::ModelDeclaration => format!("extern Model* model{identifier};"),
            Self::TestDeclaration => format!("extern void test{identifier}();"),
            Self::TestInvocation => format!("test{identifier}();"),
        }
    }
}

/// Errors raised while patching aggregator files.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatchError {
    #[error("Could not find sentinel `{sentinel}`")]
    SentinelNotFound { sentinel: String },

    #[error("Could not find sentinel `{sentinel}` in {file}")]
    SentinelNotFoundIn {
        file: AggregatorFile,
        sentinel: String,
    },
}

/// Inserts `line` on its own line directly before the first line holding `sentinel`.
///
/// The sentinel line is matched after trimming surrounding whitespace and is
/// kept, so later insertions still find it. The new line copies the
/// sentinel's indentation and line ending. Calling this twice inserts the
/// line twice.
///
/// # Errors
///
/// Returns [`PatchError::SentinelNotFound`] if no line matches `sentinel`.
///
/// # Examples
///
/// ```
/// use panelgen::aggregator::insert_before_sentinel;
///
/// let text = "void init() {\n    // ADD ADDMODEL\n}\n";
/// let patched = insert_before_sentinel(text, "// ADD ADDMODEL", "p->addModel(modelGain);").unwrap();
///
/// assert_eq!(patched, "void init() {\n    p->addModel(modelGain);\n    // ADD ADDMODEL\n}\n");
/// ```
pub fn insert_before_sentinel(text: &str, sentinel: &str, line: &str) -> Result<String, PatchError> {
    let sentinel = sentinel.trim();
    let mut offset = 0;

    for current in text.split_inclusive('\n') {
        if current.trim() == sentinel {
            let indent_len = current.len() - current.trim_start().len();
            let newline = if current.ends_with("\r\n") { "\r\n" } else { "\n" };

            let mut patched = String::with_capacity(text.len() + line.len() + indent_len + 2);
            patched.push_str(&text[..offset]);
            patched.push_str(&current[..indent_len]);
            patched.push_str(line);
            patched.push_str(newline);
            patched.push_str(&text[offset..]);
            return Ok(patched);
        }
        offset += current.len();
    }

    Err(PatchError::SentinelNotFound {
        sentinel: sentinel.to_string(),
    })
}

/// In-memory contents of the aggregator files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatorFiles {
    plugin_source: String,
    plugin_header: String,
    test_main: String,
}

impl AggregatorFiles {
    pub fn new(
        plugin_source: impl Into<String>,
        plugin_header: impl Into<String>,
        test_main: impl Into<String>,
    ) -> Self {
        Self {
            plugin_source: plugin_source.into(),
            plugin_header: plugin_header.into(),
            test_main: test_main.into(),
        }
    }

    /// Returns the text of `file`.
    pub fn get(&self, file: AggregatorFile) -> &str {
        match file {
            AggregatorFile::PluginSource => &self.plugin_source,
            AggregatorFile::PluginHeader => &self.plugin_header,
            AggregatorFile::TestMain => &self.test_main,
        }
    }

    fn get_mut(&mut self, file: AggregatorFile) -> &mut String {
        match file {
            AggregatorFile::PluginSource => &mut self.plugin_source,
            AggregatorFile::PluginHeader => &mut self.plugin_header,
            AggregatorFile::TestMain => &mut self.test_main,
        }
    }
}

/// Result of [`AggregatorPatcher::patch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The identifier was registered by an earlier run; nothing changed.
    AlreadyRegistered,
    /// The files were patched and the identifier recorded.
    Patched {
        files: AggregatorFiles,
        /// Files whose text changed.
        changed: Vec<AggregatorFile>,
    },
}

/// Registry-guarded patcher for all aggregation points.
#[derive(Debug, Clone, Default)]
pub struct AggregatorPatcher {
    sentinels: SentinelConfig,
}

impl AggregatorPatcher {
    pub fn new(sentinels: SentinelConfig) -> Self {
        Self { sentinels }
    }

    /// Splices the registration lines for `identifier` into `files`.
    ///
    /// Identifiers already in `registry` are skipped. A point whose exact line
    /// is already present in its file is also skipped, which keeps projects
    /// patched before the registry existed intact. All new texts are computed
    /// before anything is returned, so on error neither `files` nor `registry`
    /// is affected.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::SentinelNotFoundIn`] for the first point whose
    /// sentinel is missing.
    pub fn patch(
        &self,
        registry: &mut Registry,
        identifier: &Identifier,
        files: &AggregatorFiles,
    ) -> Result<PatchOutcome, PatchError> {
        if registry.contains(identifier) {
            info!(identifier = identifier.as_str(); "Module already registered, aggregator files left unchanged");
            return Ok(PatchOutcome::AlreadyRegistered);
        }

        let mut patched = files.clone();
        let mut changed = Vec::new();

        for point in AggregationPoint::ALL {
            let file = point.file();
            let line = point.line(identifier);
            let text = patched.get_mut(file);

            if text.lines().any(|existing| existing.trim() == line) {
                debug!(file:% = file, line = line.as_str(); "Registration line already present");
                continue;
            }

            let sentinel = point.sentinel(&self.sentinels);
            *text = insert_before_sentinel(text, sentinel, &line).map_err(|_| {
                PatchError::SentinelNotFoundIn {
                    file,
                    sentinel: sentinel.to_string(),
                }
            })?;
            debug!(file:% = file, line = line.as_str(); "Inserted registration line");

            if !changed.contains(&file) {
                changed.push(file);
            }
        }

        registry.register(identifier.clone());
        info!(identifier = identifier.as_str(), files = changed.len(); "Aggregator files patched");

        Ok(PatchOutcome::Patched {
            files: patched,
            changed,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PLUGIN_CPP: &str = "void init(Plugin* p) {\n    pluginInstance = p;\n    // ADD ADDMODEL\n}\n";
    const PLUGIN_HPP: &str = "extern Plugin* pluginInstance;\n//ADD EXTERNS\n";
    const TEST_MAIN: &str =
        "// ADD EXTERN\n\nint main() {\n    // ADD NEWTEST\n    return 0;\n}\n";

    fn files() -> AggregatorFiles {
        AggregatorFiles::new(PLUGIN_CPP, PLUGIN_HPP, TEST_MAIN)
    }

    #[test]
    fn test_insert_keeps_sentinel_and_indentation() {
        let patched = insert_before_sentinel(PLUGIN_CPP, "// ADD ADDMODEL", "p->addModel(modelGain);").unwrap();

        assert_eq!(
            patched,
            "void init(Plugin* p) {\n    pluginInstance = p;\n    p->addModel(modelGain);\n    // ADD ADDMODEL\n}\n"
        );
    }

    #[test]
    fn test_raw_insert_twice_duplicates() {
        let once = insert_before_sentinel(PLUGIN_HPP, "//ADD EXTERNS", "extern Model* modelGain;").unwrap();
        let twice = insert_before_sentinel(&once, "//ADD EXTERNS", "extern Model* modelGain;").unwrap();

        assert_eq!(twice.matches("extern Model* modelGain;").count(), 2);
    }

    #[test]
    fn test_sentinel_not_found() {
        let err = insert_before_sentinel("int main() {}\n", "// ADD NEWTEST", "testGain();").unwrap_err();

        assert_eq!(
            err,
            PatchError::SentinelNotFound {
                sentinel: "// ADD NEWTEST".to_string()
            }
        );
    }

    #[test]
    fn test_sentinel_prefix_does_not_match() {
        let text = "//ADD EXTERNS\n// ADD EXTERN\n";
        let patched = insert_before_sentinel(text, "// ADD EXTERN", "extern void testGain();").unwrap();

        assert_eq!(patched, "//ADD EXTERNS\nextern void testGain();\n// ADD EXTERN\n");
    }

    #[test]
    fn test_sentinel_on_last_line_without_newline() {
        let patched = insert_before_sentinel("a\n  // END", "// END", "b").unwrap();
        assert_eq!(patched, "a\n  b\n  // END");
    }

    #[test]
    fn test_crlf_is_preserved() {
        let patched = insert_before_sentinel("x\r\n// ADD NEWTEST\r\n", "// ADD NEWTEST", "testGain();").unwrap();
        assert_eq!(patched, "x\r\ntestGain();\r\n// ADD NEWTEST\r\n");
    }

    #[test]
    fn test_patch_all_points() {
        let mut registry = Registry::default();
        let id = Identifier::sanitize("Gain");

        let outcome = AggregatorPatcher::default().patch(&mut registry, &id, &files()).unwrap();
        let PatchOutcome::Patched { files, changed } = outcome else {
            panic!("expected patched files");
        };

        assert!(files.get(AggregatorFile::PluginSource).contains("    p->addModel(modelGain);\n    // ADD ADDMODEL"));
        assert!(files.get(AggregatorFile::PluginHeader).contains("extern Model* modelGain;\n//ADD EXTERNS"));
        assert_eq!(
            files.get(AggregatorFile::TestMain),
            "extern void testGain();\n// ADD EXTERN\n\nint main() {\n    testGain();\n    // ADD NEWTEST\n    return 0;\n}\n"
        );
        assert_eq!(changed.len(), 3);
        assert!(registry.contains(&id));
    }

    #[test]
    fn test_patch_is_idempotent_through_registry() {
        let mut registry = Registry::default();
        let id = Identifier::sanitize("Gain");
        let patcher = AggregatorPatcher::default();

        let PatchOutcome::Patched { files, .. } = patcher.patch(&mut registry, &id, &files()).unwrap() else {
            panic!("expected patched files");
        };
        let second = patcher.patch(&mut registry, &id, &files).unwrap();

        assert_eq!(second, PatchOutcome::AlreadyRegistered);
        assert_eq!(files.get(AggregatorFile::PluginSource).matches("p->addModel(modelGain);").count(), 1);
    }

    #[test]
    fn test_existing_line_is_not_duplicated() {
        let mut registry = Registry::default();
        let id = Identifier::sanitize("Gain");
        let files = AggregatorFiles::new(
            "    p->addModel(modelGain);\n    // ADD ADDMODEL\n",
            PLUGIN_HPP,
            TEST_MAIN,
        );

        let PatchOutcome::Patched { files, changed } =
            AggregatorPatcher::default().patch(&mut registry, &id, &files).unwrap()
        else {
            panic!("expected patched files");
        };

        assert_eq!(files.get(AggregatorFile::PluginSource).matches("addModel").count(), 1);
        assert!(!changed.contains(&AggregatorFile::PluginSource));
    }

    #[test]
    fn test_missing_sentinel_leaves_registry_untouched() {
        let mut registry = Registry::default();
        let id = Identifier::sanitize("Gain");
        let files = AggregatorFiles::new(PLUGIN_CPP, PLUGIN_HPP, "int main() {}\n");

        let err = AggregatorPatcher::default().patch(&mut registry, &id, &files).unwrap_err();

        assert_eq!(
            err,
            PatchError::SentinelNotFoundIn {
                file: AggregatorFile::TestMain,
                sentinel: "// ADD EXTERN".to_string(),
            }
        );
        assert!(!registry.contains(&id));
    }
}
