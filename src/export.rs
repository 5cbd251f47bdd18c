//! # Exporting parameter set documents
//!
//! The [`Exporter`] ties the registry, the size formulas and the path layout together. It has
//! three modes, matching the command line tool:
//!
//! - [`Exporter::list`] writes every registered name, one per line.
//! - [`Exporter::single`] writes the document of one parameter set to a stream.
//! - [`Exporter::write_all`] writes the document of every parameter set to its own file.
//!
//! Documents keep a fixed key order: `name`, `security level`, `number of operations`,
//! `failure probability`, `sizes`.
//!
//! ## Batch policy
//!
//! [`Exporter::write_all`] never creates directories. Before writing anything it checks that the
//! parent directory of every target exists, and fails with [`Error::MissingDirectory`] if one is
//! missing, so a misconfigured prefix leaves the tree untouched. Existing files are overwritten.
//! Once writing has started, the first I/O failure aborts the batch with [`Error::Io`]; files
//! written before it stay in place and no later file is written.

use crate::path::{make_path_with_extension, DEFAULT_PREFIX};
use crate::params::Param;
use crate::sizes::Descriptor;
use crate::{registry, Error, Result};
use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Document format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    #[cfg(feature = "yaml")]
    Yaml,
    #[cfg(feature = "json")]
    Json,
}

impl Format {
    /// File extension for documents in this format.
    pub const fn extension(&self) -> &'static str {
        match self {
            #[cfg(feature = "yaml")]
            Format::Yaml => "yaml",
            #[cfg(feature = "json")]
            Format::Json => "json",
        }
    }
}

impl Default for Format {
    #[cfg(feature = "yaml")]
    fn default() -> Self {
        Format::Yaml
    }

    #[cfg(not(feature = "yaml"))]
    fn default() -> Self {
        Format::Json
    }
}

/// Serializes `descriptor` into a complete document, terminated by a newline.
pub fn render(descriptor: &Descriptor, format: Format) -> Result<String> {
    log::debug!("Rendering {} as {:?}", descriptor.name, format);
    match format {
        #[cfg(feature = "yaml")]
        Format::Yaml => Ok(serde_yaml::to_string(descriptor)?),
        #[cfg(feature = "json")]
        Format::Json => {
            let mut document = serde_json::to_string_pretty(descriptor)?;
            document.push('\n');
            Ok(document)
        },
    }
}

/// Runtime settings of an [`Exporter`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportConfig {
    /// Output root, concatenated verbatim in front of every path.
    pub prefix: String,
    pub format: Format,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            format: Format::default(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Exporter {
    config: ExportConfig,
}

impl Exporter {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Writes every registered name to `out`, one per line, in registry order.
    pub fn list<W: Write>(&self, mut out: W) -> Result<()> {
        for name in registry::names() {
            writeln!(out, "{}", name)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Computes the descriptor of the parameter set registered under `name`.
    pub fn describe(&self, name: &str) -> Result<Descriptor> {
        registry::lookup(name).map(Descriptor::new)
    }

    /// Writes the document of the parameter set `name` to `out`.
    pub fn single<W: Write>(&self, name: &str, mut out: W) -> Result<()> {
        let descriptor = self.describe(name)?;
        let document = render(&descriptor, self.config.format)?;
        out.write_all(document.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// Target file of `param` under the configured prefix and format.
    pub fn path_for(&self, param: &Param) -> PathBuf {
        make_path_with_extension(param, &self.config.prefix, self.config.format.extension())
    }

    /// Writes the document of every registered parameter set to its own file.
    ///
    /// Returns the written paths in registry order. See the module documentation for the
    /// failure policy.
    pub fn write_all(&self) -> Result<Vec<PathBuf>> {
        let targets: Vec<(&Param, PathBuf)> = registry::iter()
            .map(|param| (param, self.path_for(param)))
            .collect();
        check_directories(&targets)?;

        let mut written = Vec::with_capacity(targets.len());
        for (param, path) in targets {
            let document = render(&Descriptor::new(param), self.config.format)?;
            fs::write(&path, document).map_err(|source| Error::Io {
                path: path.clone(),
                source,
            })?;
            log::info!("Wrote {}", path.display());
            written.push(path);
        }

        log::info!(
            "Exported {} parameter sets below '{}'",
            written.len(),
            self.config.prefix
        );
        Ok(written)
    }
}

fn check_directories(targets: &[(&Param, PathBuf)]) -> Result<()> {
    let mut checked: HashSet<&Path> = HashSet::new();
    for (_, path) in targets {
        let Some(parent) = path.parent() else {
            continue;
        };
        if parent.as_os_str().is_empty() || !checked.insert(parent) {
            continue;
        }
        if !parent.is_dir() {
            return Err(Error::MissingDirectory(parent.to_path_buf()));
        }
    }
    Ok(())
}
