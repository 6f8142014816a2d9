//! Layered configuration.
//!
//! Sources merge from lowest to highest precedence:
//!
//! 1. Built-in defaults
//! 2. The user file, `<platform config dir>/inkgauge/config.<ext>`
//! 3. Project files found by [`ConfigLoader::with_project_search`]
//! 4. Explicit files added with [`ConfigLoader::with_file`], in order
//! 5. `INKGAUGE_*` environment variables (`INKGAUGE_MAX_SCORE=6.5`)
//!
//! Project files are named `.inkgauge.<ext>` or `inkgauge.<ext>`, where
//! `<ext>` is `toml`, `yaml`, `yml` or `json`. The search starts in the given
//! directory and moves to each parent. The first directory holding any
//! candidate supplies every candidate it holds (dotfiles first, then by
//! extension in the order above). A directory containing `.git` is the last
//! one searched.
//!
//! ```no_run
//! use camino::Utf8Path;
//! use inkgauge_core::config::ConfigLoader;
//!
//! let (config, sources) = ConfigLoader::new()
//!     .with_project_search(Utf8Path::new("/home/me/blog/posts"))
//!     .load()?;
//! println!("gate: {:?}, from {:?}", config.max_score, sources.primary());
//! # Ok::<(), inkgauge_core::ConfigError>(())
//! ```

use std::path::Path;

use camino::{Utf8Path, Utf8PathBuf};
use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::input::DEFAULT_MAX_INPUT_BYTES;

/// Stem shared by project files, the user config directory and data paths.
const FILE_STEM: &str = "inkgauge";

/// Recognized extensions, lowest precedence first.
const EXTENSIONS: [&str; 4] = ["toml", "yaml", "yml", "json"];

/// Project search never continues past a directory containing this entry.
const REPO_MARKER: &str = ".git";

const ENV_PREFIX: &str = "INKGAUGE_";

/// Settings shared by the CLI and the MCP server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default log level when neither `RUST_LOG` nor `-q`/`-v` is given.
    pub log_level: LogLevel,
    /// Directory for rotated JSONL logs.
    pub log_dir: Option<Utf8PathBuf>,
    /// Readability gate applied when a call does not pass its own.
    pub max_score: Option<f64>,
    /// Largest accepted document, in bytes. Unset means 5 MiB.
    pub max_input_bytes: Option<usize>,
    /// Accept documents of any size, ignoring `max_input_bytes`.
    pub disable_input_limit: bool,
}

impl Config {
    /// The size limit callers should enforce, or `None` when disabled.
    pub fn input_limit(&self) -> Option<usize> {
        (!self.disable_input_limit)
            .then(|| self.max_input_bytes.unwrap_or(DEFAULT_MAX_INPUT_BYTES))
    }
}

/// Log verbosity, named the way `tracing` filters spell it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Failures only.
    Error,
    /// Failures and suspicious input.
    Warn,
    /// Normal operation.
    #[default]
    Info,
    /// Per-step detail.
    Debug,
    /// Everything, including per-call spans.
    Trace,
}

impl LogLevel {
    /// Filter directive for this level.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Files that fed a loaded [`Config`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfigSources {
    /// The user file, if one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Utf8PathBuf>,
    /// Project files from the closest directory that had any.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project: Vec<Utf8PathBuf>,
    /// Files passed explicitly.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// All files in merge order, lowest precedence first.
    pub fn iter(&self) -> impl Iterator<Item = &Utf8Path> {
        self.user
            .iter()
            .chain(&self.project)
            .chain(&self.explicit)
            .map(Utf8PathBuf::as_path)
    }

    /// The file whose values win, if any file was loaded.
    pub fn primary(&self) -> Option<&Utf8Path> {
        self.iter().last()
    }
}

/// Collects sources and merges them into a [`Config`].
#[derive(Debug, Default)]
pub struct ConfigLoader {
    search_from: Option<Utf8PathBuf>,
    skip_user: bool,
    files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// A loader that reads the user file and the environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Search for project files starting at `dir`.
    pub fn with_project_search(mut self, dir: impl AsRef<Utf8Path>) -> Self {
        self.search_from = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Ignore the user file.
    pub const fn without_user_config(mut self) -> Self {
        self.skip_user = true;
        self
    }

    /// Merge `path` above every discovered file. Its format follows its
    /// extension, defaulting to TOML.
    pub fn with_file(mut self, path: impl AsRef<Utf8Path>) -> Self {
        self.files.push(path.as_ref().to_path_buf());
        self
    }

    /// Resolve sources and merge them.
    #[tracing::instrument(skip(self), fields(search_from = ?self.search_from))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        let sources = ConfigSources {
            user: if self.skip_user {
                None
            } else {
                user_config_file()
            },
            project: self
                .search_from
                .as_deref()
                .map(discover_project_files)
                .unwrap_or_default(),
            explicit: self.files,
        };

        let config: Config = sources
            .iter()
            .fold(
                Figment::from(Serialized::defaults(Config::default())),
                merge_file,
            )
            .merge(Env::prefixed(ENV_PREFIX).lowercase(true))
            .extract()
            .map_err(|e| ConfigError::Invalid(Box::new(e)))?;

        tracing::info!(
            files = sources.iter().count(),
            log_level = config.log_level.as_str(),
            max_score = ?config.max_score,
            "configuration loaded"
        );
        Ok((config, sources))
    }
}

fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
    match path.extension() {
        Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path)),
        Some("json") => figment.merge(Json::file_exact(path)),
        _ => figment.merge(Toml::file_exact(path)),
    }
}

/// `.inkgauge.toml` .. `.inkgauge.json`, then `inkgauge.toml` .. `inkgauge.json`.
fn candidate_names() -> impl Iterator<Item = String> {
    [".", ""].into_iter().flat_map(|prefix| {
        EXTENSIONS
            .into_iter()
            .map(move |ext| format!("{prefix}{FILE_STEM}.{ext}"))
    })
}

fn discover_project_files(start: &Utf8Path) -> Vec<Utf8PathBuf> {
    for dir in start.ancestors() {
        let found: Vec<Utf8PathBuf> = candidate_names()
            .map(|name| dir.join(name))
            .filter(|path| path.is_file())
            .collect();
        if !found.is_empty() {
            return found;
        }
        if dir.join(REPO_MARKER).exists() {
            tracing::debug!(%dir, "no project config inside repository");
            break;
        }
    }
    Vec::new()
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", FILE_STEM)
}

fn utf8_dir(dir: &Path) -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(dir.to_path_buf()).ok()
}

fn user_config_file() -> Option<Utf8PathBuf> {
    let dir = project_dirs().and_then(|dirs| utf8_dir(dirs.config_dir()))?;
    EXTENSIONS
        .into_iter()
        .map(|ext| dir.join(format!("config.{ext}")))
        .find(|path| path.is_file())
}

/// Machine-local data directory (`~/.local/share/inkgauge` on Linux), the
/// default home for log files.
pub fn user_data_local_dir() -> Option<Utf8PathBuf> {
    project_dirs().and_then(|dirs| utf8_dir(dirs.data_local_dir()))
}
