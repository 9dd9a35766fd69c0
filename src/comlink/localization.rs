//! One-shot localization pipeline and the name dictionary it produces.
//!
//! After the gateway session is established the bot fetches the game's
//! localization bundle exactly once: resolve the latest bundle version,
//! download the base64-encoded zip, read the English locale file out of it,
//! and keep every `UNIT_*_NAME` key. The resulting map translates roster
//! `definitionId`/`baseId` values into display names and is persisted to
//! `assets/localisation/en-US.json` (sorted keys, indented) for inspection.
//!
//! A pipeline failure is a degraded state, not a fatal one: the failure is
//! logged as a warning, the store stays empty, and name lookups simply miss.

use std::collections::BTreeMap;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde_json::Value;
use thiserror::Error;
use tokio::sync::OnceCell;
use zip::ZipArchive;

use crate::error::ComlinkError;

use super::ComlinkClient;

/// Locale file inside the bundle archive carrying the English (US) strings.
const BUNDLE_LOCALE_FILE: &str = "Loc_ENG_US.txt";

/// Where the generated name dictionary is persisted, relative to the working
/// directory. Overwritten on every pipeline run.
pub const ASSET_PATH: &str = "assets/localisation/en-US.json";

/// Failure of any localization pipeline step.
#[derive(Error, Debug)]
pub enum LocalizationError {
    #[error(transparent)]
    Comlink(#[from] ComlinkError),

    /// Bundle response had no `localizationBundle` field.
    #[error("Localization response is missing the 'localizationBundle' field")]
    MissingBundle,

    #[error("Could not base64-decode the localization bundle")]
    Base64(#[from] base64::DecodeError),

    #[error("Could not read the localization bundle archive")]
    Archive(#[from] zip::result::ZipError),

    #[error("Could not persist the localization dictionary")]
    Io(#[from] std::io::Error),

    #[error("Could not serialize the localization dictionary")]
    Serialize(#[from] serde_json::Error),
}

/// Unit-name dictionary built once per process and read-only afterwards.
///
/// The map sits behind a one-shot init barrier: readers either see the fully
/// built dictionary or, if the pipeline failed, an empty one. There is no
/// mutable shared state to lock.
#[derive(Debug)]
pub struct LocalizationStore {
    names: OnceCell<BTreeMap<String, String>>,
    asset_path: PathBuf,
}

impl LocalizationStore {
    /// Creates a store that persists to the standard asset path.
    pub fn new() -> Self {
        Self::with_asset_path(ASSET_PATH)
    }

    /// Creates a store that persists to a caller-chosen path.
    pub fn with_asset_path(asset_path: impl Into<PathBuf>) -> Self {
        Self {
            names: OnceCell::new(),
            asset_path: asset_path.into(),
        }
    }

    /// Runs the pipeline once. Later calls (and concurrent callers) await the
    /// same initialization and never re-run it.
    pub async fn initialize(&self, comlink: &ComlinkClient) {
        self.names
            .get_or_init(|| async {
                match run_pipeline(comlink, &self.asset_path).await {
                    Ok(names) => {
                        tracing::info!(
                            entries = names.len(),
                            path = %self.asset_path.display(),
                            "Localization dictionary created and saved"
                        );
                        names
                    }
                    Err(error) => {
                        tracing::warn!(
                            error = %error,
                            "Localization pipeline failed; continuing without unit names"
                        );
                        BTreeMap::new()
                    }
                }
            })
            .await;
    }

    /// Looks up a display name by its full localization key,
    /// e.g. `UNIT_THRAWN_NAME`.
    pub fn unit_name(&self, key: &str) -> Option<&str> {
        self.names.get()?.get(key).map(String::as_str)
    }

    /// Number of entries, zero until initialization completes.
    pub fn len(&self) -> usize {
        self.names.get().map_or(0, BTreeMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for LocalizationStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch, decode, unzip, parse, persist.
async fn run_pipeline(
    comlink: &ComlinkClient,
    asset_path: &Path,
) -> Result<BTreeMap<String, String>, LocalizationError> {
    let versions = comlink.get_latest_versions().await?;
    tracing::debug!(bundle = %versions.language, "Fetching localization bundle");
    let bundle = comlink
        .get_localization(Some(&versions.language), false, false)
        .await?;

    let encoded = bundle
        .get("localizationBundle")
        .and_then(Value::as_str)
        .ok_or(LocalizationError::MissingBundle)?;
    let compressed = BASE64.decode(encoded)?;

    let mut archive = ZipArchive::new(Cursor::new(compressed))?;
    let mut locale_file = archive.by_name(BUNDLE_LOCALE_FILE)?;
    let mut locale = String::new();
    locale_file.read_to_string(&mut locale)?;

    let names = parse_locale(&locale);
    persist(&names, asset_path)?;
    Ok(names)
}

/// Extracts `UNIT_*_NAME` entries from a locale file.
///
/// The format is line-oriented `KEY|value`. Comment lines (leading `#`) and
/// lines without a separator are skipped; the split is on the first `|` so
/// values may themselves contain pipes.
pub fn parse_locale(locale: &str) -> BTreeMap<String, String> {
    let mut names = BTreeMap::new();
    for line in locale.lines() {
        if line.starts_with('#') {
            continue;
        }
        let Some((key, description)) = line.split_once('|') else {
            continue;
        };
        if key.starts_with("UNIT_") && key.ends_with("_NAME") {
            names.insert(key.to_string(), description.to_string());
        }
    }
    names
}

/// Writes the dictionary as indented JSON, creating parent directories and
/// replacing any previous file. Key order is the map's sorted order.
pub fn persist(names: &BTreeMap<String, String>, path: &Path) -> Result<(), LocalizationError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let document = serde_json::to_string_pretty(names)?;
    std::fs::write(path, document)?;
    Ok(())
}

/// Reads a previously persisted dictionary back.
pub fn load(path: &Path) -> Result<BTreeMap<String, String>, LocalizationError> {
    let document = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&document)?)
}
