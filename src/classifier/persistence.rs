//! JSON persistence of the word and category tables.
//!
//! A model saved under the base path `models/spam` occupies two files:
//!
//! - `models/spam_word.json`: category → word → count
//! - `models/spam_category.json`: category → document count
//!
//! Both are pretty-printed with four-space indentation and non-ASCII text is
//! written verbatim. Each file is written to a temporary file in the same
//! directory and renamed into place once both have been written.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;
use tempfile::{NamedTempFile, TempPath};

use super::model::NaiveBayesModel;
use super::types::{CategoryCounts, WordCounts};
use crate::error::{BayesianFilterError, Result};

const WORD_SUFFIX: &str = "_word.json";
const CATEGORY_SUFFIX: &str = "_category.json";
const INDENT: &[u8] = b"    ";

/// The two artifact paths derived from a base path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelPaths {
    pub word: PathBuf,
    pub category: PathBuf,
}

impl ModelPaths {
    /// Append `_word.json` and `_category.json` to `base`.
    pub fn new<P: AsRef<Path>>(base: P) -> Self {
        let base = base.as_ref();
        Self {
            word: with_suffix(base, WORD_SUFFIX),
            category: with_suffix(base, CATEGORY_SUFFIX),
        }
    }
}

fn with_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(base.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// Write both tables of `model` next to `base`.
///
/// Both tables are serialized to temporary files before either artifact is
/// replaced. If installing the category file fails, the previous word file is
/// put back, so an existing pair is never left half-updated.
pub fn save_model<P: AsRef<Path>>(model: &NaiveBayesModel, base: P) -> Result<ModelPaths> {
    let paths = ModelPaths::new(base);

    let word = stage_json(&paths.word, model.word_counts())?;
    let category = stage_json(&paths.category, model.category_counts())?;
    install_pair(word, &paths.word, category, &paths.category)?;

    info!(
        "saved model with {} categories to {} and {}",
        model.category_counts().len(),
        paths.word.display(),
        paths.category.display()
    );
    Ok(paths)
}

/// Read both tables stored next to `base` into a fresh model.
pub fn load_model<P: AsRef<Path>>(base: P) -> Result<NaiveBayesModel> {
    let paths = ModelPaths::new(base);

    let word_counts: WordCounts = read_json(&paths.word)?;
    let category_counts: CategoryCounts = read_json(&paths.category)?;
    let model = NaiveBayesModel::from_tables(word_counts, category_counts)?;

    info!(
        "loaded model with {} categories and {} words from {}",
        model.category_counts().len(),
        model.vocabulary_size(),
        paths.category.display()
    );
    Ok(model)
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Serialize `value` into a synced temporary file next to `path`.
fn stage_json<T: Serialize>(path: &Path, value: &T) -> Result<NamedTempFile> {
    let parent = parent_dir(path);
    fs::create_dir_all(parent)?;

    let mut file = NamedTempFile::new_in(parent)?;
    {
        let mut writer = BufWriter::new(file.as_file_mut());
        let mut serializer =
            Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(INDENT));
        value.serialize(&mut serializer)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }
    file.as_file().sync_all()?;
    Ok(file)
}

/// Move the current file at `path` aside, if there is one.
fn set_aside(path: &Path) -> Result<Option<TempPath>> {
    if !path.exists() {
        return Ok(None);
    }
    let holder = NamedTempFile::new_in(parent_dir(path))?.into_temp_path();
    fs::rename(path, &holder)?;
    Ok(Some(holder))
}

fn install_pair(
    first: NamedTempFile,
    first_path: &Path,
    second: NamedTempFile,
    second_path: &Path,
) -> Result<()> {
    let previous = set_aside(first_path)?;

    if let Err(e) = first.persist(first_path) {
        restore(previous, first_path);
        return Err(e.error.into());
    }
    if let Err(e) = second.persist(second_path) {
        restore(previous, first_path);
        return Err(e.error.into());
    }
    Ok(())
}

fn restore(previous: Option<TempPath>, path: &Path) {
    let result = match previous {
        Some(previous) => previous.persist(path).map_err(|e| e.error),
        None => match fs::remove_file(path) {
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            other => other,
        },
    };
    if let Err(e) = result {
        warn!("could not restore {}: {e}", path.display());
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(BayesianFilterError::persistence_not_found(path));
        }
        Err(e) => return Err(e.into()),
    };

    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| BayesianFilterError::malformed(format!("{}: {e}", path.display())))
}

impl NaiveBayesModel {
    /// Save to `<base>_word.json` and `<base>_category.json`.
    pub fn save<P: AsRef<Path>>(&self, base: P) -> Result<ModelPaths> {
        save_model(self, base)
    }

    /// Replace this model's state with the one stored under `base`.
    ///
    /// Both files are read and validated before anything is replaced, so on
    /// error the model keeps its previous state.
    pub fn load<P: AsRef<Path>>(&mut self, base: P) -> Result<()> {
        *self = load_model(base)?;
        Ok(())
    }

    /// Load a new model from `base`.
    pub fn from_path<P: AsRef<Path>>(base: P) -> Result<Self> {
        load_model(base)
    }
}
