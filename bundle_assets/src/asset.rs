/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::{Path, PathBuf},
};

use log::{debug, warn};
use thiserror::Error;

use crate::{
    error::{BundleError, Result},
    options::BundleOptions,
};

/// Why a filename produced no lookup key. The asset is still embedded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeySkip {
    #[error("no `_` separating color and piece")]
    NoSeparator,
    #[error("empty piece segment")]
    EmptyPiece,
    #[error("piece code {0:?} is not ASCII")]
    NonAscii(char),
}

/// Derives the table key from `<color>_<piece>...`.
///
/// White pieces map to upper case, everything else to lower case.
pub fn lookup_key(file_name: &str) -> std::result::Result<char, KeySkip> {
    let mut parts = file_name.split('_');
    let color = parts.next().unwrap_or_default();
    let piece = parts.next().ok_or(KeySkip::NoSeparator)?;
    let piece = piece.chars().next().ok_or(KeySkip::EmptyPiece)?;

    if !piece.is_ascii() {
        return Err(KeySkip::NonAscii(piece));
    }

    Ok(if color == "w" {
        piece.to_ascii_uppercase()
    } else {
        piece.to_ascii_lowercase()
    })
}

pub fn symbol_name(file_name: &str, prefix: &str) -> String {
    format!("{prefix}{}", file_name.replace('.', "_"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub file_name: String,
    pub path: PathBuf,
    pub symbol: String,
    pub key: Option<char>,
}

impl Asset {
    fn new(dir: &Path, file_name: String, options: &BundleOptions) -> Self {
        let key = match lookup_key(&file_name) {
            Ok(key) => Some(key),
            Err(reason) => {
                warn!("{file_name}: {reason}, embedding without a lookup key");
                None
            }
        };

        Self {
            path: dir.join(&file_name),
            symbol: symbol_name(&file_name, &options.symbol_prefix),
            file_name,
            key,
        }
    }

    pub fn len_symbol(&self) -> String {
        format!("{}_len", self.symbol)
    }

    pub fn read(&self) -> Result<Vec<u8>> {
        fs::read(&self.path).map_err(|source| BundleError::ReadAsset {
            path: self.path.clone(),
            source,
        })
    }
}

/// Sorted set of assets found in one directory. Bytes are read lazily.
#[derive(Debug, Clone, Default)]
pub struct Bundle {
    assets: Vec<Asset>,
}

impl Bundle {
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Keyed assets in the order their table assignments are emitted.
    pub fn keyed(&self) -> impl Iterator<Item = (char, &Asset)> {
        self.assets
            .iter()
            .filter_map(|asset| asset.key.map(|key| (key, asset)))
    }

    /// The table as the generated accessor sees it: later assignments win.
    pub fn lookup_table(&self) -> BTreeMap<char, &Asset> {
        self.keyed().collect()
    }
}

pub fn scan(dir: &Path, options: &BundleOptions) -> Result<Bundle> {
    let read_dir_err = |source: std::io::Error| BundleError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        let os_name = entry.file_name();

        let Some(name) = os_name.to_str() else {
            if os_name.to_string_lossy().ends_with(&options.extension) {
                warn!("skipping non UTF-8 file name {os_name:?}");
            }
            continue;
        };

        if !name.ends_with(&options.extension) {
            continue;
        }

        // follows symlinks; anything unreadable is left for Asset::read to report
        let is_dir = fs::metadata(entry.path()).is_ok_and(|meta| meta.is_dir());
        if !is_dir {
            names.push(name.to_owned());
        }
    }
    names.sort();

    let assets: Vec<Asset> = names
        .into_iter()
        .map(|name| Asset::new(dir, name, options))
        .collect();

    let mut owners: HashMap<char, &str> = HashMap::new();
    for asset in &assets {
        let Some(key) = asset.key else { continue };
        if let Some(previous) = owners.insert(key, &asset.file_name) {
            warn!(
                "key '{key}' of {} replaces {previous} in the lookup table",
                asset.file_name
            );
        }
        debug!("{} -> '{key}'", asset.file_name);
    }

    Ok(Bundle { assets })
}
