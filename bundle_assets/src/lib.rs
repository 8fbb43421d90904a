/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

//! Bakes a directory of PNG assets into a C++ header with a char-keyed lookup table.

pub mod asset;
pub mod emit;
pub mod error;
pub mod options;

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use log::{debug, info};

pub use asset::{Asset, Bundle, KeySkip, lookup_key, scan, symbol_name};
pub use emit::HeaderWriter;
pub use error::{BundleError, Result};
pub use options::BundleOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BundleReport {
    pub assets: usize,
    /// Distinct keys left in the table once later assignments win.
    pub keyed: usize,
    pub bytes: usize,
}

pub fn bundle(
    assets_dir: impl AsRef<Path>,
    output_file: impl AsRef<Path>,
) -> Result<BundleReport> {
    bundle_with(assets_dir, output_file, &BundleOptions::default())
}

/// Writes the header for every matching file in `assets_dir` to `output_file`.
///
/// The output is truncated up front; a failure part way through leaves it partially written.
pub fn bundle_with(
    assets_dir: impl AsRef<Path>,
    output_file: impl AsRef<Path>,
    options: &BundleOptions,
) -> Result<BundleReport> {
    let assets_dir = assets_dir.as_ref();
    let output_file = output_file.as_ref();

    let bundle = scan(assets_dir, options)?;
    info!(
        "bundling {} assets from {}",
        bundle.len(),
        assets_dir.display()
    );

    let file = File::create(output_file).map_err(|source| BundleError::CreateOutput {
        path: output_file.to_path_buf(),
        source,
    })?;
    let write_err = |source: std::io::Error| BundleError::WriteOutput {
        path: output_file.to_path_buf(),
        source,
    };

    let mut header = HeaderWriter::new(BufWriter::new(file), options);
    header.preamble().map_err(write_err)?;

    let mut report = BundleReport::default();
    for asset in bundle.assets() {
        let data = asset.read()?;
        debug!("{}: {} bytes as {}", asset.file_name, data.len(), asset.symbol);
        header.buffer(asset, &data).map_err(write_err)?;

        report.assets += 1;
        report.bytes += data.len();
    }

    report.keyed = bundle.lookup_table().len();
    header.table(bundle.keyed()).map_err(write_err)?;
    header.postamble().map_err(write_err)?;
    header.into_inner().flush().map_err(write_err)?;

    Ok(report)
}
