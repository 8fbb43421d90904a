/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

/// Naming and layout constants for one generated header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleOptions {
    /// Only directory entries whose name ends with this are bundled.
    pub extension: String,
    pub symbol_prefix: String,
    pub values_per_line: usize,
    pub indent: String,
    /// Include guard macro wrapping the header.
    pub guard: String,
}

impl Default for BundleOptions {
    fn default() -> Self {
        Self {
            extension: ".png".to_owned(),
            symbol_prefix: "asset_".to_owned(),
            values_per_line: 12,
            indent: "    ".to_owned(),
            guard: "ASSETS_H".to_owned(),
        }
    }
}
