/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::io::{self, Write};

use crate::{asset::Asset, options::BundleOptions};

/// Streams the generated header into `W`, one section at a time.
pub struct HeaderWriter<'a, W: Write> {
    out: W,
    options: &'a BundleOptions,
}

impl<'a, W: Write> HeaderWriter<'a, W> {
    pub fn new(out: W, options: &'a BundleOptions) -> Self {
        Self { out, options }
    }

    pub fn preamble(&mut self) -> io::Result<()> {
        let guard = &self.options.guard;
        write!(self.out, "#ifndef {guard}\n#define {guard}\n\n")?;
        self.out.write_all(b"#include <map>\n")?;
        self.out.write_all(b"#include <vector>\n")?;
        self.out.write_all(b"#include <string>\n\n")
    }

    pub fn buffer(&mut self, asset: &Asset, data: &[u8]) -> io::Result<()> {
        writeln!(self.out, "const unsigned char {}[] = {{", asset.symbol)?;
        write_hex_lines(
            &mut self.out,
            data,
            self.options.values_per_line,
            &self.options.indent,
        )?;
        self.out.write_all(b"};\n")?;
        write!(
            self.out,
            "const unsigned int {} = {};\n\n",
            asset.len_symbol(),
            data.len()
        )
    }

    pub fn table<'b>(
        &mut self,
        entries: impl IntoIterator<Item = (char, &'b Asset)>,
    ) -> io::Result<()> {
        let indent = &self.options.indent;

        self.out.write_all(b"struct Asset {\n")?;
        writeln!(self.out, "{indent}const unsigned char* data;")?;
        writeln!(self.out, "{indent}unsigned int size;")?;
        self.out.write_all(b"};\n\n")?;

        self.out
            .write_all(b"inline std::map<char, Asset> get_embedded_assets() {\n")?;
        writeln!(self.out, "{indent}std::map<char, Asset> assets;")?;
        for (key, asset) in entries {
            writeln!(
                self.out,
                "{indent}assets['{}'] = {{ {}, {} }};",
                char_literal(key),
                asset.symbol,
                asset.len_symbol()
            )?;
        }
        writeln!(self.out, "{indent}return assets;")?;
        self.out.write_all(b"}\n")
    }

    pub fn postamble(&mut self) -> io::Result<()> {
        writeln!(self.out, "#endif // {}", self.options.guard)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Writes `data` as `0x..` literals, `per_line` to a line, each line ending in a comma.
pub fn write_hex_lines<W: Write>(
    out: &mut W,
    data: &[u8],
    per_line: usize,
    indent: &str,
) -> io::Result<()> {
    for chunk in data.chunks(per_line.max(1)) {
        out.write_all(indent.as_bytes())?;
        for (i, byte) in chunk.iter().enumerate() {
            if i > 0 {
                out.write_all(b", ")?;
            }
            write!(out, "0x{byte:02x}")?;
        }
        out.write_all(b",\n")?;
    }
    Ok(())
}

fn char_literal(key: char) -> String {
    match key {
        '\'' => "\\'".to_owned(),
        '\\' => "\\\\".to_owned(),
        c => c.to_string(),
    }
}
