//! MIF-like memory-initialization table format.
//!
//! Plain-text table with a key-value header (width, depth, radix
//! declarations), an address-indexed decimal body, and an `END;`
//! terminator. Documents are immutable once built and are written
//! whole-file-or-nothing.

use std::fmt::Write as _;
use std::io::Write as _;
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MifError {
    #[error("entry width {0} out of supported range (1..=63 bits)")]
    UnsupportedWidth(u32),

    #[error("table has no entries")]
    EmptyTable,

    #[error("word {word} at address {address} does not fit in {width} bits")]
    WordOutOfRange {
        address: usize,
        word: u64,
        width: u32,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("atomic rename failed: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Memory-initialization table: entry width in bits plus the ordered
/// unsigned words. Depth is the word count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MifDocument {
    width: u32,
    words: Vec<u64>,
}

impl MifDocument {
    /// Build a document, checking that every word fits `width` bits.
    pub fn new(width: u32, words: Vec<u64>) -> Result<Self, MifError> {
        if !(1..=63).contains(&width) {
            return Err(MifError::UnsupportedWidth(width));
        }
        if words.is_empty() {
            return Err(MifError::EmptyTable);
        }
        let limit = 1u64 << width;
        if let Some((address, &word)) = words.iter().enumerate().find(|&(_, &w)| w >= limit) {
            return Err(MifError::WordOutOfRange {
                address,
                word,
                width,
            });
        }
        Ok(Self { width, words })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn depth(&self) -> usize {
        self.words.len()
    }

    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Render the complete document.
    ///
    /// Five header lines, one `<address> : <word>;` line per entry in
    /// ascending address order, then the `END;` terminator. Addresses are
    /// unsigned decimal, data is decimal.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(64 + self.words.len() * 12);
        let _ = writeln!(out, "WIDTH = {};", self.width);
        let _ = writeln!(out, "DEPTH = {};", self.words.len());
        out.push_str("ADDRESS_RADIX = UNS;\n");
        out.push_str("DATA_RADIX = DEC;\n");
        out.push_str("CONTENT BEGIN\n");
        for (address, word) in self.words.iter().enumerate() {
            let _ = writeln!(out, "{address} : {word};");
        }
        out.push_str("END;\n");
        out
    }

    /// Write the rendered document to `path`, whole-file-or-nothing.
    ///
    /// Renders into a uniquely-named temp file in the target's directory,
    /// then renames over `path`. Rename on the same filesystem is atomic,
    /// so a failed run never leaves a partial table behind.
    pub fn write_to(&self, path: &Path) -> Result<(), MifError> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(self.render().as_bytes())?;
        tmp.persist(path)?;
        tracing::debug!(
            path = %path.display(),
            width = self.width,
            depth = self.depth(),
            "wrote mif table"
        );
        Ok(())
    }
}
