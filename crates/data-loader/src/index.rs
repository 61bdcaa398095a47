//! Catalog loading from disk.
//!
//! Reads the file, decodes it, parses every line and builds the ordered
//! table with its id index. Any failure aborts the whole load.

use crate::error::Result;
use crate::parser;
use crate::types::*;
use tracing::{debug, info};

impl Catalog {
    /// Load a catalog file described by `options`
    ///
    /// Steps:
    /// 1. Read and decode the file
    /// 2. Parse all lines (in parallel, reported in file order)
    /// 3. Build the table, rejecting duplicate ids
    pub fn load(options: &LoadOptions) -> Result<Self> {
        info!(
            path = %options.path.display(),
            encoding = ?options.encoding,
            "Loading movie catalog"
        );

        let content = parser::read_text(&options.path, options.encoding)?;
        debug!("Read {} bytes from catalog", content.len());

        let file = options
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| options.path.display().to_string());
        let records = parser::parse_catalog(&content, &options.delimiter, &file)?;
        let catalog = Catalog::from_records(records)?;

        info!("Loaded {} movies", catalog.len());
        Ok(catalog)
    }
}
