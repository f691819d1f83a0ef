use super::types::Har;
use crate::{Error, Result};
use std::collections::HashSet;
use std::io::{BufReader, Read};

pub struct HarReader;

impl HarReader {
    /// Parse a HAR document from any byte stream
    ///
    /// The stream is buffered internally, so a raw file or socket can be
    /// passed directly.
    pub fn from_reader<R: Read>(reader: R) -> Result<Har> {
        tracing::debug!("Reading HAR from stream");

        let har: Har = serde_json::from_reader(BufReader::new(reader))?;

        tracing::info!(
            "Successfully parsed HAR stream with {} entries",
            har.log.entries.len()
        );

        Ok(har)
    }

    /// Parse a HAR document held in memory as text
    pub fn from_str(content: &str) -> Result<Har> {
        let har: Har = serde_json::from_str(content)?;

        tracing::debug!(
            "Decoded HAR log version {} ({} pages, {} entries) from {} chars",
            har.log.version,
            har.log.pages.len(),
            har.log.entries.len(),
            content.len()
        );

        Ok(har)
    }

    /// Parse a HAR document from raw JSON bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Har> {
        tracing::debug!("Parsing HAR from {} bytes", bytes.len());

        let har: Har = serde_json::from_slice(bytes)?;

        tracing::info!(
            "Successfully parsed HAR from bytes with {} entries",
            har.log.entries.len()
        );

        Ok(har)
    }

    /// Validate that a HAR structure is well-formed
    ///
    /// Parsing never calls this; the schema itself accepts any field
    /// combination. Checks the version, that every entry has a method and
    /// URL, and that every `pageref` names a page in the same log.
    pub fn validate(har: &Har) -> Result<()> {
        tracing::debug!("Validating HAR structure");

        if har.log.version.is_empty() {
            return Err(Error::InvalidStructure("Missing HAR version".to_string()));
        }

        if har.log.entries.is_empty() {
            tracing::warn!("HAR log contains no entries");
        }

        let page_ids: HashSet<&str> = har.log.pages.iter().map(|p| p.id.as_str()).collect();

        for (idx, entry) in har.log.entries.iter().enumerate() {
            if entry.request.method.is_empty() {
                return Err(Error::InvalidStructure(format!(
                    "Entry {} has empty request method",
                    idx
                )));
            }
            if entry.request.url.is_empty() {
                return Err(Error::InvalidStructure(format!(
                    "Entry {} has empty request URL",
                    idx
                )));
            }
            if !entry.page_ref.is_empty() && !page_ids.contains(entry.page_ref.as_str()) {
                return Err(Error::DanglingPageRef {
                    entry: idx,
                    pageref: entry.page_ref.clone(),
                });
            }
        }

        tracing::debug!("HAR structure is valid");
        Ok(())
    }
}
