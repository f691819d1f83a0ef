use super::types::Har;
use crate::Result;
use std::io::{BufWriter, Write};

pub struct HarWriter;

impl HarWriter {
    /// Write a HAR structure as pretty-printed JSON to any byte sink
    pub fn to_writer<W: Write>(har: &Har, writer: W) -> Result<()> {
        tracing::debug!("Writing HAR to stream");

        let mut writer = BufWriter::new(writer);
        serde_json::to_writer_pretty(&mut writer, har)?;
        writer.flush()?;

        tracing::info!(
            "Successfully wrote HAR with {} entries to stream",
            har.log.entries.len()
        );

        Ok(())
    }

    /// Render a HAR document as pretty-printed JSON
    pub fn to_string(har: &Har) -> Result<String> {
        encode(har, true)
    }

    /// Render a HAR document as single-line JSON
    pub fn to_string_compact(har: &Har) -> Result<String> {
        encode(har, false)
    }

    /// Convert a HAR structure to compact JSON bytes
    pub fn to_vec(har: &Har) -> Result<Vec<u8>> {
        let bytes = serde_json::to_vec(har)?;
        tracing::debug!("Encoded HAR into {} bytes", bytes.len());
        Ok(bytes)
    }
}

fn encode(har: &Har, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(har)?
    } else {
        serde_json::to_string(har)?
    };

    tracing::debug!(
        "Encoded HAR log ({} pages, {} entries) into {} chars",
        har.log.pages.len(),
        har.log.entries.len(),
        json.len()
    );

    Ok(json)
}
