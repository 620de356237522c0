use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::report::RunSummary;

pub fn write_summary(path: &Path, summary: &RunSummary) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(summary).map_err(std::io::Error::other)?;
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(json.as_bytes())?;
    w.write_all(b"\n")?;
    Ok(())
}
