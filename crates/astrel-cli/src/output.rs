//! Row rendering: one JSON object per line, written to stdout or a file.

use std::io::Write;

use anyhow::Result;
use astrel_core::NodeRecord;

/// A sink that rows are streamed into as each batch arrives, so the CLI
/// never materializes the full run's output in memory at once.
pub struct RowWriter {
    writer: Box<dyn Write>,
}

impl RowWriter {
    pub fn stdout() -> Self {
        Self {
            writer: Box::new(std::io::stdout()),
        }
    }

    pub fn to_file(path: &str) -> Result<Self> {
        let file = std::fs::File::create(path)?;
        Ok(Self {
            writer: Box::new(std::io::BufWriter::new(file)),
        })
    }

    pub fn write_batch(&mut self, batch: &[NodeRecord]) -> Result<()> {
        for row in batch {
            serde_json::to_writer(&mut self.writer, row)?;
            self.writer.write_all(b"\n")?;
        }
        Ok(())
    }
}
