use anyhow::{bail, Result};
use bayestest_utils::{Posterior, PosteriorGrid};
use csv::{Writer, WriterBuilder};
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const DEGENERATE_CELL: &str = "NA";

fn create_output(path: &Path) -> Result<File> {
    if path.exists() {
        bail!("Output file already exists: {}", path.display());
    }
    Ok(File::create(path)?)
}

pub struct GridRecordWriter {
    writer: Writer<File>,
}

impl GridRecordWriter {
    pub fn new(file_path: &Path) -> Result<Self> {
        let file = create_output(file_path)?;
        let writer = WriterBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .from_writer(file);
        Ok(Self { writer })
    }

    pub fn write_header(&mut self) -> Result<()> {
        self.writer
            .write_record(&["specificity", "sensitivity", "posterior"])?;
        Ok(())
    }

    pub fn write_grid(&mut self, grid: &PosteriorGrid) -> Result<()> {
        for (specificity, sensitivity, posterior) in grid.iter() {
            let value = match posterior {
                Posterior::Defined(value) => value.to_string(),
                Posterior::Degenerate => DEGENERATE_CELL.to_string(),
            };
            self.writer.write_record(&[
                specificity.to_string(),
                sensitivity.to_string(),
                value,
            ])?;
        }
        debug!("Wrote {} grid records", grid.cells().len());
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

pub fn write_tsv(path: &Path, grid: &PosteriorGrid) -> Result<()> {
    let mut writer = GridRecordWriter::new(path)?;
    writer.write_header()?;
    writer.write_grid(grid)?;
    writer.flush()
}

pub fn write_json(path: &Path, grid: &PosteriorGrid) -> Result<()> {
    let file = create_output(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, grid)?;
    writer.flush()?;
    Ok(())
}
