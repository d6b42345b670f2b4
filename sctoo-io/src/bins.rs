use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;

use sctoo_core::models::fields::validate_bin_fields;
use sctoo_core::models::{BinField, BinRecord};
use sctoo_core::utils::{FileType, get_file_info};

use crate::error::{Result, SctooIoError};

pub trait BinWrite {
    ///
    /// Write bins to disk in the BED-like `CHR START END ID COUNT` layout
    ///
    /// # Arguments
    /// - path: the path to the file to dump to; must not exist yet
    fn write_bed<T: AsRef<Path>>(&self, path: T) -> Result<()>;

    ///
    /// Write bins to disk as bed.gz file
    ///
    /// # Arguments
    /// - path: the path to the file to dump to; must not exist yet
    fn write_bed_gz<T: AsRef<Path>>(&self, path: T) -> Result<()>;

    ///
    /// Write bins to disk as delimited lines
    ///
    /// # Arguments
    /// - path: the path to the file to dump to; must not exist yet
    /// - fields: which columns to write, in order
    /// - sep: column separator
    /// - gzip: compress the output
    fn write_delimited<T: AsRef<Path>>(
        &self,
        path: T,
        fields: &[BinField],
        sep: &str,
        gzip: bool,
    ) -> Result<()>;
}

///
/// Create the output file, refusing to touch an existing one.
///
fn create_output(path: &Path) -> Result<File> {
    if path.exists() {
        return Err(SctooIoError::OutputExists(path.to_path_buf()));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    Ok(File::options().write(true).create_new(true).open(path)?)
}

///
/// Create `path` and hand it to `write`. A failed write removes the partial
/// file so that a retry is not refused as an existing output.
///
fn write_or_remove<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(File) -> Result<()>,
{
    let file = create_output(path)?;

    write(file).inspect_err(|err| {
        log::warn!("Removing partial output {}: {}", path.display(), err);
        if let Err(remove_err) = std::fs::remove_file(path) {
            log::warn!("Could not remove {}: {}", path.display(), remove_err);
        }
    })
}

fn write_lines<I>(path: &Path, gzip: bool, lines: I) -> Result<()>
where
    I: Iterator<Item = String>,
{
    write_or_remove(path, |file| {
        if gzip {
            let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::best());
            for line in lines {
                writeln!(encoder, "{}", line)?;
            }
            encoder.finish()?.flush()?;
        } else {
            let mut writer = BufWriter::new(file);
            for line in lines {
                writeln!(writer, "{}", line)?;
            }
            writer.flush()?;
        }

        Ok(())
    })
}

impl BinWrite for [BinRecord] {
    fn write_bed<T: AsRef<Path>>(&self, path: T) -> Result<()> {
        write_lines(path.as_ref(), false, self.iter().map(|bin| bin.as_bed_line()))
    }

    fn write_bed_gz<T: AsRef<Path>>(&self, path: T) -> Result<()> {
        write_lines(path.as_ref(), true, self.iter().map(|bin| bin.as_bed_line()))
    }

    fn write_delimited<T: AsRef<Path>>(
        &self,
        path: T,
        fields: &[BinField],
        sep: &str,
        gzip: bool,
    ) -> Result<()> {
        validate_bin_fields(fields)?;
        write_lines(
            path.as_ref(),
            gzip,
            self.iter().map(|bin| bin.as_delimited_line(fields, sep)),
        )
    }
}

///
/// Write bins to `path`, choosing the layout from the file name:
/// `.bed`/`.bed.gz` get the BED-like layout, anything else the delimited
/// layout with `fields` and `sep`. A trailing `.gz` compresses the output.
///
pub fn write_bins<P: AsRef<Path>>(
    path: P,
    bins: &[BinRecord],
    fields: &[BinField],
    sep: &str,
) -> Result<()> {
    let path = path.as_ref();
    let info = get_file_info(path);

    match (info.file_type, info.is_gzipped) {
        (FileType::BED, false) => bins.write_bed(path)?,
        (FileType::BED, true) => bins.write_bed_gz(path)?,
        (_, gzip) => bins.write_delimited(path, fields, sep, gzip)?,
    }

    log::info!("Wrote {} bins to {}", bins.len(), path.display());

    Ok(())
}
