use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use flate2::read::MultiGzDecoder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub enum FileType {
    BED,
    VCF,
    CSV,
    TSV,
    UNKNOWN,
}

impl FromStr for FileType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bed" => Ok(FileType::BED),
            "vcf" => Ok(FileType::VCF),
            "csv" => Ok(FileType::CSV),
            "tsv" | "txt" => Ok(FileType::TSV),
            _ => Ok(FileType::UNKNOWN),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileInfo {
    pub file_type: FileType,
    pub is_gzipped: bool,
}

///
/// Work out the file type from the extension, looking through a trailing
/// `.gz`. `peaks.bed.gz` is a gzipped BED file, `calls.vcf` a plain VCF.
///
pub fn get_file_info(path: &Path) -> FileInfo {
    let mut file_type = FileType::UNKNOWN;
    let mut is_gzipped = false;

    if let Some(filename) = path.file_name().and_then(OsStr::to_str) {
        let base_filename = match filename.strip_suffix(".gz") {
            Some(base) => {
                is_gzipped = true;
                base
            }
            None => filename,
        };

        if let Some(ext) = PathBuf::from(base_filename)
            .extension()
            .and_then(|e| e.to_str())
        {
            file_type = FileType::from_str(ext).unwrap_or(FileType::UNKNOWN);
        }
    }

    FileInfo {
        file_type,
        is_gzipped,
    }
}

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> std::io::Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path)?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::{BufRead, Write};

    use flate2::Compression;
    use flate2::write::GzEncoder;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("genes.bed", FileType::BED, false)]
    #[case("genes.bed.gz", FileType::BED, true)]
    #[case("calls.somatic.vcf", FileType::VCF, false)]
    #[case("calls.vcf.gz", FileType::VCF, true)]
    #[case("intervals.CSV", FileType::CSV, false)]
    #[case("bins.tsv", FileType::TSV, false)]
    #[case("notes", FileType::UNKNOWN, false)]
    #[case("archive.gz", FileType::UNKNOWN, true)]
    fn test_get_file_info(#[case] name: &str, #[case] file_type: FileType, #[case] gz: bool) {
        let info = get_file_info(Path::new(name));
        assert_eq!(info.file_type, file_type);
        assert_eq!(info.is_gzipped, gz);
    }

    #[rstest]
    fn test_dynamic_reader_reads_gzip() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("lines.txt.gz");

        let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        writeln!(encoder, "first").unwrap();
        writeln!(encoder, "second").unwrap();
        encoder.finish().unwrap();

        let lines = get_dynamic_reader(&path)
            .unwrap()
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(lines, vec!["first", "second"]);
    }

    #[rstest]
    fn test_dynamic_reader_missing_file() {
        assert!(get_dynamic_reader(Path::new("does/not/exist.bed")).is_err());
    }
}
