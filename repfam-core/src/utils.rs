use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    let reader = BufReader::new(file);

    Ok(reader)
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
    fn test_reads_plain_and_gzipped() {
        let tempdir = tempfile::tempdir().unwrap();

        let plain = tempdir.path().join("families.json");
        std::fs::write(&plain, "line one\nline two\n").unwrap();

        let gzipped = tempdir.path().join("families.json.gz");
        let mut encoder = GzEncoder::new(File::create(&gzipped).unwrap(), Compression::default());
        encoder.write_all(b"line one\nline two\n").unwrap();
        encoder.finish().unwrap();

        for path in [plain, gzipped] {
            let lines: Vec<String> = get_dynamic_reader(&path)
                .unwrap()
                .lines()
                .collect::<std::io::Result<_>>()
                .unwrap();
            assert_eq!(lines, vec!["line one", "line two"]);
        }
    }

    #[rstest]
    fn test_missing_file() {
        let result = get_dynamic_reader(Path::new("does/not/exist.json"));
        assert!(result.is_err());
    }
}
