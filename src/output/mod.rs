use crate::error::Result;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

#[derive(Serialize)]
struct JsonReport<'a> {
    count: usize,
    candidates: &'a BTreeSet<String>,
}

fn render<W: Write>(w: &mut W, candidates: &BTreeSet<String>, output_type: &str) -> io::Result<()> {
    match output_type {
        "json" => {
            let report = JsonReport {
                count: candidates.len(),
                candidates,
            };
            serde_json::to_writer_pretty(&mut *w, &report)
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
            writeln!(w)?;
        }
        _ => {
            // txt: one candidate per line, newline-terminated, UTF-8.
            // BTreeSet iteration gives lexicographic byte order for free.
            for c in candidates {
                writeln!(w, "{}", c)?;
            }
        }
    }
    Ok(())
}

/// Write the candidate set to `path` and return the number of candidates.
///
/// The set has no duplicates by construction, so line count equals set
/// cardinality. In the default (truncate) mode the data is staged into a
/// temp file in the destination directory and persisted with a rename, so
/// the destination is either fully written or not created at all. Append
/// mode writes through directly and skips the staging step.
pub fn write_candidates(
    candidates: &BTreeSet<String>,
    path: &Path,
    output_type: &str,
    gzip: bool,
    append: bool,
) -> Result<usize> {
    match output_type {
        "txt" | "json" => {}
        other => {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("unsupported output type: {}", other),
            )
            .into())
        }
    }

    if append {
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        if gzip {
            let mut w = GzEncoder::new(BufWriter::new(f), Compression::default());
            render(&mut w, candidates, output_type)?;
            w.finish()?.flush()?;
        } else {
            let mut w = BufWriter::new(f);
            render(&mut w, candidates, output_type)?;
            w.flush()?;
        }
        return Ok(candidates.len());
    }

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    if gzip {
        let mut w = GzEncoder::new(BufWriter::new(tmp.as_file_mut()), Compression::default());
        render(&mut w, candidates, output_type)?;
        w.finish()?.flush()?;
    } else {
        let mut w = BufWriter::new(tmp.as_file_mut());
        render(&mut w, candidates, output_type)?;
        w.flush()?;
    }
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(candidates.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_txt_sorted_unique_newline_terminated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let n = write_candidates(&set(&["b", "a", "c"]), &path, "txt", false, false).unwrap();
        assert_eq!(n, 3);
        let data = std::fs::read_to_string(&path).unwrap();
        assert_eq!(data, "a\nb\nc\n");
        assert_eq!(data.lines().count(), n);
    }

    #[test]
    fn test_gzip_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt.gz");
        write_candidates(&set(&["x", "y"]), &path, "txt", true, false).unwrap();
        let mut dec = GzDecoder::new(std::fs::File::open(&path).unwrap());
        let mut data = String::new();
        dec.read_to_string(&mut data).unwrap();
        assert_eq!(data, "x\ny\n");
    }

    #[test]
    fn test_json_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_candidates(&set(&["a", "b"]), &path, "json", false, false).unwrap();
        let data = std::fs::read_to_string(&path).unwrap();
        let v: serde_json::Value = serde_json::from_str(&data).unwrap();
        assert_eq!(v["count"], 2);
        assert_eq!(v["candidates"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_missing_directory_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.txt");
        assert!(write_candidates(&set(&["a"]), &path, "txt", false, false).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_append_mode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_candidates(&set(&["a"]), &path, "txt", false, false).unwrap();
        write_candidates(&set(&["b"]), &path, "txt", false, true).unwrap();
        let data = std::fs::read_to_string(&path).unwrap();
        assert_eq!(data, "a\nb\n");
    }

    #[test]
    fn test_unsupported_output_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bin");
        assert!(write_candidates(&set(&["a"]), &path, "parquet", false, false).is_err());
        assert!(!path.exists());
    }
}
