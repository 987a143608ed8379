use std::fs::File;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use csv::Writer;

use crate::types::FlatVideoEntry;

pub const CSV_HEADER: [&str; 2] = ["ID", "Title"];

const MISSING_FIELD: &str = "N/A";

/// Snapshot writer for one output file. Creating it truncates the
/// destination and writes the header; every row is flushed as soon as
/// it is written, so an aborted run still leaves complete rows behind.
pub struct CsvSnapshot {
    writer: Writer<File>,
}

impl CsvSnapshot {
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("cannot create output file \"{}\"", path.display()))?;

        let mut writer = Writer::from_writer(file);
        writer.write_record(CSV_HEADER)?;
        writer.flush()?;
        println!(
            "Created new CSV file (overwriting if exists): '{}'",
            path.display()
        );

        Ok(CsvSnapshot { writer })
    }

    pub fn write_entry(&mut self, entry: &FlatVideoEntry) -> Result<()> {
        self.writer
            .write_record([field(&entry.id), field(&entry.title)])?;
        self.writer.flush()?;

        Ok(())
    }
}

fn field(value: &Option<String>) -> &str {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v,
        _ => MISSING_FIELD,
    }
}

/// Reads the video IDs back out of an export file, in file order.
/// Rows whose ID column holds the N/A placeholder carry no usable id
/// and are skipped.
pub fn read_video_ids(path: &Path) -> Result<Vec<String>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("cannot read \"{}\"", path.display()))?;

    let id_index = reader
        .headers()?
        .iter()
        .position(|column| column == "ID")
        .ok_or_else(|| anyhow!("\"{}\" has no ID column", path.display()))?;

    let mut ids = Vec::new();
    for record in reader.records() {
        let record = record?;
        match record.get(id_index) {
            Some(id) if !id.is_empty() && id != MISSING_FIELD => ids.push(id.to_string()),
            _ => {}
        }
    }

    Ok(ids)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    fn entry(id: Option<&str>, title: Option<&str>) -> FlatVideoEntry {
        FlatVideoEntry {
            id: id.map(str::to_string),
            title: title.map(str::to_string),
            url: None,
        }
    }

    #[test]
    fn it_writes_the_header_before_any_row() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        CsvSnapshot::create(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "ID,Title\n");
    }

    #[test]
    fn it_writes_one_row_per_entry() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let mut snapshot = CsvSnapshot::create(&path).unwrap();
        snapshot.write_entry(&entry(Some("abc"), Some("First"))).unwrap();
        snapshot.write_entry(&entry(Some("def"), Some("Second"))).unwrap();
        drop(snapshot);

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "ID,Title\nabc,First\ndef,Second\n"
        );
    }

    #[test]
    fn it_substitutes_na_for_missing_or_empty_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let mut snapshot = CsvSnapshot::create(&path).unwrap();
        snapshot.write_entry(&entry(None, Some("Untitled id"))).unwrap();
        snapshot.write_entry(&entry(Some("abc"), None)).unwrap();
        snapshot.write_entry(&entry(Some(""), Some(""))).unwrap();
        drop(snapshot);

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "ID,Title\nN/A,Untitled id\nabc,N/A\nN/A,N/A\n"
        );
    }

    #[test]
    fn it_quotes_titles_containing_delimiters() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let mut snapshot = CsvSnapshot::create(&path).unwrap();
        snapshot
            .write_entry(&entry(Some("abc"), Some("Hello, \"world\"")))
            .unwrap();
        drop(snapshot);

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "ID,Title\nabc,\"Hello, \"\"world\"\"\"\n"
        );
    }

    #[test]
    fn it_overwrites_previous_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        fs::write(&path, "stale content\nfrom a previous run\n").unwrap();

        let mut snapshot = CsvSnapshot::create(&path).unwrap();
        snapshot.write_entry(&entry(Some("abc"), Some("Fresh"))).unwrap();
        drop(snapshot);

        assert_eq!(fs::read_to_string(&path).unwrap(), "ID,Title\nabc,Fresh\n");
    }

    #[test]
    fn it_reads_ids_back_skipping_na_placeholders() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let mut snapshot = CsvSnapshot::create(&path).unwrap();
        snapshot.write_entry(&entry(Some("abc"), Some("First"))).unwrap();
        snapshot.write_entry(&entry(None, Some("Deleted upload"))).unwrap();
        snapshot.write_entry(&entry(Some("def"), Some("Second"))).unwrap();
        drop(snapshot);

        assert_eq!(read_video_ids(&path).unwrap(), ["abc", "def"]);
    }

    #[test]
    fn it_fails_to_read_ids_from_a_missing_file() {
        let dir = tempdir().unwrap();
        assert!(read_video_ids(&dir.path().join("absent.csv")).is_err());
    }

    #[test]
    fn it_fails_to_read_ids_without_an_id_column() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("other.csv");
        fs::write(&path, "Name,Title\nfoo,bar\n").unwrap();

        assert!(read_video_ids(&path).is_err());
    }

    #[test]
    fn it_fails_fast_when_the_destination_cannot_be_created() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing-subdir").join("out.csv");

        assert!(CsvSnapshot::create(&path).is_err());
        assert!(!path.exists());
    }
}
