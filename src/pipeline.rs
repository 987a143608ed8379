use std::path::Path;

use anyhow::Result;

use crate::partition::{partition, Partition};
use crate::progress::ProgressBar;
use crate::source::PlaylistSource;
use crate::types::FlatVideoEntry;
use crate::writer::CsvSnapshot;

/// Fetches the Watch Later listing, partitions it and writes each
/// non-empty group to its CSV file in chronological order. A group
/// with no videos leaves its output path completely untouched.
pub fn run(
    source: &mut dyn PlaylistSource,
    public_output: &Path,
    private_output: &Path,
    progress: bool,
) -> Result<()> {
    println!("\nStep 1: Fetching and partitioning the list of videos...");
    let playlist = source.fetch_watch_later()?;

    let Partition {
        mut public,
        mut private,
    } = partition(playlist.entries);

    if !private.is_empty() {
        println!("Found and separated {} private videos.", private.len());
    }

    if public.is_empty() {
        println!("\nNo valid, public videos found to process.");
    } else {
        // Extraction yields most-recently-added first; the file should
        // read oldest first.
        public.reverse();
        println!("\nFound {} public videos to write to CSV.", public.len());
        println!(
            "Step 2: Writing public videos to \"{}\"...",
            public_output.display()
        );
        write_group(&public, public_output, "Writing Public", progress)?;
    }

    if private.is_empty() {
        println!("\nNo private videos found.");
    } else {
        private.reverse();
        println!(
            "\nStep 3: Writing private videos to \"{}\"...",
            private_output.display()
        );
        write_group(&private, private_output, "Writing Private", progress)?;
    }

    println!("\nProcessing complete.");

    Ok(())
}

fn write_group(
    entries: &[FlatVideoEntry],
    path: &Path,
    label: &str,
    progress: bool,
) -> Result<()> {
    let mut snapshot = CsvSnapshot::create(path)?;
    let mut bar = ProgressBar::new(label, entries.len(), progress)?;

    for entry in entries {
        snapshot.write_entry(entry)?;
        bar.tick()?;
    }

    bar.finish()
}
