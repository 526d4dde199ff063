use crate::context::Context;
use crate::error::Error;
use crate::result::Result;
use crate::utils;
use crate::walk::{self, SourceEntry};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// Maximum deflate effort
const DEFLATE_BEST: i64 = 9;

/// Entries at or above this size need Zip64 extensions
const ZIP64_THRESHOLD: u64 = 0xFFFF_FFFF;

/// Outcome of a packaging run
#[derive(Debug, Clone)]
pub struct Summary {
    pub entries: usize,
    pub input_bytes: u64,
    pub archive_bytes: u64,
    pub output_path: PathBuf,
    /// Entry names in archive order
    pub names: Vec<String>,
}

/// Package `ctx.source_dir` into a zip archive at `ctx.output_path`.
///
/// The entry list is collected before the output is touched, so a traversal
/// failure leaves any previous archive in place. Once writing starts a failure
/// may leave a partial file behind; rerunning replaces it.
pub fn create(ctx: &Context) -> Result<Summary> {
    let entries = walk::collect_entries(&ctx.source_dir, Some(&ctx.output_path))?;

    utils::ensure_parent_dir(&ctx.output_path)?;
    utils::remove_existing(&ctx.output_path)?;

    let input_bytes = write_archive(&ctx.output_path, &entries)?;
    let archive_bytes = fs::metadata(&ctx.output_path)?.len();

    Ok(Summary {
        entries: entries.len(),
        input_bytes,
        archive_bytes,
        output_path: ctx.output_path.clone(),
        names: entries.into_iter().map(|entry| entry.name).collect(),
    })
}

/// Options shared by every entry; nothing here depends on the host clock
fn base_options() -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(DEFLATE_BEST))
        .last_modified_time(DateTime::default())
}

fn write_archive(output_path: &Path, entries: &[SourceEntry]) -> Result<u64> {
    let file = File::create(output_path).map_err(|err| Error::output(output_path, err))?;
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let options = base_options();
    let mut total = 0;

    for entry in entries {
        total += add_file(&mut zip, entry, options)?;
    }

    let mut writer = zip.finish()?;
    writer.flush()?;
    Ok(total)
}

fn add_file<W: Write + io::Seek>(
    zip: &mut ZipWriter<W>,
    entry: &SourceEntry,
    options: SimpleFileOptions,
) -> Result<u64> {
    let mut source = File::open(&entry.path)?;
    let metadata = source.metadata()?;

    let options = options
        .large_file(metadata.len() >= ZIP64_THRESHOLD)
        .unix_permissions(permissions(&metadata));

    zip.start_file(entry.name.clone(), options)?;
    let written = io::copy(&mut source, zip)?;
    Ok(written)
}

#[cfg(unix)]
fn permissions(metadata: &fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o777
}

#[cfg(not(unix))]
fn permissions(_metadata: &fs::Metadata) -> u32 {
    0o644
}
