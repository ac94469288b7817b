//! Streaming of a response body to disk.

use crate::error::{Error, Result};
use crate::progress::ProgressDisplay;

use futures::{pin_mut, Stream, StreamExt};
use std::path::Path;
use tokio::{
    fs::{File, OpenOptions},
    io::AsyncWriteExt,
};
use tracing::debug;

/// Drain `stream` into the file at `path`, writing at most `chunk_size` bytes
/// at a time, and return the number of bytes written.
///
/// The file is truncated first and flushed before returning, on failure too,
/// so whatever was written is on disk once this returns. Missing parent
/// directories are not created.
pub async fn write_stream<S, B, E>(
    stream: S,
    path: &Path,
    chunk_size: usize,
    progress: &ProgressDisplay,
) -> Result<u64>
where
    S: Stream<Item = std::result::Result<B, E>>,
    B: AsRef<[u8]>,
    Error: From<E>,
{
    debug!("Creating destination file {:?}", path);
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .await?;

    let drained = drain(&mut file, stream, chunk_size.max(1), progress).await;
    let flushed = file.flush().await;
    drop(file);

    let written = drained?;
    flushed?;
    debug!("Wrote {} bytes to {:?}", written, path);
    Ok(written)
}

async fn drain<S, B, E>(
    file: &mut File,
    stream: S,
    chunk_size: usize,
    progress: &ProgressDisplay,
) -> Result<u64>
where
    S: Stream<Item = std::result::Result<B, E>>,
    B: AsRef<[u8]>,
    Error: From<E>,
{
    pin_mut!(stream);
    let mut written: u64 = 0;
    while let Some(item) = stream.next().await {
        let item = item?;
        for chunk in item.as_ref().chunks(chunk_size) {
            file.write_all(chunk).await?;
            written += chunk.len() as u64;
            progress.inc(chunk.len() as u64);
        }
    }
    Ok(written)
}
