use anyhow::{Context, Result};
use brotli::enc::BrotliEncoderParams;
use brotli::{CompressorWriter, Decompressor};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::market::{DateWindow, MarketDataError, MarketDataSource, PricePoint, PriceSeries, SeriesSource};

/// Current snapshot layout version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// On-disk layout of a price snapshot.
#[derive(Serialize, Deserialize)]
struct SnapshotFile {
    version: u32,
    ticker: String,
    window: DateWindow,
    /// Where the prices originally came from.
    origin: SeriesSource,
    points: Vec<PricePoint>,
}

fn is_compressed(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "br")
}

/// Writes `series` as a JSON snapshot.
///
/// Brotli compression is enabled when the path ends with `.br`
/// (e.g. `unh.json.br`).
pub fn write_snapshot(path: impl AsRef<Path>, series: &PriceSeries) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;

    let mut writer: Box<dyn Write> = if is_compressed(path) {
        let params = BrotliEncoderParams {
            quality: 6,
            lgwin: 22,
            ..Default::default()
        };
        Box::new(CompressorWriter::with_params(BufWriter::new(file), 4096, &params))
    } else {
        Box::new(BufWriter::new(file))
    };

    let snapshot = SnapshotFile {
        version: SNAPSHOT_VERSION,
        ticker: series.ticker.clone(),
        window: series.window,
        origin: series.source.clone(),
        points: series.points().to_vec(),
    };

    serde_json::to_writer_pretty(&mut writer, &snapshot)
        .with_context(|| format!("Failed to serialize snapshot: {}", path.display()))?;
    writer.flush()?;

    tracing::info!(path = %path.display(), points = series.len(), "snapshot written");
    Ok(())
}

/// Reads a snapshot written by [`write_snapshot`].
///
/// The returned series is tagged with [`SeriesSource::Snapshot`].
pub fn read_snapshot(path: impl AsRef<Path>) -> Result<PriceSeries, MarketDataError> {
    let path = path.as_ref();
    let file = File::open(path)?;

    let mut reader: Box<dyn Read> = if is_compressed(path) {
        Box::new(Decompressor::new(file, 4096))
    } else {
        Box::new(BufReader::new(file))
    };

    let mut body = String::new();
    reader.read_to_string(&mut body)?;
    let snapshot: SnapshotFile = serde_json::from_str(&body)?;

    if snapshot.version != SNAPSHOT_VERSION {
        tracing::warn!(
            found = snapshot.version,
            expected = SNAPSHOT_VERSION,
            "snapshot version mismatch, reading anyway"
        );
    }

    PriceSeries::new(
        snapshot.ticker,
        snapshot.window,
        SeriesSource::Snapshot {
            path: path.display().to_string(),
        },
        snapshot.points,
    )
}

/// Serves a previously saved snapshot file.
///
/// The snapshot's own window is used as stored; the requested window only
/// matters to live sources.
pub struct SnapshotSource {
    path: PathBuf,
}

impl SnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MarketDataSource for SnapshotSource {
    fn fetch(&self, ticker: &str, _window: DateWindow) -> Result<PriceSeries, MarketDataError> {
        let series = read_snapshot(&self.path)?;
        if !series.ticker.eq_ignore_ascii_case(ticker) {
            tracing::warn!(wanted = ticker, found = %series.ticker, "snapshot is for a different ticker");
        }
        Ok(series)
    }

    fn describe(&self) -> String {
        format!("snapshot {}", self.path.display())
    }
}
