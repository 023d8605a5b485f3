//! Notice history logging.
//!
//! Every notice the engine emits is appended to `logs/live.jsonl`, one
//! JSON document per line. Periodic army snapshots can be replayed from
//! the same file for the session-review view, and a finished log can be
//! archived as gzip.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use gaia_data::{ArmyStats, Notice};

use crate::error::{IoError, Result};

pub struct HistoryLogger {
    live_file: Option<BufWriter<File>>,
    log_dir: String,
}

impl HistoryLogger {
    pub fn new() -> Result<Self> {
        Self::new_at("logs")
    }

    pub fn new_at(dir: &str) -> Result<Self> {
        if !Path::new(dir).exists() {
            std::fs::create_dir_all(dir)?;
        }
        let file_path = format!("{}/live.jsonl", dir);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file_path)?;
        Ok(Self {
            live_file: Some(BufWriter::new(file)),
            log_dir: dir.to_string(),
        })
    }

    /// A logger that drops everything. Used by tests and headless dry runs.
    #[must_use]
    pub fn new_dummy() -> Self {
        Self {
            live_file: None,
            log_dir: String::new(),
        }
    }

    pub fn log_notice(&mut self, notice: &Notice) -> Result<()> {
        if let Some(ref mut file) = self.live_file {
            let json = serde_json::to_string(notice)?;
            writeln!(file, "{}", json)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Replays all army snapshots recorded this session, oldest first.
    pub fn get_snapshots(&self) -> Result<Vec<(u64, ArmyStats)>> {
        let file_path = format!("{}/live.jsonl", self.log_dir);
        let file = match File::open(file_path) {
            Ok(f) => f,
            Err(_) => return Ok(vec![]),
        };
        let reader = BufReader::new(file);
        let mut snapshots = Vec::new();
        for line in reader.lines().map_while(std::result::Result::ok) {
            if let Ok(Notice::Snapshot { tick, stats, .. }) = serde_json::from_str::<Notice>(&line)
            {
                snapshots.push((tick, stats));
            }
        }
        Ok(snapshots)
    }

    /// Compresses the live log into `<dir>/archive-<stamp>.jsonl.gz` and
    /// truncates the live file.
    pub fn archive(&mut self, stamp: &str) -> Result<String> {
        if self.live_file.is_none() {
            return Err(IoError::validation("dummy logger has nothing to archive"));
        }
        let live_path = format!("{}/live.jsonl", self.log_dir);
        let archive_path = format!("{}/archive-{}.jsonl.gz", self.log_dir, stamp);

        let mut contents = Vec::new();
        File::open(&live_path)?.read_to_end(&mut contents)?;

        let out = File::create(&archive_path)?;
        let mut encoder = GzEncoder::new(out, Compression::default());
        encoder.write_all(&contents)?;
        encoder
            .finish()
            .map_err(|e| IoError::Compression(e.to_string()))?;

        // Re-open truncated so subsequent notices start a fresh log.
        let file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&live_path)?;
        self.live_file = Some(BufWriter::new(file));

        Ok(archive_path)
    }

    /// Reads an archive produced by [`HistoryLogger::archive`].
    pub fn read_archive(path: &str) -> Result<Vec<Notice>> {
        let file = File::open(path)?;
        let mut decoder = GzDecoder::new(file);
        let mut decoded = String::new();
        decoder
            .read_to_string(&mut decoded)
            .map_err(|e| IoError::Compression(e.to_string()))?;
        let mut notices = Vec::new();
        for line in decoded.lines() {
            if line.trim().is_empty() {
                continue;
            }
            notices.push(serde_json::from_str::<Notice>(line)?);
        }
        Ok(notices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(tag: &str) -> String {
        let dir = std::env::temp_dir().join(format!("gaia-history-{}-{}", tag, uuid::Uuid::new_v4()));
        dir.to_string_lossy().into_owned()
    }

    fn snapshot(tick: u64) -> Notice {
        Notice::Snapshot {
            tick,
            stats: ArmyStats::default(),
            timestamp: "2026-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn snapshots_replay_in_order() {
        let dir = temp_dir("replay");
        let mut logger = HistoryLogger::new_at(&dir).unwrap();
        logger.log_notice(&snapshot(1)).unwrap();
        logger
            .log_notice(&Notice::Broadcast {
                message: "noise".to_string(),
                tick: 2,
                timestamp: "2026-01-01T00:00:01Z".to_string(),
            })
            .unwrap();
        logger.log_notice(&snapshot(3)).unwrap();

        let snaps = logger.get_snapshots().unwrap();
        assert_eq!(snaps.iter().map(|(t, _)| *t).collect::<Vec<_>>(), vec![1, 3]);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn archive_round_trips_and_truncates() {
        let dir = temp_dir("archive");
        let mut logger = HistoryLogger::new_at(&dir).unwrap();
        logger.log_notice(&snapshot(1)).unwrap();
        logger.log_notice(&snapshot(2)).unwrap();

        let path = logger.archive("t1").unwrap();
        let notices = HistoryLogger::read_archive(&path).unwrap();
        assert_eq!(notices.len(), 2);

        // Live log restarted empty.
        assert!(logger.get_snapshots().unwrap().is_empty());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn dummy_logger_accepts_and_drops() {
        let mut logger = HistoryLogger::new_dummy();
        logger.log_notice(&snapshot(1)).unwrap();
        assert!(logger.archive("t").is_err());
    }
}
