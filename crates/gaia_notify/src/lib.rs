//! Transient notification delivery.
//!
//! Panels emit notices faster than the render loop consumes them; the hub
//! decouples the two. Producers publish through an unbounded channel, a
//! background task applies an admission filter and buffers the survivors
//! (bounded, oldest dropped), and the render loop drains the buffer once
//! per frame.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use gaia_data::{Notice, Severity};
use tokio::sync::mpsc;

/// Decides which notices reach the user.
#[async_trait]
pub trait NoticeFilter: Send + Sync {
    async fn admit(&self, notice: &Notice) -> bool;
}

/// Admits everything.
pub struct AdmitAll;

#[async_trait]
impl NoticeFilter for AdmitAll {
    async fn admit(&self, _notice: &Notice) -> bool {
        true
    }
}

/// Admits notices at or above a severity floor.
pub struct SeverityFloor {
    pub min: Severity,
}

fn severity_rank(s: Severity) -> u8 {
    match s {
        Severity::Info => 0,
        Severity::Success => 1,
        Severity::Warning => 2,
        Severity::Alert => 3,
    }
}

#[async_trait]
impl NoticeFilter for SeverityFloor {
    async fn admit(&self, notice: &Notice) -> bool {
        severity_rank(notice.severity()) >= severity_rank(self.min)
    }
}

/// Cheap cloneable handle for publishing from other tasks.
#[derive(Clone)]
pub struct NoticePublisher {
    tx: mpsc::UnboundedSender<Notice>,
}

impl NoticePublisher {
    pub fn publish(&self, notice: Notice) {
        let _ = self.tx.send(notice);
    }
}

pub struct NotificationHub {
    pub notices: Arc<Mutex<Vec<Notice>>>,
    pub max_history: usize,
    tx: mpsc::UnboundedSender<Notice>,
}

impl Default for NotificationHub {
    fn default() -> Self {
        Self::new(Box::new(AdmitAll))
    }
}

impl NotificationHub {
    pub fn new(filter: Box<dyn NoticeFilter>) -> Self {
        let notices = Arc::new(Mutex::new(Vec::new()));
        let (tx, mut rx) = mpsc::unbounded_channel::<Notice>();

        let notices_clone = Arc::clone(&notices);
        let max_history = 100;

        tokio::spawn(async move {
            while let Some(notice) = rx.recv().await {
                if !filter.admit(&notice).await {
                    continue;
                }
                if let Ok(mut list) = notices_clone.lock() {
                    if list.len() >= max_history {
                        list.remove(0);
                    }
                    list.push(notice);
                }
            }
        });

        Self {
            notices,
            max_history,
            tx,
        }
    }

    /// Queues a notice for delivery. Never blocks.
    pub fn publish(&self, notice: Notice) {
        let _ = self.tx.send(notice);
    }

    /// Handle for publishing from background tasks.
    #[must_use]
    pub fn publisher(&self) -> NoticePublisher {
        NoticePublisher {
            tx: self.tx.clone(),
        }
    }

    /// Drains everything delivered since the last call.
    pub fn consume(&self) -> Vec<Notice> {
        if let Ok(mut list) = self.notices.lock() {
            std::mem::take(&mut *list)
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn broadcast(tick: u64) -> Notice {
        Notice::Broadcast {
            message: format!("msg {tick}"),
            tick,
            timestamp: "2026-01-01T00:00:00Z".to_string(),
        }
    }

    async fn drain_when_nonempty(hub: &NotificationHub) -> Vec<Notice> {
        for _ in 0..1000 {
            let drained = hub.consume();
            if !drained.is_empty() {
                return drained;
            }
            tokio::task::yield_now().await;
        }
        Vec::new()
    }

    #[tokio::test]
    async fn publish_then_consume() {
        let hub = NotificationHub::default();
        hub.publish(broadcast(1));
        let drained = drain_when_nonempty(&hub).await;
        assert_eq!(drained.len(), 1);
        // Second drain yields nothing until more is published.
        assert!(hub.consume().is_empty());
    }

    #[tokio::test]
    async fn severity_floor_mutes_info() {
        let hub = NotificationHub::new(Box::new(SeverityFloor {
            min: Severity::Success,
        }));
        // Broadcast is Info-level and must be filtered out.
        hub.publish(broadcast(1));
        hub.publish(Notice::ThreatsResolved {
            count: 3,
            tick: 2,
            timestamp: "2026-01-01T00:00:00Z".to_string(),
        });

        let drained = drain_when_nonempty(&hub).await;
        assert_eq!(drained.len(), 1);
        assert!(matches!(drained[0], Notice::ThreatsResolved { .. }));
    }

    #[tokio::test]
    async fn history_is_bounded() {
        let hub = NotificationHub::default();
        for tick in 0..300 {
            hub.publish(broadcast(tick));
        }
        // Let the hub task drain the whole channel before reading.
        for _ in 0..1000 {
            tokio::task::yield_now().await;
        }
        let drained = hub.consume();
        assert!(!drained.is_empty());
        assert!(drained.len() <= hub.max_history);
        // Oldest entries were dropped to hold the cap.
        assert!(matches!(&drained[0], Notice::Broadcast { tick, .. } if *tick >= 200));
    }
}
