//! Transient notification slots
//!
//! One success slot and one error slot per page. Pushing a new message of a
//! kind replaces the previous one and restarts its lifetime; the two kinds
//! coexist. Each notice self-clears after a fixed duration through a
//! sequence-checked timer, so a replaced message cancels the old timer's
//! effect.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tracing::debug;

/// Notification kind, one visible slot each
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A visible notification
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    expires_at: Instant,
    seq: u64,
}

impl Notice {
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// The two notification slots of a page
#[derive(Debug)]
pub struct Notices {
    ttl: Duration,
    next_seq: u64,
    success: Option<Notice>,
    error: Option<Notice>,
}

impl Notices {
    /// Create empty slots with the configured notification lifetime
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            next_seq: 0,
            success: None,
            error: None,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Set the slot for `kind`, replacing any previous message
    ///
    /// Returns the sequence number identifying this notice for its
    /// self-dismiss timer.
    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        self.next_seq += 1;
        let notice = Notice {
            kind,
            message: message.into(),
            expires_at: Instant::now() + self.ttl,
            seq: self.next_seq,
        };
        *self.slot_mut(kind) = Some(notice);
        self.next_seq
    }

    /// The currently visible notice of a kind, if it has not expired
    pub fn current(&self, kind: NoticeKind) -> Option<&Notice> {
        let now = Instant::now();
        self.slot(kind)
            .as_ref()
            .filter(|notice| !notice.is_expired_at(now))
    }

    /// Dismiss a slot immediately
    pub fn dismiss(&mut self, kind: NoticeKind) {
        *self.slot_mut(kind) = None;
    }

    /// Timer callback: clear the slot only if it still holds the notice the
    /// timer was armed for
    pub fn expire(&mut self, kind: NoticeKind, seq: u64) -> bool {
        let slot = self.slot_mut(kind);
        match slot {
            Some(notice) if notice.seq == seq => {
                *slot = None;
                true
            }
            _ => {
                debug!("Notification timer fired for a replaced message");
                false
            }
        }
    }

    fn slot(&self, kind: NoticeKind) -> &Option<Notice> {
        match kind {
            NoticeKind::Success => &self.success,
            NoticeKind::Error => &self.error,
        }
    }

    fn slot_mut(&mut self, kind: NoticeKind) -> &mut Option<Notice> {
        match kind {
            NoticeKind::Success => &mut self.success,
            NoticeKind::Error => &mut self.error,
        }
    }
}

/// Arm the self-dismiss timer for a pushed notice
pub fn spawn_auto_dismiss(notices: Arc<Mutex<Notices>>, kind: NoticeKind, seq: u64) {
    let ttl = notices
        .lock()
        .map(|guard| guard.ttl())
        .unwrap_or(Duration::from_millis(5000));

    tokio::spawn(async move {
        tokio::time::sleep(ttl).await;
        if let Ok(mut guard) = notices.lock() {
            guard.expire(kind, seq);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notices() -> Notices {
        Notices::new(Duration::from_millis(5000))
    }

    #[test]
    fn test_same_kind_replaces_instead_of_stacking() {
        let mut n = notices();
        n.push(NoticeKind::Success, "Tersimpan");
        n.push(NoticeKind::Success, "Terhapus");

        assert_eq!(n.current(NoticeKind::Success).unwrap().message, "Terhapus");
    }

    #[test]
    fn test_kinds_coexist() {
        let mut n = notices();
        n.push(NoticeKind::Success, "Berhasil");
        n.push(NoticeKind::Error, "Gagal");

        assert!(n.current(NoticeKind::Success).is_some());
        assert!(n.current(NoticeKind::Error).is_some());
    }

    #[test]
    fn test_expired_notice_is_invisible() {
        let mut n = Notices::new(Duration::ZERO);
        n.push(NoticeKind::Error, "Gagal");
        assert!(n.current(NoticeKind::Error).is_none());
    }

    #[test]
    fn test_stale_timer_does_not_clear_replacement() {
        let mut n = notices();
        let first = n.push(NoticeKind::Success, "Pertama");
        let second = n.push(NoticeKind::Success, "Kedua");

        assert!(!n.expire(NoticeKind::Success, first));
        assert_eq!(n.current(NoticeKind::Success).unwrap().message, "Kedua");

        assert!(n.expire(NoticeKind::Success, second));
        assert!(n.current(NoticeKind::Success).is_none());
    }

    #[test]
    fn test_dismiss_clears_immediately() {
        let mut n = notices();
        n.push(NoticeKind::Error, "Gagal");
        n.dismiss(NoticeKind::Error);
        assert!(n.current(NoticeKind::Error).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_dismiss_after_ttl() {
        let shared = Arc::new(Mutex::new(notices()));
        let seq = shared
            .lock()
            .unwrap()
            .push(NoticeKind::Success, "Tersimpan");

        spawn_auto_dismiss(Arc::clone(&shared), NoticeKind::Success, seq);

        tokio::time::sleep(Duration::from_millis(5100)).await;
        tokio::task::yield_now().await;

        assert!(shared.lock().unwrap().slot(NoticeKind::Success).is_none());
    }
}
