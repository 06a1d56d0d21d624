//! 临时警告通知（到期自动消失）

use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub raised_at: Instant,
    pub duration: Duration,
    pub closable: bool,
}

impl Notification {
    pub fn warning(
        title: impl Into<String>,
        message: impl Into<String>,
        duration: Duration,
        now: Instant,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            raised_at: now,
            duration,
            closable: true,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.raised_at) >= self.duration
    }

    /// 剩余显示时间
    pub fn remaining(&self, now: Instant) -> Duration {
        self.duration
            .saturating_sub(now.saturating_duration_since(self.raised_at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry() {
        let now = Instant::now();
        let n = Notification::warning("No content", "msg", Duration::from_millis(2000), now);

        assert!(!n.is_expired(now));
        assert!(!n.is_expired(now + Duration::from_millis(1999)));
        assert!(n.is_expired(now + Duration::from_millis(2000)));
        assert_eq!(n.remaining(now + Duration::from_millis(500)), Duration::from_millis(1500));
        assert_eq!(n.remaining(now + Duration::from_secs(5)), Duration::ZERO);
    }
}
