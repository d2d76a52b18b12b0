use chrono::{DateTime, Duration, Utc};

use crate::models::banner::{Banner, BannerKind};

/// Keeps the banners currently on the page and when each one goes away.
///
/// A banner lives exactly `ttl`. There is no way to dismiss one early.
pub struct BannerService {
    ttl: Duration,
    active: Vec<Banner>,
}

impl BannerService {
    pub fn new(ttl_secs: u64) -> Self {
        let secs = i64::try_from(ttl_secs).unwrap_or(i64::MAX);
        Self {
            ttl: Duration::try_seconds(secs).unwrap_or(Duration::MAX),
            active: Vec::new(),
        }
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Create a banner that expires `ttl` after `now` and track it.
    pub fn push(&mut self, kind: BannerKind, text: impl Into<String>, now: DateTime<Utc>) -> Banner {
        let expires_at = now.checked_add_signed(self.ttl).unwrap_or(DateTime::<Utc>::MAX_UTC);
        let banner = Banner::new(kind, text, expires_at);
        self.active.push(banner.clone());
        banner
    }

    /// Drop and return every banner whose time is up, oldest first.
    pub fn expire(&mut self, now: DateTime<Utc>) -> Vec<Banner> {
        let (expired, kept): (Vec<Banner>, Vec<Banner>) = std::mem::take(&mut self.active)
            .into_iter()
            .partition(|b| b.is_expired(now));
        self.active = kept;
        expired
    }

    #[must_use]
    pub fn active(&self) -> &[Banner] {
        &self.active
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
