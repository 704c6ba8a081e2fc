use crate::{
    backend::utils::config::ConfirmConfigCache,
    common::checkout::{SessionId, SessionStatus},
};
use moka::sync::Cache;
use std::time::Duration;

/// Remembers the status of checkout sessions which are complete or expired, so that reloading the
/// confirmation page doesn't hit the payment provider again. Open sessions are never cached
/// because they may still be paid.
#[derive(Clone)]
pub struct SessionStatusCache(Cache<SessionId, SessionStatus>);

impl SessionStatusCache {
    pub fn new(config: &ConfirmConfigCache) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_capacity)
            .time_to_live(Duration::from_secs(config.time_to_live_secs))
            .build();
        Self(cache)
    }

    pub fn get(&self, session_id: &SessionId) -> Option<SessionStatus> {
        self.0.get(session_id)
    }

    pub fn insert(&self, session_id: &SessionId, status: &SessionStatus) {
        if status.is_final() {
            self.0.insert(session_id.clone(), status.clone());
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cache() -> SessionStatusCache {
        SessionStatusCache::new(&ConfirmConfigCache::default())
    }

    #[test]
    fn test_final_status_is_cached() {
        let cache = cache();
        let complete = SessionId::new("cs_complete");
        let expired = SessionId::new("cs_expired");
        cache.insert(&complete, &SessionStatus::new("complete"));
        cache.insert(&expired, &SessionStatus::new("expired"));
        assert_eq!(Some(SessionStatus::new("complete")), cache.get(&complete));
        assert_eq!(Some(SessionStatus::new("expired")), cache.get(&expired));
    }

    #[test]
    fn test_open_status_is_not_cached() {
        let cache = cache();
        let open = SessionId::new("cs_open");
        cache.insert(&open, &SessionStatus::new("open"));
        assert_eq!(None, cache.get(&open));
    }
}
