//! One-shot flash messages.
//!
//! A POST handler stores a message under the caller's `flash_session` cookie
//! right before redirecting; the next view that reads it removes it. Messages
//! nobody reads expire after a fixed time to live.

use std::time::Duration;

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use moka::sync::Cache;
use uuid::Uuid;

pub const FLASH_COOKIE: &str = "flash_session";

pub const DEFAULT_TTL: Duration = Duration::from_secs(10 * 60);
const MAX_PENDING: u64 = 10_000;

#[derive(Clone)]
pub struct FlashStore {
    messages: Cache<String, String>,
}

impl FlashStore {
    pub fn new() -> Self { Self::with_ttl(DEFAULT_TTL) }

    pub fn with_ttl(ttl: Duration) -> Self {
        let messages = Cache::builder().max_capacity(MAX_PENDING).time_to_live(ttl).build();
        Self { messages }
    }

    /// Store `message` for this client, issuing a session cookie when the
    /// client has none yet. A second message before a read replaces the first.
    pub fn put(&self, jar: CookieJar, message: impl Into<String>) -> CookieJar {
        let existing = jar
            .get(FLASH_COOKIE)
            .map(|c| c.value().to_string())
            .filter(|v| !v.is_empty());
        let (jar, session) = match existing {
            Some(session) => (jar, session),
            None => {
                let session = Uuid::new_v4().to_string();
                let mut cookie = Cookie::new(FLASH_COOKIE, session.clone());
                cookie.set_path("/");
                cookie.set_http_only(true);
                cookie.set_same_site(SameSite::Lax);
                (jar.add(cookie), session)
            }
        };
        self.messages.insert(session, message.into());
        jar
    }

    /// Remove and return the pending message for this client, if any.
    pub fn take(&self, jar: &CookieJar) -> Option<String> {
        let session = jar.get(FLASH_COOKIE)?.value();
        // `get` skips expired entries
        self.messages.get(session)?;
        self.messages.remove(session)
    }

    pub fn pending(&self) -> usize {
        self.messages.run_pending_tasks();
        self.messages.entry_count() as usize
    }
}

impl Default for FlashStore {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_delivered_exactly_once() {
        let store = FlashStore::new();
        let jar = store.put(CookieJar::new(), "House registered.");
        assert!(jar.get(FLASH_COOKIE).is_some());
        assert_eq!(store.take(&jar).as_deref(), Some("House registered."));
        assert_eq!(store.take(&jar), None);
        assert_eq!(store.pending(), 0);
    }

    #[test]
    fn existing_session_is_reused_and_isolated() {
        let store = FlashStore::new();
        let alice = store.put(CookieJar::new(), "first");
        let session = alice.get(FLASH_COOKIE).map(|c| c.value().to_string());
        let alice = store.put(alice, "second");
        assert_eq!(alice.get(FLASH_COOKIE).map(|c| c.value().to_string()), session);

        let bob = CookieJar::new();
        assert_eq!(store.take(&bob), None);
        assert_eq!(store.take(&alice).as_deref(), Some("second"));
    }

    #[test]
    fn unread_message_expires() {
        let store = FlashStore::with_ttl(Duration::from_millis(50));
        let jar = store.put(CookieJar::new(), "House deleted.");
        for _ in 0..20 {
            store.put(CookieJar::new(), "abandoned");
        }
        std::thread::sleep(Duration::from_millis(200));

        assert_eq!(store.take(&jar), None);
        assert_eq!(store.pending(), 0);
    }
}
