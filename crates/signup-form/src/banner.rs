//! Transient status banners with auto-hide.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::debug;

/// Banner kind, used as the render label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    fn label(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

struct BannerState {
    message: Option<String>,
    generation: u64,
}

/// A message region that shows a message and hides it after a fixed delay.
///
/// Each `show` replaces the content and restarts the hide cycle; a timer
/// armed by an earlier `show` never hides a newer message. The two banner
/// kinds are independent instances with their own timers.
#[derive(Clone)]
pub struct MessageBanner {
    kind: BannerKind,
    delay: Duration,
    state: Arc<RwLock<BannerState>>,
}

impl MessageBanner {
    pub fn new(kind: BannerKind, delay: Duration) -> Self {
        Self {
            kind,
            delay,
            state: Arc::new(RwLock::new(BannerState {
                message: None,
                generation: 0,
            })),
        }
    }

    /// Display a message and arm its auto-hide timer.
    pub async fn show(&self, message: impl Into<String>) {
        let message = message.into();
        println!("[{}] {}", self.kind.label(), message);

        let generation = {
            let mut state = self.state.write().await;
            state.generation += 1;
            state.message = Some(message);
            state.generation
        };

        let state = Arc::clone(&self.state);
        let delay = self.delay;
        let kind = self.kind;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut state = state.write().await;
            if state.generation == generation {
                state.message = None;
                debug!("Hid {} banner", kind.label());
            }
        });
    }

    /// Currently visible message, if any.
    pub async fn message(&self) -> Option<String> {
        self.state.read().await.message.clone()
    }

    pub async fn is_visible(&self) -> bool {
        self.state.read().await.message.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn banner_hides_after_its_delay() {
        let banner = MessageBanner::new(BannerKind::Error, Duration::from_secs(3));
        banner.show("nope").await;
        assert_eq!(banner.message().await.as_deref(), Some("nope"));

        tokio::time::sleep(Duration::from_millis(3100)).await;
        assert!(!banner.is_visible().await);
    }

    #[tokio::test(start_paused = true)]
    async fn new_message_restarts_the_cycle() {
        let banner = MessageBanner::new(BannerKind::Success, Duration::from_secs(5));
        banner.show("first").await;

        tokio::time::sleep(Duration::from_secs(4)).await;
        banner.show("second").await;

        // The first timer fires in this window; the newer message stays up.
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(banner.message().await.as_deref(), Some("second"));

        tokio::time::sleep(Duration::from_secs(4)).await;
        assert!(!banner.is_visible().await);
    }

    #[tokio::test(start_paused = true)]
    async fn banners_time_out_independently() {
        let success = MessageBanner::new(BannerKind::Success, Duration::from_secs(5));
        let error = MessageBanner::new(BannerKind::Error, Duration::from_secs(3));

        success.show("ok").await;
        error.show("nope").await;

        tokio::time::sleep(Duration::from_millis(3100)).await;
        assert!(success.is_visible().await);
        assert!(!error.is_visible().await);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(!success.is_visible().await);
    }

    #[tokio::test(start_paused = true)]
    async fn replacement_updates_content_immediately() {
        let banner = MessageBanner::new(BannerKind::Error, Duration::from_secs(3));
        banner.show("first").await;
        banner.show("second").await;
        assert_eq!(banner.message().await.as_deref(), Some("second"));
    }
}
