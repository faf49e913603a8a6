//! "Copied" confirmation state for the copy buttons.

use std::time::Duration;

pub const COPY_FEEDBACK: Duration = Duration::from_millis(2000);

/// Which copy button a confirmation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    Endpoint,
    Response,
}

/// Tracks whether the "Copied" label is showing.
///
/// Every copy bumps a generation counter; an expiry only clears the label when
/// it carries the latest generation, so a second copy restarts the window.
#[derive(Debug, Clone, Default)]
pub struct CopyFeedback {
    generation: u64,
    copied: bool,
}

impl CopyFeedback {
    /// Marks the content as copied and returns the generation the matching
    /// expiry must present.
    pub fn start(&mut self) -> u64 {
        self.generation += 1;
        self.copied = true;
        self.generation
    }

    pub fn expire(&mut self, generation: u64) {
        if generation == self.generation {
            self.copied = false;
        }
    }

    pub fn is_copied(&self) -> bool {
        self.copied
    }

    pub fn label(&self) -> &'static str {
        if self.copied { "Copied" } else { "Copy" }
    }
}

/// Resolves after the confirmation window, handing back the generation.
pub async fn expire_after(generation: u64) -> u64 {
    tokio::time::sleep(COPY_FEEDBACK).await;
    generation
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_clears_current_generation() {
        let mut feedback = CopyFeedback::default();
        assert_eq!(feedback.label(), "Copy");

        let generation = feedback.start();
        assert!(feedback.is_copied());
        assert_eq!(feedback.label(), "Copied");

        feedback.expire(generation);
        assert!(!feedback.is_copied());
    }

    #[test]
    fn stale_expiry_is_ignored() {
        let mut feedback = CopyFeedback::default();
        let first = feedback.start();
        let second = feedback.start();

        feedback.expire(first);
        assert!(feedback.is_copied());
        feedback.expire(second);
        assert!(!feedback.is_copied());
    }

    #[tokio::test(start_paused = true)]
    async fn expiry_fires_after_two_seconds() {
        let started = tokio::time::Instant::now();
        let generation = expire_after(7).await;
        assert_eq!(generation, 7);
        let elapsed = started.elapsed();
        assert!(elapsed >= COPY_FEEDBACK, "{elapsed:?}");
        assert!(elapsed < COPY_FEEDBACK + Duration::from_millis(10), "{elapsed:?}");
    }
}
