use std::time::Duration;

use tokio::time::Instant;

pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Last-value-wins debouncing for rapid input. Each `push` replaces the
/// pending value and restarts the timer; `settle` resolves once the timer
/// has run out, yielding the latest value exactly once. A burst of pushes
/// therefore results in a single application.
#[derive(Debug)]
pub struct Debounced<T> {
    delay: Duration,
    value: Option<T>,
    deadline: Option<Instant>,
}

impl<T> Debounced<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            value: None,
            deadline: None,
        }
    }

    pub fn push(&mut self, value: T) {
        self.value = Some(value);
        self.deadline = Some(Instant::now() + self.delay);
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Waits out the quiet period and takes the pending value. Returns
    /// `None` immediately when nothing was pushed since the last settle.
    pub async fn settle(&mut self) -> Option<T> {
        let deadline = self.deadline.take()?;
        tokio::time::sleep_until(deadline).await;
        self.value.take()
    }
}

impl<T> Default for Debounced<T> {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::advance;

    #[tokio::test(start_paused = true)]
    async fn rapid_typing_settles_to_the_last_value_once() {
        let mut input: Debounced<&str> = Debounced::default();

        input.push("a");
        advance(Duration::from_millis(100)).await;
        input.push("ab");
        advance(Duration::from_millis(100)).await;
        input.push("abc");

        assert_eq!(input.settle().await, Some("abc"));
        assert_eq!(input.settle().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn each_push_restarts_the_timer() {
        let start = Instant::now();
        let mut input: Debounced<&str> = Debounced::default();

        input.push("a");
        advance(Duration::from_millis(200)).await;
        input.push("ab");

        assert_eq!(input.settle().await, Some("ab"));
        // 200ms of typing plus a full quiet period after the second push.
        assert_eq!(start.elapsed(), Duration::from_millis(500));
    }

    #[tokio::test]
    async fn settle_without_input_is_immediate() {
        let mut input: Debounced<String> = Debounced::default();
        assert!(!input.is_pending());
        assert_eq!(input.settle().await, None);
    }
}
