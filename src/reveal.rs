//! One-shot reveal state used by every scroll-animated section.
//!
//! The DOM side lives in `components::reveal`; everything here is plain data
//! so it can be exercised without a browser.

use serde::Deserialize;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Visible,
}

impl RevealState {
    pub fn is_visible(self) -> bool {
        self == RevealState::Visible
    }

    pub fn class(self) -> Option<&'static str> {
        match self {
            RevealState::Hidden => None,
            RevealState::Visible => Some("visible"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: config::reveal_threshold(),
            root_margin: config::reveal_root_margin(),
        }
    }
}

/// Latches to `Visible` the first time a sample qualifies and ignores
/// everything after that.
#[derive(Clone, Copy, Debug)]
pub struct RevealLatch {
    state: RevealState,
    threshold: f64,
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            state: RevealState::Hidden,
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Feeds one visibility sample. Returns `true` only for the sample that
    /// flips the latch.
    pub fn observe(&mut self, ratio: f64, intersecting: bool) -> bool {
        if self.state.is_visible() {
            return false;
        }
        if intersecting && ratio >= self.threshold {
            self.state = RevealState::Visible;
            return true;
        }
        false
    }
}

/// Why a wrapper could not be observed.
#[derive(Debug, PartialEq)]
pub enum Fallback<E> {
    Unsupported,
    WatchFailed(E),
}

/// Starts observation when the browser can do it. `watch` is only called
/// when `supported` is true.
pub fn start_observing<G, E>(supported: bool, watch: impl FnOnce() -> Result<G, E>) -> Result<G, Fallback<E>> {
    if !supported {
        return Err(Fallback::Unsupported);
    }
    watch().map_err(Fallback::WatchFailed)
}

/// State to apply right after mount. `None` leaves the wrapper hidden until
/// the observer reports; any fallback shows it immediately.
pub fn initial_state<G, E>(started: &Result<G, Fallback<E>>) -> Option<RevealState> {
    match started {
        Ok(_) => None,
        Err(_) => Some(RevealState::Visible),
    }
}

/// Entrance delays for the children of one revealed section, in seconds.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Stagger {
    pub base: f64,
    pub step: f64,
}

impl Stagger {
    pub const fn new(base: f64, step: f64) -> Self {
        Self { base, step }
    }

    pub fn delay(&self, index: usize) -> f64 {
        self.base + self.step * index as f64
    }

    pub fn css_delay(&self, index: usize) -> String {
        format!("{:.2}s", self.delay(index))
    }
}

impl Default for Stagger {
    fn default() -> Self {
        config::default_stagger()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Motion {
    #[default]
    FadeUp,
    FadeIn,
    SlideLeft,
    SlideRight,
}

impl Motion {
    pub fn class(self) -> &'static str {
        match self {
            Motion::FadeUp => "reveal-up",
            Motion::FadeIn => "reveal-fade",
            Motion::SlideLeft => "reveal-left",
            Motion::SlideRight => "reveal-right",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_browser_shows_content_without_watching() {
        let mut called = false;
        let started = start_observing(false, || {
            called = true;
            Ok::<_, ()>(())
        });
        assert!(!called);
        assert_eq!(started, Err(Fallback::Unsupported));
        assert_eq!(initial_state(&started), Some(RevealState::Visible));
    }

    #[test]
    fn failed_observer_shows_content() {
        let started = start_observing(true, || Err::<(), _>("SyntaxError: rootMargin"));
        assert_eq!(started, Err(Fallback::WatchFailed("SyntaxError: rootMargin")));
        assert_eq!(initial_state(&started), Some(RevealState::Visible));
    }

    #[test]
    fn working_observer_waits_hidden() {
        let started = start_observing(true, || Ok::<_, ()>(7));
        assert_eq!(started, Ok(7));
        assert_eq!(initial_state(&started), None);
    }

    #[test]
    fn latch_starts_hidden() {
        let latch = RevealLatch::new(0.1);
        assert_eq!(latch.state(), RevealState::Hidden);
    }

    #[test]
    fn latch_ignores_samples_below_threshold() {
        let mut latch = RevealLatch::new(0.5);
        assert!(!latch.observe(0.2, true));
        assert!(!latch.observe(0.9, false));
        assert_eq!(latch.state(), RevealState::Hidden);
    }

    #[test]
    fn latch_flips_once_and_stays_visible() {
        let mut latch = RevealLatch::new(0.1);
        assert!(latch.observe(0.3, true));
        assert_eq!(latch.state(), RevealState::Visible);

        // scrolled back out, then in again
        assert!(!latch.observe(0.0, false));
        assert!(!latch.observe(1.0, true));
        assert_eq!(latch.state(), RevealState::Visible);
    }

    #[test]
    fn zero_threshold_reveals_on_edge_contact() {
        let mut latch = RevealLatch::new(0.0);
        assert!(latch.observe(0.0, true));
    }

    #[test]
    fn latches_do_not_share_state() {
        let mut first = RevealLatch::new(0.1);
        let second = RevealLatch::new(0.1);
        first.observe(1.0, true);
        assert_eq!(first.state(), RevealState::Visible);
        assert_eq!(second.state(), RevealState::Hidden);
    }

    #[test]
    fn threshold_is_clamped() {
        let mut latch = RevealLatch::new(4.0);
        assert!(latch.observe(1.0, true));
    }

    #[test]
    fn stagger_is_relative_to_index_within_section() {
        let stagger = Stagger::new(0.3, 0.2);
        assert_eq!(stagger.css_delay(0), "0.30s");
        assert_eq!(stagger.css_delay(1), "0.50s");
        assert_eq!(stagger.css_delay(3), "0.90s");
    }

    #[test]
    fn visible_state_has_class() {
        assert_eq!(RevealState::Hidden.class(), None);
        assert_eq!(RevealState::Visible.class(), Some("visible"));
    }
}
