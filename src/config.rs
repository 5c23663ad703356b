use log::Level;

use crate::reveal::Stagger;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Fraction of a target that must be on screen before it reveals.
/// Zero means any part of it.
pub fn reveal_threshold() -> f64 {
    0.0
}

/// Shrinks the viewport bottom a little so sections reveal once they are
/// actually on screen rather than touching the fold.
pub fn reveal_root_margin() -> &'static str {
    "0px 0px -50px 0px"
}

pub fn default_stagger() -> Stagger {
    Stagger::new(0.0, 0.2)
}

/// Scroll offset in px after which the nav switches to its solid style.
pub fn nav_scroll_threshold() -> i32 {
    80
}
