/// Fraction of a revealed section that must be inside the viewport before
/// its entrance animation plays.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Default pointer-parallax sensitivity. Offsets span +-sensitivity/2
/// across the viewport.
pub const PARALLAX_SENSITIVITY: f64 = 20.0;

/// The hero rig tilts harder than the default.
pub const HERO_PARALLAX_SENSITIVITY: f64 = 30.0;

/// Vertical scroll offset (px) past which the nav switches to its solid
/// treatment. Strictly greater-than.
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 20.0;
