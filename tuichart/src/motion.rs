use std::time::Duration;

use tuidom::{Easing, TransitionConfig, Transitions};

/// Timing shared by every animated chart property, so bars in different
/// series and chart types move in step.
pub const DEFAULT_TRANSITION: TransitionConfig = TransitionConfig::new(
    Duration::from_millis(500),
    Easing::CubicBezier(0.48, 0.15, 0.25, 0.96),
);

/// Width and fill transitions using [`DEFAULT_TRANSITION`].
pub fn default_transitions() -> Transitions {
    Transitions::new()
        .width(DEFAULT_TRANSITION)
        .background(DEFAULT_TRANSITION)
}
