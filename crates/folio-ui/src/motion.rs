//! Animation capability selected once at startup.

use leptos::prelude::*;

/// How much motion the UI applies.
///
/// Selected from the `prefers-reduced-motion` media query when the app
/// mounts and provided via context. Components ask this type for their
/// animation classes; the reduced variant is a static passthrough, so
/// there are no scattered animation conditionals in the view code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionPreference {
    /// Entrance, hover, and marquee animations enabled.
    #[default]
    Animated,

    /// Static passthrough: everything renders in place, nothing moves.
    Reduced,
}

impl MotionPreference {
    /// The preference provided by the application, or the default.
    pub fn from_context() -> Self {
        use_context::<MotionPreference>().unwrap_or_default()
    }

    /// Class for elements that rise and fade in on entry.
    pub fn entrance_class(self) -> &'static str {
        match self {
            Self::Animated => "motion-rise",
            Self::Reduced => "",
        }
    }

    /// Entrance class with a staggered delay.
    pub fn entrance_delayed_class(self) -> &'static str {
        match self {
            Self::Animated => "motion-rise motion-delay",
            Self::Reduced => "",
        }
    }

    /// Class for cards that lift slightly on hover.
    pub fn hover_lift_class(self) -> &'static str {
        match self {
            Self::Animated => "motion-lift",
            Self::Reduced => "",
        }
    }

    /// Class for the scrolling skill marquee.
    pub fn marquee_class(self) -> &'static str {
        match self {
            Self::Animated => "animate-marquee",
            Self::Reduced => "",
        }
    }

    /// Class for the slow-bouncing scroll hint.
    pub fn bounce_class(self) -> &'static str {
        match self {
            Self::Animated => "animate-bounce-slow",
            Self::Reduced => "",
        }
    }
}
