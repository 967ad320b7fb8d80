//! The animation capability: keyframes, easing and the engine trait.

use std::time::{Duration, Instant};

use tracing::trace;

/// Identifies a mountable block (a card) within the current mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    EaseOutQuad,
}

impl Easing {
    pub const fn name(self) -> &'static str {
        match self {
            Self::EaseOutQuad => "easeOutQuad",
        }
    }

    /// Map linear progress in `[0, 1]` to eased progress.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::EaseOutQuad => t * (2.0 - t),
        }
    }
}

/// Visual state of a block at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub opacity: f32,
    /// Downward offset in layout units (ten per terminal row).
    pub translate_y: f32,
    pub scale: f32,
}

impl Transform {
    /// Fully visible, no offset, no scaling.
    pub const IDENTITY: Self = Self {
        opacity: 1.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    pub fn is_identity(&self) -> bool {
        const EPS: f32 = 1e-4;
        (self.opacity - 1.0).abs() < EPS
            && self.translate_y.abs() < EPS
            && (self.scale - 1.0).abs() < EPS
    }
}

/// `(from, to)` ranges for each animated property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframes {
    pub opacity: (f32, f32),
    pub translate_y: (f32, f32),
    pub scale: (f32, f32),
}

impl Keyframes {
    #[must_use]
    pub fn at(&self, progress: f32) -> Transform {
        let lerp = |(from, to): (f32, f32)| (to - from).mul_add(progress, from);
        Transform {
            opacity: lerp(self.opacity),
            translate_y: lerp(self.translate_y),
            scale: lerp(self.scale),
        }
    }
}

/// Fade in, rise 20 units and grow from 98% to full size.
pub const ENTRANCE_KEYFRAMES: Keyframes = Keyframes {
    opacity: (0.0, 1.0),
    translate_y: (20.0, 0.0),
    scale: (0.98, 1.0),
};

pub const ENTRANCE_DURATION: Duration = Duration::from_millis(800);

/// A request handed to the engine.
#[derive(Debug, Clone, Copy)]
pub struct AnimationRequest {
    pub target: BlockId,
    pub keyframes: Keyframes,
    pub duration: Duration,
    pub easing: Easing,
}

impl AnimationRequest {
    pub const fn entrance(target: BlockId) -> Self {
        Self {
            target,
            keyframes: ENTRANCE_KEYFRAMES,
            duration: ENTRANCE_DURATION,
            easing: Easing::EaseOutQuad,
        }
    }
}

/// A running transition, sampled once per frame.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    keyframes: Keyframes,
    started: Instant,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    pub const fn new(request: AnimationRequest, started: Instant) -> Self {
        Self {
            keyframes: request.keyframes,
            started,
            duration: request.duration,
            easing: request.easing,
        }
    }

    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    #[must_use]
    pub fn sample(&self, now: Instant) -> Transform {
        self.keyframes.at(self.easing.apply(self.progress(now)))
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

/// An animation capability that may or may not be present at runtime.
pub trait AnimationEngine: Send + Sync {
    /// Start a transition for `request.target`.
    fn animate(&self, request: AnimationRequest, now: Instant) -> Tween;
}

/// Built-in engine: plain time-based tweening.
#[derive(Debug, Default)]
pub struct TweenEngine;

impl AnimationEngine for TweenEngine {
    fn animate(&self, request: AnimationRequest, now: Instant) -> Tween {
        trace!(
            target = request.target.0,
            easing = request.easing.name(),
            duration_ms = request.duration.as_millis() as u64,
            "animate"
        );
        Tween::new(request, now)
    }
}
