//! Per-block entrance state machine.
//!
//! ```text
//! Pending ──engine present──▶ Animating ──tween done──▶ Settled
//!    └────engine absent────▶ VisibleImmediate ──next frame──▶ Settled
//! ```
//!
//! Chrome blocks skip all of this and start out `Settled`.

use std::time::Instant;

use tracing::debug;

use super::engine::{AnimationEngine, AnimationRequest, BlockId, Transform, Tween};

#[derive(Debug, Clone, Copy)]
pub enum Phase {
    Pending,
    Animating(Tween),
    VisibleImmediate,
    Settled,
}

impl Phase {
    pub const fn is_settled(&self) -> bool {
        matches!(self, Self::Settled)
    }
}

/// Whether a block takes part in the entrance transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entrance {
    Animated,
    /// Chrome: visible from the first frame.
    Static,
}

/// Tracks the entrance phase of every block in the current mount.
///
/// A mount is identified by a key; mounting with a different key discards
/// all block state and replays the entrance.
#[derive(Debug)]
pub struct EntranceAnimator<K> {
    key: Option<K>,
    blocks: Vec<Phase>,
}

impl<K> Default for EntranceAnimator<K> {
    fn default() -> Self {
        Self {
            key: None,
            blocks: Vec::new(),
        }
    }
}

impl<K: PartialEq + Copy + std::fmt::Debug> EntranceAnimator<K> {
    /// Mount a set of blocks under `key`. Returns `true` on a fresh mount.
    ///
    /// Mounting again with the same key keeps the running state.
    pub fn mount(&mut self, key: K, blocks: impl IntoIterator<Item = Entrance>) -> bool {
        if self.key == Some(key) {
            return false;
        }
        self.key = Some(key);
        self.blocks = blocks
            .into_iter()
            .map(|entrance| match entrance {
                Entrance::Animated => Phase::Pending,
                Entrance::Static => Phase::Settled,
            })
            .collect();
        debug!(?key, blocks = self.blocks.len(), "mounted");
        true
    }

    /// Start every pending block. The engine is checked once here; without
    /// it blocks become visible immediately.
    pub fn start(&mut self, engine: Option<&dyn AnimationEngine>, now: Instant) {
        for (idx, phase) in self.blocks.iter_mut().enumerate() {
            if !matches!(phase, Phase::Pending) {
                continue;
            }
            *phase = engine.map_or(Phase::VisibleImmediate, |engine| {
                Phase::Animating(engine.animate(AnimationRequest::entrance(BlockId(idx)), now))
            });
        }
    }

    /// Move finished blocks to `Settled`.
    pub fn advance(&mut self, now: Instant) {
        for phase in &mut self.blocks {
            match phase {
                Phase::Animating(tween) if tween.is_finished(now) => *phase = Phase::Settled,
                Phase::VisibleImmediate => *phase = Phase::Settled,
                _ => {}
            }
        }
    }

    pub fn phase(&self, block: BlockId) -> Option<Phase> {
        self.blocks.get(block.0).copied()
    }

    /// Transform to draw `block` with. Unknown blocks are drawn as-is.
    pub fn transform(&self, block: BlockId, now: Instant) -> Transform {
        match self.phase(block) {
            Some(Phase::Pending) => Transform::HIDDEN,
            Some(Phase::Animating(tween)) => tween.sample(now),
            Some(Phase::VisibleImmediate | Phase::Settled) | None => Transform::IDENTITY,
        }
    }

    /// True once nothing is left to animate.
    pub fn is_idle(&self) -> bool {
        self.blocks.iter().all(Phase::is_settled)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::atomic::{AtomicUsize, Ordering},
        time::Duration,
    };

    use super::*;
    use crate::animation::engine::{TweenEngine, ENTRANCE_DURATION};

    #[derive(Default)]
    struct CountingEngine {
        calls: AtomicUsize,
    }

    impl AnimationEngine for CountingEngine {
        fn animate(&self, request: AnimationRequest, now: Instant) -> Tween {
            self.calls.fetch_add(1, Ordering::SeqCst);
            TweenEngine.animate(request, now)
        }
    }

    fn mount_three(animator: &mut EntranceAnimator<u8>, key: u8) -> bool {
        animator.mount(
            key,
            [Entrance::Static, Entrance::Animated, Entrance::Animated],
        )
    }

    #[test]
    fn fresh_blocks_are_pending_and_hidden_chrome_is_settled() {
        let mut animator = EntranceAnimator::default();
        assert!(mount_three(&mut animator, 1));
        let now = Instant::now();

        assert!(animator.phase(BlockId(0)).is_some_and(|p| p.is_settled()));
        assert!(matches!(animator.phase(BlockId(1)), Some(Phase::Pending)));
        assert!(animator.transform(BlockId(0), now).is_identity());
        assert!(animator.transform(BlockId(1), now).opacity.abs() < f32::EPSILON);
    }

    #[test]
    fn missing_engine_settles_every_block_without_animating() {
        let mut animator = EntranceAnimator::default();
        mount_three(&mut animator, 1);
        let now = Instant::now();

        animator.start(None, now);
        for idx in 0..3 {
            assert!(animator.transform(BlockId(idx), now).is_identity());
        }

        animator.advance(now);
        assert!(animator.is_idle());
        for idx in 0..3 {
            assert!(animator.phase(BlockId(idx)).is_some_and(|p| p.is_settled()));
        }
    }

    #[test]
    fn engine_animates_only_animated_blocks_then_settles() {
        let engine = CountingEngine::default();
        let mut animator = EntranceAnimator::default();
        mount_three(&mut animator, 1);
        let now = Instant::now();

        animator.start(Some(&engine), now);
        assert_eq!(engine.calls.load(Ordering::SeqCst), 2);
        assert!(matches!(animator.phase(BlockId(1)), Some(Phase::Animating(_))));

        let halfway = now + Duration::from_millis(400);
        animator.advance(halfway);
        let mid = animator.transform(BlockId(1), halfway);
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
        assert!(!animator.is_idle());

        let done = now + ENTRANCE_DURATION;
        animator.advance(done);
        assert!(animator.is_idle());
        assert!(animator.transform(BlockId(2), done).is_identity());
    }

    #[test]
    fn start_is_one_shot_per_mount() {
        let engine = CountingEngine::default();
        let mut animator = EntranceAnimator::default();
        mount_three(&mut animator, 1);
        let now = Instant::now();

        animator.start(Some(&engine), now);
        animator.start(Some(&engine), now);
        assert_eq!(engine.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn same_key_keeps_state_and_new_key_replays() {
        let mut animator = EntranceAnimator::default();
        mount_three(&mut animator, 1);
        let now = Instant::now();
        animator.start(None, now);
        animator.advance(now);
        assert!(animator.is_idle());

        assert!(!mount_three(&mut animator, 1));
        assert!(animator.is_idle());

        assert!(mount_three(&mut animator, 2));
        assert!(!animator.is_idle());
        assert!(matches!(animator.phase(BlockId(2)), Some(Phase::Pending)));
    }

    #[test]
    fn unknown_block_is_drawn_as_is() {
        let animator: EntranceAnimator<u8> = EntranceAnimator::default();
        assert!(animator.transform(BlockId(9), Instant::now()).is_identity());
        assert!(animator.phase(BlockId(9)).is_none());
    }
}
