//! Entrance animations for page sections.
//!
//! Every descriptor is sampled against the time since the page opened, so
//! the renderer never has to keep per-element timers.

use std::collections::HashMap;

use raylib::ease;
use raylib::prelude::Vector2;

use crate::carousel::SlideDirection;
use crate::constants::{CARD_SLIDE_DISTANCE, HOVER_DURATION, STAGGER_STEP, TITLE_LETTER_STEP};
use crate::layout::HoverTarget;

/// How an element looks at a given instant.
#[derive(Debug, Clone, Copy)]
pub struct Pose {
    pub opacity: f32,
    pub offset: Vector2,
    pub scale: f32,
}

/// Starting pose that eases to full opacity, no offset and unit scale.
#[derive(Debug, Clone, Copy)]
pub struct Entrance {
    pub delay: f32,
    pub duration: f32,
    pub from_offset: Vector2,
    pub from_opacity: f32,
    pub from_scale: f32,
}

impl Entrance {
    pub fn header_drop() -> Self {
        Self::slide(0.6, Vector2::new(0.0, -50.0))
    }

    pub fn fade_in_up() -> Self {
        Self::slide(0.8, Vector2::new(0.0, 50.0))
    }

    pub fn fade_in_left() -> Self {
        Self::slide(0.8, Vector2::new(-50.0, 0.0))
    }

    pub fn scale_in() -> Self {
        Self {
            delay: 0.0,
            duration: 0.6,
            from_offset: Vector2::new(0.0, 0.0),
            from_opacity: 0.0,
            from_scale: 0.9,
        }
    }

    pub fn fade_in(duration: f32) -> Self {
        Self::slide(duration, Vector2::new(0.0, 0.0))
    }

    fn slide(duration: f32, from_offset: Vector2) -> Self {
        Self {
            delay: 0.0,
            duration,
            from_offset,
            from_opacity: 0.0,
            from_scale: 1.0,
        }
    }

    pub fn delayed(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    /// Delay for the `index`-th child of a staggered group.
    pub fn staggered(self, index: usize) -> Self {
        let delay = self.delay + STAGGER_STEP * index as f32;
        self.delayed(delay)
    }

    /// Eased progress in `[0, 1]`.
    pub fn progress(&self, elapsed: f32) -> f32 {
        let t = elapsed - self.delay;
        if t <= 0.0 {
            return 0.0;
        }
        if self.duration <= 0.0 || t >= self.duration {
            return 1.0;
        }
        ease::cubic_out(t, 0.0, 1.0, self.duration)
    }

    pub fn sample(&self, elapsed: f32) -> Pose {
        let p = self.progress(elapsed);
        Pose {
            opacity: lerp(self.from_opacity, 1.0, p),
            offset: Vector2::new(
                lerp(self.from_offset.x, 0.0, p),
                lerp(self.from_offset.y, 0.0, p),
            ),
            scale: lerp(self.from_scale, 1.0, p),
        }
    }

    pub fn end_time(&self) -> f32 {
        self.delay + self.duration
    }
}

/// Scale and lift an element reaches while the pointer rests on it.
#[derive(Debug, Clone, Copy)]
pub struct Hover {
    pub scale: f32,
    pub lift: f32,
}

impl Hover {
    pub fn for_target(target: HoverTarget) -> Self {
        match target {
            HoverTarget::Logo => Self { scale: 1.05, lift: 0.0 },
            HoverTarget::ThemeSwitch => Self { scale: 1.1, lift: 0.0 },
            HoverTarget::Category(_) => Self { scale: 1.05, lift: 5.0 },
            HoverTarget::Card => Self { scale: 1.02, lift: 0.0 },
            HoverTarget::Showcase(_) => Self { scale: 1.05, lift: 3.0 },
            HoverTarget::Contact(_) => Self { scale: 1.05, lift: 0.0 },
        }
    }

    /// `amount` is 0.0 at rest and 1.0 fully hovered.
    pub fn sample(&self, amount: f32) -> Pose {
        let amount = amount.clamp(0.0, 1.0);
        Pose {
            opacity: 1.0,
            offset: Vector2::new(0.0, -self.lift * amount),
            scale: lerp(1.0, self.scale, amount),
        }
    }
}

/// Hover amount per element, easing in while hovered and out afterwards.
#[derive(Debug, Default, Clone)]
pub struct HoverState {
    amounts: HashMap<HoverTarget, f32>,
}

impl HoverState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, hovered: Option<HoverTarget>, dt: f32) {
        let step = if HOVER_DURATION > 0.0 { dt.max(0.0) / HOVER_DURATION } else { 1.0 };
        if let Some(target) = hovered {
            self.amounts.entry(target).or_insert(0.0);
        }
        self.amounts.retain(|target, amount| {
            if Some(*target) == hovered {
                *amount = (*amount + step).min(1.0);
                true
            } else {
                *amount = (*amount - step).max(0.0);
                *amount > 0.0
            }
        });
    }

    /// Eased amount in `[0, 1]`.
    pub fn amount(&self, target: HoverTarget) -> f32 {
        let linear = self.amounts.get(&target).copied().unwrap_or(0.0);
        ease::cubic_out(linear, 0.0, 1.0, 1.0)
    }

    pub fn pose(&self, target: HoverTarget) -> Pose {
        Hover::for_target(target).sample(self.amount(target))
    }
}

/// Per-letter opacity of the animated title.
pub fn title_letter_opacity(index: usize, elapsed: f32, delay: f32) -> f32 {
    Entrance::fade_in(0.4)
        .delayed(delay + TITLE_LETTER_STEP * index as f32)
        .sample(elapsed)
        .opacity
}

/// Horizontal offset of the incoming card, from the carousel's settle progress.
pub fn card_slide_offset(direction: SlideDirection, settle_progress: f32) -> f32 {
    let eased = ease::cubic_out(settle_progress.clamp(0.0, 1.0), 0.0, 1.0, 1.0);
    let remaining = CARD_SLIDE_DISTANCE * (1.0 - eased);
    match direction {
        SlideDirection::Forward => remaining,
        SlideDirection::Backward => -remaining,
    }
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
