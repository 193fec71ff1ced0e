use tracing::debug;

use crate::carousel::state::TransitionState;
use crate::error::{Error, Result};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Navigation {
    Moved { from: usize, to: usize },
    Unchanged, // Target is already the current index
    Locked,    // A previous move is still settling
    Toggled,   // The input flipped the active card instead of moving
}

#[derive(Debug, Clone)]
pub struct Navigator {
    len: usize,
    current_index: usize,
    state: TransitionState,
    settle_window: f32,
}

impl Navigator {
    pub fn new(len: usize, settle_window: f32) -> Self {
        Self {
            len,
            current_index: 0,
            state: TransitionState::Idle,
            settle_window: settle_window.max(0.0),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn state(&self) -> TransitionState {
        self.state
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.state, TransitionState::Settling { .. })
    }

    pub fn settle_window(&self) -> f32 {
        self.settle_window
    }

    /// 0.0 right after a move, 1.0 once the lock is released.
    pub fn settle_progress(&self) -> f32 {
        match self.state {
            TransitionState::Idle => 1.0,
            TransitionState::Settling { elapsed } if self.settle_window > 0.0 => {
                (elapsed / self.settle_window).min(1.0)
            }
            TransitionState::Settling { .. } => 1.0,
        }
    }

    pub fn go_to(&mut self, index: usize) -> Result<Navigation> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        if self.is_transitioning() {
            return Ok(Navigation::Locked);
        }
        if index == self.current_index {
            return Ok(Navigation::Unchanged);
        }

        let from = self.current_index;
        self.state = TransitionState::Settling { elapsed: 0.0 };
        self.current_index = index;
        debug!(from, to = index, "carousel moved");
        Ok(Navigation::Moved { from, to: index })
    }

    pub fn go_to_previous(&mut self) -> Result<Navigation> {
        if self.is_empty() {
            return Ok(Navigation::Unchanged);
        }
        let index = if self.current_index == 0 {
            self.len - 1
        } else {
            self.current_index - 1
        };
        self.go_to(index)
    }

    pub fn go_to_next(&mut self) -> Result<Navigation> {
        if self.is_empty() {
            return Ok(Navigation::Unchanged);
        }
        let index = if self.current_index == self.len - 1 {
            0
        } else {
            self.current_index + 1
        };
        self.go_to(index)
    }

    /// Advance the settle timer. Returns true when the lock is released by this call.
    pub fn tick(&mut self, dt: f32) -> bool {
        match self.state {
            TransitionState::Idle => false,
            TransitionState::Settling { elapsed } => {
                let elapsed = elapsed + dt.max(0.0);
                if elapsed >= self.settle_window {
                    self.state = TransitionState::Idle;
                    true
                } else {
                    self.state = TransitionState::Settling { elapsed };
                    false
                }
            }
        }
    }
}
