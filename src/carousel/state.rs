#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TransitionState {
    Idle,                     // Accepting navigation input
    Settling { elapsed: f32 }, // Index just changed, input is locked until the window elapses
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SlideDirection {
    Forward,  // Incoming card enters from the right
    Backward, // Incoming card enters from the left
}
