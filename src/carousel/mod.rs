mod container;
mod navigation;
mod state;

pub use container::{Carousel, CarouselInput, CarouselSnapshot};
pub use navigation::{Navigation, Navigator};
pub use state::{SlideDirection, TransitionState};
