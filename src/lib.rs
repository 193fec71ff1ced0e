//! Single-page portfolio: a project carousel with expandable cards, a
//! persisted light/dark theme and entrance animations, rendered with raylib.

pub mod animation;
pub mod card;
pub mod carousel;
pub mod config;
pub mod constants;
pub mod error;
pub mod layout;
pub mod page;
pub mod project;
pub mod texture_loader;
pub mod theme;

pub use card::{CardState, CardView};
pub use carousel::{Carousel, CarouselInput, CarouselSnapshot, Navigation, Navigator};
pub use config::Config;
pub use error::{Error, Result};
pub use page::Portfolio;
pub use project::{Project, ProjectLink};
pub use theme::{JsonFileStore, MemoryStore, PreferenceStore, Theme, ThemeSettings};
