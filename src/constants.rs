pub const WINDOW_WIDTH: i32 = 1280;           // Default window width
pub const WINDOW_HEIGHT: i32 = 900;           // Default window height
pub const FPS: u32 = 60;                      // Frames per second

pub const SETTLE_DURATION: f32 = 0.3;         // Navigation lock after a slide change (seconds)
pub const STAGGER_STEP: f32 = 0.2;            // Delay between staggered entrances (seconds)
pub const TITLE_LETTER_STEP: f32 = 0.05;      // Delay between title letters (seconds)
pub const CARD_SLIDE_DISTANCE: f32 = 60.0;    // Horizontal travel of an incoming card (pixels)
pub const HOVER_DURATION: f32 = 0.3;          // Time to reach the full hover pose (seconds)

pub const THEME_KEY: &str = "theme";          // Preference key holding "light" / "dark"
