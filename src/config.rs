//! Page configuration loaded from a TOML file.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::constants::{FPS, SETTLE_DURATION, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::error::{Error, Result};
use crate::project::Project;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub showcase: Option<Showcase>,
    #[serde(default)]
    pub contacts: Vec<ExternalLink>,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
    pub fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            fps: FPS,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub owner: String,
    pub title: String,
    pub tagline: String,
    pub copyright: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: "Portfolio".to_string(),
            title: "Portfolio".to_string(),
            tagline: String::new(),
            copyright: String::new(),
        }
    }
}

/// Short "what I do" card shown above the carousel.
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub title: String,
    pub description: String,
}

/// Call-to-action card below the carousel.
#[derive(Debug, Clone, Deserialize)]
pub struct Showcase {
    pub heading: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub links: Vec<ExternalLink>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExternalLink {
    pub label: String,
    pub url: String,
}

fn default_settle_ms() -> u64 {
    (SETTLE_DURATION * 1000.0) as u64
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|e| Error::config(format!("cannot read {}: {e}", path.display())))?;
        let mut config: Config = toml::from_str(&raw)?;
        config.validate()?;

        if let Some(base) = path.parent() {
            config.resolve_images(base);
        }
        info!(
            path = %path.display(),
            projects = config.projects.len(),
            "config loaded"
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.projects.is_empty() {
            return Err(Error::EmptyCarousel);
        }
        if self.window.width <= 0 || self.window.height <= 0 {
            return Err(Error::config(format!(
                "window size must be positive, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if self.window.fps == 0 {
            return Err(Error::config("fps must be at least 1"));
        }
        if let Some(position) = self.projects.iter().position(|p| p.title.trim().is_empty()) {
            return Err(Error::config(format!("project {} has an empty title", position + 1)));
        }
        Ok(())
    }

    /// Settle window in seconds.
    pub fn settle_window(&self) -> f32 {
        self.settle_ms as f32 / 1000.0
    }

    fn resolve_images(&mut self, base: &Path) {
        for project in &mut self.projects {
            if project.image.is_relative() {
                project.image = base.join(&project.image);
            }
        }
    }
}
