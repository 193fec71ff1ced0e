use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use portfolio::theme::{JsonFileStore, MemoryStore, PreferenceStore, ThemeSettings};
use portfolio::{Config, Portfolio};

#[derive(Parser, Debug)]
#[command(name = "portfolio", about = "Personal portfolio page with a project carousel")]
struct Args {
    /// Page configuration (TOML)
    #[arg(default_value = "portfolio.toml")]
    config: PathBuf,

    /// Where the theme preference is stored (defaults to the user config dir)
    #[arg(long)]
    preferences: Option<PathBuf>,

    /// Override the navigation settle window in milliseconds
    #[arg(long)]
    settle_ms: Option<u64>,

    /// Log filter, e.g. "debug" or "portfolio=trace"; RUST_LOG wins when set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = Config::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    if let Some(settle_ms) = args.settle_ms {
        config.settle_ms = settle_ms;
    }

    let store: Box<dyn PreferenceStore> = match args.preferences.or_else(JsonFileStore::default_path) {
        Some(path) => {
            info!(path = %path.display(), "theme preference file");
            Box::new(JsonFileStore::new(path))
        }
        None => {
            info!("no config directory, theme preference kept in memory");
            Box::new(MemoryStore::default())
        }
    };
    let theme = ThemeSettings::load(store);

    let (width, height, fps) = (config.window.width, config.window.height, config.window.fps);
    let title = config.site.owner.clone();
    let mut page = Portfolio::new(config, theme).context("building page")?;

    let (mut rl, thread) = raylib::init()
        .size(width, height)
        .title(&title)
        .vsync()
        .build();
    rl.set_target_fps(fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    page.load_textures(&mut rl, &thread);
    info!(projects = page.carousel().len(), "page ready");

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        page.handle_input(&rl);
        page.update(dt);

        let mut d = rl.begin_drawing(&thread);
        page.draw(&mut d);
    }

    // Textures must be unloaded while the window still exists.
    drop(page);
    Ok(())
}
