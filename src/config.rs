//! Configuration module
//!
//! Window geometry and the location of the image assets. Nothing is read
//! from disk here beyond checking which asset directory exists.

use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::assets::TITLE_IMAGE;
use crate::error::{AppError, AppResult};

pub const WINDOW_TITLE: &str = "Zodiac Horoscope";
pub const CANVAS_WIDTH: u32 = 400;
pub const CANVAS_HEIGHT: u32 = 700;
/// Height of the button/dropdown strip under the canvas.
pub const CONTROL_STRIP_HEIGHT: u32 = 90;

const APP_DIR_NAME: &str = "zodiac-horoscope";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub window_title: String,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub asset_dir: PathBuf,
}

impl AppConfig {
    /// Builds the configuration for this process.
    pub fn load() -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::with_asset_dir(resolve_asset_dir(&cwd, dirs::data_dir()))
    }

    pub fn with_asset_dir(asset_dir: impl Into<PathBuf>) -> Self {
        Self {
            window_title: WINDOW_TITLE.to_string(),
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            asset_dir: asset_dir.into(),
        }
    }

    /// Full window size including the control strip.
    pub fn window_size(&self) -> (u32, u32) {
        (self.canvas_width, self.canvas_height + CONTROL_STRIP_HEIGHT)
    }
}

/// Picks the asset directory.
///
/// Lookup order: `<cwd>/assets`, then `cwd` itself if it holds the title
/// image, then `<data_dir>/zodiac-horoscope/assets`. Falls back to
/// `<cwd>/assets` when none exist so the error names a sensible path.
pub fn resolve_asset_dir(cwd: &Path, data_dir: Option<PathBuf>) -> PathBuf {
    let dev_assets = cwd.join("assets");
    if dev_assets.is_dir() {
        return dev_assets;
    }

    if cwd.join(TITLE_IMAGE).is_file() {
        return cwd.to_path_buf();
    }

    if let Some(installed) = data_dir.map(|d| d.join(APP_DIR_NAME).join("assets")) {
        if installed.is_dir() {
            return installed;
        }
    }

    dev_assets
}

/// Checks the configuration before the window opens.
///
/// A missing asset directory is reported but each screen still handles its
/// own missing image.
pub fn validate_config(config: &AppConfig) -> AppResult<()> {
    info!("Using asset directory {:?}", config.asset_dir);
    if config.canvas_width == 0 || config.canvas_height == 0 {
        return Err(AppError::config("Canvas size must be non-zero"));
    }
    if !config.asset_dir.is_dir() {
        warn!("Asset directory {:?} does not exist", config.asset_dir);
        return Err(AppError::config(format!(
            "Asset directory {} does not exist",
            config.asset_dir.display()
        )));
    }
    Ok(())
}
