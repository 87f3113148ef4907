//! Background images
//!
//! Every screen shows one image stretched over the fixed canvas. Images are
//! decoded eagerly so a missing or broken file surfaces at transition time
//! rather than at draw time.

use std::fmt;
use std::io::ErrorKind;
use std::path::PathBuf;

use iced::widget::image::Handle;
use image::imageops::FilterType;
use image::ImageError;
use log::debug;

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};

pub const TITLE_IMAGE: &str = "Title_screen.png";
pub const BIRTHDAY_IMAGE: &str = "day.png";

/// A decoded image sized to the canvas.
#[derive(Clone)]
pub struct Backdrop {
    name: String,
    width: u32,
    height: u32,
    handle: Handle,
}

impl Backdrop {
    pub fn from_rgba(name: impl Into<String>, width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            handle: Handle::from_pixels(width, height, pixels),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn handle(&self) -> &Handle {
        &self.handle
    }
}

impl fmt::Debug for Backdrop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Backdrop")
            .field("name", &self.name)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait ImageLoader {
    /// Loads `name` and resizes it to the canvas.
    fn load(&self, name: &str) -> AppResult<Backdrop>;
}

/// Reads images from a directory on disk.
#[derive(Debug, Clone)]
pub struct FsImageLoader {
    dir: PathBuf,
    width: u32,
    height: u32,
}

impl FsImageLoader {
    pub fn new(dir: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        Self {
            dir: dir.into(),
            width,
            height,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.asset_dir, config.canvas_width, config.canvas_height)
    }
}

impl ImageLoader for FsImageLoader {
    fn load(&self, name: &str) -> AppResult<Backdrop> {
        let path = self.dir.join(name);
        if !path.is_file() {
            return Err(AppError::missing_resource(name));
        }

        debug!("Loading image {:?}", path);
        let decoded = image::open(&path).map_err(|e| match e {
            ImageError::IoError(ref io) if io.kind() == ErrorKind::NotFound => {
                AppError::missing_resource(name)
            }
            other => AppError::Image(other),
        })?;

        let resized = decoded
            .resize_exact(self.width, self.height, FilterType::Lanczos3)
            .to_rgba8();
        let (width, height) = resized.dimensions();

        Ok(Backdrop::from_rgba(name, width, height, resized.into_raw()))
    }
}
