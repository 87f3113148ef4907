//! Application context
//!
//! Owns the collaborators the navigator talks to. Built once in `main` and
//! passed by reference; tests build one from fakes.

use crate::assets::{FsImageLoader, ImageLoader};
use crate::config::AppConfig;
use crate::dialogs::{report_error, ErrorReporter, NativeDialogs};
use crate::error::AppError;
use crate::random::{IndexSource, ThreadRngSource};

pub struct AppContext {
    pub config: AppConfig,
    pub images: Box<dyn ImageLoader>,
    pub dialogs: Box<dyn ErrorReporter>,
    pub rng: Box<dyn IndexSource>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        images: Box<dyn ImageLoader>,
        dialogs: Box<dyn ErrorReporter>,
        rng: Box<dyn IndexSource>,
    ) -> Self {
        Self {
            config,
            images,
            dialogs,
            rng,
        }
    }

    /// Production wiring: images from disk, native dialogs, thread RNG.
    pub fn from_config(config: AppConfig) -> Self {
        let images = FsImageLoader::from_config(&config);
        Self::new(
            config,
            Box::new(images),
            Box::new(NativeDialogs),
            Box::new(ThreadRngSource),
        )
    }

    pub fn report(&self, err: &AppError) {
        report_error(self.dialogs.as_ref(), err);
    }
}
