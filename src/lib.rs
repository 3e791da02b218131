use thiserror::Error;

pub mod render;
pub mod texture;
pub mod viewer;

mod platform;

pub use render::FrameBuffer;
pub use texture::{Cell, Texture};
pub use viewer::{Viewer, ViewerState};

/// Default grid width in cells.
pub const GRID_WIDTH: u32 = 16;
/// Default grid height in cells.
pub const GRID_HEIGHT: u32 = 16;
/// Default number of screen pixels per cell edge.
pub const PIXEL_SCALE: u32 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid dimensions must be positive")]
    ZeroDimensions,
    #[error("pixel scale must be positive")]
    ZeroScale,
}

/// Builds a [`Viewer`] from grid dimensions, pixel scale and an optional
/// RNG seed. Unset fields fall back to the crate defaults.
pub struct ViewerBuilder {
    width: u32,
    height: u32,
    scale: u32,
    seed: Option<u64>,
    title: String,
}

impl ViewerBuilder {
    pub fn with_dimensions(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    #[inline]
    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[inline]
    pub fn scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }

    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[inline]
    pub fn title(mut self, title: String) -> Self {
        self.title = title;
        self
    }

    pub fn build(self) -> Result<Viewer, ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimensions);
        }
        if self.scale == 0 {
            return Err(ConfigError::ZeroScale);
        }

        let seed = self.seed.unwrap_or_else(texture::seed_from_time);
        let texture = Texture::generate(self.width, self.height, seed);

        Ok(Viewer::new(texture, self.scale, self.title))
    }
}

impl Default for ViewerBuilder {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            scale: PIXEL_SCALE,
            seed: None,
            title: String::from("randtex"),
        }
    }
}
