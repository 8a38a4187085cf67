//! Render configuration and its errors.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors for render options that would break the pixel mapping.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("Image width must be greater than 1, got {0}")]
    InvalidWidth(u32),

    #[error("Image height must be greater than 0, got {0}")]
    InvalidHeight(u32),

    #[error("Field of view must be within (0, 180) degrees, got {0}")]
    InvalidFieldOfView(f64),
}

/// Errors that can occur while loading render options.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid options: {0}")]
    Invalid(#[from] RenderError),
}

/// Per-render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Maximum trace depth (reserved, shading is single bounce)
    pub depth: u32,
    /// Horizontal field of view in degrees
    pub field_of_view: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 480,
            height: 360,
            depth: 0,
            field_of_view: 60.0,
        }
    }
}

impl RenderOptions {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the field of view in degrees.
    pub fn with_field_of_view(mut self, degrees: f64) -> Self {
        self.field_of_view = degrees;
        self
    }

    /// Set the reserved trace depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// Check that the options describe a renderable image.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.width <= 1 {
            return Err(RenderError::InvalidWidth(self.width));
        }
        if self.height == 0 {
            return Err(RenderError::InvalidHeight(self.height));
        }
        let fov = self.field_of_view;
        if !fov.is_finite() || fov <= 0.0 || fov >= 180.0 {
            return Err(RenderError::InvalidFieldOfView(fov));
        }
        Ok(())
    }

    /// Parse and validate options from JSON. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let options: RenderOptions = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Read, parse and validate options from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
