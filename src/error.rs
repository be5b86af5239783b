//! Error types for startup-time validation.
//!
//! The per-frame path is made of pure, total functions and has no recoverable
//! errors; everything that can fail does so before the first frame (config
//! loading, grid validation, GPU setup). Per-frame surface errors are handled
//! where they occur, following wgpu's own error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while configuring the sculpture.
#[derive(Debug, Error)]
pub enum SculptError {
    /// The requested grid cannot be stitched into a valid mesh. At least two
    /// rings and three segments are required to form any triangles.
    #[error("invalid grid dimensions: {rings} rings x {segments} segments (need >= 2 rings and >= 3 segments)")]
    InvalidGridDimensions { rings: u32, segments: u32 },

    /// The requested grid has more samples than the renderer will resample
    /// per frame.
    #[error("grid too large: {rings} rings x {segments} segments exceeds {max_samples} samples")]
    GridTooLarge {
        rings: u32,
        segments: u32,
        max_samples: u64,
    },

    /// No rendering surface could be created for the window.
    #[error("failed to create rendering surface")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    /// No GPU adapter is compatible with the surface.
    #[error("no suitable GPU adapter found")]
    RequestAdapter(#[from] wgpu::RequestAdapterError),

    /// The adapter refused to hand out a device.
    #[error("failed to create GPU device")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    /// The config file could not be read.
    #[error("failed to read config file {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON for [`AppConfig`](crate::config::AppConfig).
    #[error("failed to parse config file {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
