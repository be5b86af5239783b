//! # Kinetica: Kinetic Sculpture Renderer
//!
//! A forward wgpu renderer for a single animated procedural mesh, a
//! "kinetic sculpture" whose cross-section radius ripples over time, lit by
//! one directional light and a ring of orbiting point lights.
//!
//! The interesting parts live in [`sculpture`] (parametric surface sampling,
//! topology stitching, light animation) and [`scene`] (per-frame parameter
//! assembly). Everything under [`render`] is GPU plumbing.

pub mod app;
pub mod config;
pub mod error;
pub mod render;
pub mod scene;
pub mod sculpture;
pub mod time;
pub mod window;
