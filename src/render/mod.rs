//! wgpu-based forward renderer for the sculpture scene.
//!
//! - [`gpu`]: device, queue, and surface management
//! - [`vertex`]: vertex and uniform layouts shared with the shaders
//! - [`pipeline`]: the sculpture render pipeline and its bind groups
//! - [`marker`]: flat-colored cubes marking the point lights
//! - [`pass`]: surface acquisition and command submission
//! - [`draw`]: per-frame upload and pass recording

pub mod gpu;
pub mod vertex;

pub(crate) mod draw;
pub(crate) mod marker;
pub(crate) mod pass;
pub(crate) mod pipeline;

pub use vertex::{MeshVertex, MAX_POINT_LIGHTS};
