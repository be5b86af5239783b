//! Frame acquisition and submission.
//!
//! [`render_frame`] wraps the surface-texture dance: acquire, record through
//! a caller-provided closure, submit, present. Surface errors bubble up so
//! the window layer can decide whether to reconfigure or bail.

use super::gpu::GpuContext;

/// Everything a recording function needs for one frame.
pub(crate) struct FrameContext<'a> {
    pub gpu: &'a GpuContext,
    pub encoder: wgpu::CommandEncoder,
    pub view: wgpu::TextureView,
}

/// Acquire the next surface texture, let `record` fill the encoder, then
/// submit and present.
pub(crate) fn render_frame(
    gpu: &GpuContext,
    record: impl FnOnce(&mut FrameContext<'_>),
) -> Result<(), wgpu::SurfaceError> {
    let surface_texture = gpu.surface.get_current_texture()?;
    let view = surface_texture
        .texture
        .create_view(&wgpu::TextureViewDescriptor::default());

    let encoder = gpu
        .device
        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("frame encoder"),
        });

    let mut frame = FrameContext { gpu, encoder, view };
    record(&mut frame);

    gpu.queue.submit(std::iter::once(frame.encoder.finish()));
    surface_texture.present();
    Ok(())
}
