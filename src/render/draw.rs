//! # Per-Frame Rendering
//!
//! [`Renderer`] owns the sculpture's vertex and index buffers and both
//! pipelines, and records one frame:
//!
//! ```text
//! render(frame, params, vertices)
//!   ├─ recreate depth texture if the surface was resized
//!   ├─ rewrite the vertex buffer (positions are time-dependent)
//!   ├─ write camera / light / material / model uniforms from FrameParams
//!   ├─ write one marker record per point light
//!   └─ render pass: clear color + depth, draw sculpture, draw markers
//! ```
//!
//! The index buffer is uploaded once in [`Renderer::new`]; the topology
//! depends only on the grid dimensions, which are fixed for the run.

use wgpu::util::DeviceExt;

use super::gpu::GpuContext;
use super::marker::MarkerRenderer;
use super::pass::FrameContext;
use super::pipeline::SculpturePipeline;
use super::vertex::{CameraUniform, LightUniform, MaterialUniform, MeshVertex, ModelUniform};
use crate::scene::FrameParams;

/// Background clear color: near-black with a hint of blue.
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.02,
    g: 0.02,
    b: 0.035,
    a: 1.0,
};

/// All GPU state for drawing one frame of the sculpture scene.
pub(crate) struct Renderer {
    sculpture: SculpturePipeline,
    markers: MarkerRenderer,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    vertex_count: usize,
}

impl Renderer {
    /// Create pipelines and buffers. `vertex_count` fixes the size of the
    /// per-frame vertex buffer; `indices` is the cached topology.
    pub fn new(gpu: &GpuContext, vertex_count: usize, indices: &[u32], light_count: usize) -> Self {
        let sculpture = SculpturePipeline::new(gpu);
        let markers = MarkerRenderer::new(gpu, &sculpture.camera_bind_group_layout, light_count);

        let vertex_buffer = gpu.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("sculpture vertex buffer"),
            size: (vertex_count * std::mem::size_of::<MeshVertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let index_buffer = gpu.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sculpture index buffer"),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        log::info!(
            "sculpture mesh: {} vertices, {} triangles",
            vertex_count,
            indices.len() / 3
        );

        Self {
            sculpture,
            markers,
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
            vertex_count,
        }
    }

    /// Upload this frame's data and record the render pass.
    pub fn render(&mut self, frame: &mut FrameContext<'_>, params: &FrameParams, vertices: &[MeshVertex]) {
        let gpu = frame.gpu;

        let (sw, sh) = gpu.surface_size();
        self.sculpture.resize_depth_if_needed(&gpu.device, sw, sh);

        debug_assert_eq!(vertices.len(), self.vertex_count);
        gpu.queue
            .write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(vertices));

        let camera = CameraUniform::pack(params.projection, params.view, params.camera_pos);
        gpu.queue
            .write_buffer(&self.sculpture.camera_buffer, 0, bytemuck::cast_slice(&[camera]));

        let lights = LightUniform::pack(&params.directional, &params.point_lights);
        gpu.queue
            .write_buffer(&self.sculpture.light_buffer, 0, bytemuck::cast_slice(&[lights]));

        let material = MaterialUniform::from(&params.material);
        gpu.queue.write_buffer(
            &self.sculpture.material_buffer,
            0,
            bytemuck::cast_slice(&[material]),
        );

        let model = ModelUniform::pack(params.model);
        gpu.queue
            .write_buffer(&self.sculpture.model_buffer, 0, bytemuck::cast_slice(&[model]));

        let marker_count = self.markers.upload(&gpu.queue, &params.point_lights);

        let mut render_pass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("sculpture pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &frame.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.sculpture.depth_texture,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_pipeline(&self.sculpture.pipeline);
        render_pass.set_bind_group(0, &self.sculpture.camera_bind_group, &[]);
        render_pass.set_bind_group(1, &self.sculpture.light_bind_group, &[]);
        render_pass.set_bind_group(2, &self.sculpture.object_bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        render_pass.draw_indexed(0..self.index_count, 0, 0..1);

        self.markers
            .record(&mut render_pass, &self.sculpture.camera_bind_group, marker_count);
    }
}
