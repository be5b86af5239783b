//! Light-marker rendering.
//!
//! Draws a small flat-colored cube at each point light's position so the
//! carousel is visible. Uses its own position-only pipeline on top of the
//! main pass's depth buffer, and a single dynamic-offset uniform buffer that
//! holds one transform + color record per light.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use wgpu::util::DeviceExt;

use super::gpu::GpuContext;
use super::pipeline::{align_up, DEPTH_FORMAT};
use crate::scene::PointLight;

/// Half-extent of the marker cube.
const MARKER_HALF_EXTENT: f32 = 0.08;

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct MarkerVertex {
    position: [f32; 3],
}

impl MarkerVertex {
    const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<MarkerVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[wgpu::VertexAttribute {
            offset: 0,
            shader_location: 0,
            format: wgpu::VertexFormat::Float32x3,
        }],
    };
}

/// Per-marker uniform: transform + color. 80 bytes, placed at aligned
/// offsets in one buffer and selected per draw with a dynamic offset.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct MarkerUniform {
    model: [[f32; 4]; 4],
    color: [f32; 3],
    _pad: f32,
}

/// The eight corners and twelve triangles of the marker cube.
fn cube_mesh() -> ([MarkerVertex; 8], [u32; 36]) {
    let s = MARKER_HALF_EXTENT;
    let vertices = [
        MarkerVertex { position: [-s, -s, -s] },
        MarkerVertex { position: [s, -s, -s] },
        MarkerVertex { position: [s, s, -s] },
        MarkerVertex { position: [-s, s, -s] },
        MarkerVertex { position: [-s, -s, s] },
        MarkerVertex { position: [s, -s, s] },
        MarkerVertex { position: [s, s, s] },
        MarkerVertex { position: [-s, s, s] },
    ];
    let indices = [
        0, 1, 2, 2, 3, 0, // back
        1, 5, 6, 6, 2, 1, // right
        5, 4, 7, 7, 6, 5, // front
        4, 0, 3, 3, 7, 4, // left
        3, 2, 6, 6, 7, 3, // top
        4, 5, 1, 1, 0, 4, // bottom
    ];
    (vertices, indices)
}

/// Pipeline and buffers for the marker draws.
pub(crate) struct MarkerRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    marker_buffer: wgpu::Buffer,
    marker_bind_group: wgpu::BindGroup,
    stride: u32,
    capacity: usize,
}

impl MarkerRenderer {
    /// Create the marker pipeline. Reuses the sculpture pass's camera bind
    /// group layout for group 0. `capacity` is the number of marker slots.
    pub fn new(
        gpu: &GpuContext,
        camera_bind_group_layout: &wgpu::BindGroupLayout,
        capacity: usize,
    ) -> Self {
        let device = &gpu.device;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("marker shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("marker.wgsl").into()),
        });

        let marker_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("marker layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: true,
                        min_binding_size: wgpu::BufferSize::new(
                            std::mem::size_of::<MarkerUniform>() as u64,
                        ),
                    },
                    count: None,
                }],
            });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("marker pipeline layout"),
            bind_group_layouts: &[camera_bind_group_layout, &marker_bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("marker pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[MarkerVertex::LAYOUT],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: gpu.surface_format(),
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let (cube_vertices, cube_indices) = cube_mesh();
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("marker vertex buffer"),
            contents: bytemuck::cast_slice(&cube_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("marker index buffer"),
            contents: bytemuck::cast_slice(&cube_indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let align = device.limits().min_uniform_buffer_offset_alignment as usize;
        let stride = align_up(std::mem::size_of::<MarkerUniform>(), align);
        let capacity = capacity.max(1);

        let marker_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("marker uniform buffer"),
            size: (stride * capacity) as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let marker_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("marker bind group"),
            layout: &marker_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &marker_buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(std::mem::size_of::<MarkerUniform>() as u64),
                }),
            }],
        });

        Self {
            pipeline,
            vertex_buffer,
            index_buffer,
            index_count: cube_indices.len() as u32,
            marker_buffer,
            marker_bind_group,
            stride: stride as u32,
            capacity,
        }
    }

    /// Write one marker record per light into the dynamic buffer. Lights
    /// beyond the allocated capacity are skipped.
    pub fn upload(&self, queue: &wgpu::Queue, lights: &[PointLight]) -> usize {
        let count = lights.len().min(self.capacity);
        if count == 0 {
            return 0;
        }
        let mut data = vec![0u8; self.stride as usize * count];
        for (i, light) in lights.iter().take(count).enumerate() {
            let uniform = MarkerUniform {
                model: Mat4::from_translation(light.position).to_cols_array_2d(),
                color: light.diffuse.to_array(),
                _pad: 0.0,
            };
            let offset = i * self.stride as usize;
            let bytes = bytemuck::bytes_of(&uniform);
            data[offset..offset + bytes.len()].copy_from_slice(bytes);
        }
        queue.write_buffer(&self.marker_buffer, 0, &data);
        count
    }

    /// Record one draw per uploaded marker into the current pass.
    pub fn record(
        &self,
        render_pass: &mut wgpu::RenderPass<'_>,
        camera_bind_group: &wgpu::BindGroup,
        count: usize,
    ) {
        if count == 0 {
            return;
        }
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, camera_bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        for i in 0..count {
            let dynamic_offset = i as u32 * self.stride;
            render_pass.set_bind_group(1, &self.marker_bind_group, &[dynamic_offset]);
            render_pass.draw_indexed(0..self.index_count, 0, 0..1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_indices_in_range() {
        let (vertices, indices) = cube_mesh();
        assert_eq!(indices.len(), 36);
        for &i in &indices {
            assert!((i as usize) < vertices.len());
        }
    }

    #[test]
    fn marker_uniform_is_wgsl_sized() {
        assert_eq!(std::mem::size_of::<MarkerUniform>(), 80);

        let module = naga::front::wgsl::parse_str(include_str!("marker.wgsl")).unwrap();
        let mut layouter = naga::proc::Layouter::default();
        layouter.update(module.to_ctx()).unwrap();
        let (handle, _) = module
            .types
            .iter()
            .find(|(_, ty)| ty.name.as_deref() == Some("Marker"))
            .unwrap();
        assert_eq!(layouter[handle].size as usize, std::mem::size_of::<MarkerUniform>());
    }
}
