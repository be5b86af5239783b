//! # Vertex and Uniform Layouts
//!
//! GPU-facing data layouts for the sculpture pass. Everything here is
//! `#[repr(C)]` + `Pod` so it can be cast straight into buffer writes with
//! bytemuck, and every struct is padded to the WGSL uniform alignment rules
//! (vec3 fields occupy 16-byte rows; the fourth lane carries either padding
//! or a scalar that belongs with the row).
//!
//! ```text
//! MeshVertex (32 bytes, interleaved)
//! ┌──────────────┬──────────────┬──────────────┐
//! │ position     │ normal       │ uv           │
//! │ [f32; 3]     │ [f32; 3]     │ [f32; 2]     │
//! │ offset 0     │ offset 12    │ offset 24    │
//! │ location(0)  │ location(1)  │ location(2)  │
//! └──────────────┴──────────────┴──────────────┘
//! ```
//!
//! Uniforms are split by change frequency: camera (group 0) and lights
//! (group 1) change once per frame; material + model (group 2) belong to the
//! single sculpture object.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use crate::scene::{DirectionalLight, Material, PointLight};

/// One surface grid sample: position, approximate normal, texcoord.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl MeshVertex {
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<MeshVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            // position: vec3<f32>
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x3,
            },
            // normal: vec3<f32>
            wgpu::VertexAttribute {
                offset: 12,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x3,
            },
            // uv: vec2<f32>
            wgpu::VertexAttribute {
                offset: 24,
                shader_location: 2,
                format: wgpu::VertexFormat::Float32x2,
            },
        ],
    };
}

/// Camera uniform: view-projection matrix + world-space position (for
/// specular reflection). 80 bytes.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub(crate) struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub camera_pos: [f32; 3],
    pub _padding: f32,
}

impl CameraUniform {
    pub fn pack(projection: Mat4, view: Mat4, camera_pos: glam::Vec3) -> Self {
        Self {
            view_proj: (projection * view).to_cols_array_2d(),
            camera_pos: camera_pos.to_array(),
            _padding: 0.0,
        }
    }
}

/// Maximum point lights the shader's fixed array can hold. The configured
/// count is clamped to this.
pub const MAX_POINT_LIGHTS: usize = 8;

/// One point light, packed for GPU upload: the attenuation coefficients ride
/// in the fourth lane of the three color rows. 64 bytes.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub(crate) struct PointLightGpu {
    pub position: [f32; 3],
    pub attn_constant: f32,
    pub ambient: [f32; 3],
    pub attn_linear: f32,
    pub diffuse: [f32; 3],
    pub attn_quadratic: f32,
    pub specular: [f32; 3],
    pub _pad: f32,
}

impl From<&PointLight> for PointLightGpu {
    fn from(light: &PointLight) -> Self {
        Self {
            position: light.position.to_array(),
            attn_constant: light.attenuation.constant,
            ambient: light.ambient.to_array(),
            attn_linear: light.attenuation.linear,
            diffuse: light.diffuse.to_array(),
            attn_quadratic: light.attenuation.quadratic,
            specular: light.specular.to_array(),
            _pad: 0.0,
        }
    }
}

/// All lighting data in one buffer: the directional light, the point-light
/// array, and the live count. 592 bytes.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub(crate) struct LightUniform {
    pub dir_direction: [f32; 3],
    pub _pad0: f32,
    pub dir_ambient: [f32; 3],
    pub _pad1: f32,
    pub dir_diffuse: [f32; 3],
    pub _pad2: f32,
    pub dir_specular: [f32; 3],
    pub _pad3: f32,
    pub point_lights: [PointLightGpu; MAX_POINT_LIGHTS],
    pub point_light_count: u32,
    /// Tail padding. The WGSL struct ends at `point_count` and rounds up to
    /// the same total size; declaring a trailing vec3 pad over there would
    /// 16-align it and grow the shader-side struct past this one.
    pub _pad4: [u32; 3],
}

impl LightUniform {
    /// Pack the directional light plus up to [`MAX_POINT_LIGHTS`] point
    /// lights; extras are dropped.
    pub fn pack(directional: &DirectionalLight, point_lights: &[PointLight]) -> Self {
        let mut uniform = Self {
            dir_direction: directional.direction.to_array(),
            _pad0: 0.0,
            dir_ambient: directional.ambient.to_array(),
            _pad1: 0.0,
            dir_diffuse: directional.diffuse.to_array(),
            _pad2: 0.0,
            dir_specular: directional.specular.to_array(),
            _pad3: 0.0,
            point_lights: [PointLightGpu::zeroed(); MAX_POINT_LIGHTS],
            point_light_count: 0,
            _pad4: [0; 3],
        };
        for (slot, light) in uniform.point_lights.iter_mut().zip(point_lights) {
            *slot = light.into();
        }
        uniform.point_light_count = point_lights.len().min(MAX_POINT_LIGHTS) as u32;
        uniform
    }
}

/// Phong material constants. Shininess rides with the ambient row. 48 bytes.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub(crate) struct MaterialUniform {
    pub ambient: [f32; 3],
    pub shininess: f32,
    pub diffuse: [f32; 3],
    pub _pad0: f32,
    pub specular: [f32; 3],
    pub _pad1: f32,
}

impl From<&Material> for MaterialUniform {
    fn from(material: &Material) -> Self {
        Self {
            ambient: material.ambient.to_array(),
            shininess: material.shininess,
            diffuse: material.diffuse.to_array(),
            _pad0: 0.0,
            specular: material.specular.to_array(),
            _pad1: 0.0,
        }
    }
}

/// Model transform + normal matrix. The normal matrix is the inverse
/// transpose of the model matrix, stored as mat4x4 to dodge WGSL's mat3x3
/// alignment padding; the shader uses the upper 3x3. 128 bytes.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub(crate) struct ModelUniform {
    pub model: [[f32; 4]; 4],
    pub normal_matrix: [[f32; 4]; 4],
}

impl ModelUniform {
    pub fn pack(model: Mat4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            normal_matrix: model.inverse().transpose().to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Scene;
    use std::mem::size_of;

    #[test]
    fn layouts_match_wgsl_sizes() {
        assert_eq!(size_of::<MeshVertex>(), 32);
        assert_eq!(size_of::<CameraUniform>(), 80);
        assert_eq!(size_of::<PointLightGpu>(), 64);
        assert_eq!(size_of::<LightUniform>(), 64 + 64 * MAX_POINT_LIGHTS + 16);
        assert_eq!(size_of::<MaterialUniform>(), 48);
        assert_eq!(size_of::<ModelUniform>(), 128);
    }

    /// Size of a named struct in a WGSL module, per WGSL layout rules.
    fn wgsl_struct_size(source: &str, name: &str) -> usize {
        let module = naga::front::wgsl::parse_str(source).expect("shader should parse");
        let mut layouter = naga::proc::Layouter::default();
        layouter.update(module.to_ctx()).expect("layout should resolve");
        let (handle, _) = module
            .types
            .iter()
            .find(|(_, ty)| ty.name.as_deref() == Some(name))
            .unwrap_or_else(|| panic!("shader has no struct named {name}"));
        layouter[handle].size as usize
    }

    #[test]
    fn shader_structs_match_rust_layouts() {
        let shader = include_str!("sculpture.wgsl");
        assert_eq!(wgsl_struct_size(shader, "Camera"), size_of::<CameraUniform>());
        assert_eq!(wgsl_struct_size(shader, "PointLight"), size_of::<PointLightGpu>());
        assert_eq!(wgsl_struct_size(shader, "Lights"), size_of::<LightUniform>());
        assert_eq!(wgsl_struct_size(shader, "Material"), size_of::<MaterialUniform>());
        assert_eq!(wgsl_struct_size(shader, "Model"), size_of::<ModelUniform>());
    }

    #[test]
    fn light_pack_clamps_to_the_shader_array() {
        let params = Scene::new(4).assemble(1.0, (800, 600));
        let too_many: Vec<_> = params
            .point_lights
            .iter()
            .cycle()
            .take(MAX_POINT_LIGHTS + 3)
            .copied()
            .collect();
        let uniform = LightUniform::pack(&params.directional, &too_many);
        assert_eq!(uniform.point_light_count, MAX_POINT_LIGHTS as u32);
    }

    #[test]
    fn light_pack_copies_positions_and_attenuation() {
        let params = Scene::new(3).assemble(0.25, (800, 600));
        let uniform = LightUniform::pack(&params.directional, &params.point_lights);
        assert_eq!(uniform.point_light_count, 3);
        for (gpu, light) in uniform.point_lights.iter().zip(&params.point_lights) {
            assert_eq!(gpu.position, light.position.to_array());
            assert_eq!(gpu.attn_constant, light.attenuation.constant);
            assert_eq!(gpu.attn_linear, light.attenuation.linear);
            assert_eq!(gpu.attn_quadratic, light.attenuation.quadratic);
        }
        // Unused slots stay zeroed.
        assert_eq!(uniform.point_lights[3].position, [0.0; 3]);
    }

    #[test]
    fn normal_matrix_inverts_nonuniform_scale() {
        let model = Mat4::from_scale(glam::Vec3::new(2.0, 1.0, 1.0));
        let uniform = ModelUniform::pack(model);
        // Inverse transpose of diag(2,1,1,1) is diag(0.5,1,1,1).
        assert!((uniform.normal_matrix[0][0] - 0.5).abs() < 1e-6);
        assert!((uniform.normal_matrix[1][1] - 1.0).abs() < 1e-6);
    }
}
