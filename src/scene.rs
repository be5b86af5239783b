//! # Scene: Frame Parameter Assembly
//!
//! Once per frame, [`Scene::assemble`] combines the orbiting camera, the
//! spinning model transform, the fixed material and directional-light
//! constants, and the animated point lights into a single [`FrameParams`]
//! bundle. The renderer consumes the bundle atomically; there is no
//! per-field lookup at the GPU boundary and no state carried between frames
//! beyond re-derivation from time.

use glam::{Mat4, Vec3};

use crate::sculpture::lights;

// Camera orbit and projection constants.
const CAMERA_RADIUS: f32 = 6.5;
const CAMERA_HEIGHT: f32 = 3.0;
const CAMERA_ORBIT_SPEED: f32 = 0.3;
const FOV_Y_DEGREES: f32 = 45.0;
const Z_NEAR: f32 = 0.1;
const Z_FAR: f32 = 100.0;

/// Angular speed of the sculpture's spin about the Y axis.
const MODEL_SPIN_SPEED: f32 = 0.25;

/// Inverse-distance falloff coefficients for a point light.
#[derive(Debug, Clone, Copy)]
pub struct Attenuation {
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

/// Phong material: per-term reflectance colors plus a shininess exponent.
#[derive(Debug, Clone, Copy)]
pub struct Material {
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: Vec3::splat(0.15),
            diffuse: Vec3::new(0.7, 0.75, 0.8),
            specular: Vec3::splat(0.9),
            shininess: 48.0,
        }
    }
}

/// A directional light: parallel rays, no position. Immutable for the
/// process lifetime.
#[derive(Debug, Clone, Copy)]
pub struct DirectionalLight {
    /// Direction the light shines toward (normalized in the shader).
    pub direction: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            direction: Vec3::new(-0.2, -1.0, -0.3),
            ambient: Vec3::new(0.04, 0.04, 0.05),
            diffuse: Vec3::new(0.25, 0.25, 0.3),
            specular: Vec3::new(0.3, 0.3, 0.35),
        }
    }
}

/// A point light: live position plus fixed photometric constants.
#[derive(Debug, Clone, Copy)]
pub struct PointLight {
    pub position: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub attenuation: Attenuation,
}

impl PointLight {
    /// A carousel light at `position` with the shared photometric constants.
    fn at(position: Vec3) -> Self {
        Self {
            position,
            ambient: Vec3::splat(0.02),
            diffuse: Vec3::splat(0.9),
            specular: Vec3::splat(1.0),
            attenuation: Attenuation {
                constant: 1.0,
                linear: 0.14,
                quadratic: 0.07,
            },
        }
    }
}

/// The complete per-frame parameter bundle for the shading stage.
///
/// Transient: recomputed every frame from time and the viewport size, owned
/// solely by the render loop.
#[derive(Debug, Clone)]
pub struct FrameParams {
    pub projection: Mat4,
    pub view: Mat4,
    pub model: Mat4,
    /// Camera world position, for specular reflection.
    pub camera_pos: Vec3,
    pub material: Material,
    pub directional: DirectionalLight,
    pub point_lights: Vec<PointLight>,
}

/// Fixed scene description: everything that is not a function of time.
#[derive(Debug, Clone)]
pub struct Scene {
    pub light_count: usize,
    pub material: Material,
    pub directional: DirectionalLight,
}

impl Scene {
    pub fn new(light_count: usize) -> Self {
        Self {
            light_count,
            material: Material::default(),
            directional: DirectionalLight::default(),
        }
    }

    /// Assemble the frame parameters for `time` and the current viewport.
    pub fn assemble(&self, time: f32, viewport: (u32, u32)) -> FrameParams {
        let projection = Mat4::perspective_rh(
            FOV_Y_DEGREES.to_radians(),
            aspect_ratio(viewport),
            Z_NEAR,
            Z_FAR,
        );

        let eye = Vec3::new(
            CAMERA_RADIUS * (CAMERA_ORBIT_SPEED * time).sin(),
            CAMERA_HEIGHT,
            CAMERA_RADIUS * (CAMERA_ORBIT_SPEED * time).cos(),
        );
        let view = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y);
        // Extract the camera position from the inverted view matrix rather
        // than trusting `eye`. This is the same value the shader needs for
        // specular, whatever the view matrix was built from.
        let camera_pos = view.inverse().col(3).truncate();

        let model = Mat4::from_rotation_y(MODEL_SPIN_SPEED * time);

        let point_lights = (0..self.light_count)
            .map(|i| PointLight::at(lights::position(i, time)))
            .collect();

        FrameParams {
            projection,
            view,
            model,
            camera_pos,
            material: self.material,
            directional: self.directional,
            point_lights,
        }
    }
}

/// Viewport aspect ratio, falling back to 1.0 for a degenerate viewport so a
/// minimized window never divides by zero.
fn aspect_ratio((width, height): (u32, u32)) -> f32 {
    if width == 0 || height == 0 {
        1.0
    } else {
        width as f32 / height as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_guards_degenerate_viewports() {
        assert_eq!(aspect_ratio((800, 0)), 1.0);
        assert_eq!(aspect_ratio((0, 600)), 1.0);
        assert!((aspect_ratio((1280, 720)) - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn camera_starts_in_front_at_orbit_radius() {
        let params = Scene::new(4).assemble(0.0, (1280, 720));
        assert!(params.camera_pos.x.abs() < 1e-4);
        assert!((params.camera_pos.y - CAMERA_HEIGHT).abs() < 1e-4);
        assert!((params.camera_pos.z - CAMERA_RADIUS).abs() < 1e-4);
    }

    #[test]
    fn camera_position_matches_inverse_view_for_all_times() {
        let scene = Scene::new(4);
        for t in [0.0, 1.7, 13.42] {
            let params = scene.assemble(t, (1024, 768));
            let expected = Vec3::new(
                CAMERA_RADIUS * (CAMERA_ORBIT_SPEED * t).sin(),
                CAMERA_HEIGHT,
                CAMERA_RADIUS * (CAMERA_ORBIT_SPEED * t).cos(),
            );
            assert!((params.camera_pos - expected).length() < 1e-3);
        }
    }

    #[test]
    fn model_is_identity_at_time_zero() {
        let params = Scene::new(4).assemble(0.0, (1280, 720));
        let p = params.model.transform_point3(Vec3::new(1.0, 2.0, 3.0));
        assert!((p - Vec3::new(1.0, 2.0, 3.0)).length() < 1e-6);
    }

    #[test]
    fn light_count_is_configurable() {
        assert_eq!(Scene::new(2).assemble(0.5, (640, 480)).point_lights.len(), 2);
        assert_eq!(Scene::new(7).assemble(0.5, (640, 480)).point_lights.len(), 7);
    }

    #[test]
    fn zero_height_viewport_produces_finite_projection() {
        let params = Scene::new(4).assemble(3.0, (1280, 0));
        for col in 0..4 {
            let c = params.projection.col(col);
            assert!(c.x.is_finite() && c.y.is_finite() && c.z.is_finite() && c.w.is_finite());
        }
    }
}
