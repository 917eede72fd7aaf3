//! The hero's 3D text scene: scene description, orbit camera and the
//! projection used to draw extruded text on a 2D canvas.

use std::f64::consts::PI;

use glam::{DMat4, DVec3};

/// Keeps the orbit camera off the poles, where "up" is undefined.
const POLAR_EPSILON: f64 = 1e-3;
const FAR_PLANE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: DVec3,
    pub intensity: f64,
}

/// Static description of the hero scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSpec {
    pub camera_position: DVec3,
    /// Vertical field of view in degrees
    pub fov_deg: f64,
    pub near: f64,
    pub ambient_intensity: f64,
    pub point_light: PointLight,
    pub text: String,
    /// Em size of the text in world units
    pub text_size: f64,
    /// Extrusion depth in world units
    pub text_depth: f64,
    pub curve_segments: u32,
    pub enable_zoom: bool,
}

impl Default for SceneSpec {
    fn default() -> Self {
        Self::with_label("Freelancer")
    }
}

/// One depth slice of the extruded text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextSlice {
    pub z: f64,
    /// Object-space normal used for coloring
    pub normal: DVec3,
}

impl SceneSpec {
    pub fn with_label(label: &str) -> Self {
        Self {
            camera_position: DVec3::new(0.0, 0.0, 5.0),
            fov_deg: 75.0,
            near: 0.1,
            ambient_intensity: 0.5,
            point_light: PointLight {
                position: DVec3::new(10.0, 10.0, 10.0),
                intensity: 1.0,
            },
            text: label.to_string(),
            text_size: 0.5,
            text_depth: 0.2,
            curve_segments: 12,
            enable_zoom: false,
        }
    }

    pub fn orbit_controls(&self) -> OrbitControls {
        OrbitControls::from_position(self.camera_position, self.fov_deg, self.near, self.enable_zoom)
    }

    /// Slices from back face to front face, centered on z = 0. The back and
    /// front faces carry the face normals, inner slices stand in for the sides.
    pub fn slices(&self) -> Vec<TextSlice> {
        let count = self.curve_segments.max(2) as usize;
        let half = self.text_depth / 2.0;
        (0..count)
            .map(|i| {
                let t = i as f64 / (count - 1) as f64;
                let normal = if i == 0 {
                    DVec3::new(0.0, 0.0, -1.0)
                } else if i == count - 1 {
                    DVec3::new(0.0, 0.0, 1.0)
                } else {
                    DVec3::Y
                };
                TextSlice {
                    z: -half + t * self.text_depth,
                    normal,
                }
            })
            .collect()
    }
}

/// Pointer-driven orbit around the origin. Zoom can be switched off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitControls {
    pub radius: f64,
    /// Rotation around the y axis, 0 looks down -z
    pub azimuth: f64,
    /// Angle from +y, in [ε, π-ε]
    pub polar: f64,
    pub rotate_speed: f64,
    pub enable_zoom: bool,
    pub fov_deg: f64,
    pub near: f64,
}

impl OrbitControls {
    pub fn from_position(position: DVec3, fov_deg: f64, near: f64, enable_zoom: bool) -> Self {
        let radius = position.length();
        let polar = if radius == 0.0 {
            PI / 2.0
        } else {
            (position.y / radius).clamp(-1.0, 1.0).acos()
        };
        Self {
            radius,
            azimuth: position.x.atan2(position.z),
            polar: clamp_polar(polar),
            rotate_speed: 1.0,
            enable_zoom,
            fov_deg,
            near,
        }
    }

    /// Apply a pointer drag of `(dx, dy)` pixels on a viewport `height` pixels tall.
    pub fn rotate_by_pixels(&mut self, dx: f64, dy: f64, height: f64) {
        if height <= 0.0 {
            return;
        }
        self.azimuth -= 2.0 * PI * dx / height * self.rotate_speed;
        self.polar = clamp_polar(self.polar - 2.0 * PI * dy / height * self.rotate_speed);
    }

    /// Scale the orbit radius. Returns false when zoom is disabled.
    pub fn zoom(&mut self, factor: f64) -> bool {
        if !self.enable_zoom || factor <= 0.0 {
            return false;
        }
        self.radius = (self.radius * factor).max(self.near * 2.0);
        true
    }

    pub fn position(&self) -> DVec3 {
        let sin_polar = self.polar.sin();
        DVec3::new(
            self.radius * sin_polar * self.azimuth.sin(),
            self.radius * self.polar.cos(),
            self.radius * sin_polar * self.azimuth.cos(),
        )
    }

    pub fn camera(&self, aspect: f64) -> Camera {
        Camera::look_at_origin(self.position(), self.fov_deg, aspect, self.near)
    }
}

fn clamp_polar(polar: f64) -> f64 {
    polar.clamp(POLAR_EPSILON, PI - POLAR_EPSILON)
}

/// A point mapped to viewport pixels, y pointing down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    /// Distance along the view direction
    pub depth: f64,
}

/// 2D affine transform in canvas `setTransform(a, b, c, d, e, f)` order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Affine {
    /// Pre-scale the linear part, i.e. `self * scale(s)`.
    pub fn scaled(&self, s: f64) -> Affine {
        Affine {
            a: self.a * s,
            b: self.b * s,
            c: self.c * s,
            d: self.d * s,
            ..*self
        }
    }
}

/// Perspective camera looking at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: DVec3,
    pub view: DMat4,
    pub projection: DMat4,
    pub near: f64,
}

impl Camera {
    pub fn look_at_origin(position: DVec3, fov_deg: f64, aspect: f64, near: f64) -> Self {
        Self {
            position,
            view: DMat4::look_at_rh(position, DVec3::ZERO, DVec3::Y),
            projection: DMat4::perspective_rh(fov_deg.to_radians(), aspect, near, FAR_PLANE),
            near,
        }
    }

    pub fn project(&self, point: DVec3, width: f64, height: f64) -> Option<Projected> {
        let view_pos = self.view.transform_point3(point);
        // View space looks down -z
        let depth = -view_pos.z;
        if depth <= self.near {
            return None;
        }
        let ndc = self.projection.project_point3(view_pos);
        Some(Projected {
            x: (ndc.x + 1.0) / 2.0 * width,
            y: (1.0 - ndc.y) / 2.0 * height,
            depth,
        })
    }

    /// Map the plane `z = const` to the screen, linearized at its center.
    /// Plane coordinates use canvas orientation (y down).
    pub fn plane_transform(&self, z: f64, width: f64, height: f64) -> Option<(Affine, f64)> {
        let origin = self.project(DVec3::new(0.0, 0.0, z), width, height)?;
        let x_axis = self.project(DVec3::new(1.0, 0.0, z), width, height)?;
        let y_axis = self.project(DVec3::new(0.0, -1.0, z), width, height)?;
        let affine = Affine {
            a: x_axis.x - origin.x,
            b: x_axis.y - origin.y,
            c: y_axis.x - origin.x,
            d: y_axis.y - origin.y,
            e: origin.x,
            f: origin.y,
        };
        Some((affine, origin.depth))
    }

    /// World-space normal expressed in view space (+z faces the camera).
    pub fn view_normal(&self, normal: DVec3) -> DVec3 {
        self.view.transform_vector3(normal)
    }
}

/// Normal-material shading: each component of the view-space normal
/// mapped from [-1, 1] to [0, 255].
pub fn normal_color(view_normal: DVec3) -> (u8, u8, u8) {
    let channel = |v: f64| ((v.clamp(-1.0, 1.0) * 0.5 + 0.5) * 255.0).round() as u8;
    (channel(view_normal.x), channel(view_normal.y), channel(view_normal.z))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_default_scene() {
        let spec = SceneSpec::default();
        assert_eq!(spec.text, "Freelancer");
        assert_eq!(spec.camera_position, DVec3::new(0.0, 0.0, 5.0));
        assert_eq!(spec.ambient_intensity, 0.5);
        assert_eq!(spec.point_light.position, DVec3::new(10.0, 10.0, 10.0));
        assert_eq!(spec.curve_segments, 12);
        assert!(!spec.enable_zoom);
    }

    #[test]
    fn test_orbit_starts_at_camera_position() {
        let controls = SceneSpec::default().orbit_controls();
        assert!(close(controls.radius, 5.0));
        assert!(close(controls.azimuth, 0.0));
        assert!(close(controls.polar, PI / 2.0));

        let pos = controls.position();
        assert!(close(pos.x, 0.0) && close(pos.y, 0.0) && close(pos.z, 5.0));
    }

    #[test]
    fn test_horizontal_drag_rotates_around_y() {
        let mut controls = SceneSpec::default().orbit_controls();
        // A quarter of the viewport height is a quarter turn
        controls.rotate_by_pixels(100.0, 0.0, 400.0);
        assert!(close(controls.azimuth, -PI / 2.0));

        let pos = controls.position();
        assert!(close(pos.x, -5.0));
        assert!(close(pos.z, 0.0));
        assert!(close(pos.length(), 5.0));
    }

    #[test]
    fn test_vertical_drag_is_clamped_at_poles() {
        let mut controls = SceneSpec::default().orbit_controls();
        controls.rotate_by_pixels(0.0, 10_000.0, 400.0);
        assert!(close(controls.polar, POLAR_EPSILON));

        controls.rotate_by_pixels(0.0, -10_000.0, 400.0);
        assert!(close(controls.polar, PI - POLAR_EPSILON));
    }

    #[test]
    fn test_zero_height_viewport_is_ignored() {
        let mut controls = SceneSpec::default().orbit_controls();
        let before = controls;
        controls.rotate_by_pixels(50.0, 50.0, 0.0);
        assert_eq!(controls, before);
    }

    #[test]
    fn test_zoom_disabled() {
        let mut controls = SceneSpec::default().orbit_controls();
        assert!(!controls.zoom(0.5));
        assert!(close(controls.radius, 5.0));

        controls.enable_zoom = true;
        assert!(controls.zoom(0.5));
        assert!(close(controls.radius, 2.5));
    }

    #[test]
    fn test_origin_projects_to_viewport_center() {
        let camera = SceneSpec::default().orbit_controls().camera(600.0 / 400.0);
        let p = camera.project(DVec3::new(0.0, 0.0, 0.0), 600.0, 400.0).unwrap();
        assert!(close(p.x, 300.0));
        assert!(close(p.y, 200.0));
        assert!(close(p.depth, 5.0));
    }

    #[test]
    fn test_points_behind_camera_are_culled() {
        let camera = SceneSpec::default().orbit_controls().camera(1.0);
        assert!(camera.project(DVec3::new(0.0, 0.0, 6.0), 100.0, 100.0).is_none());
    }

    #[test]
    fn test_front_view_plane_transform_is_uniform_scale() {
        let camera = SceneSpec::default().orbit_controls().camera(600.0 / 400.0);
        let (affine, depth) = camera.plane_transform(0.0, 600.0, 400.0).unwrap();
        assert!(affine.a > 0.0);
        assert!(close(affine.a, affine.d));
        assert!(close(affine.b, 0.0) && close(affine.c, 0.0));
        assert!(close(affine.e, 300.0) && close(affine.f, 200.0));
        assert!(close(depth, 5.0));

        let scaled = affine.scaled(0.5);
        assert!(close(scaled.a, affine.a * 0.5));
        assert_eq!(scaled.e, affine.e);
    }

    #[test]
    fn test_slices_span_depth() {
        let spec = SceneSpec::default();
        let slices = spec.slices();
        assert_eq!(slices.len(), 12);
        assert!(close(slices[0].z, -0.1));
        assert!(close(slices[11].z, 0.1));
        assert_eq!(slices[0].normal, DVec3::new(0.0, 0.0, -1.0));
        assert_eq!(slices[11].normal, DVec3::new(0.0, 0.0, 1.0));
        assert_eq!(slices[5].normal, DVec3::Y);
    }

    #[test]
    fn test_normal_color_of_front_face() {
        let camera = SceneSpec::default().orbit_controls().camera(1.0);
        let view = camera.view_normal(DVec3::new(0.0, 0.0, 1.0));
        assert!(close(view.z, 1.0));
        let (r, g, b) = normal_color(view);
        // x and y sit on the 127/128 boundary, so allow either
        assert!((127..=128).contains(&r));
        assert!((127..=128).contains(&g));
        assert_eq!(b, 255);
    }
}
