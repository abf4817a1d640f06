use glam::{Mat4, Vec3};

use crate::scene::transform::Transform;
use crate::settings::ViewSettings;

/// A perspective camera.
#[derive(Debug, Clone)]
pub struct Camera {
    pub name: String,
    pub transform: Transform,

    /// Vertical field of view in radians.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,

    pub(crate) view_matrix: Mat4,
    pub(crate) projection_matrix: Mat4,
}

impl Camera {
    /// `fov` is given in degrees.
    #[must_use]
    pub fn new_perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut cam = Self {
            name: "Camera".to_string(),
            transform: Transform::new(),
            fov: fov.to_radians(),
            aspect,
            near,
            far,
            view_matrix: Mat4::IDENTITY,
            projection_matrix: Mat4::IDENTITY,
        };

        cam.update_projection_matrix();
        cam
    }

    #[must_use]
    pub fn from_view(view: &ViewSettings) -> Self {
        Self::new_perspective(view.fov_degrees, view.aspect(), view.near, view.far)
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
            self.update_projection_matrix();
        }
    }

    pub fn update_projection_matrix(&mut self) {
        self.projection_matrix = Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far);
    }

    /// Refreshes the view matrix from the transform.
    pub fn update_view_matrix(&mut self) {
        self.transform.update_local_matrix();
        self.view_matrix = self.transform.local_matrix_as_mat4().inverse();
    }

    /// Aims the camera at `target` with +Y up. Returns the aimed rotation.
    pub fn look_at(&mut self, target: Vec3) -> Vec3 {
        self.transform.look_at(target, Vec3::Y)
    }

    #[inline]
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.view_matrix
    }

    #[inline]
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection_matrix
    }

    #[must_use]
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }
}
