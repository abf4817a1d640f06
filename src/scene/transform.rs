use glam::{Affine3A, EulerRot, Mat3, Mat4, Quat, Vec3};

/// Transform component.
///
/// Position, Euler rotation (radians, XYZ order) and scale, plus a cached
/// local matrix with dirty checking. Rotation is stored as Euler angles
/// because animated orientation offsets are added per axis.
#[derive(Debug, Clone)]
pub struct Transform {
    pub position: Vec3,
    /// Euler angles in radians, XYZ order.
    pub rotation: Vec3,
    pub scale: Vec3,

    pub(crate) local_matrix: Affine3A,

    last_position: Vec3,
    last_rotation: Vec3,
    last_scale: Vec3,
    force_update: bool,
}

impl Transform {
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,

            local_matrix: Affine3A::IDENTITY,

            last_position: Vec3::ZERO,
            last_rotation: Vec3::ZERO,
            last_scale: Vec3::ONE,
            force_update: true,
        }
    }

    /// Recomputes the local matrix if any component changed.
    /// Returns whether the matrix was rebuilt.
    pub fn update_local_matrix(&mut self) -> bool {
        let changed = self.position != self.last_position
            || self.rotation != self.last_rotation
            || self.scale != self.last_scale
            || self.force_update;

        if changed {
            self.local_matrix = Affine3A::from_scale_rotation_translation(
                self.scale,
                self.quaternion(),
                self.position,
            );

            self.last_position = self.position;
            self.last_rotation = self.rotation;
            self.last_scale = self.scale;
            self.force_update = false;
        }

        changed
    }

    /// Rotation as a quaternion.
    #[must_use]
    pub fn quaternion(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    pub fn set_quaternion(&mut self, q: Quat) {
        let (x, y, z) = q.to_euler(EulerRot::XYZ);
        self.rotation = Vec3::new(x, y, z);
    }

    #[inline]
    #[must_use]
    pub fn local_matrix(&self) -> &Affine3A {
        &self.local_matrix
    }

    #[inline]
    #[must_use]
    pub fn local_matrix_as_mat4(&self) -> Mat4 {
        Mat4::from(self.local_matrix)
    }

    /// Rotates so that the local -Z axis points at `target` and returns the
    /// new Euler rotation.
    ///
    /// Always produces a rotation: a target at the current position gives the
    /// identity basis, and a target straight along `up` nudges the view axis
    /// off `up` before building the basis.
    pub fn look_at(&mut self, target: Vec3, up: Vec3) -> Vec3 {
        let mut back = self.position - target;
        if back.length_squared() < 1e-12 {
            back = Vec3::Z;
        }
        back = back.normalize();

        let mut right = up.cross(back);
        if right.length_squared() < 1e-12 {
            if (up.z.abs() - 1.0).abs() < 1e-6 {
                back.x += 1e-4;
            } else {
                back.z += 1e-4;
            }
            back = back.normalize();
            right = up.cross(back);
        }
        let right = right.normalize_or(Vec3::X);
        let new_up = back.cross(right).normalize();

        let rot_mat = Mat3::from_cols(right, new_up, back);
        self.set_quaternion(Quat::from_mat3(&rot_mat));
        self.rotation
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}
