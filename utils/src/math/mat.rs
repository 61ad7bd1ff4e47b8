use glam::{Mat3, Mat4, Quat, Vec3};

/// Defines utility functions intended for 4x4 matrices
pub trait Mat4Utils {
    /// Model matrix that first rotates by `rotation` and then translates to `pos`.
    fn from_pose(rotation: Quat, pos: Vec3) -> Self;
    fn to_4x4(self) -> [[f32; 4]; 4];
}

impl Mat4Utils for Mat4 {
    fn from_pose(rotation: Quat, pos: Vec3) -> Self {
        Mat4::from_rotation_translation(rotation, pos)
    }

    fn to_4x4(self) -> [[f32; 4]; 4] {
        [
            self.x_axis.into(),
            self.y_axis.into(),
            self.z_axis.into(),
            self.w_axis.into(),
        ]
    }
}

/// Defines utility functions intended for 3x3 matrices
pub trait Mat3Utils {
    /// Checks that the columns are unit length and pairwise perpendicular within `eps`.
    fn is_orthonormal(&self, eps: f32) -> bool;
    fn to_3x3(self) -> [[f32; 3]; 3];
}

impl Mat3Utils for Mat3 {
    fn is_orthonormal(&self, eps: f32) -> bool {
        let (x, y, z) = (self.x_axis, self.y_axis, self.z_axis);
        (x.length() - 1.0).abs() < eps
            && (y.length() - 1.0).abs() < eps
            && (z.length() - 1.0).abs() < eps
            && x.dot(y).abs() < eps
            && y.dot(z).abs() < eps
            && z.dot(x).abs() < eps
    }

    fn to_3x3(self) -> [[f32; 3]; 3] {
        [self.x_axis.into(), self.y_axis.into(), self.z_axis.into()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pose_matrix_is_column_major() {
        let m = Mat4::from_pose(Quat::IDENTITY, Vec3::new(1.0, 2.0, 3.0)).to_4x4();
        assert_eq!(m[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(m[0], [1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn rotation_is_orthonormal() {
        let m = Mat3::from_quat(Quat::from_rotation_y(0.7) * Quat::from_rotation_x(0.3));
        assert!(m.is_orthonormal(1e-5));
        assert!(!Mat3::from_diagonal(Vec3::new(2.0, 1.0, 1.0)).is_orthonormal(1e-5));
        assert_eq!(Mat3::IDENTITY.to_3x3()[1], [0.0, 1.0, 0.0]);
    }
}
