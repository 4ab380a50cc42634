//! Math utilities and types
//!
//! Provides the vector and matrix types used by components and renderers.

pub use nalgebra::{Matrix4, Rotation3, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Math utility functions
pub mod utils {
    use super::{Mat4, Rotation3, Vec3};

    /// Build a TRS matrix from a position, Euler rotation (radians, roll/pitch/yaw
    /// about X/Y/Z) and per-axis scale.
    pub fn trs_matrix(position: &Vec3, rotation: &Vec3, scale: &Vec3) -> Mat4 {
        Mat4::new_translation(position)
            * Rotation3::from_euler_angles(rotation.x, rotation.y, rotation.z).to_homogeneous()
            * Mat4::new_nonuniform_scaling(scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_trs_identity() {
        let matrix = utils::trs_matrix(&Vec3::zeros(), &Vec3::zeros(), &Vec3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(matrix, Mat4::identity(), epsilon = 1e-6);
    }

    #[test]
    fn test_trs_translation_and_scale() {
        let matrix = utils::trs_matrix(
            &Vec3::new(1.0, 2.0, 3.0),
            &Vec3::zeros(),
            &Vec3::new(2.0, 2.0, 2.0),
        );
        let point = matrix.transform_point(&nalgebra::Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(point.coords, Vec3::new(3.0, 2.0, 3.0), epsilon = 1e-6);
    }
}
