//! Tilt derivation: orient an upright object to the terrain under it.

use glam::Vec3;

use topshot_core::types::Tilt;

/// Angle/axis rotation aligning +Y with the slope described by `normal`.
///
/// angle = `acos(Ny / |N|)`, axis = `(-Nz / |N|, 0, Nx / |N|)`.
/// This is not the minimal-rotation formula; renderers rotate by `-angle`.
pub fn tilt_from_normal(normal: Vec3) -> Tilt {
    let magnitude = normal.length();
    if magnitude == 0.0 || !magnitude.is_finite() {
        return Tilt::default();
    }
    Tilt {
        angle: (normal.y / magnitude).clamp(-1.0, 1.0).acos(),
        axis: Vec3::new(-normal.z / magnitude, 0.0, normal.x / magnitude),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_normal_has_no_tilt() {
        let tilt = tilt_from_normal(Vec3::Y * 3.0);
        assert_eq!(tilt.angle, 0.0);
        assert_eq!(tilt.axis, Vec3::ZERO);
    }

    #[test]
    fn test_slope_toward_negative_x() {
        let tilt = tilt_from_normal(Vec3::new(-1.0, 1.0, 0.0));
        assert!((tilt.degrees() - 45.0).abs() < 1e-4);
        let s = std::f32::consts::FRAC_1_SQRT_2;
        assert!((tilt.axis - Vec3::new(0.0, 0.0, -s)).length() < 1e-6);
    }

    #[test]
    fn test_slope_toward_positive_z() {
        let tilt = tilt_from_normal(Vec3::new(0.0, 1.0, 1.0));
        let s = std::f32::consts::FRAC_1_SQRT_2;
        assert!((tilt.axis - Vec3::new(-s, 0.0, 0.0)).length() < 1e-6);
        assert!((tilt.angle - std::f32::consts::FRAC_PI_4).abs() < 1e-6);
    }

    #[test]
    fn test_zero_normal_is_untilted() {
        assert_eq!(tilt_from_normal(Vec3::ZERO), Tilt::default());
    }
}
