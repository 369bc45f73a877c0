use na::Vector3;

/// 3D vector used for positions, velocities and accelerations.
pub type Vec3 = Vector3<f64>;

/// Relative deviation |value - reference| / |reference|.
///
/// Falls back to the absolute deviation when the reference is (close to) zero,
/// so a vanishing baseline does not turn into an infinite drift.
pub fn relative_drift(value: f64, reference: f64) -> f64 {
    let deviation = (value - reference).abs();
    if reference.abs() > 1e-12 {
        deviation / reference.abs()
    } else {
        deviation
    }
}
