use crate::math::Vec3;

/// State of one particle at the end of a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleRecord {
    pub step: usize,
    pub id: usize,
    pub position: Vec3,
    pub velocity: Vec3,
}

/// Integrals of motion at the end of a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegralRecord {
    pub step: usize,
    pub total_energy: f64,
    pub linear_momentum: Vec3,
    pub angular_momentum: Vec3,
}
