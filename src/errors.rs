use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    // Configuration errors
    #[error("Invalid domain boundaries [{lower}, {upper}]: bounds must be finite with upper > lower")]
    InvalidDomain { lower: f64, upper: f64 },

    #[error("Invalid time step {value}: must be finite and positive")]
    InvalidTimeStep { value: f64 },

    #[error("Invalid minimum distance {value}: must be finite and positive")]
    InvalidMinimumDistance { value: f64 },

    #[error("Invalid cutoff factor {value}: must be finite and positive")]
    InvalidCutoffFactor { value: f64 },

    #[error("Invalid cell width {value}: must be finite and positive")]
    InvalidCellWidth { value: f64 },

    #[error("Cell grid too large: {cells_per_axis} cells per axis, at most {max_cells} cells allowed")]
    GridTooLarge {
        cells_per_axis: usize,
        max_cells: usize,
    },

    #[error("Invalid potential depth {value}: must be finite and positive")]
    InvalidPotentialDepth { value: f64 },

    #[error("Invalid particle mass {value}: must be finite and positive")]
    InvalidMass { value: f64 },

    #[error("Invalid target kinetic energy {value}: must be finite and non-negative")]
    InvalidTargetEnergy { value: f64 },

    #[error("Particle count mismatch: expected {expected}, found {found}")]
    ParticleCountMismatch { expected: usize, found: usize },

    // Output errors
    #[error("Failed to write output file '{}': {source}", path.display())]
    OutputFileError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_value() {
        let err = SimError::InvalidDomain {
            lower: 1.0,
            upper: -1.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("[1, -1]"), "{msg}");

        let err = SimError::ParticleCountMismatch {
            expected: 4,
            found: 3,
        };
        assert_eq!(
            err.to_string(),
            "Particle count mismatch: expected 4, found 3"
        );
    }

    #[test]
    fn output_error_keeps_io_source() {
        use std::error::Error as _;

        let err = SimError::OutputFileError {
            path: PathBuf::from("bin/simulation.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("bin/simulation.txt"));
        assert!(err.source().is_some());
    }
}
