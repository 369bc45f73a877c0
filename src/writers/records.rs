use std::{
    fs::{self, File},
    io::{BufWriter, Result, Write},
    path::Path,
};

use crate::{
    errors::SimError,
    records::{IntegralRecord, ParticleRecord},
};

/// Plain-text writer for buffered step records.
///
/// Particle files start with `n_particles n_steps` followed by one
/// `x y z vx vy vz` line per record. Integral files start with `n_steps dt`
/// followed by one `E px py pz Lx Ly Lz` line per step.
pub struct RecordWriter<W: Write> {
    out: W,
}

impl RecordWriter<BufWriter<File>> {
    /// Creates (or truncates) `path`, creating missing parent directories.
    pub fn create(path: &Path) -> std::result::Result<Self, SimError> {
        let output_error = |source| SimError::OutputFileError {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(output_error)?;
        }
        let file = File::create(path).map_err(output_error)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> RecordWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn write_particle_header(&mut self, n_particles: usize, n_steps: usize) -> Result<()> {
        writeln!(self.out, "{} {}", n_particles, n_steps)
    }

    pub fn write_particle_records(&mut self, records: &[ParticleRecord]) -> Result<()> {
        for record in records {
            let (r, v) = (&record.position, &record.velocity);
            writeln!(
                self.out,
                "{} {} {} {} {} {}",
                r[0], r[1], r[2], v[0], v[1], v[2]
            )?;
        }
        Ok(())
    }

    pub fn write_integral_header(&mut self, n_steps: usize, dt: f64) -> Result<()> {
        writeln!(self.out, "{} {}", n_steps, dt)
    }

    pub fn write_integral_records(&mut self, records: &[IntegralRecord]) -> Result<()> {
        for record in records {
            let (p, l) = (&record.linear_momentum, &record.angular_momentum);
            writeln!(
                self.out,
                "{} {} {} {} {} {} {}",
                record.total_energy, p[0], p[1], p[2], l[0], l[1], l[2]
            )?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec3;

    #[test]
    fn particle_file_layout() {
        let mut writer = RecordWriter::new(Vec::new());
        writer.write_particle_header(2, 1).unwrap();
        writer
            .write_particle_records(&[
                ParticleRecord {
                    step: 1,
                    id: 0,
                    position: Vec3::new(0.5, -0.25, 1.0),
                    velocity: Vec3::new(2.0, 0.0, -1.5),
                },
                ParticleRecord {
                    step: 1,
                    id: 1,
                    position: Vec3::zeros(),
                    velocity: Vec3::new(0.125, 3.0, 0.0),
                },
            ])
            .unwrap();

        let text = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(text, "2 1\n0.5 -0.25 1 2 0 -1.5\n0 0 0 0.125 3 0\n");
    }

    #[test]
    fn integral_file_layout() {
        let mut writer = RecordWriter::new(Vec::new());
        writer.write_integral_header(3, 0.0001).unwrap();
        writer
            .write_integral_records(&[IntegralRecord {
                step: 1,
                total_energy: -12.5,
                linear_momentum: Vec3::new(0.0, 1.0, 0.0),
                angular_momentum: Vec3::new(0.0, 0.0, -2.0),
            }])
            .unwrap();

        let text = String::from_utf8(writer.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["3 0.0001", "-12.5 0 1 0 0 0 -2"]);
    }

    #[test]
    fn create_makes_parent_directories() {
        let dir = std::env::temp_dir().join(format!("cellmd-writer-{}", std::process::id()));
        let path = dir.join("nested").join("integrals.txt");

        let mut writer = RecordWriter::create(&path).unwrap();
        writer.write_integral_header(0, 0.5).unwrap();
        writer.flush().unwrap();
        drop(writer);

        assert_eq!(fs::read_to_string(&path).unwrap(), "0 0.5\n");
        fs::remove_dir_all(&dir).unwrap();
    }
}
