use std::io::{self, Write};

use crate::system::PendulumSystem;

/// Write every member's positions to CSV, one row per time sample.
///
/// Columns: time, then per member `i`:
///   single: p{i}_x, p{i}_y
///   double: p{i}_x1, p{i}_x2, p{i}_y1, p{i}_y2
pub fn write_positions<W: Write>(writer: &mut W, system: &PendulumSystem) -> io::Result<()> {
    let suffixes: &[&str] = if system.has_double() {
        &["x1", "x2", "y1", "y2"]
    } else {
        &["x", "y"]
    };

    let mut header = vec!["time".to_string()];
    for i in 0..system.len() {
        header.extend(suffixes.iter().map(|s| format!("p{i}_{s}")));
    }
    writeln!(writer, "{}", header.join(","))?;

    let times = system.time_grid();
    for (row, t) in times.iter().enumerate() {
        write!(writer, "{t:.6}")?;
        for pos in system.positions() {
            for col in 0..pos.ncols() {
                write!(writer, ",{:.6}", pos[(row, col)])?;
            }
        }
        writeln!(writer)?;
    }

    Ok(())
}

/// Write (time, theta, omega) rows of a phase-space view.
pub fn write_phase_space<W: Write>(
    writer: &mut W,
    times: &[f64],
    phase: &[[f64; 2]],
) -> io::Result<()> {
    writeln!(writer, "time,theta,omega")?;
    for (t, [theta, omega]) in times.iter().zip(phase) {
        writeln!(writer, "{t:.6},{theta:.6},{omega:.6}")?;
    }
    Ok(())
}

/// Write positions to a CSV file at the given path.
pub fn write_positions_file(path: &str, system: &PendulumSystem) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_positions(&mut file, system)
}

/// Write a phase-space view to a CSV file at the given path.
pub fn write_phase_space_file(path: &str, times: &[f64], phase: &[[f64; 2]]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_phase_space(&mut file, times, phase)
}
