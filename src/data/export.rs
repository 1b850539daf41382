//! Cost-curve export for plotting.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes a training cost trace as a gnuplot-ready `.dat` file: one
/// comment header line, then one `iteration cost` pair per line.
pub fn write_costs<P: AsRef<Path>>(path: P, costs: &[f64]) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_costs_to(&mut writer, costs)?;
    writer.flush()
}

/// Writer-generic core of [`write_costs`].
pub fn write_costs_to<W: Write>(writer: &mut W, costs: &[f64]) -> io::Result<()> {
    writeln!(writer, "# Iteration / Costs")?;
    for (iteration, cost) in costs.iter().enumerate() {
        writeln!(writer, "{} {:.6}", iteration, cost)?;
    }
    Ok(())
}
