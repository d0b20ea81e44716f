//! Text and numeric-table renderings of a diagram.

use ndarray::Array2;
use std::fmt::Write as _;
use std::io;

use super::{Interval, PersistenceDiagram};

/// Sentinel written in place of an infinite death or a missing endpoint
pub const NO_DEATH: f64 = -1.0;

fn death_or_sentinel(interval: &Interval) -> f64 {
    if interval.is_essential() {
        NO_DEATH
    } else {
        interval.death
    }
}

fn endpoints_or_sentinel(endpoints: Option<(usize, usize)>) -> [f64; 2] {
    match endpoints {
        Some((u, v)) => [u as f64, v as f64],
        None => [NO_DEATH, NO_DEATH],
    }
}

impl PersistenceDiagram {
    /// `birth\tdeath` per interval of dimension d, `-1` for infinite deaths
    pub fn to_text(&self, d: usize) -> String {
        let mut out = String::new();
        for interval in self.dim(d) {
            if interval.is_essential() {
                let _ = writeln!(out, "{}\t{}", interval.birth, NO_DEATH);
            } else {
                let _ = writeln!(out, "{}\t{}", interval.birth, interval.death);
            }
        }
        out
    }

    /// Stream `to_text(d)` into a writer
    pub fn write_text<W: io::Write>(&self, d: usize, mut writer: W) -> io::Result<()> {
        writer.write_all(self.to_text(d).as_bytes())
    }

    /// Fixed-width table of the intervals of dimension d
    ///
    /// Columns:
    /// - d = 0: birth, death, death_u, death_v
    /// - d = 1: birth, death, birth_u, birth_v, death_u, death_v
    /// - otherwise: birth, death
    ///
    /// Infinite deaths and missing endpoints are written as `-1`.
    pub fn to_table(&self, d: usize) -> Array2<f64> {
        let intervals = self.dim(d);
        let width = match d {
            0 => 4,
            1 => 6,
            _ => 2,
        };

        let mut table = Array2::<f64>::zeros((intervals.len(), width));
        for (row, interval) in intervals.iter().enumerate() {
            let mut values = vec![interval.birth, death_or_sentinel(interval)];
            match d {
                0 => values.extend(endpoints_or_sentinel(interval.death_edge)),
                1 => {
                    values.extend(endpoints_or_sentinel(interval.birth_edge));
                    values.extend(endpoints_or_sentinel(interval.death_edge));
                }
                _ => {}
            }
            for (col, value) in values.into_iter().enumerate() {
                table[[row, col]] = value;
            }
        }
        table
    }
}
