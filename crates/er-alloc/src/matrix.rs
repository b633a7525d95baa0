//! Dense row-major `n × R` matrix of unit counts.
//!
//! Row `i` belongs to `IncidentId(i)`; column `r` to `ResourceId(r)`.  A flat
//! `Vec` keeps each incident's row contiguous, which is the access pattern of
//! the safety scan (one row at a time, every column).

use er_core::{IncidentId, Units};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnitMatrix {
    rows: usize,
    cols: usize,
    data: Vec<Units>,
}

impl UnitMatrix {
    /// An all-zero matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self { rows, cols, data: vec![0; rows * cols] }
    }

    /// Build from row vectors.  Returns `None` if any row is not `cols` wide.
    pub fn from_rows(rows: &[Vec<Units>], cols: usize) -> Option<Self> {
        if rows.iter().any(|r| r.len() != cols) {
            return None;
        }
        Some(Self {
            rows: rows.len(),
            cols,
            data: rows.concat(),
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn row(&self, i: usize) -> &[Units] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [Units] {
        &mut self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Row for an incident id.
    #[inline]
    pub fn incident(&self, id: IncidentId) -> &[Units] {
        self.row(id.index())
    }

    /// Sum of each column.
    pub fn column_sums(&self) -> Vec<u64> {
        let mut sums = vec![0u64; self.cols];
        for i in 0..self.rows {
            for (s, &v) in sums.iter_mut().zip(self.row(i)) {
                *s += v as u64;
            }
        }
        sums
    }
}
