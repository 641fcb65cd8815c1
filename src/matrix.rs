//! Dense and sparse output storage for the bag encoders.
//!
//! FOFE and bag-of-words build each output row into a scratch buffer and hand
//! it to a `RowSink`. The sink decides how the row is stored, so both
//! encoders share one accumulation routine regardless of storage kind.

use ndarray::Array2;
use sprs::{CsMat, TriMat};

use crate::error::EncodeResult;

/// Storage backend that receives finished output rows.
pub(crate) trait RowSink {
    /// Store one finished row. `values` has one entry per column.
    fn push_row(&mut self, row: usize, values: &[f64]);

    /// Consume the sink and return the assembled matrix.
    fn finish(self) -> FeatureMatrix;
}

/// Dense `Array2` backed sink.
#[derive(Debug)]
pub(crate) struct DenseSink {
    data: Array2<f64>,
}

impl DenseSink {
    fn new(shape: (usize, usize)) -> Self {
        Self {
            data: Array2::zeros(shape),
        }
    }
}

impl RowSink for DenseSink {
    fn push_row(&mut self, row: usize, values: &[f64]) {
        for (dst, &v) in self.data.row_mut(row).iter_mut().zip(values) {
            *dst = v;
        }
    }

    fn finish(self) -> FeatureMatrix {
        FeatureMatrix::Dense(self.data)
    }
}

/// Triplet-backed sink producing a CSR matrix. Zero entries are not stored.
#[derive(Debug)]
pub(crate) struct SparseSink {
    triplets: TriMat<f64>,
}

impl SparseSink {
    fn new(shape: (usize, usize)) -> Self {
        Self {
            triplets: TriMat::new(shape),
        }
    }
}

impl RowSink for SparseSink {
    fn push_row(&mut self, row: usize, values: &[f64]) {
        for (col, &v) in values.iter().enumerate() {
            if v != 0.0 {
                self.triplets.add_triplet(row, col, v);
            }
        }
    }

    fn finish(self) -> FeatureMatrix {
        FeatureMatrix::Sparse(self.triplets.to_csr())
    }
}

/// Encoder output in either dense or sparse (CSR) form.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureMatrix {
    Dense(Array2<f64>),
    Sparse(CsMat<f64>),
}

impl FeatureMatrix {
    /// `(rows, cols)` of the matrix.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        match self {
            FeatureMatrix::Dense(m) => m.dim(),
            FeatureMatrix::Sparse(m) => m.shape(),
        }
    }

    /// Value at `(row, col)`; absent sparse entries read as 0.
    ///
    /// Returns `None` if the position is out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        let (rows, cols) = self.shape();
        if row >= rows || col >= cols {
            return None;
        }
        match self {
            FeatureMatrix::Dense(m) => Some(m[[row, col]]),
            FeatureMatrix::Sparse(m) => Some(m.get(row, col).copied().unwrap_or(0.0)),
        }
    }

    #[must_use]
    pub fn is_sparse(&self) -> bool {
        matches!(self, FeatureMatrix::Sparse(_))
    }

    /// Dense copy of the matrix.
    #[must_use]
    pub fn to_dense(&self) -> Array2<f64> {
        match self {
            FeatureMatrix::Dense(m) => m.clone(),
            FeatureMatrix::Sparse(m) => m.to_dense(),
        }
    }
}

/// Build a `(rows, cols)` matrix row by row.
///
/// `fill_row` receives the row number and a zeroed scratch buffer of length
/// `cols`. The first error aborts the whole build.
pub(crate) fn build_rows<F>(
    shape: (usize, usize),
    sparse: bool,
    fill_row: F,
) -> EncodeResult<FeatureMatrix>
where
    F: FnMut(usize, &mut [f64]) -> EncodeResult<()>,
{
    if sparse {
        fill(SparseSink::new(shape), shape, fill_row)
    } else {
        fill(DenseSink::new(shape), shape, fill_row)
    }
}

fn fill<K, F>(mut sink: K, shape: (usize, usize), mut fill_row: F) -> EncodeResult<FeatureMatrix>
where
    K: RowSink,
    F: FnMut(usize, &mut [f64]) -> EncodeResult<()>,
{
    let mut buf = vec![0.0; shape.1];
    for row in 0..shape.0 {
        buf.iter_mut().for_each(|v| *v = 0.0);
        fill_row(row, &mut buf)?;
        sink.push_row(row, &buf);
    }
    Ok(sink.finish())
}
