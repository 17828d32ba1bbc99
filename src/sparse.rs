// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
// ---------------------------------------------------------------------------
//! This module defines the compressed sparse row matrix container.
//!
//! Link to [parent module](super)
// ---------------------------------------------------------------------------
// use
use std::fmt;
//
use rustc_hash::FxHashSet;
//
use crate::Error;
use crate::IndexT;
// ---------------------------------------------------------------------------
//
// CsrMatrix
/// A real matrix in compressed sparse row form.
///
/// Invariants:
/// * `indptr[0] == 0` , `indptr[nrow] == nnz` , and `indptr` is
///   non-decreasing;
/// * `indices` and `values` both have length `nnz` ;
/// * within each row the column indices are distinct and less than
///   `ncol` (they need not be sorted; derivative rows carry them in
///   discovery order).
///
/// The matrix owns its three arrays; see [CsrMatrix::check] for
/// validating the invariants of an externally constructed matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct CsrMatrix {
    nrow    : usize,
    ncol    : usize,
    indptr  : Vec<usize>,
    indices : Vec<IndexT>,
    values  : Vec<f64>,
}
//
impl CsrMatrix {
    //
    // new
    /// Empty matrix with zero rows and *ncol* columns.
    pub fn new(ncol: usize) -> Self {
        Self {
            nrow    : 0,
            ncol,
            indptr  : vec![0],
            indices : Vec::new(),
            values  : Vec::new(),
        }
    }
    //
    // push_row
    /// Append one row given its column indices and values
    /// (same length, indices less than `ncol` ).
    pub fn push_row(
        &mut self,
        indices : Vec<IndexT> ,
        values  : Vec<f64>    ,
    ) -> Result<(), Error> {
        if indices.len() != values.len() {
            return Err( Error::internal( format!(
                "row with {} indices but {} values",
                indices.len(), values.len(),
            )));
        }
        if let Some(&j) = indices.iter().find( |&&j| (j as usize) >= self.ncol )
        {
            return Err( Error::internal( format!(
                "column index {j} out of bounds for {} columns", self.ncol,
            )));
        }
        self.indices.extend(indices);
        self.values.extend(values);
        self.indptr.push( self.indices.len() );
        self.nrow += 1;
        Ok(())
    }
    //
    // nrow
    pub fn nrow(&self) -> usize {
        self.nrow
    }
    //
    // ncol
    pub fn ncol(&self) -> usize {
        self.ncol
    }
    //
    // nnz
    /// Number of structural non-zeros.
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }
    //
    // indptr
    pub fn indptr(&self) -> &[usize] {
        &self.indptr
    }
    //
    // indices
    pub fn indices(&self) -> &[IndexT] {
        &self.indices
    }
    //
    // values
    pub fn values(&self) -> &[f64] {
        &self.values
    }
    //
    // row
    /// Column indices and values of row *i* .
    pub fn row(&self, i: usize) -> (&[IndexT], &[f64]) {
        let begin = self.indptr[i];
        let end   = self.indptr[i + 1];
        ( &self.indices[begin .. end], &self.values[begin .. end] )
    }
    //
    // check
    /// Verify every invariant listed for [CsrMatrix] ; fails with
    /// [InternalInvariant](crate::Error::InternalInvariant) naming the
    /// first violation found.
    pub fn check(&self) -> Result<(), Error> {
        if self.indptr.len() != self.nrow + 1 {
            return Err( Error::internal( format!(
                "indptr has length {} for {} row(s)",
                self.indptr.len(), self.nrow,
            )));
        }
        if self.indptr[0] != 0 {
            return Err( Error::internal("indptr does not start at 0") );
        }
        if self.indptr[self.nrow] != self.nnz() {
            return Err( Error::internal( format!(
                "indptr ends at {} but nnz is {}",
                self.indptr[self.nrow], self.nnz(),
            )));
        }
        if self.indptr.windows(2).any( |w| w[0] > w[1] ) {
            return Err( Error::internal("indptr is not non-decreasing") );
        }
        if self.values.len() != self.indices.len() {
            return Err( Error::internal( format!(
                "{} indices but {} values",
                self.indices.len(), self.values.len(),
            )));
        }
        let mut row_indices = FxHashSet::default();
        for i in 0 .. self.nrow {
            let (indices, _values) = self.row(i);
            row_indices.clear();
            for &j in indices {
                if (j as usize) >= self.ncol {
                    return Err( Error::internal( format!(
                        "row {i}: column index {j} out of bounds \
                         for {} columns", self.ncol,
                    )));
                }
                if ! row_indices.insert(j) {
                    return Err( Error::internal( format!(
                        "row {i}: column index {j} appears twice",
                    )));
                }
            }
        }
        Ok(())
    }
}
// ---------------------------------------------------------------------------
// Display
//
// Diagnostic dump, one line per row; the format is not a stable
// interface.
impl fmt::Display for CsrMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==========")?;
        writeln!(f, "CSR Matrix")?;
        writeln!(f, "==========")?;
        writeln!(f, "shape = {} x {}", self.nrow, self.ncol)?;
        writeln!(f, "NNZ   = {}", self.nnz())?;
        writeln!(f, "----------")?;
        for i in 0 .. self.nrow {
            let (indices, values) = self.row(i);
            write!(f, "Row {i}:")?;
            for (j, value) in indices.iter().zip(values) {
                write!(f, " ({j}, {value:.3})")?;
            }
            writeln!(f)?;
        }
        write!(f, "==========")
    }
}
// ---------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;
    //
    #[test]
    fn push_row_and_check() {
        let mut csr = CsrMatrix::new(3);
        csr.push_row( vec![2, 0], vec![1.1, 3.3] ).unwrap();
        csr.push_row( vec![],     vec![]         ).unwrap();
        csr.push_row( vec![1],    vec![-0.5]     ).unwrap();
        //
        assert_eq!( csr.nrow(), 3 );
        assert_eq!( csr.nnz(),  3 );
        assert_eq!( csr.indptr(), &[0, 2, 2, 3] );
        assert_eq!( csr.row(1), ( &[][..], &[][..] ) );
        csr.check().unwrap();
    }
    //
    #[test]
    fn push_row_rejects_bad_input() {
        let mut csr = CsrMatrix::new(3);
        assert!( csr.push_row( vec![0], vec![] ).is_err() );
        assert!( csr.push_row( vec![3], vec![1.0] ).is_err() );
    }
    //
    #[test]
    fn check_rejects_duplicate_column() {
        let mut csr = CsrMatrix::new(3);
        csr.push_row( vec![1, 1], vec![1.0, 2.0] ).unwrap();
        assert!( matches!(
            csr.check(), Err( Error::InternalInvariant(_) )
        ));
    }
    //
    #[test]
    fn display_format() {
        let mut csr = CsrMatrix::new(3);
        csr.push_row( vec![2, 0], vec![1.1, 3.3] ).unwrap();
        let text = csr.to_string();
        let expect = "\
==========
CSR Matrix
==========
shape = 1 x 3
NNZ   = 2
----------
Row 0: (2, 1.100) (0, 3.300)
==========";
        assert_eq!( text, expect );
    }
}
