// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
// ---------------------------------------------------------------------------
//! This module assembles sparse derivative rows from the AD passes.
//!
//! Link to [parent module](super)
// ---------------------------------------------------------------------------
// sub-modules
pub mod forward;
pub mod reverse;
// ---------------------------------------------------------------------------
// use
use crate::Error;
use crate::IndexT;
use crate::diff::forward::forward_diff;
use crate::diff::reverse::reverse_diff;
use crate::discover::DiscoverBuffer;
use crate::expr::Node;
use crate::sparse::CsrMatrix;
use crate::variable::VarTable;
// ---------------------------------------------------------------------------
//
// Mode
/// Which AD algorithm computes a derivative row. Both produce the same
/// row up to floating point rounding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// propagate derivative vectors from the leaves to the root
    Forward,
    /// propagate adjoints from the root to the leaves
    Reverse,
}
// ---------------------------------------------------------------------------
//
// row_arrays
/// The column indices and values of one derivative row.
/// Indices come out in discovery order; see
/// [identify_variables](crate::identify_variables) .
fn row_arrays(
    expr   : &Node               ,
    vars   : &VarTable           ,
    mode   : Mode                ,
    buffer : &mut DiscoverBuffer ,
) -> Result< (Vec<IndexT>, Vec<f64>), Error > {
    let wrt = buffer.identify(expr)?;
    match mode {
        Mode::Forward => {
            let mut dense = vec![ 0.0 ; vars.len() ];
            forward_diff(expr, vars, &mut dense)?;
            let values = wrt.iter()
                .map( |&j| dense[j as usize] )
                .collect();
            Ok( (wrt, values) )
        }
        Mode::Reverse => {
            let mut values = vec![ 0.0 ; wrt.len() ];
            reverse_diff(expr, vars, 1.0, &wrt, &mut values)?;
            Ok( (wrt, values) )
        }
    }
}
// ---------------------------------------------------------------------------
//
// diff_row
/// Sparse derivative row of one expression as a 1 x nvar [CsrMatrix] .
///
/// A pure function of the expression and the current variable values;
/// the returned matrix owns its three arrays.
pub fn diff_row(
    expr : &Node     ,
    vars : &VarTable ,
    mode : Mode      ,
) -> Result<CsrMatrix, Error> {
    let mut buffer = DiscoverBuffer::new( vars.len() );
    let (indices, values) = row_arrays(expr, vars, mode, &mut buffer)?;
    let mut row = CsrMatrix::new( vars.len() );
    row.push_row(indices, values)?;
    Ok(row)
}
//
// forward_diff_row
/// [diff_row] using forward mode.
pub fn forward_diff_row(
    expr : &Node     ,
    vars : &VarTable ,
) -> Result<CsrMatrix, Error> {
    diff_row(expr, vars, Mode::Forward)
}
//
// reverse_diff_row
/// [diff_row] using reverse mode.
pub fn reverse_diff_row(
    expr : &Node     ,
    vars : &VarTable ,
) -> Result<CsrMatrix, Error> {
    diff_row(expr, vars, Mode::Reverse)
}
// ---------------------------------------------------------------------------
//
// jacobian
/// Jacobian of a constraint vector as an ncon x nvar [CsrMatrix] ,
/// one row per constraint expression.
///
/// The discovery buffer is shared across the constraints, with a
/// distinct expression id per row, so the whole Jacobian costs one
/// `last_seen` allocation.
pub fn jacobian(
    exprs : &[Node]   ,
    vars  : &VarTable ,
    mode  : Mode      ,
) -> Result<CsrMatrix, Error> {
    let mut buffer = DiscoverBuffer::new( vars.len() );
    let mut jac    = CsrMatrix::new( vars.len() );
    for expr in exprs {
        let (indices, values) = row_arrays(expr, vars, mode, &mut buffer)?;
        jac.push_row(indices, values)?;
    }
    log::debug!(
        "jacobian: {} rows, {} columns, {} non-zeros",
        jac.nrow(), jac.ncol(), jac.nnz(),
    );
    Ok(jac)
}
