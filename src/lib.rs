// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
// ---------------------------------------------------------------------------
//! Sparse Jacobians of AMPL `.nl` constraint expressions by
//! automatic differentiation.
//!
//! The [nl] reader builds one expression tree per constraint body over a
//! shared [VarTable]. For each tree, [identify_variables] finds the distinct
//! variables appearing in it, [forward_diff] or [reverse_diff] computes the
//! derivative with respect to those variables at the current variable values,
//! and the result is one row of a [CsrMatrix]. Stacked across constraints,
//! the rows are the Jacobian of the constraint vector; see [jacobian].
//!
//! # Example
//! ```
//! use nlad::{Node, OpKind, VarTable, forward_diff_row, reverse_diff_row};
//!
//! // f = v0 * v2 at v0 = 1.1, v2 = 3.3
//! let mut vars = VarTable::new(3);
//! vars.set_value(0, 1.1);
//! vars.set_value(2, 3.3);
//! let f = Node::operator(
//!     OpKind::Product, vec![ Node::var(0), Node::var(2) ]
//! ).unwrap();
//!
//! let row = forward_diff_row(&f, &vars).unwrap();
//! assert_eq!( row.nnz(), 2 );
//! assert_eq!( row, reverse_diff_row(&f, &vars).unwrap() );
//! ```
// ---------------------------------------------------------------------------
// modules
pub mod error;
pub mod variable;
pub mod op;
pub mod expr;
pub mod eval;
pub mod discover;
pub mod diff;
pub mod sparse;
pub mod nl;
// ---------------------------------------------------------------------------
//
// IndexT
/// Type used for variable indices and sparse column indices.
pub type IndexT = u32;
//
// re-exports
pub use crate::error::Error;
pub use crate::variable::{
    Variable,
    VarTable,
};
pub use crate::expr::{
    Node,
    OperatorNode,
};
pub use crate::op::id::OpKind;
pub use crate::op::info::partials;
pub use crate::eval::evaluate;
pub use crate::discover::{
    DiscoverBuffer,
    identify_variables,
};
pub use crate::diff::{
    Mode,
    forward_diff_row,
    jacobian,
    reverse_diff_row,
};
pub use crate::diff::forward::forward_diff;
pub use crate::diff::reverse::reverse_diff;
pub use crate::sparse::CsrMatrix;
pub use crate::nl::reader::{
    NlModel,
    read_model,
};
