// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
// ---------------------------------------------------------------------------
//! This module implements reverse mode differentiation of one expression.
//!
//! Link to [parent module](super)
// ---------------------------------------------------------------------------
// use
use crate::Error;
use crate::IndexT;
use crate::expr::Node;
use crate::op::info::partials;
use crate::variable::VarTable;
// ---------------------------------------------------------------------------
//
// reverse_diff
/// Propagate adjoints from the root of *expr* down to its leaves,
/// accumulating at variable leaves.
///
/// ```text
///     reverse_diff(expr, vars, 1.0, &wrt, &mut values)?
/// ```
///
/// * adjoint :
///   the partial of the root with respect to this node; 1.0 at the
///   root. The adjoint lives on the recursion stack, not on the node,
///   so a pass needs only `&` access to the expression.
///
/// * wrt :
///   indices of the distinct variables appearing in *expr* , as
///   returned by [identify_variables](crate::identify_variables) .
///
/// * values :
///   length `wrt.len()` , all zero on the outermost call; on return,
///   entry i is the partial of *expr* with respect to `wrt[i]` .
///
/// An operator node computes its local partials once and recurses into
/// argument i with adjoint `partial_i * adjoint` . Plain assignment of
/// child adjoints is valid because every operator node has exactly one
/// parent; a DAG extension would need `+=` over a two-pass traversal.
pub fn reverse_diff(
    expr    : &Node     ,
    vars    : &VarTable ,
    adjoint : f64       ,
    wrt     : &[IndexT] ,
    values  : &mut [f64],
) -> Result<(), Error> {
    debug_assert_eq!( values.len(), wrt.len() );
    match expr {
        Node::Constant(_) => Ok(()),
        Node::Var(index) => {
            match wrt.iter().position( |w| w == index ) {
                Some(i) => {
                    values[i] += adjoint;
                    Ok(())
                }
                None => Err( Error::internal( format!(
                    "variable v{index} does not appear in the wrt set",
                ))),
            }
        }
        Node::Op(op_node) => {
            let deriv_op = partials(op_node, vars)?;
            for (partial, arg) in deriv_op.iter().zip( op_node.args() ) {
                reverse_diff(arg, vars, partial * adjoint, wrt, values)?;
            }
            Ok(())
        }
    }
}
