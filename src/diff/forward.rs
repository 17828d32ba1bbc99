// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
// ---------------------------------------------------------------------------
//! This module implements forward mode differentiation of one expression.
//!
//! Link to [parent module](super)
// ---------------------------------------------------------------------------
// use
use crate::Error;
use crate::expr::Node;
use crate::op::info::partials;
use crate::variable::VarTable;
// ---------------------------------------------------------------------------
//
// forward_diff
/// Accumulate the derivative of *expr* into a dense vector with one
/// entry per variable in the model.
///
/// ```text
///     forward_diff(expr, vars, &mut values)?
/// ```
///
/// * values :
///   length `nvar` , all zero on the outermost call. On return,
///   entry j is the partial of *expr* with respect to variable j;
///   entries for variables that do not appear in *expr* stay zero.
///
/// An operator node obtains one fresh derivative vector per argument
/// recursion and combines them with the operator's local partials:
/// `values += partial_i * values_i` . The per-argument `nvar` vectors
/// make this O(depth * nvar) in space.
///
/// Expressions must be trees: a variable leaf that finds its entry
/// already non-zero fails with
/// [InternalInvariant](crate::Error::InternalInvariant) .
pub fn forward_diff(
    expr   : &Node     ,
    vars   : &VarTable ,
    values : &mut [f64],
) -> Result<(), Error> {
    debug_assert_eq!( values.len(), vars.len() );
    match expr {
        Node::Constant(_) => Ok(()),
        Node::Var(index) => {
            let i = *index as usize;
            if i >= values.len() {
                return Err( Error::internal( format!(
                    "variable index v{i} out of bounds for a model \
                     with {} variables", values.len(),
                )));
            }
            if values[i] != 0.0 {
                return Err( Error::internal( format!(
                    "derivative with respect to v{i} already has a value",
                )));
            }
            values[i] = 1.0;
            Ok(())
        }
        Node::Op(op_node) => {
            // local partials of this operator at the current values
            let deriv_op = partials(op_node, vars)?;
            for (partial, arg) in deriv_op.iter().zip( op_node.args() ) {
                let mut arg_values = vec![ 0.0 ; values.len() ];
                forward_diff(arg, vars, &mut arg_values)?;
                for (value, arg_value) in
                    values.iter_mut().zip( &arg_values )
                {
                    *value += partial * arg_value;
                }
            }
            Ok(())
        }
    }
}
