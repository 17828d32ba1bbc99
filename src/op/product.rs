// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
//! Local derivative of the n-ary product operator.
//!
//! Link to [parent module](super)
// ---------------------------------------------------------------------------
// use
use crate::Error;
use crate::eval::evaluate;
use crate::expr::Node;
use crate::op::id::OpKind;
use crate::op::info::{
    Arity,
    OpInfo,
};
use crate::variable::VarTable;
// ---------------------------------------------------------------------------
//
// product_partial
/// Partials of `a_1 * ... * a_n` : the i-th partial is the product of
/// every operand value except the i-th;
/// see [PartialsFn](crate::op::info::PartialsFn)
///
/// Each operand is re-evaluated for each partial; there is no caching
/// of subexpression values.
pub(crate) fn product_partial(
    args : &[Node]   ,
    vars : &VarTable ,
) -> Result< Vec<f64>, Error > {
    debug_assert!( args.len() >= 2 );
    let mut deriv = Vec::with_capacity( args.len() );
    for j in 0 .. args.len() {
        let mut partial = 1.0;
        for (jj, arg) in args.iter().enumerate() {
            if j != jj {
                partial *= evaluate(arg, vars);
            }
        }
        deriv.push(partial);
    }
    Ok(deriv)
}
// ---------------------------------------------------------------------------
//
// set_op_info
/// Set the operator information for the Product operator.
pub fn set_op_info( op_info_vec : &mut [OpInfo] ) {
    op_info_vec[ OpKind::Product.index() ] = OpInfo {
        name     : "*",
        arity    : Arity::AtLeast(2),
        partials : product_partial,
    };
}
