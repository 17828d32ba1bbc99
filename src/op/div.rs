// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
//! Local derivative of the division operator.
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
// div_partial
/// Partials of `a / b` : `[ 1/b, -a/b^2 ]` ;
/// see [PartialsFn](crate::op::info::PartialsFn)
///
/// Fails with [Domain](crate::Error::Domain) when the denominator
/// evaluates to zero.
pub(crate) fn div_partial(
    args : &[Node]   ,
    vars : &VarTable ,
) -> Result< Vec<f64>, Error > {
    debug_assert_eq!( args.len(), 2 );
    let numerator   = evaluate(&args[0], vars);
    let denominator = evaluate(&args[1], vars);
    if denominator == 0.0 {
        return Err( Error::Domain {
            op    : "/",
            expr  : args[1].to_string(),
            value : denominator,
        });
    }
    Ok( vec![
        1.0 / denominator,
        - numerator / (denominator * denominator),
    ])
}
// ---------------------------------------------------------------------------
//
// set_op_info
/// Set the operator information for the Division operator.
pub fn set_op_info( op_info_vec : &mut [OpInfo] ) {
    op_info_vec[ OpKind::Division.index() ] = OpInfo {
        name     : "/",
        arity    : Arity::Exactly(2),
        partials : div_partial,
    };
}
