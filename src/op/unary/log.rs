// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
//! Local derivative of the natural log operator.
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
// log_partial
/// Partial of `log(a)` : `1 / a` ;
/// see [PartialsFn](crate::op::info::PartialsFn)
///
/// Fails with [Domain](crate::Error::Domain) when the operand
/// evaluates to a non-positive number.
pub(crate) fn log_partial(
    args : &[Node]   ,
    vars : &VarTable ,
) -> Result< Vec<f64>, Error > {
    debug_assert_eq!( args.len(), 1 );
    let value = evaluate(&args[0], vars);
    if value <= 0.0 {
        return Err( Error::Domain {
            op    : "log",
            expr  : args[0].to_string(),
            value,
        });
    }
    Ok( vec![ 1.0 / value ] )
}
// ---------------------------------------------------------------------------
//
// set_op_info
/// Set the operator information for the Log operator.
pub fn set_op_info( op_info_vec : &mut [OpInfo] ) {
    op_info_vec[ OpKind::Log.index() ] = OpInfo {
        name     : "log",
        arity    : Arity::Exactly(1),
        partials : log_partial,
    };
}
