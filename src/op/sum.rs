// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
//! Local derivative of the n-ary sum operator.
//!
//! Link to [parent module](super)
// ---------------------------------------------------------------------------
// use
use crate::Error;
use crate::expr::Node;
use crate::op::id::OpKind;
use crate::op::info::{
    Arity,
    OpInfo,
};
use crate::variable::VarTable;
// ---------------------------------------------------------------------------
//
// sum_partial
/// Partials of `a_1 + ... + a_n` : one with respect to each operand;
/// see [PartialsFn](crate::op::info::PartialsFn)
pub(crate) fn sum_partial(
    args  : &[Node]   ,
    _vars : &VarTable ,
) -> Result< Vec<f64>, Error > {
    debug_assert!( args.len() >= 2 );
    Ok( vec![ 1.0 ; args.len() ] )
}
// ---------------------------------------------------------------------------
//
// set_op_info
/// Set the operator information for the Sum operator.
pub fn set_op_info( op_info_vec : &mut [OpInfo] ) {
    op_info_vec[ OpKind::Sum.index() ] = OpInfo {
        name     : "+",
        arity    : Arity::AtLeast(2),
        partials : sum_partial,
    };
}
