// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
//! Local derivative of the subtraction operator.
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
// sub_partial
/// Partials of `a - b` ;
/// see [PartialsFn](crate::op::info::PartialsFn)
pub(crate) fn sub_partial(
    args  : &[Node]   ,
    _vars : &VarTable ,
) -> Result< Vec<f64>, Error > {
    debug_assert_eq!( args.len(), 2 );
    Ok( vec![ 1.0, -1.0 ] )
}
// ---------------------------------------------------------------------------
//
// set_op_info
/// Set the operator information for the Subtraction operator.
pub fn set_op_info( op_info_vec : &mut [OpInfo] ) {
    op_info_vec[ OpKind::Subtraction.index() ] = OpInfo {
        name     : "-",
        arity    : Arity::Exactly(2),
        partials : sub_partial,
    };
}
