// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
//! Local derivative of the power operator.
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
// pow_partial
/// Partials of `a ^ b` : `[ b * a^(b-1), a^b * ln(a) ]` ;
/// see [PartialsFn](crate::op::info::PartialsFn)
///
/// The second partial is defined as zero when the base is exactly
/// 0 or 1 (where the exponent has no effect on the value).
pub(crate) fn pow_partial(
    args : &[Node]   ,
    vars : &VarTable ,
) -> Result< Vec<f64>, Error > {
    debug_assert_eq!( args.len(), 2 );
    let base     = evaluate(&args[0], vars);
    let exponent = evaluate(&args[1], vars);
    let d_base   = exponent * base.powf(exponent - 1.0);
    let d_exponent = if base == 0.0 || base == 1.0 {
        0.0
    } else {
        base.powf(exponent) * base.ln()
    };
    Ok( vec![ d_base, d_exponent ] )
}
// ---------------------------------------------------------------------------
//
// set_op_info
/// Set the operator information for the Power operator.
pub fn set_op_info( op_info_vec : &mut [OpInfo] ) {
    op_info_vec[ OpKind::Power.index() ] = OpInfo {
        name     : "^",
        arity    : Arity::Exactly(2),
        partials : pow_partial,
    };
}
