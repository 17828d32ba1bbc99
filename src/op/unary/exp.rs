// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
//! Local derivative of the exp operator.
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
use crate::op::unary::common;
use crate::variable::VarTable;
// ---------------------------------------------------------------------------
//
// exp_partial
// Overflow is not checked; an infinite value propagates.
common::unary_partial!(exp, f64::exp);
// ---------------------------------------------------------------------------
//
// set_op_info
/// Set the operator information for the Exp operator.
pub fn set_op_info( op_info_vec : &mut [OpInfo] ) {
    op_info_vec[ OpKind::Exp.index() ] = OpInfo {
        name     : "exp",
        arity    : Arity::Exactly(1),
        partials : exp_partial,
    };
}
