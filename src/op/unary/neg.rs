// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
//! Local derivative of the unary minus operator.
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
// neg_partial
common::unary_partial!(neg, |_value| -1.0);
// ---------------------------------------------------------------------------
//
// set_op_info
/// Set the operator information for the Neg operator.
pub fn set_op_info( op_info_vec : &mut [OpInfo] ) {
    op_info_vec[ OpKind::Neg.index() ] = OpInfo {
        name     : "-",
        arity    : Arity::Exactly(1),
        partials : neg_partial,
    };
}
