// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
//! Define the closed set of operator kinds.
//!
//! Link to [parent module](super)
// ---------------------------------------------------------------------------
// use
use crate::op::info::{
    Arity,
    OpInfo,
    OP_INFO_VEC,
};
// ---------------------------------------------------------------------------
//
// NUMBER_OP
/// Number of operator kinds; also the length of the operator
/// information vector.
pub const NUMBER_OP: usize = 12;
//
// OpKind
/// The operator kinds an expression node can carry.
///
/// This is a closed sum: a new operator is added by extending this enum
/// and the operator information table
/// ([op_info_vec](crate::op::info::op_info_vec)) in lockstep.
/// The discriminant is the index into that table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpKind {
    /// n-ary `+`
    Sum,
    /// n-ary `*`
    Product,
    /// binary `-`
    Subtraction,
    /// binary `/`
    Division,
    /// binary `^`
    Power,
    /// unary `-`
    Neg,
    /// unary `sqrt`
    Sqrt,
    /// unary `exp`
    Exp,
    /// unary `log`
    Log,
    /// unary `sin`
    Sin,
    /// unary `cos`
    Cos,
    /// unary `tan`
    Tan,
}
//
impl OpKind {
    //
    // index
    /// Index of this operator in the operator information vector.
    pub(crate) fn index(self) -> usize {
        self as usize
    }
    //
    // info
    /// Information record for this operator; see [OpInfo] .
    pub fn info(self) -> &'static OpInfo {
        &OP_INFO_VEC[ self.index() ]
    }
    //
    // name
    /// Symbol the user sees for this operator; e.g. `+` or `sin` .
    pub fn name(self) -> &'static str {
        self.info().name
    }
    //
    // arity
    /// Number of arguments this operator requires.
    pub fn arity(self) -> Arity {
        self.info().arity
    }
}
