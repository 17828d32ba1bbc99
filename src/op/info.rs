// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
//! Information about an operator given its operator kind.
//!
//! Link to [parent module](super)
// ---------------------------------------------------------------------------
// use
use std::sync::LazyLock;
//
use crate::Error;
use crate::expr::{
    Node,
    OperatorNode,
};
use crate::op::id::NUMBER_OP;
use crate::variable::VarTable;
// ---------------------------------------------------------------------------
//
// Arity
/// Number of arguments an operator requires.
///
/// `Sum` and `Product` are n-ary in this representation even though the
/// `.nl` format only emits their binary form; see
/// [Arity::nl_nargs] for the count the reader uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    /// the operator takes exactly this many arguments
    Exactly(usize),
    /// the operator takes this many arguments or more
    AtLeast(usize),
}
//
impl Arity {
    //
    // accepts
    /// Is *nargs* a valid argument count for this arity.
    pub fn accepts(&self, nargs: usize) -> bool {
        match *self {
            Arity::Exactly(n) => nargs == n,
            Arity::AtLeast(n) => nargs >= n,
        }
    }
    //
    // nl_nargs
    /// Argument count emitted by the `.nl` prefix form;
    /// n-ary operators appear there as binary.
    pub fn nl_nargs(&self) -> usize {
        match *self {
            Arity::Exactly(n) => n,
            Arity::AtLeast(_) => 2,
        }
    }
}
//
impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Arity::Exactly(n) => write!(f, "{n}"),
            Arity::AtLeast(n) => write!(f, "{n} or more"),
        }
    }
}
// ---------------------------------------------------------------------------
//
// PartialsFn
/// Local derivative of an operator with respect to each of its operands.
///
/// * args :
///   the operator's argument nodes; their values are obtained through
///   [evaluate](crate::evaluate) at the current variable values.
///
/// * vars :
///   the variable table the argument expressions refer into.
///
/// * return :
///   one partial per argument, in argument order, or a
///   [Domain](crate::Error::Domain) error when the derivative is not
///   defined at the current values.
pub type PartialsFn = fn(
    _args : &[Node]   ,
    _vars : &VarTable ,
) -> Result< Vec<f64>, Error >;
//
// panic_partials
/// default [PartialsFn] will panic
fn panic_partials(
    _args : &[Node]   ,
    _vars : &VarTable ,
) -> Result< Vec<f64>, Error >
{ panic!("operator kind without partials in op_info_vec"); }
// ---------------------------------------------------------------------------
//
// OpInfo
/// Information for one operator kind.
#[derive(Clone)]
pub struct OpInfo {
    //
    /// symbol the user sees for this operator
    pub name : &'static str,
    //
    /// argument count invariant for this operator
    pub arity : Arity,
    //
    /// local derivative with respect to each operand
    pub partials : PartialsFn,
}
// ---------------------------------------------------------------------------
//
// op_info_vec
/// returns the vector of length [NUMBER_OP]
/// that maps each operator kind to its [OpInfo] .
pub fn op_info_vec() -> Vec<OpInfo> {
    let empty = OpInfo {
        name     : "panic",
        arity    : Arity::Exactly(0),
        partials : panic_partials,
    };
    let mut result = vec![ empty ; NUMBER_OP ];
    crate::op::sum::set_op_info(&mut result);
    crate::op::product::set_op_info(&mut result);
    crate::op::sub::set_op_info(&mut result);
    crate::op::div::set_op_info(&mut result);
    crate::op::pow::set_op_info(&mut result);
    crate::op::unary::neg::set_op_info(&mut result);
    crate::op::unary::sqrt::set_op_info(&mut result);
    crate::op::unary::exp::set_op_info(&mut result);
    crate::op::unary::log::set_op_info(&mut result);
    crate::op::unary::sin::set_op_info(&mut result);
    crate::op::unary::cos::set_op_info(&mut result);
    crate::op::unary::tan::set_op_info(&mut result);
    result
}
//
// OP_INFO_VEC
/// the global map from operator kind to [OpInfo]
pub(crate) static OP_INFO_VEC: LazyLock< Vec<OpInfo> > =
    LazyLock::new( op_info_vec );
// ---------------------------------------------------------------------------
//
// partials
/// Local derivative of an operator node with respect to each operand
/// at the current variable values; dispatch is one table lookup.
///
/// The returned vector has the same length as the node's argument
/// sequence; see the [PartialsFn] contract.
pub fn partials(
    op_node : &OperatorNode ,
    vars    : &VarTable     ,
) -> Result< Vec<f64>, Error > {
    let info = op_node.op().info();
    debug_assert!( info.arity.accepts( op_node.args().len() ) );
    (info.partials)( op_node.args(), vars )
}
// ---------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;
    use crate::op::id::OpKind;
    //
    // Every operator kind must have its entry set; a left over default
    // would panic on first use and has the name "panic".
    #[test]
    fn op_info_vec_is_complete() {
        let vec = op_info_vec();
        assert_eq!( vec.len(), NUMBER_OP );
        for info in &vec {
            assert_ne!( info.name, "panic" );
            assert!( info.arity.accepts( info.arity.nl_nargs() ) );
        }
    }
    //
    #[test]
    fn arity_matches_kind() {
        assert_eq!( OpKind::Sum.arity(),         Arity::AtLeast(2) );
        assert_eq!( OpKind::Product.arity(),     Arity::AtLeast(2) );
        assert_eq!( OpKind::Subtraction.arity(), Arity::Exactly(2) );
        assert_eq!( OpKind::Division.arity(),    Arity::Exactly(2) );
        assert_eq!( OpKind::Power.arity(),       Arity::Exactly(2) );
        assert_eq!( OpKind::Neg.arity(),         Arity::Exactly(1) );
        assert_eq!( OpKind::Tan.arity(),         Arity::Exactly(1) );
    }
}
