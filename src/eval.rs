// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
// ---------------------------------------------------------------------------
//! This module evaluates an expression at the current variable values.
//!
//! Link to [parent module](super)
// ---------------------------------------------------------------------------
// use
use crate::expr::{
    Node,
    OperatorNode,
};
use crate::op::id::OpKind;
use crate::variable::VarTable;
// ---------------------------------------------------------------------------
//
// evaluate
/// Value of an expression at the current values in *vars* .
///
/// Pure with respect to the variable table snapshot: nothing is cached,
/// so repeated calls over the same subtree re-evaluate it. Division by
/// zero, overflow, and out-of-domain unary functions follow IEEE
/// semantics; an infinite or NaN value propagates without error.
///
/// # Example
/// ```
/// use nlad::{Node, OpKind, VarTable, evaluate};
/// let vars = VarTable::from_values( vec![ 1.1, -2.2, 3.3 ] );
/// let expr = Node::operator(
///     OpKind::Product, vec![ Node::var(0), Node::var(2) ]
/// ).unwrap();
/// assert!( (evaluate(&expr, &vars) - 3.63).abs() < 1e-12 );
/// ```
pub fn evaluate(node: &Node, vars: &VarTable) -> f64 {
    match node {
        Node::Constant(value) => *value,
        Node::Var(index)      => vars.value(*index),
        Node::Op(op_node)     => evaluate_op(op_node, vars),
    }
}
//
// evaluate_op
/// Apply an operator to the values of its arguments.
/// Sum and Product fold over their whole argument list.
fn evaluate_op(op_node: &OperatorNode, vars: &VarTable) -> f64 {
    let args = op_node.args();
    match op_node.op() {
        OpKind::Sum => {
            args.iter().fold( 0.0, |acc, arg| acc + evaluate(arg, vars) )
        }
        OpKind::Product => {
            args.iter().fold( 1.0, |acc, arg| acc * evaluate(arg, vars) )
        }
        OpKind::Subtraction => {
            evaluate(&args[0], vars) - evaluate(&args[1], vars)
        }
        OpKind::Division => {
            evaluate(&args[0], vars) / evaluate(&args[1], vars)
        }
        OpKind::Power => {
            evaluate(&args[0], vars).powf( evaluate(&args[1], vars) )
        }
        OpKind::Neg  => - evaluate(&args[0], vars),
        OpKind::Sqrt => evaluate(&args[0], vars).sqrt(),
        OpKind::Exp  => evaluate(&args[0], vars).exp(),
        OpKind::Log  => evaluate(&args[0], vars).ln(),
        OpKind::Sin  => evaluate(&args[0], vars).sin(),
        OpKind::Cos  => evaluate(&args[0], vars).cos(),
        OpKind::Tan  => evaluate(&args[0], vars).tan(),
    }
}
