// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
// ---------------------------------------------------------------------------
//! This module defines the expression graph nodes.
//!
//! Link to [parent module](super)
//!
//! Expressions are trees: an operator node exclusively owns its argument
//! sequence and hence the whole subgraph below it. A variable leaf holds
//! the index of a variable in the model's [VarTable](crate::VarTable);
//! dropping an expression never touches the variable table.
// ---------------------------------------------------------------------------
// use
use std::fmt;
//
use crate::Error;
use crate::IndexT;
use crate::op::id::OpKind;
// ---------------------------------------------------------------------------
//
// Node
/// One node of an expression tree.
#[derive(Clone, Debug)]
pub enum Node {
    /// a fixed real value
    Constant(f64),
    /// index of a variable in the model's variable table
    Var(IndexT),
    /// an operator applied to owned argument expressions
    Op(OperatorNode),
}
//
impl Node {
    //
    // constant
    pub fn constant(value: f64) -> Self {
        Node::Constant(value)
    }
    //
    // var
    pub fn var(index: IndexT) -> Self {
        Node::Var(index)
    }
    //
    // operator
    /// Operator node with the given arguments; fails with
    /// [Arity](crate::Error::Arity) when the argument count does not
    /// match the operator kind.
    pub fn operator(op: OpKind, args: Vec<Node>) -> Result<Self, Error> {
        Ok( Node::Op( OperatorNode::new(op, args)? ) )
    }
}
// ---------------------------------------------------------------------------
//
// OperatorNode
/// An operator together with the ordered argument sequence it owns.
///
/// The argument count is validated against the operator's arity at
/// construction, so every `OperatorNode` satisfies its arity invariant
/// for its entire lifetime.
#[derive(Clone, Debug)]
pub struct OperatorNode {
    op   : OpKind,
    args : Vec<Node>,
}
//
impl OperatorNode {
    //
    // new
    /// Fails with [Arity](crate::Error::Arity) when the number of
    /// arguments is not valid for *op* .
    pub fn new(op: OpKind, args: Vec<Node>) -> Result<Self, Error> {
        let arity = op.arity();
        if ! arity.accepts( args.len() ) {
            return Err( Error::Arity {
                op       : op.name(),
                expected : arity,
                found    : args.len(),
            });
        }
        Ok( Self{ op, args } )
    }
    //
    // op
    pub fn op(&self) -> OpKind {
        self.op
    }
    //
    // args
    /// Ordered access to the argument sequence.
    pub fn args(&self) -> &[Node] {
        &self.args
    }
}
// ---------------------------------------------------------------------------
// Display
//
// Constants print with three decimal places, variables as `v<index>` ,
// unary operators as `op(arg)` , and other operators in parenthesized
// infix form; e.g. `(v0 + v1 + 5.430)` .
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Constant(value) => write!(f, "{value:.3}"),
            Node::Var(index)      => write!(f, "v{index}"),
            Node::Op(op_node)     => write!(f, "{op_node}"),
        }
    }
}
//
impl fmt::Display for OperatorNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.op.name();
        if self.args.len() == 1 {
            return write!(f, "{name}({})", self.args[0]);
        }
        write!(f, "(")?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, " {name} ")?;
            }
            write!(f, "{arg}")?;
        }
        write!(f, ")")
    }
}
