// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
// ---------------------------------------------------------------------------
//! This module finds the distinct variables appearing in an expression.
//!
//! Link to [parent module](super)
// ---------------------------------------------------------------------------
// use
use crate::Error;
use crate::IndexT;
use crate::expr::Node;
// ---------------------------------------------------------------------------
//
// NOT_SEEN
/// Sentinel for a `last_seen` entry whose variable has not appeared in
/// any expression yet. Expression ids must be less than this value.
pub const NOT_SEEN: usize = usize::MAX;
//
// identify_variables
/// The distinct variables appearing in an expression, in reverse order
/// of first encounter during a left-to-right pre-order walk.
///
/// ```text
///     wrt = identify_variables(expr, eidx, last_seen)?
/// ```
///
/// * expr :
///   root of the expression to search.
///
/// * eidx :
///   id for this expression; must differ from the id used for every
///   previous search through the same *last_seen* buffer.
///
/// * last_seen :
///   one entry per variable in the model, initialized to [NOT_SEEN]
///   before the first search. Entry v is stamped with *eidx* when
///   variable v is first encountered, so repeats within one expression
///   are skipped in O(1). Callers amortize this buffer across
///   constraints; see [DiscoverBuffer] .
///
/// * wrt :
///   the distinct variable indices; its length is the number of
///   structural non-zeros of the expression's derivative row. The
///   order is the reverse of first encounter (head-insertion order).
///
/// A variable index outside the buffer fails with
/// [InternalInvariant](crate::Error::InternalInvariant) .
pub fn identify_variables(
    expr      : &Node       ,
    eidx      : usize       ,
    last_seen : &mut [usize],
) -> Result< Vec<IndexT>, Error > {
    let mut found : Vec<IndexT> = Vec::new();
    walk(expr, eidx, last_seen, &mut found)?;
    // head-insertion into a list is reversal of encounter order
    found.reverse();
    Ok(found)
}
//
// walk
/// pre-order recursion for [identify_variables]
fn walk(
    expr      : &Node            ,
    eidx      : usize            ,
    last_seen : &mut [usize]     ,
    found     : &mut Vec<IndexT> ,
) -> Result<(), Error> {
    match expr {
        Node::Constant(_) => Ok(()),
        Node::Var(index) => {
            let i = *index as usize;
            if i >= last_seen.len() {
                return Err( Error::internal( format!(
                    "variable index v{i} out of bounds for a model \
                     with {} variables", last_seen.len(),
                )));
            }
            if last_seen[i] != eidx {
                last_seen[i] = eidx;
                found.push(*index);
            }
            Ok(())
        }
        Node::Op(op_node) => {
            for arg in op_node.args() {
                walk(arg, eidx, last_seen, found)?;
            }
            Ok(())
        }
    }
}
// ---------------------------------------------------------------------------
//
// DiscoverBuffer
/// Amortizes the `last_seen` buffer across the expressions of one
/// model, handing out a distinct expression id per search.
pub struct DiscoverBuffer {
    last_seen : Vec<usize>,
    next_eidx : usize,
}
//
impl DiscoverBuffer {
    //
    // new
    /// Buffer for a model with *nvar* variables.
    pub fn new(nvar: usize) -> Self {
        Self {
            last_seen : vec![ NOT_SEEN ; nvar ],
            next_eidx : 0,
        }
    }
    //
    // identify
    /// [identify_variables] with the next unused expression id.
    pub fn identify(&mut self, expr: &Node) -> Result< Vec<IndexT>, Error > {
        let eidx        = self.next_eidx;
        self.next_eidx += 1;
        identify_variables(expr, eidx, &mut self.last_seen)
    }
}
// ---------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;
    use crate::op::id::OpKind;
    //
    // x * z + x : x repeats and is reported once; order is the
    // reverse of first encounter.
    #[test]
    fn dedupe_and_order() {
        let product = Node::operator(
            OpKind::Product, vec![ Node::var(0), Node::var(2) ],
        ).unwrap();
        let expr = Node::operator(
            OpKind::Sum, vec![ product, Node::var(0) ],
        ).unwrap();
        //
        let mut buffer = DiscoverBuffer::new(3);
        let wrt = buffer.identify(&expr).unwrap();
        assert_eq!( wrt, vec![ 2, 0 ] );
    }
    //
    // The same buffer must work for a second expression that repeats
    // variables already seen in the first one.
    #[test]
    fn buffer_reuse_across_expressions() {
        let mut buffer = DiscoverBuffer::new(3);
        //
        let first = Node::operator(
            OpKind::Sum, vec![ Node::var(0), Node::var(1) ],
        ).unwrap();
        assert_eq!( buffer.identify(&first).unwrap(), vec![ 1, 0 ] );
        //
        let second = Node::operator(
            OpKind::Sum, vec![ Node::var(1), Node::var(2) ],
        ).unwrap();
        assert_eq!( buffer.identify(&second).unwrap(), vec![ 2, 1 ] );
    }
    //
    #[test]
    fn constant_has_no_variables() {
        let mut buffer = DiscoverBuffer::new(3);
        let expr = Node::constant(5.4);
        assert!( buffer.identify(&expr).unwrap().is_empty() );
    }
    //
    #[test]
    fn out_of_bounds_index() {
        let mut buffer = DiscoverBuffer::new(2);
        let expr = Node::var(7);
        assert!( matches!(
            buffer.identify(&expr),
            Err( Error::InternalInvariant(_) )
        ));
    }
}
