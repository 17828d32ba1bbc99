// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
//! Utilities that are common to all the unary operators.
//!
//! Link to [parent module](super)
// ---------------------------------------------------------------------------
//
// unary_partial
/// Define the local derivative of a unary operator whose derivative
/// is defined everywhere.
///
/// * name : is neg, exp, sin, ...
/// * rule : maps the operand value to the partial at that value.
///
/// This defines the following function in the current module:
/// ```text
///     {name}_partial
/// ```
/// The invoking module must have `Node` , `VarTable` , `Error` and
/// `evaluate` in scope.
macro_rules! unary_partial { ($name:ident, $rule:expr) => { paste::paste! {
    //
    #[doc = concat!(
        "Partial of ", stringify!($name), " with respect to its operand",
        "; see [PartialsFn](crate::op::info::PartialsFn)"
    ) ]
    pub(crate) fn [< $name _partial >] (
        args : &[Node]   ,
        vars : &VarTable ,
    ) -> Result< Vec<f64>, Error > {
        debug_assert_eq!( args.len(), 1 );
        let value          = evaluate(&args[0], vars);
        let rule : fn(f64) -> f64 = $rule;
        Ok( vec![ rule(value) ] )
    }
}}}
pub(crate) use unary_partial;
