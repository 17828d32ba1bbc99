// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
// ---------------------------------------------------------------------------
//! This module defines the error type for the whole crate.
//!
//! Link to [parent module](super)
// ---------------------------------------------------------------------------
// use
use crate::op::info::Arity;
// ---------------------------------------------------------------------------
//
// Error
/// Everything that can go wrong while reading a model or
/// differentiating one of its expressions.
///
/// Every failure is fatal for the row being computed; callers receive the
/// error through `Result` and there is no local recovery or retry.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    //
    /// A local derivative is undefined at the current variable values:
    /// division by zero, square root of a negative number, or the log
    /// of a non-positive number. *expr* is the offending argument
    /// rendered as text.
    #[error("{op}: derivative undefined for argument {expr} = {value}")]
    Domain {
        op    : &'static str ,
        expr  : String       ,
        value : f64          ,
    },
    //
    /// An operator node was given an argument count inconsistent
    /// with its kind.
    #[error("{op}: expected {expected} argument(s), found {found}")]
    Arity {
        op       : &'static str ,
        expected : Arity        ,
        found    : usize        ,
    },
    //
    /// A condition the core relies on does not hold; e.g. a variable
    /// index outside the variable table or a malformed sparse row.
    #[error("internal invariant violated: {0}")]
    InternalInvariant(String),
    //
    /// An `.nl` operator code with no corresponding [OpKind](crate::OpKind).
    #[error("unsupported operator code o{0}")]
    UnsupportedOperator(usize),
    //
    /// The `.nl` input text does not have the expected form.
    #[error("invalid .nl input: {0}")]
    Parse(String),
    //
    /// An I/O failure while reading the `.nl` file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
//
impl Error {
    //
    // internal
    pub(crate) fn internal(msg: impl Into<String>) -> Self {
        Error::InternalInvariant( msg.into() )
    }
    //
    // parse
    pub(crate) fn parse(msg: impl Into<String>) -> Self {
        Error::Parse( msg.into() )
    }
}
