// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
// ---------------------------------------------------------------------------
//! This module parses the ten line `.nl` header.
//!
//! Link to [parent module](super)
// ---------------------------------------------------------------------------
// use
use crate::Error;
// ---------------------------------------------------------------------------
//
// N_HEADER_LINE
/// The `.nl` header is always this many lines.
pub const N_HEADER_LINE: usize = 10;
//
// NlHeader
/// The model dimensions from the `.nl` header.
///
/// Only the counts this crate uses are kept; the header's other fields
/// (network constraints, discrete variable counts, name lengths, ...)
/// are read and discarded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NlHeader {
    /// number of variables
    pub nvar : usize,
    /// number of constraints
    pub ncon : usize,
    /// number of objectives
    pub nobj : usize,
    /// non-zeros in the Jacobian as declared by the writer
    pub jac_nnz : usize,
    /// non-zeros in the objective gradients as declared by the writer
    pub grad_nnz : usize,
    /// total count of common subexpressions (all five partitions)
    pub nexpr : usize,
}
//
impl NlHeader {
    //
    // parse
    /// Parse the first [N_HEADER_LINE] lines of an `.nl` file.
    ///
    /// The first line must start with `g` (textual format); the binary
    /// tag `b` is recognized and rejected. Each remaining line is read
    /// as leading integers, stopping at the first non-integer token, so
    /// trailing `#` comments are ignored.
    pub fn parse(lines: &[String]) -> Result<Self, Error> {
        if lines.len() < N_HEADER_LINE {
            return Err( Error::parse( format!(
                "header has {} line(s); {N_HEADER_LINE} expected",
                lines.len(),
            )));
        }
        match lines[0].chars().next() {
            Some('g') => (),
            Some('b') => {
                return Err( Error::parse(
                    "binary format .nl file; only the textual \
                     format (tag g) is supported",
                ));
            }
            _ => {
                return Err( Error::parse(
                    "first header line does not start with g or b",
                ));
            }
        }
        //
        // line 2: number of variables, constraints, objectives
        let counts = header_ints(&lines[1]);
        if counts.len() < 3 {
            return Err( Error::parse( format!(
                "header line 2 has {} integer(s); at least 3 expected",
                counts.len(),
            )));
        }
        let nvar = counts[0];
        let ncon = counts[1];
        let nobj = counts[2];
        //
        // line 8: non-zero counts
        let counts = header_ints(&lines[7]);
        if counts.len() < 2 {
            return Err( Error::parse( format!(
                "header line 8 has {} integer(s); at least 2 expected",
                counts.len(),
            )));
        }
        let jac_nnz  = counts[0];
        let grad_nnz = counts[1];
        //
        // line 10: the five common subexpression partitions
        let nexpr = header_ints(&lines[9]).iter().sum();
        //
        Ok( Self{ nvar, ncon, nobj, jac_nnz, grad_nnz, nexpr } )
    }
}
//
// header_ints
/// The leading integers of one header line.
fn header_ints(line: &str) -> Vec<usize> {
    line.split_whitespace()
        .map_while( |token| token.parse::<usize>().ok() )
        .collect()
}
