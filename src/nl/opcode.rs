// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
// ---------------------------------------------------------------------------
//! This module maps `.nl` operator codes to operator kinds.
//!
//! Link to [parent module](super)
// ---------------------------------------------------------------------------
// use
use crate::Error;
use crate::op::id::OpKind;
// ---------------------------------------------------------------------------
//
// N_OPCODE
/// Number of operator codes in the `.nl` format
/// (Table 6 of "Writing .nl files").
pub const N_OPCODE: usize = 56;
//
// OPCODE_TABLE
/// Map from `.nl` operator code to operator kind. Most codes have no
/// corresponding kind here and map to `None` ; e.g. code 4 is `rem` .
const OPCODE_TABLE: [Option<OpKind>; N_OPCODE] = {
    let mut table : [Option<OpKind>; N_OPCODE] = [None; N_OPCODE];
    table[0]  = Some(OpKind::Sum);
    table[1]  = Some(OpKind::Subtraction);
    table[2]  = Some(OpKind::Product);
    table[3]  = Some(OpKind::Division);
    table[5]  = Some(OpKind::Power);
    table[16] = Some(OpKind::Neg);
    table[38] = Some(OpKind::Tan);
    table[39] = Some(OpKind::Sqrt);
    table[41] = Some(OpKind::Sin);
    table[43] = Some(OpKind::Log);
    table[44] = Some(OpKind::Exp);
    table[46] = Some(OpKind::Cos);
    table
};
//
// op_from_code
/// Operator kind for an `.nl` operator code; a code with no kind
/// (including codes past the end of the table) fails with
/// [UnsupportedOperator](crate::Error::UnsupportedOperator) .
pub fn op_from_code(code: usize) -> Result<OpKind, Error> {
    match OPCODE_TABLE.get(code) {
        Some( Some(op) ) => Ok(*op),
        _                => Err( Error::UnsupportedOperator(code) ),
    }
}
// ---------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;
    //
    #[test]
    fn supported_codes() {
        assert_eq!( op_from_code(0).unwrap(),  OpKind::Sum );
        assert_eq!( op_from_code(1).unwrap(),  OpKind::Subtraction );
        assert_eq!( op_from_code(2).unwrap(),  OpKind::Product );
        assert_eq!( op_from_code(3).unwrap(),  OpKind::Division );
        assert_eq!( op_from_code(5).unwrap(),  OpKind::Power );
        assert_eq!( op_from_code(16).unwrap(), OpKind::Neg );
        assert_eq!( op_from_code(38).unwrap(), OpKind::Tan );
        assert_eq!( op_from_code(39).unwrap(), OpKind::Sqrt );
        assert_eq!( op_from_code(41).unwrap(), OpKind::Sin );
        assert_eq!( op_from_code(43).unwrap(), OpKind::Log );
        assert_eq!( op_from_code(44).unwrap(), OpKind::Exp );
        assert_eq!( op_from_code(46).unwrap(), OpKind::Cos );
    }
    //
    #[test]
    fn unsupported_codes() {
        // rem, and everything past the table
        assert!( matches!(
            op_from_code(4), Err( Error::UnsupportedOperator(4) )
        ));
        assert!( matches!(
            op_from_code(55), Err( Error::UnsupportedOperator(55) )
        ));
        assert!( matches!(
            op_from_code(100), Err( Error::UnsupportedOperator(100) )
        ));
    }
}
