// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
// ---------------------------------------------------------------------------
//! This module defines the decision variables and the table that owns them.
//!
//! Link to [parent module](super)
// ---------------------------------------------------------------------------
// use
use crate::IndexT;
// ---------------------------------------------------------------------------
//
// Variable
/// One decision variable: a stable index and the current value.
///
/// The index equals the variable's position in the [VarTable] that owns it.
#[derive(Clone, Debug)]
pub struct Variable {
    /// position of this variable in its table
    pub index : IndexT,
    /// current value; mutated only between AD passes
    pub value : f64,
}
// ---------------------------------------------------------------------------
//
// VarTable
/// The contiguous sequence of all decision variables in a model.
///
/// The table is constructed once, by the reader or by a test harness.
/// During an evaluation or AD pass it is read only; values change only
/// through [VarTable::set_value] between passes. No core operation
/// allocates new variables.
#[derive(Clone, Debug, Default)]
pub struct VarTable {
    vec : Vec<Variable>,
}
//
impl VarTable {
    //
    // new
    /// Table of *nvar* variables, indexed by position, all values 0.0 .
    pub fn new(nvar: usize) -> Self {
        let vec = (0 .. nvar)
            .map( |index| Variable{ index : index as IndexT, value : 0.0 } )
            .collect();
        Self{ vec }
    }
    //
    // from_values
    /// Table whose i-th variable has index i and the i-th given value.
    pub fn from_values(values: Vec<f64>) -> Self {
        let vec = values
            .into_iter()
            .enumerate()
            .map( |(index, value)| Variable{ index : index as IndexT, value } )
            .collect();
        Self{ vec }
    }
    //
    // len
    /// Number of variables; also called `nvar` .
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    //
    // is_empty
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    //
    // value
    /// Current value of the variable with the given index.
    pub fn value(&self, index: IndexT) -> f64 {
        self.vec[index as usize].value
    }
    //
    // set_value
    /// Assign the value of the variable with the given index.
    /// Must not be called while an AD pass over an expression that
    /// references this table is in flight.
    pub fn set_value(&mut self, index: IndexT, value: f64) {
        self.vec[index as usize].value = value;
    }
    //
    // get
    pub fn get(&self, index: IndexT) -> Option<&Variable> {
        self.vec.get(index as usize)
    }
    //
    // iter
    pub fn iter(&self) -> std::slice::Iter<'_, Variable> {
        self.vec.iter()
    }
}
