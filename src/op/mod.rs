// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
//! This module defines the operator kinds and their local derivatives.
//!
//! Link to [parent module](super)
// ---------------------------------------------------------------------------
// sub-modules
//
pub mod id;
pub mod info;
//
pub mod sum;
pub mod product;
pub mod sub;
pub mod div;
pub mod pow;
//
// unary operators
pub mod unary;
