// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
//! This module defines the local derivatives of the unary operators.
//!
//! Link to [parent module](super)
// ---------------------------------------------------------------------------
// sub-modules
pub mod common;
pub mod neg;
pub mod sqrt;
pub mod exp;
pub mod log;
pub mod sin;
pub mod cos;
pub mod tan;
