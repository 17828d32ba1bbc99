// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
//! This module reads models in the AMPL `.nl` textual format.
//!
//! Link to [parent module](super)
// ---------------------------------------------------------------------------
// sub-modules
pub mod header;
pub mod opcode;
pub mod reader;
