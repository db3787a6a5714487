//! Library for reversible keyed pixel obfuscation.
//!
//! Two transforms over a flat RGBA pixel sequence:
//!
//! * A keyed per-channel operation ([xor/add/sub](PixelOp)) on RGB,
//!   leaving alpha untouched.
//! * A deterministic seeded [permutation](generate_permutation) of pixel
//!   positions.
//!
//! [encode] applies the op then the shuffle; [decode] undoes both in
//! reverse order, so `decode(encode(seq, cfg), cfg) == seq` for every
//! valid config. This obfuscates images while preserving all pixel data;
//! it is NOT cryptographically secure.

// Copyright (C) 2026 pixveil developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Lesser General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Lesser General Public License for more details.
//
// You should have received a copy of the GNU Lesser General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.
//

mod error;
mod permute;
mod transform;

#[doc(inline)]
pub use crate::error::TransformError;
#[doc(inline)]
pub use crate::permute::{generate_permutation, invert_permutation};
#[doc(inline)]
pub use crate::transform::{decode, encode, PixelOp, TransformConfig};
