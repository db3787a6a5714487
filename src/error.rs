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

use thiserror::Error;

/// Errors reported by the transform layer.
///
/// Both variants are configuration/input problems: they are raised before
/// any pixel is processed and abort the whole run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// `--op` was given without `--key`.
    #[error("--key is required when --op is provided")]
    MissingKey,

    /// Operation name outside {xor, add, sub}.
    #[error("unsupported op: {0:?} (expected xor, add or sub)")]
    UnsupportedOp(String),
}
