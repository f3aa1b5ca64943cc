// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Compact decimal representation of floating point numbers.
//!
//! Formatted numbers are built from three optional components in fixed order: a sign, an integer
//! part (a run of decimal digits), and a fractional part (a decimal point followed by a run of
//! decimal digits). Every output keeps at least one of the integer and fractional parts.
//! Trailing zeros are trimmed, a bare fraction carries no leading zero (one tenth formats as
//! `".1"`), and scientific notation is never produced, so values embed cleanly into
//! byte-oriented formats where the lexical form matters.
//!
//! The crate guarantees that
//!
//! ```text
//! parse(&format(round(x, k), k), k) == Ok(round(x, k))
//! ```
//!
//! for all non-NaN values of `x` and all `k` in `0..=MAX_DIGITS`: formatting a rounded value and
//! parsing the text back recovers the rounded value exactly.
//!
//! # Examples
//!
//! ```rust
//! use decfmt::{format, parse, round};
//!
//! let x = round(0.19, 1);
//! assert_eq!(format(x, 1), ".2");
//! assert_eq!(parse(".2", 1), Ok(x));
//! ```

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod format;
pub mod parse;
pub mod rounding;

// Re-exports
pub use crate::{
    error::ParseError,
    format::{format, write},
    parse::parse,
    rounding::{MAX_DIGITS, check_digits, max_magnitude, round},
};

/// Message for a failed correctness check on a function argument.
///
/// Argument checks use `expect` with this message rather than handle the error, so that an
/// unsupported digit count fails fast at the call site with the failed condition in the panic
/// message.
pub const FAILED: &str = "Condition failed";
