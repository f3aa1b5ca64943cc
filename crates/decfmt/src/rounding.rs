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

//! Functions for decimal rounding of `f64` values.
//!
//! This module provides the precision constants and the rounding function shared by the formatter
//! and parser, keeping every value within the magnitude range that survives a decimal round trip.

use crate::FAILED;

/// The maximum number of fractional digits.
pub const MAX_DIGITS: u8 = 10;

/// Exact scaling factors for each supported digit count, indexed by digit count.
///
/// Every entry is an integer power of ten below 2^53, so each scalar is exactly representable.
pub(crate) const POW10: [f64; MAX_DIGITS as usize + 1] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10,
];

/// The count of decimal digits an `f64` value carries through the scale/round/rescale cycle
/// without drift.
// Found by trial and error.
// TODO: Replace with a proper bound derived from the 53-bit significand
const SAFE_DECIMAL_DIGITS: f64 = 15.42;

/// Checks if a given `digits` value is within the allowed fractional digit range.
///
/// # Errors
///
/// This function returns an error:
/// - If `digits` exceeds [`MAX_DIGITS`].
pub fn check_digits(digits: u8) -> anyhow::Result<()> {
    if digits > MAX_DIGITS {
        anyhow::bail!("`digits` exceeded maximum `MAX_DIGITS` ({MAX_DIGITS}), was {digits}")
    }
    Ok(())
}

/// Returns the largest magnitude that [`round`] admits for the given `digits`.
///
/// Larger inputs are clamped to this bound before rounding, so that the scaled value always fits
/// the 64-bit digit extraction performed by the formatter.
///
/// # Panics
///
/// This function panics:
/// - If `digits` exceeds [`MAX_DIGITS`].
#[must_use]
pub fn max_magnitude(digits: u8) -> f64 {
    check_digits(digits).expect(FAILED);
    10f64.powf(SAFE_DECIMAL_DIGITS - f64::from(digits))
}

/// Rounds `value` to the closest `f64` with at most `digits` fractional decimal digits, with
/// ties rounded away from zero.
///
/// Values beyond ±[`max_magnitude`] are clamped to that bound before rounding. NaN inputs are
/// returned unchanged.
///
/// # Panics
///
/// This function panics:
/// - If `digits` exceeds [`MAX_DIGITS`].
///
/// # Examples
///
/// ```rust
/// use decfmt::round;
///
/// assert_eq!(round(1.5, 0), 2.0);
/// assert_eq!(round(-1.5, 0), -2.0);
/// assert_eq!(round(1.2345, 2), 1.23);
/// ```
#[must_use]
pub fn round(value: f64, digits: u8) -> f64 {
    let limit = max_magnitude(digits);
    let scale = POW10[usize::from(digits)];
    (value.clamp(-limit, limit) * scale).round() / scale
}
