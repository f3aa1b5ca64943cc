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

//! Functions for formatting `f64` values as compact decimal text.
//!
//! Output consists of a sign, an integer part, and a fractional part, each present only when
//! needed. Trailing fractional zeros are trimmed and a bare fraction carries no leading zero,
//! so one tenth formats as `".1"` rather than `"0.1"`.

use std::io;

use crate::{
    FAILED,
    rounding::{POW10, check_digits},
};

/// Formats `value` as a decimal number with at most `digits` fractional digits.
///
/// Trailing zeros are omitted and the output never uses scientific notation. Zero of either
/// sign formats as `"0"`. The input is expected to be [`round`](crate::round) output for the
/// same `digits`; only such values are covered by the round-trip guarantee.
///
/// # Panics
///
/// This function panics:
/// - If `digits` exceeds [`MAX_DIGITS`](crate::MAX_DIGITS).
///
/// # Examples
///
/// ```rust
/// use decfmt::format;
///
/// assert_eq!(format(0.1, 1), ".1");
/// assert_eq!(format(-0.19, 1), "-.2");
/// assert_eq!(format(std::f64::consts::PI, 2), "3.14");
/// ```
#[must_use]
pub fn format(value: f64, digits: u8) -> String {
    check_digits(digits).expect(FAILED);
    String::from_utf8(emit(value, digits)).expect("emitted bytes are ASCII")
}

/// Like [`format`], but writes the result to `writer`.
///
/// # Errors
///
/// This function returns an error:
/// - If writing to `writer` fails.
///
/// # Panics
///
/// This function panics:
/// - If `digits` exceeds [`MAX_DIGITS`](crate::MAX_DIGITS).
pub fn write<W: io::Write>(writer: &mut W, value: f64, digits: u8) -> io::Result<()> {
    check_digits(digits).expect(FAILED);
    writer.write_all(&emit(value, digits))
}

/// Emits the canonical byte representation of `value` at `digits` precision.
fn emit(value: f64, digits: u8) -> Vec<u8> {
    let z = (value * POW10[usize::from(digits)]).round() as i64;
    if z == 0 {
        return vec![b'0'];
    }

    let neg = z < 0;
    let mut z = z.unsigned_abs();
    let digits = usize::from(digits);

    // Digits are emitted least significant first with the decimal point placed in mid-stream,
    // then the buffer is reversed once at the end.
    let mut buf = Vec::with_capacity(24);
    let mut emitted = 0;
    while z != 0 || emitted <= digits {
        if emitted == digits {
            buf.push(b'.');
        }
        buf.push(b'0' + (z % 10) as u8);
        z /= 10;
        emitted += 1;
    }

    // Values without an integer part leave a placeholder '0' above the point; dropping it keeps
    // bare fractions in the ".1" form.
    if emitted == digits + 1 && buf[digits + 1] == b'0' {
        buf.truncate(digits + 1);
    }

    // Trailing zeros of the final text sit at the front of the buffer. When the whole fractional
    // part is zero the scan stops on the point itself, which is then dropped as well.
    let mut trim = 0;
    while buf[trim] == b'0' {
        trim += 1;
    }
    if trim == digits {
        trim += 1;
    }
    buf.drain(..trim);

    if neg {
        buf.push(b'-');
    }
    buf.reverse();
    buf
}
