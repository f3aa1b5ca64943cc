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

//! Functions for parsing decimal text back into `f64` values.

use crate::{
    FAILED,
    error::ParseError,
    rounding::{check_digits, round},
};

/// Parses the decimal representation of a floating point number.
///
/// Scientific notation is accepted (`"1.5E-3"`, `"-2e10"`), as are bare fractional forms such as
/// `".2"`. Infinity literals and finite literals beyond the representable range round to
/// ±[`max_magnitude`](crate::max_magnitude). The result is rounded to the nearest number with at
/// most `digits` fractional digits via [`round`].
///
/// # Errors
///
/// This function returns an error:
/// - If `s` is not a valid floating point literal.
/// - If `s` parses to NaN.
///
/// # Panics
///
/// This function panics:
/// - If `digits` exceeds [`MAX_DIGITS`](crate::MAX_DIGITS).
///
/// # Examples
///
/// ```rust
/// use decfmt::parse;
///
/// assert_eq!(parse(".2", 1), Ok(0.2));
/// assert_eq!(parse("1e3", 0), Ok(1000.0));
/// ```
pub fn parse(s: &str, digits: u8) -> Result<f64, ParseError> {
    check_digits(digits).expect(FAILED);
    let value: f64 = s.parse().map_err(|source| ParseError::InvalidNumber {
        input: s.to_string(),
        source,
    })?;
    if value.is_nan() {
        return Err(ParseError::Nan {
            input: s.to_string(),
        });
    }
    Ok(round(value, digits))
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::{
        format::format,
        rounding::{MAX_DIGITS, max_magnitude},
    };

    #[rstest]
    #[case("0", 0, 0.0)]
    #[case("1", 0, 1.0)]
    #[case("-1", 0, -1.0)]
    #[case(".2", 1, 0.2)]
    #[case("-.2", 1, -0.2)]
    #[case("3.", 0, 3.0)]
    #[case("+4.5", 1, 4.5)]
    #[case("0.19", 1, 0.2)]
    #[case("3.14159", 5, 3.14159)]
    #[case("1.5E-3", 3, 0.002)]
    #[case("-2e10", 0, -20_000_000_000.0)]
    #[case("1e-400", 5, 0.0)]
    fn test_parse(#[case] input: &str, #[case] digits: u8, #[case] expected: f64) {
        assert_eq!(parse(input, digits), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case(" 1.0")]
    #[case("1.0 ")]
    #[case("1,5")]
    #[case("--1")]
    #[case("1.2.3")]
    fn test_parse_invalid_input(#[case] input: &str) {
        assert!(matches!(
            parse(input, 2),
            Err(ParseError::InvalidNumber { .. })
        ));
    }

    #[rstest]
    #[case("nan")]
    #[case("NaN")]
    #[case("NAN")]
    #[case("-nan")]
    #[case("+nan")]
    fn test_parse_nan_is_rejected(#[case] input: &str) {
        assert_eq!(
            parse(input, 0),
            Err(ParseError::Nan {
                input: input.to_string()
            })
        );
    }

    #[rstest]
    fn test_parse_error_display() {
        let err = parse("abc", 2).unwrap_err();
        assert!(
            err.to_string()
                .starts_with("Error parsing 'abc' as a decimal number:")
        );

        let err = parse("nan", 2).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error parsing 'nan': NaN is not representable"
        );
    }

    #[rstest]
    #[case("inf")]
    #[case("+inf")]
    #[case("Infinity")]
    fn test_parse_infinity_clamps(#[case] input: &str) {
        for digits in [0, MAX_DIGITS] {
            let expected = round(max_magnitude(digits), digits);
            assert_eq!(parse(input, digits), Ok(expected));
        }
    }

    #[rstest]
    fn test_parse_negative_infinity_clamps() {
        let expected = -round(max_magnitude(5), 5);
        assert_eq!(parse("-inf", 5), Ok(expected));
    }

    #[rstest]
    fn test_parse_overflowing_literal_clamps() {
        assert_eq!(parse("1e400", 0), Ok(round(max_magnitude(0), 0)));
    }

    #[rstest]
    #[should_panic(expected = "Condition failed: `digits` exceeded maximum `MAX_DIGITS` (10)")]
    fn test_parse_invalid_digits_panics() {
        let _ = parse("1.0", MAX_DIGITS + 1);
    }

    #[rstest]
    #[case(0.0, 0)]
    #[case(-0.0, 3)]
    #[case(0.1, 1)]
    #[case(-0.19, 1)]
    #[case(std::f64::consts::PI, 5)]
    #[case(1.0e15, 0)]
    #[case(-123.456, 10)]
    #[case(f64::INFINITY, 2)]
    #[case(f64::MAX, 4)]
    fn test_round_trip(#[case] value: f64, #[case] digits: u8) {
        let rounded = round(value, digits);
        let text = format(rounded, digits);
        assert_eq!(parse(&text, digits), Ok(rounded));
    }

    #[rstest]
    fn test_round_trip_value_sweep() {
        let mut values = vec![
            0.0,
            -0.0,
            f64::EPSILON,
            f64::MIN_POSITIVE,
            f64::MAX,
            f64::MIN,
            f64::INFINITY,
            f64::NEG_INFINITY,
        ];
        for i in 1..=250 {
            let x = f64::from(i) * 0.137;
            values.push(x);
            values.push(-x);
            values.push(x * 1.0e7);
            values.push(x * 1.0e13);
            values.push(1.0 / x);
        }

        for &value in &values {
            for digits in 0..=MAX_DIGITS {
                let rounded = round(value, digits);
                let text = format(rounded, digits);
                assert_eq!(
                    parse(&text, digits),
                    Ok(rounded),
                    "value {value} digits {digits} text {text}"
                );
            }
        }
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Property-based testing
    ////////////////////////////////////////////////////////////////////////////////

    use proptest::prelude::*;

    fn value_strategy() -> impl Strategy<Value = f64> {
        prop_oneof![
            // Typical magnitudes
            -1_000.0..1_000.0,
            // Fine-grained fractions
            -1.0..1.0,
            // Around and beyond the clamp bounds
            -1.0e18..1.0e18,
            // Edge values
            Just(0.0),
            Just(-0.0),
            Just(f64::EPSILON),
            Just(f64::MIN_POSITIVE),
            Just(f64::MAX),
            Just(f64::MIN),
            Just(f64::INFINITY),
            Just(f64::NEG_INFINITY),
        ]
    }

    proptest! {
        #[rstest]
        fn prop_parse_reverses_format(value in value_strategy(), digits in 0u8..=MAX_DIGITS) {
            let rounded = round(value, digits);
            let text = format(rounded, digits);
            prop_assert_eq!(parse(&text, digits), Ok(rounded), "text was {}", text);
        }

        #[rstest]
        fn prop_parse_accepts_scientific_notation(
            mantissa in -999i64..=999,
            exponent in -12i32..=12,
        ) {
            let text = format!("{mantissa}e{exponent}");
            prop_assert!(parse(&text, 6).is_ok());
        }
    }
}
