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

//! Errors associated with parsing decimal text.

use std::num::ParseFloatError;

/// The error type returned when parsing decimal text fails.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ParseError {
    /// The input is not a valid decimal or scientific-notation number.
    #[error("Error parsing '{input}' as a decimal number: {source}")]
    InvalidNumber {
        /// The rejected input text.
        input: String,
        /// The underlying lexer error.
        source: ParseFloatError,
    },
    /// The input parsed to NaN, which has no decimal representation.
    #[error("Error parsing '{input}': NaN is not representable")]
    Nan {
        /// The rejected input text.
        input: String,
    },
}
