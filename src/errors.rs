// Copyright 2025 Fondazione LINKS

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//     http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use thiserror::Error;

/// Errors raised by the BBS04 ceremony, protocol and encodings.
///
/// A signature or a user key that simply does not verify is *not* an error:
/// `verify` and `verify_user_key` answer with a plain `bool`.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A sampled or derived value is zero (or the identity) where an inverse is needed.
    /// Callers may retry with fresh randomness.
    #[error("Degenerate value: {0}")]
    DegenerateValue(String),
    #[error("Truncated input: needed {needed} bytes, {remaining} remaining")]
    TruncatedInput { needed: usize, remaining: usize },
    #[error("Malformed encoding: {0}")]
    MalformedEncoding(String),
    /// The underlying group library or the random source failed.
    #[error("Group library failure: {0}")]
    CollaboratorFailure(String),
}
