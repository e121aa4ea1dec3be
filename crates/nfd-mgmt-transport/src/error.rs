// Copyright 2024-2026 Farlight Networks, LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Transport error types.

use thiserror::Error;

/// Errors that can occur while expressing an Interest.
#[derive(Debug, Error)]
pub enum TransportError {
    /// No Data arrived within the Interest lifetime.
    #[error("interest timed out")]
    Timeout,

    /// The face has been closed.
    #[error("face closed")]
    Closed,

    /// Failure reported by the underlying face implementation.
    #[error("face error: {0}")]
    Face(String),
}

impl TransportError {
    /// Returns true if this error is a timeout.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }
}
