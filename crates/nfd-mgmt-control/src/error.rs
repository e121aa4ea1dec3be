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

//! Error types for management messages.

use thiserror::Error;

/// Errors that can occur while building or parsing management messages.
#[derive(Debug, Error)]
pub enum ControlError {
    /// A name URI could not be parsed.
    #[error("invalid name: {0}")]
    InvalidName(String),

    /// A command name does not have the `<root>/<verb>/<parameters>` shape.
    #[error("invalid command: {0}")]
    InvalidCommand(String),

    /// Codec error while encoding or decoding a parameter block.
    #[error("codec error: {0}")]
    Codec(#[from] crate::CodecError),
}

impl ControlError {
    /// Creates an invalid name error.
    pub fn invalid_name(message: impl Into<String>) -> Self {
        Self::InvalidName(message.into())
    }

    /// Creates an invalid command error.
    pub fn invalid_command(message: impl Into<String>) -> Self {
        Self::InvalidCommand(message.into())
    }
}
