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

//! Error types for management commands.

use crate::config::ConfigError;
use crate::signing::SignError;
use nfd_mgmt_control::{CodecError, ControlError};
use nfd_mgmt_transport::TransportError;
use thiserror::Error;

/// Errors that can occur while running a management command.
///
/// The `Display` form of each variant is the diagnostic handed to failure
/// continuations. For [`Error::Rejected`] it is the forwarder's status text,
/// unchanged.
#[derive(Debug, Error)]
pub enum Error {
    /// Deregistration was attempted before a successful self-registration.
    #[error(
        "face id is not set, should have been set after a successful prefix registration command"
    )]
    FaceIdNotSet,

    /// No reply arrived within the command timeout.
    #[error("command timed out")]
    Timeout,

    /// The forwarder replied with a non-success status.
    #[error("{text}")]
    Rejected {
        /// Status code of the reply.
        code: u32,
        /// Status text of the reply.
        text: String,
    },

    /// The reply, or the body it carries, could not be decoded.
    #[error("{0}")]
    Decode(#[source] CodecError),

    /// The reply decoded but lacks a field the command depends on.
    #[error("malformed reply: {0}")]
    Malformed(String),

    /// The parameter block could not be encoded.
    #[error("encoding failed: {0}")]
    Encode(#[source] CodecError),

    /// Face failure other than a timeout.
    #[error("transport error: {0}")]
    Transport(#[source] TransportError),

    /// The command could not be signed.
    #[error("signing failed: {0}")]
    Signing(#[from] SignError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The command name could not be built.
    #[error("invalid command: {0}")]
    Control(#[source] ControlError),
}

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A local precondition failed before anything was sent.
    LocalPrecondition,
    /// The forwarder did not reply in time.
    Timeout,
    /// The forwarder reported a failure status.
    Protocol,
    /// The reply could not be understood.
    Decode,
    /// Anything else: encoding, signing, transport or configuration.
    Other,
}

impl Error {
    /// Creates a malformed reply error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }

    /// Creates a rejection error.
    pub fn rejected(code: u32, text: impl Into<String>) -> Self {
        Self::Rejected {
            code,
            text: text.into(),
        }
    }

    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::FaceIdNotSet => ErrorKind::LocalPrecondition,
            Self::Timeout => ErrorKind::Timeout,
            Self::Rejected { .. } => ErrorKind::Protocol,
            Self::Decode(_) | Self::Malformed(_) => ErrorKind::Decode,
            Self::Encode(_)
            | Self::Transport(_)
            | Self::Signing(_)
            | Self::Config(_)
            | Self::Control(_) => ErrorKind::Other,
        }
    }

    /// Returns the forwarder's status code for rejections.
    #[must_use]
    pub const fn status_code(&self) -> Option<u32> {
        match self {
            Self::Rejected { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<TransportError> for Error {
    fn from(error: TransportError) -> Self {
        match error {
            TransportError::Timeout => Self::Timeout,
            other => Self::Transport(other),
        }
    }
}

impl From<ControlError> for Error {
    fn from(error: ControlError) -> Self {
        match error {
            ControlError::Codec(e) => Self::Encode(e),
            other => Self::Control(other),
        }
    }
}
