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

//! Codec abstraction for parameter blocks and status envelopes.
//!
//! The management client never looks inside the binary form of the values
//! it sends and receives; it only needs them to encode to a single opaque
//! segment and decode back. This module provides a trait for pluggable
//! codecs, with a default bincode implementation.

use crate::ControlResponse;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Errors that can occur during codec operations.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Serialization failed.
    #[error("serialization failed: {0}")]
    Serialize(String),

    /// Deserialization failed.
    #[error("deserialization failed: {0}")]
    Deserialize(String),
}

/// Trait for management message codecs.
///
/// Implementations must be thread-safe as they are shared by every command
/// a controller issues.
pub trait Codec: Send + Sync + 'static {
    /// Encodes a value to bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, CodecError>;

    /// Decodes bytes to a value.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a valid encoding of `T`.
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, CodecError>;

    /// Encodes a status envelope.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn encode_response(&self, response: &ControlResponse) -> Result<Vec<u8>, CodecError> {
        self.encode(response)
    }

    /// Decodes a status envelope.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is not a valid envelope.
    fn decode_response(&self, data: &[u8]) -> Result<ControlResponse, CodecError> {
        self.decode(data)
    }
}

/// Bincode codec.
///
/// This is the default codec. It produces compact fixed-layout encodings.
#[derive(Debug, Clone, Copy, Default)]
pub struct BincodeCodec;

impl BincodeCodec {
    /// Creates a new bincode codec.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Codec for BincodeCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        bincode::serialize(value).map_err(|e| CodecError::Serialize(e.to_string()))
    }

    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, CodecError> {
        bincode::deserialize(data).map_err(|e| CodecError::Deserialize(e.to_string()))
    }
}
