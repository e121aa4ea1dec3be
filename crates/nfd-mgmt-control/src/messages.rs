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

//! Management message definitions.
//!
//! This module defines the packets a management client exchanges with the
//! forwarder ([`Interest`] and [`Data`]), the parameter blocks carried in
//! command names, and the [`ControlResponse`] status envelope carried in
//! replies.

use crate::Name;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Status code of a successful command.
pub const STATUS_OK: u32 = 200;

/// Face id meaning "not assigned". In a command it asks the forwarder to use
/// the face the command arrived on.
pub const INVALID_FACE_ID: u64 = 0;

/// Default Interest lifetime.
pub const DEFAULT_INTEREST_LIFETIME: Duration = Duration::from_secs(4);

/// A request for the Data packet carrying `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interest {
    /// Name being requested.
    pub name: Name,
    /// How long the requester is willing to wait for a reply.
    pub lifetime: Duration,
}

impl Interest {
    /// Creates an Interest with the default lifetime.
    #[must_use]
    pub const fn new(name: Name) -> Self {
        Self {
            name,
            lifetime: DEFAULT_INTEREST_LIFETIME,
        }
    }

    /// Sets the Interest lifetime.
    #[must_use]
    pub const fn with_lifetime(mut self, lifetime: Duration) -> Self {
        self.lifetime = lifetime;
        self
    }
}

/// A named reply to an [`Interest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Data {
    /// Name of the packet.
    pub name: Name,
    /// Payload. For management replies this is an encoded [`ControlResponse`].
    pub content: Bytes,
}

impl Data {
    /// Creates a Data packet.
    #[must_use]
    pub fn new(name: Name, content: impl Into<Bytes>) -> Self {
        Self {
            name,
            content: content.into(),
        }
    }
}

/// Parameters of a FIB management command.
///
/// Fields are optional; each command uses the subset it needs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FibManagementOptions {
    name: Option<Name>,
    face_id: Option<u64>,
    cost: Option<u64>,
}

impl FibManagementOptions {
    /// Creates an empty parameter block.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            name: None,
            face_id: None,
            cost: None,
        }
    }

    /// Sets the FIB entry prefix.
    #[must_use]
    pub fn with_name(mut self, name: Name) -> Self {
        self.name = Some(name);
        self
    }

    /// Sets the next-hop face id.
    #[must_use]
    pub const fn with_face_id(mut self, face_id: u64) -> Self {
        self.face_id = Some(face_id);
        self
    }

    /// Sets the next-hop cost.
    #[must_use]
    pub const fn with_cost(mut self, cost: u64) -> Self {
        self.cost = Some(cost);
        self
    }

    /// Returns the FIB entry prefix.
    #[must_use]
    pub const fn name(&self) -> Option<&Name> {
        self.name.as_ref()
    }

    /// Returns the next-hop face id.
    #[must_use]
    pub const fn face_id(&self) -> Option<u64> {
        self.face_id
    }

    /// Returns the next-hop cost.
    #[must_use]
    pub const fn cost(&self) -> Option<u64> {
        self.cost
    }
}

/// Parameters of a face management command.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FaceManagementOptions {
    face_id: Option<u64>,
    uri: Option<String>,
}

impl FaceManagementOptions {
    /// Creates an empty parameter block.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            face_id: None,
            uri: None,
        }
    }

    /// Sets the face id.
    #[must_use]
    pub const fn with_face_id(mut self, face_id: u64) -> Self {
        self.face_id = Some(face_id);
        self
    }

    /// Sets the remote URI of the face, e.g. `udp4://192.0.2.1:6363`.
    #[must_use]
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Returns the face id.
    #[must_use]
    pub const fn face_id(&self) -> Option<u64> {
        self.face_id
    }

    /// Returns the remote URI.
    #[must_use]
    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }
}

/// Status envelope of a management reply.
///
/// A code of [`STATUS_OK`] means the command succeeded and `body` holds the
/// encoded parameter block the forwarder applied. Any other code is a
/// failure and `text` explains it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlResponse {
    /// Status code, HTTP-like.
    pub code: u32,
    /// Human-readable status text.
    pub text: String,
    /// Encoded parameter block (successful replies only).
    pub body: Vec<u8>,
}

impl ControlResponse {
    /// Creates a response with an empty body.
    #[must_use]
    pub fn new(code: u32, text: impl Into<String>) -> Self {
        Self {
            code,
            text: text.into(),
            body: Vec::new(),
        }
    }

    /// Creates a successful response carrying `body`.
    #[must_use]
    pub fn success(body: Vec<u8>) -> Self {
        Self::new(STATUS_OK, "Success").with_body(body)
    }

    /// Sets the body.
    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Returns true if the code is [`STATUS_OK`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.code == STATUS_OK
    }
}
