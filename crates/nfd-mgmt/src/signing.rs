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

//! Command signing.
//!
//! The forwarder authenticates management commands by the signature carried
//! in their names. [`CommandSigner`] is the seam where that happens, just
//! before a command is handed to the face.
//!
//! Two signers are provided:
//!
//! - [`Unsigned`] leaves the command as built. This is the default and the
//!   forwarder must be configured to accept unsigned commands.
//! - [`DigestSigner`] appends a timestamp, a sequence number and a SHA-256
//!   digest of the preceding name, giving integrity and replay protection
//!   without key management.

use nfd_mgmt_control::{Interest, Name, NameComponent};
use sha2::{Digest, Sha256};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use tracing::{debug, trace};

/// Errors that can occur while signing a command.
#[derive(Debug, Error)]
pub enum SignError {
    /// The system clock reads earlier than the Unix epoch.
    #[error("system clock is before the unix epoch")]
    Clock,
}

/// Signs command Interests before they are submitted.
pub trait CommandSigner: Send + Sync + 'static {
    /// Signs the Interest in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the signature cannot be produced.
    fn sign(&self, interest: &mut Interest) -> Result<(), SignError>;
}

/// Leaves commands unsigned.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unsigned;

impl CommandSigner for Unsigned {
    fn sign(&self, interest: &mut Interest) -> Result<(), SignError> {
        debug!(name = %interest.name, "submitting command unsigned");
        Ok(())
    }
}

/// Signs commands with a SHA-256 digest.
///
/// Appends three components to the command name:
///
/// ```text
/// <command> / <timestamp ms, u64 BE> / <sequence, u64 BE> / <sha256>
/// ```
///
/// The digest covers every component before it, each prefixed with its
/// length as a big-endian `u64`.
#[derive(Debug, Default)]
pub struct DigestSigner {
    sequence: AtomicU64,
}

impl DigestSigner {
    /// Number of components appended by [`sign`](CommandSigner::sign).
    pub const SIGNATURE_COMPONENTS: usize = 3;

    /// Creates a new digest signer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sequence: AtomicU64::new(0),
        }
    }

    /// Returns true if the last component of `name` is a valid digest of
    /// the rest.
    #[must_use]
    pub fn verify(name: &Name) -> bool {
        let Some((signature, signed)) = name.components().split_last() else {
            return false;
        };
        if signed.len() < Self::SIGNATURE_COMPONENTS - 1 {
            return false;
        }
        digest(signed).as_slice() == signature.as_bytes()
    }
}

impl CommandSigner for DigestSigner {
    fn sign(&self, interest: &mut Interest) -> Result<(), SignError> {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| SignError::Clock)?;
        let timestamp = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed);

        interest.name.push(timestamp.to_be_bytes().to_vec());
        interest.name.push(sequence.to_be_bytes().to_vec());
        let signature = digest(interest.name.components());
        interest.name.push(signature);

        trace!(name = %interest.name, timestamp, sequence, "signed command");
        Ok(())
    }
}

fn digest(components: &[NameComponent]) -> Vec<u8> {
    let mut hasher = Sha256::new();
    for component in components {
        hasher.update((component.len() as u64).to_be_bytes());
        hasher.update(component.as_bytes());
    }
    hasher.finalize().to_vec()
}
