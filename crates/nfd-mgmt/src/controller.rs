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

//! Management command controller.
//!
//! The [`Controller`] turns intents ("register this prefix", "remove this
//! next hop") into command Interests, submits them through a [`Face`], and
//! decodes the forwarder's `ControlResponse` into a typed outcome.
//!
//! # Example
//!
//! ```ignore
//! use nfd_mgmt::{Config, Controller, Name};
//!
//! let controller = Controller::new(face, Config::default())?;
//!
//! let prefix: Name = "/example/app".parse()?;
//! controller.self_register_prefix(&prefix).await?;
//! // ... serve Interests under /example/app ...
//! controller.self_deregister_prefix(&prefix).await?;
//! ```

use crate::continuation::Continuations;
use crate::signing::{CommandSigner, Unsigned};
use crate::state::CommandState;
use crate::{Config, Error};
use nfd_mgmt_control::{
    BincodeCodec, Codec, CommandName, Data, FaceManagementOptions, FibManagementOptions, Interest,
    Name, ADD_NEXTHOP, INVALID_FACE_ID, REMOVE_NEXTHOP,
};
use nfd_mgmt_transport::Face;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, trace, warn};

/// State shared between clones of a [`Controller`].
struct ControllerInner<F, C> {
    face: F,
    codec: C,
    signer: Arc<dyn CommandSigner>,
    config: Config,
    /// Face id assigned by the last successful self-registration, or
    /// [`INVALID_FACE_ID`].
    face_id: AtomicU64,
}

/// Client for the forwarder's management protocol.
///
/// Cloning is cheap; clones share the face and the recorded face id.
pub struct Controller<F, C = BincodeCodec> {
    inner: Arc<ControllerInner<F, C>>,
}

impl<F, C> Clone for Controller<F, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<F: Face> Controller<F, BincodeCodec> {
    /// Creates a controller with the bincode codec that submits commands
    /// unsigned.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(face: F, config: Config) -> Result<Self, Error> {
        Self::with_parts(face, BincodeCodec::new(), Arc::new(Unsigned), config)
    }
}

impl<F: Face, C: Codec> Controller<F, C> {
    /// Creates a controller from its collaborators.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_parts(
        face: F,
        codec: C,
        signer: Arc<dyn CommandSigner>,
        config: Config,
    ) -> Result<Self, Error> {
        config.validate()?;

        debug!(
            fib_prefix = %config.fib_prefix,
            faces_prefix = %config.faces_prefix,
            timeout = ?config.command_timeout,
            "controller created"
        );

        Ok(Self {
            inner: Arc::new(ControllerInner {
                face,
                codec,
                signer,
                config,
                face_id: AtomicU64::new(INVALID_FACE_ID),
            }),
        })
    }

    /// Returns the controller configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Returns the face id recorded by the last successful
    /// self-registration.
    #[must_use]
    pub fn face_id(&self) -> Option<u64> {
        match self.inner.face_id.load(Ordering::SeqCst) {
            INVALID_FACE_ID => None,
            face_id => Some(face_id),
        }
    }

    /// Registers `prefix` towards the face this controller talks through.
    ///
    /// Sends `add-nexthop` with face id 0, which the forwarder reads as "the
    /// face this command arrived on". The face id the forwarder used is
    /// recorded before this method returns, for
    /// [`self_deregister_prefix`](Self::self_deregister_prefix).
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails, or if the reply does not
    /// carry a face id.
    #[instrument(skip_all, fields(prefix = %prefix))]
    pub async fn self_register_prefix(&self, prefix: &Name) -> Result<(), Error> {
        let options = FibManagementOptions::new()
            .with_name(prefix.clone())
            .with_face_id(INVALID_FACE_ID)
            .with_cost(self.inner.config.self_registration_cost);

        let entry = self.start_fib_command(ADD_NEXTHOP, &options).await?;
        self.record_self_registered_face_id(&entry)
    }

    /// Removes the next hop created by
    /// [`self_register_prefix`](Self::self_register_prefix).
    ///
    /// # Errors
    ///
    /// Returns [`Error::FaceIdNotSet`] without contacting the forwarder if
    /// no self-registration has succeeded yet, or an error if the command
    /// fails.
    #[instrument(skip_all, fields(prefix = %prefix))]
    pub async fn self_deregister_prefix(&self, prefix: &Name) -> Result<(), Error> {
        let Some(face_id) = self.face_id() else {
            warn!("deregistration requested before any self-registration");
            return Err(Error::FaceIdNotSet);
        };

        let options = FibManagementOptions::new()
            .with_name(prefix.clone())
            .with_face_id(face_id);

        self.start_fib_command(REMOVE_NEXTHOP, &options)
            .await
            .map(|_| ())
    }

    /// Runs a FIB command and returns the parameters the forwarder applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be built or signed, times
    /// out, is rejected, or the reply is malformed.
    pub async fn start_fib_command(
        &self,
        verb: &str,
        options: &FibManagementOptions,
    ) -> Result<FibManagementOptions, Error> {
        self.run_command(&self.inner.config.fib_prefix, verb, options)
            .await
    }

    /// Runs a face command and returns the parameters the forwarder applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be built or signed, times
    /// out, is rejected, or the reply is malformed.
    pub async fn start_face_command(
        &self,
        verb: &str,
        options: &FaceManagementOptions,
    ) -> Result<FaceManagementOptions, Error> {
        self.run_command(&self.inner.config.faces_prefix, verb, options)
            .await
    }

    /// Runs [`self_register_prefix`](Self::self_register_prefix) on the
    /// runtime and hands the outcome to `continuations`.
    pub fn spawn_self_register_prefix(
        &self,
        prefix: Name,
        continuations: Continuations<()>,
    ) -> JoinHandle<()> {
        let controller = self.clone();
        tokio::spawn(async move {
            let outcome = controller.self_register_prefix(&prefix).await;
            continuations.complete(outcome);
        })
    }

    /// Runs [`self_deregister_prefix`](Self::self_deregister_prefix) on the
    /// runtime and hands the outcome to `continuations`.
    ///
    /// If no face id is recorded the failure is delivered before this
    /// method returns and nothing is spawned.
    pub fn spawn_self_deregister_prefix(
        &self,
        prefix: Name,
        continuations: Continuations<()>,
    ) -> Option<JoinHandle<()>> {
        if self.face_id().is_none() {
            warn!(prefix = %prefix, "deregistration requested before any self-registration");
            continuations.complete(Err(Error::FaceIdNotSet));
            return None;
        }

        let controller = self.clone();
        Some(tokio::spawn(async move {
            let outcome = controller.self_deregister_prefix(&prefix).await;
            continuations.complete(outcome);
        }))
    }

    /// Runs [`start_fib_command`](Self::start_fib_command) on the runtime
    /// and hands the outcome to `continuations`.
    pub fn spawn_fib_command(
        &self,
        verb: impl Into<String>,
        options: FibManagementOptions,
        continuations: Continuations<FibManagementOptions>,
    ) -> JoinHandle<()> {
        let controller = self.clone();
        let verb = verb.into();
        tokio::spawn(async move {
            let outcome = controller.start_fib_command(&verb, &options).await;
            continuations.complete(outcome);
        })
    }

    /// Runs [`start_face_command`](Self::start_face_command) on the runtime
    /// and hands the outcome to `continuations`.
    pub fn spawn_face_command(
        &self,
        verb: impl Into<String>,
        options: FaceManagementOptions,
        continuations: Continuations<FaceManagementOptions>,
    ) -> JoinHandle<()> {
        let controller = self.clone();
        let verb = verb.into();
        tokio::spawn(async move {
            let outcome = controller.start_face_command(&verb, &options).await;
            continuations.complete(outcome);
        })
    }

    /// Records the face id carried by a successful registration reply.
    fn record_self_registered_face_id(&self, entry: &FibManagementOptions) -> Result<(), Error> {
        match entry.face_id() {
            Some(face_id) if face_id != INVALID_FACE_ID => {
                let previous = self.inner.face_id.swap(face_id, Ordering::SeqCst);
                info!(face_id, previous, "recorded self-registered face id");
                Ok(())
            }
            _ => {
                warn!("registration reply carries no face id");
                Err(Error::malformed("registration reply carries no face id"))
            }
        }
    }

    /// Builds, signs and submits one command, then decodes its reply.
    #[instrument(skip_all, fields(root = %root, verb = %verb))]
    async fn run_command<T>(&self, root: &Name, verb: &str, options: &T) -> Result<T, Error>
    where
        T: Serialize + DeserializeOwned,
    {
        let command = CommandName::encode(&self.inner.codec, root.clone(), verb, options)?;
        let mut state = CommandState::Built;

        let mut interest =
            Interest::new(command.to_name()).with_lifetime(self.inner.config.command_timeout);
        if let Err(e) = self.inner.signer.sign(&mut interest) {
            warn!(command = %command, error = %e, "failed to sign command");
            advance(&mut state, CommandState::Aborted);
            return Err(e.into());
        }

        debug!(command = %command, lifetime = ?interest.lifetime, "submitting command");
        advance(&mut state, CommandState::Submitted);

        let outcome = match self.inner.face.express_interest(interest).await {
            Ok(data) => self.process_response(&data),
            Err(e) => {
                let error = Error::from(e);
                warn!(command = %command, %error, "command not answered");
                Err(error)
            }
        };

        advance(&mut state, CommandState::for_outcome(&outcome));
        outcome
    }

    /// Decodes a reply and checks its status.
    fn process_response<T: DeserializeOwned>(&self, data: &Data) -> Result<T, Error> {
        let response = self
            .inner
            .codec
            .decode_response(&data.content)
            .map_err(|e| {
                warn!(name = %data.name, error = %e, "malformed control response");
                Error::Decode(e)
            })?;

        if !response.is_success() {
            warn!(code = response.code, text = %response.text, "command rejected");
            return Err(Error::Rejected {
                code: response.code,
                text: response.text,
            });
        }

        self.inner.codec.decode(&response.body).map_err(|e| {
            warn!(name = %data.name, error = %e, "malformed control response body");
            Error::Decode(e)
        })
    }
}

fn advance(state: &mut CommandState, next: CommandState) {
    debug_assert!(
        state.can_transition_to(next),
        "invalid command transition {state} -> {next}"
    );
    trace!(from = %state, to = %next, "command state");
    *state = next;
}
