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

//! Command/response client for the NFD management protocol.
//!
//! `nfd-mgmt` issues named management commands to the local forwarder and
//! interprets its replies. It covers two command families:
//!
//! - FIB commands under `/localhost/nfd/fib` (`add-nexthop`, `remove-nexthop`)
//! - Face commands under `/localhost/nfd/faces` (`create`, `destroy`)
//!
//! On top of the generic commands the [`Controller`] offers prefix
//! self-registration, which records the face id the forwarder assigned so a
//! later self-deregistration can target it.
//!
//! # Architecture
//!
//! Commands are addressed as `<root>/<verb>/<encoded-parameters>` and sent
//! as Interests through a [`Face`]. The reply's `ControlResponse` is decoded
//! with a [`Codec`]; status 200 means success and its body carries the
//! parameters the forwarder applied. Any other status is a failure whose
//! text is reported unchanged.
//!
//! # Example
//!
//! ```ignore
//! use nfd_mgmt::{Config, Controller, Name};
//!
//! let controller = Controller::new(face, Config::default())?;
//!
//! let prefix = Name::parse("/example/app")?;
//! controller.self_register_prefix(&prefix).await?;
//! assert!(controller.face_id().is_some());
//! ```

pub use nfd_mgmt_control::{
    BincodeCodec, Codec, CodecError, CommandName, ControlError, ControlResponse, Data,
    FaceManagementOptions, FibManagementOptions, Interest, Name, NameComponent, ADD_NEXTHOP,
    FACES_PREFIX, FACE_CREATE, FACE_DESTROY, FIB_PREFIX, INVALID_FACE_ID, REMOVE_NEXTHOP,
    STATUS_OK,
};
pub use nfd_mgmt_transport::{
    mock_face_pair, ExpressedInterest, Face, MockFace, MockForwarder, TransportError,
};

mod config;
mod continuation;
mod controller;
mod error;
mod signing;
mod state;

pub use config::{Config, ConfigError};
pub use continuation::Continuations;
pub use controller::Controller;
pub use error::{Error, ErrorKind};
pub use signing::{CommandSigner, DigestSigner, SignError, Unsigned};
pub use state::CommandState;
