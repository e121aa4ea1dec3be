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

//! Management message types for the NFD management protocol.
//!
//! This crate provides the values exchanged between a management client and
//! the local forwarder: names, Interests and Data, the FIB and face parameter
//! blocks, the `ControlResponse` status envelope, the typed command address,
//! and a codec abstraction for their binary encoding.

mod codec;
mod command;
mod error;
mod messages;
mod name;

pub use codec::{BincodeCodec, Codec, CodecError};
pub use command::{
    CommandName, ADD_NEXTHOP, FACES_PREFIX, FACE_CREATE, FACE_DESTROY, FIB_PREFIX, REMOVE_NEXTHOP,
};
pub use error::ControlError;
pub use messages::{
    ControlResponse, Data, FaceManagementOptions, FibManagementOptions, Interest,
    DEFAULT_INTEREST_LIFETIME, INVALID_FACE_ID, STATUS_OK,
};
pub use name::{Name, NameComponent};
