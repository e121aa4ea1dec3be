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

//! Face abstraction for the NFD management client.
//!
//! A face expresses Interests towards the forwarder and hands back the
//! matching Data, or reports that none arrived within the Interest lifetime.
//! This crate defines that seam and an in-memory implementation for tests.

mod error;
mod mock;
mod traits;

pub use error::TransportError;
pub use mock::{mock_face_pair, ExpressedInterest, MockFace, MockForwarder};
pub use traits::Face;
