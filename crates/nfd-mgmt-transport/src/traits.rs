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

//! Transport trait definitions.
//!
//! These traits abstract over the face connecting the client to the
//! forwarder, so the controller works the same over a Unix socket face, a
//! TCP face, or the in-memory mock.

use crate::TransportError;
use nfd_mgmt_control::{Data, Interest};
use std::future::Future;
use std::sync::Arc;

/// Abstraction over a face to the local forwarder.
///
/// The face owns the wait for a reply: it applies the Interest lifetime and
/// resolves exactly once, with the matching Data or with
/// [`TransportError::Timeout`].
pub trait Face: Send + Sync + 'static {
    /// Expresses an Interest and waits for the matching Data.
    fn express_interest(
        &self,
        interest: Interest,
    ) -> impl Future<Output = Result<Data, TransportError>> + Send;
}

impl<F: Face> Face for Arc<F> {
    fn express_interest(
        &self,
        interest: Interest,
    ) -> impl Future<Output = Result<Data, TransportError>> + Send {
        (**self).express_interest(interest)
    }
}
