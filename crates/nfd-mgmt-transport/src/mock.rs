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

//! Mock face implementation for testing.
//!
//! Provides an in-memory face and a forwarder end that sees every expressed
//! Interest and decides how to answer it, for use in unit and integration
//! tests without a running forwarder.

use crate::traits::Face;
use crate::TransportError;
use bytes::Bytes;
use nfd_mgmt_control::{Data, Interest};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::trace;

/// Creates a connected mock face and forwarder.
///
/// Interests expressed on the face are delivered to the forwarder, which
/// may answer them, drop them, or let them expire.
#[must_use]
pub fn mock_face_pair() -> (MockFace, MockForwarder) {
    let (tx, rx) = mpsc::unbounded_channel();
    (MockFace { tx }, MockForwarder { rx })
}

/// The client end of a mock face.
#[derive(Debug, Clone)]
pub struct MockFace {
    tx: mpsc::UnboundedSender<ExpressedInterest>,
}

impl Face for MockFace {
    async fn express_interest(&self, interest: Interest) -> Result<Data, TransportError> {
        let lifetime = interest.lifetime;
        let (responder, reply) = oneshot::channel();

        trace!(name = %interest.name, ?lifetime, "expressing interest");
        self.tx
            .send(ExpressedInterest {
                interest,
                responder,
            })
            .map_err(|_| TransportError::Closed)?;

        match timeout(lifetime, reply).await {
            Ok(Ok(data)) => Ok(data),
            // Dropped by the forwarder: report it now rather than waiting
            // out the lifetime.
            Ok(Err(_)) | Err(_) => Err(TransportError::Timeout),
        }
    }
}

/// The forwarder end of a mock face.
#[derive(Debug)]
pub struct MockForwarder {
    rx: mpsc::UnboundedReceiver<ExpressedInterest>,
}

impl MockForwarder {
    /// Waits for the next expressed Interest.
    ///
    /// Returns `None` once every [`MockFace`] clone has been dropped.
    pub async fn next_interest(&mut self) -> Option<ExpressedInterest> {
        self.rx.recv().await
    }

    /// Returns the next expressed Interest if one is already queued.
    pub fn try_next_interest(&mut self) -> Option<ExpressedInterest> {
        self.rx.try_recv().ok()
    }

    /// Answers every Interest with `handler` on a background task.
    ///
    /// Interests for which the handler returns `None` are dropped and time
    /// out on the face side.
    pub fn spawn<F>(mut self, mut handler: F) -> JoinHandle<()>
    where
        F: FnMut(&Interest) -> Option<Bytes> + Send + 'static,
    {
        tokio::spawn(async move {
            while let Some(expressed) = self.next_interest().await {
                match handler(expressed.interest()) {
                    Some(content) => {
                        expressed.reply(content);
                    }
                    None => expressed.ignore(),
                }
            }
        })
    }
}

/// An Interest received by a [`MockForwarder`], awaiting an answer.
#[derive(Debug)]
pub struct ExpressedInterest {
    interest: Interest,
    responder: oneshot::Sender<Data>,
}

impl ExpressedInterest {
    /// Returns the expressed Interest.
    #[must_use]
    pub const fn interest(&self) -> &Interest {
        &self.interest
    }

    /// Answers with a Data packet named after the Interest.
    ///
    /// Returns false if the face side stopped waiting.
    pub fn reply(self, content: impl Into<Bytes>) -> bool {
        let data = Data::new(self.interest.name.clone(), content);
        self.reply_with(data)
    }

    /// Answers with an arbitrary Data packet.
    ///
    /// Returns false if the face side stopped waiting.
    pub fn reply_with(self, data: Data) -> bool {
        self.responder.send(data).is_ok()
    }

    /// Drops the Interest without answering.
    pub fn ignore(self) {
        trace!(name = %self.interest.name, "dropping interest");
    }

    /// Keeps the Interest pending without answering.
    ///
    /// The returned value holds the reply channel open, so the face side
    /// waits until the Interest lifetime runs out.
    #[must_use]
    pub fn hold(self) -> oneshot::Sender<Data> {
        self.responder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nfd_mgmt_control::Name;
    use std::time::Duration;

    fn interest(uri: &str) -> Interest {
        Interest::new(Name::parse(uri).expect("parse should succeed"))
    }

    #[tokio::test]
    async fn reply_reaches_face() {
        let (face, mut forwarder) = mock_face_pair();

        let request = tokio::spawn(async move { face.express_interest(interest("/a/b")).await });

        let expressed = forwarder.next_interest().await.expect("interest");
        assert_eq!(expressed.interest().name.to_string(), "/a/b");
        assert!(expressed.reply(&b"payload"[..]));

        let data = request
            .await
            .expect("task should complete")
            .expect("reply should arrive");
        assert_eq!(data.name.to_string(), "/a/b");
        assert_eq!(&data.content[..], b"payload");
    }

    #[tokio::test]
    async fn ignored_interest_times_out() {
        let (face, mut forwarder) = mock_face_pair();

        let request = tokio::spawn(async move { face.express_interest(interest("/a")).await });
        forwarder.next_interest().await.expect("interest").ignore();

        let result = request.await.expect("task should complete");
        assert!(matches!(result, Err(TransportError::Timeout)));
    }

    #[tokio::test]
    async fn held_interest_expires_after_lifetime() {
        let (face, mut forwarder) = mock_face_pair();

        let request = tokio::spawn(async move {
            face.express_interest(interest("/a").with_lifetime(Duration::from_millis(50)))
                .await
        });
        let _pending = forwarder.next_interest().await.expect("interest").hold();

        let result = request.await.expect("task should complete");
        assert!(matches!(result, Err(TransportError::Timeout)));
    }

    #[tokio::test]
    async fn closed_forwarder_fails_fast() {
        let (face, forwarder) = mock_face_pair();
        drop(forwarder);

        let result = face.express_interest(interest("/a")).await;
        assert!(matches!(result, Err(TransportError::Closed)));
    }

    #[tokio::test]
    async fn try_next_is_empty_without_interests() {
        let (_face, mut forwarder) = mock_face_pair();
        assert!(forwarder.try_next_interest().is_none());
    }

    #[tokio::test]
    async fn spawned_handler_answers_and_drops() {
        let (face, forwarder) = mock_face_pair();
        let _server = forwarder.spawn(|interest| {
            (interest.name.len() == 1).then(|| Bytes::from_static(b"ok"))
        });

        let data = face
            .express_interest(interest("/one"))
            .await
            .expect("reply should arrive");
        assert_eq!(&data.content[..], b"ok");

        let result = face.express_interest(interest("/one/two")).await;
        assert!(matches!(result, Err(TransportError::Timeout)));
    }

    #[test]
    fn mock_face_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MockFace>();
    }
}
