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

//! Callback-style delivery of command outcomes.
//!
//! The controller's async methods resolve to a `Result`. Callers built
//! around continuations instead hand a [`Continuations`] to one of the
//! controller's `spawn_*` methods; exactly one of the two continuations runs
//! when the command completes.

use crate::Error;
use std::fmt;
use tracing::debug;

type SuccessFn<T> = Box<dyn FnOnce(T) + Send>;
type FailFn = Box<dyn FnOnce(String) + Send>;

/// A success continuation and an optional failure continuation.
///
/// Whether failures are observed is decided when the value is built:
/// [`new`](Self::new) takes both continuations and
/// [`ignoring_failures`](Self::ignoring_failures) explicitly opts out.
pub struct Continuations<T> {
    on_success: SuccessFn<T>,
    on_fail: Option<FailFn>,
}

impl<T> Continuations<T> {
    /// Creates continuations observing both outcomes.
    ///
    /// The failure continuation receives the error's message.
    pub fn new<S, E>(on_success: S, on_fail: E) -> Self
    where
        S: FnOnce(T) + Send + 'static,
        E: FnOnce(String) + Send + 'static,
    {
        Self {
            on_success: Box::new(on_success),
            on_fail: Some(Box::new(on_fail)),
        }
    }

    /// Creates continuations that observe success only.
    ///
    /// Failures are logged at `debug` and otherwise dropped.
    pub fn ignoring_failures<S>(on_success: S) -> Self
    where
        S: FnOnce(T) + Send + 'static,
    {
        Self {
            on_success: Box::new(on_success),
            on_fail: None,
        }
    }

    /// Returns true if a failure continuation was supplied.
    #[must_use]
    pub const fn observes_failures(&self) -> bool {
        self.on_fail.is_some()
    }

    /// Runs the continuation matching `outcome`.
    pub fn complete(self, outcome: Result<T, Error>) {
        match outcome {
            Ok(value) => (self.on_success)(value),
            Err(error) => match self.on_fail {
                Some(on_fail) => on_fail(error.to_string()),
                None => debug!(%error, "command failed with no failure continuation"),
            },
        }
    }
}

impl<T> fmt::Debug for Continuations<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Continuations")
            .field("observes_failures", &self.observes_failures())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn success_runs_success_only() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let ok = Arc::clone(&seen);
        let fail = Arc::clone(&seen);
        let continuations = Continuations::new(
            move |value: u64| ok.lock().unwrap().push(format!("ok {value}")),
            move |message| fail.lock().unwrap().push(format!("fail {message}")),
        );

        continuations.complete(Ok(42));
        assert_eq!(*seen.lock().unwrap(), vec!["ok 42".to_string()]);
    }

    #[test]
    fn failure_receives_message() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let fail = Arc::clone(&seen);
        let continuations = Continuations::new(
            |(): ()| panic!("success must not run"),
            move |message| fail.lock().unwrap().push(message),
        );

        continuations.complete(Err(Error::rejected(404, "not found")));
        assert_eq!(*seen.lock().unwrap(), vec!["not found".to_string()]);
    }

    #[test]
    fn ignored_failure_is_dropped() {
        let continuations = Continuations::ignoring_failures(|(): ()| {
            panic!("success must not run");
        });
        assert!(!continuations.observes_failures());
        continuations.complete(Err(Error::Timeout));
    }

    #[test]
    fn debug_hides_closures() {
        let continuations = Continuations::ignoring_failures(|(): ()| {});
        assert_eq!(
            format!("{continuations:?}"),
            "Continuations { observes_failures: false, .. }"
        );
    }
}
