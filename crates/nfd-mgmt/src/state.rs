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

//! Command lifecycle.
//!
//! Defines the states a single management command passes through and the
//! valid transitions between them.

use crate::{Error, ErrorKind};

/// Lifecycle state of one command.
///
/// ```text
/// Built ──► Submitted ──► Succeeded
///   │           ├───────► Rejected
///   │           ├───────► Malformed
///   │           ├───────► TimedOut
///   └───────────┴───────► Aborted
/// ```
///
/// Every state after `Submitted` is terminal. Commands are never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CommandState {
    /// Name built, not yet handed to the face.
    #[default]
    Built,
    /// Handed to the face, awaiting a reply.
    Submitted,
    /// The forwarder accepted the command.
    Succeeded,
    /// The forwarder replied with a failure status.
    Rejected,
    /// The reply could not be decoded.
    Malformed,
    /// No reply arrived in time.
    TimedOut,
    /// The command could not be signed or the face failed.
    Aborted,
}

impl CommandState {
    /// Returns the terminal state reached by a command that resolved to
    /// `outcome`.
    #[must_use]
    pub fn for_outcome<T>(outcome: &Result<T, Error>) -> Self {
        match outcome {
            Ok(_) => Self::Succeeded,
            Err(e) => match e.kind() {
                ErrorKind::Protocol => Self::Rejected,
                ErrorKind::Decode => Self::Malformed,
                ErrorKind::Timeout => Self::TimedOut,
                ErrorKind::LocalPrecondition | ErrorKind::Other => Self::Aborted,
            },
        }
    }

    /// Returns true if no further transition is possible.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Built | Self::Submitted)
    }

    /// Returns true if a transition to the target state is valid.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        use CommandState::{Aborted, Built, Malformed, Rejected, Submitted, Succeeded, TimedOut};

        matches!(
            (*self, target),
            (Built, Submitted | Aborted)
                | (Submitted, Succeeded | Rejected | Malformed | TimedOut | Aborted)
        )
    }
}

impl std::fmt::Display for CommandState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Built => write!(f, "built"),
            Self::Submitted => write!(f, "submitted"),
            Self::Succeeded => write!(f, "succeeded"),
            Self::Rejected => write!(f, "rejected"),
            Self::Malformed => write!(f, "malformed"),
            Self::TimedOut => write!(f, "timed out"),
            Self::Aborted => write!(f, "aborted"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nfd_mgmt_transport::TransportError;

    #[test]
    fn valid_forward_transitions() {
        assert!(CommandState::Built.can_transition_to(CommandState::Submitted));
        assert!(CommandState::Submitted.can_transition_to(CommandState::Succeeded));
        assert!(CommandState::Submitted.can_transition_to(CommandState::Rejected));
        assert!(CommandState::Submitted.can_transition_to(CommandState::Malformed));
        assert!(CommandState::Submitted.can_transition_to(CommandState::TimedOut));
    }

    #[test]
    fn abort_before_or_after_submission() {
        assert!(CommandState::Built.can_transition_to(CommandState::Aborted));
        assert!(CommandState::Submitted.can_transition_to(CommandState::Aborted));
    }

    #[test]
    fn invalid_transitions() {
        // Outcomes need a submission first
        assert!(!CommandState::Built.can_transition_to(CommandState::Succeeded));
        assert!(!CommandState::Built.can_transition_to(CommandState::TimedOut));

        // Terminal states stay put
        assert!(!CommandState::Succeeded.can_transition_to(CommandState::Rejected));
        assert!(!CommandState::TimedOut.can_transition_to(CommandState::Submitted));
        assert!(!CommandState::Rejected.can_transition_to(CommandState::Rejected));
    }

    #[test]
    fn terminal_states() {
        assert!(!CommandState::Built.is_terminal());
        assert!(!CommandState::Submitted.is_terminal());
        assert!(CommandState::Succeeded.is_terminal());
        assert!(CommandState::Rejected.is_terminal());
        assert!(CommandState::Malformed.is_terminal());
        assert!(CommandState::TimedOut.is_terminal());
        assert!(CommandState::Aborted.is_terminal());
    }

    #[test]
    fn outcome_mapping() {
        assert_eq!(
            CommandState::for_outcome(&Ok::<(), Error>(())),
            CommandState::Succeeded
        );
        assert_eq!(
            CommandState::for_outcome::<()>(&Err(Error::rejected(404, "not found"))),
            CommandState::Rejected
        );
        assert_eq!(
            CommandState::for_outcome::<()>(&Err(Error::Timeout)),
            CommandState::TimedOut
        );
        assert_eq!(
            CommandState::for_outcome::<()>(&Err(Error::malformed("no face id"))),
            CommandState::Malformed
        );
        assert_eq!(
            CommandState::for_outcome::<()>(&Err(Error::from(TransportError::Closed))),
            CommandState::Aborted
        );
    }

    #[test]
    fn state_display() {
        assert_eq!(CommandState::Built.to_string(), "built");
        assert_eq!(CommandState::TimedOut.to_string(), "timed out");
    }
}
