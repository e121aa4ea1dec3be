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

//! Typed command addresses.
//!
//! Every management command is an Interest whose name has the shape:
//!
//! ```text
//! /localhost/nfd/fib / add-nexthop / <encoded FibManagementOptions>
//! └──── root ──────┘   └─ verb ──┘   └──────── parameters ────────┘
//! ```
//!
//! [`CommandName`] enforces that shape instead of leaving callers to
//! concatenate components by hand.

use crate::{Codec, ControlError, Name, NameComponent};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt;

/// Namespace root of FIB commands.
pub const FIB_PREFIX: &str = "/localhost/nfd/fib";

/// Namespace root of face commands.
pub const FACES_PREFIX: &str = "/localhost/nfd/faces";

/// FIB verb adding a next hop to an entry, creating the entry if needed.
pub const ADD_NEXTHOP: &str = "add-nexthop";

/// FIB verb removing a next hop from an entry.
pub const REMOVE_NEXTHOP: &str = "remove-nexthop";

/// Face verb creating a face towards a remote URI.
pub const FACE_CREATE: &str = "create";

/// Face verb destroying a face.
pub const FACE_DESTROY: &str = "destroy";

/// The address of a management command: `<root>/<verb>/<parameters>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandName {
    root: Name,
    verb: String,
    parameters: NameComponent,
}

impl CommandName {
    /// Creates a command name from an already encoded parameter block.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` or `verb` is empty.
    pub fn new(
        root: Name,
        verb: impl Into<String>,
        parameters: impl Into<NameComponent>,
    ) -> Result<Self, ControlError> {
        let verb = verb.into();
        if root.is_empty() {
            return Err(ControlError::invalid_command("command root is empty"));
        }
        if verb.is_empty() {
            return Err(ControlError::invalid_command("command verb is empty"));
        }
        Ok(Self {
            root,
            verb,
            parameters: parameters.into(),
        })
    }

    /// Creates a command name, encoding `options` with `codec`.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` or `verb` is empty or encoding fails.
    pub fn encode<C, T>(
        codec: &C,
        root: Name,
        verb: impl Into<String>,
        options: &T,
    ) -> Result<Self, ControlError>
    where
        C: Codec + ?Sized,
        T: Serialize,
    {
        let parameters = codec.encode(options)?;
        Self::new(root, verb, parameters)
    }

    /// Recovers the command addressed by `name` under `root`.
    ///
    /// Components after the parameter block, such as those a signer
    /// appends, are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is not under `root`, is too short, or the
    /// verb is not valid UTF-8.
    pub fn from_name(name: &Name, root: &Name) -> Result<Self, ControlError> {
        if !name.starts_with(root) {
            return Err(ControlError::invalid_command(format!(
                "{name} is not under {root}"
            )));
        }
        let (Some(verb), Some(parameters)) = (name.get(root.len()), name.get(root.len() + 1))
        else {
            return Err(ControlError::invalid_command(format!(
                "{name} has no verb and parameters"
            )));
        };
        let verb = std::str::from_utf8(verb.as_bytes())
            .map_err(|_| ControlError::invalid_command(format!("verb {verb} is not UTF-8")))?;
        Self::new(root.clone(), verb, parameters.clone())
    }

    /// Returns the namespace root.
    #[must_use]
    pub const fn root(&self) -> &Name {
        &self.root
    }

    /// Returns the command verb.
    #[must_use]
    pub fn verb(&self) -> &str {
        &self.verb
    }

    /// Returns the encoded parameter block.
    #[must_use]
    pub const fn parameters(&self) -> &NameComponent {
        &self.parameters
    }

    /// Decodes the parameter block.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are not a valid encoding of `T`.
    pub fn decode_parameters<C, T>(&self, codec: &C) -> Result<T, ControlError>
    where
        C: Codec + ?Sized,
        T: DeserializeOwned,
    {
        Ok(codec.decode(self.parameters.as_bytes())?)
    }

    /// Returns the full name of the command.
    #[must_use]
    pub fn to_name(&self) -> Name {
        self.root
            .clone()
            .append(self.verb.as_str())
            .append(self.parameters.clone())
    }
}

impl From<CommandName> for Name {
    fn from(command: CommandName) -> Self {
        command
            .root
            .append(command.verb)
            .append(command.parameters)
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.root,
            NameComponent::from(self.verb.as_str()),
            self.parameters
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BincodeCodec, FibManagementOptions};

    fn fib_root() -> Name {
        Name::parse(FIB_PREFIX).expect("parse should succeed")
    }

    #[test]
    fn name_has_root_verb_parameters_shape() {
        let codec = BincodeCodec::new();
        let options = FibManagementOptions::new().with_face_id(0).with_cost(0);
        let command =
            CommandName::encode(&codec, fib_root(), ADD_NEXTHOP, &options).expect("encode");

        let name = command.to_name();
        assert_eq!(name.len(), 5);
        assert!(name.starts_with(&fib_root()));
        assert_eq!(name.get(3).map(NameComponent::as_bytes), Some(&b"add-nexthop"[..]));
        assert_eq!(
            name.last().map(NameComponent::as_bytes),
            Some(codec.encode(&options).expect("encode").as_slice())
        );
        assert_eq!(Name::from(command), name);
    }

    #[test]
    fn empty_verb_is_rejected() {
        let result = CommandName::new(fib_root(), "", Vec::<u8>::new());
        assert!(matches!(result, Err(ControlError::InvalidCommand(_))));
    }

    #[test]
    fn empty_root_is_rejected() {
        let result = CommandName::new(Name::new(), ADD_NEXTHOP, Vec::<u8>::new());
        assert!(matches!(result, Err(ControlError::InvalidCommand(_))));
    }

    #[test]
    fn from_name_recovers_command() {
        let codec = BincodeCodec::new();
        let options = FibManagementOptions::new()
            .with_name(Name::parse("/example").expect("parse should succeed"))
            .with_face_id(42);
        let command =
            CommandName::encode(&codec, fib_root(), REMOVE_NEXTHOP, &options).expect("encode");

        // Trailing components, e.g. a signature, do not get in the way.
        let signed = command.to_name().append("signature");
        let recovered = CommandName::from_name(&signed, &fib_root()).expect("from_name");

        assert_eq!(recovered, command);
        assert_eq!(recovered.verb(), REMOVE_NEXTHOP);
        let decoded: FibManagementOptions =
            recovered.decode_parameters(&codec).expect("decode");
        assert_eq!(decoded, options);
    }

    #[test]
    fn from_name_requires_root_and_parameters() {
        let faces = Name::parse(FACES_PREFIX).expect("parse should succeed");
        let short = fib_root().append(ADD_NEXTHOP);

        assert!(CommandName::from_name(&short, &faces).is_err());
        assert!(CommandName::from_name(&short, &fib_root()).is_err());
    }

    #[test]
    fn display_matches_name() {
        let command = CommandName::new(fib_root(), ADD_NEXTHOP, vec![0x01u8]).expect("new");
        assert_eq!(command.to_string(), "/localhost/nfd/fib/add-nexthop/%01");
        assert_eq!(command.to_string(), command.to_name().to_string());
    }
}
