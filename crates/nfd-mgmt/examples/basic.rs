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

//! Basic example demonstrating prefix self-registration.
//!
//! This example shows:
//! - Answering management commands with an in-memory forwarder
//! - Self-registering and self-deregistering a prefix
//! - Running a face command and handling a rejection
//!
//! Run with: cargo run --example basic -p nfd-mgmt

use bytes::Bytes;
use nfd_mgmt::{
    mock_face_pair, BincodeCodec, Codec, CommandName, Config, ControlResponse, Continuations,
    Controller, FaceManagementOptions, FibManagementOptions, Interest, Name, ADD_NEXTHOP,
    FACES_PREFIX, FACE_CREATE, FACE_DESTROY, FIB_PREFIX, REMOVE_NEXTHOP,
};
use std::time::Duration;

/// Face id the demo forwarder assigns to the controller.
const ASSIGNED_FACE_ID: u64 = 263;

/// Answers one management command the way a forwarder would.
fn answer(interest: &Interest) -> Option<Bytes> {
    let codec = BincodeCodec::new();
    let fib = Name::parse(FIB_PREFIX).ok()?;
    let faces = Name::parse(FACES_PREFIX).ok()?;

    let response = if let Ok(command) = CommandName::from_name(&interest.name, &fib) {
        let mut options: FibManagementOptions = command.decode_parameters(&codec).ok()?;
        match command.verb() {
            ADD_NEXTHOP | REMOVE_NEXTHOP => {
                if options.face_id() == Some(0) {
                    options = options.with_face_id(ASSIGNED_FACE_ID);
                }
                ControlResponse::success(codec.encode(&options).ok()?)
            }
            _ => ControlResponse::new(501, "unsupported command"),
        }
    } else if let Ok(command) = CommandName::from_name(&interest.name, &faces) {
        let options: FaceManagementOptions = command.decode_parameters(&codec).ok()?;
        match command.verb() {
            FACE_CREATE => ControlResponse::success(
                codec.encode(&options.with_face_id(ASSIGNED_FACE_ID + 1)).ok()?,
            ),
            FACE_DESTROY => ControlResponse::new(410, "face does not exist"),
            _ => ControlResponse::new(501, "unsupported command"),
        }
    } else {
        // Not a management command; let it time out
        return None;
    };

    codec.encode_response(&response).ok().map(Bytes::from)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for observability
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .init();

    println!("=== nfd-mgmt Basic Example ===\n");

    // Create a mock face (in production, a face connected to the local NFD)
    let (face, forwarder) = mock_face_pair();
    let _forwarder = forwarder.spawn(answer);

    let config = Config::new().with_command_timeout(Duration::from_secs(1));
    let controller = Controller::new(face, config)?;
    let prefix = Name::parse("/example/app")?;

    println!("Registering {prefix}...");
    controller.self_register_prefix(&prefix).await?;
    println!("  Recorded face id: {:?}", controller.face_id());

    println!("\nCreating a face...");
    let created = controller
        .start_face_command(
            FACE_CREATE,
            &FaceManagementOptions::new().with_uri("udp4://192.0.2.1:6363"),
        )
        .await?;
    println!("  Created face {:?} for {:?}", created.face_id(), created.uri());

    println!("\nDestroying a face that does not exist...");
    let (tx, rx) = tokio::sync::oneshot::channel();
    controller.spawn_face_command(
        FACE_DESTROY,
        FaceManagementOptions::new().with_face_id(9999),
        Continuations::new(
            |_| println!("  Unexpected success"),
            move |message| {
                let _ = tx.send(message);
            },
        ),
    );
    println!("  Forwarder said: {}", rx.await?);

    println!("\nDeregistering {prefix}...");
    controller.self_deregister_prefix(&prefix).await?;
    println!("  Done");

    println!("\n=== Example Complete ===");
    Ok(())
}
