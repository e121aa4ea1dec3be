//! Fuzz target for status envelope decoding.
//!
//! Tests that arbitrary reply payloads don't cause panics when decoded as a
//! `ControlResponse`, and that the body of a decoded envelope is handled the
//! same way.

#![no_main]

use libfuzzer_sys::fuzz_target;
use nfd_mgmt_control::{BincodeCodec, Codec, FaceManagementOptions, FibManagementOptions};

fuzz_target!(|data: &[u8]| {
    let codec = BincodeCodec::new();

    if let Ok(response) = codec.decode_response(data) {
        let _: Result<FibManagementOptions, _> = codec.decode(&response.body);
        let _: Result<FaceManagementOptions, _> = codec.decode(&response.body);
    }
});
