//! Fuzz target for parameter block decoding.
//!
//! Tests that arbitrary byte sequences don't cause panics when parsed as
//! FIB or face parameter blocks.

#![no_main]

use libfuzzer_sys::fuzz_target;
use nfd_mgmt_control::{BincodeCodec, Codec, FaceManagementOptions, FibManagementOptions};

fuzz_target!(|data: &[u8]| {
    let codec = BincodeCodec::new();
    let _: Result<FibManagementOptions, _> = codec.decode(data);
    let _: Result<FaceManagementOptions, _> = codec.decode(data);
});
