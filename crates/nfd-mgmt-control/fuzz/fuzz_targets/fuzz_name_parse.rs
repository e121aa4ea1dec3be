//! Fuzz target for name URI parsing.
//!
//! Tests that arbitrary strings don't cause panics when parsed as names, and
//! that any name that parses can be written back out and parsed again.

#![no_main]

use libfuzzer_sys::fuzz_target;
use nfd_mgmt_control::Name;

fuzz_target!(|data: &[u8]| {
    let Ok(uri) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(name) = Name::parse(uri) {
        let reparsed = Name::parse(&name.to_string()).expect("canonical form must parse");
        assert_eq!(reparsed, name);
    }
});
