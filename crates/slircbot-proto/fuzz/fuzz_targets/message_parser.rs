//! Fuzz target for message parsing and line splitting.
//!
//! Parsing is infallible, so the only thing to find here is a panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = str::from_utf8(data) {
        for line in slircbot_proto::line::split_lines(input) {
            let msg = slircbot_proto::Message::parse(&line);
            let _ = msg.to_string();
            let _ = msg.body();
        }
    }
});
