#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // The command parser must never panic on arbitrary input
    if let Ok(input) = std::str::from_utf8(data) {
        let _ = hix::query::parser::parse_command(input);
    }
});
