#![no_main]

use libfuzzer_sys::fuzz_target;
use quicklaunch::registry::parse_import;

fuzz_target!(|data: &[u8]| {
    // Clipboard text is untrusted; parsing must fail cleanly, never panic
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(records) = parse_import(s) {
            // Anything accepted must survive a serialize/parse cycle unchanged
            let text = serde_json::to_string(&records).unwrap();
            assert_eq!(parse_import(&text).unwrap(), records);
        }
    }
});
