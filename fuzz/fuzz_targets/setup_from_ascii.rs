#![no_main]

use libfuzzer_sys::fuzz_target;
use minishogi::Setup;

fuzz_target!(|data: &[u8]| {
    let Ok(setup) = Setup::from_ascii(data) else {
        return;
    };
    let roundtripped = Setup::from_ascii(setup.to_string().as_bytes()).expect("roundtrip");
    assert_eq!(setup, roundtripped);
});
