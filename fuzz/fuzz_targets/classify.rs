#![no_main]
use libfuzzer_sys::fuzz_target;
extern crate html5_inference;

fuzz_target!(|data: &str| {
    // classification is total and deterministic
    let context = html5_inference::classify(data);
    assert_eq!(context, html5_inference::classify(data));
    let _ = html5_inference::pluck_path(data);
});
