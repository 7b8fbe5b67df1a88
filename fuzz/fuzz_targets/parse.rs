#![no_main]
use libfuzzer_sys::fuzz_target;
extern crate html5_inference;

fuzz_target!(|data: &str| {
    let output = html5_inference::parse(data, Default::default());
    let _ = output.to_html();
});
