#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Probe and decode must never panic
    let _ = bmprotate::BmpInfo::from_bytes(data);
    if let Ok(mut image) = bmprotate::decode_bmp(data, enough::Unstoppable) {
        // Any decodable geometry must survive the transform without panicking
        bmprotate::rotate_right(&mut image);
    }
});
