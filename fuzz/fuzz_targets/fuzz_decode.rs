#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decode must never panic, whatever the input. Limits keep headers that
    // claim absurd dimensions from attempting huge allocations.
    let limits = zenmono::Limits {
        max_pixels: Some(1 << 24),
        max_memory_bytes: Some(1 << 24),
        ..zenmono::Limits::default()
    };
    if let Ok(bitmap) = zenmono::DecodeRequest::new(data).with_limits(&limits).decode() {
        let _ = zenmono::render_ascii(&bitmap);
    }

    // Header probe must never panic either
    let _ = zenmono::BmpInfo::from_bytes(data);
});
