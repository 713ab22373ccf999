#![no_main]

use libfuzzer_sys::fuzz_target;
use mztoken::pipeline::PipelineConfig;

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary text may fail but must never panic
    let Ok(token) = std::str::from_utf8(data) else {
        return;
    };

    for config in PipelineConfig::combinations() {
        if let Ok(pipeline) = config.with_tag(data.first() == Some(&b'f')).build() {
            let _ = pipeline.decompress(token);
        }
    }
});
