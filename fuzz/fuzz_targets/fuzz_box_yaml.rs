#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use stowbox::infrastructure::repositories::from_yaml;
use stowbox::DerivedConfig;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Whatever loads must also derive
        if let Ok((config, _)) = from_yaml(content, Path::new("fuzz.yaml")) {
            let _ = DerivedConfig::new(&config).snapshot();
        }
    }
});
