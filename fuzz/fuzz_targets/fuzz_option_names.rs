#![no_main]

use libfuzzer_sys::fuzz_target;
use stowbox::domain::value_objects::{DesignStyle, DividerLayout, MaterialType, PrinterProfile};
use stowbox::presets::get_preset;

fuzz_target!(|data: &[u8]| {
    if let Ok(name) = std::str::from_utf8(data) {
        let _ = name.parse::<MaterialType>();
        let _ = name.parse::<PrinterProfile>();
        let _ = name.parse::<DesignStyle>();
        let _ = name.parse::<DividerLayout>();
        let _ = get_preset(name);
    }
});
