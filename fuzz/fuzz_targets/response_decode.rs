//! Fuzz target for backend response decoding.
//!
//! Arbitrary bytes fed to every response decoder must be rejected or
//! accepted, never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use scrutiny_proto::{BackupFile, ErrorMessage, FileDiffResponse, ResourceConfigMap};

fuzz_target!(|data: &[u8]| {
    let _ = serde_json::from_slice::<Vec<BackupFile>>(data);
    let _ = serde_json::from_slice::<FileDiffResponse>(data);
    if let Ok(configs) = serde_json::from_slice::<ResourceConfigMap>(data) {
        for config in configs.values() {
            if let Some(patch) = config.to_patch() {
                assert!(config.is_suggestion());
                assert!(!patch.suggested_value.is_empty());
            }
        }
    }
    let _ = ErrorMessage::from_body(data);
});
