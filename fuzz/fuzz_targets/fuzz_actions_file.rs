#![no_main]

use climenu::{ActionFile, ActionSettings, SourceFormat};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    for format in [SourceFormat::Toml, SourceFormat::Json] {
        if let Ok((file, _warnings)) = ActionFile::parse(content, format, "fuzz") {
            // Building the registry never runs a command.
            let registry = file.into_registry(&ActionSettings::default());
            let _ = registry.names().count();
        }
    }
});
