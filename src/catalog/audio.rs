use super::{EXTENSIONS, PatchCatalogEntry, PatchCategory};
use crate::os::{OsWindow, darwin};

pub fn entries() -> Vec<PatchCatalogEntry> {
    vec![
        PatchCatalogEntry::new(
            "Legacy Realtek",
            PatchCategory::Audio,
            OsWindow::from_major(darwin::SIERRA),
        )
        .display_name("Audio: Legacy Realtek")
        .install(
            EXTENSIONS,
            &[
                ("AppleHDA.kext", "10.11.6"),
                ("IOAudioFamily.kext", "10.11.6"),
            ],
        ),
        // AppleHDA refuses to attach without a GOP-initialised display.
        PatchCatalogEntry::new(
            "Legacy Non-GOP",
            PatchCategory::Audio,
            OsWindow::from_major(darwin::MOJAVE),
        )
        .display_name("Audio: Legacy non-GOP")
        .install(EXTENSIONS, &[("AppleHDA.kext", "10.13.6")]),
    ]
}
