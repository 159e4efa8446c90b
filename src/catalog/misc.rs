//! Brightness and miscellaneous chassis payloads.

use super::{EXTENSIONS, FRAMEWORKS, LAUNCH_DAEMONS, PRIVATE_FRAMEWORKS, PatchCatalogEntry, PatchCategory};
use crate::os::{OsWindow, darwin};

fn misc(name: &str, window: OsWindow) -> PatchCatalogEntry {
    PatchCatalogEntry::new(name, PatchCategory::Miscellaneous, window)
}

pub fn entries() -> Vec<PatchCatalogEntry> {
    let ventura = OsWindow::from_major(darwin::VENTURA);
    let sonoma = OsWindow::from_major(darwin::SONOMA);

    vec![
        PatchCatalogEntry::new(
            "Legacy Backlight Control",
            PatchCategory::Brightness,
            OsWindow::from_major(darwin::BIG_SUR),
        )
        .display_name("Brightness: Legacy Backlight Control")
        .install(
            EXTENSIONS,
            &[
                ("AppleBacklight.kext", "10.12.6"),
                ("AppleBacklightExpert.kext", "10.12.6"),
            ],
        )
        .install(
            PRIVATE_FRAMEWORKS,
            &[("DisplayServices.framework", "10.12.6")],
        )
        .remove(EXTENSIONS, &["AppleGraphicsControl.kext/Contents/PlugIns/AGDCBacklightControl.kext"]),
        misc("Legacy GMUX", ventura)
            .display_name("Miscellaneous: Legacy GMUX")
            .install(
                EXTENSIONS,
                &[
                    ("AppleGraphicsControl.kext", "12.6.9"),
                    ("AppleGraphicsPowerManagement.kext", "12.6.9"),
                    ("AppleMuxControl2.kext", "12.6.9"),
                ],
            )
            .remove(
                EXTENSIONS,
                &["AppleGraphicsControl.kext/Contents/PlugIns/AppleMuxControl.kext"],
            ),
        misc("Legacy Keyboard Backlight", ventura)
            .display_name("Miscellaneous: Legacy Keyboard Backlight")
            .install(LAUNCH_DAEMONS, &[("com.apple.KeyboardBacklight.plist", "12.6.9")])
            .install(
                PRIVATE_FRAMEWORKS,
                &[("KeyboardBacklight.framework", "12.6.9")],
            ),
        misc("Legacy USB 1.1", ventura)
            .display_name("Miscellaneous: Legacy USB 1.1")
            .install(
                "/System/Library/Extensions/IOUSBHostFamily.kext/Contents/PlugIns",
                &[
                    ("AppleUSBOHCI.kext", "12.6.2"),
                    ("AppleUSBOHCIPCI.kext", "12.6.2"),
                    ("AppleUSBUHCI.kext", "12.6.2"),
                    ("AppleUSBUHCIPCI.kext", "12.6.2"),
                ],
            ),
        misc("Legacy USB 1.1 Extended", sonoma)
            .install(EXTENSIONS, &[("IOUSBHostFamily.kext", "12.6.2")])
            .install(
                FRAMEWORKS,
                &[("IOUSBHost.framework", "12.6.2")],
            ),
        misc("PCIe FaceTime Camera", sonoma)
            .display_name("Miscellaneous: PCIe FaceTime Camera")
            .install(
                EXTENSIONS,
                &[("AppleCameraInterface.kext", "13.6")],
            ),
        misc("T1 Security Chip", sonoma)
            .display_name("Miscellaneous: T1 Security Chip")
            .install(
                "/usr/libexec",
                &[("biometrickitd", "13.6"), ("sksd", "13.6")],
            )
            .install(
                PRIVATE_FRAMEWORKS,
                &[
                    ("EmbeddedOSInstall.framework", "13.6"),
                    ("BiometricKit.framework", "13.6"),
                ],
            ),
    ]
}
