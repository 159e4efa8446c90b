use super::{EXTENSIONS, FRAMEWORKS, PRIVATE_FRAMEWORKS, PatchCatalogEntry, PatchCategory};
use crate::os::{OsWindow, darwin};

fn networking(name: &str, window: OsWindow) -> PatchCatalogEntry {
    PatchCatalogEntry::new(name, PatchCategory::Networking, window)
}

pub fn entries() -> Vec<PatchCatalogEntry> {
    let sonoma = OsWindow::from_major(darwin::SONOMA);

    vec![
        networking("Legacy Wireless", OsWindow::from_major(darwin::MONTEREY))
            .display_name("Networking: Legacy Wireless")
            .install(
                "/usr/libexec",
                &[("airportd", "11.7.10")],
            )
            .install(
                PRIVATE_FRAMEWORKS,
                &[("CoreWLAN.framework", "11.7.10")],
            ),
        networking("Legacy Wireless Extended", sonoma)
            .install(
                "/usr/libexec",
                &[("wifip2pd", "13.6.5")],
            )
            .install(
                PRIVATE_FRAMEWORKS,
                &[
                    ("IO80211.framework", "13.6.5"),
                    ("WiFiPeerToPeer.framework", "13.6.5"),
                ],
            ),
        networking("Modern Wireless", sonoma)
            .display_name("Networking: Modern Wireless")
            .install(
                "/usr/libexec",
                &[("airportd", "13.6.5"), ("wifip2pd", "13.6.5")],
            )
            .install(
                FRAMEWORKS,
                &[("CoreWLAN.framework", "13.6.5")],
            )
            .install(
                PRIVATE_FRAMEWORKS,
                &[
                    ("CoreWiFi.framework", "13.6.5"),
                    ("IO80211.framework", "13.6.5"),
                    ("WiFiPeerToPeer.framework", "13.6.5"),
                ],
            )
            .remove(EXTENSIONS, &["IO80211FamilyLegacy.kext"]),
    ]
}
