use serde::{Deserialize, Serialize};
use std::fmt;

pub const VENDOR_BROADCOM: u16 = 0x14E4;
pub const VENDOR_ATHEROS: u16 = 0x168C;

/// Wireless chipset, named after the macOS driver that attaches to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WirelessChipset {
    AppleBcmWlanBusInterfacePcie,
    AirportBrcmNic,
    AirPortBrcm4360,
    AirPortBrcm4331,
    AirPortBrcm43224,
    AirPortAtheros40,
    Unknown,
}

impl WirelessChipset {
    pub fn from_pci(vendor_id: u16, device_id: u16) -> Self {
        let table: &[(&[u16], WirelessChipset)] = match vendor_id {
            VENDOR_BROADCOM => BROADCOM_IDS,
            VENDOR_ATHEROS => ATHEROS_IDS,
            _ => &[],
        };

        table
            .iter()
            .find(|(ids, _)| ids.binary_search(&device_id).is_ok())
            .map(|(_, chipset)| *chipset)
            .unwrap_or_else(|| {
                tracing::debug!(
                    "unrecognized wireless card {:04x}:{:04x}",
                    vendor_id,
                    device_id
                );
                WirelessChipset::Unknown
            })
    }

    /// Chipsets whose driver was removed in Monterey.
    pub fn is_legacy(&self) -> bool {
        matches!(
            self,
            WirelessChipset::AirPortBrcm4331
                | WirelessChipset::AirPortBrcm43224
                | WirelessChipset::AirPortAtheros40
        )
    }

    /// Chipsets whose driver was removed in Sonoma.
    pub fn is_modern(&self) -> bool {
        matches!(
            self,
            WirelessChipset::AirPortBrcm4360 | WirelessChipset::AirportBrcmNic
        )
    }
}

impl fmt::Display for WirelessChipset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WirelessChipset::AppleBcmWlanBusInterfacePcie => "AppleBCMWLANBusInterfacePCIe",
            WirelessChipset::AirportBrcmNic => "AirportBrcmNIC",
            WirelessChipset::AirPortBrcm4360 => "AirPortBrcm4360",
            WirelessChipset::AirPortBrcm4331 => "AirPortBrcm4331",
            WirelessChipset::AirPortBrcm43224 => "AppleAirPortBrcm43224",
            WirelessChipset::AirPortAtheros40 => "AirPortAtheros40",
            WirelessChipset::Unknown => "Unknown",
        };
        write!(f, "{}", name)
    }
}

// Each ID list must stay sorted for binary_search.

const BROADCOM_IDS: &[(&[u16], WirelessChipset)] = &[
    (
        &[0x4425, 0x4464, 0x4488],
        WirelessChipset::AppleBcmWlanBusInterfacePcie,
    ),
    (&[0x43A0, 0x43A3, 0x43BA], WirelessChipset::AirportBrcmNic),
    (
        &[0x4353, 0x4357, 0x4358, 0x4359, 0x43B1, 0x43B2],
        WirelessChipset::AirPortBrcm4360,
    ),
    (&[0x432B, 0x4331], WirelessChipset::AirPortBrcm4331),
    (
        &[
            0x4311, 0x4312, 0x4313, 0x4318, 0x4319, 0x431A, 0x4320, 0x4324, 0x4325, 0x4328,
            0x432C, 0x432D,
        ],
        WirelessChipset::AirPortBrcm43224,
    ),
];

const ATHEROS_IDS: &[(&[u16], WirelessChipset)] = &[(
    &[0x001C, 0x0023, 0x0024, 0x002A, 0x0030, 0x0032],
    WirelessChipset::AirPortAtheros40,
)];
