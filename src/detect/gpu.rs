use serde::{Deserialize, Serialize};
use std::fmt;

pub const VENDOR_INTEL: u16 = 0x8086;
pub const VENDOR_NVIDIA: u16 = 0x10DE;
pub const VENDOR_AMD: u16 = 0x1002;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GpuVendor {
    Intel,
    Nvidia,
    Amd,
    Other(u16),
}

impl GpuVendor {
    pub fn from_pci(vendor_id: u16) -> Self {
        match vendor_id {
            VENDOR_INTEL => GpuVendor::Intel,
            VENDOR_NVIDIA => GpuVendor::Nvidia,
            VENDOR_AMD => GpuVendor::Amd,
            other => GpuVendor::Other(other),
        }
    }

    /// Device-ID range table for this vendor. Vendors without a table classify everything as Unknown.
    fn id_table(&self) -> &'static [(u16, u16, GpuArch)] {
        match self {
            GpuVendor::Intel => INTEL_IDS,
            GpuVendor::Nvidia => NVIDIA_IDS,
            GpuVendor::Amd => AMD_IDS,
            GpuVendor::Other(_) => &[],
        }
    }
}

impl fmt::Display for GpuVendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuVendor::Intel => write!(f, "Intel"),
            GpuVendor::Nvidia => write!(f, "NVIDIA"),
            GpuVendor::Amd => write!(f, "AMD"),
            GpuVendor::Other(id) => write!(f, "{:#06x}", id),
        }
    }
}

/// GPU architecture family. One flat enum; the vendor is implied by the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GpuArch {
    // Intel
    Gma950,
    GmaX3100,
    IronLake,
    SandyBridge,
    IvyBridge,
    Haswell,
    Broadwell,
    Skylake,
    KabyLake,
    CoffeeLake,
    CometLake,
    IceLake,
    // NVIDIA
    Curie,
    Tesla,
    Fermi,
    Kepler,
    Maxwell,
    Pascal,
    // AMD
    R500,
    TeraScale1,
    TeraScale2,
    LegacyGcn7000,
    LegacyGcn8000,
    LegacyGcn9000,
    Polaris,
    Vega,
    Navi,
    Unknown,
}

impl GpuArch {
    /// Resolve a PCI vendor/device pair to an architecture family.
    pub fn from_pci(vendor_id: u16, device_id: u16) -> Self {
        lookup(GpuVendor::from_pci(vendor_id).id_table(), device_id)
    }

    pub fn vendor(&self) -> Option<GpuVendor> {
        use GpuArch::*;
        match self {
            Gma950 | GmaX3100 | IronLake | SandyBridge | IvyBridge | Haswell | Broadwell
            | Skylake | KabyLake | CoffeeLake | CometLake | IceLake => Some(GpuVendor::Intel),
            Curie | Tesla | Fermi | Kepler | Maxwell | Pascal => Some(GpuVendor::Nvidia),
            R500 | TeraScale1 | TeraScale2 | LegacyGcn7000 | LegacyGcn8000 | LegacyGcn9000
            | Polaris | Vega | Navi => Some(GpuVendor::Amd),
            Unknown => None,
        }
    }

    pub fn is_legacy_gcn(&self) -> bool {
        matches!(
            self,
            GpuArch::LegacyGcn7000 | GpuArch::LegacyGcn8000 | GpuArch::LegacyGcn9000
        )
    }
}

impl fmt::Display for GpuArch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GpuArch::Gma950 => "GMA 950",
            GpuArch::GmaX3100 => "GMA X3100",
            GpuArch::IronLake => "Iron Lake",
            GpuArch::SandyBridge => "Sandy Bridge",
            GpuArch::IvyBridge => "Ivy Bridge",
            GpuArch::Haswell => "Haswell",
            GpuArch::Broadwell => "Broadwell",
            GpuArch::Skylake => "Skylake",
            GpuArch::KabyLake => "Kaby Lake",
            GpuArch::CoffeeLake => "Coffee Lake",
            GpuArch::CometLake => "Comet Lake",
            GpuArch::IceLake => "Ice Lake",
            GpuArch::Curie => "Curie",
            GpuArch::Tesla => "Tesla",
            GpuArch::Fermi => "Fermi",
            GpuArch::Kepler => "Kepler",
            GpuArch::Maxwell => "Maxwell",
            GpuArch::Pascal => "Pascal",
            GpuArch::R500 => "R500",
            GpuArch::TeraScale1 => "TeraScale 1",
            GpuArch::TeraScale2 => "TeraScale 2",
            GpuArch::LegacyGcn7000 => "Legacy GCN v1",
            GpuArch::LegacyGcn8000 => "Legacy GCN v2",
            GpuArch::LegacyGcn9000 => "Legacy GCN v3",
            GpuArch::Polaris => "Polaris",
            GpuArch::Vega => "Vega",
            GpuArch::Navi => "Navi",
            GpuArch::Unknown => "Unknown",
        };
        write!(f, "{}", name)
    }
}

/// A classified GPU from the probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gpu {
    pub vendor: GpuVendor,
    pub arch: GpuArch,
    pub integrated: bool,
    pub vendor_id: u16,
    pub device_id: u16,
}

impl Gpu {
    pub fn from_pci(vendor_id: u16, device_id: u16, integrated: bool) -> Self {
        let arch = GpuArch::from_pci(vendor_id, device_id);
        if arch == GpuArch::Unknown {
            tracing::debug!(
                "unrecognized GPU {:04x}:{:04x}, classifying as Unknown",
                vendor_id,
                device_id
            );
        }
        Self {
            vendor: GpuVendor::from_pci(vendor_id),
            arch,
            integrated,
            vendor_id,
            device_id,
        }
    }

    /// Build a GPU record from a stock architecture (no real PCI IDs available).
    pub fn from_arch(arch: GpuArch, integrated: bool) -> Self {
        let vendor = arch.vendor().unwrap_or(GpuVendor::Other(0));
        let vendor_id = match vendor {
            GpuVendor::Intel => VENDOR_INTEL,
            GpuVendor::Nvidia => VENDOR_NVIDIA,
            GpuVendor::Amd => VENDOR_AMD,
            GpuVendor::Other(id) => id,
        };
        Self {
            vendor,
            arch,
            integrated,
            vendor_id,
            device_id: 0,
        }
    }
}

/// Binary search a sorted, non-overlapping inclusive range table.
fn lookup(table: &[(u16, u16, GpuArch)], device_id: u16) -> GpuArch {
    table
        .binary_search_by(|&(start, end, _)| {
            if end < device_id {
                std::cmp::Ordering::Less
            } else if start > device_id {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .map(|idx| table[idx].2)
        .unwrap_or(GpuArch::Unknown)
}

// Tables are (first_device_id, last_device_id, arch), sorted by first_device_id.

const INTEL_IDS: &[(u16, u16, GpuArch)] = &[
    (0x0042, 0x0042, GpuArch::IronLake),
    (0x0046, 0x0046, GpuArch::IronLake),
    (0x0102, 0x0102, GpuArch::SandyBridge),
    (0x0106, 0x0106, GpuArch::SandyBridge),
    (0x010A, 0x010A, GpuArch::SandyBridge),
    (0x0112, 0x0112, GpuArch::SandyBridge),
    (0x0116, 0x0116, GpuArch::SandyBridge),
    (0x0122, 0x0122, GpuArch::SandyBridge),
    (0x0126, 0x0126, GpuArch::SandyBridge),
    (0x0152, 0x0152, GpuArch::IvyBridge),
    (0x0156, 0x0156, GpuArch::IvyBridge),
    (0x015A, 0x015A, GpuArch::IvyBridge),
    (0x0162, 0x0162, GpuArch::IvyBridge),
    (0x0166, 0x0166, GpuArch::IvyBridge),
    (0x016A, 0x016A, GpuArch::IvyBridge),
    (0x0402, 0x0402, GpuArch::Haswell),
    (0x0412, 0x0412, GpuArch::Haswell),
    (0x0416, 0x0416, GpuArch::Haswell),
    (0x041E, 0x041E, GpuArch::Haswell),
    (0x0A06, 0x0A06, GpuArch::Haswell),
    (0x0A16, 0x0A16, GpuArch::Haswell),
    (0x0A1E, 0x0A1E, GpuArch::Haswell),
    (0x0A26, 0x0A26, GpuArch::Haswell),
    (0x0A2E, 0x0A2E, GpuArch::Haswell),
    (0x0D22, 0x0D22, GpuArch::Haswell),
    (0x0D26, 0x0D26, GpuArch::Haswell),
    (0x1602, 0x1602, GpuArch::Broadwell),
    (0x1606, 0x1606, GpuArch::Broadwell),
    (0x1612, 0x1612, GpuArch::Broadwell),
    (0x1616, 0x1616, GpuArch::Broadwell),
    (0x161E, 0x161E, GpuArch::Broadwell),
    (0x1622, 0x1622, GpuArch::Broadwell),
    (0x1626, 0x1626, GpuArch::Broadwell),
    (0x162A, 0x162B, GpuArch::Broadwell),
    (0x1902, 0x1902, GpuArch::Skylake),
    (0x1906, 0x1906, GpuArch::Skylake),
    (0x1912, 0x1912, GpuArch::Skylake),
    (0x1916, 0x1916, GpuArch::Skylake),
    (0x191B, 0x191B, GpuArch::Skylake),
    (0x191E, 0x191E, GpuArch::Skylake),
    (0x1926, 0x1927, GpuArch::Skylake),
    (0x192B, 0x192B, GpuArch::Skylake),
    (0x193B, 0x193B, GpuArch::Skylake),
    (0x2772, 0x2772, GpuArch::Gma950),
    (0x2776, 0x2776, GpuArch::Gma950),
    (0x27A2, 0x27A2, GpuArch::Gma950),
    (0x27A6, 0x27A6, GpuArch::Gma950),
    (0x27AE, 0x27AE, GpuArch::Gma950),
    (0x2A02, 0x2A03, GpuArch::GmaX3100),
    (0x3E91, 0x3E92, GpuArch::CoffeeLake),
    (0x3E98, 0x3E98, GpuArch::CoffeeLake),
    (0x3E9B, 0x3E9B, GpuArch::CoffeeLake),
    (0x3EA0, 0x3EA0, GpuArch::CoffeeLake),
    (0x3EA5, 0x3EA6, GpuArch::CoffeeLake),
    (0x5902, 0x5902, GpuArch::KabyLake),
    (0x5912, 0x5912, GpuArch::KabyLake),
    (0x5916, 0x5916, GpuArch::KabyLake),
    (0x591B, 0x591B, GpuArch::KabyLake),
    (0x591E, 0x591E, GpuArch::KabyLake),
    (0x5923, 0x5923, GpuArch::KabyLake),
    (0x5926, 0x5927, GpuArch::KabyLake),
    (0x8A51, 0x8A53, GpuArch::IceLake),
    (0x8A5C, 0x8A5C, GpuArch::IceLake),
    (0x9BA5, 0x9BA5, GpuArch::CometLake),
    (0x9BC4, 0x9BC5, GpuArch::CometLake),
    (0x9BC8, 0x9BC8, GpuArch::CometLake),
];

const NVIDIA_IDS: &[(u16, u16, GpuArch)] = &[
    (0x0040, 0x004F, GpuArch::Curie),
    (0x0090, 0x009F, GpuArch::Curie),
    (0x00F0, 0x00FF, GpuArch::Curie),
    (0x0140, 0x014F, GpuArch::Curie),
    (0x0160, 0x016F, GpuArch::Curie),
    (0x0191, 0x0197, GpuArch::Tesla),
    (0x01D0, 0x01DF, GpuArch::Curie),
    (0x0390, 0x039F, GpuArch::Curie),
    (0x0400, 0x042F, GpuArch::Tesla),
    (0x05E0, 0x05FF, GpuArch::Tesla),
    (0x0600, 0x06BF, GpuArch::Tesla),
    (0x06C0, 0x06DF, GpuArch::Fermi),
    (0x06E0, 0x06FF, GpuArch::Tesla),
    (0x0860, 0x087F, GpuArch::Tesla),
    (0x0A20, 0x0A7F, GpuArch::Tesla),
    (0x0CA0, 0x0CBF, GpuArch::Tesla),
    (0x0DC0, 0x0DFF, GpuArch::Fermi),
    (0x0E20, 0x0E3F, GpuArch::Fermi),
    (0x0FC0, 0x0FFF, GpuArch::Kepler),
    (0x1000, 0x103F, GpuArch::Kepler),
    (0x1040, 0x107F, GpuArch::Fermi),
    (0x1080, 0x109F, GpuArch::Fermi),
    (0x1180, 0x11FF, GpuArch::Kepler),
    (0x1200, 0x121F, GpuArch::Fermi),
    (0x1240, 0x125F, GpuArch::Fermi),
    (0x1280, 0x12BF, GpuArch::Kepler),
    (0x1340, 0x13FF, GpuArch::Maxwell),
    (0x1400, 0x143F, GpuArch::Maxwell),
    (0x15F0, 0x15FF, GpuArch::Pascal),
    (0x17C0, 0x17FF, GpuArch::Maxwell),
    (0x1B00, 0x1BFF, GpuArch::Pascal),
    (0x1C00, 0x1CFF, GpuArch::Pascal),
    (0x1D00, 0x1D1F, GpuArch::Pascal),
];

const AMD_IDS: &[(u16, u16, GpuArch)] = &[
    (0x6600, 0x663F, GpuArch::LegacyGcn7000),
    (0x6640, 0x665F, GpuArch::LegacyGcn8000),
    (0x66A0, 0x66AF, GpuArch::Vega),
    (0x6700, 0x677F, GpuArch::TeraScale2),
    (0x6780, 0x679F, GpuArch::LegacyGcn7000),
    (0x67A0, 0x67BF, GpuArch::LegacyGcn8000),
    (0x67C0, 0x67FF, GpuArch::Polaris),
    (0x6800, 0x683F, GpuArch::LegacyGcn7000),
    (0x6860, 0x687F, GpuArch::Vega),
    (0x6880, 0x68FF, GpuArch::TeraScale2),
    (0x6920, 0x693F, GpuArch::LegacyGcn9000),
    (0x6980, 0x699F, GpuArch::Polaris),
    (0x69A0, 0x69AF, GpuArch::Vega),
    (0x6FDF, 0x6FDF, GpuArch::Polaris),
    (0x7100, 0x72FF, GpuArch::R500),
    (0x7300, 0x730F, GpuArch::LegacyGcn9000),
    (0x7310, 0x731F, GpuArch::Navi),
    (0x7340, 0x734F, GpuArch::Navi),
    (0x73A0, 0x73FF, GpuArch::Navi),
    (0x9400, 0x95FF, GpuArch::TeraScale1),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sorted(table: &[(u16, u16, GpuArch)]) {
        for (start, end, _) in table {
            assert!(start <= end, "range {:#06x}-{:#06x} inverted", start, end);
        }
        for pair in table.windows(2) {
            assert!(
                pair[0].1 < pair[1].0,
                "ranges {:#06x} and {:#06x} overlap or are unsorted",
                pair[0].0,
                pair[1].0
            );
        }
    }

    #[test]
    fn test_tables_are_sorted_and_disjoint() {
        assert_sorted(INTEL_IDS);
        assert_sorted(NVIDIA_IDS);
        assert_sorted(AMD_IDS);
    }

    #[test]
    fn test_known_devices() {
        assert_eq!(GpuArch::from_pci(VENDOR_INTEL, 0x0126), GpuArch::SandyBridge);
        assert_eq!(GpuArch::from_pci(VENDOR_INTEL, 0x0A26), GpuArch::Haswell);
        assert_eq!(GpuArch::from_pci(VENDOR_INTEL, 0x1912), GpuArch::Skylake);
        assert_eq!(GpuArch::from_pci(VENDOR_NVIDIA, 0x0FE9), GpuArch::Kepler);
        assert_eq!(GpuArch::from_pci(VENDOR_NVIDIA, 0x0863), GpuArch::Tesla);
        assert_eq!(GpuArch::from_pci(VENDOR_NVIDIA, 0x1B80), GpuArch::Pascal);
        assert_eq!(GpuArch::from_pci(VENDOR_AMD, 0x6741), GpuArch::TeraScale2);
        assert_eq!(GpuArch::from_pci(VENDOR_AMD, 0x67DF), GpuArch::Polaris);
        assert_eq!(GpuArch::from_pci(VENDOR_AMD, 0x6863), GpuArch::Vega);
        assert_eq!(GpuArch::from_pci(VENDOR_AMD, 0x9488), GpuArch::TeraScale1);
    }

    #[test]
    fn test_unknown_device_is_unknown() {
        assert_eq!(GpuArch::from_pci(VENDOR_NVIDIA, 0x2204), GpuArch::Unknown);
        assert_eq!(GpuArch::from_pci(VENDOR_INTEL, 0xFFFF), GpuArch::Unknown);
        // Vendor without a table
        assert_eq!(GpuArch::from_pci(0x1AF4, 0x1050), GpuArch::Unknown);
    }

    #[test]
    fn test_range_boundaries() {
        assert_eq!(GpuArch::from_pci(VENDOR_AMD, 0x67C0), GpuArch::Polaris);
        assert_eq!(GpuArch::from_pci(VENDOR_AMD, 0x67FF), GpuArch::Polaris);
        assert_eq!(GpuArch::from_pci(VENDOR_AMD, 0x67BF), GpuArch::LegacyGcn8000);
        assert_eq!(GpuArch::from_pci(VENDOR_AMD, 0x6850), GpuArch::Unknown);
    }

    #[test]
    fn test_vendor_of_arch() {
        assert_eq!(GpuArch::Kepler.vendor(), Some(GpuVendor::Nvidia));
        assert_eq!(GpuArch::Haswell.vendor(), Some(GpuVendor::Intel));
        assert_eq!(GpuArch::Vega.vendor(), Some(GpuVendor::Amd));
        assert_eq!(GpuArch::Unknown.vendor(), None);
    }

    #[test]
    fn test_from_arch_fills_vendor_id() {
        let gpu = Gpu::from_arch(GpuArch::Kepler, false);
        assert_eq!(gpu.vendor, GpuVendor::Nvidia);
        assert_eq!(gpu.vendor_id, VENDOR_NVIDIA);
        assert!(!gpu.integrated);
    }
}
