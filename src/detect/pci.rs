use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

pub const CLASS_SATA: u32 = 0x010601;
pub const CLASS_SAS: u32 = 0x010400;
pub const CLASS_NVME: u32 = 0x010802;
/// IDE controllers use class 0x0101 with a programming-interface byte that varies.
pub const CLASS_IDE_BASE: u32 = 0x0101;

pub const VENDOR_APPLE: u16 = 0x106B;

/// A raw PCI device as recorded by the probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PciRecord {
    pub vendor_id: u16,
    pub device_id: u16,
    #[serde(default)]
    pub class_code: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageInterface {
    Sata,
    Sas,
    Nvme,
    Pata,
}

impl StorageInterface {
    pub fn from_class_code(class_code: u32) -> Option<Self> {
        match class_code {
            CLASS_SATA => Some(StorageInterface::Sata),
            CLASS_SAS => Some(StorageInterface::Sas),
            CLASS_NVME => Some(StorageInterface::Nvme),
            c if c >> 8 == CLASS_IDE_BASE => Some(StorageInterface::Pata),
            _ => None,
        }
    }

    /// Parse the stock storage labels used by the model table ("SATA 2.5", "mSATA", "NVMe", ...).
    pub fn from_stock_label(label: &str) -> Option<Self> {
        let label = label.to_ascii_lowercase();
        if label.contains("nvme") {
            Some(StorageInterface::Nvme)
        } else if label.contains("pata") {
            Some(StorageInterface::Pata)
        } else if label.contains("sas") {
            Some(StorageInterface::Sas)
        } else if label.contains("sata") {
            Some(StorageInterface::Sata)
        } else {
            None
        }
    }
}

impl fmt::Display for StorageInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageInterface::Sata => write!(f, "SATA"),
            StorageInterface::Sas => write!(f, "SAS"),
            StorageInterface::Nvme => write!(f, "NVMe"),
            StorageInterface::Pata => write!(f, "PATA"),
        }
    }
}

/// Collect the distinct storage interfaces among the given controllers.
/// Controllers with unrecognized class codes are skipped.
pub fn storage_interfaces(controllers: &[PciRecord]) -> BTreeSet<StorageInterface> {
    controllers
        .iter()
        .filter_map(|c| {
            let kind = StorageInterface::from_class_code(c.class_code);
            if kind.is_none() {
                tracing::debug!(
                    "skipping storage controller {:04x}:{:04x} with class {:#08x}",
                    c.vendor_id,
                    c.device_id,
                    c.class_code
                );
            }
            kind
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_codes() {
        assert_eq!(
            StorageInterface::from_class_code(0x010601),
            Some(StorageInterface::Sata)
        );
        assert_eq!(
            StorageInterface::from_class_code(0x010802),
            Some(StorageInterface::Nvme)
        );
        assert_eq!(
            StorageInterface::from_class_code(0x01018A),
            Some(StorageInterface::Pata)
        );
        assert_eq!(StorageInterface::from_class_code(0x030000), None);
    }

    #[test]
    fn test_stock_labels() {
        assert_eq!(
            StorageInterface::from_stock_label("SATA 2.5"),
            Some(StorageInterface::Sata)
        );
        assert_eq!(
            StorageInterface::from_stock_label("mSATA"),
            Some(StorageInterface::Sata)
        );
        assert_eq!(
            StorageInterface::from_stock_label("NVMe"),
            Some(StorageInterface::Nvme)
        );
        assert_eq!(
            StorageInterface::from_stock_label("PATA"),
            Some(StorageInterface::Pata)
        );
        assert_eq!(StorageInterface::from_stock_label("Floppy"), None);
    }

    #[test]
    fn test_storage_interfaces_dedup() {
        let controllers = vec![
            PciRecord {
                vendor_id: 0x8086,
                device_id: 0x1C02,
                class_code: CLASS_SATA,
            },
            PciRecord {
                vendor_id: 0x8086,
                device_id: 0x1C03,
                class_code: CLASS_SATA,
            },
            PciRecord {
                vendor_id: VENDOR_APPLE,
                device_id: 0x2001,
                class_code: CLASS_NVME,
            },
            PciRecord {
                vendor_id: 0x1234,
                device_id: 0x0001,
                class_code: 0x0C0330,
            },
        ];
        let found = storage_interfaces(&controllers);
        assert_eq!(found.len(), 2);
        assert!(found.contains(&StorageInterface::Sata));
        assert!(found.contains(&StorageInterface::Nvme));
    }
}
