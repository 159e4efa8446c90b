use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BluetoothChipset {
    Brcm2045,
    Brcm2046,
    Brcm2070,
    Brcm20702V1,
    Brcm20702V2,
    Brcm20703,
    Brcm20703Uart,
    Uart,
    Pcie,
    Generic,
    NotApplicable,
}

impl BluetoothChipset {
    /// Classify from the USB hub name reported by the system profiler.
    /// Anything that is not a recognized Broadcom hub is `Generic`.
    pub fn from_hub_name(name: &str) -> Self {
        // Longest names first so "BRCM20702 Hub" is not caught by "BRCM2070".
        if name.contains("BRCM20702 Hub") {
            BluetoothChipset::Brcm20702V1
        } else if name.contains("BRCM2070 Hub") {
            BluetoothChipset::Brcm2070
        } else if name.contains("BRCM2046 Hub") {
            BluetoothChipset::Brcm2046
        } else if name.contains("BRCM2045 Hub") {
            BluetoothChipset::Brcm2045
        } else {
            BluetoothChipset::Generic
        }
    }
}

impl fmt::Display for BluetoothChipset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BluetoothChipset::Brcm2045 => "BRCM2045",
            BluetoothChipset::Brcm2046 => "BRCM2046",
            BluetoothChipset::Brcm2070 => "BRCM2070",
            BluetoothChipset::Brcm20702V1 => "BRCM20702 v1",
            BluetoothChipset::Brcm20702V2 => "BRCM20702 v2",
            BluetoothChipset::Brcm20703 => "BRCM20703",
            BluetoothChipset::Brcm20703Uart => "BRCM20703 UART",
            BluetoothChipset::Uart => "UART",
            BluetoothChipset::Pcie => "PCIe",
            BluetoothChipset::Generic => "Generic",
            BluetoothChipset::NotApplicable => "N/A",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hub_names() {
        assert_eq!(
            BluetoothChipset::from_hub_name("BRCM2046 Hub:\n  Product ID: 0x4500"),
            BluetoothChipset::Brcm2046
        );
        assert_eq!(
            BluetoothChipset::from_hub_name("BRCM20702 Hub"),
            BluetoothChipset::Brcm20702V1
        );
        assert_eq!(
            BluetoothChipset::from_hub_name("BRCM2070 Hub"),
            BluetoothChipset::Brcm2070
        );
        assert_eq!(
            BluetoothChipset::from_hub_name("Bluetooth USB Host Controller"),
            BluetoothChipset::Generic
        );
    }
}
