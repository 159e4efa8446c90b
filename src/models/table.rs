//! Stock configuration of every Intel Mac model identifier.
//!
//! Entries follow Apple's product ordering. Stock storage is kept as the
//! marketing label and parsed with `StorageInterface::from_stock_label`.

use super::{CpuGeneration, StockFlag, StockModel};
use crate::detect::bluetooth::BluetoothChipset;
use crate::detect::gpu::GpuArch;
use crate::detect::wireless::WirelessChipset;
use crate::os::darwin;

pub(super) const STOCK_MODELS: &[StockModel] = &[
    StockModel {
        identifier: "MacBook1,1",
        board_id: "Mac-F4208CC8",
        cpu: CpuGeneration::Yonah,
        max_os: 10,
        wireless: Some(WirelessChipset::AirPortAtheros40),
        bluetooth: Some(BluetoothChipset::Brcm2045),
        gpus: &[GpuArch::Gma950],
        storage: &["SATA 2.5", "PATA"],
        flags: &[StockFlag::UgaGraphics, StockFlag::LegacyISight],
    },
    StockModel {
        identifier: "MacBook2,1",
        board_id: "Mac-F4208CA9",
        cpu: CpuGeneration::Conroe,
        max_os: 11,
        wireless: Some(WirelessChipset::AirPortAtheros40),
        bluetooth: Some(BluetoothChipset::Brcm2045),
        gpus: &[GpuArch::Gma950],
        storage: &["SATA 2.5", "PATA"],
        flags: &[StockFlag::UgaGraphics, StockFlag::LegacyISight],
    },
    StockModel {
        identifier: "MacBook3,1",
        board_id: "Mac-F22788C8",
        cpu: CpuGeneration::Conroe,
        max_os: 11,
        wireless: Some(WirelessChipset::AirPortBrcm43224),
        bluetooth: Some(BluetoothChipset::Brcm2045),
        gpus: &[GpuArch::GmaX3100],
        storage: &["SATA 2.5", "PATA"],
        flags: &[StockFlag::UgaGraphics, StockFlag::LegacyISight],
    },
    StockModel {
        identifier: "MacBook4,1",
        board_id: "Mac-F22788A9",
        cpu: CpuGeneration::Penryn,
        max_os: 11,
        wireless: Some(WirelessChipset::AirPortBrcm43224),
        bluetooth: Some(BluetoothChipset::Brcm2046),
        gpus: &[GpuArch::GmaX3100],
        storage: &["SATA 2.5", "PATA"],
        flags: &[StockFlag::UgaGraphics, StockFlag::LegacyISight],
    },
    StockModel {
        identifier: "MacBook5,1",
        board_id: "Mac-F42D89C8",
        cpu: CpuGeneration::Penryn,
        max_os: 15,
        wireless: Some(WirelessChipset::AirPortBrcm4331),
        bluetooth: Some(BluetoothChipset::Brcm2046),
        gpus: &[GpuArch::Tesla],
        storage: &["SATA 2.5"],
        flags: &[StockFlag::NForce],
    },
    StockModel {
        identifier: "MacBook5,2",
        board_id: "Mac-F22788AA",
        cpu: CpuGeneration::Penryn,
        max_os: 15,
        wireless: Some(WirelessChipset::AirPortBrcm4331),
        bluetooth: Some(BluetoothChipset::Brcm2046),
        gpus: &[GpuArch::Tesla],
        storage: &["SATA 2.5"],
        flags: &[StockFlag::LegacyISight, StockFlag::NForce],
    },
    StockModel {
        identifier: "MacBook6,1",
        board_id: "Mac-F22C8AC8",
        cpu: CpuGeneration::Penryn,
        max_os: 17,
        wireless: Some(WirelessChipset::AirPortBrcm4360),
        bluetooth: Some(BluetoothChipset::Brcm2070),
        gpus: &[GpuArch::Tesla],
        storage: &["SATA 2.5"],
        flags: &[StockFlag::NForce],
    },
    StockModel {
        identifier: "MacBook7,1",
        board_id: "Mac-F22C89C8",
        cpu: CpuGeneration::Penryn,
        max_os: 17,
        wireless: Some(WirelessChipset::AirPortBrcm4360),
        bluetooth: Some(BluetoothChipset::Brcm2070),
        gpus: &[GpuArch::Tesla],
        storage: &["SATA 2.5"],
        flags: &[StockFlag::NForce],
    },
    StockModel {
        identifier: "MacBook8,1",
        board_id: "Mac-BE0E8AC46FE800CC",
        cpu: CpuGeneration::Broadwell,
        max_os: 20,
        wireless: Some(WirelessChipset::AirportBrcmNic),
        bluetooth: Some(BluetoothChipset::Brcm20703Uart),
        gpus: &[GpuArch::Broadwell],
        storage: &["NVMe"],
        flags: &[],
    },
    StockModel {
        identifier: "MacBook9,1",
        board_id: "Mac-9AE82516C7C6B903",
        cpu: CpuGeneration::Skylake,
        max_os: darwin::MAX_OS,
        wireless: Some(WirelessChipset::AirportBrcmNic),
        bluetooth: Some(BluetoothChipset::Brcm20703Uart),
        gpus: &[GpuArch::Skylake],
        storage: &["NVMe"],
        flags: &[],
    },
    StockModel {
        identifier: "MacBook10,1",
        board_id: "Mac-EE2EBD4B90B839A8",
        cpu: CpuGeneration::KabyLake,
        max_os: darwin::MAX_OS,
        wireless: Some(WirelessChipset::AirportBrcmNic),
        bluetooth: Some(BluetoothChipset::Brcm20703Uart),
        gpus: &[GpuArch::KabyLake],
        storage: &["NVMe"],
        flags: &[],
    },
    StockModel {
        identifier: "MacBookAir1,1",
        board_id: "Mac-F42C8CC8",
        cpu: CpuGeneration::Conroe,
        max_os: 11,
        wireless: Some(WirelessChipset::AirPortBrcm43224),
        bluetooth: Some(BluetoothChipset::Brcm2046),
        gpus: &[GpuArch::GmaX3100],
        storage: &["SATA 1.8"],
        flags: &[],
    },
    StockModel {
        identifier: "MacBookAir2,1",
        board_id: "Mac-F42D88C8",
        cpu: CpuGeneration::Penryn,
        max_os: 15,
        wireless: Some(WirelessChipset::AirPortBrcm43224),
        bluetooth: Some(BluetoothChipset::Brcm2046),
        gpus: &[GpuArch::Tesla],
        storage: &["SATA 1.8"],
        flags: &[StockFlag::NForce],
    },
    StockModel {
        identifier: "MacBookAir3,1",
        board_id: "Mac-942452F5819B1C1B",
        cpu: CpuGeneration::Penryn,
        max_os: 17,
        wireless: Some(WirelessChipset::AirPortBrcm4331),
        bluetooth: Some(BluetoothChipset::Brcm2046),
        gpus: &[GpuArch::Tesla],
        storage: &["mSATA"],
        flags: &[StockFlag::NForce],
    },
    StockModel {
        identifier: "MacBookAir3,2",
        board_id: "Mac-942C5DF58193131B",
        cpu: CpuGeneration::Penryn,
        max_os: 17,
        wireless: Some(WirelessChipset::AirPortBrcm4331),
        bluetooth: Some(BluetoothChipset::Brcm2046),
        gpus: &[GpuArch::Tesla],
        storage: &["mSATA"],
        flags: &[StockFlag::NForce],
    },
    StockModel {
        identifier: "MacBookAir4,1",
        board_id: "Mac-C08A6BB70A942AC2",
        cpu: CpuGeneration::SandyBridge,
        max_os: 17,
        wireless: Some(WirelessChipset::AirPortBrcm4360),
        bluetooth: Some(BluetoothChipset::Brcm2070),
        gpus: &[GpuArch::SandyBridge],
        storage: &["mSATA"],
        flags: &[],
    },
    StockModel {
        identifier: "MacBookAir4,2",
        board_id: "Mac-742912EFDBEE19B3",
        cpu: CpuGeneration::SandyBridge,
        max_os: 17,
        wireless: Some(WirelessChipset::AirPortBrcm4360),
        bluetooth: Some(BluetoothChipset::Brcm2070),
        gpus: &[GpuArch::SandyBridge],
        storage: &["mSATA"],
        flags: &[],
    },
    StockModel {
        identifier: "MacBookAir5,1",
        board_id: "Mac-66F35F19FE2A0D05",
        cpu: CpuGeneration::IvyBridge,
        max_os: 19,
        wireless: Some(WirelessChipset::AirPortBrcm4360),
        bluetooth: Some(BluetoothChipset::Brcm20702V1),
        gpus: &[GpuArch::IvyBridge],
        storage: &["mSATA"],
        flags: &[],
    },
    StockModel {
        identifier: "MacBookAir5,2",
        board_id: "Mac-2E6FAB96566FE58C",
        cpu: CpuGeneration::IvyBridge,
        max_os: 19,
        wireless: Some(WirelessChipset::AirPortBrcm4360),
        bluetooth: Some(BluetoothChipset::Brcm20702V1),
        gpus: &[GpuArch::IvyBridge],
        storage: &["mSATA"],
        flags: &[],
    },
    StockModel {
        identifier: "MacBookAir6,1",
        board_id: "Mac-35C1E88140C3E6CF",
        cpu: CpuGeneration::Haswell,
        max_os: 20,
        wireless: Some(WirelessChipset::AirportBrcmNic),
        bluetooth: Some(BluetoothChipset::Brcm20702V2),
        gpus: &[GpuArch::Haswell],
        storage: &["mSATA"],
        flags: &[],
    },
    StockModel {
        identifier: "MacBookAir6,2",
        board_id: "Mac-7DF21CB3ED6977E5",
        cpu: CpuGeneration::Haswell,
        max_os: 20,
        wireless: Some(WirelessChipset::AirportBrcmNic),
        bluetooth: Some(BluetoothChipset::Brcm20702V2),
        gpus: &[GpuArch::Haswell],
        storage: &["NVMe"],
        flags: &[],
    },
    StockModel {
        identifier: "MacBookAir7,1",
        board_id: "Mac-9F18E312C5C2BF0B",
        cpu: CpuGeneration::Broadwell,
        max_os: darwin::MAX_OS,
        wireless: Some(WirelessChipset::AirportBrcmNic),
        bluetooth: Some(BluetoothChipset::Brcm20702V2),
        gpus: &[GpuArch::Broadwell],
        storage: &["NVMe"],
        flags: &[],
    },
    StockModel {
        identifier: "MacBookAir7,2",
        board_id: "Mac-937CB26E2E02BB01",
        cpu: CpuGeneration::Broadwell,
        max_os: darwin::MAX_OS,
        wireless: Some(WirelessChipset::AirportBrcmNic),
        bluetooth: Some(BluetoothChipset::Brcm20702V2),
        gpus: &[GpuArch::Broadwell],
        storage: &["NVMe"],
        flags: &[],
    },
    StockModel {
        identifier: "MacBookAir8,1",
        board_id: "Mac-827FAC58A8FDFA22",
        cpu: CpuGeneration::CoffeeLake,
        max_os: darwin::MAX_OS,
        wireless: Some(WirelessChipset::AppleBcmWlanBusInterfacePcie),
        bluetooth: Some(BluetoothChipset::Uart),
        gpus: &[GpuArch::CoffeeLake],
        storage: &["NVMe"],
        flags: &[],
    },
    StockModel {
        identifier: "MacBookAir8,2",
        board_id: "Mac-226CB3C6A851A671",
        cpu: CpuGeneration::CoffeeLake,
        max_os: darwin::MAX_OS,
        wireless: Some(WirelessChipset::AppleBcmWlanBusInterfacePcie),
        bluetooth: Some(BluetoothChipset::Uart),
        gpus: &[GpuArch::CoffeeLake],
        storage: &["NVMe"],
        flags: &[],
    },
    StockModel {
        identifier: "MacBookAir9,1",
        board_id: "Mac-0CFF9C7C2B63DF8D",
        cpu: CpuGeneration::IceLake,
        max_os: darwin::MAX_OS,
        wireless: Some(WirelessChipset::AppleBcmWlanBusInterfacePcie),
        bluetooth: Some(BluetoothChipset::Uart),
        gpus: &[GpuArch::IceLake],
        storage: &["NVMe"],
        flags: &[],
    },
    StockModel {
        identifier: "MacBookPro1,1",
        board_id: "Mac-F425BEC8",
        cpu: CpuGeneration::Yonah,
        max_os: 10,
        wireless: Some(WirelessChipset::AirPortAtheros40),
        bluetooth: Some(BluetoothChipset::Brcm2045),
        gpus: &[GpuArch::R500],
        storage: &["SATA 2.5", "PATA"],
        flags: &[StockFlag::UgaGraphics],
    },
    StockModel {
        identifier: "MacBookPro1,2",
        board_id: "Mac-F42DBEC8",
        cpu: CpuGeneration::Yonah,
        max_os: 10,
        wireless: Some(WirelessChipset::AirPortAtheros40),
        bluetooth: Some(BluetoothChipset::Brcm2045),
        gpus: &[GpuArch::R500],
        storage: &["SATA 2.5", "PATA"],
        flags: &[StockFlag::UgaGraphics],
    },
    StockModel {
        identifier: "MacBookPro2,1",
        board_id: "Mac-F42189C8",
        cpu: CpuGeneration::Conroe,
        max_os: 11,
        wireless: Some(WirelessChipset::AirPortAtheros40),
        bluetooth: Some(BluetoothChipset::Brcm2045),
        gpus: &[GpuArch::R500],
        storage: &["SATA 2.5", "PATA"],
        flags: &[StockFlag::UgaGraphics],
    },
    StockModel {
        identifier: "MacBookPro2,2",
        board_id: "Mac-F42187C8",
        cpu: CpuGeneration::Conroe,
        max_os: 11,
        wireless: Some(WirelessChipset::AirPortAtheros40),
        bluetooth: Some(BluetoothChipset::Brcm2045),
        gpus: &[GpuArch::R500],
        storage: &["SATA 2.5", "PATA"],
        flags: &[StockFlag::UgaGraphics],
    },
    StockModel {
        identifier: "MacBookPro3,1",
        board_id: "Mac-F4238BC8",
        cpu: CpuGeneration::Conroe,
        max_os: 15,
        wireless: Some(WirelessChipset::AirPortAtheros40),
        bluetooth: Some(BluetoothChipset::Brcm2045),
        gpus: &[GpuArch::Tesla],
        storage: &["SATA 2.5", "PATA"],
        flags: &[StockFlag::UgaGraphics],
    },
    StockModel {
        identifier: "MacBookPro4,1",
        board_id: "Mac-F42C89C8",
        cpu: CpuGeneration::Penryn,
        max_os: 15,
        wireless: Some(WirelessChipset::AirPortBrcm43224),
        bluetooth: Some(BluetoothChipset::Brcm2046),
        gpus: &[GpuArch::Tesla],
        storage: &["SATA 2.5", "PATA"],
        flags: &[StockFlag::UgaGraphics, StockFlag::SwitchableGpus],
    },
    StockModel {
        identifier: "MacBookPro5,1",
        board_id: "Mac-F42D86C8",
        cpu: CpuGeneration::Penryn,
        max_os: 15,
        wireless: Some(WirelessChipset::AirPortBrcm4331),
        bluetooth: Some(BluetoothChipset::Brcm2046),
        gpus: &[GpuArch::Tesla],
        storage: &["SATA 2.5"],
        flags: &[StockFlag::NForce, StockFlag::SwitchableGpus],
    },
    StockModel {
        identifier: "MacBookPro5,2",
        board_id: "Mac-F2268EC8",
        cpu: CpuGeneration::Penryn,
        max_os: 15,
        wireless: Some(WirelessChipset::AirPortBrcm4331),
        bluetooth: Some(BluetoothChipset::Brcm2046),
        gpus: &[GpuArch::Tesla],
        storage: &["SATA 2.5"],
        flags: &[StockFlag::NForce, StockFlag::SwitchableGpus],
    },
    StockModel {
        identifier: "MacBookPro5,3",
        board_id: "Mac-F22587C8",
        cpu: CpuGeneration::Penryn,
        max_os: 15,
        wireless: Some(WirelessChipset::AirPortBrcm4331),
        bluetooth: Some(BluetoothChipset::Brcm2046),
        gpus: &[GpuArch::Tesla],
        storage: &["SATA 2.5"],
        flags: &[StockFlag::NForce, StockFlag::SwitchableGpus],
    },
    StockModel {
        identifier: "MacBookPro5,4",
        board_id: "Mac-F22587A1",
        cpu: CpuGeneration::Penryn,
        max_os: 15,
        wireless: Some(WirelessChipset::AirPortBrcm4331),
        bluetooth: Some(BluetoothChipset::Brcm2046),
        gpus: &[GpuArch::Tesla],
        storage: &["SATA 2.5"],
        flags: &[StockFlag::NForce, StockFlag::SwitchableGpus],
    },
    StockModel {
        identifier: "MacBookPro5,5",
        board_id: "Mac-F2268AC8",
        cpu: CpuGeneration::Penryn,
        max_os: 15,
        wireless: Some(WirelessChipset::AirPortBrcm4331),
        bluetooth: Some(BluetoothChipset::Brcm2046),
        gpus: &[GpuArch::Tesla],
        storage: &["SATA 2.5"],
        flags: &[StockFlag::NForce],
    },
    StockModel {
        identifier: "MacBookPro6,1",
        board_id: "Mac-F22589C8",
        cpu: CpuGeneration::Nehalem,
        max_os: 17,
        wireless: Some(WirelessChipset::AirPortBrcm4360),
        bluetooth: Some(BluetoothChipset::Brcm2070),
        gpus: &[GpuArch::IronLake, GpuArch::Tesla],
        storage: &["SATA 2.5"],
        flags: &[StockFlag::SwitchableGpus],
    },
    StockModel {
        identifier: "MacBookPro6,2",
        board_id: "Mac-F22586C8",
        cpu: CpuGeneration::Nehalem,
        max_os: 17,
        wireless: Some(WirelessChipset::AirPortBrcm4360),
        bluetooth: Some(BluetoothChipset::Brcm2070),
        gpus: &[GpuArch::IronLake, GpuArch::Tesla],
        storage: &["SATA 2.5"],
        flags: &[StockFlag::SwitchableGpus],
    },
    StockModel {
        identifier: "MacBookPro7,1",
        board_id: "Mac-F222BEC8",
        cpu: CpuGeneration::Penryn,
        max_os: 17,
        wireless: Some(WirelessChipset::AirPortBrcm4331),
        bluetooth: Some(BluetoothChipset::Brcm2046),
        gpus: &[GpuArch::Tesla],
        storage: &["SATA 2.5"],
        flags: &[StockFlag::NForce],
    },
    StockModel {
        identifier: "MacBookPro8,1",
        board_id: "Mac-94245B3640C91C81",
        cpu: CpuGeneration::SandyBridge,
        max_os: 17,
        wireless: Some(WirelessChipset::AirPortBrcm4360),
        bluetooth: Some(BluetoothChipset::Brcm2070),
        gpus: &[GpuArch::SandyBridge, GpuArch::TeraScale2],
        storage: &["SATA 2.5"],
        flags: &[],
    },
    StockModel {
        identifier: "MacBookPro8,2",
        board_id: "Mac-94245A3940C91C80",
        cpu: CpuGeneration::SandyBridge,
        max_os: 17,
        wireless: Some(WirelessChipset::AirPortBrcm4360),
        bluetooth: Some(BluetoothChipset::Brcm2070),
        gpus: &[GpuArch::SandyBridge, GpuArch::TeraScale2],
        storage: &["SATA 2.5"],
        flags: &[StockFlag::SwitchableGpus],
    },
    StockModel {
        identifier: "MacBookPro8,3",
        board_id: "Mac-942459F5819B171B",
        cpu: CpuGeneration::SandyBridge,
        max_os: 17,
        wireless: Some(WirelessChipset::AirPortBrcm4360),
        bluetooth: Some(BluetoothChipset::Brcm2070),
        gpus: &[GpuArch::SandyBridge, GpuArch::TeraScale2],
        storage: &["SATA 2.5"],
        flags: &[StockFlag::SwitchableGpus],
    },
    StockModel {
        identifier: "MacBookPro9,1",
        board_id: "Mac-4B7AC7E43945597E",
        cpu: CpuGeneration::IvyBridge,
        max_os: 19,
        wireless: Some(WirelessChipset::AirPortBrcm4360),
        bluetooth: Some(BluetoothChipset::Brcm20702V1),
        gpus: &[GpuArch::IvyBridge, GpuArch::Kepler],
        storage: &["SATA 2.5"],
        flags: &[StockFlag::SwitchableGpus],
    },
    StockModel {
        identifier: "MacBookPro9,2",
        board_id: "Mac-6F01561E16C75D06",
        cpu: CpuGeneration::IvyBridge,
        max_os: 19,
        wireless: Some(WirelessChipset::AirPortBrcm4360),
        bluetooth: Some(BluetoothChipset::Brcm20702V1),
        gpus: &[GpuArch::Kepler],
        storage: &["SATA 2.5"],
        flags: &[],
    },
    StockModel {
        identifier: "MacBookPro10,1",
        board_id: "Mac-C3EC7CD22292981F",
        cpu: CpuGeneration::IvyBridge,
        max_os: 19,
        wireless: Some(WirelessChipset::AirPortBrcm4360),
        bluetooth: Some(BluetoothChipset::Brcm20702V1),
        gpus: &[GpuArch::IvyBridge, GpuArch::Kepler],
        storage: &["mSATA"],
        flags: &[StockFlag::SwitchableGpus],
    },
    StockModel {
        identifier: "MacBookPro10,2",
        board_id: "Mac-AFD8A9D944EA4843",
        cpu: CpuGeneration::IvyBridge,
        max_os: 19,
        wireless: Some(WirelessChipset::AirPortBrcm4360),
        bluetooth: Some(BluetoothChipset::Brcm20702V1),
        gpus: &[GpuArch::Kepler],
        storage: &["mSATA"],
        flags: &[],
    },
    StockModel {
        identifier: "MacBookPro11,1",
        board_id: "Mac-189A3D4F975D5FFC",
        cpu: CpuGeneration::Haswell,
        max_os: 20,
        wireless: Some(WirelessChipset::AirportBrcmNic),
        bluetooth: Some(BluetoothChipset::Brcm20702V2),
        gpus: &[GpuArch::Haswell],
        storage: &["NVMe"],
        flags: &[],
    },
    StockModel {
        identifier: "MacBookPro11,2",
        board_id: "Mac-3CBD00234E554E41",
        cpu: CpuGeneration::Haswell,
        max_os: 20,
        wireless: Some(WirelessChipset::AirportBrcmNic),
        bluetooth: Some(BluetoothChipset::Brcm20702V2),
        gpus: &[GpuArch::Haswell],
        storage: &["NVMe"],
        flags: &[],
    },
    StockModel {
        identifier: "MacBookPro11,3",
        board_id: "Mac-2BD1B31983FE1663",
        cpu: CpuGeneration::Haswell,
        max_os: 20,
        wireless: Some(WirelessChipset::AirportBrcmNic),
        bluetooth: Some(BluetoothChipset::Brcm20702V2),
        gpus: &[GpuArch::Haswell],
        storage: &["NVMe"],
        flags: &[StockFlag::SwitchableGpus],
    },
    StockModel {
        identifier: "MacBookPro11,4",
        board_id: "Mac-06F11FD93F0323C5",
        cpu: CpuGeneration::Haswell,
        max_os: darwin::MAX_OS,
        wireless: Some(WirelessChipset::AirportBrcmNic),
        bluetooth: Some(BluetoothChipset::Brcm20702V2),
        gpus: &[GpuArch::Haswell],
        storage: &["NVMe"],
        flags: &[],
    },
    StockModel {
        identifier: "MacBookPro11,5",
        board_id: "Mac-06F11F11946D27C5",
        cpu: CpuGeneration::Haswell,
        max_os: darwin::MAX_OS,
        wireless: Some(WirelessChipset::AirportBrcmNic),
        bluetooth: Some(BluetoothChipset::Brcm20702V2),
        gpus: &[GpuArch::Haswell, GpuArch::LegacyGcn7000],
        storage: &["NVMe"],
        flags: &[StockFlag::SwitchableGpus],
    },
    StockModel {
        identifier: "MacBookPro12,1",
        board_id: "Mac-E43C1C25D4880AD6",
        cpu: CpuGeneration::Broadwell,
        max_os: darwin::MAX_OS,
        wireless: Some(WirelessChipset::AirportBrcmNic),
        bluetooth: Some(BluetoothChipset::Brcm20702V2),
        gpus: &[GpuArch::Broadwell],
        storage: &["NVMe"],
        flags: &[],
    },
    StockModel {
        identifier: "MacBookPro13,1",
        board_id: "Mac-473D31EABEB93F9B",
        cpu: CpuGeneration::Skylake,
        max_os: darwin::MAX_OS,
        wireless: Some(WirelessChipset::AirportBrcmNic),
        bluetooth: Some(BluetoothChipset::Brcm20703Uart),
        gpus: &[GpuArch::Skylake],
        storage: &["NVMe"],
        flags: &[],
    },
    StockModel {
        identifier: "MacBookPro13,2",
        board_id: "Mac-66E35819EE2D0D05",
        cpu: CpuGeneration::Skylake,
        max_os: darwin::MAX_OS,
        wireless: Some(WirelessChipset::AirportBrcmNic),
        bluetooth: Some(BluetoothChipset::Brcm20703Uart),
        gpus: &[GpuArch::Skylake],
        storage: &["NVMe"],
        flags: &[],
    },
    StockModel {
        identifier: "MacBookPro13,3",
        board_id: "Mac-A5C67F76ED83108C",
        cpu: CpuGeneration::Skylake,
        max_os: darwin::MAX_OS,
        wireless: Some(WirelessChipset::AirportBrcmNic),
        bluetooth: Some(BluetoothChipset::Brcm20703Uart),
        gpus: &[GpuArch::Skylake, GpuArch::Polaris],
        storage: &["NVMe"],
        flags: &[StockFlag::SwitchableGpus],
    },
    StockModel {
        identifier: "MacBookPro14,1",
        board_id: "Mac-B4831CEBD52A0C4C",
        cpu: CpuGeneration::KabyLake,
        max_os: darwin::MAX_OS,
        wireless: Some(WirelessChipset::AirportBrcmNic),
        bluetooth: Some(BluetoothChipset::Brcm20703Uart),
        gpus: &[GpuArch::KabyLake],
        storage: &["NVMe"],
        flags: &[],
    },
    StockModel {
        identifier: "MacBookPro14,2",
        board_id: "Mac-CAD6701F7CEA0921",
        cpu: CpuGeneration::KabyLake,
        max_os: darwin::MAX_OS,
        wireless: Some(WirelessChipset::AirportBrcmNic),
        bluetooth: Some(BluetoothChipset::Brcm20703Uart),
        gpus: &[GpuArch::KabyLake],
        storage: &["NVMe"],
        flags: &[],
    },
    StockModel {
        identifier: "MacBookPro14,3",
        board_id: "Mac-551B86E5744E2388",
        cpu: CpuGeneration::KabyLake,
        max_os: darwin::MAX_OS,
        wireless: Some(WirelessChipset::AirportBrcmNic),
        bluetooth: Some(BluetoothChipset::Brcm20703Uart),
        gpus: &[GpuArch::KabyLake, GpuArch::Polaris],
        storage: &["NVMe"],
        flags: &[StockFlag::SwitchableGpus],
    },
    StockModel {
        identifier: "MacBookPro15,1",
        board_id: "Mac-937A206F2EE63C01",
        cpu: CpuGeneration::CoffeeLake,
        max_os: darwin::MAX_OS,
        wireless: Some(WirelessChipset::AppleBcmWlanBusInterfacePcie),
        bluetooth: Some(BluetoothChipset::Uart),
        gpus: &[GpuArch::CoffeeLake, GpuArch::Polaris],
        storage: &["NVMe"],
        flags: &[StockFlag::SwitchableGpus],
    },
    StockModel {
        identifier: "MacBookPro15,2",
        board_id: "Mac-827FB448E656EC26",
        cpu: CpuGeneration::CoffeeLake,
        max_os: darwin::MAX_OS,
        wireless: Some(WirelessChipset::AppleBcmWlanBusInterfacePcie),
        bluetooth: Some(BluetoothChipset::Uart),
        gpus: &[GpuArch::CoffeeLake],
        storage: &["NVMe"],
        flags: &[],
    },
    StockModel {
        identifier: "MacBookPro15,3",
        board_id: "Mac-1E7E29AD0135F9BC",
        cpu: CpuGeneration::CoffeeLake,
        max_os: darwin::MAX_OS,
        wireless: Some(WirelessChipset::AppleBcmWlanBusInterfacePcie),
        bluetooth: Some(BluetoothChipset::Uart),
        gpus: &[GpuArch::CoffeeLake, GpuArch::Vega],
        storage: &["NVMe"],
        flags: &[StockFlag::SwitchableGpus],
    },
    StockModel {
        identifier: "MacBookPro15,4",
        board_id: "Mac-53FDB3D8DB8CA971",
        cpu: CpuGeneration::CoffeeLake,
        max_os: darwin::MAX_OS,
        wireless: Some(WirelessChipset::AppleBcmWlanBusInterfacePcie),
        bluetooth: Some(BluetoothChipset::Uart),
        gpus: &[GpuArch::CoffeeLake],
        storage: &["NVMe"],
        flags: &[],
    },
    StockModel {
        identifier: "MacBookPro16,1",
        board_id: "Mac-E1008331FDC96864",
        cpu: CpuGeneration::CoffeeLake,
        max_os: darwin::MAX_OS,
        wireless: Some(WirelessChipset::AppleBcmWlanBusInterfacePcie),
        bluetooth: Some(BluetoothChipset::Uart),
        gpus: &[GpuArch::CoffeeLake, GpuArch::Navi],
        storage: &["NVMe"],
        flags: &[StockFlag::SwitchableGpus],
    },
    StockModel {
        identifier: "MacBookPro16,2",
        board_id: "Mac-5F9802EFE386AA28",
        cpu: CpuGeneration::IceLake,
        max_os: darwin::MAX_OS,
        wireless: Some(WirelessChipset::AppleBcmWlanBusInterfacePcie),
        bluetooth: Some(BluetoothChipset::Uart),
        gpus: &[GpuArch::IceLake],
        storage: &["NVMe"],
        flags: &[],
    },
    StockModel {
        identifier: "MacBookPro16,3",
        board_id: "Mac-E7203C0F68AA0004",
        cpu: CpuGeneration::CoffeeLake,
        max_os: darwin::MAX_OS,
        wireless: Some(WirelessChipset::AppleBcmWlanBusInterfacePcie),
        bluetooth: Some(BluetoothChipset::Uart),
        gpus: &[GpuArch::CoffeeLake],
        storage: &["NVMe"],
        flags: &[],
    },
    StockModel {
        identifier: "MacBookPro16,4",
        board_id: "Mac-A61BADE1FDAD7B05",
        cpu: CpuGeneration::CoffeeLake,
        max_os: darwin::MAX_OS,
        wireless: Some(WirelessChipset::AppleBcmWlanBusInterfacePcie),
        bluetooth: Some(BluetoothChipset::Uart),
        gpus: &[GpuArch::CoffeeLake, GpuArch::Navi],
        storage: &["NVMe"],
        flags: &[StockFlag::SwitchableGpus],
    },
    StockModel {
        identifier: "Macmini1,1",
        board_id: "Mac-F4208EC8",
        cpu: CpuGeneration::Yonah,
        max_os: 10,
        wireless: Some(WirelessChipset::AirPortAtheros40),
        bluetooth: Some(BluetoothChipset::Brcm2045),
        gpus: &[GpuArch::Gma950],
        storage: &["SATA 2.5", "PATA"],
        flags: &[],
    },
    StockModel {
        identifier: "Macmini2,1",
        board_id: "Mac-F4208EAA",
        cpu: CpuGeneration::Conroe,
        max_os: 11,
        wireless: Some(WirelessChipset::AirPortAtheros40),
        bluetooth: Some(BluetoothChipset::Brcm2045),
        gpus: &[GpuArch::Gma950],
        storage: &["SATA 2.5", "PATA"],
        flags: &[],
    },
    StockModel {
        identifier: "Macmini3,1",
        board_id: "Mac-F22C86C8",
        cpu: CpuGeneration::Penryn,
        max_os: 15,
        wireless: Some(WirelessChipset::AirPortBrcm4331),
        bluetooth: Some(BluetoothChipset::Brcm2046),
        gpus: &[GpuArch::Tesla],
        storage: &["SATA 2.5"],
        flags: &[StockFlag::NForce],
    },
    StockModel {
        identifier: "Macmini4,1",
        board_id: "Mac-F2208EC8",
        cpu: CpuGeneration::Penryn,
        max_os: 17,
        wireless: Some(WirelessChipset::AirPortBrcm4360),
        bluetooth: Some(BluetoothChipset::Brcm2070),
        gpus: &[GpuArch::Tesla],
        storage: &["SATA 2.5"],
        flags: &[],
    },
    StockModel {
        identifier: "Macmini5,1",
        board_id: "Mac-8ED6AF5B48C039E1",
        cpu: CpuGeneration::SandyBridge,
        max_os: 17,
        wireless: Some(WirelessChipset::AirPortBrcm4360),
        bluetooth: Some(BluetoothChipset::Brcm2070),
        gpus: &[GpuArch::SandyBridge],
        storage: &["SATA 2.5"],
        flags: &[],
    },
    StockModel {
        identifier: "Macmini5,2",
        board_id: "Mac-4BC72D62AD45599E",
        cpu: CpuGeneration::SandyBridge,
        max_os: 17,
        wireless: Some(WirelessChipset::AirPortBrcm4360),
        bluetooth: Some(BluetoothChipset::Brcm2070),
        gpus: &[GpuArch::SandyBridge, GpuArch::TeraScale2],
        storage: &["SATA 2.5"],
        flags: &[],
    },
    StockModel {
        identifier: "Macmini5,3",
        board_id: "Mac-7BA5B2794B2CDB12",
        cpu: CpuGeneration::SandyBridge,
        max_os: 17,
        wireless: Some(WirelessChipset::AirPortBrcm4360),
        bluetooth: Some(BluetoothChipset::Brcm2070),
        gpus: &[GpuArch::SandyBridge],
        storage: &["SATA 2.5"],
        flags: &[],
    },
    StockModel {
        identifier: "Macmini6,1",
        board_id: "Mac-031AEE4D24BFF0B1",
        cpu: CpuGeneration::IvyBridge,
        max_os: 19,
        wireless: Some(WirelessChipset::AirPortBrcm4360),
        bluetooth: Some(BluetoothChipset::Brcm20702V1),
        gpus: &[GpuArch::IvyBridge],
        storage: &["SATA 2.5"],
        flags: &[],
    },
    StockModel {
        identifier: "Macmini6,2",
        board_id: "Mac-F65AE981FFA204ED",
        cpu: CpuGeneration::IvyBridge,
        max_os: 19,
        wireless: Some(WirelessChipset::AirPortBrcm4360),
        bluetooth: Some(BluetoothChipset::Brcm20702V1),
        gpus: &[GpuArch::IvyBridge],
        storage: &["SATA 2.5"],
        flags: &[],
    },
    StockModel {
        identifier: "Macmini7,1",
        board_id: "Mac-35C5E08120C7EEAF",
        cpu: CpuGeneration::Haswell,
        max_os: darwin::MAX_OS,
        wireless: Some(WirelessChipset::AirportBrcmNic),
        bluetooth: Some(BluetoothChipset::Brcm20702V2),
        gpus: &[GpuArch::Haswell],
        storage: &["SATA 2.5", "NVMe"],
        flags: &[],
    },
    StockModel {
        identifier: "Macmini8,1",
        board_id: "Mac-7BA5B2DFE22DDD8C",
        cpu: CpuGeneration::CoffeeLake,
        max_os: darwin::MAX_OS,
        wireless: Some(WirelessChipset::AppleBcmWlanBusInterfacePcie),
        bluetooth: Some(BluetoothChipset::Uart),
        gpus: &[GpuArch::CoffeeLake],
        storage: &["NVMe"],
        flags: &[],
    },
    StockModel {
        identifier: "iMac4,1",
        board_id: "Mac-F42786C8",
        cpu: CpuGeneration::Yonah,
        max_os: 10,
        wireless: Some(WirelessChipset::AirPortAtheros40),
        bluetooth: Some(BluetoothChipset::Brcm2045),
        gpus: &[GpuArch::R500],
        storage: &["SATA 3.5", "PATA"],
        flags: &[StockFlag::UgaGraphics, StockFlag::LegacyISight],
    },
    StockModel {
        identifier: "iMac4,2",
        board_id: "Mac-F4218EC8",
        cpu: CpuGeneration::Yonah,
        max_os: 10,
        wireless: Some(WirelessChipset::AirPortAtheros40),
        bluetooth: Some(BluetoothChipset::Brcm2045),
        gpus: &[GpuArch::Gma950],
        storage: &["SATA 3.5", "PATA"],
        flags: &[StockFlag::UgaGraphics, StockFlag::LegacyISight],
    },
    StockModel {
        identifier: "iMac5,1",
        board_id: "Mac-F4228EC8",
        cpu: CpuGeneration::Conroe,
        max_os: 11,
        wireless: Some(WirelessChipset::AirPortBrcm43224),
        bluetooth: Some(BluetoothChipset::Brcm2046),
        gpus: &[GpuArch::R500],
        storage: &["SATA 3.5", "PATA"],
        flags: &[StockFlag::UgaGraphics, StockFlag::LegacyISight],
    },
    StockModel {
        identifier: "iMac5,2",
        board_id: "Mac-F4218EC8",
        cpu: CpuGeneration::Conroe,
        max_os: 11,
        wireless: Some(WirelessChipset::AirPortBrcm43224),
        bluetooth: Some(BluetoothChipset::Brcm2046),
        gpus: &[GpuArch::Gma950],
        storage: &["SATA 3.5", "PATA"],
        flags: &[StockFlag::UgaGraphics, StockFlag::LegacyISight],
    },
    StockModel {
        identifier: "iMac6,1",
        board_id: "Mac-F4218FC8",
        cpu: CpuGeneration::Conroe,
        max_os: 11,
        wireless: Some(WirelessChipset::AirPortBrcm43224),
        bluetooth: Some(BluetoothChipset::Brcm2046),
        gpus: &[GpuArch::R500, GpuArch::Curie],
        storage: &["SATA 3.5", "PATA"],
        flags: &[StockFlag::UgaGraphics, StockFlag::LegacyISight],
    },
    StockModel {
        identifier: "iMac7,1",
        board_id: "Mac-F42386C8",
        cpu: CpuGeneration::Penryn,
        max_os: 15,
        wireless: Some(WirelessChipset::AirPortBrcm43224),
        bluetooth: Some(BluetoothChipset::Brcm2046),
        gpus: &[GpuArch::TeraScale1, GpuArch::Tesla],
        storage: &["SATA 3.5", "PATA"],
        flags: &[StockFlag::UgaGraphics],
    },
    StockModel {
        identifier: "iMac8,1",
        board_id: "Mac-F227BEC8",
        cpu: CpuGeneration::Penryn,
        max_os: 15,
        wireless: Some(WirelessChipset::AirPortBrcm43224),
        bluetooth: Some(BluetoothChipset::Brcm2046),
        gpus: &[GpuArch::TeraScale1, GpuArch::Tesla],
        storage: &["SATA 3.5", "PATA"],
        flags: &[StockFlag::UgaGraphics],
    },
    StockModel {
        identifier: "iMac9,1",
        board_id: "Mac-F2218FA9",
        cpu: CpuGeneration::Penryn,
        max_os: 15,
        wireless: Some(WirelessChipset::AirPortBrcm4331),
        bluetooth: Some(BluetoothChipset::Brcm2046),
        gpus: &[GpuArch::Tesla],
        storage: &["SATA 3.5"],
        flags: &[StockFlag::NForce],
    },
    StockModel {
        identifier: "iMac10,1",
        board_id: "Mac-F221DCC8",
        cpu: CpuGeneration::Penryn,
        max_os: 17,
        wireless: Some(WirelessChipset::AirPortAtheros40),
        bluetooth: Some(BluetoothChipset::Brcm2046),
        gpus: &[GpuArch::Tesla],
        storage: &["SATA 3.5"],
        flags: &[StockFlag::NForce],
    },
    StockModel {
        identifier: "iMac11,1",
        board_id: "Mac-F2268DAE",
        cpu: CpuGeneration::Nehalem,
        max_os: 17,
        wireless: Some(WirelessChipset::AirPortAtheros40),
        bluetooth: Some(BluetoothChipset::Brcm2046),
        gpus: &[GpuArch::TeraScale1],
        storage: &["SATA 3.5"],
        flags: &[],
    },
    StockModel {
        identifier: "iMac11,2",
        board_id: "Mac-F2238AC8",
        cpu: CpuGeneration::Nehalem,
        max_os: 17,
        wireless: Some(WirelessChipset::AirPortAtheros40),
        bluetooth: Some(BluetoothChipset::Brcm2046),
        gpus: &[GpuArch::TeraScale1, GpuArch::TeraScale2],
        storage: &["SATA 3.5"],
        flags: &[],
    },
    StockModel {
        identifier: "iMac11,3",
        board_id: "Mac-F2238BAE",
        cpu: CpuGeneration::Nehalem,
        max_os: 17,
        wireless: Some(WirelessChipset::AirPortAtheros40),
        bluetooth: Some(BluetoothChipset::Brcm2046),
        gpus: &[GpuArch::TeraScale1, GpuArch::TeraScale2],
        storage: &["SATA 3.5"],
        flags: &[],
    },
    StockModel {
        identifier: "iMac12,1",
        board_id: "Mac-942B5BF58194151B",
        cpu: CpuGeneration::SandyBridge,
        max_os: 17,
        wireless: Some(WirelessChipset::AirPortAtheros40),
        bluetooth: Some(BluetoothChipset::Brcm2046),
        gpus: &[GpuArch::SandyBridge, GpuArch::TeraScale2],
        storage: &["SATA 3.5"],
        flags: &[],
    },
    StockModel {
        identifier: "iMac12,2",
        board_id: "Mac-942B59F58194171B",
        cpu: CpuGeneration::SandyBridge,
        max_os: 17,
        wireless: Some(WirelessChipset::AirPortAtheros40),
        bluetooth: Some(BluetoothChipset::Brcm2046),
        gpus: &[GpuArch::SandyBridge, GpuArch::TeraScale2],
        storage: &["SATA 3.5"],
        flags: &[],
    },
    StockModel {
        identifier: "iMac13,1",
        board_id: "Mac-00BE6ED71E35EB86",
        cpu: CpuGeneration::IvyBridge,
        max_os: 19,
        wireless: Some(WirelessChipset::AirPortBrcm4360),
        bluetooth: Some(BluetoothChipset::Brcm20702V1),
        gpus: &[GpuArch::IvyBridge, GpuArch::Kepler],
        storage: &["SATA 3.5", "mSATA"],
        flags: &[],
    },
    StockModel {
        identifier: "iMac13,2",
        board_id: "Mac-FC02E91DDD3FA6A4",
        cpu: CpuGeneration::IvyBridge,
        max_os: 19,
        wireless: Some(WirelessChipset::AirPortBrcm4360),
        bluetooth: Some(BluetoothChipset::Brcm20702V1),
        gpus: &[GpuArch::IvyBridge, GpuArch::Kepler],
        storage: &["SATA 3.5", "mSATA"],
        flags: &[],
    },
    StockModel {
        identifier: "iMac13,3",
        board_id: "Mac-7DF2A3B5E5D671ED",
        cpu: CpuGeneration::IvyBridge,
        max_os: 19,
        wireless: Some(WirelessChipset::AirPortBrcm4360),
        bluetooth: Some(BluetoothChipset::Brcm20702V1),
        gpus: &[GpuArch::IvyBridge, GpuArch::Kepler],
        storage: &["SATA 3.5", "mSATA"],
        flags: &[],
    },
    StockModel {
        identifier: "iMac14,1",
        board_id: "Mac-031B6874CF7F642A",
        cpu: CpuGeneration::Haswell,
        max_os: 19,
        wireless: Some(WirelessChipset::AirportBrcmNic),
        bluetooth: Some(BluetoothChipset::Brcm20702V2),
        gpus: &[GpuArch::Haswell, GpuArch::Kepler],
        storage: &["SATA 3.5", "NVMe"],
        flags: &[],
    },
    StockModel {
        identifier: "iMac14,2",
        board_id: "Mac-27ADBB7B4CEE8E61",
        cpu: CpuGeneration::Haswell,
        max_os: 19,
        wireless: Some(WirelessChipset::AirportBrcmNic),
        bluetooth: Some(BluetoothChipset::Brcm20702V2),
        gpus: &[GpuArch::Haswell, GpuArch::Kepler],
        storage: &["SATA 3.5", "NVMe"],
        flags: &[],
    },
    StockModel {
        identifier: "iMac14,3",
        board_id: "Mac-77EB7D7DAF985301",
        cpu: CpuGeneration::Haswell,
        max_os: 19,
        wireless: Some(WirelessChipset::AirportBrcmNic),
        bluetooth: Some(BluetoothChipset::Brcm20702V2),
        gpus: &[GpuArch::Haswell, GpuArch::Kepler],
        storage: &["SATA 3.5", "NVMe"],
        flags: &[],
    },
    StockModel {
        identifier: "iMac14,4",
        board_id: "Mac-81E3E92DD6088272",
        cpu: CpuGeneration::Haswell,
        max_os: 20,
        wireless: Some(WirelessChipset::AirportBrcmNic),
        bluetooth: Some(BluetoothChipset::Brcm20702V2),
        gpus: &[GpuArch::Haswell],
        storage: &["SATA 3.5", "NVMe"],
        flags: &[],
    },
    StockModel {
        identifier: "iMac15,1",
        board_id: "Mac-42FD25EABCABB274",
        cpu: CpuGeneration::Haswell,
        max_os: 20,
        wireless: Some(WirelessChipset::AirportBrcmNic),
        bluetooth: Some(BluetoothChipset::Brcm20702V2),
        gpus: &[GpuArch::Haswell, GpuArch::LegacyGcn7000],
        storage: &["SATA 3.5", "NVMe"],
        flags: &[],
    },
    StockModel {
        identifier: "iMac16,1",
        board_id: "Mac-A369DDC4E67F1C45",
        cpu: CpuGeneration::Broadwell,
        max_os: darwin::MAX_OS,
        wireless: Some(WirelessChipset::AirportBrcmNic),
        bluetooth: Some(BluetoothChipset::Brcm20702V2),
        gpus: &[GpuArch::Broadwell],
        storage: &["SATA 3.5", "NVMe"],
        flags: &[],
    },
    StockModel {
        identifier: "iMac16,2",
        board_id: "Mac-FFE5EF870D7BA81A",
        cpu: CpuGeneration::Broadwell,
        max_os: darwin::MAX_OS,
        wireless: Some(WirelessChipset::AirportBrcmNic),
        bluetooth: Some(BluetoothChipset::Brcm20702V2),
        gpus: &[GpuArch::Broadwell],
        storage: &["SATA 3.5", "NVMe"],
        flags: &[],
    },
    StockModel {
        identifier: "iMac17,1",
        board_id: "Mac-DB15BD556843C820",
        cpu: CpuGeneration::Skylake,
        max_os: darwin::MAX_OS,
        wireless: Some(WirelessChipset::AirportBrcmNic),
        bluetooth: Some(BluetoothChipset::Brcm20702V2),
        gpus: &[GpuArch::Skylake, GpuArch::LegacyGcn9000],
        storage: &["SATA 3.5", "NVMe"],
        flags: &[],
    },
    StockModel {
        identifier: "iMac18,1",
        board_id: "Mac-4B682C642B45593E",
        cpu: CpuGeneration::KabyLake,
        max_os: darwin::MAX_OS,
        wireless: Some(WirelessChipset::AirportBrcmNic),
        bluetooth: Some(BluetoothChipset::Brcm20703),
        gpus: &[GpuArch::KabyLake],
        storage: &["SATA 3.5", "NVMe"],
        flags: &[],
    },
    StockModel {
        identifier: "iMac18,2",
        board_id: "Mac-77F17D7DA9285301",
        cpu: CpuGeneration::KabyLake,
        max_os: darwin::MAX_OS,
        wireless: Some(WirelessChipset::AirportBrcmNic),
        bluetooth: Some(BluetoothChipset::Brcm20703),
        gpus: &[GpuArch::KabyLake, GpuArch::Polaris],
        storage: &["SATA 3.5", "NVMe"],
        flags: &[],
    },
    StockModel {
        identifier: "iMac18,3",
        board_id: "Mac-BE088AF8C5EB4FA2",
        cpu: CpuGeneration::KabyLake,
        max_os: darwin::MAX_OS,
        wireless: Some(WirelessChipset::AirportBrcmNic),
        bluetooth: Some(BluetoothChipset::Brcm20703),
        gpus: &[GpuArch::KabyLake, GpuArch::Polaris],
        storage: &["SATA 3.5", "NVMe"],
        flags: &[],
    },
    StockModel {
        identifier: "iMac19,1",
        board_id: "Mac-AA95B1DDAB278B95",
        cpu: CpuGeneration::CoffeeLake,
        max_os: darwin::MAX_OS,
        wireless: Some(WirelessChipset::AppleBcmWlanBusInterfacePcie),
        bluetooth: Some(BluetoothChipset::Uart),
        gpus: &[GpuArch::CoffeeLake, GpuArch::Polaris, GpuArch::Vega],
        storage: &["SATA 3.5", "NVMe"],
        flags: &[],
    },
    StockModel {
        identifier: "iMac19,2",
        board_id: "Mac-63001698E7A34814",
        cpu: CpuGeneration::CoffeeLake,
        max_os: darwin::MAX_OS,
        wireless: Some(WirelessChipset::AppleBcmWlanBusInterfacePcie),
        bluetooth: Some(BluetoothChipset::Uart),
        gpus: &[GpuArch::CoffeeLake, GpuArch::Polaris, GpuArch::Vega],
        storage: &["SATA 3.5", "NVMe"],
        flags: &[],
    },
    StockModel {
        identifier: "iMac20,1",
        board_id: "Mac-CFF7D910A743CAAF",
        cpu: CpuGeneration::CometLake,
        max_os: darwin::MAX_OS,
        wireless: Some(WirelessChipset::AppleBcmWlanBusInterfacePcie),
        bluetooth: Some(BluetoothChipset::Uart),
        gpus: &[GpuArch::CometLake, GpuArch::Navi],
        storage: &["NVMe"],
        flags: &[],
    },
    StockModel {
        identifier: "iMac20,2",
        board_id: "Mac-AF89B6D9451A490B",
        cpu: CpuGeneration::CometLake,
        max_os: darwin::MAX_OS,
        wireless: Some(WirelessChipset::AppleBcmWlanBusInterfacePcie),
        bluetooth: Some(BluetoothChipset::Uart),
        gpus: &[GpuArch::CometLake, GpuArch::Navi],
        storage: &["NVMe"],
        flags: &[],
    },
    StockModel {
        identifier: "iMacPro1,1",
        board_id: "Mac-7BA5B2D9E42DDD94",
        cpu: CpuGeneration::Skylake,
        max_os: darwin::MAX_OS,
        wireless: Some(WirelessChipset::AppleBcmWlanBusInterfacePcie),
        bluetooth: Some(BluetoothChipset::Uart),
        gpus: &[GpuArch::Vega],
        storage: &["NVMe"],
        flags: &[],
    },
    StockModel {
        identifier: "MacPro1,1",
        board_id: "Mac-F4208DC8",
        cpu: CpuGeneration::Conroe,
        max_os: 11,
        wireless: None,
        bluetooth: Some(BluetoothChipset::Brcm2045),
        gpus: &[GpuArch::Curie],
        storage: &["SATA 3.5", "PATA"],
        flags: &[StockFlag::UgaGraphics],
    },
    StockModel {
        identifier: "MacPro2,1",
        board_id: "Mac-F4208DA9",
        cpu: CpuGeneration::Conroe,
        max_os: 11,
        wireless: None,
        bluetooth: Some(BluetoothChipset::Brcm2045),
        gpus: &[GpuArch::Curie],
        storage: &["SATA 3.5", "PATA"],
        flags: &[StockFlag::UgaGraphics],
    },
    StockModel {
        identifier: "MacPro3,1",
        board_id: "Mac-F42C88C8",
        cpu: CpuGeneration::Penryn,
        max_os: 15,
        wireless: Some(WirelessChipset::AirPortBrcm43224),
        bluetooth: Some(BluetoothChipset::Brcm2045),
        gpus: &[GpuArch::TeraScale1],
        storage: &["SATA 3.5", "PATA"],
        flags: &[StockFlag::UgaGraphics],
    },
    StockModel {
        identifier: "MacPro4,1",
        board_id: "Mac-F221BEC8",
        cpu: CpuGeneration::Nehalem,
        max_os: 15,
        wireless: Some(WirelessChipset::AirPortAtheros40),
        bluetooth: Some(BluetoothChipset::Brcm2046),
        gpus: &[GpuArch::Tesla],
        storage: &["SATA 3.5"],
        flags: &[],
    },
    StockModel {
        identifier: "MacPro5,1",
        board_id: "Mac-F221BEC8",
        cpu: CpuGeneration::Nehalem,
        max_os: 18,
        wireless: Some(WirelessChipset::AirPortBrcm4331),
        bluetooth: Some(BluetoothChipset::Brcm2046),
        gpus: &[GpuArch::TeraScale2],
        storage: &["SATA 3.5"],
        flags: &[],
    },
    StockModel {
        identifier: "MacPro6,1",
        board_id: "Mac-F60DEB81FF30ACF6",
        cpu: CpuGeneration::IvyBridge,
        max_os: darwin::MAX_OS,
        wireless: Some(WirelessChipset::AirportBrcmNic),
        bluetooth: Some(BluetoothChipset::Brcm20702V2),
        gpus: &[GpuArch::LegacyGcn7000],
        storage: &["NVMe"],
        flags: &[],
    },
    StockModel {
        identifier: "MacPro7,1",
        board_id: "Mac-27AD2F918AE68F61",
        cpu: CpuGeneration::CoffeeLake,
        max_os: darwin::MAX_OS,
        wireless: Some(WirelessChipset::AppleBcmWlanBusInterfacePcie),
        bluetooth: Some(BluetoothChipset::Uart),
        gpus: &[GpuArch::Polaris, GpuArch::Vega, GpuArch::Navi],
        storage: &["SATA 3.5", "NVMe"],
        flags: &[],
    },
    StockModel {
        identifier: "Xserve1,1",
        board_id: "Mac-F4208AC8",
        cpu: CpuGeneration::Conroe,
        max_os: 11,
        wireless: None,
        bluetooth: Some(BluetoothChipset::NotApplicable),
        gpus: &[GpuArch::R500],
        storage: &["SATA 3.5", "PATA"],
        flags: &[StockFlag::UgaGraphics],
    },
    StockModel {
        identifier: "Xserve2,1",
        board_id: "Mac-F42289C8",
        cpu: CpuGeneration::Penryn,
        max_os: 11,
        wireless: None,
        bluetooth: Some(BluetoothChipset::NotApplicable),
        gpus: &[GpuArch::R500],
        storage: &["SATA 3.5", "PATA"],
        flags: &[StockFlag::UgaGraphics],
    },
    StockModel {
        identifier: "Xserve3,1",
        board_id: "Mac-F223BEC8",
        cpu: CpuGeneration::Nehalem,
        max_os: 15,
        wireless: None,
        bluetooth: Some(BluetoothChipset::NotApplicable),
        gpus: &[GpuArch::Tesla],
        storage: &["SATA 3.5"],
        flags: &[],
    },
];
