//! Graphics acceleration payloads.
//!
//! Non-Metal GPUs (Iron Lake, Sandy Bridge, Tesla, TeraScale) get the
//! High Sierra/Mojave OpenGL stack back. Metal 1 GPUs (Ivy Bridge, Haswell,
//! Kepler) get the Metal 3802 compiler stack. Late Intel and legacy AMD get
//! the Monterey GVA/OpenCL stack.

use super::{
    EXTENSIONS, FRAMEWORKS, LAUNCH_DAEMONS, PRIVATE_FRAMEWORKS, PatchCatalogEntry,
    PatchCategory, SANDBOX_PROFILES,
};
use crate::os::{OsWindow, darwin};

fn graphics(name: &str, window: OsWindow) -> PatchCatalogEntry {
    PatchCatalogEntry::new(name, PatchCategory::Graphics, window)
}

pub fn entries() -> Vec<PatchCatalogEntry> {
    let mut entries = shared();
    entries.extend(intel());
    entries.extend(nvidia());
    entries.extend(amd());
    entries
}

fn shared() -> Vec<PatchCatalogEntry> {
    let big_sur = OsWindow::from_major(darwin::BIG_SUR);
    let ventura = OsWindow::from_major(darwin::VENTURA);

    vec![
        graphics("Non-Metal Common", big_sur)
            .install(
                EXTENSIONS,
                &[
                    ("IOSurface.kext", "10.15.7"),
                    ("AppleIntelCPUPowerManagement.kext", "10.15.7"),
                ],
            )
            .install(
                FRAMEWORKS,
                &[
                    ("OpenGL.framework", "10.14.3"),
                    ("CoreDisplay.framework", "10.14.4"),
                    ("IOSurface.framework", "10.15.7"),
                    ("QuartzCore.framework", "10.15.7"),
                ],
            )
            .install(
                PRIVATE_FRAMEWORKS,
                &[
                    ("GPUSupport.framework", "10.14.3"),
                    ("SkyLight.framework", "10.14.6"),
                ],
            )
            .install(LAUNCH_DAEMONS, &[("HiddHack.plist", "10.14.6")])
            .remove(
                EXTENSIONS,
                &["AMDRadeonX4000.kext", "AMDRadeonX5000.kext", "AppleIntelBDWGraphics.kext"],
            ),
        graphics("Non-Metal IOAccelerator Common", big_sur)
            .install(
                EXTENSIONS,
                &[
                    ("IOAcceleratorFamily2.kext", "10.13.6"),
                    ("IOSurface.kext", "10.14.6"),
                ],
            )
            .install(
                PRIVATE_FRAMEWORKS,
                &[
                    ("IOAccelerator.framework", "10.13.6"),
                    ("IOSurface.framework", "10.14.6"),
                ],
            )
            .remove(EXTENSIONS, &["AppleCameraInterface.kext"]),
        graphics("Non-Metal CoreDisplay Common", big_sur)
            .install(FRAMEWORKS, &[("CoreDisplay.framework", "10.13.6")]),
        graphics("Non-Metal Enforcement", big_sur)
            .display_name("Graphics: Non-Metal Enforcement")
            .install(
                SANDBOX_PROFILES,
                &[("com.apple.WindowServer.sb", "10.14.6")],
            ),
        graphics("Revert Non-Metal ColorSync Workaround", OsWindow::from_major(darwin::SONOMA))
            .remove(
                PRIVATE_FRAMEWORKS,
                &["ColorSync.framework/Versions/A/Resources/Patched"],
            ),
        graphics("WebKit Monterey Common", OsWindow::from_major(darwin::MONTEREY))
            .install(
                PRIVATE_FRAMEWORKS,
                &[("WebCore.framework", "12.6.8")],
            )
            .install(FRAMEWORKS, &[("WebKit.framework", "12.6.8")]),
        graphics("Metal 3802 Common", ventura)
            .install(
                FRAMEWORKS,
                &[("Metal.framework", "12.5-3802"), ("MetalPerformanceShaders.framework", "12.5-3802")],
            )
            .install(
                PRIVATE_FRAMEWORKS,
                &[("MTLCompiler.framework", "12.5-3802"), ("GPUCompiler.framework", "12.5-3802")],
            ),
        graphics("Metal 3802 Common Extended", OsWindow::from_major(darwin::SONOMA))
            .install(
                FRAMEWORKS,
                &[("Metal.framework", "13.2.1-3802")],
            )
            .install(
                PRIVATE_FRAMEWORKS,
                &[("RenderBox.framework", "13.5-3802")],
            ),
        graphics("High Sierra GVA", big_sur)
            .install(
                PRIVATE_FRAMEWORKS,
                &[
                    ("AppleGVA.framework", "10.13.6"),
                    ("AppleGVACore.framework", "10.15.7"),
                ],
            ),
        graphics("Catalina GVA", ventura)
            .install(
                PRIVATE_FRAMEWORKS,
                &[
                    ("AppleGVA.framework", "10.15.7"),
                    ("AppleGVACore.framework", "10.15.7"),
                ],
            ),
        graphics("Monterey GVA", ventura)
            .install(
                PRIVATE_FRAMEWORKS,
                &[
                    ("AppleGVA.framework", "12.5"),
                    ("AppleGVACore.framework", "12.5"),
                ],
            ),
        graphics("Monterey OpenCL", ventura)
            .install(FRAMEWORKS, &[("OpenCL.framework", "12.5")]),
        graphics("Big Sur OpenCL", ventura)
            .install(FRAMEWORKS, &[("OpenCL.framework", "11.6")]),
        graphics("Revert GVA Downgrade", ventura)
            .remove(
                PRIVATE_FRAMEWORKS,
                &["AppleGVA.framework", "AppleGVACore.framework"],
            ),
    ]
}

fn intel() -> Vec<PatchCatalogEntry> {
    let ventura = OsWindow::from_major(darwin::VENTURA);

    vec![
        graphics("Intel Ironlake", OsWindow::from_major(darwin::BIG_SUR))
            .display_name("Graphics: Intel Ironlake")
            .install(
                EXTENSIONS,
                &[
                    ("AppleIntelHDGraphics.kext", "10.13.6"),
                    ("AppleIntelHDGraphicsFB.kext", "10.13.6"),
                    ("AppleIntelHDGraphicsGA.plugin", "10.13.6"),
                    ("AppleIntelHDGraphicsGLDriver.bundle", "10.13.6"),
                    ("AppleIntelHDGraphicsVADriver.bundle", "10.13.6"),
                ],
            ),
        graphics("Intel Sandy Bridge", OsWindow::from_major(darwin::BIG_SUR))
            .display_name("Graphics: Intel Sandy Bridge")
            .install(
                EXTENSIONS,
                &[
                    ("AppleIntelHD3000Graphics.kext", "10.13.6"),
                    ("AppleIntelHD3000GraphicsGA.plugin", "10.13.6"),
                    ("AppleIntelHD3000GraphicsGLDriver.bundle", "10.13.6"),
                    ("AppleIntelHD3000GraphicsVADriver.bundle", "10.13.6"),
                    ("AppleIntelSNBGraphicsFB.kext", "10.13.6"),
                    ("AppleIntelSNBVA.bundle", "10.13.6"),
                ],
            ),
        graphics("Intel Ivy Bridge", OsWindow::from_major(darwin::MONTEREY))
            .display_name("Graphics: Intel Ivy Bridge")
            .install(
                EXTENSIONS,
                &[
                    ("AppleIntelIVBVA.bundle", "11.7.10"),
                    ("AppleIntelFramebufferCapri.kext", "11.7.10"),
                    ("AppleIntelHD4000Graphics.kext", "11.7.10"),
                    ("AppleIntelHD4000GraphicsGLDriver.bundle", "11.7.10"),
                    ("AppleIntelHD4000GraphicsMTLDriver.bundle", "11.7.10"),
                    ("AppleIntelHD4000GraphicsVADriver.bundle", "11.7.10"),
                ],
            ),
        graphics("Intel Haswell", ventura)
            .display_name("Graphics: Intel Haswell")
            .install(
                EXTENSIONS,
                &[
                    ("AppleIntelFramebufferAzul.kext", "12.5"),
                    ("AppleIntelHD5000Graphics.kext", "12.5"),
                    ("AppleIntelHD5000GraphicsGLDriver.bundle", "12.5"),
                    ("AppleIntelHD5000GraphicsMTLDriver.bundle", "12.5"),
                    ("AppleIntelHD5000GraphicsVADriver.bundle", "12.5"),
                    ("AppleIntelHSWVA.bundle", "12.5"),
                ],
            ),
        graphics("Intel Broadwell", ventura)
            .display_name("Graphics: Intel Broadwell")
            .install(
                EXTENSIONS,
                &[
                    ("AppleIntelBDWGraphics.kext", "12.5"),
                    ("AppleIntelBDWGraphicsFramebuffer.kext", "12.5"),
                    ("AppleIntelBDWGraphicsGLDriver.bundle", "12.5"),
                    ("AppleIntelBDWGraphicsMTLDriver.bundle", "12.5"),
                    ("AppleIntelBDWGraphicsVADriver.bundle", "12.5"),
                    ("AppleIntelBDWGraphicsVAME.bundle", "12.5"),
                    ("AppleIntelGraphicsShared.bundle", "12.5"),
                ],
            ),
        graphics("Intel Skylake", ventura)
            .display_name("Graphics: Intel Skylake")
            .install(
                EXTENSIONS,
                &[
                    ("AppleIntelSKLGraphics.kext", "12.5"),
                    ("AppleIntelSKLGraphicsFramebuffer.kext", "12.5"),
                    ("AppleIntelSKLGraphicsGLDriver.bundle", "12.5"),
                    ("AppleIntelSKLGraphicsMTLDriver.bundle", "12.5"),
                    ("AppleIntelSKLGraphicsVADriver.bundle", "12.5"),
                    ("AppleIntelSKLGraphicsVAME.bundle", "12.5"),
                    ("AppleIntelGraphicsShared.bundle", "12.5"),
                ],
            ),
    ]
}

fn nvidia() -> Vec<PatchCatalogEntry> {
    vec![
        graphics("Nvidia Tesla", OsWindow::from_major(darwin::BIG_SUR))
            .display_name("Graphics: Nvidia Tesla")
            .install(
                EXTENSIONS,
                &[
                    ("GeForceGA.bundle", "10.13.6"),
                    ("GeForceTesla.kext", "10.13.6"),
                    ("GeForceTeslaGLDriver.bundle", "10.13.6"),
                    ("GeForceTeslaVADriver.bundle", "10.13.6"),
                    ("NVDANV50HalTesla.kext", "10.13.6"),
                    ("NVDAResmanTesla.kext", "10.13.6"),
                    ("NVDAStartup.kext", "12.0 Beta 6"),
                ],
            ),
        graphics("Nvidia Web Drivers", OsWindow::from_major(darwin::BIG_SUR))
            .display_name("Graphics: Nvidia Web Drivers")
            .install(
                EXTENSIONS,
                &[
                    ("GeForceAIRPlugin.bundle", "WebDriver-387.10.10.10.40.140"),
                    ("GeForceGLDriverWeb.bundle", "WebDriver-387.10.10.10.40.140"),
                    ("GeForceWeb.kext", "WebDriver-387.10.10.10.40.140"),
                    ("NVDAGF100HalWeb.kext", "WebDriver-387.10.10.10.40.140"),
                    ("NVDAGK100HalWeb.kext", "WebDriver-387.10.10.10.40.140"),
                    ("NVDAGM100HalWeb.kext", "WebDriver-387.10.10.10.40.140"),
                    ("NVDAGP100HalWeb.kext", "WebDriver-387.10.10.10.40.140"),
                    ("NVDAResmanWeb.kext", "WebDriver-387.10.10.10.40.140"),
                    ("NVDAStartupWeb.kext", "WebDriver-387.10.10.10.40.140"),
                ],
            )
            .remove(EXTENSIONS, &["NVDAStartup.kext"]),
        graphics("Nvidia Kepler", OsWindow::from_major(darwin::MONTEREY))
            .display_name("Graphics: Nvidia Kepler")
            .install(
                EXTENSIONS,
                &[
                    ("GeForceAIRPlugin.bundle", "11.0 Beta 3"),
                    ("GeForceGLDriver.bundle", "11.0 Beta 3"),
                    ("GeForceMTLDriver.bundle", "11.0 Beta 3"),
                    ("GeForceVADriver.bundle", "12.0 Beta 6"),
                    ("NVDAGF100Hal.kext", "11.0 Beta 3"),
                    ("NVDAGK100Hal.kext", "12.0 Beta 4"),
                    ("NVDAResman.kext", "12.0 Beta 4"),
                    ("NVDAStartup.kext", "12.0 Beta 4"),
                    ("GeForce.kext", "12.0 Beta 6"),
                ],
            ),
    ]
}

fn amd() -> Vec<PatchCatalogEntry> {
    let big_sur = OsWindow::from_major(darwin::BIG_SUR);
    let ventura = OsWindow::from_major(darwin::VENTURA);

    vec![
        graphics("AMD TeraScale Common", big_sur)
            .install(
                EXTENSIONS,
                &[
                    ("AMDFramebuffer.kext", "10.13.6"),
                    ("AMDLegacyFramebuffer.kext", "10.13.6"),
                    ("AMDLegacySupport.kext", "10.13.6"),
                    ("AMDShared.bundle", "10.13.6"),
                    ("AMDSupport.kext", "10.13.6"),
                ],
            ),
        graphics("AMD TeraScale 1", big_sur)
            .display_name("Graphics: AMD TeraScale 1")
            .install(
                EXTENSIONS,
                &[
                    ("AMD2400Controller.kext", "10.13.6"),
                    ("AMD2600Controller.kext", "10.13.6"),
                    ("AMD3800Controller.kext", "10.13.6"),
                    ("AMD4600Controller.kext", "10.13.6"),
                    ("AMD4800Controller.kext", "10.13.6"),
                    ("ATIRadeonX2000.kext", "10.13.6"),
                    ("ATIRadeonX2000GA.plugin", "10.13.6"),
                    ("ATIRadeonX2000GLDriver.bundle", "10.13.6"),
                    ("ATIRadeonX2000VADriver.bundle", "10.13.6"),
                ],
            ),
        graphics("AMD TeraScale 2", big_sur)
            .display_name("Graphics: AMD TeraScale 2")
            .install(
                EXTENSIONS,
                &[
                    ("AMD5000Controller.kext", "10.13.6"),
                    ("AMD6000Controller.kext", "10.13.6"),
                    ("AMDRadeonVADriver.bundle", "10.13.6"),
                    ("AMDRadeonVADriver2.bundle", "10.13.6"),
                    ("AMDRadeonX3000.kext", "10.13.6"),
                    ("AMDRadeonX3000GLDriver.bundle", "10.13.6"),
                    ("IOGPUFamily.kext", "10.13.6"),
                ],
            ),
        graphics("AMD Legacy GCN", ventura)
            .display_name("Graphics: AMD Legacy GCN")
            .install(
                EXTENSIONS,
                &[
                    ("AMD7000Controller.kext", "12.5"),
                    ("AMD8000Controller.kext", "12.5"),
                    ("AMD9000Controller.kext", "12.5"),
                    ("AMD9500Controller.kext", "12.5"),
                    ("AMD10000Controller.kext", "12.5"),
                    ("AMDRadeonX4000.kext", "12.5"),
                    ("AMDRadeonX4000HWServices.kext", "12.5"),
                    ("AMDFramebuffer.kext", "12.5"),
                    ("AMDSupport.kext", "12.5"),
                    ("AMDRadeonVADriver.bundle", "12.5"),
                    ("AMDRadeonVADriver2.bundle", "12.5"),
                    ("AMDRadeonX4000GLDriver.bundle", "12.5"),
                    ("AMDMTLBronzeDriver.bundle", "12.5"),
                    ("AMDShared.bundle", "12.5"),
                ],
            ),
        graphics("AMD Legacy Polaris", ventura)
            .display_name("Graphics: AMD Legacy Polaris")
            .install(
                EXTENSIONS,
                &[
                    ("AMDRadeonX4000.kext", "12.5"),
                    ("AMDRadeonX4000HWServices.kext", "12.5"),
                    ("AMDRadeonVADriver2.bundle", "12.5"),
                    ("AMDRadeonX4000GLDriver.bundle", "12.5"),
                    ("AMDMTLBronzeDriver.bundle", "12.5"),
                    ("AMDShared.bundle", "12.5"),
                ],
            ),
        graphics("AMD Legacy GCN v2", OsWindow::from_major(darwin::SONOMA))
            .display_name("Graphics: AMD Legacy GCN (2017)")
            .install(
                EXTENSIONS,
                &[
                    ("AMDRadeonX4000.kext", "13.5.2"),
                    ("AMDRadeonX4000HWServices.kext", "13.5.2"),
                    ("AMDRadeonVADriver2.bundle", "13.5.2"),
                    ("AMDRadeonX4000GLDriver.bundle", "13.5.2"),
                    ("AMDMTLBronzeDriver.bundle", "13.5.2"),
                    ("AMDShared.bundle", "13.5.2"),
                ],
            ),
        graphics("AMD Legacy Vega", ventura)
            .display_name("Graphics: AMD Legacy Vega")
            .install(
                EXTENSIONS,
                &[
                    ("AMDRadeonX5000.kext", "12.5"),
                    ("AMDRadeonVADriver2.bundle", "12.5"),
                    ("AMDRadeonX5000GLDriver.bundle", "12.5"),
                    ("AMDRadeonX5000MTLDriver.bundle", "12.5"),
                    ("AMDRadeonX5000Shared.bundle", "12.5"),
                    ("AMDShared.bundle", "12.5"),
                ],
            ),
        graphics("AMD Legacy Vega Extended", ventura)
            .install(
                EXTENSIONS,
                &[("AMDRadeonX5000HWServices.kext", "12.5")],
            ),
        graphics("AMD OpenCL", ventura)
            .install(
                FRAMEWORKS,
                &[("OpenCL.framework", "12.5 non-AVX2.0")],
            )
            .install(
                PRIVATE_FRAMEWORKS,
                &[("AMDMTLBronzeDriver.bundle", "12.5 non-AVX2.0")],
            ),
    ]
}
