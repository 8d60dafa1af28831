//! Platform hardware inventory.
//!
//! [`SystemInventory`] answers attribute queries with whatever the
//! running OS exposes: sysfs/procfs on Linux, `ioreg`/`sysctl`/`diskutil`
//! on macOS, `wmic`/`getmac` on Windows. Every probe is best-effort; a
//! missing file, tool, or permission yields an empty string and the
//! caller keeps going.

use crate::attribute::{AttributeKind, AttributeSource};
use tracing::debug;

/// The real attribute source, backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemInventory;

impl SystemInventory {
    /// Creates a system inventory.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl AttributeSource for SystemInventory {
    fn read(&self, kind: AttributeKind) -> String {
        let value = match kind {
            AttributeKind::CpuModel => cpu_model(),
            AttributeKind::CpuFeatures => cpu_features(),
            AttributeKind::BoardSerial => board_serial(),
            AttributeKind::FirmwareSerial => firmware_serial(),
            AttributeKind::MacAddress => mac_address(),
            AttributeKind::BootVolumeSerial => boot_volume_serial(),
            AttributeKind::DisplayAdapter => display_adapter(),
            AttributeKind::MemorySerial => memory_serial(),
            AttributeKind::CpuId => cpu_id(),
            AttributeKind::ProductUuid => product_uuid(),
        };
        debug!("inventory {kind}: {} bytes", value.len());
        value
    }
}

/// Runs a command and returns trimmed stdout, or `None` on any failure.
#[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
fn run(program: &str, args: &[&str]) -> Option<String> {
    std::process::Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(target_os = "linux")]
fn read_trimmed(path: &str) -> Option<String> {
    std::fs::read_to_string(path)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(target_os = "linux")]
fn proc_cpuinfo_field(field: &str) -> Option<String> {
    let content = std::fs::read_to_string("/proc/cpuinfo").ok()?;
    content
        .lines()
        .find(|line| line.starts_with(field))
        .and_then(|line| line.split(':').nth(1))
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(target_os = "macos")]
fn ioreg_value(key: &str) -> Option<String> {
    let output = run("ioreg", &["-rd1", "-c", "IOPlatformExpertDevice"])?;
    output
        .lines()
        .find(|line| line.contains(key))
        .and_then(|line| line.split('"').nth(3))
        .map(String::from)
}

#[cfg(target_os = "macos")]
fn labeled_value(output: &str, label: &str) -> Option<String> {
    output
        .lines()
        .find(|line| line.contains(label))
        .and_then(|line| line.split(':').nth(1))
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Runs a `wmic ... /value` query and joins every `key=` match.
/// Multi-instance classes (memory modules) concatenate in listing order.
#[cfg(target_os = "windows")]
fn wmic_value(args: &[&str], key: &str) -> Option<String> {
    let output = run("wmic", args)?;
    let prefix = format!("{key}=");
    let values: Vec<&str> = output
        .lines()
        .filter_map(|line| line.trim().strip_prefix(prefix.as_str()))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .collect();
    if values.is_empty() {
        None
    } else {
        Some(values.concat())
    }
}

fn cpu_model() -> String {
    #[cfg(target_os = "linux")]
    {
        proc_cpuinfo_field("model name").unwrap_or_default()
    }

    #[cfg(target_os = "macos")]
    {
        run("sysctl", &["-n", "machdep.cpu.brand_string"]).unwrap_or_default()
    }

    #[cfg(target_os = "windows")]
    {
        wmic_value(&["cpu", "get", "Name", "/value"], "Name").unwrap_or_default()
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        String::new()
    }
}

fn cpu_features() -> String {
    #[cfg(target_os = "linux")]
    {
        proc_cpuinfo_field("flags").unwrap_or_default()
    }

    #[cfg(target_os = "macos")]
    {
        // Empty on Apple Silicon; x86 feature flags where present.
        run("sysctl", &["-n", "machdep.cpu.features"]).unwrap_or_default()
    }

    #[cfg(target_os = "windows")]
    {
        wmic_value(&["cpu", "get", "Caption", "/value"], "Caption").unwrap_or_default()
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        String::new()
    }
}

fn board_serial() -> String {
    #[cfg(target_os = "linux")]
    {
        read_trimmed("/sys/class/dmi/id/board_serial").unwrap_or_default()
    }

    #[cfg(target_os = "macos")]
    {
        ioreg_value("board-id").unwrap_or_default()
    }

    #[cfg(target_os = "windows")]
    {
        wmic_value(&["baseboard", "get", "SerialNumber", "/value"], "SerialNumber")
            .unwrap_or_default()
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        String::new()
    }
}

fn firmware_serial() -> String {
    #[cfg(target_os = "linux")]
    {
        read_trimmed("/sys/class/dmi/id/bios_version").unwrap_or_default()
    }

    #[cfg(target_os = "macos")]
    {
        ioreg_value("IOPlatformSerialNumber").unwrap_or_default()
    }

    #[cfg(target_os = "windows")]
    {
        wmic_value(&["bios", "get", "SerialNumber", "/value"], "SerialNumber").unwrap_or_default()
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        String::new()
    }
}

fn mac_address() -> String {
    #[cfg(target_os = "linux")]
    {
        first_adapter_address().unwrap_or_default()
    }

    #[cfg(target_os = "macos")]
    {
        run("ifconfig", &["en0"])
            .and_then(|output| {
                output
                    .lines()
                    .find(|line| line.trim_start().starts_with("ether"))
                    .and_then(|line| line.split_whitespace().nth(1))
                    .map(String::from)
            })
            .unwrap_or_default()
    }

    #[cfg(target_os = "windows")]
    {
        run("getmac", &["/NH", "/FO", "CSV"])
            .and_then(|output| {
                output
                    .lines()
                    .next()
                    .and_then(|line| line.split(',').next())
                    .map(|field| field.trim_matches('"').to_string())
            })
            .filter(|mac| !mac.is_empty())
            .unwrap_or_default()
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        String::new()
    }
}

#[cfg(target_os = "linux")]
fn first_adapter_address() -> Option<String> {
    let mut names: Vec<String> = std::fs::read_dir("/sys/class/net")
        .ok()?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name != "lo")
        .collect();
    names.sort();
    names.into_iter().find_map(|name| {
        read_trimmed(&format!("/sys/class/net/{name}/address"))
            .filter(|address| address != "00:00:00:00:00:00")
    })
}

fn boot_volume_serial() -> String {
    #[cfg(target_os = "linux")]
    {
        run("findmnt", &["-no", "UUID", "/"]).unwrap_or_default()
    }

    #[cfg(target_os = "macos")]
    {
        run("diskutil", &["info", "/"])
            .and_then(|output| labeled_value(&output, "Volume UUID"))
            .unwrap_or_default()
    }

    #[cfg(target_os = "windows")]
    {
        wmic_value(
            &[
                "path",
                "win32_logicaldisk",
                "where",
                "DeviceID='C:'",
                "get",
                "VolumeSerialNumber",
                "/value",
            ],
            "VolumeSerialNumber",
        )
        .unwrap_or_default()
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        String::new()
    }
}

fn display_adapter() -> String {
    #[cfg(target_os = "linux")]
    {
        let vendor = read_trimmed("/sys/class/drm/card0/device/vendor");
        let device = read_trimmed("/sys/class/drm/card0/device/device");
        match (vendor, device) {
            (Some(vendor), Some(device)) => format!("{vendor}:{device}"),
            (Some(vendor), None) => vendor,
            (None, Some(device)) => device,
            (None, None) => String::new(),
        }
    }

    #[cfg(target_os = "macos")]
    {
        run("system_profiler", &["SPDisplaysDataType"])
            .and_then(|output| labeled_value(&output, "Chipset Model"))
            .unwrap_or_default()
    }

    #[cfg(target_os = "windows")]
    {
        wmic_value(
            &["path", "win32_videocontroller", "get", "PNPDeviceID", "/value"],
            "PNPDeviceID",
        )
        .unwrap_or_default()
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        String::new()
    }
}

fn memory_serial() -> String {
    #[cfg(target_os = "linux")]
    {
        // Needs root for DMI table access; empty otherwise.
        run("dmidecode", &["-t", "17"])
            .map(|output| {
                output
                    .lines()
                    .filter_map(|line| line.trim().strip_prefix("Serial Number:"))
                    .map(str::trim)
                    .filter(|value| {
                        !value.is_empty() && *value != "Not Specified" && *value != "Unknown"
                    })
                    .collect::<Vec<_>>()
                    .concat()
            })
            .filter(|s| !s.is_empty())
            .unwrap_or_default()
    }

    #[cfg(target_os = "macos")]
    {
        run("system_profiler", &["SPMemoryDataType"])
            .and_then(|output| labeled_value(&output, "Serial Number"))
            .unwrap_or_default()
    }

    #[cfg(target_os = "windows")]
    {
        wmic_value(&["memorychip", "get", "SerialNumber", "/value"], "SerialNumber")
            .unwrap_or_default()
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        String::new()
    }
}

fn cpu_id() -> String {
    #[cfg(target_os = "linux")]
    {
        proc_cpuinfo_field("vendor_id").unwrap_or_default()
    }

    #[cfg(target_os = "macos")]
    {
        run("sysctl", &["-n", "machdep.cpu.vendor"]).unwrap_or_default()
    }

    #[cfg(target_os = "windows")]
    {
        wmic_value(&["cpu", "get", "ProcessorId", "/value"], "ProcessorId").unwrap_or_default()
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        String::new()
    }
}

fn product_uuid() -> String {
    #[cfg(target_os = "linux")]
    {
        read_trimmed("/sys/class/dmi/id/product_uuid").unwrap_or_default()
    }

    #[cfg(target_os = "macos")]
    {
        ioreg_value("IOPlatformUUID").unwrap_or_default()
    }

    #[cfg(target_os = "windows")]
    {
        wmic_value(&["csproduct", "get", "UUID", "/value"], "UUID").unwrap_or_default()
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        String::new()
    }
}
