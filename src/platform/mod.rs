//! Host platform detection
//!
//! Reads `/etc/os-release` and normalizes the distribution into a package
//! manager family. Detection is a pure read: a missing or unparseable record
//! degrades to [`DistroFamily::Unknown`] rather than failing the install.

use std::io::BufRead;

/// Normalized distribution family, keyed by package-manager dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistroFamily {
    Debian,
    RedHat,
    Arch,
    Suse,
    Unknown,
}

impl DistroFamily {
    /// Human-readable family tag used in status output and errors
    pub fn as_str(self) -> &'static str {
        match self {
            DistroFamily::Debian => "debian",
            DistroFamily::RedHat => "redhat",
            DistroFamily::Arch => "arch",
            DistroFamily::Suse => "suse",
            DistroFamily::Unknown => "unknown",
        }
    }

    /// Detect the family of the current host from `/etc/os-release`
    pub fn detect() -> Self {
        match std::fs::File::open("/etc/os-release") {
            Ok(file) => Self::detect_from_reader(std::io::BufReader::new(file)),
            Err(_) => DistroFamily::Unknown,
        }
    }

    /// Detect from any os-release formatted reader
    ///
    /// `ID=` decides first; `ID_LIKE=` breaks ties for derivatives
    /// (e.g. Mint reports `ID=linuxmint` with `ID_LIKE="ubuntu debian"`).
    pub fn detect_from_reader(reader: impl BufRead) -> Self {
        let mut id = None;
        let mut id_like = None;

        for line in reader.lines() {
            let Ok(line) = line else {
                return DistroFamily::Unknown;
            };
            if let Some(value) = line.strip_prefix("ID=") {
                id = Some(unquote(value));
            } else if let Some(value) = line.strip_prefix("ID_LIKE=") {
                id_like = Some(unquote(value));
            }
        }

        if let Some(id) = id {
            let family = Self::from_distro_id(&id);
            if family != DistroFamily::Unknown {
                return family;
            }
        }
        if let Some(id_like) = id_like {
            for candidate in id_like.split_whitespace() {
                let family = Self::from_distro_id(candidate);
                if family != DistroFamily::Unknown {
                    return family;
                }
            }
        }

        DistroFamily::Unknown
    }

    fn from_distro_id(id: &str) -> Self {
        match id {
            "debian" | "ubuntu" | "linuxmint" | "pop" | "raspbian" => DistroFamily::Debian,
            "fedora" | "rhel" | "centos" | "rocky" | "almalinux" => DistroFamily::RedHat,
            "arch" | "manjaro" | "endeavouros" => DistroFamily::Arch,
            "opensuse" | "opensuse-leap" | "opensuse-tumbleweed" | "sles" => DistroFamily::Suse,
            _ => DistroFamily::Unknown,
        }
    }
}

fn unquote(value: &str) -> String {
    value.trim().trim_matches('"').to_string()
}
