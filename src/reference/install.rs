//! Installation instructions for DevCLI.

use serde::Serialize;

/// A way to install DevCLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InstallMethod {
    pub id: &'static str,
    pub name: &'static str,
    /// Shell command; may span several lines
    pub command: &'static str,
    pub description: &'static str,
}

/// Support status of a platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportStatus {
    Supported,
    Beta,
}

impl SupportStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SupportStatus::Supported => "supported",
            SupportStatus::Beta => "beta",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Platform {
    pub name: &'static str,
    pub archs: &'static [&'static str],
    pub status: SupportStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Requirement {
    pub label: &'static str,
    pub value: &'static str,
}

/// A numbered step to run after installing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PostInstallStep {
    pub title: &'static str,
    pub command: &'static str,
}

pub const INSTALL_METHODS: &[InstallMethod] = &[
    InstallMethod {
        id: "curl",
        name: "curl (Linux/macOS)",
        command: "curl -fsSL https://devcli.sh/install | bash",
        description: "One-line installer for Unix-like systems",
    },
    InstallMethod {
        id: "wget",
        name: "wget (Linux)",
        command: "wget -qO- https://devcli.sh/install | bash",
        description: "Alternative one-line installer using wget",
    },
    InstallMethod {
        id: "brew",
        name: "Homebrew (macOS)",
        command: "brew install devcli",
        description: "Install via Homebrew package manager",
    },
    InstallMethod {
        id: "go",
        name: "Go Install",
        command: "go install github.com/devcli/devcli@latest",
        description: "Install directly from source with Go",
    },
    InstallMethod {
        id: "manual",
        name: "Manual Download",
        command: "# Download from GitHub releases\n# https://github.com/devcli/devcli/releases",
        description: "Download pre-built binaries for your platform",
    },
];

pub const PLATFORMS: &[Platform] = &[
    Platform {
        name: "Linux",
        archs: &["x86_64", "ARM64", "ARMv7"],
        status: SupportStatus::Supported,
    },
    Platform {
        name: "macOS",
        archs: &["Intel", "Apple Silicon"],
        status: SupportStatus::Supported,
    },
    Platform {
        name: "Windows",
        archs: &["x86_64", "ARM64"],
        status: SupportStatus::Supported,
    },
    Platform {
        name: "FreeBSD",
        archs: &["x86_64"],
        status: SupportStatus::Beta,
    },
];

pub const REQUIREMENTS: &[Requirement] = &[
    Requirement {
        label: "Go version",
        value: "1.20 or later",
    },
    Requirement {
        label: "Memory",
        value: "64 MB RAM minimum",
    },
    Requirement {
        label: "Disk space",
        value: "50 MB for binary",
    },
    Requirement {
        label: "Terminal",
        value: "Any modern terminal emulator",
    },
];

pub const POST_INSTALL: &[PostInstallStep] = &[
    PostInstallStep {
        title: "Verify installation",
        command: "devcli --version",
    },
    PostInstallStep {
        title: "Run first-time setup",
        command: "devcli init",
    },
    PostInstallStep {
        title: "Explore available commands",
        command: "devcli --help",
    },
];

/// Look up an install method by id (`curl`, `wget`, `brew`, `go`, `manual`).
pub fn find_method(id: &str) -> Option<&'static InstallMethod> {
    INSTALL_METHODS.iter().find(|m| m.id == id)
}
