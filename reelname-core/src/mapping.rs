use serde::{Deserialize, Serialize};

/// A single old-name to new-name pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameEntry {
    /// File name as it currently appears in the directory
    pub from: String,
    /// File name the file should end up with
    pub to: String,
}

impl RenameEntry {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// True when the entry maps a name onto itself.
    pub fn is_identity(&self) -> bool {
        self.from == self.to
    }

    /// True when the names differ only in letter case.
    pub fn is_case_only(&self) -> bool {
        !self.is_identity() && self.from.to_lowercase() == self.to.to_lowercase()
    }
}

/// Ordered sequence of rename entries, applied front to back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameMapping {
    entries: Vec<RenameEntry>,
}

impl RenameMapping {
    pub fn new(entries: Vec<RenameEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[RenameEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RenameEntry> {
        self.entries.iter()
    }
}

impl<F: Into<String>, T: Into<String>> FromIterator<(F, T)> for RenameMapping {
    fn from_iter<I: IntoIterator<Item = (F, T)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(from, to)| RenameEntry::new(from, to))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RenameMapping {
    type Item = &'a RenameEntry;
    type IntoIter = std::slice::Iter<'a, RenameEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Current recording names mapped to the titles from the course outline.
const COURSE_TABLE: &[(&str, &str)] = &[
    (
        "DHCP Configuration.mp4",
        "Expert Guide to Configuring DHCP Server in pfSense.mp4",
    ),
    (
        "DHCP Static Mapping.mp4",
        "Implementing DHCP Static Mapping in pfSense.mp4",
    ),
    (
        "dns advance.mp4",
        "Advanced DNS Configuration in pfSense.mp4",
    ),
    (
        "DNS Settings in pfSense.mp4",
        "Managing DNS Servers in pfSense.mp4",
    ),
    ("end.mp4", "Final Words and Conclusion.mp4"),
    (
        "Essential Tools and Resources for the Course.mp4",
        "Essential Tools and Resources for the Course.mp4",
    ),
    (
        "Exploring the Features and Capabilities of pfSense.mp4",
        "Exploring the Features and Capabilities of pfSense.mp4",
    ),
    (
        "Firewall Rule - Port Forwarding.mp4",
        "Mastering NAT and Port Forwarding in pfSense.mp4",
    ),
    (
        "Firewall Section.mp4",
        "Introduction to pfSense Firewall Concepts.mp4",
    ),
    (
        "FW Alias.mp4",
        "Simplifying Firewall Rules with Aliases in pfSense.mp4",
    ),
    (
        "FW Intro with diagram.mp4",
        "Understanding Firewall Basics with Diagrams.mp4",
    ),
    (
        "FW Rule using Aliases.mp4",
        "Streamlining Rule Creation with Firewall Aliases.mp4",
    ),
    ("FW Rule.mp4", "Configuring Firewall Rules in pfSense.mp4"),
    (
        "FW Schedule Rule.mp4",
        "Implementing Scheduled Firewall Rules in pfSense.mp4",
    ),
    (
        "FW Schedule.mp4",
        "Managing Firewall Rules with Schedules in pfSense.mp4",
    ),
    (
        "intiial config command line.mp4",
        "pfSense Command Line Initial Configuration.mp4",
    ),
    (
        "Introduction to Proxmox.mp4",
        "Introduction to Proxmox Virtualization.mp4",
    ),
    ("ipclass.mp4", "Understanding IP Address Classes.mp4"),
    (
        "Maximizing Your Learning Experience.mp4",
        "Maximizing Your Learning Experience in pfSense.mp4",
    ),
    (
        "OpenVPN Configuration in pfSense.mov",
        "Setting Up OpenVPN in pfSense.mov",
    ),
    (
        "packages in pfsense.mov",
        "Installing Packages in pfSense.mov",
    ),
    (
        "pfsense - firewall rule on schedule.mov",
        "Creating Firewall Rules on Schedule in pfSense.mov",
    ),
    ("pfsense alias.mov", "Managing Aliases in pfSense.mov"),
    (
        "pfsense backup restore.mov",
        "Backup and Restore in pfSense.mov",
    ),
    (
        "pfsense firewall schedule.mov",
        "Creating Firewall Schedules in pfSense.mov",
    ),
    (
        "pfsense intro.mp4",
        "Introduction to pfSense on VirtualBox.mp4",
    ),
    (
        "pfSense Introduction __ NGFW Review.mp4",
        "Introduction to pfSense NGFW Review.mp4",
    ),
    (
        "pfsense on Proxmox.mp4",
        "Installing pfSense on Proxmox.mp4",
    ),
    (
        "pfsense open vpn server configuration.mp4",
        "Setting Up OpenVPN Server in pfSense.mp4",
    ),
    (
        "pfsense pia-003.mp4",
        "Extending PIA VPN to Entire Network in pfSense.mp4",
    ),
    (
        "pfsense section backup restore configuration.mov",
        "Backup and Restore Configuration in pfSense.mov",
    ),
    (
        "pfsense web config initial on hardware appliance.mp4",
        "Initial Web Config on pfSense Hardware Appliance.mp4",
    ),
    (
        "pfSnse HW Install.mp4",
        "Installing pfSense on Dedicated Hardware.mp4",
    ),
    (
        "pia intro.mp4",
        "Introduction to Private Internet Access (PIA) VPN.mp4",
    ),
    (
        "Portfoarwding in pfsense and using nginx.mp4",
        "Configuring Port Forwarding and Nginx in pfSense.mp4",
    ),
    ("Thank you end.mp4", "Thank You and Final Thoughts.mp4"),
    (
        "Understanding the Importance of Network Security.mp4",
        "Why Network Security Matters.mp4",
    ),
    (
        "VLAN DIAGRAM.mp4",
        "VLAN Configuration Diagrams Explained.mp4",
    ),
    (
        "VLAN Section Introduction.mp4",
        "Introduction to VLANs in pfSense.mp4",
    ),
    ("vlan setup final.mp4", "Final VLAN Setup in pfSense.mp4"),
    ("vpn pia.mp4", "Configuring PIA VPN in pfSense.mp4"),
    (
        "VPN Sectgion.mp4",
        "Introduction to VPN Section in pfSense.mp4",
    ),
    (
        "Welcome to Pfsense Master Class.mp4",
        "Welcome to pfSense Master Class.mp4",
    ),
    ("WHAT IS DHCP.mp4", "Understanding DHCP in Networking.mp4"),
];

/// The built-in mapping for the pfSense master class recordings.
pub fn course_mapping() -> RenameMapping {
    COURSE_TABLE.iter().copied().collect()
}
