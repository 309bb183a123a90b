//! Built-in audit catalogs.
//!
//! These mirror the standard security-tooling workflow: generic system
//! commands, the Python libraries the suite drives, the recon/web tool
//! binaries, and the provider credential variables. `nmap`, `wafw00f`,
//! and `paramspider` intentionally appear in more than one catalog.

use super::schema::PackageSpec;

/// Default settings file, relative to the project root.
pub const SETTINGS_FILE: &str = ".env";

const SYSTEM_TOOLS: &[&str] = &["git", "curl", "wget", "jq", "nmap", "go", "cargo"];

const SECURITY_TOOLS: &[&str] = &[
    // Network/Port
    "nmap",
    "rustscan",
    "naabu",
    "masscan",
    // Subdomains
    "subfinder",
    "amass",
    "assetfinder",
    "findomain",
    "puredns",
    // Web
    "httpx",
    "nuclei",
    "nikto",
    "whatweb",
    "wafw00f",
    "sqlmap",
    "wpscan",
    "feroxbuster",
    "gobuster",
    "ffuf",
    "dirsearch",
    "gau",
    "waybackurls",
    "katana",
    "paramspider",
];

const API_KEY_VARS: &[&str] = &[
    "MISTRAL_API_KEY",
    "OPENAI_API_KEY",
    "ANTHROPIC_API_KEY",
    "GOOGLE_API_KEY",
];

const PLACEHOLDER_VALUES: &[&str] = &["your-key-here", "your-mistral-api-key"];

/// Default generic system tool catalog.
pub fn system_tools() -> Vec<String> {
    SYSTEM_TOOLS.iter().map(|s| s.to_string()).collect()
}

/// Default Python library catalog.
pub fn python_packages() -> Vec<PackageSpec> {
    vec![
        PackageSpec::bare("requests"),
        PackageSpec::mapped("dnspython", "dns"),
        PackageSpec::bare("urllib3"),
        PackageSpec::bare("anthropic"),
        PackageSpec::bare("openai"),
        PackageSpec::bare("google.generativeai"),
        PackageSpec::bare("mistune"),
        PackageSpec::bare("wafw00f"),
        PackageSpec::bare("paramspider"),
    ]
}

/// Default security tool catalog.
pub fn security_tools() -> Vec<String> {
    SECURITY_TOOLS.iter().map(|s| s.to_string()).collect()
}

/// Default API key variable catalog.
pub fn api_key_vars() -> Vec<String> {
    API_KEY_VARS.iter().map(|s| s.to_string()).collect()
}

/// Default placeholder denylist.
pub fn placeholder_values() -> Vec<String> {
    PLACEHOLDER_VALUES.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogs_are_nonempty() {
        assert!(!system_tools().is_empty());
        assert!(!python_packages().is_empty());
        assert!(!security_tools().is_empty());
        assert!(!api_key_vars().is_empty());
        assert!(!placeholder_values().is_empty());
    }

    #[test]
    fn overlapping_entries_are_allowed_across_catalogs() {
        let system = system_tools();
        let security = security_tools();
        assert!(system.contains(&"nmap".to_string()));
        assert!(security.contains(&"nmap".to_string()));
    }

    #[test]
    fn dnspython_maps_to_dns_module() {
        let packages = python_packages();
        let dnspython = packages
            .iter()
            .find(|p| p.name() == "dnspython")
            .expect("dnspython in default catalog");
        assert_eq!(dnspython.module_name(), "dns");
    }

    #[test]
    fn catalog_order_is_stable() {
        // Probing order is catalog order; the first entries anchor it.
        assert_eq!(system_tools().first().map(String::as_str), Some("git"));
        assert_eq!(security_tools().first().map(String::as_str), Some("nmap"));
        assert_eq!(
            api_key_vars().first().map(String::as_str),
            Some("MISTRAL_API_KEY")
        );
    }
}
