//! Company information, branding defaults, and operational limits.

/// Company identity used on letterhead and in document bodies.
pub struct CompanyInfo {
    pub name: &'static str,
    pub short_name: &'static str,
    pub address: &'static str,
}

pub const COMPANY_INFO: CompanyInfo = CompanyInfo {
    name: "Total Health Information Services, LLC.",
    short_name: "Total Health Conferencing",
    address: "20423 State Road 7, F6-496, Boca Raton FL 33498",
};

pub struct SignatoryInfo {
    pub name: &'static str,
    pub title: &'static str,
}

/// Default document signatory.
pub const FOUNDER: SignatoryInfo = SignatoryInfo {
    name: "Sarah Louden",
    title: "Founder and Executive Director, Total Health Conferencing",
};

/// Alternative signatory.
pub const CEO: SignatoryInfo = SignatoryInfo {
    name: "Michael Eisinger",
    title: "Chief Executive Officer, Total Health Conferencing",
};

pub const DEFAULT_AUDIENCE: &str =
    "physicians, nurses, pharmacists, advanced practitioners and patient advocates";

/// When approved, ASCO events are branded "Best of ASCO" rather than
/// "ASCO Direct". Pending approval, so off.
pub const USE_BEST_OF_ASCO_NAMING: bool = false;

/// Returns the event name with the configured ASCO branding. `use_best_of`
/// overrides the global toggle when provided.
pub fn asco_event_name(base_name: &str, use_best_of: Option<bool>) -> String {
    if use_best_of.unwrap_or(USE_BEST_OF_ASCO_NAMING) {
        base_name.replace("ASCO Direct", "Best of ASCO")
    } else {
        base_name.to_string()
    }
}

pub struct ComplianceTemplate {
    pub key: &'static str,
    pub name: &'static str,
    pub text: &'static str,
}

/// Sponsor-side compliance language available for inclusion in a letter.
pub const COMPLIANCE_TEMPLATES: &[ComplianceTemplate] = &[
    ComplianceTemplate {
        key: "novartis",
        name: "Novartis Standard",
        text: "Novartis requires that you acknowledge that the support described in this letter is being provided at fair market value for the services/benefits described. Novartis requires that no HCPs be remunerated by you in connection with this CME activity, and that you certify that the meeting will comply with the Sunshine Act reporting requirements. In addition, Novartis Pharmaceuticals Corporation must approve the meeting agenda at least 60 days in advance of the meeting and the grant does not represent a charitable contribution.",
    },
    ComplianceTemplate {
        key: "generic",
        name: "Generic Pharma Compliance",
        text: "Company Name requires confirmation that all financial support is provided at fair market value and that this activity complies with all applicable Sunshine Act reporting requirements. The support does not constitute a charitable contribution.",
    },
    ComplianceTemplate {
        key: "educational",
        name: "Educational Focus",
        text: "This educational activity is developed in accordance with ACCME Standards for Integrity and Independence in Accredited Continuing Education. The content is developed free from commercial influence and bias, and will present evidence-based clinical information.",
    },
];

pub fn compliance_template(key: &str) -> Option<&'static ComplianceTemplate> {
    COMPLIANCE_TEMPLATES.iter().find(|t| t.key == key)
}

/// Session and password expiry limits.
#[derive(Debug, Clone, PartialEq)]
pub struct SecurityConfig {
    pub password_expiry_hours: i64,
    pub session_timeout_minutes: i64,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        SecurityConfig {
            password_expiry_hours: 48,
            session_timeout_minutes: 120,
        }
    }
}

/// Limits for the letter-generation audit trail.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditConfig {
    pub max_file_size_mb: u64,
    pub max_entries: usize,
    pub max_input_length: usize,
}

impl Default for AuditConfig {
    fn default() -> Self {
        AuditConfig {
            max_file_size_mb: 10,
            max_entries: 500,
            max_input_length: 500,
        }
    }
}

/// Characters stripped from free-text input before it reaches documents
/// or the audit log.
pub const DANGEROUS_CHARS: &[char] = &[
    '<', '>', '"', '\'', '&', ';', '(', ')', '{', '}', '[', ']',
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asco_naming_defaults_to_direct() {
        assert_eq!(
            asco_event_name("2026 ASCO Direct Denver", None),
            "2026 ASCO Direct Denver"
        );
    }

    #[test]
    fn asco_naming_override_rebrands() {
        assert_eq!(
            asco_event_name("2026 ASCO Direct Denver", Some(true)),
            "2026 Best of ASCO Denver"
        );
    }

    #[test]
    fn compliance_template_lookup() {
        assert!(compliance_template("novartis").is_some());
        assert!(compliance_template("unknown").is_none());
    }
}
