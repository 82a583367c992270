//! Credential-rule evaluation.
//!
//! Order is fixed: common entries, then every matching conditional rule in
//! table order, then every matching country-specific rule in table order. The
//! sector's `default_country` list is appended only when no country-specific
//! rule matched. Matching entries are concatenated, never short-circuited.

use crate::domain::model::{CredentialRule, CredentialRules};
use std::collections::BTreeSet;

/// What a rule's keywords are tested against.
#[derive(Debug, Clone)]
pub enum RoleMatcher {
    /// Authored capability tags; a rule matches when the sets intersect.
    Tags(BTreeSet<String>),
    /// Lower-cased free-text role name; a rule matches when any keyword is a substring.
    Name(String),
}

impl RoleMatcher {
    pub fn from_tags<'a, I: IntoIterator<Item = &'a String>>(tags: I) -> Self {
        RoleMatcher::Tags(
            tags.into_iter()
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        )
    }

    pub fn from_name(name: &str) -> Self {
        RoleMatcher::Name(name.to_lowercase())
    }

    pub fn matches(&self, rule: &CredentialRule) -> bool {
        match self {
            RoleMatcher::Tags(tags) => rule
                .keywords
                .iter()
                .any(|kw| tags.contains(&kw.to_lowercase())),
            RoleMatcher::Name(name) => rule
                .keywords
                .iter()
                .any(|kw| !kw.is_empty() && name.contains(&kw.to_lowercase())),
        }
    }
}

pub fn evaluate(rules: &CredentialRules, country: &str, role: &RoleMatcher) -> Vec<String> {
    let mut out: Vec<String> = rules.common.clone();

    out.extend(
        rules
            .conditional
            .iter()
            .filter(|rule| role.matches(rule))
            .map(|rule| rule.credential.clone()),
    );

    let country_matches: Vec<String> = rules
        .country_specific
        .get(country)
        .map(|country_rules| {
            country_rules
                .iter()
                .filter(|rule| role.matches(rule))
                .map(|rule| rule.credential.clone())
                .collect()
        })
        .unwrap_or_default();

    if country_matches.is_empty() {
        out.extend(rules.default_country.iter().cloned());
    } else {
        out.extend(country_matches);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn rule(keywords: &[&str], credential: &str) -> CredentialRule {
        CredentialRule {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            credential: credential.to_string(),
        }
    }

    fn energy_rules() -> CredentialRules {
        let mut country_specific = BTreeMap::new();
        country_specific.insert(
            "Kenya".to_string(),
            vec![
                rule(&["solar"], "EPRA Solar PV License"),
                rule(&["electrical"], "EPRA Electrical Worker License"),
            ],
        );
        CredentialRules {
            common: vec!["OSH Certificate".to_string()],
            conditional: vec![
                rule(&["solar"], "Solar PV Certificate"),
                rule(&["electrical", "wiring"], "Trade Test"),
            ],
            country_specific,
            default_country: vec!["National Regulator License".to_string()],
        }
    }

    fn tags(values: &[&str]) -> RoleMatcher {
        let owned: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        RoleMatcher::from_tags(&owned)
    }

    #[test]
    fn test_order_is_common_conditional_country() {
        let result = evaluate(&energy_rules(), "Kenya", &tags(&["solar", "electrical"]));
        assert_eq!(
            result,
            vec![
                "OSH Certificate",
                "Solar PV Certificate",
                "Trade Test",
                "EPRA Solar PV License",
                "EPRA Electrical Worker License",
            ]
        );
    }

    #[test]
    fn test_default_only_when_no_country_rule_matched() {
        let kenya_unmatched = evaluate(&energy_rules(), "Kenya", &tags(&["biogas"]));
        assert_eq!(kenya_unmatched, vec!["OSH Certificate", "National Regulator License"]);

        let no_country_rules = evaluate(&energy_rules(), "Somalia", &tags(&["solar"]));
        assert_eq!(
            no_country_rules,
            vec!["OSH Certificate", "Solar PV Certificate", "National Regulator License"]
        );
    }

    #[test]
    fn test_tags_are_trimmed_and_lowercased() {
        let result = evaluate(&energy_rules(), "Kenya", &tags(&["Solar", " electrical ", " "]));
        assert_eq!(
            result,
            vec![
                "OSH Certificate",
                "Solar PV Certificate",
                "Trade Test",
                "EPRA Solar PV License",
                "EPRA Electrical Worker License",
            ]
        );
    }

    #[test]
    fn test_name_matching_is_case_insensitive_substring() {
        let matcher = RoleMatcher::from_name("Rooftop SOLAR Fitter");
        let result = evaluate(&energy_rules(), "Kenya", &matcher);
        assert!(result.contains(&"Solar PV Certificate".to_string()));
        assert!(result.contains(&"EPRA Solar PV License".to_string()));
        assert!(!result.contains(&"National Regulator License".to_string()));
    }

    #[test]
    fn test_tag_matching_does_not_use_substrings() {
        // "solarium" shares a prefix with "solar" but is a different tag.
        let result = evaluate(&energy_rules(), "Kenya", &tags(&["solarium"]));
        assert_eq!(result, vec!["OSH Certificate", "National Regulator License"]);
    }
}
