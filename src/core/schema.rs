//! Hard structural checks run once at load time.
//!
//! Anything that would make an accessor misbehave is rejected here. Missing
//! side-table entries are not: those are content gaps, reported by
//! [`crate::core::audit`].

use crate::domain::model::{ContentTables, Table, ALL_COUNTRIES};
use crate::utils::error::{ContentError, Result};
use crate::utils::validation::{
    validate_link_url, validate_non_empty_text, validate_range, Validate,
};
use std::collections::BTreeSet;

fn invalid(table: Table, key: impl Into<String>, reason: impl Into<String>) -> ContentError {
    ContentError::ContentValidationError {
        table: table.name().to_string(),
        key: key.into(),
        reason: reason.into(),
    }
}

impl ContentTables {
    fn validate_countries(&self) -> Result<()> {
        let table = Table::Countries.name();
        if !self.countries.contains_key(ALL_COUNTRIES) {
            return Err(invalid(
                Table::Countries,
                ALL_COUNTRIES,
                "the pan-regional \"all\" row is required",
            ));
        }
        for (name, country) in &self.countries {
            validate_non_empty_text(table, "<country name>", name)?;
            validate_non_empty_text(table, name, &country.currency)?;
        }
        Ok(())
    }

    fn validate_sectors(&self) -> Result<()> {
        let table = Table::Sectors.name();
        for (tag, sector) in self.sectors.iter() {
            let key = tag.as_str();
            validate_non_empty_text(table, key, &sector.label)?;
            validate_range(table, key, sector.metrics.outlook.entrepreneurship, 0, 100)?;

            if sector.occupations.is_empty() {
                return Err(invalid(Table::Sectors, key, "occupation list is empty"));
            }
            if sector.skills.is_empty() {
                return Err(invalid(Table::Sectors, key, "skill list is empty"));
            }

            let mut seen = BTreeSet::new();
            for occupation in &sector.occupations {
                validate_non_empty_text(table, key, &occupation.name)?;
                if !seen.insert(occupation.name.as_str()) {
                    return Err(invalid(
                        Table::Sectors,
                        format!("{}/{}", key, occupation.name),
                        "duplicate occupation",
                    ));
                }
            }

            let mut seen = BTreeSet::new();
            for skill in &sector.skills {
                validate_non_empty_text(table, key, &skill.name)?;
                if !seen.insert(skill.name.as_str()) {
                    return Err(invalid(
                        Table::Sectors,
                        format!("{}/{}", key, skill.name),
                        "duplicate skill",
                    ));
                }
            }
        }
        Ok(())
    }

    fn validate_overrides(&self) -> Result<()> {
        let table = Table::Overrides.name();
        for (country, per_sector) in &self.overrides {
            if !self.countries.contains_key(country) {
                return Err(invalid(Table::Overrides, country, "unknown country"));
            }
            for (tag, ovr) in per_sector {
                if let Some(level) = ovr.outlook.entrepreneurship {
                    validate_range(table, &format!("{}/{}", country, tag), level, 0, 100)?;
                }
            }
        }
        Ok(())
    }

    fn validate_occupation_links(&self) -> Result<()> {
        let table = Table::Occupations.name();
        for (role, links) in &self.occupations.resources {
            for link in links {
                validate_non_empty_text(table, role, &link.title)?;
                validate_link_url(table, role, &link.url)?;
            }
        }
        Ok(())
    }

    fn validate_pathways(&self) -> Result<()> {
        for (tag, pathway) in self.pathways.iter() {
            let rules = &pathway.credential_rules;
            let conditional = rules.conditional.iter().map(|r| (None, r));
            let specific = rules
                .country_specific
                .iter()
                .flat_map(|(country, rs)| rs.iter().map(move |r| (Some(country), r)));

            for (country, rule) in conditional.chain(specific) {
                if rule.keywords.iter().all(|k| k.trim().is_empty()) {
                    let key = match country {
                        Some(c) => format!("{}/{}/{}", tag, c, rule.credential),
                        None => format!("{}/{}", tag, rule.credential),
                    };
                    return Err(invalid(Table::Pathways, key, "rule has no keywords"));
                }
            }

            for country in rules.country_specific.keys() {
                if !self.countries.contains_key(country) {
                    return Err(invalid(
                        Table::Pathways,
                        format!("{}/{}", tag, country),
                        "credential rules name an unknown country",
                    ));
                }
            }
        }
        Ok(())
    }
}

impl Validate for ContentTables {
    fn validate(&self) -> Result<()> {
        self.validate_countries()?;
        self.validate_sectors()?;
        self.validate_overrides()?;
        self.validate_occupation_links()?;
        self.validate_pathways()?;
        Ok(())
    }
}
