//! Reports join keys that are present in one table but missing from another.
//!
//! Gaps are expected: the store answers them with defaults. The audit makes
//! them visible to content authors without ever failing a load.

use crate::core::store::ContentStore;
use crate::domain::model::SectorTag;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentGap {
    /// Side-table lacking the entry, e.g. `occupations.tools`.
    pub table: String,
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<SectorTag>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ContentAudit {
    pub gaps: Vec<ContentGap>,
}

impl ContentAudit {
    pub fn is_complete(&self) -> bool {
        self.gaps.is_empty()
    }

    pub fn gaps_in<'a>(&'a self, table: &'a str) -> impl Iterator<Item = &'a ContentGap> + 'a {
        self.gaps.iter().filter(move |g| g.table == table)
    }

    pub fn has_gap(&self, table: &str, key: &str) -> bool {
        self.gaps.iter().any(|g| g.table == table && g.key == key)
    }

    fn record(&mut self, table: &str, key: &str, sector: Option<SectorTag>) {
        self.gaps.push(ContentGap {
            table: table.to_string(),
            key: key.to_string(),
            sector,
        });
    }
}

impl ContentStore {
    pub fn audit(&self) -> ContentAudit {
        let mut audit = ContentAudit::default();
        let tables = self.tables();
        let occ = &tables.occupations;

        for (tag, sector) in tables.sectors.iter() {
            for role in sector.occupations.iter().map(|o| o.name.as_str()) {
                let present = [
                    ("occupations.definitions", occ.definitions.contains_key(role)),
                    ("occupations.employers", occ.employers.contains_key(role)),
                    ("occupations.skills", occ.skills.contains_key(role)),
                    ("occupations.day_breakdown", occ.day_breakdown.contains_key(role)),
                    ("occupations.tools", occ.tools.contains_key(role)),
                    ("occupations.resources", occ.resources.contains_key(role)),
                    ("occupations.survey_titles", occ.survey_titles.contains_key(role)),
                    ("occupations.qualifications", occ.qualifications.contains_key(role)),
                    ("occupations.tags", occ.tags.contains_key(role)),
                ];
                for (table, found) in present {
                    if !found {
                        audit.record(table, role, Some(tag));
                    }
                }
            }

            let side = tables.skills.get(tag);
            for skill in sector.skills.iter().map(|s| s.name.as_str()) {
                let present = [
                    ("skills.levels", side.levels.contains_key(skill)),
                    ("skills.job_titles", side.job_titles.contains_key(skill)),
                    ("skills.hotspots", side.hotspots.contains_key(skill)),
                ];
                for (table, found) in present {
                    if !found {
                        audit.record(table, skill, Some(tag));
                    }
                }
            }

            for venture in tables.ventures.playbooks.get(tag) {
                if !tables.ventures.regulations.contains_key(&venture.title) {
                    audit.record("ventures.regulations", &venture.title, Some(tag));
                }
                if !tables.ventures.challenges.contains_key(&venture.title) {
                    audit.record("ventures.challenges", &venture.title, Some(tag));
                }
            }

            let known: Vec<&str> = sector.occupations.iter().map(|o| o.name.as_str()).collect();
            for option in &tables.pathways.get(tag).quiz_options {
                for role in &option.roles {
                    if !known.contains(&role.as_str()) {
                        audit.record("pathways.quiz_options", role, Some(tag));
                    }
                }
            }
        }

        // Side-table keys that nothing lists.
        let listed = self.occupation_names();
        let role_keys = occ
            .definitions
            .keys()
            .chain(occ.employers.keys())
            .chain(occ.skills.keys())
            .chain(occ.day_breakdown.keys())
            .chain(occ.tools.keys())
            .chain(occ.resources.keys())
            .chain(occ.survey_titles.keys())
            .chain(occ.qualifications.keys())
            .chain(occ.tags.keys());
        for role in role_keys {
            if !listed.contains(&role.as_str()) && !audit.has_gap("sectors.occupations", role) {
                audit.record("sectors.occupations", role, None);
            }
        }

        for (tag, sector) in tables.sectors.iter() {
            let side = tables.skills.get(tag);
            let skill_keys = side
                .levels
                .keys()
                .chain(side.job_titles.keys())
                .chain(side.hotspots.keys());
            for skill in skill_keys {
                let known = sector.skills.iter().any(|s| &s.name == skill);
                if !known && !audit.has_gap("sectors.skills", skill) {
                    audit.record("sectors.skills", skill, Some(tag));
                }
            }
        }

        let titles: Vec<&str> = tables
            .ventures
            .playbooks
            .iter()
            .flat_map(|(_, ventures)| ventures.iter().map(|v| v.title.as_str()))
            .collect();
        let venture_keys = tables
            .ventures
            .regulations
            .keys()
            .chain(tables.ventures.challenges.keys());
        for title in venture_keys {
            if !titles.contains(&title.as_str()) && !audit.has_gap("ventures.playbooks", title) {
                audit.record("ventures.playbooks", title, None);
            }
        }

        for gap in &audit.gaps {
            tracing::debug!("Content gap: {} has no entry for '{}'", gap.table, gap.key);
        }
        audit
    }
}
