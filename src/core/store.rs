//! The immutable content store and its lookup operations.
//!
//! Every accessor is pure and total: a key missing from a side-table yields
//! the documented default from [`crate::core::defaults`], never an error. The
//! only hard failures are values outside a closed enumeration, surfaced by the
//! `*_by_name` / `require_*` variants used at input boundaries.

use crate::core::credentials::{self, RoleMatcher};
use crate::core::defaults::{
    default_day_breakdown, default_qualification, default_skill_levels, DEFAULT_CHALLENGES,
    DEFAULT_DEFINITION, DEFAULT_DESCRIPTION, DEFAULT_HOTSPOT, DEFAULT_REGULATIONS,
    DEFAULT_ROLE_SNAPSHOT,
};
use crate::core::merge::apply_override;
use crate::domain::model::{
    ContentTables, Country, EffectiveSectorMetrics, OccupationDetail, OccupationSummary,
    PathwayConfig, RoleQuery, Sector, SectorOverride, SectorTag, SkillDetail, SkillSummary,
    VenturePlaybook,
};
use crate::utils::error::{ContentError, Result};
use crate::utils::validation::Validate;

#[derive(Debug, Clone, PartialEq)]
pub struct ContentStore {
    tables: ContentTables,
}

impl ContentStore {
    /// Validates `tables` and wraps them. The store is never mutated afterwards.
    pub fn new(tables: ContentTables) -> Result<Self> {
        tables.validate()?;
        Ok(Self { tables })
    }

    /// The store built from the compiled-in content.
    pub fn builtin() -> Result<Self> {
        Self::new(crate::core::loader::builtin_tables()?)
    }

    pub fn tables(&self) -> &ContentTables {
        &self.tables
    }

    pub fn country(&self, name: &str) -> Option<&Country> {
        self.tables.countries.get(name)
    }

    pub fn require_country(&self, name: &str) -> Result<&Country> {
        self.country(name).ok_or_else(|| ContentError::InvalidCountry {
            value: name.to_string(),
        })
    }

    pub fn countries(&self) -> impl Iterator<Item = (&str, &Country)> {
        self.tables
            .countries
            .iter()
            .map(|(name, country)| (name.as_str(), country))
    }

    pub fn sector(&self, tag: SectorTag) -> &Sector {
        self.tables.sectors.get(tag)
    }

    pub fn sector_by_name(&self, tag: &str) -> Result<&Sector> {
        Ok(self.sector(tag.parse()?))
    }

    fn override_for(&self, country: &str, tag: SectorTag) -> Option<&SectorOverride> {
        self.tables
            .overrides
            .get(country)
            .and_then(|per_sector| per_sector.get(&tag))
    }

    pub fn resolve_sector_for_country(&self, country: &str, tag: SectorTag) -> EffectiveSectorMetrics {
        let base = &self.sector(tag).metrics;
        let ovr = self.override_for(country, tag);
        if ovr.is_none() {
            tracing::debug!("No {} override for {}, using base metrics", tag, country);
        }

        EffectiveSectorMetrics {
            country: country.to_string(),
            sector: tag,
            overridden: ovr.is_some_and(|o| !o.is_empty()),
            metrics: apply_override(base, ovr),
        }
    }

    /// The first sector listing `role`, with its summary.
    fn find_occupation(&self, role: &str) -> Option<(SectorTag, &OccupationSummary)> {
        self.tables.sectors.iter().find_map(|(tag, sector)| {
            sector
                .occupations
                .iter()
                .find(|o| o.name == role)
                .map(|o| (tag, o))
        })
    }

    pub fn occupation_names(&self) -> Vec<&str> {
        self.tables
            .sectors
            .iter()
            .flat_map(|(_, sector)| sector.occupations.iter().map(|o| o.name.as_str()))
            .collect()
    }

    pub fn occupation_detail(&self, role: &str) -> OccupationDetail {
        let side = &self.tables.occupations;
        let summary = self.find_occupation(role);
        if summary.is_none() {
            tracing::debug!("Occupation '{}' is not listed in any sector", role);
        }

        OccupationDetail {
            name: role.to_string(),
            sector: summary.map(|(tag, _)| tag),
            description: summary
                .map(|(_, o)| o.description.clone())
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            hot_demand: summary.is_some_and(|(_, o)| o.hot_demand),
            definition: side
                .definitions
                .get(role)
                .cloned()
                .unwrap_or_else(|| DEFAULT_DEFINITION.to_string()),
            employers: side.employers.get(role).cloned().unwrap_or_default(),
            skills: side.skills.get(role).cloned().unwrap_or_default(),
            day_breakdown: side
                .day_breakdown
                .get(role)
                .cloned()
                .unwrap_or_else(default_day_breakdown),
            tools: side.tools.get(role).cloned().unwrap_or_default(),
            resources: side.resources.get(role).cloned().unwrap_or_default(),
            survey_title: side.survey_titles.get(role).cloned(),
            qualification: side
                .qualifications
                .get(role)
                .cloned()
                .unwrap_or_else(default_qualification),
            tags: side.tags.get(role).cloned().unwrap_or_default(),
        }
    }

    pub fn hot_occupations(&self, tag: SectorTag) -> Vec<&OccupationSummary> {
        self.sector(tag)
            .occupations
            .iter()
            .filter(|o| o.hot_demand)
            .collect()
    }

    pub fn skill_detail(&self, tag: SectorTag, skill: &str) -> SkillDetail {
        let summary = self.sector(tag).skills.iter().find(|s| s.name == skill);
        let side = self.tables.skills.get(tag);

        SkillDetail {
            name: skill.to_string(),
            sector: tag,
            description: summary
                .map(|s| s.description.clone())
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            narrative: summary.map(|s| s.narrative.clone()).unwrap_or_default(),
            hot: summary.is_some_and(|s| s.hot),
            levels: side
                .levels
                .get(skill)
                .cloned()
                .unwrap_or_else(default_skill_levels),
            job_titles: side.job_titles.get(skill).cloned().unwrap_or_default(),
            hotspot: side
                .hotspots
                .get(skill)
                .cloned()
                .unwrap_or_else(|| DEFAULT_HOTSPOT.to_string()),
        }
    }

    pub fn hot_skills(&self, tag: SectorTag) -> Vec<&SkillSummary> {
        self.sector(tag).skills.iter().filter(|s| s.hot).collect()
    }

    pub fn venture_playbook(&self, tag: SectorTag) -> VenturePlaybook {
        VenturePlaybook {
            sector: tag,
            ventures: self.tables.ventures.playbooks.get(tag).clone(),
        }
    }

    pub fn venture_regulations(&self, title: &str) -> String {
        self.tables
            .ventures
            .regulations
            .get(title)
            .cloned()
            .unwrap_or_else(|| DEFAULT_REGULATIONS.to_string())
    }

    pub fn venture_challenges(&self, title: &str) -> String {
        self.tables
            .ventures
            .challenges
            .get(title)
            .cloned()
            .unwrap_or_else(|| DEFAULT_CHALLENGES.to_string())
    }

    pub fn pathway(&self, tag: SectorTag) -> &PathwayConfig {
        self.tables.pathways.get(tag)
    }

    pub fn role_snapshot(&self, tag: SectorTag, role: &str) -> String {
        self.pathway(tag)
            .role_snapshots
            .get(role)
            .cloned()
            .unwrap_or_else(|| DEFAULT_ROLE_SNAPSHOT.to_string())
    }

    pub fn tools_for_interest(&self, tag: SectorTag, interest: &str) -> Vec<String> {
        self.pathway(tag)
            .tool_interests
            .get(interest)
            .cloned()
            .unwrap_or_default()
    }

    fn role_matcher(&self, role: &RoleQuery) -> RoleMatcher {
        match role {
            RoleQuery::Tags(tags) => RoleMatcher::from_tags(tags),
            RoleQuery::Name(name) => match self.tables.occupations.tags.get(name) {
                Some(tags) if !tags.is_empty() => RoleMatcher::from_tags(tags),
                _ => {
                    tracing::debug!("No tags authored for '{}', matching on the name", name);
                    RoleMatcher::from_name(name)
                }
            },
        }
    }

    pub fn evaluate_credential_rules(
        &self,
        country: &str,
        tag: SectorTag,
        role: impl Into<RoleQuery>,
    ) -> Vec<String> {
        let matcher = self.role_matcher(&role.into());
        credentials::evaluate(&self.pathway(tag).credential_rules, country, &matcher)
    }
}
