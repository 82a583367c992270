use crate::utils::error::ContentError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// Country key of the pan-regional aggregate row.
pub const ALL_COUNTRIES: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectorTag {
    #[serde(alias = "agri")]
    Agriculture,
    Energy,
    Digital,
}

impl SectorTag {
    pub const ALL: [SectorTag; 3] = [SectorTag::Agriculture, SectorTag::Energy, SectorTag::Digital];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectorTag::Agriculture => "agriculture",
            SectorTag::Energy => "energy",
            SectorTag::Digital => "digital",
        }
    }
}

impl fmt::Display for SectorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectorTag {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "agriculture" | "agri" => Ok(SectorTag::Agriculture),
            "energy" => Ok(SectorTag::Energy),
            "digital" => Ok(SectorTag::Digital),
            _ => Err(ContentError::InvalidSector {
                value: s.to_string(),
            }),
        }
    }
}

/// One value per sector. Tables typed this way cannot omit a sector or add a fourth.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PerSector<T> {
    pub agriculture: T,
    pub energy: T,
    pub digital: T,
}

impl<T> PerSector<T> {
    pub fn get(&self, tag: SectorTag) -> &T {
        match tag {
            SectorTag::Agriculture => &self.agriculture,
            SectorTag::Energy => &self.energy,
            SectorTag::Digital => &self.digital,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (SectorTag, &T)> {
        SectorTag::ALL.into_iter().map(move |tag| (tag, self.get(tag)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub currency: String,
    #[serde(default)]
    pub training_providers: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso3: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthMetrics {
    pub job_trend: String,
    pub investment: String,
    pub demand: String,
    pub context: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorOutlook {
    pub hiring: String,
    pub hotspots: String,
    /// 0-100.
    pub entrepreneurship: u8,
    #[serde(default)]
    pub mobility: Vec<String>,
}

/// The fields of a sector that a country override may replace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorMetrics {
    pub growth: GrowthMetrics,
    pub outlook: SectorOutlook,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupationSummary {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub hot_demand: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillSummary {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub narrative: String,
    #[serde(default)]
    pub hot: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    pub label: String,
    #[serde(flatten)]
    pub metrics: SectorMetrics,
    pub occupations: Vec<OccupationSummary>,
    pub skills: Vec<SkillSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GrowthOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_trend: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutlookOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hiring: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotspots: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entrepreneurship: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobility: Option<Vec<String>>,
}

/// Partial per-country replacement for a sector's metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectorOverride {
    #[serde(default)]
    pub growth: GrowthOverride,
    #[serde(default)]
    pub outlook: OutlookOverride,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectiveSectorMetrics {
    pub country: String,
    pub sector: SectorTag,
    /// True when a country override contributed at least one field.
    pub overridden: bool,
    #[serde(flatten)]
    pub metrics: SectorMetrics,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleSkills {
    #[serde(default)]
    pub technical: Vec<String>,
    #[serde(default)]
    pub employability: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayBreakdown {
    pub entry: String,
    pub mid: String,
    pub senior: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceLink {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Qualification {
    pub education: String,
    pub certification: String,
    pub experience: String,
}

/// Side-tables keyed by occupation name. Any of them may lack a given role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OccupationTables {
    #[serde(default)]
    pub definitions: BTreeMap<String, String>,
    #[serde(default)]
    pub employers: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub skills: BTreeMap<String, RoleSkills>,
    #[serde(default)]
    pub day_breakdown: BTreeMap<String, DayBreakdown>,
    #[serde(default)]
    pub tools: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub resources: BTreeMap<String, Vec<ResourceLink>>,
    /// Canonical occupation-survey title used for wage and labour-market joins.
    #[serde(default)]
    pub survey_titles: BTreeMap<String, String>,
    #[serde(default)]
    pub qualifications: BTreeMap<String, Qualification>,
    /// Capability tags matched by credential rules.
    #[serde(default)]
    pub tags: BTreeMap<String, BTreeSet<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupationDetail {
    pub name: String,
    pub sector: Option<SectorTag>,
    pub description: String,
    pub hot_demand: bool,
    pub definition: String,
    pub employers: Vec<String>,
    pub skills: RoleSkills,
    pub day_breakdown: DayBreakdown,
    pub tools: Vec<String>,
    pub resources: Vec<ResourceLink>,
    pub survey_title: Option<String>,
    pub qualification: Qualification,
    pub tags: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProficiencyLadder {
    pub beginner: String,
    pub intermediate: String,
    pub advanced: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkillTables {
    #[serde(default)]
    pub levels: BTreeMap<String, ProficiencyLadder>,
    #[serde(default)]
    pub job_titles: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub hotspots: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillDetail {
    pub name: String,
    pub sector: SectorTag,
    pub description: String,
    pub narrative: String,
    pub hot: bool,
    pub levels: ProficiencyLadder,
    pub job_titles: Vec<String>,
    pub hotspot: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venture {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub competencies: Vec<String>,
    pub capital: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VentureTables {
    pub playbooks: PerSector<Vec<Venture>>,
    #[serde(default)]
    pub regulations: BTreeMap<String, String>,
    #[serde(default)]
    pub challenges: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenturePlaybook {
    pub sector: SectorTag,
    pub ventures: Vec<Venture>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizOption {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialRule {
    pub keywords: BTreeSet<String>,
    pub credential: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CredentialRules {
    #[serde(default)]
    pub common: Vec<String>,
    #[serde(default)]
    pub conditional: Vec<CredentialRule>,
    #[serde(default)]
    pub country_specific: BTreeMap<String, Vec<CredentialRule>>,
    #[serde(default)]
    pub default_country: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathwayConfig {
    #[serde(default)]
    pub quiz_options: Vec<QuizOption>,
    #[serde(default)]
    pub foundations: Vec<String>,
    #[serde(default)]
    pub role_snapshots: BTreeMap<String, String>,
    #[serde(default)]
    pub credential_rules: CredentialRules,
    #[serde(default)]
    pub tool_interests: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub roadmap_ids: Vec<String>,
}

/// How a caller identifies the role whose credentials are wanted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleQuery {
    /// A role name; resolved to the occupation's authored tags when it has any.
    Name(String),
    Tags(BTreeSet<String>),
}

impl From<&str> for RoleQuery {
    fn from(name: &str) -> Self {
        RoleQuery::Name(name.to_string())
    }
}

/// Country → sector → partial override.
pub type OverrideTable = BTreeMap<String, BTreeMap<SectorTag, SectorOverride>>;

/// The named JSON documents making up the content repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Table {
    Countries,
    Sectors,
    Overrides,
    Occupations,
    Skills,
    Ventures,
    Pathways,
}

impl Table {
    pub const ALL: [Table; 7] = [
        Table::Countries,
        Table::Sectors,
        Table::Overrides,
        Table::Occupations,
        Table::Skills,
        Table::Ventures,
        Table::Pathways,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Table::Countries => "countries",
            Table::Sectors => "sectors",
            Table::Overrides => "overrides",
            Table::Occupations => "occupations",
            Table::Skills => "skills",
            Table::Ventures => "ventures",
            Table::Pathways => "pathways",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.json", self.name())
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every table, in memory. Serializes to one combined document keyed by table name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentTables {
    pub countries: BTreeMap<String, Country>,
    pub sectors: PerSector<Sector>,
    #[serde(default)]
    pub overrides: OverrideTable,
    #[serde(default)]
    pub occupations: OccupationTables,
    pub skills: PerSector<SkillTables>,
    pub ventures: VentureTables,
    pub pathways: PerSector<PathwayConfig>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sector_tag_parsing() {
        assert_eq!("agri".parse::<SectorTag>().unwrap(), SectorTag::Agriculture);
        assert_eq!("Agriculture".parse::<SectorTag>().unwrap(), SectorTag::Agriculture);
        assert_eq!(" ENERGY ".parse::<SectorTag>().unwrap(), SectorTag::Energy);
        assert_eq!("digital".parse::<SectorTag>().unwrap(), SectorTag::Digital);

        let err = "mining".parse::<SectorTag>().unwrap_err();
        assert!(matches!(err, ContentError::InvalidSector { value } if value == "mining"));
    }

    #[test]
    fn test_sector_tag_serde_accepts_alias() {
        let tag: SectorTag = serde_json::from_str("\"agri\"").unwrap();
        assert_eq!(tag, SectorTag::Agriculture);
        assert_eq!(serde_json::to_string(&tag).unwrap(), "\"agriculture\"");
    }

    #[test]
    fn test_per_sector_rejects_fourth_sector() {
        let json = r#"{"agriculture": 1, "energy": 2, "digital": 3, "mining": 4}"#;
        assert!(serde_json::from_str::<PerSector<u32>>(json).is_err());

        let json = r#"{"agriculture": 1, "energy": 2}"#;
        assert!(serde_json::from_str::<PerSector<u32>>(json).is_err());
    }

    #[test]
    fn test_per_sector_iter_is_in_enum_order() {
        let table = PerSector {
            agriculture: "a",
            energy: "e",
            digital: "d",
        };
        let collected: Vec<_> = table.iter().map(|(tag, v)| (tag, *v)).collect();
        assert_eq!(
            collected,
            vec![
                (SectorTag::Agriculture, "a"),
                (SectorTag::Energy, "e"),
                (SectorTag::Digital, "d")
            ]
        );
    }

    #[test]
    fn test_override_rejects_unknown_fields() {
        let json = r#"{"growth": {"job_trend": "+1%", "salary": "x"}}"#;
        assert!(serde_json::from_str::<SectorOverride>(json).is_err());
    }
}
