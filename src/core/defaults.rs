//! Values substituted when a side-table has no entry for the requested key.

use crate::domain::model::{DayBreakdown, ProficiencyLadder, Qualification};

pub const DEFAULT_DESCRIPTION: &str = "Description coming soon.";

pub const DEFAULT_DEFINITION: &str =
    "A standard definition for this role has not been published yet.";

/// Entry, mid and senior narratives used when a role has no typical-day breakdown.
pub const DEFAULT_PRACTICE_TASKS: [&str; 3] = [
    "Shadow experienced staff, complete supervised practical tasks and build a log of work done.",
    "Take ownership of routine tasks, solve common problems independently and support newer colleagues.",
    "Plan and review the team's work, handle complex cases and mentor others.",
];

pub const NOT_SPECIFIED: &str = "Not specified";

pub const DEFAULT_SKILL_LEVELS: [&str; 3] = [
    "Learns core concepts through guided exercises.",
    "Applies the skill independently on real work.",
    "Leads others and adapts the skill to new contexts.",
];

pub const DEFAULT_HOTSPOT: &str =
    "Opportunities are spread across the region; check national job boards and training providers.";

pub const DEFAULT_REGULATIONS: &str =
    "Register the business with the national registrar and check sector licensing with the local authority.";

pub const DEFAULT_CHALLENGES: &str =
    "No specific challenges documented yet; speak with existing operators in your area.";

pub const DEFAULT_ROLE_SNAPSHOT: &str = "Snapshot not available for this role yet.";

pub fn default_day_breakdown() -> DayBreakdown {
    let [entry, mid, senior] = DEFAULT_PRACTICE_TASKS;
    DayBreakdown {
        entry: entry.to_string(),
        mid: mid.to_string(),
        senior: senior.to_string(),
    }
}

pub fn default_qualification() -> Qualification {
    Qualification {
        education: NOT_SPECIFIED.to_string(),
        certification: NOT_SPECIFIED.to_string(),
        experience: NOT_SPECIFIED.to_string(),
    }
}

pub fn default_skill_levels() -> ProficiencyLadder {
    let [beginner, intermediate, advanced] = DEFAULT_SKILL_LEVELS;
    ProficiencyLadder {
        beginner: beginner.to_string(),
        intermediate: intermediate.to_string(),
        advanced: advanced.to_string(),
    }
}
