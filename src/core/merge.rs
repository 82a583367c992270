//! Field-by-field merge of a country override onto a sector's base metrics.

use crate::domain::model::{
    GrowthMetrics, GrowthOverride, OutlookOverride, SectorMetrics, SectorOutlook, SectorOverride,
};

fn pick<T: Clone>(base: &T, replacement: &Option<T>) -> T {
    replacement.as_ref().unwrap_or(base).clone()
}

fn merge_growth(base: &GrowthMetrics, ovr: &GrowthOverride) -> GrowthMetrics {
    GrowthMetrics {
        job_trend: pick(&base.job_trend, &ovr.job_trend),
        investment: pick(&base.investment, &ovr.investment),
        demand: pick(&base.demand, &ovr.demand),
        context: pick(&base.context, &ovr.context),
    }
}

fn merge_outlook(base: &SectorOutlook, ovr: &OutlookOverride) -> SectorOutlook {
    SectorOutlook {
        hiring: pick(&base.hiring, &ovr.hiring),
        hotspots: pick(&base.hotspots, &ovr.hotspots),
        entrepreneurship: pick(&base.entrepreneurship, &ovr.entrepreneurship),
        mobility: pick(&base.mobility, &ovr.mobility),
    }
}

/// Returns `base` with every field present in `ovr` replaced. `None` returns `base` unchanged.
pub fn apply_override(base: &SectorMetrics, ovr: Option<&SectorOverride>) -> SectorMetrics {
    match ovr {
        None => base.clone(),
        Some(ovr) => SectorMetrics {
            growth: merge_growth(&base.growth, &ovr.growth),
            outlook: merge_outlook(&base.outlook, &ovr.outlook),
        },
    }
}

impl SectorOverride {
    /// True when no field would be replaced.
    pub fn is_empty(&self) -> bool {
        *self == SectorOverride::default()
    }
}
