//! Annual return-on-investment arithmetic.

use std::ops::RangeInclusive;

use crate::{MetricsError, MetricsResult, ScenarioRecord, ScenarioTable};

pub const HOURLY_WAGE_RANGE:    RangeInclusive<f64> = 10.0..=50.0;
pub const ORDERS_PER_DAY_RANGE: RangeInclusive<u32> = 100..=2000;
pub const WORKING_DAYS_RANGE:   RangeInclusive<u32> = 200..=365;

/// Operating assumptions the savings are scaled by.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RoiParams {
    /// Dollars per worker-hour.
    pub hourly_wage: f64,
    pub orders_per_day: u32,
    pub working_days_per_year: u32,
}

impl Default for RoiParams {
    fn default() -> Self {
        Self {
            hourly_wage:           25.0,
            orders_per_day:        600,
            working_days_per_year: 300,
        }
    }
}

impl RoiParams {
    /// Reject values outside the supported operating ranges.
    pub fn validate(&self) -> MetricsResult<()> {
        if !HOURLY_WAGE_RANGE.contains(&self.hourly_wage) {
            return Err(MetricsError::InvalidParameter(format!(
                "hourly_wage must be within {HOURLY_WAGE_RANGE:?}, got {}",
                self.hourly_wage
            )));
        }
        if !ORDERS_PER_DAY_RANGE.contains(&self.orders_per_day) {
            return Err(MetricsError::InvalidParameter(format!(
                "orders_per_day must be within {ORDERS_PER_DAY_RANGE:?}, got {}",
                self.orders_per_day
            )));
        }
        if !WORKING_DAYS_RANGE.contains(&self.working_days_per_year) {
            return Err(MetricsError::InvalidParameter(format!(
                "working_days_per_year must be within {WORKING_DAYS_RANGE:?}, got {}",
                self.working_days_per_year
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn annual_orders(&self) -> u64 {
        self.orders_per_day as u64 * self.working_days_per_year as u64
    }
}

// ── ScenarioRoi ───────────────────────────────────────────────────────────────

/// One scenario's savings scaled to a year.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScenarioRoi {
    pub scenario:                 String,
    pub annual_orders:            u64,
    pub time_saved_per_order:     f64,
    pub annual_time_saved_hours:  f64,
    pub annual_cost_savings:      f64,
    pub distance_saved_per_order: f64,
    pub annual_distance_saved:    f64,
    pub distance_reduction_pct:   Option<f64>,
    pub time_reduction_pct:       Option<f64>,
}

impl ScenarioRoi {
    /// # Errors
    ///
    /// [`MetricsError::InvalidParameter`] if `params` fails
    /// [`RoiParams::validate`].
    pub fn compute(record: &ScenarioRecord, params: &RoiParams) -> MetricsResult<Self> {
        params.validate()?;
        Ok(Self::compute_unchecked(record, params))
    }

    fn compute_unchecked(record: &ScenarioRecord, params: &RoiParams) -> Self {
        let annual_orders = params.annual_orders();
        let orders = annual_orders as f64;

        let time_saved_per_order = record.time_saved();
        let annual_time_saved_hours = time_saved_per_order * orders;
        let distance_saved_per_order = record.distance_saved();

        Self {
            scenario: record.name.clone(),
            annual_orders,
            time_saved_per_order,
            annual_time_saved_hours,
            annual_cost_savings: annual_time_saved_hours * params.hourly_wage,
            distance_saved_per_order,
            annual_distance_saved: distance_saved_per_order * orders,
            distance_reduction_pct: record.distance_reduction_pct(),
            time_reduction_pct: record.time_reduction_pct(),
        }
    }
}

/// ROI for every scenario, in table order.
pub fn compare_all(table: &ScenarioTable, params: &RoiParams) -> MetricsResult<Vec<ScenarioRoi>> {
    params.validate()?;
    Ok(table.iter().map(|r| ScenarioRoi::compute_unchecked(r, params)).collect())
}

/// Row with the largest annual cost savings.  Ties keep the earlier row.
pub fn best_by_savings(rows: &[ScenarioRoi]) -> Option<&ScenarioRoi> {
    rows.iter().reduce(|best, r| {
        if r.annual_cost_savings > best.annual_cost_savings { r } else { best }
    })
}
