//! Monthly snapshot timeline — month-start instants at 00:00:00 UTC.

use crate::{
    config::GeneratorConfig,
    error::{GenError, GenResult},
};
use chrono::{DateTime, Datelike, Months, NaiveDate, TimeZone, Utc};

pub const SNAPSHOT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const PERIOD_FORMAT: &str = "%Y-%m";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    months: Vec<DateTime<Utc>>,
}

impl Timeline {
    /// `n_months` consecutive month starts beginning at `start_year-start_month-01`.
    pub fn build(start_year: i32, start_month: u32, n_months: usize) -> GenResult<Self> {
        let start = NaiveDate::from_ymd_opt(start_year, start_month, 1).ok_or_else(|| {
            GenError::InvalidConfig {
                reason: format!("no such month: {start_year}-{start_month:02}"),
            }
        })?;

        let months = (0..n_months)
            .map(|i| {
                let midnight = u32::try_from(i)
                    .ok()
                    .and_then(|i| start.checked_add_months(Months::new(i)))
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
                    .ok_or_else(|| GenError::InvalidConfig {
                        reason: format!("timeline overflows the calendar at month {i}"),
                    })?;
                Ok(Utc.from_utc_datetime(&midnight))
            })
            .collect::<GenResult<Vec<_>>>()?;

        Ok(Self { months })
    }

    pub fn from_config(config: &GeneratorConfig) -> GenResult<Self> {
        Self::build(config.start_year, config.start_month, config.horizon_months())
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    pub fn instants(&self) -> &[DateTime<Utc>] {
        &self.months
    }

    /// Calendar month (1–12) of snapshot `t`.
    pub fn calendar_month(&self, t: usize) -> u32 {
        self.months[t].month()
    }

    /// `YYYY-MM-DD HH:MM:SS` rendering of snapshot `t`.
    pub fn snapshot_label(&self, t: usize) -> String {
        self.months[t].format(SNAPSHOT_FORMAT).to_string()
    }

    /// `YYYY-MM` rendering of snapshot `t`.
    pub fn period_label(&self, t: usize) -> String {
        self.months[t].format(PERIOD_FORMAT).to_string()
    }
}
