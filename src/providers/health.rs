use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::{RecetteError, Result};

/// Narrow interface over the device health store: the dashboard only ever
/// asks for the cumulative step count of a calendar day.
#[async_trait]
pub trait HealthProvider: Send + Sync {
    async fn daily_step_count(&self, date: NaiveDate) -> Result<u64>;
}

/// Health provider backed by a fixed sample map. Days without a sample
/// report 0 steps, matching how the app degrades when the device store has
/// nothing recorded.
#[derive(Default)]
pub struct FixedHealthProvider {
    samples: HashMap<NaiveDate, u64>,
}

impl FixedHealthProvider {
    pub fn new(samples: impl IntoIterator<Item = (NaiveDate, u64)>) -> Self {
        Self {
            samples: samples.into_iter().collect(),
        }
    }

    /// Reports the fixed demo value for today.
    pub fn demo() -> Self {
        Self::new([(chrono::Utc::now().date_naive(), 8500)])
    }
}

#[async_trait]
impl HealthProvider for FixedHealthProvider {
    async fn daily_step_count(&self, date: NaiveDate) -> Result<u64> {
        Ok(self.samples.get(&date).copied().unwrap_or(0))
    }
}

/// Stands in for a device without a health store; every query fails and the
/// caller decides how to degrade.
pub struct UnavailableHealthProvider;

#[async_trait]
impl HealthProvider for UnavailableHealthProvider {
    async fn daily_step_count(&self, _date: NaiveDate) -> Result<u64> {
        Err(RecetteError::HealthUnavailable(
            "health data is not available on this device".to_string(),
        ))
    }
}
