use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Calendar-relative window used to bucket rating changes
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StatsPeriod {
    Week,
    Month,
    Year,
}

impl StatsPeriod {
    /// Earliest instant included in the window ending at `now`.
    ///
    /// Month and year subtract calendar months, clamping to the last valid
    /// day (March 31 minus one month is the end of February).
    pub fn cutoff(self, now: DateTime<Utc>) -> DateTime<Utc> {
        let cutoff = match self {
            StatsPeriod::Week => now.checked_sub_signed(Duration::days(7)),
            StatsPeriod::Month => now.checked_sub_months(Months::new(1)),
            StatsPeriod::Year => now.checked_sub_months(Months::new(12)),
        };
        cutoff.unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}
