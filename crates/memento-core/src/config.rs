//! Life configuration

use chrono::NaiveDateTime;

use crate::{MementoError, MementoResult};

/// Default life expectancy in years when none is configured
pub const DEFAULT_LIFE_EXPECTANCY_YEARS: u32 = 75;

/// Anchor configuration for the countdown and the week grid.
///
/// Both fields are immutable for the process lifetime once an engine is
/// built from them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LifeConfig {
    /// Birth instant, host-local calendar time
    pub birth: NaiveDateTime,
    /// Life expectancy in whole calendar years
    pub life_expectancy_years: u32,
}

impl LifeConfig {
    /// Configuration with the default life expectancy
    pub fn new(birth: NaiveDateTime) -> Self {
        LifeConfig {
            birth,
            life_expectancy_years: DEFAULT_LIFE_EXPECTANCY_YEARS,
        }
    }

    pub fn with_life_expectancy(mut self, years: u32) -> Self {
        self.life_expectancy_years = years;
        self
    }

    /// Reject invalid configurations at construction, not at first tick
    pub fn validate(&self) -> MementoResult<()> {
        if self.life_expectancy_years == 0 {
            return Err(MementoError::InvalidConfiguration(
                "life expectancy must be at least one year".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_default_life_expectancy() {
        let birth = NaiveDate::from_ymd_opt(1998, 7, 25)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let config = LifeConfig::new(birth);
        assert_eq!(config.life_expectancy_years, 75);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_life_expectancy_rejected() {
        let birth = NaiveDate::from_ymd_opt(1998, 7, 25)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let config = LifeConfig::new(birth).with_life_expectancy(0);
        assert!(matches!(
            config.validate(),
            Err(MementoError::InvalidConfiguration(_))
        ));
    }
}
