//! Configuration validation for roster searches.
//!
//! Checks a [`RosterConfig`] before any search begins. Detects:
//! - Populations too small to breed
//! - Probabilities outside `[0, 1]`
//! - Empty grids
//! - Staffing tables that need more people than exist on some day
//! - Negative or non-finite improvement thresholds
//!
//! All problems are collected; validation does not stop at the first one.

use thiserror::Error;

use crate::config::RosterConfig;
use crate::models::DAYS_PER_WEEK;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Fewer than two chromosomes in generation 0.
    PopulationTooSmall,
    /// A probability outside `[0, 1]`.
    ProbabilityOutOfRange,
    /// Zero employees or zero days.
    EmptyGrid,
    /// A day requires more staff than there are employees.
    UnsatisfiableStaffing,
    /// Improvement threshold negative or not finite.
    InvalidThreshold,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

const WEEKDAYS: [&str; DAYS_PER_WEEK] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Validates a search configuration.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_config(config: &RosterConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.population_size < 2 {
        errors.push(ValidationError::new(
            ValidationErrorKind::PopulationTooSmall,
            format!(
                "population_size must be at least 2, got {}",
                config.population_size
            ),
        ));
    }

    for (name, p) in [
        ("crossover_probability", config.crossover_probability),
        ("mutation_probability", config.mutation_probability),
    ] {
        if !(0.0..=1.0).contains(&p) {
            errors.push(ValidationError::new(
                ValidationErrorKind::ProbabilityOutOfRange,
                format!("{name} must lie in [0, 1], got {p}"),
            ));
        }
    }

    if config.employees == 0 || config.days == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyGrid,
            format!(
                "grid must have at least one employee and one day, got {} x {}",
                config.employees, config.days
            ),
        ));
    }

    for (dow, weekday) in WEEKDAYS.iter().enumerate() {
        let total = config.staffing.daily_total(dow);
        if total > config.employees as u64 {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnsatisfiableStaffing,
                format!(
                    "{weekday} requires {total} staff but only {} employees exist",
                    config.employees
                ),
            ));
        }
    }

    let threshold = config.min_generation_improvement;
    if !threshold.is_finite() || threshold < 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidThreshold,
            format!("min_generation_improvement must be finite and >= 0, got {threshold}"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StaffingRequirement;

    fn kinds(config: &RosterConfig) -> Vec<ValidationErrorKind> {
        validate_config(config)
            .unwrap_err()
            .into_iter()
            .map(|e| e.kind)
            .collect()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&RosterConfig::default()).is_ok());
    }

    #[test]
    fn test_population_too_small() {
        let config = RosterConfig::default().with_population_size(1);
        assert_eq!(kinds(&config), vec![ValidationErrorKind::PopulationTooSmall]);
    }

    #[test]
    fn test_probability_out_of_range() {
        let mut config = RosterConfig::default();
        config.crossover_probability = 1.2;
        config.mutation_probability = -0.1;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::ProbabilityOutOfRange));
        assert!(errors[0].message.contains("crossover_probability"));
    }

    #[test]
    fn test_nan_probability_rejected() {
        let mut config = RosterConfig::default();
        config.mutation_probability = f64::NAN;
        assert_eq!(kinds(&config), vec![ValidationErrorKind::ProbabilityOutOfRange]);
    }

    #[test]
    fn test_unsatisfiable_staffing() {
        // default table needs 25 people on Monday and Tuesday
        let config = RosterConfig::default().with_grid(20, 14);
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::UnsatisfiableStaffing));
        assert!(errors[0].message.starts_with("Mon requires 25"));
    }

    #[test]
    fn test_oversized_staffing_entries_rejected() {
        let config = RosterConfig::default()
            .with_staffing(StaffingRequirement::new([[u32::MAX; 7], [1; 7], [0; 7]]));
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 7);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::UnsatisfiableStaffing));
        assert!(errors[0].message.starts_with("Mon requires 4294967296"));
    }

    #[test]
    fn test_custom_staffing_fits() {
        let config = RosterConfig::default()
            .with_grid(6, 7)
            .with_staffing(StaffingRequirement::new([[2; 7], [2; 7], [2; 7]]));
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_empty_grid() {
        let config = RosterConfig::default().with_grid(30, 0);
        assert_eq!(kinds(&config), vec![ValidationErrorKind::EmptyGrid]);
    }

    #[test]
    fn test_invalid_threshold() {
        let config = RosterConfig::default().with_min_generation_improvement(-0.5);
        assert_eq!(kinds(&config), vec![ValidationErrorKind::InvalidThreshold]);
    }

    #[test]
    fn test_multiple_errors() {
        let mut config = RosterConfig::default().with_population_size(0).with_grid(0, 14);
        config.crossover_probability = 2.0;
        let errors = validate_config(&config).unwrap_err();
        // population + probability + empty grid + 7 unsatisfiable weekdays
        assert_eq!(errors.len(), 10);
    }
}
