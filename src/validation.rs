//! Input validation for crop allocation runs.
//!
//! Checks a scenario and GA configuration before the generation loop starts,
//! so malformed input fails fast instead of producing garbled generations.
//! Detects:
//! - Empty crop list, empty population, zero generation cap
//! - Negative or non-finite crop economics
//! - Non-positive land area or budget
//! - Rates and probabilities outside [0, 1]
//! - Zero early-stop threshold, non-positive mutation shape

use crate::ga::GaConfig;
use crate::models::Scenario;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The scenario has no crops.
    NoCrops,
    /// A crop has a negative or non-finite cost, yield or price.
    InvalidCropParameter,
    /// Land area is not a positive finite number.
    InvalidLandArea,
    /// Budget is not a positive finite number.
    InvalidBudget,
    /// Population size is zero.
    EmptyPopulation,
    /// Generation cap is zero.
    ZeroGenerations,
    /// A rate, probability or blend weight lies outside [0, 1].
    OutOfRange,
    /// Early-stop threshold is zero.
    ZeroStallThreshold,
    /// Mutation shape exponent is not a positive finite number.
    InvalidMutationShape,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a scenario and configuration.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_input(scenario: &Scenario, config: &GaConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if scenario.crops.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoCrops,
            "Scenario has no crops",
        ));
    }

    for crop in &scenario.crops {
        let fields = [
            ("cost", crop.cost_per_area),
            ("yield", crop.yield_per_area),
            ("price", crop.price_per_unit),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidCropParameter,
                    format!("Crop '{}' has invalid {field}: {value}", crop.name),
                ));
            }
        }
    }

    if !scenario.land_area.is_finite() || scenario.land_area <= 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidLandArea,
            format!("Land area must be positive, got {}", scenario.land_area),
        ));
    }

    if !scenario.budget.is_finite() || scenario.budget <= 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidBudget,
            format!("Budget must be positive, got {}", scenario.budget),
        ));
    }

    if config.population_size == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyPopulation,
            "Population size must be at least 1",
        ));
    }

    if config.max_generations == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroGenerations,
            "Max generations must be at least 1",
        ));
    }

    if config.stall_generations == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroStallThreshold,
            "Stall threshold must be at least 1",
        ));
    }

    let unit_params = [
        ("mutation_rate", config.mutation_rate),
        ("crossover_rate", config.crossover_rate),
        ("crossover_alpha", config.crossover_alpha),
        ("gene_mutation_probability", config.gene_mutation_probability),
    ];
    for (name, value) in unit_params {
        if !(0.0..=1.0).contains(&value) {
            errors.push(ValidationError::new(
                ValidationErrorKind::OutOfRange,
                format!("{name} must be within [0, 1], got {value}"),
            ));
        }
    }

    if !config.mutation_shape.is_finite() || config.mutation_shape <= 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidMutationShape,
            format!("mutation_shape must be positive, got {}", config.mutation_shape),
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
    use crate::models::Crop;

    fn sample_scenario() -> Scenario {
        Scenario::new(10.0, 20_000_000.0)
            .with_crop(
                Crop::new("Rice")
                    .with_cost(1_000_000.0)
                    .with_yield(12.0)
                    .with_price(200_000.0),
            )
            .with_crop(
                Crop::new("Corn")
                    .with_cost(800_000.0)
                    .with_yield(9.0)
                    .with_price(150_000.0),
            )
    }

    fn kinds(errors: &[ValidationError]) -> Vec<ValidationErrorKind> {
        errors.iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&sample_scenario(), &GaConfig::default()).is_ok());
    }

    #[test]
    fn test_no_crops() {
        let errors = validate_input(&Scenario::new(1.0, 1.0), &GaConfig::default()).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::NoCrops]);
    }

    #[test]
    fn test_negative_crop_parameter() {
        let bad = Crop::new("Bad").with_cost(-1.0).with_price(f64::NAN);
        let scenario = sample_scenario().with_crop(bad);
        let errors = validate_input(&scenario, &GaConfig::default()).unwrap_err();
        assert_eq!(errors.len(), 2);
        for e in &errors {
            assert_eq!(e.kind, ValidationErrorKind::InvalidCropParameter);
        }
        assert!(errors[0].message.contains("Bad"));
    }

    #[test]
    fn test_land_and_budget() {
        let mut scenario = sample_scenario();
        scenario.land_area = 0.0;
        scenario.budget = -5.0;
        let errors = validate_input(&scenario, &GaConfig::default()).unwrap_err();
        assert_eq!(
            kinds(&errors),
            vec![ValidationErrorKind::InvalidLandArea, ValidationErrorKind::InvalidBudget]
        );
    }

    #[test]
    fn test_config_errors_collected() {
        let config = GaConfig::default()
            .with_population_size(0)
            .with_max_generations(0)
            .with_stall_generations(0)
            .with_mutation_rate(-0.1)
            .with_crossover_rate(1.5)
            .with_mutation_shape(0.0);
        let errors = validate_input(&sample_scenario(), &config).unwrap_err();
        let k = kinds(&errors);
        assert!(k.contains(&ValidationErrorKind::EmptyPopulation));
        assert!(k.contains(&ValidationErrorKind::ZeroGenerations));
        assert!(k.contains(&ValidationErrorKind::ZeroStallThreshold));
        assert!(k.contains(&ValidationErrorKind::InvalidMutationShape));
        let out_of_range = k
            .iter()
            .filter(|&&x| x == ValidationErrorKind::OutOfRange)
            .count();
        assert_eq!(out_of_range, 2);
    }

    #[test]
    fn test_rate_bounds_inclusive() {
        let config = GaConfig::default()
            .with_mutation_rate(0.0)
            .with_crossover_rate(1.0);
        assert!(validate_input(&sample_scenario(), &config).is_ok());
    }
}
