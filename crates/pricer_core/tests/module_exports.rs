//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported
//! and accessible via absolute paths.

/// Test that scalar helpers are accessible via absolute path.
#[test]
fn test_functions_module_exports() {
    use pricer_core::math::functions::logistic;
    use pricer_core::math::functions::positive_part;
    use pricer_core::math::functions::round_to;

    assert_eq!(logistic(0.0_f64, 10.0), 0.5);
    assert_eq!(positive_part(-3.0_f64), 0.0);
    assert_eq!(round_to(2.345_f64, 1), 2.3);
}

/// Test that grid types are accessible via absolute path.
#[test]
fn test_grid_module_exports() {
    use pricer_core::math::grid::{linspace, meshgrid, AxisRange, Grid2D};

    let range = AxisRange::new(0.0, 1.0, 3);
    assert_eq!(range.samples(), linspace(0.0, 1.0, 3));

    let (xg, yg): (Grid2D<f64>, Grid2D<f64>) = meshgrid(&[1.0, 2.0], &[3.0, 4.0, 5.0]);
    assert_eq!(xg.shape(), (3, 2));
    assert_eq!(yg.to_rows(), vec![vec![3.0, 3.0], vec![4.0, 4.0], vec![5.0, 5.0]]);
}

/// Test that time types are accessible via absolute path.
#[test]
fn test_time_module_exports() {
    use pricer_core::types::time::time_to_maturity;
    use pricer_core::types::time::time_to_maturity_or_default;
    use pricer_core::types::time::Date;
    use pricer_core::types::time::year_fraction;

    let start = Date::from_ymd(2024, 1, 1).unwrap();
    let end = Date::from_ymd(2024, 7, 1).unwrap();

    assert_eq!(start.year(), 2024);

    let yf = year_fraction(start, end);
    assert!((yf - 0.4983).abs() < 0.001);

    let ttm = time_to_maturity(start, end);
    assert!((ttm - 182.0 / 365.25).abs() < 1e-12);

    assert_eq!(time_to_maturity_or_default("2024-01-01", "not a date"), 1.0);
}

/// Test that currency and error types are accessible via the types module.
#[test]
fn test_types_reexports() {
    use pricer_core::types::{Currency, CurrencyError, GridError, PricingError};

    assert_eq!("usd".parse::<Currency>(), Ok(Currency::USD));
    assert!(matches!(
        "XYZ".parse::<Currency>(),
        Err(CurrencyError::UnknownCurrency(_))
    ));

    let err: PricingError = GridError::EmptyGrid.into();
    assert!(matches!(err, PricingError::InvalidInput(_)));
}
