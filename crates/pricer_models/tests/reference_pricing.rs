//! End-to-end reference pricing cases.
//!
//! Reference cases for point pricing, zero-strike fallbacks, delta
//! banding and curve/surface determinism, exercised through the public
//! API only.

use approx::assert_relative_eq;
use pricer_models::axes::{
    AxisResolution, BondSeries, BondSurfaceMetric, ChartMode, WarrantCurveMetric,
    WarrantSurfaceMetric,
};
use pricer_models::instruments::{PricingParameters, SimulationSettings};
use pricer_models::pricers::{price_bond, BondPricer, WarrantPricer};

// =============================================================================
// Bond point pricing
// =============================================================================

fn reference_bond() -> PricingParameters {
    PricingParameters {
        spot_price: 120.0,
        strike_price: 100.0,
        notional: 100.0,
        coupon_rate: 0.0,
        redemption_rate: 1.0,
        volatility: 0.3,
        interest_rate: 0.005,
        borrow_rate_bps: 0.0,
        credit_spread_bps: 0.0,
        time_to_maturity_years: 1.0,
        ..Default::default()
    }
}

#[test]
fn test_bond_reference_price() {
    let result = price_bond(&reference_bond()).unwrap();

    assert_relative_eq!(result.bond_floor, 99.501, epsilon = 1e-9);
    assert_relative_eq!(result.bond_parity, 120.0, epsilon = 1e-9);
    assert_relative_eq!(result.fair_value, 121.5, epsilon = 1e-9);
    assert_relative_eq!(result.delta, 0.737, epsilon = 1e-9);
    assert_relative_eq!(result.bond_delta, 0.263, epsilon = 1e-9);
    assert_relative_eq!(result.expected_discount, 1.23, epsilon = 1e-9);
}

#[test]
fn test_bond_zero_strike_parity_is_notional() {
    for spot in [0.0, 80.0, 120.0, 10_000.0] {
        let params = PricingParameters {
            spot_price: spot,
            strike_price: 0.0,
            ..reference_bond()
        };
        assert_eq!(price_bond(&params).unwrap().bond_parity, 100.0);
    }
}

#[test]
fn test_bond_simulation_settings_do_not_affect_price() {
    let seeded = PricingParameters {
        simulation: SimulationSettings {
            seed: 42,
            trial_num: 50,
            simulation_num: 10_000,
            jump_lambda: 0.5,
            jump_mean: -0.1,
            jump_std_dev: 0.4,
        },
        ..reference_bond()
    };
    assert_eq!(
        price_bond(&seeded).unwrap(),
        price_bond(&reference_bond()).unwrap()
    );
}

#[test]
fn test_bond_maturity_from_dates() {
    let params = reference_bond().with_maturity_dates("2026-02-11", "2027-02-11");
    let from_dates = price_bond(&params).unwrap();
    let explicit = price_bond(&PricingParameters {
        time_to_maturity_years: 365.0 / 365.25,
        ..reference_bond()
    })
    .unwrap();
    assert_eq!(from_dates, explicit);
}

#[test]
fn test_bond_result_summary_labels() {
    let result = price_bond(&reference_bond()).unwrap();
    let summary = result.summary();
    assert_eq!(summary[0].1, "JPY 121.5");
    assert_eq!(summary[4].1, "JPY 99.501");
    assert_eq!(summary[2].1, "1.23%");
}

// =============================================================================
// Warrant point functions
// =============================================================================

#[test]
fn test_warrant_fair_value_reference() {
    assert_eq!(WarrantPricer::new().calculate_fair_value(110.0, 100.0), 15.5);
}

#[test]
fn test_warrant_delta_at_upper_threshold() {
    // moneyness 110 / 100 = 1.1 is not strictly above 1.1
    assert_eq!(WarrantPricer::new().calculate_delta(110.0, 100.0), 0.65);
}

#[test]
fn test_warrant_zero_strike_moneyness_is_one() {
    let pricer = WarrantPricer::new();
    // moneyness 1 is not strictly above 1.0, so it lands in the 0.9 band
    assert_eq!(pricer.calculate_delta(110.0, 0.0), pricer.calculate_delta(100.0, 100.0));
    assert_eq!(pricer.calculate_delta(110.0, 0.0), 0.45);
}

// =============================================================================
// Curves and surfaces
// =============================================================================

#[test]
fn test_bond_curve_idempotent() {
    let pricer = BondPricer::default();
    let first = pricer.generate_curve_data(BondSeries::Maturity, BondSeries::Yield);
    let second = pricer.generate_curve_data(BondSeries::Maturity, BondSeries::Yield);

    assert_eq!(first.x_values(), second.x_values());
    assert_eq!(first.y_values(), second.y_values());
    for (a, b) in first.y_values().iter().zip(second.y_values()) {
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

#[test]
fn test_bond_surface_shape_and_determinism() {
    let pricer = BondPricer::default();
    for metric in [
        BondSurfaceMetric::Coupon,
        BondSurfaceMetric::Convexity,
        BondSurfaceMetric::Baseline,
    ] {
        let a = pricer.generate_surface_data(metric);
        let b = pricer.generate_surface_data(metric);
        assert_eq!(a, b);
        assert_eq!(a.x_grid().shape(), (30, 30));
        assert_eq!(a.y_grid().shape(), (30, 30));
        assert_eq!(a.z_grid().shape(), (30, 30));
    }
}

#[test]
fn test_warrant_surface_shape() {
    let pricer = WarrantPricer::new();
    for y in [
        WarrantCurveMetric::Value,
        WarrantCurveMetric::Delta,
        WarrantCurveMetric::Gamma,
    ] {
        for z in [WarrantSurfaceMetric::Time, WarrantSurfaceMetric::Volatility] {
            let surface = pricer.generate_surface_data(100.0, y, z).unwrap();
            assert_eq!(surface.shape(), (50, 50));
            assert_eq!(surface.z_grid().shape(), surface.y_grid().shape());
        }
    }
}

#[test]
fn test_mode_selection_per_call() {
    let pricer = BondPricer::default();
    let curve = pricer
        .chart_from_names("Maturity", "Yield", "None", AxisResolution::Strict)
        .unwrap();
    let surface = pricer
        .chart_from_names("Maturity", "Yield", "Coupon", AxisResolution::Strict)
        .unwrap();
    let curve_again = pricer
        .chart_from_names("Maturity", "Yield", "None", AxisResolution::Strict)
        .unwrap();

    assert!(curve.is_curve());
    assert!(!surface.is_curve());
    assert_eq!(curve, curve_again);
}

#[test]
fn test_typed_and_named_charts_agree() {
    let pricer = WarrantPricer::new();
    let typed = pricer
        .chart(
            95.0,
            pricer_models::axes::WarrantXAxis::Strike,
            WarrantCurveMetric::Delta,
            ChartMode::Surface(WarrantSurfaceMetric::Volatility),
        )
        .unwrap();
    let named = pricer
        .chart_from_names(95.0, "Strike", "Delta", "Volatility", AxisResolution::Strict)
        .unwrap();
    assert_eq!(typed, named);
}

#[cfg(feature = "serde")]
#[test]
fn test_chart_json_payload() {
    let chart = BondPricer::default()
        .chart_from_names("Maturity", "Yield", "Convexity", AxisResolution::Strict)
        .unwrap();
    let value = serde_json::to_value(&chart).unwrap();

    assert_eq!(value["title"], "3D Surface: Convexity Analysis");
    assert_eq!(value["data"]["mode"], "surface");
    assert_eq!(value["data"]["colorscale"], "Plasma");
    assert_eq!(value["data"]["Z_grid"].as_array().map(Vec::len), Some(30));
}
