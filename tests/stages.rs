use geothermal_plant_sim::plant::stages::{
    Condenser, CondenserInput, CondenserModel, CoolingTower, CoolingTowerInput, Generator,
    GeneratorInput, HeatBalance, MoistureSeparator, ProcessStage, ReliefValve, ReliefValveInput,
    SeparatorInput, SteamSeparator, Wellhead, WellheadInput,
};
use geothermal_plant_sim::plant::PlantError;
use geothermal_plant_sim::steam::if97::saturation_pressure_bar_abs_from_temp_c;

fn assert_close(label: &str, actual: f64, expected: f64, abs_tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= abs_tol,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {abs_tol})"
    );
}

fn wellhead_fluid() -> SeparatorInput {
    SeparatorInput {
        pressure_bar: 10.5,
        temp_c: 186.1,
        flow_kg_s: 180.0,
    }
}

#[test]
fn wellhead_reports_pressure_flow_product() {
    let out = Wellhead
        .transform(&WellheadInput {
            pressure_bar_g: 10.5,
            flow_kg_s: 180.0,
        })
        .unwrap();
    assert_close("steam_from_wellhead", out.steam_from_wellhead, 1_890.0, 1e-9);
}

#[test]
fn steam_separator_applies_drop_and_factors() {
    let out = SteamSeparator::default().transform(&wellhead_fluid()).unwrap();
    assert_close("p", out.outlet_pressure_bar, 8.5, 1e-12);
    assert_close("flow", out.steam_flow_kg_s, 162.0, 1e-9);
    assert_close("T", out.steam_temp_c, 185.17, 1e-3);
    // 소수점 셋째 자리까지만 남는다.
    assert_close("T rounded", out.steam_temp_c * 1000.0, (out.steam_temp_c * 1000.0).round(), 1e-6);
}

#[test]
fn moisture_separator_feeds_turbine_inlet() {
    let upstream = SteamSeparator::default().transform(&wellhead_fluid()).unwrap();
    let out = MoistureSeparator::default()
        .transform(&SeparatorInput {
            pressure_bar: upstream.outlet_pressure_bar,
            temp_c: upstream.steam_temp_c,
            flow_kg_s: upstream.steam_flow_kg_s,
        })
        .unwrap();
    assert_close("p", out.turbine_inlet_pressure_bar, 8.0, 1e-12);
    assert_close("T", out.turbine_inlet_temp_c, 184.244, 1e-3);
    assert_close("flow", out.turbine_inlet_flow_kg_s, 160.38, 1e-9);
    assert_eq!(out.waste_water_flow_kg_s, 0.0);
}

#[test]
fn stages_are_pure() {
    let sep = SteamSeparator::default();
    let a = sep.transform(&wellhead_fluid()).unwrap();
    let b = sep.transform(&wellhead_fluid()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn separator_parameters_are_validated() {
    let bad_fraction = SteamSeparator {
        steam_fraction: 1.5,
        ..SteamSeparator::default()
    };
    assert!(matches!(
        bad_fraction.validate(),
        Err(PlantError::InvalidConfig { .. })
    ));
    let bad_drop = MoistureSeparator {
        pressure_drop_bar: -0.5,
        ..MoistureSeparator::default()
    };
    assert!(bad_drop.validate().is_err());
    let bad_flow = MoistureSeparator {
        flow_factor: 0.0,
        ..MoistureSeparator::default()
    };
    assert!(bad_flow.validate().is_err());
}

#[test]
fn placeholder_stages_return_zero() {
    let tower = CoolingTower
        .transform(&CoolingTowerInput {
            water_in_c: 40.0,
            water_flow_kg_s: 160.0,
        })
        .unwrap();
    assert_eq!(tower.heat_rejected_kw, 0.0);
    let valve = ReliefValve
        .transform(&ReliefValveInput {
            upstream_pressure_bar: 50.0,
        })
        .unwrap();
    assert_eq!(valve.valve_opening, 0.0);
    let generator = Generator
        .transform(&GeneratorInput {
            mechanical_power_mw: 25.0,
        })
        .unwrap();
    assert_eq!(generator.electric_power_mw, 0.0);
}

#[test]
fn fixed_condenser_ignores_inputs() {
    let condenser = Condenser::default();
    for (flow, temp) in [(0.0, 20.0), (160.38, 184.2), (1_000.0, 300.0)] {
        let out = condenser
            .transform(&CondenserInput {
                inlet_flow_kg_s: flow,
                inlet_temp_c: temp,
                dt_s: 1.0,
            })
            .unwrap();
        assert_eq!(out.pressure_bar_abs, 0.1);
        assert_eq!(out.temp_c, 40.0);
        assert_eq!(out.heat_duty_kw, None);
    }
}

#[test]
fn heat_balance_condenser_sits_on_saturation_line() {
    let condenser = Condenser::new(CondenserModel::HeatBalance(HeatBalance::default())).unwrap();
    let out = condenser
        .transform(&CondenserInput {
            inlet_flow_kg_s: 160.38,
            inlet_temp_c: 184.244,
            dt_s: 1.0,
        })
        .unwrap();
    // q = 160.38 × 2350, 냉각수 4000 kg/s, UA 30 MW/K → 약 52 °C
    assert_close("T", out.temp_c, 52.0, 0.5);
    let p_sat = saturation_pressure_bar_abs_from_temp_c(out.temp_c).unwrap();
    assert_close("p", out.pressure_bar_abs, p_sat, 1e-12);
    assert_close("q", out.heat_duty_kw.unwrap(), 160.38 * 2350.0, 1e-6);
}

#[test]
fn heat_balance_without_steam_settles_at_cooling_water_temperature() {
    let condenser = Condenser::new(CondenserModel::HeatBalance(HeatBalance::default())).unwrap();
    let out = condenser
        .transform(&CondenserInput {
            inlet_flow_kg_s: 0.0,
            inlet_temp_c: 184.0,
            dt_s: 1.0,
        })
        .unwrap();
    assert_close("T", out.temp_c, 25.0, 1e-12);
    assert!(out.pressure_bar_abs > 0.03 && out.pressure_bar_abs < 0.033);
}

#[test]
fn heat_balance_rejects_negative_flow_and_bad_parameters() {
    let condenser = Condenser::new(CondenserModel::HeatBalance(HeatBalance::default())).unwrap();
    let err = condenser
        .transform(&CondenserInput {
            inlet_flow_kg_s: -1.0,
            inlet_temp_c: 184.0,
            dt_s: 1.0,
        })
        .unwrap_err();
    assert!(matches!(
        err,
        PlantError::InvalidOperatingPoint {
            stage: "condenser",
            ..
        }
    ));

    let no_cooling = HeatBalance {
        cooling_water_flow_kg_s: 0.0,
        ..HeatBalance::default()
    };
    assert!(Condenser::new(CondenserModel::HeatBalance(no_cooling)).is_err());
    assert!(Condenser::new(CondenserModel::Fixed {
        pressure_bar_abs: 0.0,
        temp_c: 40.0
    })
    .is_err());
}

#[test]
fn heat_balance_condensing_temperature_is_capped_by_steam_temperature() {
    let condenser = Condenser::new(CondenserModel::HeatBalance(HeatBalance::default())).unwrap();
    // 유입 증기 30 °C, 계산상 응축 온도 약 52 °C
    let out = condenser
        .transform(&CondenserInput {
            inlet_flow_kg_s: 160.38,
            inlet_temp_c: 30.0,
            dt_s: 1.0,
        })
        .unwrap();
    assert_eq!(out.temp_c, 30.0);
    let p_sat = saturation_pressure_bar_abs_from_temp_c(30.0).unwrap();
    assert_close("p", out.pressure_bar_abs, p_sat, 1e-12);
}

#[test]
fn heat_balance_parameters_must_be_finite() {
    for hb in [
        HeatBalance {
            cooling_water_flow_kg_s: f64::INFINITY,
            ..HeatBalance::default()
        },
        HeatBalance {
            ua_kw_per_k: f64::INFINITY,
            ..HeatBalance::default()
        },
        HeatBalance {
            latent_heat_kj_per_kg: f64::INFINITY,
            ..HeatBalance::default()
        },
    ] {
        assert!(matches!(
            Condenser::new(CondenserModel::HeatBalance(hb)),
            Err(PlantError::InvalidConfig { .. })
        ));
    }
}
