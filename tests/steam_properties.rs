//! IF97 물성 래퍼 회귀 테스트. IAPWS-IF97 공식 문서의 검증 예제 값을 활용한다.
use geothermal_plant_sim::steam::if97::{
    saturation_pressure_bar_abs_from_temp_c, saturation_temp_c_from_pressure_bar_abs,
};
use geothermal_plant_sim::steam::{
    enthalpy_ps, in_valid_range, properties_at, properties_ph, SteamPropertyError,
};
use proptest::prelude::*;

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

#[test]
fn region1_reference_point() {
    // IF97: p = 3 MPa, T = 300 K
    let props = properties_at(3.0, 300.0).expect("region1");
    assert_close("h", props.enthalpy_kj_per_kg, 115.331_273, 1e-6);
    assert_close("s", props.entropy_kj_per_kg_k, 0.392_294_792, 1e-6);
}

#[test]
fn region2_reference_points() {
    // IF97: p = 0.0035 MPa, T = 300 K
    let low = properties_at(0.0035, 300.0).expect("region2 low T");
    assert_close("h300K", low.enthalpy_kj_per_kg, 2_549.911_45, 1e-6);
    assert_close("s300K", low.entropy_kj_per_kg_k, 8.522_389_67, 1e-6);

    // IF97: p = 0.0035 MPa, T = 700 K
    let high = properties_at(0.0035, 700.0).expect("region2 high T");
    assert_close("h700K", high.enthalpy_kj_per_kg, 3_335.683_75, 1e-6);
    assert_close("s700K", high.entropy_kj_per_kg_k, 10.174_999_6, 1e-6);
}

#[test]
fn region5_reference_point() {
    // IF97: p = 0.5 MPa, T = 1500 K
    let props = properties_at(0.5, 1500.0).expect("region5");
    assert_close("h", props.enthalpy_kj_per_kg, 5_219.768_55, 1e-6);
    assert_close("s", props.entropy_kj_per_kg_k, 9.654_088_75, 1e-6);
}

#[test]
fn turbine_inlet_state_is_superheated_steam() {
    // 기본 운전점: 8.0 bar, 184.244 °C
    let props = properties_at(0.8, 184.244 + 273.15).expect("turbine inlet");
    assert!(
        (2_770.0..2_830.0).contains(&props.enthalpy_kj_per_kg),
        "h = {}",
        props.enthalpy_kj_per_kg
    );
}

#[test]
fn outside_domain_is_rejected() {
    for (p, t) in [
        (0.1, 250.0),   // 273.15 K 미만
        (0.1, 2_300.0), // 2273.15 K 초과
        (120.0, 500.0), // 100 MPa 초과
        (60.0, 1_500.0), // 고온 영역은 50 MPa까지
        (0.0, 400.0),
        (-0.1, 400.0),
        (f64::NAN, 400.0),
        (0.1, f64::INFINITY),
    ] {
        assert!(!in_valid_range(p, t), "p={p} T={t} should be out of range");
        let err = properties_at(p, t).unwrap_err();
        assert!(
            matches!(err, SteamPropertyError::OutOfRange { .. }),
            "p={p} T={t}: {err:?}"
        );
    }
}

#[test]
fn domain_edges_are_accepted() {
    assert!(in_valid_range(100.0, 273.15));
    assert!(in_valid_range(100.0, 1_073.15));
    assert!(in_valid_range(50.0, 2_273.15));
    assert!(properties_at(0.1, 273.15).is_ok());
}

#[test]
fn ph_inverse_recovers_temperature() {
    let forward = properties_at(0.8, 500.0).expect("forward");
    let back = properties_ph(0.8, forward.enthalpy_kj_per_kg).expect("inverse");
    assert_close("T", back.temperature_k, 500.0, 1e-4);
    assert_close(
        "s",
        back.entropy_kj_per_kg_k,
        forward.entropy_kj_per_kg_k,
        1e-4,
    );
}

#[test]
fn ps_inverse_recovers_enthalpy() {
    let forward = properties_at(0.8, 500.0).expect("forward");
    let h = enthalpy_ps(0.8, forward.entropy_kj_per_kg_k).expect("inverse");
    assert_close("h", h, forward.enthalpy_kj_per_kg, 1e-3);
}

#[test]
fn inverse_rejects_bad_pressure() {
    assert!(matches!(
        enthalpy_ps(0.0, 6.5),
        Err(SteamPropertyError::InverseOutOfRange { what: "s", .. })
    ));
    assert!(matches!(
        properties_ph(f64::NAN, 2_800.0),
        Err(SteamPropertyError::InverseOutOfRange { what: "h", .. })
    ));
}

#[test]
fn saturation_line_reference_points() {
    // IF97: T = 300 K → p_sat = 0.00353658941 MPa
    let p = saturation_pressure_bar_abs_from_temp_c(26.85).expect("psat");
    assert_close("psat", p, 0.035_365_894_1, 1e-6);

    // IF97: p = 0.1 MPa → T_sat = 372.755919 K
    let t = saturation_temp_c_from_pressure_bar_abs(1.0).expect("tsat");
    assert_close("tsat", t, 372.755_919 - 273.15, 1e-6);

    assert!(matches!(
        saturation_pressure_bar_abs_from_temp_c(400.0),
        Err(SteamPropertyError::Saturation(_))
    ));
    assert!(matches!(
        saturation_temp_c_from_pressure_bar_abs(0.0),
        Err(SteamPropertyError::Saturation(_))
    ));
}

proptest! {
    #[test]
    fn lookup_is_deterministic(p in 0.001f64..50.0, t in 274.0f64..1_000.0) {
        let a = properties_at(p, t);
        let b = properties_at(p, t);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn saturation_round_trips(t_c in 5.0f64..360.0) {
        let p = saturation_pressure_bar_abs_from_temp_c(t_c).unwrap();
        let back = saturation_temp_c_from_pressure_bar_abs(p).unwrap();
        prop_assert!((back - t_c).abs() < 1e-6, "t={} back={}", t_c, back);
    }
}
