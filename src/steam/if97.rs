//! IAPWS-IF97 계산을 seuif97 크레이트로 위임한 래퍼.
//! 입력: 압력(MPa, 절대), 온도(K)
//! 출력: 비엔탈피(kJ/kg), 비엔트로피(kJ/kg·K)
//!
//! 유효 범위를 벗어난 입력은 외삽하지 않고 `SteamPropertyError`로 거부한다.

use seuif97::{ph, ps, pt, OH, OS, OT};
use thiserror::Error;

use crate::units::{bar_to_mpa, celsius_to_kelvin, kelvin_to_celsius, mpa_to_bar};

// ---------------- IF97 적용 범위 ----------------
const T_MIN_K: f64 = 273.15;
const T_REGION5_MIN_K: f64 = 1073.15;
const T_MAX_K: f64 = 2273.15;
const P_MAX_MPA: f64 = 100.0;
const P_REGION5_MAX_MPA: f64 = 50.0;

// ---------------- Region 4 (포화) ----------------
const P4_STAR_MPA: f64 = 22.064;
const T4_STAR_K: f64 = 647.096;
const R4_N: [f64; 6] = [
    -7.859_517_83,
    1.844_082_59,
    -11.786_649_7,
    22.680_741_1,
    -15.961_871_9,
    1.801_225_02,
];

/// 증기 물성 계산 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SteamPropertyError {
    /// (P, T) 입력이 IF97 적용 범위 밖이거나 계산 결과가 유한하지 않음
    #[error("IF97 유효 범위 밖입니다: p = {pressure_mpa} MPa, T = {temperature_k} K")]
    OutOfRange { pressure_mpa: f64, temperature_k: f64 },
    /// (P, h) 또는 (P, s) 역계산 실패
    #[error("IF97 역계산 범위 밖입니다: p = {pressure_mpa} MPa, {what} = {value}")]
    InverseOutOfRange {
        pressure_mpa: f64,
        what: &'static str,
        value: f64,
    },
    /// 포화선(Region 4) 계산 범위 밖
    #[error("IF97 Region4 계산 실패: {0}")]
    Saturation(&'static str),
}

/// (P, T) 기준 물/증기 물성.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteamProperties {
    /// 비엔탈피(kJ/kg)
    pub enthalpy_kj_per_kg: f64,
    /// 비엔트로피(kJ/kg·K)
    pub entropy_kj_per_kg_k: f64,
}

/// (P, h) 역계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhState {
    /// 온도(K)
    pub temperature_k: f64,
    /// 비엔트로피(kJ/kg·K)
    pub entropy_kj_per_kg_k: f64,
}

/// IF97 정의 영역 안인지 판정한다. Region 1/2/3은 100 MPa, Region 5는 50 MPa까지.
pub fn in_valid_range(pressure_mpa: f64, temperature_k: f64) -> bool {
    if !pressure_mpa.is_finite() || !temperature_k.is_finite() || pressure_mpa <= 0.0 {
        return false;
    }
    if (T_MIN_K..=T_REGION5_MIN_K).contains(&temperature_k) {
        pressure_mpa <= P_MAX_MPA
    } else if temperature_k > T_REGION5_MIN_K && temperature_k <= T_MAX_K {
        pressure_mpa <= P_REGION5_MAX_MPA
    } else {
        false
    }
}

/// 압력(MPa)·온도(K)로 영역을 자동 판정해 비엔탈피와 비엔트로피를 반환한다.
pub fn properties_at(
    pressure_mpa: f64,
    temperature_k: f64,
) -> Result<SteamProperties, SteamPropertyError> {
    let out_of_range = || SteamPropertyError::OutOfRange {
        pressure_mpa,
        temperature_k,
    };
    if !in_valid_range(pressure_mpa, temperature_k) {
        return Err(out_of_range());
    }
    let t_c = kelvin_to_celsius(temperature_k);
    let h = pt(pressure_mpa, t_c, OH);
    let s = pt(pressure_mpa, t_c, OS);
    if !h.is_finite() || !s.is_finite() {
        return Err(out_of_range());
    }
    Ok(SteamProperties {
        enthalpy_kj_per_kg: h,
        entropy_kj_per_kg_k: s,
    })
}

/// 압력(MPa)·비엔탈피(kJ/kg)로부터 온도와 엔트로피를 역계산한다.
pub fn properties_ph(pressure_mpa: f64, enthalpy_kj_per_kg: f64) -> Result<PhState, SteamPropertyError> {
    let err = || SteamPropertyError::InverseOutOfRange {
        pressure_mpa,
        what: "h",
        value: enthalpy_kj_per_kg,
    };
    if !pressure_mpa.is_finite() || pressure_mpa <= 0.0 || pressure_mpa > P_MAX_MPA {
        return Err(err());
    }
    if !enthalpy_kj_per_kg.is_finite() {
        return Err(err());
    }
    let t_c = ph(pressure_mpa, enthalpy_kj_per_kg, OT);
    let s = ph(pressure_mpa, enthalpy_kj_per_kg, OS);
    if !t_c.is_finite() || !s.is_finite() {
        return Err(err());
    }
    let temperature_k = celsius_to_kelvin(t_c);
    if !in_valid_range(pressure_mpa, temperature_k) {
        return Err(err());
    }
    Ok(PhState {
        temperature_k,
        entropy_kj_per_kg_k: s,
    })
}

/// 압력(MPa)·비엔트로피(kJ/kg·K)에서의 비엔탈피(kJ/kg). 등엔트로피 팽창 끝점 계산용.
pub fn enthalpy_ps(pressure_mpa: f64, entropy_kj_per_kg_k: f64) -> Result<f64, SteamPropertyError> {
    let err = || SteamPropertyError::InverseOutOfRange {
        pressure_mpa,
        what: "s",
        value: entropy_kj_per_kg_k,
    };
    if !pressure_mpa.is_finite() || pressure_mpa <= 0.0 || pressure_mpa > P_MAX_MPA {
        return Err(err());
    }
    if !entropy_kj_per_kg_k.is_finite() || entropy_kj_per_kg_k < 0.0 {
        return Err(err());
    }
    let h = ps(pressure_mpa, entropy_kj_per_kg_k, OH);
    if !h.is_finite() {
        return Err(err());
    }
    Ok(h)
}

fn region4_exponent(t_k: f64) -> f64 {
    let theta = 1.0 - t_k / T4_STAR_K;
    (T4_STAR_K / t_k)
        * (R4_N[0] * theta
            + R4_N[1] * theta.powf(1.5)
            + R4_N[2] * theta.powi(3)
            + R4_N[3] * theta.powf(3.5)
            + R4_N[4] * theta.powi(4)
            + R4_N[5] * theta.powf(7.5))
}

/// 포화압력(bar abs) - 입력 온도는 °C.
pub fn saturation_pressure_bar_abs_from_temp_c(t_c: f64) -> Result<f64, SteamPropertyError> {
    let t_k = celsius_to_kelvin(t_c);
    if !t_k.is_finite() || t_k < T_MIN_K || t_k > T4_STAR_K {
        return Err(SteamPropertyError::Saturation(
            "포화 온도는 0~373.946°C 범위여야 합니다.",
        ));
    }
    let p_mpa = P4_STAR_MPA * region4_exponent(t_k).exp();
    Ok(mpa_to_bar(p_mpa))
}

/// 포화온도(°C) - 입력 압력은 bar abs. Newton 반복으로 Region4 식을 푼다.
pub fn saturation_temp_c_from_pressure_bar_abs(p_bar_abs: f64) -> Result<f64, SteamPropertyError> {
    let p_mpa = bar_to_mpa(p_bar_abs);
    if !p_mpa.is_finite() || p_mpa <= 0.0 || p_mpa > P4_STAR_MPA {
        return Err(SteamPropertyError::Saturation(
            "포화 압력은 0 초과 220.64 bar(abs) 이하여야 합니다.",
        ));
    }
    let target = (p_mpa / P4_STAR_MPA).ln();
    let mut t_k = 373.15_f64;
    for _ in 0..30 {
        let theta = 1.0 - t_k / T4_STAR_K;
        let f = region4_exponent(t_k) - target;
        let dtheta_dt = -1.0 / T4_STAR_K;
        let dfdtheta = R4_N[0]
            + 1.5 * R4_N[1] * theta.powf(0.5)
            + 3.0 * R4_N[2] * theta.powi(2)
            + 3.5 * R4_N[3] * theta.powf(2.5)
            + 4.0 * R4_N[4] * theta.powi(3)
            + 7.5 * R4_N[5] * theta.powf(6.5);
        let dfd_t = -(region4_exponent(t_k) / t_k) + (T4_STAR_K / t_k) * dfdtheta * dtheta_dt;
        let delta = f / dfd_t;
        t_k -= delta;
        if delta.abs() < 1e-8 {
            break;
        }
    }
    if !t_k.is_finite() {
        return Err(SteamPropertyError::Saturation("포화 온도 반복 계산이 발산했습니다."));
    }
    Ok(kelvin_to_celsius(t_k))
}
