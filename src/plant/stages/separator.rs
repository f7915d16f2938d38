//! 기수분리기와 습분분리기.
//!
//! 실제 상분리 물리는 다루지 않는다. 입력에 고정된 강하량·감쇠 계수를 적용할 뿐이며
//! 계수는 설정 파일에서 덮어쓸 수 있다.

use serde::{Deserialize, Serialize};

use super::{round3, ProcessStage};
use crate::plant::error::{PlantError, PlantResult};

/// 분리기 공통 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeparatorInput {
    /// bar
    pub pressure_bar: f64,
    /// °C
    pub temp_c: f64,
    /// kg/s
    pub flow_kg_s: f64,
}

/// 기수분리기: 정두 2상 유체에서 증기를 분리한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SteamSeparator {
    /// 분리기 압력 강하(bar)
    pub pressure_drop_bar: f64,
    /// 증기로 분리되는 질량 분율(0~1]
    pub steam_fraction: f64,
    /// 출구 증기 온도 감쇠 계수
    pub temperature_factor: f64,
}

impl Default for SteamSeparator {
    fn default() -> Self {
        Self {
            pressure_drop_bar: 2.0,
            steam_fraction: 0.9,
            temperature_factor: 0.995,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteamSeparatorOutput {
    /// bar
    pub outlet_pressure_bar: f64,
    /// kg/s
    pub steam_flow_kg_s: f64,
    /// °C, 소수점 셋째 자리 반올림
    pub steam_temp_c: f64,
}

impl SteamSeparator {
    pub fn validate(&self) -> PlantResult<()> {
        if !self.pressure_drop_bar.is_finite() || self.pressure_drop_bar < 0.0 {
            return Err(PlantError::config("기수분리기 압력 강하는 0 이상이어야 합니다."));
        }
        if !(self.steam_fraction > 0.0 && self.steam_fraction <= 1.0) {
            return Err(PlantError::config("증기 분율은 (0, 1] 범위여야 합니다."));
        }
        if !(self.temperature_factor > 0.0 && self.temperature_factor <= 1.0) {
            return Err(PlantError::config(
                "기수분리기 온도 계수는 (0, 1] 범위여야 합니다.",
            ));
        }
        Ok(())
    }
}

impl ProcessStage for SteamSeparator {
    type Input = SeparatorInput;
    type Output = SteamSeparatorOutput;

    fn name(&self) -> &'static str {
        "steam_separator"
    }

    fn transform(&self, input: &SeparatorInput) -> PlantResult<SteamSeparatorOutput> {
        Ok(SteamSeparatorOutput {
            outlet_pressure_bar: input.pressure_bar - self.pressure_drop_bar,
            steam_flow_kg_s: input.flow_kg_s * self.steam_fraction,
            steam_temp_c: round3(input.temp_c * self.temperature_factor),
        })
    }
}

/// 습분분리기: 터빈 전단에서 잔류 액적을 제거한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoistureSeparator {
    /// 압력 강하(bar)
    pub pressure_drop_bar: f64,
    /// 온도 감쇠 계수
    pub temperature_factor: f64,
    /// 유량 감쇠 계수
    pub flow_factor: f64,
}

impl Default for MoistureSeparator {
    fn default() -> Self {
        Self {
            pressure_drop_bar: 0.5,
            temperature_factor: 0.995,
            flow_factor: 0.99,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoistureSeparatorOutput {
    /// bar
    pub turbine_inlet_pressure_bar: f64,
    /// °C
    pub turbine_inlet_temp_c: f64,
    /// kg/s
    pub turbine_inlet_flow_kg_s: f64,
    /// kg/s. 배수 모델이 없으므로 항상 0.
    pub waste_water_flow_kg_s: f64,
}

impl MoistureSeparator {
    pub fn validate(&self) -> PlantResult<()> {
        if !self.pressure_drop_bar.is_finite() || self.pressure_drop_bar < 0.0 {
            return Err(PlantError::config("습분분리기 압력 강하는 0 이상이어야 합니다."));
        }
        if !(self.temperature_factor > 0.0 && self.temperature_factor <= 1.0) {
            return Err(PlantError::config(
                "습분분리기 온도 계수는 (0, 1] 범위여야 합니다.",
            ));
        }
        if !(self.flow_factor > 0.0 && self.flow_factor <= 1.0) {
            return Err(PlantError::config(
                "습분분리기 유량 계수는 (0, 1] 범위여야 합니다.",
            ));
        }
        Ok(())
    }

    /// 배수 유량. 아직 모델이 없다.
    pub fn waste_water(&self) -> f64 {
        0.0
    }
}

impl ProcessStage for MoistureSeparator {
    type Input = SeparatorInput;
    type Output = MoistureSeparatorOutput;

    fn name(&self) -> &'static str {
        "moisture_separator"
    }

    fn transform(&self, input: &SeparatorInput) -> PlantResult<MoistureSeparatorOutput> {
        Ok(MoistureSeparatorOutput {
            turbine_inlet_pressure_bar: input.pressure_bar - self.pressure_drop_bar,
            turbine_inlet_temp_c: input.temp_c * self.temperature_factor,
            turbine_inlet_flow_kg_s: input.flow_kg_s * self.flow_factor,
            waste_water_flow_kg_s: self.waste_water(),
        })
    }
}
