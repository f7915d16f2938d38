//! 증기 터빈 스테이지. 공정 체인에서 유일하게 실제 증기 물성을 쓰는 계산이다.

use serde::{Deserialize, Serialize};

use super::{round3, ProcessStage};
use crate::plant::error::{PlantError, PlantResult};
use crate::steam::{enthalpy_ps, properties_at};
use crate::units::{bar_to_mpa, celsius_to_kelvin};

/// 이상(등엔트로피) 엔탈피 강하를 구하는 방식.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpansionModel {
    /// `Δh_ideal = h_in × (P_in − P_out) / P_in`. 압력비에 비례하는 근사식.
    #[default]
    Proportional,
    /// 입구 엔트로피를 유지한 채 배압에서의 엔탈피를 IF97로 구한다.
    Isentropic,
}

/// 증기 터빈.
///
/// ```text
/// h_out = h_in − η × Δh_ideal
/// W[MW] = ṁ × (h_in − h_out) / 1000
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SteamTurbine {
    /// 등엔트로피 효율 [0, 1]
    pub efficiency: f64,
    pub expansion: ExpansionModel,
}

impl Default for SteamTurbine {
    fn default() -> Self {
        Self {
            efficiency: 0.223,
            expansion: ExpansionModel::Proportional,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurbineInput {
    /// bar
    pub inlet_pressure_bar: f64,
    /// °C
    pub inlet_temp_c: f64,
    /// kg/s
    pub inlet_flow_kg_s: f64,
    /// 배압(bar)
    pub outlet_pressure_bar: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurbineOutput {
    /// MW, 소수점 셋째 자리 반올림
    pub mechanical_power_mw: f64,
    /// kJ/kg
    pub inlet_enthalpy_kj_per_kg: f64,
    /// kJ/kg
    pub outlet_enthalpy_kj_per_kg: f64,
}

impl SteamTurbine {
    /// 효율을 검증해 터빈을 만든다.
    pub fn new(efficiency: f64, expansion: ExpansionModel) -> PlantResult<Self> {
        let turbine = Self {
            efficiency,
            expansion,
        };
        turbine.validate()?;
        Ok(turbine)
    }

    pub fn validate(&self) -> PlantResult<()> {
        if !(0.0..=1.0).contains(&self.efficiency) {
            return Err(PlantError::config(format!(
                "터빈 효율은 [0, 1] 범위여야 합니다: {}",
                self.efficiency
            )));
        }
        Ok(())
    }

    fn check_operating_point(&self, input: &TurbineInput) -> PlantResult<()> {
        let stage = self.name();
        let p_in = input.inlet_pressure_bar;
        let p_out = input.outlet_pressure_bar;
        if !p_in.is_finite() || p_in <= 0.0 {
            return Err(PlantError::operating_point(
                stage,
                format!("입구 압력은 양수여야 합니다: {p_in} bar"),
            ));
        }
        if !p_out.is_finite() || p_out < 0.0 {
            return Err(PlantError::operating_point(
                stage,
                format!("배압은 0 이상이어야 합니다: {p_out} bar"),
            ));
        }
        if p_out > p_in {
            return Err(PlantError::operating_point(
                stage,
                format!("배압 {p_out} bar가 입구 압력 {p_in} bar보다 높습니다."),
            ));
        }
        if !input.inlet_flow_kg_s.is_finite() || input.inlet_flow_kg_s < 0.0 {
            return Err(PlantError::operating_point(
                stage,
                format!("증기 유량은 0 이상이어야 합니다: {} kg/s", input.inlet_flow_kg_s),
            ));
        }
        Ok(())
    }
}

impl ProcessStage for SteamTurbine {
    type Input = TurbineInput;
    type Output = TurbineOutput;

    fn name(&self) -> &'static str {
        "steam_turbine"
    }

    fn transform(&self, input: &TurbineInput) -> PlantResult<TurbineOutput> {
        self.check_operating_point(input)?;

        let p_in = bar_to_mpa(input.inlet_pressure_bar);
        let p_out = bar_to_mpa(input.outlet_pressure_bar);
        let t_in = celsius_to_kelvin(input.inlet_temp_c);

        let inlet = properties_at(p_in, t_in)?;
        let h_in = inlet.enthalpy_kj_per_kg;

        let h_drop_ideal = if p_out == p_in {
            0.0
        } else {
            match self.expansion {
                ExpansionModel::Proportional => h_in * (p_in - p_out) / p_in,
                ExpansionModel::Isentropic => {
                    let h_out_s = enthalpy_ps(p_out, inlet.entropy_kj_per_kg_k)?;
                    (h_in - h_out_s).max(0.0)
                }
            }
        };
        let h_out = h_in - self.efficiency * h_drop_ideal;

        // kg/s × kJ/kg = kW
        let power_kw = input.inlet_flow_kg_s * (h_in - h_out);
        Ok(TurbineOutput {
            mechanical_power_mw: round3(power_kw / 1000.0),
            inlet_enthalpy_kj_per_kg: h_in,
            outlet_enthalpy_kj_per_kg: h_out,
        })
    }
}
