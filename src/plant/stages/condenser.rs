//! 복수기 스테이지.
//!
//! 기본 모델은 입력과 무관하게 고정값(0.1 bar a, 40 °C)을 돌려주는 자리표시자이다.
//! `HeatBalance` 모델은 같은 입출력 계약 위에서 냉각수 열수지로 복수 압력을 계산한다.

use serde::{Deserialize, Serialize};

use super::ProcessStage;
use crate::plant::error::{PlantError, PlantResult};
use crate::steam::if97::saturation_pressure_bar_abs_from_temp_c;

/// 물의 정압비열(kJ/kg·K)
const CP_WATER: f64 = 4.186;

/// 냉각수 열수지 모델 파라미터.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatBalance {
    /// 냉각수 입구 온도(°C)
    pub cooling_water_inlet_c: f64,
    /// 냉각수 질량 유량(kg/s)
    pub cooling_water_flow_kg_s: f64,
    /// 총괄 전열 능력 UA(kW/K)
    pub ua_kw_per_k: f64,
    /// 응축 잠열(kJ/kg)
    pub latent_heat_kj_per_kg: f64,
}

impl Default for HeatBalance {
    fn default() -> Self {
        Self {
            cooling_water_inlet_c: 25.0,
            cooling_water_flow_kg_s: 4000.0,
            ua_kw_per_k: 30_000.0,
            latent_heat_kj_per_kg: 2350.0,
        }
    }
}

/// 복수기 계산 방식.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum CondenserModel {
    /// 입력을 무시하고 고정값을 반환한다.
    Fixed { pressure_bar_abs: f64, temp_c: f64 },
    HeatBalance(HeatBalance),
}

impl Default for CondenserModel {
    fn default() -> Self {
        CondenserModel::Fixed {
            pressure_bar_abs: 0.1,
            temp_c: 40.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Condenser {
    pub model: CondenserModel,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CondenserInput {
    /// 유입 증기 유량(kg/s)
    pub inlet_flow_kg_s: f64,
    /// 유입 증기 온도(°C). 엔진은 터빈 입구 온도를 넘긴다.
    /// `HeatBalance` 모델은 이 값을 응축 온도의 상한으로만 쓴다.
    pub inlet_temp_c: f64,
    /// 스텝 길이(s). 두 모델 모두 정상상태라 사용하지 않는다.
    pub dt_s: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CondenserOutput {
    /// bar a
    pub pressure_bar_abs: f64,
    /// °C
    pub temp_c: f64,
    /// 열량(kW). 고정 모델에서는 `None`.
    pub heat_duty_kw: Option<f64>,
}

impl Condenser {
    pub fn new(model: CondenserModel) -> PlantResult<Self> {
        let condenser = Self { model };
        condenser.validate()?;
        Ok(condenser)
    }

    pub fn validate(&self) -> PlantResult<()> {
        match self.model {
            CondenserModel::Fixed {
                pressure_bar_abs,
                temp_c,
            } => {
                if !pressure_bar_abs.is_finite() || pressure_bar_abs <= 0.0 {
                    return Err(PlantError::config("복수기 고정 압력(bar a)은 양수여야 합니다."));
                }
                if !temp_c.is_finite() {
                    return Err(PlantError::config("복수기 고정 온도는 유한한 수여야 합니다."));
                }
            }
            CondenserModel::HeatBalance(hb) => {
                if !(0.0..100.0).contains(&hb.cooling_water_inlet_c) {
                    return Err(PlantError::config("냉각수 입구 온도는 0~100°C 범위여야 합니다."));
                }
                if !positive(hb.cooling_water_flow_kg_s) {
                    return Err(PlantError::config("냉각수 유량은 유한한 양수여야 합니다."));
                }
                if !positive(hb.ua_kw_per_k) {
                    return Err(PlantError::config("UA 값은 유한한 양수여야 합니다."));
                }
                if !positive(hb.latent_heat_kj_per_kg) {
                    return Err(PlantError::config("응축 잠열은 유한한 양수여야 합니다."));
                }
            }
        }
        Ok(())
    }
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

impl HeatBalance {
    /// 냉각수 온도 상승과 유용도(ε = 1 − e^−NTU)로 응축 온도를 구하고,
    /// 그 온도의 포화압력을 복수기 압력으로 쓴다.
    fn solve(&self, input: &CondenserInput) -> PlantResult<CondenserOutput> {
        let q_kw = input.inlet_flow_kg_s * self.latent_heat_kj_per_kg;
        let c_cw = self.cooling_water_flow_kg_s * CP_WATER;
        let rise = q_kw / c_cw;
        let effectiveness = 1.0 - (-self.ua_kw_per_k / c_cw).exp();

        // 응축 온도는 유입 증기 온도를 넘을 수 없다.
        let t_cond = (self.cooling_water_inlet_c + rise / effectiveness).min(input.inlet_temp_c);
        let pressure_bar_abs = saturation_pressure_bar_abs_from_temp_c(t_cond)?;
        Ok(CondenserOutput {
            pressure_bar_abs,
            temp_c: t_cond,
            heat_duty_kw: Some(q_kw),
        })
    }
}

impl ProcessStage for Condenser {
    type Input = CondenserInput;
    type Output = CondenserOutput;

    fn name(&self) -> &'static str {
        "condenser"
    }

    fn transform(&self, input: &CondenserInput) -> PlantResult<CondenserOutput> {
        match self.model {
            CondenserModel::Fixed {
                pressure_bar_abs,
                temp_c,
            } => Ok(CondenserOutput {
                pressure_bar_abs,
                temp_c,
                heat_duty_kw: None,
            }),
            CondenserModel::HeatBalance(hb) => {
                if !input.inlet_flow_kg_s.is_finite() || input.inlet_flow_kg_s < 0.0 {
                    return Err(PlantError::operating_point(
                        self.name(),
                        format!("유입 증기 유량은 0 이상이어야 합니다: {}", input.inlet_flow_kg_s),
                    ));
                }
                hb.solve(input)
            }
        }
    }
}
