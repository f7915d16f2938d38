//! 냉각탑·안전밸브·발전기.
//!
//! 확장 지점만 정의해 둔 자리표시자 스테이지로, 항상 0을 반환한다.
//! 실제 모델로 바꿀 때는 이 파일의 변환만 고치면 된다.

use super::ProcessStage;
use crate::plant::error::PlantResult;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CoolingTower;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoolingTowerInput {
    /// 순환수 입구 온도(°C)
    pub water_in_c: f64,
    /// 순환수 유량(kg/s)
    pub water_flow_kg_s: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoolingTowerOutput {
    /// kW
    pub heat_rejected_kw: f64,
}

impl ProcessStage for CoolingTower {
    type Input = CoolingTowerInput;
    type Output = CoolingTowerOutput;

    fn name(&self) -> &'static str {
        "cooling_tower"
    }

    fn transform(&self, _input: &CoolingTowerInput) -> PlantResult<CoolingTowerOutput> {
        Ok(CoolingTowerOutput {
            heat_rejected_kw: 0.0,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReliefValve;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReliefValveInput {
    /// bar
    pub upstream_pressure_bar: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReliefValveOutput {
    /// 개도(0~1)
    pub valve_opening: f64,
}

impl ProcessStage for ReliefValve {
    type Input = ReliefValveInput;
    type Output = ReliefValveOutput;

    fn name(&self) -> &'static str {
        "relief_valve"
    }

    fn transform(&self, _input: &ReliefValveInput) -> PlantResult<ReliefValveOutput> {
        Ok(ReliefValveOutput { valve_opening: 0.0 })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Generator;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorInput {
    /// MW
    pub mechanical_power_mw: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorOutput {
    /// MW
    pub electric_power_mw: f64,
}

impl ProcessStage for Generator {
    type Input = GeneratorInput;
    type Output = GeneratorOutput;

    fn name(&self) -> &'static str {
        "generator"
    }

    fn transform(&self, _input: &GeneratorInput) -> PlantResult<GeneratorOutput> {
        Ok(GeneratorOutput {
            electric_power_mw: 0.0,
        })
    }
}
