use super::ProcessStage;
use crate::plant::error::PlantResult;

/// 정두(생산정) 스테이지.
///
/// 출력은 압력 × 유량이다. 엔탈피 유속을 대신하는 단순 지표이며 실제 물리량이 아니다.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Wellhead;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WellheadInput {
    /// bar g
    pub pressure_bar_g: f64,
    /// kg/s
    pub flow_kg_s: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WellheadOutput {
    /// bar·kg/s
    pub steam_from_wellhead: f64,
}

impl ProcessStage for Wellhead {
    type Input = WellheadInput;
    type Output = WellheadOutput;

    fn name(&self) -> &'static str {
        "wellhead"
    }

    fn transform(&self, input: &WellheadInput) -> PlantResult<WellheadOutput> {
        Ok(WellheadOutput {
            steam_from_wellhead: input.pressure_bar_g * input.flow_kg_s,
        })
    }
}
