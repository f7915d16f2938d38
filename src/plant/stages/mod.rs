//! 발전소 공정 스테이지.
//!
//! 각 스테이지는 상태를 갖지 않는 순수 변환이다. 상류 값을 받아 하류 값을 돌려줄 뿐이며,
//! 정책 상수(압력 강하, 감쇠 계수, 효율 등)는 모두 스테이지의 이름 있는 필드로 둔다.

pub mod auxiliary;
pub mod condenser;
pub mod separator;
pub mod turbine;
pub mod wellhead;

pub use auxiliary::{
    CoolingTower, CoolingTowerInput, CoolingTowerOutput, Generator, GeneratorInput,
    GeneratorOutput, ReliefValve, ReliefValveInput, ReliefValveOutput,
};
pub use condenser::{Condenser, CondenserInput, CondenserModel, CondenserOutput, HeatBalance};
pub use separator::{
    MoistureSeparator, MoistureSeparatorOutput, SeparatorInput, SteamSeparator,
    SteamSeparatorOutput,
};
pub use turbine::{ExpansionModel, SteamTurbine, TurbineInput, TurbineOutput};
pub use wellhead::{Wellhead, WellheadInput, WellheadOutput};

use super::error::PlantResult;

/// 공정 스테이지가 제공하는 단일 기능: 입력 → 출력 변환.
pub trait ProcessStage {
    type Input;
    type Output;

    /// 로그·오류 메시지에 쓰는 스테이지 이름.
    fn name(&self) -> &'static str;

    /// 같은 입력에 대해 항상 같은 출력을 내야 한다.
    fn transform(&self, input: &Self::Input) -> PlantResult<Self::Output>;
}

/// 소수점 셋째 자리 반올림.
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
