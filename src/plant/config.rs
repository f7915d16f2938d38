//! 엔진 생성 파라미터. 설정 파일의 `[plant]` 테이블과 대응한다.

use serde::{Deserialize, Serialize};

use super::controls::ControlSurface;
use super::error::{PlantError, PlantResult};
use super::stages::{
    CondenserModel, Condenser, ExpansionModel, MoistureSeparator, SteamSeparator, SteamTurbine,
};
use super::state::InitialConditions;

/// 터빈 트레인 설정.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurbineConfig {
    pub efficiency: f64,
    pub expansion: ExpansionModel,
    /// 병렬 터빈 유닛 수. 습분분리기 유량을 균등 분배하며
    /// `turbine_out_power`는 유닛 1기의 출력이다.
    pub units: u32,
}

impl Default for TurbineConfig {
    fn default() -> Self {
        let turbine = SteamTurbine::default();
        Self {
            efficiency: turbine.efficiency,
            expansion: turbine.expansion,
            units: 4,
        }
    }
}

impl TurbineConfig {
    pub fn turbine(&self) -> PlantResult<SteamTurbine> {
        SteamTurbine::new(self.efficiency, self.expansion)
    }
}

/// 발전소 전체 파라미터.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlantConfig {
    pub initial: InitialConditions,
    pub steam_separator: SteamSeparator,
    pub moisture_separator: MoistureSeparator,
    pub turbine: TurbineConfig,
    pub condenser: CondenserModel,
    pub controls: ControlSurface,
}

impl PlantConfig {
    /// 모든 파라미터를 검증한다. 실패 시 엔진을 만들 수 없다.
    pub fn validate(&self) -> PlantResult<()> {
        self.initial.validate()?;
        self.steam_separator.validate()?;
        self.moisture_separator.validate()?;
        self.turbine.turbine()?;
        if self.turbine.units == 0 {
            return Err(PlantError::config("터빈 유닛 수는 1 이상이어야 합니다."));
        }
        Condenser::new(self.condenser)?;
        self.controls.validate()?;
        Ok(())
    }
}
