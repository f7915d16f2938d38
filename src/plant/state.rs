//! 발전소 상태 레코드와 필드 이름 매핑.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::PlantError;

/// 외부 소비자에게 넘기는 상태 스냅샷. 키는 [`Field`] 이름 그대로이다.
pub type StateSnapshot = BTreeMap<&'static str, Option<f64>>;

/// 스테이지 사이의 유일한 통신 채널인 발전소 상태.
///
/// 단위는 필드마다 고정이다. `wellhead_pressure`는 게이지(bar g),
/// `condenser_pressure`는 절대압(bar a)이다. 파생 필드는 첫 스텝 전까지만 `None`이다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlantState {
    /// 정두 압력(bar g)
    pub wellhead_pressure: f64,
    /// 정두 온도(°C)
    pub wellhead_temp: f64,
    /// 정두 유량(kg/s)
    pub wellhead_flow: f64,
    /// 기수분리기 출구 압력(bar)
    pub separator_outlet_pressure: Option<f64>,
    /// 기수분리기 출구 증기 유량(kg/s)
    pub separator_outlet_steam_flow: Option<f64>,
    /// 기수분리기 출구 증기 온도(°C)
    pub separator_outlet_steam_temp: Option<f64>,
    /// 터빈 입구 압력(bar)
    pub turbine_inlet_pressure: Option<f64>,
    /// 터빈 입구 온도(°C)
    pub turbine_inlet_temp: Option<f64>,
    /// 터빈 입구 유량(kg/s)
    pub turbine_inlet_flow: Option<f64>,
    /// 터빈 기계 출력(MW)
    pub turbine_out_power: Option<f64>,
    /// 복수기 압력(bar a). 다음 스텝의 터빈 배압으로 쓰인다.
    pub condenser_pressure: f64,
    /// 복수기 온도(°C)
    pub condenser_temp: f64,
    pub waste_water_flow: Option<f64>,
    pub valve_opening: Option<f64>,
    pub electric_power_output: Option<f64>,
}

/// 엔진 생성 시 채워지는 초기 조건.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialConditions {
    /// bar g
    pub wellhead_pressure: f64,
    /// °C
    pub wellhead_temp: f64,
    /// kg/s
    pub wellhead_flow: f64,
    /// bar a
    pub condenser_pressure: f64,
    /// °C
    pub condenser_temp: f64,
}

impl Default for InitialConditions {
    fn default() -> Self {
        Self {
            wellhead_pressure: 10.5,
            wellhead_temp: 186.1,
            wellhead_flow: 180.0,
            condenser_pressure: 0.06,
            condenser_temp: 35.0,
        }
    }
}

impl InitialConditions {
    pub fn validate(&self) -> Result<(), PlantError> {
        let values = [
            (Field::WellheadPressure, self.wellhead_pressure),
            (Field::WellheadTemp, self.wellhead_temp),
            (Field::WellheadFlow, self.wellhead_flow),
            (Field::CondenserPressure, self.condenser_pressure),
            (Field::CondenserTemp, self.condenser_temp),
        ];
        for (field, value) in values {
            if !value.is_finite() {
                return Err(PlantError::config(format!(
                    "초기값 {field}은(는) 유한한 수여야 합니다."
                )));
            }
        }
        if self.wellhead_flow < 0.0 {
            return Err(PlantError::config("초기 정두 유량은 음수일 수 없습니다."));
        }
        if self.condenser_pressure <= 0.0 {
            return Err(PlantError::config("초기 복수기 압력(bar a)은 양수여야 합니다."));
        }
        Ok(())
    }
}

impl PlantState {
    /// 초기 조건으로 상태를 만든다. 파생 필드는 모두 미계산(`None`).
    pub fn from_initial(initial: &InitialConditions) -> Self {
        Self {
            wellhead_pressure: initial.wellhead_pressure,
            wellhead_temp: initial.wellhead_temp,
            wellhead_flow: initial.wellhead_flow,
            separator_outlet_pressure: None,
            separator_outlet_steam_flow: None,
            separator_outlet_steam_temp: None,
            turbine_inlet_pressure: None,
            turbine_inlet_temp: None,
            turbine_inlet_flow: None,
            turbine_out_power: None,
            condenser_pressure: initial.condenser_pressure,
            condenser_temp: initial.condenser_temp,
            waste_water_flow: None,
            valve_opening: None,
            electric_power_output: None,
        }
    }

    /// 이름으로 필드 값을 읽는다.
    pub fn get(&self, field: Field) -> Option<f64> {
        match field {
            Field::WellheadPressure => Some(self.wellhead_pressure),
            Field::WellheadTemp => Some(self.wellhead_temp),
            Field::WellheadFlow => Some(self.wellhead_flow),
            Field::SeparatorOutletPressure => self.separator_outlet_pressure,
            Field::SeparatorOutletSteamFlow => self.separator_outlet_steam_flow,
            Field::SeparatorOutletSteamTemp => self.separator_outlet_steam_temp,
            Field::TurbineInletPressure => self.turbine_inlet_pressure,
            Field::TurbineInletTemp => self.turbine_inlet_temp,
            Field::TurbineInletFlow => self.turbine_inlet_flow,
            Field::TurbineOutPower => self.turbine_out_power,
            Field::CondenserPressure => Some(self.condenser_pressure),
            Field::CondenserTemp => Some(self.condenser_temp),
            Field::WasteWaterFlow => self.waste_water_flow,
            Field::ValveOpening => self.valve_opening,
            Field::ElectricPowerOutput => self.electric_power_output,
        }
    }

    /// 필드 이름 → 값 매핑으로 복사본을 만든다.
    pub fn snapshot(&self) -> StateSnapshot {
        Field::ALL
            .iter()
            .map(|&field| (field.as_str(), self.get(field)))
            .collect()
    }
}

/// [`PlantState`]의 필드 이름.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    WellheadPressure,
    WellheadTemp,
    WellheadFlow,
    SeparatorOutletPressure,
    SeparatorOutletSteamFlow,
    SeparatorOutletSteamTemp,
    TurbineInletPressure,
    TurbineInletTemp,
    TurbineInletFlow,
    TurbineOutPower,
    CondenserPressure,
    CondenserTemp,
    WasteWaterFlow,
    ValveOpening,
    ElectricPowerOutput,
}

impl Field {
    pub const ALL: [Field; 15] = [
        Field::WellheadPressure,
        Field::WellheadTemp,
        Field::WellheadFlow,
        Field::SeparatorOutletPressure,
        Field::SeparatorOutletSteamFlow,
        Field::SeparatorOutletSteamTemp,
        Field::TurbineInletPressure,
        Field::TurbineInletTemp,
        Field::TurbineInletFlow,
        Field::TurbineOutPower,
        Field::CondenserPressure,
        Field::CondenserTemp,
        Field::WasteWaterFlow,
        Field::ValveOpening,
        Field::ElectricPowerOutput,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::WellheadPressure => "wellhead_pressure",
            Field::WellheadTemp => "wellhead_temp",
            Field::WellheadFlow => "wellhead_flow",
            Field::SeparatorOutletPressure => "separator_outlet_pressure",
            Field::SeparatorOutletSteamFlow => "separator_outlet_steam_flow",
            Field::SeparatorOutletSteamTemp => "separator_outlet_steam_temp",
            Field::TurbineInletPressure => "turbine_inlet_pressure",
            Field::TurbineInletTemp => "turbine_inlet_temp",
            Field::TurbineInletFlow => "turbine_inlet_flow",
            Field::TurbineOutPower => "turbine_out_power",
            Field::CondenserPressure => "condenser_pressure",
            Field::CondenserTemp => "condenser_temp",
            Field::WasteWaterFlow => "waste_water_flow",
            Field::ValveOpening => "valve_opening",
            Field::ElectricPowerOutput => "electric_power_output",
        }
    }

    /// 외부(제어 패널 등)에서 설정 가능한 입력 필드인지 여부.
    pub fn is_input(&self) -> bool {
        matches!(
            self,
            Field::WellheadPressure | Field::WellheadTemp | Field::WellheadFlow
        )
    }

    /// 표시용 단위 문자열.
    pub fn unit(&self) -> &'static str {
        match self {
            Field::WellheadPressure => "bar g",
            Field::CondenserPressure => "bar a",
            Field::SeparatorOutletPressure | Field::TurbineInletPressure => "bar",
            Field::WellheadTemp
            | Field::SeparatorOutletSteamTemp
            | Field::TurbineInletTemp
            | Field::CondenserTemp => "°C",
            Field::WellheadFlow
            | Field::SeparatorOutletSteamFlow
            | Field::TurbineInletFlow
            | Field::WasteWaterFlow => "kg/s",
            Field::TurbineOutPower | Field::ElectricPowerOutput => "MW",
            Field::ValveOpening => "-",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = PlantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == name)
            .ok_or_else(|| PlantError::InvalidField(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_keys_match_field_names() {
        let state = PlantState::from_initial(&InitialConditions::default());
        let snap = state.snapshot();
        assert_eq!(snap.len(), Field::ALL.len());
        for field in Field::ALL {
            assert!(snap.contains_key(field.as_str()), "missing {field}");
            assert_eq!(field.as_str().parse::<Field>().ok(), Some(field));
        }
        assert_eq!(snap["wellhead_pressure"], Some(10.5));
        assert_eq!(snap["turbine_out_power"], None);
    }
}
