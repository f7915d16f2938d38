//! 제어 패널 입력(터빈 부하, 냉각탑 팬 속도).
//!
//! 제어 입력은 상태 필드가 아니다. 설정 즉시 대응하는 파생 필드를 아래 식으로 덮어쓰며,
//! 그 값은 다음 스텝이 해당 스테이지를 다시 계산할 때까지 유지된다.
//!
//! ```text
//! turbine_out_power = load / 100 × max_turbine_power_mw
//! condenser_temp    = base_condenser_temp_c + (100 − fan) / 100 × fan_temp_range_c
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{PlantError, PlantResult};
use super::state::{Field, PlantState};

/// 제어 입력 이름.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// 터빈 부하(%)
    TurbineLoad,
    /// 냉각탑 팬 속도(%)
    CoolingFanSpeed,
}

impl Control {
    pub const ALL: [Control; 2] = [Control::TurbineLoad, Control::CoolingFanSpeed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Control::TurbineLoad => "turbine_load",
            Control::CoolingFanSpeed => "cooling_fan_speed",
        }
    }

    /// 값을 덮어쓰는 파생 필드.
    pub fn target(&self) -> Field {
        match self {
            Control::TurbineLoad => Field::TurbineOutPower,
            Control::CoolingFanSpeed => Field::CondenserTemp,
        }
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Control {
    type Err = PlantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Control::ALL
            .iter()
            .copied()
            .find(|control| control.as_str() == name)
            .ok_or_else(|| PlantError::InvalidField(name.to_string()))
    }
}

/// 제어 입력 → 파생 필드 환산 계수.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlSurface {
    /// 부하 100 %에 대응하는 터빈 출력(MW)
    pub max_turbine_power_mw: f64,
    /// 팬 100 %일 때의 복수기 온도(°C)
    pub base_condenser_temp_c: f64,
    /// 팬 0 %일 때 더해지는 온도 폭(°C)
    pub fan_temp_range_c: f64,
}

impl Default for ControlSurface {
    fn default() -> Self {
        Self {
            max_turbine_power_mw: 45.0,
            base_condenser_temp_c: 35.0,
            fan_temp_range_c: 10.0,
        }
    }
}

/// 마지막으로 설정된 제어 입력(%). 설정한 적 없으면 `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControlSettings {
    pub turbine_load: Option<f64>,
    pub cooling_fan_speed: Option<f64>,
}

impl ControlSurface {
    pub fn validate(&self) -> PlantResult<()> {
        let values = [
            ("max_turbine_power_mw", self.max_turbine_power_mw),
            ("base_condenser_temp_c", self.base_condenser_temp_c),
            ("fan_temp_range_c", self.fan_temp_range_c),
        ];
        for (name, value) in values {
            if !value.is_finite() || value < 0.0 {
                return Err(PlantError::config(format!(
                    "제어 계수 {name}은(는) 0 이상의 유한한 수여야 합니다: {value}"
                )));
            }
        }
        Ok(())
    }

    /// 0~100 % 범위를 확인하고 대응하는 파생 필드 값을 계산한다.
    pub fn derived_value(&self, control: Control, percent: f64) -> PlantResult<f64> {
        if !percent.is_finite() || !(0.0..=100.0).contains(&percent) {
            return Err(PlantError::InvalidInput {
                field: control.as_str(),
                value: percent,
            });
        }
        Ok(match control {
            Control::TurbineLoad => percent / 100.0 * self.max_turbine_power_mw,
            Control::CoolingFanSpeed => {
                self.base_condenser_temp_c + (100.0 - percent) / 100.0 * self.fan_temp_range_c
            }
        })
    }

    /// 제어 입력을 상태에 반영한다. 실패하면 상태와 설정값 모두 그대로이다.
    pub fn apply(
        &self,
        control: Control,
        percent: f64,
        state: &mut PlantState,
        settings: &mut ControlSettings,
    ) -> PlantResult<f64> {
        let value = self.derived_value(control, percent)?;
        match control {
            Control::TurbineLoad => {
                state.turbine_out_power = Some(value);
                settings.turbine_load = Some(percent);
            }
            Control::CoolingFanSpeed => {
                state.condenser_temp = value;
                settings.cooling_fan_speed = Some(percent);
            }
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formulas_match_panel_scale() {
        let surface = ControlSurface::default();
        assert_eq!(surface.derived_value(Control::TurbineLoad, 100.0), Ok(45.0));
        assert_eq!(surface.derived_value(Control::TurbineLoad, 0.0), Ok(0.0));
        assert_eq!(surface.derived_value(Control::CoolingFanSpeed, 100.0), Ok(35.0));
        assert_eq!(surface.derived_value(Control::CoolingFanSpeed, 0.0), Ok(45.0));
    }

    #[test]
    fn percent_outside_range_is_invalid_input() {
        let surface = ControlSurface::default();
        for bad in [-1.0, 100.5, f64::NAN] {
            assert!(matches!(
                surface.derived_value(Control::CoolingFanSpeed, bad),
                Err(PlantError::InvalidInput {
                    field: "cooling_fan_speed",
                    ..
                })
            ));
        }
    }

    #[test]
    fn names_do_not_collide_with_state_fields() {
        for control in Control::ALL {
            assert_eq!(control.as_str().parse::<Control>().ok(), Some(control));
            assert!(control.as_str().parse::<Field>().is_err());
        }
    }
}
