//! 시뮬레이션 엔진: 상태 레코드와 고정 순서의 스테이지 파이프라인을 소유한다.

use tracing::{debug, warn};

use super::config::PlantConfig;
use super::controls::{Control, ControlSettings, ControlSurface};
use super::error::{PlantError, PlantResult};
use super::stages::{
    Condenser, CondenserInput, CoolingTower, CoolingTowerInput, Generator, GeneratorInput,
    MoistureSeparator, ProcessStage, ReliefValve, ReliefValveInput, SeparatorInput,
    SteamSeparator, SteamTurbine, TurbineInput, Wellhead, WellheadInput,
};
use super::state::{Field, InitialConditions, PlantState, StateSnapshot};

/// 엔진 수명 단계.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnginePhase {
    /// 기본 상태로 채워졌고 아직 스텝이 없음
    Initialized,
    /// 한 번 이상 스텝이 실행됨
    Stepped,
}

/// 발전소 시뮬레이션 엔진.
///
/// 스텝마다 정두 → 기수분리기 → 습분분리기 → 안전밸브 → 터빈 → 발전기 → 복수기 → 냉각탑
/// 순으로 변환을 적용한다. 모든 스테이지가 성공해야 상태가 바뀐다.
#[derive(Debug, Clone)]
pub struct SimulationEngine {
    initial: InitialConditions,
    state: PlantState,
    wellhead: Wellhead,
    steam_separator: SteamSeparator,
    moisture_separator: MoistureSeparator,
    relief_valve: ReliefValve,
    turbine: SteamTurbine,
    turbine_units: u32,
    generator: Generator,
    condenser: Condenser,
    cooling_tower: CoolingTower,
    controls: ControlSurface,
    control_settings: ControlSettings,
    steps: u64,
    elapsed_s: f64,
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationEngine {
    /// 기본 파라미터로 엔진을 만든다.
    pub fn new() -> Self {
        Self::from_valid_config(&PlantConfig::default())
    }

    /// 설정을 검증한 뒤 엔진을 만든다.
    pub fn from_config(config: &PlantConfig) -> PlantResult<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    /// `config`는 이미 검증된 것으로 본다. 기본 설정도 같은 경로로 만든다.
    fn from_valid_config(config: &PlantConfig) -> Self {
        Self {
            initial: config.initial,
            state: PlantState::from_initial(&config.initial),
            wellhead: Wellhead,
            steam_separator: config.steam_separator,
            moisture_separator: config.moisture_separator,
            relief_valve: ReliefValve,
            turbine: SteamTurbine {
                efficiency: config.turbine.efficiency,
                expansion: config.turbine.expansion,
            },
            turbine_units: config.turbine.units,
            generator: Generator,
            condenser: Condenser {
                model: config.condenser,
            },
            cooling_tower: CoolingTower,
            controls: config.controls,
            control_settings: ControlSettings::default(),
            steps: 0,
            elapsed_s: 0.0,
        }
    }

    pub fn phase(&self) -> EnginePhase {
        if self.steps == 0 {
            EnginePhase::Initialized
        } else {
            EnginePhase::Stepped
        }
    }

    pub fn steps_taken(&self) -> u64 {
        self.steps
    }

    /// 누적 시뮬레이션 시간(s)
    pub fn elapsed_s(&self) -> f64 {
        self.elapsed_s
    }

    /// 현재 상태의 복사본.
    pub fn state(&self) -> PlantState {
        self.state
    }

    /// 필드 이름 → 값 매핑 복사본.
    pub fn get_state(&self) -> StateSnapshot {
        self.state.snapshot()
    }

    /// 외부 입력을 설정한다. 정두 입력 필드와 제어 입력(`turbine_load`,
    /// `cooling_fan_speed`)만 받으며 파생 필드나 알 수 없는 이름은 거부한다.
    pub fn set_input(&mut self, name: &str, value: f64) -> PlantResult<()> {
        if let Ok(control) = name.parse::<Control>() {
            return self.set_control(control, value);
        }
        let field: Field = name.parse()?;
        self.set_field(field, value)
    }

    /// 제어 입력(%)을 설정하고 대응 파생 필드를 즉시 덮어쓴다.
    pub fn set_control(&mut self, control: Control, percent: f64) -> PlantResult<()> {
        let value =
            self.controls
                .apply(control, percent, &mut self.state, &mut self.control_settings)?;
        debug!(
            control = control.as_str(),
            percent,
            field = control.target().as_str(),
            value,
            "control applied"
        );
        Ok(())
    }

    /// 마지막으로 설정된 제어 입력.
    pub fn control_settings(&self) -> ControlSettings {
        self.control_settings
    }

    pub fn set_field(&mut self, field: Field, value: f64) -> PlantResult<()> {
        let slot = match field {
            Field::WellheadPressure => &mut self.state.wellhead_pressure,
            Field::WellheadTemp => &mut self.state.wellhead_temp,
            Field::WellheadFlow => &mut self.state.wellhead_flow,
            other => return Err(PlantError::InvalidField(other.as_str().to_string())),
        };
        if !value.is_finite() {
            return Err(PlantError::InvalidInput {
                field: field.as_str(),
                value,
            });
        }
        *slot = value;
        debug!(field = field.as_str(), value, "input updated");
        Ok(())
    }

    /// 초기 조건으로 되돌리고 스텝 카운터를 0으로 만든다.
    pub fn reset(&mut self) {
        self.state = PlantState::from_initial(&self.initial);
        self.control_settings = ControlSettings::default();
        self.steps = 0;
        self.elapsed_s = 0.0;
    }

    /// 한 스텝 진행한다. 실패하면 상태는 호출 전과 동일하다.
    pub fn step(&mut self, dt: f64) -> PlantResult<()> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(PlantError::InvalidTimeStep(dt));
        }
        match self.advance(&self.state, dt) {
            Ok(next) => {
                self.state = next;
                self.steps += 1;
                self.elapsed_s += dt;
                debug!(
                    step = self.steps,
                    elapsed_s = self.elapsed_s,
                    power_mw = ?next.turbine_out_power,
                    condenser_bar_a = next.condenser_pressure,
                    "step committed"
                );
                Ok(())
            }
            Err(err) => {
                warn!(step = self.steps + 1, error = %err, "step aborted, state unchanged");
                Err(err)
            }
        }
    }

    /// 현재 상태에서 다음 상태를 계산한다. `self`는 읽기만 한다.
    fn advance(&self, current: &PlantState, dt: f64) -> PlantResult<PlantState> {
        let mut next = *current;

        let wellhead = self.wellhead.transform(&WellheadInput {
            pressure_bar_g: current.wellhead_pressure,
            flow_kg_s: current.wellhead_flow,
        })?;
        debug!(
            stage = self.wellhead.name(),
            steam_from_wellhead = wellhead.steam_from_wellhead
        );

        let separated = self.steam_separator.transform(&SeparatorInput {
            pressure_bar: current.wellhead_pressure,
            temp_c: current.wellhead_temp,
            flow_kg_s: current.wellhead_flow,
        })?;
        next.separator_outlet_pressure = Some(separated.outlet_pressure_bar);
        next.separator_outlet_steam_flow = Some(separated.steam_flow_kg_s);
        next.separator_outlet_steam_temp = Some(separated.steam_temp_c);

        let dried = self.moisture_separator.transform(&SeparatorInput {
            pressure_bar: separated.outlet_pressure_bar,
            temp_c: separated.steam_temp_c,
            flow_kg_s: separated.steam_flow_kg_s,
        })?;
        next.turbine_inlet_pressure = Some(dried.turbine_inlet_pressure_bar);
        next.turbine_inlet_temp = Some(dried.turbine_inlet_temp_c);
        next.turbine_inlet_flow = Some(dried.turbine_inlet_flow_kg_s);
        next.waste_water_flow = Some(dried.waste_water_flow_kg_s);

        let relief = self.relief_valve.transform(&ReliefValveInput {
            upstream_pressure_bar: dried.turbine_inlet_pressure_bar,
        })?;
        next.valve_opening = Some(relief.valve_opening);

        // 배압은 이전 스텝의 복수기 압력이다.
        let turbine = self.turbine.transform(&TurbineInput {
            inlet_pressure_bar: dried.turbine_inlet_pressure_bar,
            inlet_temp_c: dried.turbine_inlet_temp_c,
            inlet_flow_kg_s: dried.turbine_inlet_flow_kg_s / f64::from(self.turbine_units),
            outlet_pressure_bar: current.condenser_pressure,
        })?;
        debug!(
            stage = self.turbine.name(),
            h_in = turbine.inlet_enthalpy_kj_per_kg,
            h_out = turbine.outlet_enthalpy_kj_per_kg,
            power_mw = turbine.mechanical_power_mw
        );
        next.turbine_out_power = Some(turbine.mechanical_power_mw);

        let generator = self.generator.transform(&GeneratorInput {
            mechanical_power_mw: turbine.mechanical_power_mw,
        })?;
        next.electric_power_output = Some(generator.electric_power_mw);

        // 응축 온도 상한으로 터빈 입구 증기 온도를 쓴다. 배기 포화온도는
        // 이전 스텝 배압에서 정해지므로 상한으로 쓰면 복수기 압력이 초기값에 고정된다.
        let condensed = self.condenser.transform(&CondenserInput {
            inlet_flow_kg_s: dried.turbine_inlet_flow_kg_s,
            inlet_temp_c: dried.turbine_inlet_temp_c,
            dt_s: dt,
        })?;
        next.condenser_pressure = condensed.pressure_bar_abs;
        next.condenser_temp = condensed.temp_c;

        let tower = self.cooling_tower.transform(&CoolingTowerInput {
            water_in_c: condensed.temp_c,
            water_flow_kg_s: dried.turbine_inlet_flow_kg_s,
        })?;
        debug!(
            stage = self.cooling_tower.name(),
            heat_rejected_kw = tower.heat_rejected_kw
        );

        Ok(next)
    }
}
