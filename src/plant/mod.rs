//! 지열 발전소 공정 시뮬레이션.
//!
//! 정두에서 복수기까지 고정 순서의 스테이지 체인을 이산 시간 스텝으로 진행한다.
//! 스테이지 사이의 값은 모두 [`PlantState`]를 통해서만 전달된다.

pub mod config;
pub mod controls;
pub mod engine;
pub mod error;
pub mod runner;
pub mod stages;
pub mod state;

pub use config::{PlantConfig, TurbineConfig};
pub use controls::{Control, ControlSettings, ControlSurface};
pub use engine::{EnginePhase, SimulationEngine};
pub use error::{PlantError, PlantResult};
pub use runner::{run_steps, RunOptions, RunSummary, SharedSnapshot, StateObserver, StopHandle};
pub use state::{Field, InitialConditions, PlantState, StateSnapshot};
