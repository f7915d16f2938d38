//! 여러 스텝을 연속 실행하는 루프와 상태 게시 도구.
//!
//! 정지 요청은 스텝 사이에서만 확인한다. 스텝 하나는 중간에 끊기지 않는다.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::info;

use super::engine::SimulationEngine;
use super::error::PlantResult;
use super::state::{PlantState, StateSnapshot};

/// 스텝이 커밋될 때마다 호출되는 소비자 콜백.
pub trait StateObserver {
    fn on_state(&mut self, step: u64, snapshot: &StateSnapshot);
}

impl<F> StateObserver for F
where
    F: FnMut(u64, &StateSnapshot),
{
    fn on_state(&mut self, step: u64, snapshot: &StateSnapshot) {
        self(step, snapshot)
    }
}

/// 다른 스레드에서 실행 루프를 멈추기 위한 핸들.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// 최근 커밋된 스냅샷을 단일 뮤텍스 뒤에 게시한다.
///
/// 스텝 하나의 결과를 통째로 교체하므로 읽는 쪽은 항상 완성된 복사본을 받는다.
#[derive(Debug, Clone)]
pub struct SharedSnapshot {
    inner: Arc<Mutex<(u64, StateSnapshot)>>,
}

impl SharedSnapshot {
    pub fn new(initial: &PlantState) -> Self {
        Self {
            inner: Arc::new(Mutex::new((0, initial.snapshot()))),
        }
    }

    pub fn publish(&self, step: u64, snapshot: StateSnapshot) {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = (step, snapshot);
    }

    /// (스텝 번호, 스냅샷) 복사본.
    pub fn latest(&self) -> (u64, StateSnapshot) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl StateObserver for SharedSnapshot {
    fn on_state(&mut self, step: u64, snapshot: &StateSnapshot) {
        self.publish(step, snapshot.clone());
    }
}

/// 실행 옵션.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunOptions {
    /// 실행할 스텝 수
    pub steps: u64,
    /// 스텝 길이(s)
    pub dt_s: f64,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            steps: 10,
            dt_s: 1.0,
        }
    }
}

/// 실행 결과 요약.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub steps_completed: u64,
    pub stopped_early: bool,
    pub elapsed_s: f64,
}

/// `options.steps`만큼 스텝을 실행하고 매 스텝 후 관찰자에 스냅샷을 넘긴다.
///
/// 정지 요청은 다음 스텝 시작 전에 확인한다. 스텝 오류는 즉시 반환하며 재시도하지 않는다.
pub fn run_steps<O: StateObserver + ?Sized>(
    engine: &mut SimulationEngine,
    options: &RunOptions,
    stop: &StopHandle,
    observer: &mut O,
) -> PlantResult<RunSummary> {
    info!(steps = options.steps, dt_s = options.dt_s, "run started");
    let mut completed = 0;
    let mut stopped_early = false;
    while completed < options.steps {
        if stop.is_stopped() {
            stopped_early = true;
            info!(completed, "stop requested");
            break;
        }
        engine.step(options.dt_s)?;
        completed += 1;
        observer.on_state(engine.steps_taken(), &engine.get_state());
    }
    info!(completed, elapsed_s = engine.elapsed_s(), "run finished");
    Ok(RunSummary {
        steps_completed: completed,
        stopped_early,
        elapsed_s: engine.elapsed_s(),
    })
}
