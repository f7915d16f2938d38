//! 지열 발전소 시뮬레이터.
//!
//! 계산 로직(`plant`, `steam`)은 라이브러리로 두고, 바이너리는 설정 로드와 출력만 맡는다.

pub mod app;
pub mod cli;
pub mod config;
pub mod i18n;
pub mod plant;
pub mod steam;
pub mod units;
