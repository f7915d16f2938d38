//! 공정 계산에 쓰는 단위 환산 도우미.

pub mod pressure;
pub mod temperature;

pub use pressure::{bar_to_mpa, mpa_to_bar};
pub use temperature::{celsius_to_kelvin, kelvin_to_celsius, KELVIN_OFFSET};
