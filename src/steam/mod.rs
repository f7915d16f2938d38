//! 증기 물성 조회 모듈.

pub mod if97;

pub use if97::{
    enthalpy_ps, in_valid_range, properties_at, properties_ph, PhState, SteamProperties,
    SteamPropertyError,
};
