/// 섭씨와 켈빈 사이의 오프셋.
pub const KELVIN_OFFSET: f64 = 273.15;

/// °C → K
pub fn celsius_to_kelvin(value_c: f64) -> f64 {
    value_c + KELVIN_OFFSET
}

/// K → °C
pub fn kelvin_to_celsius(value_k: f64) -> f64 {
    value_k - KELVIN_OFFSET
}
