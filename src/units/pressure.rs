const MPA_PER_BAR: f64 = 0.1;

/// bar 값을 MPa로 변환한다. 게이지/절대 여부는 바꾸지 않는다.
pub fn bar_to_mpa(value_bar: f64) -> f64 {
    value_bar * MPA_PER_BAR
}

/// MPa 값을 bar로 변환한다.
pub fn mpa_to_bar(value_mpa: f64) -> f64 {
    value_mpa / MPA_PER_BAR
}
