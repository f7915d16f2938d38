//! 공정 시뮬레이션 오류 정의.

use thiserror::Error;

use crate::steam::SteamPropertyError;

/// 스테이지 변환·엔진 스텝·입력 설정 중 발생하는 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlantError {
    /// 증기 물성 조회가 IF97 범위를 벗어남. 원인 오류를 그대로 전달한다.
    #[error(transparent)]
    OutOfRange(#[from] SteamPropertyError),

    /// 물리적으로 의미 없는 운전점(예: 터빈 입구압 ≤ 0, 배압 > 입구압)
    #[error("비물리적 운전점({stage}): {what}")]
    InvalidOperatingPoint { stage: &'static str, what: String },

    /// 외부에서 쓸 수 없는 필드(파생값 또는 알 수 없는 이름)
    #[error("설정할 수 없는 필드입니다: {0}")]
    InvalidField(String),

    /// 입력값이 유한한 수가 아님
    #[error("잘못된 입력값: {field} = {value}")]
    InvalidInput { field: &'static str, value: f64 },

    /// dt는 0보다 큰 유한값이어야 함
    #[error("잘못된 시간 간격: dt = {0} s")]
    InvalidTimeStep(f64),

    /// 생성 시점의 파라미터 검증 실패
    #[error("잘못된 설정값: {what}")]
    InvalidConfig { what: String },
}

pub type PlantResult<T> = Result<T, PlantError>;

impl PlantError {
    pub(crate) fn operating_point(stage: &'static str, what: impl Into<String>) -> Self {
        PlantError::InvalidOperatingPoint {
            stage,
            what: what.into(),
        }
    }

    pub(crate) fn config(what: impl Into<String>) -> Self {
        PlantError::InvalidConfig { what: what.into() }
    }
}
