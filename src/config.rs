use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::plant::{PlantConfig, RunOptions};

/// 애플리케이션 설정을 표현한다.
///
/// ```toml
/// language = "ko"
///
/// [plant.initial]
/// wellhead_pressure = 10.5
///
/// [plant.condenser]
/// model = "fixed"
/// pressure_bar_abs = 0.1
/// temp_c = 40.0
///
/// [run]
/// steps = 10
/// dt_s = 1.0
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 표시 언어(ko/en). 없으면 시스템 로케일을 따른다.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub plant: PlantConfig,
    pub run: RunOptions,
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl Config {
    /// 파일에서 설정을 읽는다. 빠진 항목은 기본값으로 채운다.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        Config::load(path)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        tracing::info!(path = %path.display(), "default config written");
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plant::stages::{CondenserModel, ExpansionModel, HeatBalance};

    #[test]
    fn partial_file_fills_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            [plant.turbine]
            efficiency = 0.5
            expansion = "isentropic"

            [plant.condenser]
            model = "heat_balance"
            ua_kw_per_k = 12000.0
            "#,
        )
        .unwrap();
        assert_eq!(cfg.plant.turbine.efficiency, 0.5);
        assert_eq!(cfg.plant.turbine.expansion, ExpansionModel::Isentropic);
        assert_eq!(cfg.plant.turbine.units, 4);
        assert_eq!(cfg.plant.initial.wellhead_pressure, 10.5);
        assert_eq!(
            cfg.plant.condenser,
            CondenserModel::HeatBalance(HeatBalance {
                ua_kw_per_k: 12000.0,
                ..HeatBalance::default()
            })
        );
        assert_eq!(cfg.run, RunOptions::default());
        assert_eq!(cfg.language, None);
    }

    #[test]
    fn save_then_load_keeps_values() {
        let path = std::env::temp_dir().join(format!(
            "geothermal_plant_sim_config_{}.toml",
            std::process::id()
        ));
        let mut cfg = Config::default();
        cfg.language = Some("en".into());
        cfg.run.steps = 3;
        cfg.plant.initial.wellhead_flow = 150.0;
        cfg.save(&path).unwrap();
        let loaded = Config::load(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn broken_toml_is_parse_error() {
        let err = toml::from_str::<Config>("[plant\nsteps = ").unwrap_err();
        let err = ConfigError::from(err);
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
