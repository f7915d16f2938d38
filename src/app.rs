use std::io::{self, Write};

use thiserror::Error;
use tracing::{debug, info};

use crate::cli::{self, Args, OutputFormat};
use crate::config::{self, Config, ConfigError};
use crate::i18n::{self, keys, Translator};
use crate::plant::{run_steps, PlantError, RunOptions, SimulationEngine, StateSnapshot, StopHandle};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 출력 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 시뮬레이션 오류
    #[error("시뮬레이션 오류: {0}")]
    Plant(#[from] PlantError),
}

/// 명령줄 인자로 설정을 덮어쓴 실행 옵션.
pub fn effective_run_options(args: &Args, base: RunOptions) -> RunOptions {
    RunOptions {
        steps: args.steps.unwrap_or(base.steps),
        dt_s: args.dt.unwrap_or(base.dt_s),
    }
}

/// 로드된 설정과 그에 따라 정해진 번역기.
#[derive(Debug, Clone)]
pub struct Session {
    pub config: Config,
    pub translator: Translator,
}

/// 설정 파일을 불러오고 표시 언어를 정한다.
pub fn load(args: &Args) -> Result<Session, AppError> {
    let config = config::load_or_default(&args.config)?;
    let lang = i18n::resolve_language(args.lang.as_deref(), config.language.as_deref());
    let translator = Translator::new(&lang);
    debug!(lang = translator.language().as_code(), config = %args.config.display(), "config loaded");
    Ok(Session { config, translator })
}

/// 엔진을 만들고 지정한 스텝만큼 실행하며 매 스텝 상태를 출력한다.
pub fn run(args: &Args, session: &Session) -> Result<(), AppError> {
    let cfg = &session.config;
    let tr = session.translator;

    let mut engine = SimulationEngine::from_config(&cfg.plant)?;
    for (name, value) in &args.set {
        engine.set_input(name, *value)?;
    }
    let options = effective_run_options(args, cfg.run);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.format == OutputFormat::Table {
        writeln!(out, "{}", tr.t(keys::RUN_HEADING))?;
        writeln!(out, "{} {}", tr.t(keys::CONFIG_LOADED), args.config.display())?;
    }

    // 스텝 간격이 일정하므로 경과 시간은 스텝 번호로 계산한다.
    let dt_s = options.dt_s;
    let mut write_error: Option<io::Error> = None;
    let mut observer = |step: u64, snapshot: &StateSnapshot| {
        if write_error.is_some() {
            return;
        }
        let elapsed_s = step as f64 * dt_s;
        let result = match args.format {
            OutputFormat::Table => cli::write_table(&mut out, &tr, step, elapsed_s, snapshot),
            OutputFormat::Json => cli::write_json(&mut out, step, elapsed_s, snapshot),
        };
        if let Err(err) = result {
            write_error = Some(err);
        }
    };
    let summary = run_steps(&mut engine, &options, &StopHandle::new(), &mut observer)?;
    if let Some(err) = write_error {
        return Err(err.into());
    }

    if args.format == OutputFormat::Table {
        writeln!(out, "\n{} {}", tr.t(keys::RUN_FINISHED), summary.steps_completed)?;
        if summary.stopped_early {
            writeln!(out, "{}", tr.t(keys::RUN_STOPPED))?;
        }
    }
    info!(
        steps = summary.steps_completed,
        elapsed_s = summary.elapsed_s,
        "simulation complete"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use clap::Parser;

    #[test]
    fn session_uses_language_from_config_file() {
        let path = std::env::temp_dir().join(format!(
            "geothermal_plant_sim_session_{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "language = \"en\"\n").unwrap();
        let args = Args::try_parse_from([
            "geothermal_plant_sim",
            "--config",
            path.to_str().unwrap(),
        ])
        .unwrap();
        let session = load(&args).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(session.translator.language(), Language::En);
        assert_eq!(session.config.run, RunOptions::default());
    }

    #[test]
    fn command_line_overrides_run_options() {
        let args =
            Args::try_parse_from(["geothermal_plant_sim", "--steps", "2"]).unwrap();
        let options = effective_run_options(&args, RunOptions::default());
        assert_eq!(options.steps, 2);
        assert_eq!(options.dt_s, 1.0);
    }
}
