//! 명령줄 인자 정의와 상태 출력.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde_json::json;

use crate::i18n::{keys, Translator};
use crate::plant::{Control, Field, StateSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// 사람이 읽는 표
    #[default]
    Table,
    /// 스텝마다 JSON 한 줄
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "geothermal_plant_sim")]
#[command(about = "Geothermal power plant process simulator", long_about = None)]
pub struct Args {
    /// 설정 파일 경로. 없으면 기본값으로 생성한다.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
    /// 실행할 스텝 수 (설정 파일의 run.steps를 덮어씀)
    #[arg(long)]
    pub steps: Option<u64>,
    /// 스텝 길이 [s] (설정 파일의 run.dt_s를 덮어씀)
    #[arg(long)]
    pub dt: Option<f64>,
    /// 입력 필드 또는 제어 입력(%) 설정, 예: --set wellhead_flow=150 --set turbine_load=80
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub set: Vec<(String, f64)>,
    /// 표시 언어 (ko/en/auto)
    #[arg(long)]
    pub lang: Option<String>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// `NAME=VALUE` 한 쌍을 분리한다. 이름은 정두 입력 필드나 제어 입력이어야 한다.
pub fn parse_assignment(raw: &str) -> Result<(String, f64), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing field name in '{raw}'"));
    }
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid value for {name}: {e}"))?;
    let allowed: Vec<&str> = Field::ALL
        .iter()
        .filter(|f| f.is_input())
        .map(|f| f.as_str())
        .chain(Control::ALL.iter().map(|c| c.as_str()))
        .collect();
    if !allowed.contains(&name) {
        return Err(format!(
            "'{name}' is not an input field (allowed: {})",
            allowed.join(", ")
        ));
    }
    Ok((name.to_string(), value))
}

fn format_value(value: Option<f64>, tr: &Translator) -> String {
    match value {
        Some(v) => format!("{v:.3}"),
        None => tr.t(keys::NOT_COMPUTED).to_string(),
    }
}

/// 한 스텝의 스냅샷을 표 형태로 출력한다.
pub fn write_table(
    out: &mut impl Write,
    tr: &Translator,
    step: u64,
    elapsed_s: f64,
    snapshot: &StateSnapshot,
) -> io::Result<()> {
    writeln!(
        out,
        "\n-- {} {step} ({} {elapsed_s:.1} s) --",
        tr.t(keys::RUN_STEP),
        tr.t(keys::RUN_ELAPSED)
    )?;
    writeln!(
        out,
        "{:<28} {:>12}  {}",
        tr.t(keys::TABLE_FIELD),
        tr.t(keys::TABLE_VALUE),
        tr.t(keys::TABLE_UNIT)
    )?;
    for field in Field::ALL {
        let value = snapshot.get(field.as_str()).copied().flatten();
        writeln!(
            out,
            "{:<28} {:>12}  {}",
            tr.field_label(field),
            format_value(value, tr),
            field.unit()
        )?;
    }
    Ok(())
}

/// 한 스텝의 스냅샷을 JSON 한 줄로 출력한다. 미계산 값은 `null`.
pub fn write_json(
    out: &mut impl Write,
    step: u64,
    elapsed_s: f64,
    snapshot: &StateSnapshot,
) -> io::Result<()> {
    let line = json!({
        "step": step,
        "elapsed_s": elapsed_s,
        "state": snapshot,
    });
    writeln!(out, "{line}")
}
