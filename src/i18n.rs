use sys_locale::get_locale;

use crate::plant::Field;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const CONFIG_LOADED: &str = "general.config_loaded";

    pub const RUN_HEADING: &str = "run.heading";
    pub const RUN_STEP: &str = "run.step";
    pub const RUN_ELAPSED: &str = "run.elapsed";
    pub const RUN_FINISHED: &str = "run.finished";
    pub const RUN_STOPPED: &str = "run.stopped";

    pub const TABLE_FIELD: &str = "table.field";
    pub const TABLE_VALUE: &str = "table.value";
    pub const TABLE_UNIT: &str = "table.unit";
    pub const NOT_COMPUTED: &str = "table.not_computed";
}

/// 플래그·설정·시스템 로케일 어디에서도 언어를 정하지 못했을 때 쓰는 코드.
/// 알 수 없는 코드로 만든 [`Translator`]도 이 언어가 된다.
pub const FALLBACK_LANGUAGE: &str = "ko";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 출력 문자열 번역기.
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }

    /// 상태 필드의 표시 이름.
    pub fn field_label(&self, field: Field) -> &'static str {
        match self.lang {
            Language::Ko => field_ko(field),
            Language::En => field_en(field),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    resolve_language_with(cli_arg, config_lang, detect_system_language)
}

fn resolve_language_with(
    cli_arg: Option<&str>,
    config_lang: Option<&str>,
    system: impl FnOnce() -> Option<String>,
) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(system)
        .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LC_ALL", "LANG"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        CONFIG_LOADED => "설정 파일:",
        RUN_HEADING => "=== 지열 발전소 시뮬레이션 ===",
        RUN_STEP => "스텝",
        RUN_ELAPSED => "경과 시간",
        RUN_FINISHED => "완료된 스텝:",
        RUN_STOPPED => "정지 요청으로 중단되었습니다.",
        TABLE_FIELD => "항목",
        TABLE_VALUE => "값",
        TABLE_UNIT => "단위",
        NOT_COMPUTED => "미계산",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        CONFIG_LOADED => "Config file:",
        RUN_HEADING => "=== Geothermal Plant Simulation ===",
        RUN_STEP => "Step",
        RUN_ELAPSED => "Elapsed",
        RUN_FINISHED => "Steps completed:",
        RUN_STOPPED => "Stopped on request.",
        TABLE_FIELD => "Field",
        TABLE_VALUE => "Value",
        TABLE_UNIT => "Unit",
        NOT_COMPUTED => "n/a",
        _ => return None,
    })
}

fn field_ko(field: Field) -> &'static str {
    match field {
        Field::WellheadPressure => "정두 압력",
        Field::WellheadTemp => "정두 온도",
        Field::WellheadFlow => "정두 유량",
        Field::SeparatorOutletPressure => "기수분리기 출구 압력",
        Field::SeparatorOutletSteamFlow => "기수분리기 증기 유량",
        Field::SeparatorOutletSteamTemp => "기수분리기 증기 온도",
        Field::TurbineInletPressure => "터빈 입구 압력",
        Field::TurbineInletTemp => "터빈 입구 온도",
        Field::TurbineInletFlow => "터빈 입구 유량",
        Field::TurbineOutPower => "터빈 출력",
        Field::CondenserPressure => "복수기 압력",
        Field::CondenserTemp => "복수기 온도",
        Field::WasteWaterFlow => "배수 유량",
        Field::ValveOpening => "밸브 개도",
        Field::ElectricPowerOutput => "발전 출력",
    }
}

fn field_en(field: Field) -> &'static str {
    match field {
        Field::WellheadPressure => "Wellhead pressure",
        Field::WellheadTemp => "Wellhead temperature",
        Field::WellheadFlow => "Wellhead flow",
        Field::SeparatorOutletPressure => "Separator outlet pressure",
        Field::SeparatorOutletSteamFlow => "Separator steam flow",
        Field::SeparatorOutletSteamTemp => "Separator steam temperature",
        Field::TurbineInletPressure => "Turbine inlet pressure",
        Field::TurbineInletTemp => "Turbine inlet temperature",
        Field::TurbineInletFlow => "Turbine inlet flow",
        Field::TurbineOutPower => "Turbine power",
        Field::CondenserPressure => "Condenser pressure",
        Field::CondenserTemp => "Condenser temperature",
        Field::WasteWaterFlow => "Waste water flow",
        Field::ValveOpening => "Valve opening",
        Field::ElectricPowerOutput => "Electric power output",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flag_wins_over_config() {
        assert_eq!(resolve_language(Some("en-US"), Some("ko")), "en");
        assert_eq!(resolve_language(Some("auto"), Some("ko_KR")), "ko");
    }

    #[test]
    fn unresolved_language_matches_translator_default() {
        let resolved = resolve_language_with(Some("fr"), Some("de"), || None);
        assert_eq!(resolved, FALLBACK_LANGUAGE);
        assert_eq!(
            Translator::new(&resolved).language(),
            Translator::new("fr").language()
        );
        assert_eq!(resolve_language_with(None, None, || Some("en".into())), "en");
    }

    #[test]
    fn missing_english_key_uses_korean_table() {
        let tr = Translator::new("en");
        assert_eq!(tr.t(keys::TABLE_UNIT), "Unit");
        assert_eq!(tr.t("no.such.key"), ko("no.such.key"));
    }
}
