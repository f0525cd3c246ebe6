use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_POWER: &str = "main_menu.power";
    pub const MAIN_MENU_CURRENT: &str = "main_menu.current";
    pub const MAIN_MENU_CABLE: &str = "main_menu.cable";
    pub const MAIN_MENU_VOLTAGE_DROP: &str = "main_menu.voltage_drop";
    pub const MAIN_MENU_PANEL: &str = "main_menu.panel";
    pub const MAIN_MENU_STAR_DELTA: &str = "main_menu.star_delta";
    pub const MAIN_MENU_PROTECTION: &str = "main_menu.protection";
    pub const MAIN_MENU_TRANSMISSION: &str = "main_menu.transmission";
    pub const MAIN_MENU_RESISTOR: &str = "main_menu.resistor";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const NOTE_EMPTY_DEFAULT: &str = "note.empty_default";

    pub const SYSTEM_OPTIONS: &str = "option.system";
    pub const MATERIAL_OPTIONS: &str = "option.material";
    pub const PANEL_MATERIAL_OPTIONS: &str = "option.panel_material";
    pub const INSTALLATION_OPTIONS: &str = "option.installation";
    pub const COOLING_MODE_OPTIONS: &str = "option.cooling_mode";
    pub const MOTOR_SUPPLY_OPTIONS: &str = "option.motor_supply";
    pub const DEVICE_OPTIONS: &str = "option.device";
    pub const MOTION_OPTIONS: &str = "option.motion";
    pub const DIRECTION_OPTIONS: &str = "option.direction";

    pub const PROMPT_VOLTAGE: &str = "prompt.voltage";
    pub const PROMPT_CURRENT: &str = "prompt.current";
    pub const PROMPT_POWER: &str = "prompt.power";
    pub const PROMPT_POWER_FACTOR: &str = "prompt.power_factor";
    pub const PROMPT_LENGTH: &str = "prompt.length";
    pub const PROMPT_SECTION: &str = "prompt.section";
    pub const PROMPT_MAX_DROP: &str = "prompt.max_drop";
    pub const PROMPT_MAX_DROP_PERCENT: &str = "prompt.max_drop_percent";
    pub const PROMPT_INCLUDE_NEUTRAL: &str = "prompt.include_neutral";
    pub const PROMPT_SINGLE_CORE: &str = "prompt.single_core";
    pub const PROMPT_WIDTH: &str = "prompt.width";
    pub const PROMPT_HEIGHT: &str = "prompt.height";
    pub const PROMPT_DEPTH: &str = "prompt.depth";
    pub const PROMPT_OTHER_LOSSES: &str = "prompt.other_losses";
    pub const PROMPT_VFD_COUNT: &str = "prompt.vfd_count";
    pub const PROMPT_VFD_POWER: &str = "prompt.vfd_power";
    pub const PROMPT_T_INTERNAL: &str = "prompt.t_internal";
    pub const PROMPT_T_EXTERNAL: &str = "prompt.t_external";
    pub const PROMPT_MOTOR_POWER: &str = "prompt.motor_power";
    pub const PROMPT_EFFICIENCY: &str = "prompt.efficiency";
    pub const PROMPT_SPEED_FORWARD: &str = "prompt.speed_forward";
    pub const PROMPT_SPEED_REVERSE: &str = "prompt.speed_reverse";
    pub const PROMPT_LEAD: &str = "prompt.lead";
    pub const PROMPT_STAGE_COUNT: &str = "prompt.stage_count";
    pub const PROMPT_STAGE_INPUT: &str = "prompt.stage_input";
    pub const PROMPT_STAGE_OUTPUT: &str = "prompt.stage_output";
    pub const PROMPT_BANDS: &str = "prompt.bands";

    pub const RESULT_POWER: &str = "result.power";
    pub const RESULT_CURRENT: &str = "result.current";
    pub const RESULT_VOLTAGE_DROP: &str = "result.voltage_drop";
    pub const RESULT_COMMERCIAL_SECTION: &str = "result.commercial_section";
    pub const RESULT_THEORETICAL_SECTION: &str = "result.theoretical_section";
    pub const RESULT_FORMATION: &str = "result.formation";
    pub const RESULT_GOVERNING_DROP: &str = "result.governing_drop";
    pub const RESULT_GOVERNING_AMPACITY: &str = "result.governing_ampacity";
    pub const RESULT_COOLING_POWER: &str = "result.cooling_power";
    pub const RESULT_AIRFLOW: &str = "result.airflow";
    pub const RESULT_PANEL_BALANCE: &str = "result.panel_balance";
    pub const RESULT_NOMINAL_CURRENT: &str = "result.nominal_current";
    pub const RESULT_RELAY_SETTING: &str = "result.relay_setting";
    pub const RESULT_CONTACTORS: &str = "result.contactors";
    pub const RESULT_CABLES: &str = "result.cables";
    pub const RESULT_OVERLOAD_RANGE: &str = "result.overload_range";
    pub const RESULT_BREAKER: &str = "result.breaker";
    pub const RESULT_CABLE_SECTION: &str = "result.cable_section";
    pub const RESULT_OUTPUT_SPEED: &str = "result.output_speed";
    pub const RESULT_LINEAR_SPEED: &str = "result.linear_speed";
    pub const RESULT_MOTOR_SPEED: &str = "result.motor_speed";
    pub const RESULT_RATIO: &str = "result.ratio";
    pub const RESULT_RESISTANCE: &str = "result.resistance";
    pub const WARNING_PREFIX: &str = "result.warning_prefix";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 → 선택 언어 → 한국어 순으로 찾는다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.as_str();
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
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
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 아래 key = "value".
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(&path).ok()?;
    let map = parse_toml_to_map(&content);
    if map.is_none() {
        tracing::warn!(path = %path.display(), "언어팩 파싱 실패, 내장 문자열 사용");
    }
    map
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }
    Some(map)
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Electro Toolbox ===",
        MAIN_MENU_POWER => "1) 전력 계산",
        MAIN_MENU_CURRENT => "2) 전류 계산",
        MAIN_MENU_CABLE => "3) 케이블 단면적 선정",
        MAIN_MENU_VOLTAGE_DROP => "4) 전압강하 계산",
        MAIN_MENU_PANEL => "5) 판넬 냉각 (IEC 60890)",
        MAIN_MENU_STAR_DELTA => "6) Y-Δ 기동 (IEC 60947-4-1)",
        MAIN_MENU_PROTECTION => "7) 직입 기동 보호기기",
        MAIN_MENU_TRANSMISSION => "8) 기계 전동 (감속비/속도)",
        MAIN_MENU_RESISTOR => "9) 저항 색 코드",
        MAIN_MENU_SETTINGS => "10) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        NOTE_EMPTY_DEFAULT => "참고: 입력 없이 엔터를 누르면 [ ] 안의 기본값을 사용합니다.",
        SYSTEM_OPTIONS => "배전 방식: 1=DC 2=단상 3=2상 4=3상",
        MATERIAL_OPTIONS => "도체 재질: 1=구리 2=알루미늄",
        PANEL_MATERIAL_OPTIONS => {
            "외함 재질: 1=도장 강판(k=5.5) 2=스테인리스(k=3.7) 3=알루미늄(k=12.0) 4=플라스틱(k=3.5)"
        }
        INSTALLATION_OPTIONS => "설치 형태: 1=단독 자립 2=벽부착 3=열반 4=매입",
        COOLING_MODE_OPTIONS => "냉각 방식: 1=냉방기 2=강제 환기",
        MOTOR_SUPPLY_OPTIONS => "전원: 1=단상 2=3상",
        DEVICE_OPTIONS => "보호기기: 1=조정형 열동 계전기 2=고정 정격 차단기",
        MOTION_OPTIONS => "운동 형태: 1=회전(rpm) 2=직선(mm/s)",
        DIRECTION_OPTIONS => "계산 방향: 1=최종 속도 계산 2=필요 모터 속도 계산",
        PROMPT_VOLTAGE => "전압 [V]",
        PROMPT_CURRENT => "전류 [A]",
        PROMPT_POWER => "전력 [W]",
        PROMPT_POWER_FACTOR => "역률 (0~1)",
        PROMPT_LENGTH => "선로 길이 [m]",
        PROMPT_SECTION => "단면적 [mm²]",
        PROMPT_MAX_DROP => "허용 전압강하 [V]",
        PROMPT_MAX_DROP_PERCENT => "허용 전압강하 [%]",
        PROMPT_INCLUDE_NEUTRAL => "중성선 포함? (y/n)",
        PROMPT_SINGLE_CORE => "단심 케이블 포설? (y/n)",
        PROMPT_WIDTH => "폭 [mm]",
        PROMPT_HEIGHT => "높이 [mm]",
        PROMPT_DEPTH => "깊이 [mm]",
        PROMPT_OTHER_LOSSES => "기타 발열 [W]",
        PROMPT_VFD_COUNT => "인버터 대수",
        PROMPT_VFD_POWER => "인버터 용량 [kW]",
        PROMPT_T_INTERNAL => "내부 허용 온도 [°C]",
        PROMPT_T_EXTERNAL => "외기 온도 [°C]",
        PROMPT_MOTOR_POWER => "전동기 출력 [W]",
        PROMPT_EFFICIENCY => "효율 (0~1)",
        PROMPT_SPEED_FORWARD => "모터 속도 [rpm]",
        PROMPT_SPEED_REVERSE => "목표 최종 속도 [rpm 또는 mm/s]",
        PROMPT_LEAD => "리드 [mm/rev]",
        PROMPT_STAGE_COUNT => "감속 단수",
        PROMPT_STAGE_INPUT => "구동측 (Z1/D1)",
        PROMPT_STAGE_OUTPUT => "피동측 (Z2/D2)",
        PROMPT_BANDS => "색 띠 (공백 구분, 예: red violet orange gold): ",
        RESULT_POWER => "전력:",
        RESULT_CURRENT => "전류:",
        RESULT_VOLTAGE_DROP => "전압강하:",
        RESULT_COMMERCIAL_SECTION => "상용 단면적:",
        RESULT_THEORETICAL_SECTION => "이론 단면적:",
        RESULT_FORMATION => "케이블 구성:",
        RESULT_GOVERNING_DROP => "전압강하 조건이 지배적입니다.",
        RESULT_GOVERNING_AMPACITY => "허용전류 조건이 지배적입니다.",
        RESULT_COOLING_POWER => "필요 냉각 능력:",
        RESULT_AIRFLOW => "필요 환기 풍량:",
        RESULT_PANEL_BALANCE => "총 발열 / 인버터 발열 / 유효 면적 / ΔT:",
        RESULT_NOMINAL_CURRENT => "정격전류 In:",
        RESULT_RELAY_SETTING => "열동계전기 설정 (In/√3):",
        RESULT_CONTACTORS => "접촉기 주/Δ/Y:",
        RESULT_CABLES => "간선 / 전동기 측 단면적:",
        RESULT_OVERLOAD_RANGE => "과부하 계전기 조정 범위:",
        RESULT_BREAKER => "차단기 (목표 1.25·In / 정격 / 곡선):",
        RESULT_CABLE_SECTION => "간선 단면적:",
        RESULT_OUTPUT_SPEED => "최종 속도:",
        RESULT_LINEAR_SPEED => "직선 속도:",
        RESULT_MOTOR_SPEED => "필요 모터 속도:",
        RESULT_RATIO => "총 감속비 1 :",
        RESULT_RESISTANCE => "저항값:",
        WARNING_PREFIX => "주의:",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "현재 기본값:",
        SETTINGS_OPTIONS => {
            "1) 역률  2) 효율  3) 허용 전압강하 [%]  4) 도체 재질  5) 외함 재질  6) 설치 형태  7) 냉각 방식  8) 리드  9) 언어"
        }
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정을 변경했습니다.",
        _ => "",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting.",
        MAIN_MENU_POWER => "1) Power",
        MAIN_MENU_CURRENT => "2) Current",
        MAIN_MENU_CABLE => "3) Cable section sizing",
        MAIN_MENU_VOLTAGE_DROP => "4) Voltage drop",
        MAIN_MENU_PANEL => "5) Panel cooling (IEC 60890)",
        MAIN_MENU_STAR_DELTA => "6) Star-delta starter (IEC 60947-4-1)",
        MAIN_MENU_PROTECTION => "7) Direct-on-line protection",
        MAIN_MENU_TRANSMISSION => "8) Mechanical transmission",
        MAIN_MENU_RESISTOR => "9) Resistor color code",
        MAIN_MENU_SETTINGS => "10) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please choose again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        NOTE_EMPTY_DEFAULT => "Note: press Enter on an empty field to use the [default].",
        SYSTEM_OPTIONS => "System: 1=DC 2=single-phase 3=two-phase 4=three-phase",
        MATERIAL_OPTIONS => "Conductor: 1=copper 2=aluminum",
        PANEL_MATERIAL_OPTIONS => {
            "Enclosure: 1=painted steel(k=5.5) 2=stainless(k=3.7) 3=aluminum(k=12.0) 4=plastic(k=3.5)"
        }
        INSTALLATION_OPTIONS => "Installation: 1=free-standing 2=wall 3=row 4=recessed",
        COOLING_MODE_OPTIONS => "Cooling: 1=air conditioner 2=forced ventilation",
        MOTOR_SUPPLY_OPTIONS => "Supply: 1=single-phase 2=three-phase",
        DEVICE_OPTIONS => "Device: 1=adjustable overload relay 2=fixed-rating breaker",
        MOTION_OPTIONS => "Motion: 1=rotary(rpm) 2=linear(mm/s)",
        DIRECTION_OPTIONS => "Mode: 1=output speed 2=required motor speed",
        PROMPT_VOLTAGE => "Voltage [V]",
        PROMPT_CURRENT => "Current [A]",
        PROMPT_POWER => "Power [W]",
        PROMPT_POWER_FACTOR => "Power factor (0-1)",
        PROMPT_LENGTH => "Line length [m]",
        PROMPT_SECTION => "Section [mm²]",
        PROMPT_MAX_DROP => "Allowed voltage drop [V]",
        PROMPT_MAX_DROP_PERCENT => "Allowed voltage drop [%]",
        PROMPT_INCLUDE_NEUTRAL => "Include neutral? (y/n)",
        PROMPT_SINGLE_CORE => "Single-core conductors? (y/n)",
        PROMPT_WIDTH => "Width [mm]",
        PROMPT_HEIGHT => "Height [mm]",
        PROMPT_DEPTH => "Depth [mm]",
        PROMPT_OTHER_LOSSES => "Other losses [W]",
        PROMPT_VFD_COUNT => "Number of drives",
        PROMPT_VFD_POWER => "Drive rating [kW]",
        PROMPT_T_INTERNAL => "Max internal temperature [°C]",
        PROMPT_T_EXTERNAL => "Ambient temperature [°C]",
        PROMPT_MOTOR_POWER => "Motor power [W]",
        PROMPT_EFFICIENCY => "Efficiency (0-1)",
        PROMPT_SPEED_FORWARD => "Motor speed [rpm]",
        PROMPT_SPEED_REVERSE => "Target output speed [rpm or mm/s]",
        PROMPT_LEAD => "Lead [mm/rev]",
        PROMPT_STAGE_COUNT => "Number of stages",
        PROMPT_STAGE_INPUT => "Driver (Z1/D1)",
        PROMPT_STAGE_OUTPUT => "Driven (Z2/D2)",
        PROMPT_BANDS => "Color bands (space separated, e.g. red violet orange gold): ",
        RESULT_POWER => "Power:",
        RESULT_CURRENT => "Current:",
        RESULT_VOLTAGE_DROP => "Voltage drop:",
        RESULT_COMMERCIAL_SECTION => "Commercial section:",
        RESULT_THEORETICAL_SECTION => "Theoretical section:",
        RESULT_FORMATION => "Formation:",
        RESULT_GOVERNING_DROP => "Voltage drop governs.",
        RESULT_GOVERNING_AMPACITY => "Ampacity governs.",
        RESULT_COOLING_POWER => "Required cooling power:",
        RESULT_AIRFLOW => "Required airflow:",
        RESULT_PANEL_BALANCE => "Total loss / drive loss / effective area / ΔT:",
        RESULT_NOMINAL_CURRENT => "Nominal current In:",
        RESULT_RELAY_SETTING => "Overload relay setting (In/√3):",
        RESULT_CONTACTORS => "Contactors main/delta/star:",
        RESULT_CABLES => "Feeder / motor-side section:",
        RESULT_OVERLOAD_RANGE => "Overload relay range:",
        RESULT_BREAKER => "Breaker (target 1.25·In / rating / curve):",
        RESULT_CABLE_SECTION => "Feeder section:",
        RESULT_OUTPUT_SPEED => "Output speed:",
        RESULT_LINEAR_SPEED => "Linear speed:",
        RESULT_MOTOR_SPEED => "Required motor speed:",
        RESULT_RATIO => "Total ratio 1 :",
        RESULT_RESISTANCE => "Resistance:",
        WARNING_PREFIX => "Warning:",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Current defaults:",
        SETTINGS_OPTIONS => {
            "1) power factor  2) efficiency  3) max drop [%]  4) conductor  5) enclosure  6) installation  7) cooling  8) lead  9) language"
        }
        SETTINGS_PROMPT_CHANGE => "Number to change (Enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; nothing changed.",
        SETTINGS_SAVED => "Settings updated.",
        _ => return None,
    };
    Some(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flag_wins_over_config() {
        assert_eq!(resolve_language("ko", Some("en")), "ko");
        assert_eq!(resolve_language("auto", Some("en-US")), "en");
    }

    #[test]
    fn locale_strings_are_normalized() {
        assert_eq!(normalize_locale_string("ko_KR.UTF-8").as_deref(), Some("ko"));
        assert_eq!(normalize_locale_string("en-GB").as_deref(), Some("en"));
        assert_eq!(normalize_locale_string("de_DE"), None);
    }

    #[test]
    fn english_falls_back_to_korean_for_missing_keys() {
        let tr = Translator::new("en");
        assert_eq!(tr.t(keys::MAIN_MENU_TITLE), ko(keys::MAIN_MENU_TITLE));
        assert_eq!(tr.t(keys::MAIN_MENU_EXIT), "0) Exit");
    }

    #[test]
    fn nested_pack_keys_are_flattened() {
        let map = parse_toml_to_map("[main_menu]\nexit = \"0) Quit\"\n").expect("pack");
        assert_eq!(map.get(keys::MAIN_MENU_EXIT).map(String::as_str), Some("0) Quit"));
    }
}
