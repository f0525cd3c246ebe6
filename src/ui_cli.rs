use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::electrical::{
    self, CableSizingInput, ConductorMaterial, ElectricalSystem, GoverningCriterion,
};
use crate::i18n::{keys, Translator};
use crate::mechanical::{self, Direction, Motion, TransmissionStage};
use crate::motor::{self, MotorInput, MotorSupply, ProtectionDevice, ProtectionSetting};
use crate::resistor::{self, ResistorColor};
use crate::thermal::{self, CoolingMode, PanelCoolingInput, PanelInstallationMode, PanelMaterial};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Power,
    Current,
    CableSection,
    VoltageDrop,
    PanelCooling,
    StarDelta,
    MotorProtection,
    Transmission,
    Resistor,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    for key in [
        keys::MAIN_MENU_TITLE,
        keys::MAIN_MENU_POWER,
        keys::MAIN_MENU_CURRENT,
        keys::MAIN_MENU_CABLE,
        keys::MAIN_MENU_VOLTAGE_DROP,
        keys::MAIN_MENU_PANEL,
        keys::MAIN_MENU_STAR_DELTA,
        keys::MAIN_MENU_PROTECTION,
        keys::MAIN_MENU_TRANSMISSION,
        keys::MAIN_MENU_RESISTOR,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = match read_line(tr.t(keys::PROMPT_MENU_SELECT)) {
            Ok(sel) => sel,
            // 입력 스트림이 끝나면 종료로 본다.
            Err(e) if is_end_of_input(&e) => return Ok(MenuChoice::Exit),
            Err(e) => return Err(e),
        };
        let choice = match sel.trim() {
            "1" => MenuChoice::Power,
            "2" => MenuChoice::Current,
            "3" => MenuChoice::CableSection,
            "4" => MenuChoice::VoltageDrop,
            "5" => MenuChoice::PanelCooling,
            "6" => MenuChoice::StarDelta,
            "7" => MenuChoice::MotorProtection,
            "8" => MenuChoice::Transmission,
            "9" => MenuChoice::Resistor,
            "10" => MenuChoice::Settings,
            "0" => MenuChoice::Exit,
            _ => {
                println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
                continue;
            }
        };
        return Ok(choice);
    }
}

/// 전력 계산 메뉴를 처리한다.
pub fn handle_power(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let system = read_system(tr)?;
    let v = read_f64(tr, keys::PROMPT_VOLTAGE, 380.0)?;
    let i = read_f64(tr, keys::PROMPT_CURRENT, 10.0)?;
    let pf = read_power_factor(tr, cfg, system)?;
    let p = electrical::power(v, i, system, pf);
    println!("{} {:.3} W", tr.t(keys::RESULT_POWER), p);
    Ok(())
}

/// 전류 계산 메뉴를 처리한다.
pub fn handle_current(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let system = read_system(tr)?;
    let p = read_f64(tr, keys::PROMPT_POWER, 7500.0)?;
    let v = read_f64(tr, keys::PROMPT_VOLTAGE, 380.0)?;
    let pf = read_power_factor(tr, cfg, system)?;
    let i = electrical::current(p, v, system, pf);
    println!("{} {:.3} A", tr.t(keys::RESULT_CURRENT), i);
    Ok(())
}

/// 케이블 단면적 선정 메뉴를 처리한다.
pub fn handle_cable_section(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let system = read_system(tr)?;
    let material = read_material(tr, cfg)?;
    let v = read_f64(tr, keys::PROMPT_VOLTAGE, 380.0)?;
    let current_a = read_f64(tr, keys::PROMPT_CURRENT, 10.0)?;
    let length_m = read_f64(tr, keys::PROMPT_LENGTH, 50.0)?;
    let max_voltage_drop_v =
        read_f64(tr, keys::PROMPT_MAX_DROP, cfg.defaults.max_voltage_drop_v(v))?;
    let power_factor = read_power_factor(tr, cfg, system)?;
    let include_neutral = if system == ElectricalSystem::ThreePhase {
        read_yes_no(tr, keys::PROMPT_INCLUDE_NEUTRAL, false)?
    } else {
        false
    };
    let is_single_core = read_yes_no(tr, keys::PROMPT_SINGLE_CORE, false)?;

    let res = electrical::size_cable(CableSizingInput {
        current_a,
        length_m,
        max_voltage_drop_v,
        system,
        material,
        power_factor,
        include_neutral,
        is_single_core,
    });
    println!(
        "{} {} mm²",
        tr.t(keys::RESULT_COMMERCIAL_SECTION),
        res.commercial_section_mm2
    );
    println!(
        "{} {:.2} mm²",
        tr.t(keys::RESULT_THEORETICAL_SECTION),
        res.theoretical_section_mm2
    );
    println!(
        "{} {} ({})",
        tr.t(keys::RESULT_FORMATION),
        res.formation_label,
        res.descriptive_label
    );
    match res.governing {
        Some(GoverningCriterion::VoltageDrop) => println!("{}", tr.t(keys::RESULT_GOVERNING_DROP)),
        Some(GoverningCriterion::Ampacity) => println!("{}", tr.t(keys::RESULT_GOVERNING_AMPACITY)),
        None => {}
    }
    Ok(())
}

/// 전압강하 메뉴를 처리한다.
pub fn handle_voltage_drop(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let system = read_system(tr)?;
    let material = read_material(tr, cfg)?;
    let i = read_f64(tr, keys::PROMPT_CURRENT, 10.0)?;
    let l = read_f64(tr, keys::PROMPT_LENGTH, 50.0)?;
    let s = read_f64(tr, keys::PROMPT_SECTION, 2.5)?;
    let pf = read_power_factor(tr, cfg, system)?;
    let du = electrical::voltage_drop(i, l, s, system, material, pf);
    println!("{} {:.3} V", tr.t(keys::RESULT_VOLTAGE_DROP), du);
    Ok(())
}

/// 판넬 냉각 메뉴를 처리한다.
pub fn handle_panel_cooling(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let d = &cfg.defaults;
    let material = PANEL_MATERIALS[read_option(
        tr,
        keys::PANEL_MATERIAL_OPTIONS,
        index_of(&PANEL_MATERIALS, d.panel_material),
        PANEL_MATERIALS.len(),
    )?];
    let installation = INSTALLATIONS[read_option(
        tr,
        keys::INSTALLATION_OPTIONS,
        index_of(&INSTALLATIONS, d.installation),
        INSTALLATIONS.len(),
    )?];
    let cooling_mode = COOLING_MODES[read_option(
        tr,
        keys::COOLING_MODE_OPTIONS,
        index_of(&COOLING_MODES, d.cooling_mode),
        COOLING_MODES.len(),
    )?];
    let input = PanelCoolingInput {
        width_mm: read_f64(tr, keys::PROMPT_WIDTH, 800.0)?,
        height_mm: read_f64(tr, keys::PROMPT_HEIGHT, 1200.0)?,
        depth_mm: read_f64(tr, keys::PROMPT_DEPTH, 400.0)?,
        other_losses_w: read_f64(tr, keys::PROMPT_OTHER_LOSSES, 100.0)?,
        vfd_count: read_f64(tr, keys::PROMPT_VFD_COUNT, 1.0)?,
        vfd_power_kw: read_f64(tr, keys::PROMPT_VFD_POWER, 7.5)?,
        t_internal_c: read_f64(tr, keys::PROMPT_T_INTERNAL, 35.0)?,
        t_external_c: read_f64(tr, keys::PROMPT_T_EXTERNAL, 45.0)?,
        material,
        installation,
        cooling_mode,
    };

    let res = thermal::panel_cooling(input);
    let label = match res.mode {
        CoolingMode::AirConditioning => keys::RESULT_COOLING_POWER,
        CoolingMode::ForcedVentilation => keys::RESULT_AIRFLOW,
    };
    println!("{} {:.1} {}", tr.t(label), res.demand.value(), res.demand.unit());
    println!(
        "{} {:.1} W / {:.1} W / {:.2} m² / {:.1} K",
        tr.t(keys::RESULT_PANEL_BALANCE),
        res.total_power_loss_w,
        res.vfd_losses_w,
        res.surface_area_m2,
        res.delta_t_k
    );
    print_warnings(tr, &res.warnings);
    Ok(())
}

/// Y-Δ 기동 메뉴를 처리한다.
pub fn handle_star_delta(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let input = read_motor(tr, cfg, Some(MotorSupply::ThreePhase))?;
    let res = motor::star_delta(&input);
    println!("{} {:.2} A", tr.t(keys::RESULT_NOMINAL_CURRENT), res.nominal_current_a);
    println!("{} {:.2} A", tr.t(keys::RESULT_RELAY_SETTING), res.relay_setting_a);
    println!(
        "{} {:.1} A / {:.1} A / {:.1} A",
        tr.t(keys::RESULT_CONTACTORS),
        res.contactor_main_a,
        res.contactor_delta_a,
        res.contactor_star_a
    );
    println!(
        "{} {} mm² / {} mm²",
        tr.t(keys::RESULT_CABLES),
        res.feeder_section_mm2,
        res.motor_section_mm2
    );
    Ok(())
}

/// 직입 기동 보호기기 메뉴를 처리한다.
pub fn handle_motor_protection(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let input = read_motor(tr, cfg, None)?;
    let device = [ProtectionDevice::AdjustableOverload, ProtectionDevice::FixedBreaker]
        [read_option(tr, keys::DEVICE_OPTIONS, 0, 2)?];
    let res = motor::motor_protection(&input, device);
    println!("{} {:.2} A", tr.t(keys::RESULT_NOMINAL_CURRENT), res.nominal_current_a);
    match res.setting {
        ProtectionSetting::Overload { min_a, max_a } => {
            println!("{} {:.2} ~ {:.2} A", tr.t(keys::RESULT_OVERLOAD_RANGE), min_a, max_a);
        }
        ProtectionSetting::Breaker {
            target_a,
            rating_a,
            curve,
        } => {
            println!(
                "{} {:.2} A / {} A / {}",
                tr.t(keys::RESULT_BREAKER),
                target_a,
                rating_a,
                curve
            );
        }
    }
    println!("{} {} mm²", tr.t(keys::RESULT_CABLE_SECTION), res.cable_section_mm2);
    Ok(())
}

/// 기계 전동 메뉴를 처리한다.
pub fn handle_transmission(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let linear = read_option(tr, keys::MOTION_OPTIONS, 0, 2)? == 1;
    let direction = [Direction::Forward, Direction::Reverse]
        [read_option(tr, keys::DIRECTION_OPTIONS, 0, 2)?];
    let speed_key = match direction {
        Direction::Forward => keys::PROMPT_SPEED_FORWARD,
        Direction::Reverse => keys::PROMPT_SPEED_REVERSE,
    };
    let speed = read_f64(tr, speed_key, 1450.0)?;
    let motion = if linear {
        Motion::Linear {
            lead_mm_per_rev: read_f64(tr, keys::PROMPT_LEAD, cfg.defaults.lead_mm_per_rev)?,
        }
    } else {
        Motion::Rotary
    };
    let count = read_stage_count(tr)?;
    let mut stages = Vec::new();
    for n in 1..=count {
        println!("#{n}");
        let input = read_f64(tr, keys::PROMPT_STAGE_INPUT, 1.0)?;
        let output = read_f64(tr, keys::PROMPT_STAGE_OUTPUT, 1.0)?;
        stages.push(TransmissionStage::new(input, output));
    }

    let res = mechanical::transmission(speed, &stages, direction, motion);
    let (label, unit) = match (direction, res.is_linear) {
        (Direction::Forward, true) => (keys::RESULT_LINEAR_SPEED, "mm/s"),
        (Direction::Forward, false) => (keys::RESULT_OUTPUT_SPEED, "rpm"),
        (Direction::Reverse, _) => (keys::RESULT_MOTOR_SPEED, "rpm"),
    };
    println!("{} {:.1} {}", tr.t(label), res.result_value, unit);
    println!("{} {:.2}", tr.t(keys::RESULT_RATIO), res.total_ratio);
    Ok(())
}

/// 저항 색 코드 메뉴를 처리한다.
pub fn handle_resistor(tr: &Translator) -> Result<(), AppError> {
    let line = read_line(tr.t(keys::PROMPT_BANDS))?;
    let bands = line
        .split_whitespace()
        .map(str::parse::<ResistorColor>)
        .collect::<Result<Vec<_>, _>>()?;
    let reading = resistor::decode_resistor(&bands)?;
    println!(
        "{} {} ±{}%",
        tr.t(keys::RESULT_RESISTANCE),
        resistor::format_resistance(reading.ohms),
        reading.tolerance_percent
    );
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {:?} / language={}", tr.t(keys::SETTINGS_CURRENT), cfg.defaults, cfg.language);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    let d = &mut cfg.defaults;
    match sel.trim() {
        "" => return Ok(()),
        "1" => d.power_factor = read_f64(tr, keys::PROMPT_POWER_FACTOR, d.power_factor)?,
        "2" => d.efficiency = read_f64(tr, keys::PROMPT_EFFICIENCY, d.efficiency)?,
        "3" => {
            d.max_voltage_drop_percent =
                read_f64(tr, keys::PROMPT_MAX_DROP_PERCENT, d.max_voltage_drop_percent)?
        }
        "4" => {
            d.conductor_material = MATERIALS[read_option(
                tr,
                keys::MATERIAL_OPTIONS,
                index_of(&MATERIALS, d.conductor_material),
                MATERIALS.len(),
            )?]
        }
        "5" => {
            d.panel_material = PANEL_MATERIALS[read_option(
                tr,
                keys::PANEL_MATERIAL_OPTIONS,
                index_of(&PANEL_MATERIALS, d.panel_material),
                PANEL_MATERIALS.len(),
            )?]
        }
        "6" => {
            d.installation = INSTALLATIONS[read_option(
                tr,
                keys::INSTALLATION_OPTIONS,
                index_of(&INSTALLATIONS, d.installation),
                INSTALLATIONS.len(),
            )?]
        }
        "7" => {
            d.cooling_mode = COOLING_MODES[read_option(
                tr,
                keys::COOLING_MODE_OPTIONS,
                index_of(&COOLING_MODES, d.cooling_mode),
                COOLING_MODES.len(),
            )?]
        }
        "8" => d.lead_mm_per_rev = read_f64(tr, keys::PROMPT_LEAD, d.lead_mm_per_rev)?,
        "9" => {
            let lang = read_line("auto / ko / en: ")?;
            cfg.language = lang.trim().to_lowercase();
        }
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

const MATERIALS: [ConductorMaterial; 2] = [ConductorMaterial::Copper, ConductorMaterial::Aluminum];
const PANEL_MATERIALS: [PanelMaterial; 4] = [
    PanelMaterial::PaintedSteel,
    PanelMaterial::StainlessSteel,
    PanelMaterial::Aluminum,
    PanelMaterial::Plastic,
];
const INSTALLATIONS: [PanelInstallationMode; 4] = [
    PanelInstallationMode::Free,
    PanelInstallationMode::WallMounted,
    PanelInstallationMode::RowMounted,
    PanelInstallationMode::Recessed,
];
const COOLING_MODES: [CoolingMode; 2] = [
    CoolingMode::AirConditioning,
    CoolingMode::ForcedVentilation,
];

fn index_of<T: PartialEq>(items: &[T], value: T) -> usize {
    items.iter().position(|v| *v == value).unwrap_or(0)
}

fn read_system(tr: &Translator) -> Result<ElectricalSystem, AppError> {
    let idx = read_option(tr, keys::SYSTEM_OPTIONS, 1, ElectricalSystem::ALL.len())?;
    Ok(ElectricalSystem::ALL[idx])
}

fn read_material(tr: &Translator, cfg: &Config) -> Result<ConductorMaterial, AppError> {
    let default = index_of(&MATERIALS, cfg.defaults.conductor_material);
    Ok(MATERIALS[read_option(tr, keys::MATERIAL_OPTIONS, default, MATERIALS.len())?])
}

/// DC는 역률을 묻지 않는다.
fn read_power_factor(
    tr: &Translator,
    cfg: &Config,
    system: ElectricalSystem,
) -> Result<f64, AppError> {
    if system == ElectricalSystem::DC {
        return Ok(1.0);
    }
    read_f64(tr, keys::PROMPT_POWER_FACTOR, cfg.defaults.power_factor)
}

fn read_motor(
    tr: &Translator,
    cfg: &Config,
    fixed_supply: Option<MotorSupply>,
) -> Result<MotorInput, AppError> {
    let supply = match fixed_supply {
        Some(s) => s,
        None => [MotorSupply::SinglePhase, MotorSupply::ThreePhase]
            [read_option(tr, keys::MOTOR_SUPPLY_OPTIONS, 1, 2)?],
    };
    Ok(MotorInput {
        power_w: read_f64(tr, keys::PROMPT_MOTOR_POWER, 7500.0)?,
        voltage_v: read_f64(tr, keys::PROMPT_VOLTAGE, 380.0)?,
        power_factor: read_f64(tr, keys::PROMPT_POWER_FACTOR, cfg.defaults.power_factor)?,
        efficiency: read_f64(tr, keys::PROMPT_EFFICIENCY, cfg.defaults.efficiency)?,
        supply,
    })
}

fn print_warnings(tr: &Translator, warnings: &[String]) {
    for w in warnings {
        println!("{} {w}", tr.t(keys::WARNING_PREFIX));
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    read_line_from(&mut io::stdin().lock())
}

/// 한 줄을 읽는다. 더 읽을 입력이 없으면 `UnexpectedEof`를 반환한다.
fn read_line_from<R: BufRead>(reader: &mut R) -> Result<String, AppError> {
    let mut buf = String::new();
    if reader.read_line(&mut buf).map_err(AppError::Io)? == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "end of input",
        )));
    }
    Ok(buf)
}

/// 입력 스트림 종료(EOF)로 인한 오류인지 확인한다.
pub fn is_end_of_input(err: &AppError) -> bool {
    matches!(err, AppError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
}

/// 감속 단수 상한.
const MAX_STAGES: usize = 32;

fn read_stage_count(tr: &Translator) -> Result<usize, AppError> {
    loop {
        let s = read_line(&format!("{} [1]: ", tr.t(keys::PROMPT_STAGE_COUNT)))?;
        match parse_stage_count(&s, 1) {
            Some(n) => return Ok(n),
            None => println!("{} (0..={MAX_STAGES})", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 단수는 0..=MAX_STAGES 정수만 받는다. 빈 입력은 기본값.
fn parse_stage_count(s: &str, default: usize) -> Option<usize> {
    let t = s.trim();
    if t.is_empty() {
        return Some(default);
    }
    t.parse::<usize>().ok().filter(|&n| n <= MAX_STAGES)
}

/// 빈 입력은 기본값, 숫자가 아니면 다시 묻는다.
fn read_f64(tr: &Translator, label_key: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{} [{default}]: ", tr.t(label_key)))?;
        match parse_or_default(&s, default) {
            Some(v) => return Ok(v),
            None => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 번호 선택. 범위를 벗어나거나 비어 있으면 기본 인덱스를 사용한다.
fn read_option(
    tr: &Translator,
    options_key: &str,
    default_index: usize,
    count: usize,
) -> Result<usize, AppError> {
    println!("{}", tr.t(options_key));
    let sel = read_line(&format!("{}[{}] ", tr.t(keys::PROMPT_SELECT), default_index + 1))?;
    Ok(option_index(&sel, default_index, count))
}

fn read_yes_no(tr: &Translator, label_key: &str, default: bool) -> Result<bool, AppError> {
    let hint = if default { "y" } else { "n" };
    let s = read_line(&format!("{} [{hint}]: ", tr.t(label_key)))?;
    Ok(match s.trim().to_lowercase().as_str() {
        "y" | "yes" | "1" => true,
        "n" | "no" | "0" => false,
        _ => default,
    })
}

fn parse_or_default(s: &str, default: f64) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() {
        return Some(default);
    }
    // 소수점 쉼표 입력 허용
    t.replace(',', ".").parse::<f64>().ok().filter(|v| v.is_finite())
}

fn option_index(sel: &str, default_index: usize, count: usize) -> usize {
    match sel.trim().parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => n - 1,
        _ => default_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_uses_default() {
        assert_eq!(parse_or_default("  \n", 380.0), Some(380.0));
        assert_eq!(parse_or_default("0,85", 1.0), Some(0.85));
        assert_eq!(parse_or_default("abc", 1.0), None);
    }

    #[test]
    fn stage_count_is_bounded_integer() {
        assert_eq!(parse_stage_count("\n", 1), Some(1));
        assert_eq!(parse_stage_count(" 3 ", 1), Some(3));
        assert_eq!(parse_stage_count("0", 1), Some(0));
        assert_eq!(parse_stage_count("32", 1), Some(32));
        assert_eq!(parse_stage_count("33", 1), None);
        assert_eq!(parse_stage_count("1e19", 1), None);
        assert_eq!(parse_stage_count("-2", 1), None);
        assert_eq!(parse_stage_count("2.5", 1), None);
    }

    #[test]
    fn exhausted_input_is_reported() {
        let mut empty: &[u8] = b"";
        let err = read_line_from(&mut empty).expect_err("eof");
        assert!(is_end_of_input(&err));

        let mut one_line: &[u8] = b"7\n";
        assert_eq!(read_line_from(&mut one_line).expect("line"), "7\n");
        assert!(is_end_of_input(&read_line_from(&mut one_line).expect_err("eof")));

        // 빈 줄은 EOF가 아니다.
        let mut blank: &[u8] = b"\n";
        assert_eq!(read_line_from(&mut blank).expect("line"), "\n");
    }

    #[test]
    fn out_of_range_option_falls_back() {
        assert_eq!(option_index("3\n", 0, 4), 2);
        assert_eq!(option_index("9", 1, 4), 1);
        assert_eq!(option_index("", 1, 2), 1);
    }
}
