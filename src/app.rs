use crate::config::Config;
use crate::i18n::{self, Translator};
use crate::resistor::ResistorError;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 저항 색 띠 판독 오류
    Resistor(ResistorError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Resistor(e) => write!(f, "색 띠 판독 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<ResistorError> for AppError {
    fn from(value: ResistorError) -> Self {
        AppError::Resistor(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(i18n::keys::NOTE_EMPTY_DEFAULT));
    loop {
        let outcome = match ui_cli::main_menu(tr)? {
            MenuChoice::Power => ui_cli::handle_power(tr, config),
            MenuChoice::Current => ui_cli::handle_current(tr, config),
            MenuChoice::CableSection => ui_cli::handle_cable_section(tr, config),
            MenuChoice::VoltageDrop => ui_cli::handle_voltage_drop(tr, config),
            MenuChoice::PanelCooling => ui_cli::handle_panel_cooling(tr, config),
            MenuChoice::StarDelta => ui_cli::handle_star_delta(tr, config),
            MenuChoice::MotorProtection => ui_cli::handle_motor_protection(tr, config),
            MenuChoice::Transmission => ui_cli::handle_transmission(tr, config),
            MenuChoice::Resistor => ui_cli::handle_resistor(tr),
            MenuChoice::Settings => ui_cli::handle_settings(tr, config)
                .and_then(|()| config.save().map_err(AppError::from)),
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        };
        // 판독 오류는 메뉴로 돌아가 다시 입력받는다.
        match outcome {
            Err(AppError::Resistor(e)) => {
                println!("{}: {e}", tr.t(i18n::keys::ERROR_PREFIX));
            }
            Err(e) if ui_cli::is_end_of_input(&e) => {
                tracing::debug!("입력 종료, 설정 저장 후 종료");
                config.save()?;
                break;
            }
            other => other?,
        }
    }
    Ok(())
}
