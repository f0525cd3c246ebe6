use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::electrical::ConductorMaterial;
use crate::thermal::{CoolingMode, PanelInstallationMode, PanelMaterial};

/// 입력란을 비워둘 때 사용하는 계산 기본값.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcDefaults {
    pub conductor_material: ConductorMaterial,
    pub power_factor: f64,
    /// 전동기 효율 (0~1)
    pub efficiency: f64,
    /// 허용 전압강하 [%]. 전압에 곱해 V 단위 기본값을 만든다.
    pub max_voltage_drop_percent: f64,
    pub panel_material: PanelMaterial,
    pub installation: PanelInstallationMode,
    pub cooling_mode: CoolingMode,
    /// 스크류 리드 [mm/rev]
    pub lead_mm_per_rev: f64,
}

impl Default for CalcDefaults {
    fn default() -> Self {
        Self {
            conductor_material: ConductorMaterial::Copper,
            power_factor: 0.85,
            efficiency: 0.90,
            max_voltage_drop_percent: 3.0,
            panel_material: PanelMaterial::PaintedSteel,
            installation: PanelInstallationMode::WallMounted,
            cooling_mode: CoolingMode::AirConditioning,
            lead_mm_per_rev: 5.0,
        }
    }
}

impl CalcDefaults {
    /// 기준 전압에 대한 허용 전압강하 [V].
    pub fn max_voltage_drop_v(&self, voltage_v: f64) -> f64 {
        voltage_v * self.max_voltage_drop_percent / 100.0
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// "auto", "ko", "en"
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub defaults: CalcDefaults,
    /// 마지막으로 로드/저장한 경로
    #[serde(skip)]
    path: PathBuf,
}

fn default_language() -> String {
    "auto".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: default_language(),
            defaults: CalcDefaults::default(),
            path: PathBuf::from("config.toml"),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    let mut cfg = if path.exists() {
        let content = fs::read_to_string(path)?;
        toml::from_str::<Config>(&content)?
    } else {
        tracing::info!(path = %path.display(), "설정 파일이 없어 기본값으로 생성");
        let cfg = Config::default();
        save_config(&cfg, path)?;
        cfg
    };
    cfg.path = path.to_path_buf();
    Ok(cfg)
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 로드한 경로에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self, &self.path)
    }

    /// 언어 설정. "auto"면 None.
    pub fn language_override(&self) -> Option<&str> {
        match self.language.trim() {
            "" | "auto" => None,
            lang => Some(lang),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let cfg: Config = toml::from_str("language = \"en\"\n[defaults]\npower_factor = 0.9\n")
            .expect("parse");
        assert_eq!(cfg.language_override(), Some("en"));
        assert_eq!(cfg.defaults.power_factor, 0.9);
        assert_eq!(cfg.defaults.conductor_material, ConductorMaterial::Copper);
        assert_eq!(cfg.defaults.lead_mm_per_rev, 5.0);
    }

    #[test]
    fn roundtrip_through_toml() {
        let cfg = Config::default();
        let text = toml::to_string_pretty(&cfg).expect("serialize");
        let back: Config = toml::from_str(&text).expect("parse");
        assert_eq!(back.defaults.installation, PanelInstallationMode::WallMounted);
        assert_eq!(back.language_override(), None);
    }
}
