use super::nominal::{nominal_current, MotorInput};
use crate::tables::{ampacity_section, breaker_rating};

/// 열동형 과부하 계전기 조정 범위 (In ±10%).
pub const OVERLOAD_BAND: f64 = 0.10;
/// 고정 정격 차단기 선정 배수 (1.25·In).
pub const BREAKER_FACTOR: f64 = 1.25;

/// 직입 기동 보호기기 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtectionDevice {
    /// 조정형 열동 계전기 / 전동기 보호 차단기
    AdjustableOverload,
    /// 고정 정격 배선용 차단기
    FixedBreaker,
}

/// 보호기기 설정값.
#[derive(Debug, Clone, PartialEq)]
pub enum ProtectionSetting {
    Overload {
        min_a: f64,
        max_a: f64,
    },
    Breaker {
        target_a: f64,
        rating_a: f64,
        /// 전동기 기동 돌입전류에 맞는 트립 곡선
        curve: &'static str,
    },
}

/// 직입 기동 보호 선정 결과.
#[derive(Debug, Clone)]
pub struct MotorProtectionResult {
    pub nominal_current_a: f64,
    pub setting: ProtectionSetting,
    /// 간선 단면적 [mm²]
    pub cable_section_mm2: f64,
}

/// 직입 기동 전동기의 보호기기 설정과 간선 단면적을 선정한다.
pub fn motor_protection(input: &MotorInput, device: ProtectionDevice) -> MotorProtectionResult {
    let nominal = nominal_current(input);
    let setting = match device {
        ProtectionDevice::AdjustableOverload => ProtectionSetting::Overload {
            min_a: nominal * (1.0 - OVERLOAD_BAND),
            max_a: nominal * (1.0 + OVERLOAD_BAND),
        },
        ProtectionDevice::FixedBreaker => {
            let target = nominal * BREAKER_FACTOR;
            ProtectionSetting::Breaker {
                target_a: target,
                rating_a: breaker_rating(target),
                curve: "D",
            }
        }
    };

    MotorProtectionResult {
        nominal_current_a: nominal,
        setting,
        cable_section_mm2: ampacity_section(nominal),
    }
}
