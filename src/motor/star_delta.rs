use super::nominal::{nominal_current, MotorInput, MotorSupply};
use crate::tables::ampacity_section;

/// Y-Δ 기동 회로 사이징 결과 (IEC 60947-4-1).
#[derive(Debug, Clone)]
pub struct StarDeltaResult {
    /// 선로 정격전류 In [A]
    pub nominal_current_a: f64,
    /// 권선 상전류 In/√3 [A]
    pub phase_current_a: f64,
    /// 열동계전기 설정값. 권선 측에 설치하므로 상전류와 같다.
    pub relay_setting_a: f64,
    /// 주 접촉기 [A]
    pub contactor_main_a: f64,
    /// Δ 접촉기 [A]
    pub contactor_delta_a: f64,
    /// Y 접촉기 In/3 [A]
    pub contactor_star_a: f64,
    /// 전원 측 간선 단면적 [mm²]
    pub feeder_section_mm2: f64,
    /// 전동기 측 6선 결선 단면적 [mm²]
    pub motor_section_mm2: f64,
}

/// Y-Δ 기동기의 접촉기·계전기 전류와 케이블 단면적을 구한다.
/// Y-Δ는 3상 전동기 전용이므로 전원 방식은 항상 3상으로 본다.
pub fn star_delta(input: &MotorInput) -> StarDeltaResult {
    let three_phase = MotorInput {
        supply: MotorSupply::ThreePhase,
        ..*input
    };
    let nominal = nominal_current(&three_phase);
    let phase = nominal / 3f64.sqrt();
    let star = nominal / 3.0;

    StarDeltaResult {
        nominal_current_a: nominal,
        phase_current_a: phase,
        relay_setting_a: phase,
        contactor_main_a: phase,
        contactor_delta_a: phase,
        contactor_star_a: star,
        feeder_section_mm2: ampacity_section(nominal),
        motor_section_mm2: ampacity_section(phase),
    }
}
