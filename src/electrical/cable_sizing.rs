use super::formulas::required_section;
use super::system::{ConductorMaterial, ElectricalSystem};
use crate::tables::{ampacity_section, commercial_section};

/// 케이블 사이징 입력값.
#[derive(Debug, Clone)]
pub struct CableSizingInput {
    pub current_a: f64,
    pub length_m: f64,
    /// 허용 전압강하 [V]
    pub max_voltage_drop_v: f64,
    pub system: ElectricalSystem,
    pub material: ConductorMaterial,
    pub power_factor: f64,
    /// 3상에서 중성선 포함 여부. 다른 방식에서는 무시한다.
    pub include_neutral: bool,
    /// true=단심(개별 도체), false=다심(일괄 케이블)
    pub is_single_core: bool,
}

/// 단면적 결정에 지배적이었던 조건.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoverningCriterion {
    VoltageDrop,
    Ampacity,
}

/// 케이블 사이징 결과.
#[derive(Debug, Clone)]
pub struct CableSizingResult {
    /// 두 조건 중 큰 값 [mm²]
    pub theoretical_section_mm2: f64,
    /// 전압강하 기준 단면적 [mm²]
    pub voltage_drop_section_mm2: f64,
    /// 허용전류(1.25·I) 기준 단면적 [mm²]
    pub ampacity_section_mm2: f64,
    /// 상용 규격 단면적 [mm²]
    pub commercial_section_mm2: f64,
    /// 두 기준 단면적이 같으면 `Ampacity`. 허용 전압강하가 0이면 `None`.
    pub governing: Option<GoverningCriterion>,
    /// 예: "5x16", "4x (1x25) + PE"
    pub formation_label: String,
    /// 예: "3P + N + PE"
    pub descriptive_label: String,
    pub is_single_core: bool,
}

impl CableSizingResult {
    fn empty(is_single_core: bool) -> Self {
        Self {
            theoretical_section_mm2: 0.0,
            voltage_drop_section_mm2: 0.0,
            ampacity_section_mm2: 0.0,
            commercial_section_mm2: 0.0,
            governing: None,
            formation_label: String::new(),
            descriptive_label: String::new(),
            is_single_core,
        }
    }
}

/// 전압강하와 허용전류를 모두 만족하는 상용 케이블 단면적과 구성을 선정한다.
///
/// 허용 전압강하가 0이면 빈 결과를 반환한다.
pub fn size_cable(input: CableSizingInput) -> CableSizingResult {
    if input.max_voltage_drop_v == 0.0 {
        tracing::debug!("허용 전압강하 0, 빈 사이징 결과 반환");
        return CableSizingResult::empty(input.is_single_core);
    }

    let vd_section = required_section(
        input.current_a,
        input.length_m,
        input.max_voltage_drop_v,
        input.system,
        input.material,
        input.power_factor,
    );
    let amp_section = ampacity_section(input.current_a);

    let (theoretical, governing) = if vd_section > amp_section {
        (vd_section, GoverningCriterion::VoltageDrop)
    } else {
        (amp_section, GoverningCriterion::Ampacity)
    };
    let commercial = commercial_section(theoretical);
    let conductors = Conductors::for_system(input.system, input.include_neutral);

    CableSizingResult {
        theoretical_section_mm2: theoretical,
        voltage_drop_section_mm2: vd_section,
        ampacity_section_mm2: amp_section,
        commercial_section_mm2: commercial,
        governing: Some(governing),
        formation_label: conductors.formation(commercial, input.is_single_core),
        descriptive_label: conductors.description().to_string(),
        is_single_core: input.is_single_core,
    }
}

/// 방식별 도체 구성.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Conductors {
    /// 충전 도체 수 (상선 + 중성선)
    live: u8,
    /// 보호도체(PE) 포함 여부
    protective_earth: bool,
    description: &'static str,
}

impl Conductors {
    fn for_system(system: ElectricalSystem, include_neutral: bool) -> Self {
        match system {
            ElectricalSystem::DC => Self {
                live: 2,
                protective_earth: false,
                description: "L+ + L-",
            },
            ElectricalSystem::SinglePhase => Self {
                live: 2,
                protective_earth: true,
                description: "L + N + PE",
            },
            ElectricalSystem::TwoPhase => Self {
                live: 2,
                protective_earth: true,
                description: "L1 + L2 + PE",
            },
            ElectricalSystem::ThreePhase if include_neutral => Self {
                live: 4,
                protective_earth: true,
                description: "3P + N + PE",
            },
            ElectricalSystem::ThreePhase => Self {
                live: 3,
                protective_earth: true,
                description: "3P + PE",
            },
        }
    }

    /// 다심 케이블은 PE 심선을 포함한 심수, 단심 포설은 충전 도체 + 별도 PE로 표기한다.
    fn formation(&self, section_mm2: f64, is_single_core: bool) -> String {
        if is_single_core {
            let pe = if self.protective_earth { " + PE" } else { "" };
            format!("{}x (1x{}){}", self.live, section_mm2, pe)
        } else {
            let cores = self.live + u8::from(self.protective_earth);
            format!("{}x{}", cores, section_mm2)
        }
    }

    fn description(&self) -> &'static str {
        self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multicore_counts_earth_as_core() {
        let c = Conductors::for_system(ElectricalSystem::ThreePhase, true);
        assert_eq!(c.formation(16.0, false), "5x16");
        let c = Conductors::for_system(ElectricalSystem::SinglePhase, false);
        assert_eq!(c.formation(2.5, false), "3x2.5");
    }

    #[test]
    fn single_core_lists_earth_separately() {
        let c = Conductors::for_system(ElectricalSystem::ThreePhase, false);
        assert_eq!(c.formation(25.0, true), "3x (1x25) + PE");
        let c = Conductors::for_system(ElectricalSystem::DC, false);
        assert_eq!(c.formation(4.0, true), "2x (1x4)");
    }

    #[test]
    fn neutral_flag_only_affects_three_phase() {
        assert_eq!(
            Conductors::for_system(ElectricalSystem::SinglePhase, true),
            Conductors::for_system(ElectricalSystem::SinglePhase, false)
        );
    }
}
