use serde::{Deserialize, Serialize};

/// 배전 방식. 모든 전력/전류/전압강하 식의 계수를 결정한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElectricalSystem {
    /// 직류
    DC,
    /// 단상
    SinglePhase,
    /// 2상(BI)
    TwoPhase,
    /// 3상
    ThreePhase,
}

impl ElectricalSystem {
    pub const ALL: [ElectricalSystem; 4] = [
        ElectricalSystem::DC,
        ElectricalSystem::SinglePhase,
        ElectricalSystem::TwoPhase,
        ElectricalSystem::ThreePhase,
    ];

    /// 전력식 계수: DC=1, 단상=1, 2상=2, 3상=√3.
    pub fn topology_constant(self) -> f64 {
        match self {
            ElectricalSystem::DC | ElectricalSystem::SinglePhase => 1.0,
            ElectricalSystem::TwoPhase => 2.0,
            ElectricalSystem::ThreePhase => 3f64.sqrt(),
        }
    }

    /// 전압강하/단면적 식의 분자 계수. 3상만 √3, 나머지는 왕복 2.
    pub fn drop_constant(self) -> f64 {
        match self {
            ElectricalSystem::ThreePhase => 3f64.sqrt(),
            _ => 2.0,
        }
    }

    /// DC는 역률을 항상 1로 본다.
    pub fn effective_power_factor(self, power_factor: f64) -> f64 {
        match self {
            ElectricalSystem::DC => 1.0,
            _ => power_factor,
        }
    }
}

/// 도체 재질.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConductorMaterial {
    Copper,
    Aluminum,
}

impl ConductorMaterial {
    /// 20°C 도전율 [MS/m] (IEC 60228). 고정 상수.
    pub fn conductivity(self) -> f64 {
        match self {
            ConductorMaterial::Copper => 56.0,
            ConductorMaterial::Aluminum => 35.0,
        }
    }
}
