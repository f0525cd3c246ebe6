use serde::{Deserialize, Serialize};

/// 전동기 전원 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotorSupply {
    SinglePhase,
    ThreePhase,
}

impl MotorSupply {
    pub fn topology_constant(self) -> f64 {
        match self {
            MotorSupply::SinglePhase => 1.0,
            MotorSupply::ThreePhase => 3f64.sqrt(),
        }
    }
}

/// 전동기 명판 값.
#[derive(Debug, Clone, Copy)]
pub struct MotorInput {
    /// 축 출력 [W]
    pub power_w: f64,
    pub voltage_v: f64,
    pub power_factor: f64,
    /// 효율 (0~1)
    pub efficiency: f64,
    pub supply: MotorSupply,
}

/// 정격전류 In = P / (k·V·pf·η). 분모가 0이면 0.
pub fn nominal_current(input: &MotorInput) -> f64 {
    let denominator = input.supply.topology_constant()
        * input.voltage_v
        * input.power_factor
        * input.efficiency;
    if denominator > 0.0 {
        input.power_w / denominator
    } else {
        tracing::debug!(denominator, "정격전류 분모가 0 이하, 0 반환");
        0.0
    }
}
