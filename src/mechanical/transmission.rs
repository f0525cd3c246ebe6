/// 감속 1단. 기어 잇수 또는 풀리 직경.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransmissionStage {
    /// 구동측 (Z1 / D1)
    pub input: f64,
    /// 피동측 (Z2 / D2)
    pub output: f64,
}

impl TransmissionStage {
    pub const fn new(input: f64, output: f64) -> Self {
        Self { input, output }
    }
}

/// 계산 방향.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// 모터 속도 → 최종 속도
    Forward,
    /// 목표 최종 속도 → 필요 모터 속도
    Reverse,
}

/// 최종 운동 형태.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// 회전 [rpm]
    Rotary,
    /// 스크류 직선 이송 [mm/s], 리드 [mm/rev]
    Linear { lead_mm_per_rev: f64 },
}

/// 전동 계산 결과.
#[derive(Debug, Clone)]
pub struct TransmissionResult {
    /// Forward: 최종 속도 (rpm 또는 mm/s), Reverse: 필요 모터 속도 [rpm]
    pub result_value: f64,
    /// 총 감속비 Π(output/input)
    pub total_ratio: f64,
    pub is_linear: bool,
}

/// 각 단의 감속비를 곱한다. 0 이하 값을 가진 단은 건너뛴다.
pub fn total_ratio(stages: &[TransmissionStage]) -> f64 {
    stages
        .iter()
        .filter(|s| {
            let valid = s.input > 0.0 && s.output > 0.0;
            if !valid {
                tracing::debug!(input = s.input, output = s.output, "유효하지 않은 감속단 건너뜀");
            }
            valid
        })
        .map(|s| s.output / s.input)
        .product()
}

/// 다단 감속 후 속도 또는 역으로 필요한 모터 속도를 계산한다.
pub fn transmission(
    speed: f64,
    stages: &[TransmissionStage],
    direction: Direction,
    motion: Motion,
) -> TransmissionResult {
    let ratio = total_ratio(stages);
    let result_value = match (direction, motion) {
        (Direction::Forward, Motion::Rotary) => divide_or_zero(speed, ratio),
        (Direction::Reverse, Motion::Rotary) => speed * ratio,
        (Direction::Forward, Motion::Linear { lead_mm_per_rev }) => {
            let screw_rev_per_s = divide_or_zero(speed / 60.0, ratio);
            screw_rev_per_s * lead_mm_per_rev
        }
        (Direction::Reverse, Motion::Linear { lead_mm_per_rev }) => {
            let screw_rev_per_s = divide_or_zero(speed, lead_mm_per_rev);
            screw_rev_per_s * ratio * 60.0
        }
    };

    TransmissionResult {
        result_value,
        total_ratio: ratio,
        is_linear: matches!(motion, Motion::Linear { .. }),
    }
}

fn divide_or_zero(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}
