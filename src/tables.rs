//! 규격 기반 참조 테이블과 최근접 규격값 탐색 함수를 제공한다.
//! 값은 IEC 60364-5-52 / IEC 60228 / IEC 60898 참고치이며 변경 시 계산 결과가 달라진다.

/// 도체 단면적과 허용전류 쌍.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmpacityEntry {
    /// 공칭 단면적 [mm²]
    pub section_mm2: f64,
    /// 연속 허용전류 [A]
    pub current_a: f64,
}

impl AmpacityEntry {
    pub const fn new(section_mm2: f64, current_a: f64) -> Self {
        Self {
            section_mm2,
            current_a,
        }
    }
}

const fn ae(section_mm2: f64, current_a: f64) -> AmpacityEntry {
    AmpacityEntry::new(section_mm2, current_a)
}

/// 공사방법 C(벽면 포설), PVC 70°C, 주위온도 30°C 기준 허용전류표. 단면적 오름차순.
pub const AMPACITY_TABLE: &[AmpacityEntry] = &[
    ae(1.5, 14.5),
    ae(2.5, 19.5),
    ae(4.0, 26.0),
    ae(6.0, 34.0),
    ae(10.0, 46.0),
    ae(16.0, 61.0),
    ae(25.0, 80.0),
    ae(35.0, 99.0),
    ae(50.0, 119.0),
    ae(70.0, 151.0),
    ae(95.0, 182.0),
    ae(120.0, 210.0),
    ae(150.0, 240.0),
    ae(185.0, 273.0),
    ae(240.0, 321.0),
    ae(300.0, 367.0),
];

/// 상용 케이블 공칭 단면적 [mm²]. 오름차순.
pub const COMMERCIAL_SECTIONS_MM2: &[f64] = &[
    1.5, 2.5, 4.0, 6.0, 10.0, 16.0, 25.0, 35.0, 50.0, 70.0, 95.0, 120.0, 150.0, 185.0, 240.0,
    300.0,
];

/// 표준 차단기 정격전류 [A]. 오름차순.
pub const BREAKER_RATINGS_A: &[f64] = &[
    6.0, 10.0, 16.0, 20.0, 25.0, 32.0, 40.0, 50.0, 63.0, 80.0, 100.0, 125.0,
];

/// 허용전류 선정 시 적용하는 안전계수 (1.25 × In).
pub const AMPACITY_SAFETY_FACTOR: f64 = 1.25;

/// 부하전류에 1.25배 여유를 둔 뒤 이를 만족하는 최소 단면적을 찾는다.
/// 표 범위를 넘으면 최대 단면적으로 포화한다.
pub fn ampacity_section(current_a: f64) -> f64 {
    let target = current_a * AMPACITY_SAFETY_FACTOR;
    match AMPACITY_TABLE.iter().find(|e| e.current_a >= target) {
        Some(entry) => entry.section_mm2,
        None => {
            let last = AMPACITY_TABLE[AMPACITY_TABLE.len() - 1];
            tracing::warn!(
                current_a,
                target,
                max_current_a = last.current_a,
                "허용전류표 범위 초과, 최대 단면적으로 포화"
            );
            last.section_mm2
        }
    }
}

/// 이론 단면적 이상인 최소 상용 단면적을 반환한다. 없으면 최대값.
pub fn commercial_section(theoretical_mm2: f64) -> f64 {
    next_standard(COMMERCIAL_SECTIONS_MM2, theoretical_mm2, "상용 단면적")
}

/// 목표 전류 이상인 최소 표준 차단기 정격을 반환한다. 없으면 최대값.
pub fn breaker_rating(target_a: f64) -> f64 {
    next_standard(BREAKER_RATINGS_A, target_a, "차단기 정격")
}

fn next_standard(series: &[f64], value: f64, what: &'static str) -> f64 {
    match series.iter().copied().find(|&s| s >= value) {
        Some(s) => s,
        None => {
            let max = series[series.len() - 1];
            tracing::warn!(value, max, what, "표준값 범위 초과, 최대값으로 포화");
            max
        }
    }
}
