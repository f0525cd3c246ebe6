//! 저항 색 띠(4/5밴드) 판독. 색 코드는 IEC 60062 기준.

use std::str::FromStr;

/// 색 띠 색상.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResistorColor {
    Black,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
    Grey,
    White,
    Gold,
    Silver,
}

/// 색상별 의미. 해당 위치에 쓸 수 없는 색은 `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorBand {
    pub color: ResistorColor,
    pub name: &'static str,
    pub digit: Option<u8>,
    pub multiplier: Option<f64>,
    pub tolerance_percent: Option<f64>,
    /// 화면 표시용 색상
    pub hex: &'static str,
}

const fn cb(
    color: ResistorColor,
    name: &'static str,
    digit: Option<u8>,
    multiplier: Option<f64>,
    tolerance_percent: Option<f64>,
    hex: &'static str,
) -> ColorBand {
    ColorBand {
        color,
        name,
        digit,
        multiplier,
        tolerance_percent,
        hex,
    }
}

pub const COLOR_TABLE: &[ColorBand] = &[
    cb(ResistorColor::Black, "black", Some(0), Some(1.0), None, "#000000"),
    cb(ResistorColor::Brown, "brown", Some(1), Some(10.0), Some(1.0), "#8B4513"),
    cb(ResistorColor::Red, "red", Some(2), Some(100.0), Some(2.0), "#FF0000"),
    cb(ResistorColor::Orange, "orange", Some(3), Some(1_000.0), None, "#FFA500"),
    cb(ResistorColor::Yellow, "yellow", Some(4), Some(10_000.0), None, "#FFFF00"),
    cb(ResistorColor::Green, "green", Some(5), Some(100_000.0), Some(0.5), "#008000"),
    cb(ResistorColor::Blue, "blue", Some(6), Some(1_000_000.0), Some(0.25), "#0000FF"),
    cb(ResistorColor::Violet, "violet", Some(7), Some(10_000_000.0), Some(0.1), "#8F00FF"),
    cb(ResistorColor::Grey, "grey", Some(8), Some(100_000_000.0), Some(0.05), "#808080"),
    cb(ResistorColor::White, "white", Some(9), None, None, "#FFFFFF"),
    cb(ResistorColor::Gold, "gold", None, Some(0.1), Some(5.0), "#FFD700"),
    cb(ResistorColor::Silver, "silver", None, Some(0.01), Some(10.0), "#C0C0C0"),
];

impl ResistorColor {
    pub fn band(self) -> &'static ColorBand {
        // COLOR_TABLE은 enum 선언 순서와 같다.
        &COLOR_TABLE[self as usize]
    }
}

impl FromStr for ResistorColor {
    type Err = ResistorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        let key = if key == "gray" { "grey".to_string() } else { key };
        COLOR_TABLE
            .iter()
            .find(|b| b.name == key)
            .map(|b| b.color)
            .ok_or_else(|| ResistorError::UnknownColor(s.trim().to_string()))
    }
}

/// 색 띠 판독 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum ResistorError {
    /// 4 또는 5개가 아님
    BandCount(usize),
    /// 숫자 자리에 숫자가 없는 색
    NoDigit(ResistorColor),
    /// 승수 자리에 승수가 없는 색
    NoMultiplier(ResistorColor),
    /// 허용차 자리에 허용차가 없는 색
    NoTolerance(ResistorColor),
    /// 알 수 없는 색 이름
    UnknownColor(String),
}

impl std::fmt::Display for ResistorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResistorError::BandCount(n) => write!(f, "색 띠는 4개 또는 5개여야 합니다 (입력 {n}개)"),
            ResistorError::NoDigit(c) => write!(f, "{}은(는) 숫자 띠에 쓸 수 없습니다", c.band().name),
            ResistorError::NoMultiplier(c) => {
                write!(f, "{}은(는) 승수 띠에 쓸 수 없습니다", c.band().name)
            }
            ResistorError::NoTolerance(c) => {
                write!(f, "{}은(는) 허용차 띠에 쓸 수 없습니다", c.band().name)
            }
            ResistorError::UnknownColor(s) => write!(f, "알 수 없는 색: {s}"),
        }
    }
}

impl std::error::Error for ResistorError {}

/// 판독 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResistorReading {
    pub ohms: f64,
    pub tolerance_percent: f64,
}

/// 색 띠 배열을 저항값과 허용차로 변환한다.
///
/// - 4밴드: (d1·10 + d2) × m3, 허용차 = 4번째 띠
/// - 5밴드: (d1·100 + d2·10 + d3) × m4, 허용차 = 5번째 띠
pub fn decode_resistor(bands: &[ResistorColor]) -> Result<ResistorReading, ResistorError> {
    let digit_count = match bands.len() {
        4 => 2,
        5 => 3,
        n => return Err(ResistorError::BandCount(n)),
    };
    let (digits, rest) = bands.split_at(digit_count);

    let mut significand = 0.0;
    for &color in digits {
        let d = color.band().digit.ok_or(ResistorError::NoDigit(color))?;
        significand = significand * 10.0 + f64::from(d);
    }
    let multiplier = rest[0]
        .band()
        .multiplier
        .ok_or(ResistorError::NoMultiplier(rest[0]))?;
    let tolerance_percent = rest[1]
        .band()
        .tolerance_percent
        .ok_or(ResistorError::NoTolerance(rest[1]))?;

    Ok(ResistorReading {
        ohms: significand * multiplier,
        tolerance_percent,
    })
}

/// 저항값을 Ω/kΩ/MΩ/GΩ 단위로 표시한다. 예: 27000 → "27 kΩ"
pub fn format_resistance(ohms: f64) -> String {
    const PREFIXES: [(f64, &str); 3] = [(1e9, "G"), (1e6, "M"), (1e3, "k")];
    for (scale, prefix) in PREFIXES {
        if ohms.abs() >= scale {
            return format!("{} {prefix}Ω", trim_number(ohms / scale));
        }
    }
    format!("{} Ω", trim_number(ohms))
}

fn trim_number(v: f64) -> String {
    // 0.1 × 승수 조합에서 생기는 부동소수 꼬리를 잘라낸다.
    let s = format!("{:.3}", v);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_matches_enum() {
        for (i, band) in COLOR_TABLE.iter().enumerate() {
            assert_eq!(band.color as usize, i);
        }
    }

    #[test]
    fn trims_trailing_zeros() {
        assert_eq!(trim_number(4.7), "4.7");
        assert_eq!(trim_number(100.0), "100");
        assert_eq!(trim_number(0.47000000000000003), "0.47");
    }
}
