use approx::assert_relative_eq;
use electro_toolbox::resistor::{decode_resistor, format_resistance, ResistorColor, ResistorError};
use ResistorColor::*;

#[test]
fn four_band_reading() {
    let r = decode_resistor(&[Red, Violet, Orange, Gold]).expect("valid bands");
    assert_relative_eq!(r.ohms, 27_000.0);
    assert_eq!(r.tolerance_percent, 5.0);
    assert_eq!(format_resistance(r.ohms), "27 kΩ");
}

#[test]
fn five_band_reading() {
    let r = decode_resistor(&[Brown, Black, Black, Red, Brown]).expect("valid bands");
    assert_relative_eq!(r.ohms, 10_000.0);
    assert_eq!(r.tolerance_percent, 1.0);
}

#[test]
fn fractional_multiplier() {
    let r = decode_resistor(&[Yellow, Violet, Gold, Gold]).expect("valid bands");
    assert_eq!(format_resistance(r.ohms), "4.7 Ω");
}

#[test]
fn rejects_wrong_band_count() {
    assert_eq!(
        decode_resistor(&[Red, Red, Red]),
        Err(ResistorError::BandCount(3))
    );
}

#[test]
fn rejects_colors_in_wrong_position() {
    assert_eq!(
        decode_resistor(&[Gold, Red, Red, Gold]),
        Err(ResistorError::NoDigit(Gold))
    );
    assert_eq!(
        decode_resistor(&[Red, Violet, White, Gold]),
        Err(ResistorError::NoMultiplier(White))
    );
    assert_eq!(
        decode_resistor(&[Red, Violet, Orange, Orange]),
        Err(ResistorError::NoTolerance(Orange))
    );
}

#[test]
fn parses_color_names() {
    assert_eq!("Gray".parse::<ResistorColor>(), Ok(Grey));
    assert_eq!(" VIOLET ".parse::<ResistorColor>(), Ok(Violet));
    assert!(matches!(
        "purple".parse::<ResistorColor>(),
        Err(ResistorError::UnknownColor(_))
    ));
}

#[test]
fn formats_large_values() {
    assert_eq!(format_resistance(1_000_000.0), "1 MΩ");
    assert_eq!(format_resistance(2_200_000_000.0), "2.2 GΩ");
    assert_eq!(format_resistance(0.47), "0.47 Ω");
}
