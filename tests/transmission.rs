use approx::assert_relative_eq;
use electro_toolbox::mechanical::{
    total_ratio, transmission, Direction, Motion, TransmissionStage,
};

const GEARBOX: [TransmissionStage; 2] = [
    TransmissionStage::new(20.0, 40.0),
    TransmissionStage::new(10.0, 30.0),
];

#[test]
fn ratio_is_product_of_stages() {
    assert_relative_eq!(total_ratio(&GEARBOX), 6.0);
}

#[test]
fn forward_rotary_divides_by_ratio() {
    let res = transmission(1450.0, &GEARBOX, Direction::Forward, Motion::Rotary);
    assert_relative_eq!(res.result_value, 1450.0 / 6.0, max_relative = 1e-12);
    assert!(!res.is_linear);
}

#[test]
fn reverse_rotary_multiplies_by_ratio() {
    let res = transmission(100.0, &GEARBOX, Direction::Reverse, Motion::Rotary);
    assert_relative_eq!(res.result_value, 600.0, max_relative = 1e-12);
}

#[test]
fn forward_linear_uses_screw_lead() {
    let motion = Motion::Linear { lead_mm_per_rev: 5.0 };
    let res = transmission(1450.0, &GEARBOX, Direction::Forward, motion);
    assert_relative_eq!(res.result_value, 1450.0 / 60.0 / 6.0 * 5.0, max_relative = 1e-12);
    assert!(res.is_linear);
}

#[test]
fn reverse_linear_finds_motor_speed() {
    let motion = Motion::Linear { lead_mm_per_rev: 5.0 };
    let res = transmission(20.0, &GEARBOX, Direction::Reverse, motion);
    assert_relative_eq!(res.result_value, 1440.0, max_relative = 1e-12);
}

#[test]
fn invalid_stage_is_skipped() {
    let stages = [TransmissionStage::new(0.0, 10.0), TransmissionStage::new(15.0, 45.0)];
    assert_relative_eq!(total_ratio(&stages), 3.0);
}

#[test]
fn no_stages_is_direct_drive() {
    let res = transmission(1450.0, &[], Direction::Forward, Motion::Rotary);
    assert_eq!(res.total_ratio, 1.0);
    assert_eq!(res.result_value, 1450.0);
}

#[test]
fn zero_lead_in_reverse_gives_zero() {
    let motion = Motion::Linear { lead_mm_per_rev: 0.0 };
    let res = transmission(20.0, &GEARBOX, Direction::Reverse, motion);
    assert_eq!(res.result_value, 0.0);
}
