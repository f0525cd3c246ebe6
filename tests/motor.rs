use approx::assert_relative_eq;
use electro_toolbox::motor::{
    motor_protection, nominal_current, star_delta, MotorInput, MotorSupply, ProtectionDevice,
    ProtectionSetting,
};

fn motor_7_5kw() -> MotorInput {
    MotorInput {
        power_w: 7500.0,
        voltage_v: 380.0,
        power_factor: 0.85,
        efficiency: 0.90,
        supply: MotorSupply::ThreePhase,
    }
}

#[test]
fn nominal_current_three_phase() {
    let expected = 7500.0 / (3f64.sqrt() * 380.0 * 0.85 * 0.90);
    assert_relative_eq!(nominal_current(&motor_7_5kw()), expected, max_relative = 1e-12);
}

#[test]
fn nominal_current_single_phase() {
    let input = MotorInput {
        power_w: 1500.0,
        voltage_v: 230.0,
        power_factor: 0.8,
        efficiency: 0.8,
        supply: MotorSupply::SinglePhase,
    };
    assert_relative_eq!(nominal_current(&input), 1500.0 / (230.0 * 0.64), max_relative = 1e-12);
}

#[test]
fn zero_voltage_gives_zero_current() {
    let input = MotorInput {
        voltage_v: 0.0,
        ..motor_7_5kw()
    };
    assert_eq!(nominal_current(&input), 0.0);
}

#[test]
fn star_delta_decomposition() {
    let res = star_delta(&motor_7_5kw());
    let n = res.nominal_current_a;
    assert_relative_eq!(res.phase_current_a, n / 3f64.sqrt(), max_relative = 1e-12);
    assert_relative_eq!(res.contactor_star_a, n / 3.0, max_relative = 1e-12);
    assert_eq!(res.relay_setting_a, res.phase_current_a);
    assert_eq!(res.contactor_main_a, res.phase_current_a);
    assert_eq!(res.contactor_delta_a, res.phase_current_a);
    // In ≈ 14.9 A → 18.6 A → 2.5 mm², 상전류 ≈ 8.6 A → 10.75 A → 1.5 mm²
    assert_eq!(res.feeder_section_mm2, 2.5);
    assert_eq!(res.motor_section_mm2, 1.5);
}

#[test]
fn star_delta_is_always_three_phase() {
    let single = MotorInput {
        supply: MotorSupply::SinglePhase,
        ..motor_7_5kw()
    };
    assert_eq!(
        star_delta(&single).nominal_current_a,
        star_delta(&motor_7_5kw()).nominal_current_a
    );
}

#[test]
fn overload_band_is_ten_percent() {
    let res = motor_protection(&motor_7_5kw(), ProtectionDevice::AdjustableOverload);
    let n = res.nominal_current_a;
    match res.setting {
        ProtectionSetting::Overload { min_a, max_a } => {
            assert_relative_eq!(min_a, 0.9 * n, max_relative = 1e-12);
            assert_relative_eq!(max_a, 1.1 * n, max_relative = 1e-12);
        }
        other => panic!("unexpected setting {other:?}"),
    }
    assert_eq!(res.cable_section_mm2, 2.5);
}

#[test]
fn breaker_picks_next_standard_rating() {
    let res = motor_protection(&motor_7_5kw(), ProtectionDevice::FixedBreaker);
    match res.setting {
        ProtectionSetting::Breaker {
            target_a,
            rating_a,
            curve,
        } => {
            assert_relative_eq!(target_a, 1.25 * res.nominal_current_a, max_relative = 1e-12);
            assert_eq!(rating_a, 20.0);
            assert_eq!(curve, "D");
        }
        other => panic!("unexpected setting {other:?}"),
    }
}

#[test]
fn breaker_saturates_for_large_motor() {
    let input = MotorInput {
        power_w: 200_000.0,
        ..motor_7_5kw()
    };
    let res = motor_protection(&input, ProtectionDevice::FixedBreaker);
    assert!(matches!(
        res.setting,
        ProtectionSetting::Breaker { rating_a, .. } if rating_a == 125.0
    ));
    assert_eq!(res.cable_section_mm2, 300.0);
}
