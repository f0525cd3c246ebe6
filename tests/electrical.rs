use approx::assert_relative_eq;
use electro_toolbox::electrical::{
    current, power, required_section, size_cable, voltage_drop, CableSizingInput,
    ConductorMaterial, ElectricalSystem, GoverningCriterion,
};

#[test]
fn single_phase_power() {
    let p = power(230.0, 10.0, ElectricalSystem::SinglePhase, 0.9);
    assert_relative_eq!(p, 2070.0, max_relative = 1e-12);
}

#[test]
fn dc_ignores_power_factor() {
    assert_relative_eq!(power(24.0, 5.0, ElectricalSystem::DC, 0.5), 120.0);
    assert_relative_eq!(current(120.0, 24.0, ElectricalSystem::DC, 0.5), 5.0);
}

#[test]
fn two_phase_uses_factor_two() {
    let p = power(400.0, 10.0, ElectricalSystem::TwoPhase, 0.9);
    assert_relative_eq!(p, 7200.0, max_relative = 1e-12);
}

#[test]
fn three_phase_current() {
    let i = current(7500.0, 380.0, ElectricalSystem::ThreePhase, 0.85);
    assert!((i - 13.41).abs() < 0.01, "i={i}");
}

#[test]
fn zero_denominators_return_zero() {
    assert_eq!(current(1000.0, 0.0, ElectricalSystem::ThreePhase, 0.85), 0.0);
    assert_eq!(current(1000.0, 230.0, ElectricalSystem::SinglePhase, 0.0), 0.0);
    let copper = ConductorMaterial::Copper;
    assert_eq!(
        voltage_drop(10.0, 50.0, 0.0, ElectricalSystem::SinglePhase, copper, 1.0),
        0.0
    );
    assert_eq!(
        required_section(10.0, 50.0, 0.0, ElectricalSystem::ThreePhase, copper, 0.85),
        0.0
    );
}

#[test]
fn single_phase_voltage_drop_copper() {
    let du = voltage_drop(
        10.0,
        50.0,
        2.5,
        ElectricalSystem::SinglePhase,
        ConductorMaterial::Copper,
        1.0,
    );
    assert_relative_eq!(du, 1000.0 / 140.0, max_relative = 1e-12);
}

#[test]
fn aluminum_needs_larger_section() {
    let cu = required_section(
        50.0,
        100.0,
        6.0,
        ElectricalSystem::ThreePhase,
        ConductorMaterial::Copper,
        0.9,
    );
    let al = required_section(
        50.0,
        100.0,
        6.0,
        ElectricalSystem::ThreePhase,
        ConductorMaterial::Aluminum,
        0.9,
    );
    assert_relative_eq!(al / cu, 56.0 / 35.0, max_relative = 1e-12);
}

fn cable_input(system: ElectricalSystem) -> CableSizingInput {
    CableSizingInput {
        current_a: 10.0,
        length_m: 50.0,
        max_voltage_drop_v: 11.4,
        system,
        material: ConductorMaterial::Copper,
        power_factor: 0.85,
        include_neutral: false,
        is_single_core: false,
    }
}

#[test]
fn short_run_is_governed_by_ampacity() {
    let res = size_cable(cable_input(ElectricalSystem::ThreePhase));
    assert!(res.voltage_drop_section_mm2 < 1.5);
    assert_eq!(res.ampacity_section_mm2, 1.5);
    assert_eq!(res.governing, Some(GoverningCriterion::Ampacity));
    assert_eq!(res.commercial_section_mm2, 1.5);
    assert_eq!(res.formation_label, "4x1.5");
    assert_eq!(res.descriptive_label, "3P + PE");
}

#[test]
fn long_run_is_governed_by_voltage_drop() {
    let res = size_cable(CableSizingInput {
        current_a: 20.0,
        length_m: 200.0,
        max_voltage_drop_v: 6.9,
        power_factor: 1.0,
        is_single_core: true,
        ..cable_input(ElectricalSystem::SinglePhase)
    });
    assert_relative_eq!(res.theoretical_section_mm2, 8000.0 / (56.0 * 6.9), max_relative = 1e-12);
    assert_eq!(res.ampacity_section_mm2, 4.0);
    assert_eq!(res.governing, Some(GoverningCriterion::VoltageDrop));
    assert_eq!(res.commercial_section_mm2, 25.0);
    assert_eq!(res.formation_label, "2x (1x25) + PE");
    assert!(res.is_single_core);
}

#[test]
fn three_phase_with_neutral_adds_core() {
    let res = size_cable(CableSizingInput {
        include_neutral: true,
        ..cable_input(ElectricalSystem::ThreePhase)
    });
    assert_eq!(res.formation_label, "5x1.5");
    assert_eq!(res.descriptive_label, "3P + N + PE");

    let res = size_cable(CableSizingInput {
        include_neutral: true,
        is_single_core: true,
        ..cable_input(ElectricalSystem::ThreePhase)
    });
    assert_eq!(res.formation_label, "4x (1x1.5) + PE");
}

#[test]
fn two_phase_formation() {
    let res = size_cable(cable_input(ElectricalSystem::TwoPhase));
    assert_eq!(res.formation_label, "3x1.5");
    assert_eq!(res.descriptive_label, "L1 + L2 + PE");

    let res = size_cable(CableSizingInput {
        is_single_core: true,
        ..cable_input(ElectricalSystem::TwoPhase)
    });
    assert_eq!(res.formation_label, "2x (1x1.5) + PE");
}

#[test]
fn single_phase_formation() {
    let res = size_cable(cable_input(ElectricalSystem::SinglePhase));
    assert_eq!(res.formation_label, "3x1.5");
    assert_eq!(res.descriptive_label, "L + N + PE");
}

#[test]
fn dc_formation_has_no_protective_earth() {
    let res = size_cable(cable_input(ElectricalSystem::DC));
    assert_eq!(res.formation_label, "2x1.5");
    assert_eq!(res.descriptive_label, "L+ + L-");

    let res = size_cable(CableSizingInput {
        is_single_core: true,
        ..cable_input(ElectricalSystem::DC)
    });
    assert_eq!(res.formation_label, "2x (1x1.5)");
}

#[test]
fn tie_between_criteria_reports_ampacity() {
    // DC 10 A, 42 m, 10 V: 2·42·10 / (56·10) = 1.5 mm², 12.5 A ≤ 14.5 A → 1.5 mm²
    let res = size_cable(CableSizingInput {
        length_m: 42.0,
        max_voltage_drop_v: 10.0,
        ..cable_input(ElectricalSystem::DC)
    });
    assert_eq!(res.voltage_drop_section_mm2, 1.5);
    assert_eq!(res.ampacity_section_mm2, 1.5);
    assert_eq!(res.governing, Some(GoverningCriterion::Ampacity));
}

#[test]
fn oversized_current_saturates_to_largest_section() {
    let res = size_cable(CableSizingInput {
        current_a: 400.0,
        ..cable_input(ElectricalSystem::ThreePhase)
    });
    assert_eq!(res.ampacity_section_mm2, 300.0);
    assert_eq!(res.commercial_section_mm2, 300.0);
}

#[test]
fn zero_allowed_drop_yields_empty_result() {
    let res = size_cable(CableSizingInput {
        max_voltage_drop_v: 0.0,
        is_single_core: true,
        ..cable_input(ElectricalSystem::ThreePhase)
    });
    assert_eq!(res.commercial_section_mm2, 0.0);
    assert_eq!(res.theoretical_section_mm2, 0.0);
    assert!(res.formation_label.is_empty());
    assert!(res.governing.is_none());
    assert!(res.is_single_core);
}
