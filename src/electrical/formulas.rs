use super::system::{ConductorMaterial, ElectricalSystem};

/// 유효전력 [W]을 계산한다.
///
/// - DC: V·I
/// - 단상: V·I·pf
/// - 2상: 2·V·I·pf
/// - 3상: √3·V·I·pf
pub fn power(voltage_v: f64, current_a: f64, system: ElectricalSystem, power_factor: f64) -> f64 {
    let pf = system.effective_power_factor(power_factor);
    system.topology_constant() * voltage_v * current_a * pf
}

/// 유효전력으로부터 선전류 [A]를 계산한다. 분모가 0이면 0을 반환한다.
pub fn current(power_w: f64, voltage_v: f64, system: ElectricalSystem, power_factor: f64) -> f64 {
    let pf = system.effective_power_factor(power_factor);
    let denominator = system.topology_constant() * voltage_v * pf;
    if denominator == 0.0 {
        tracing::debug!(voltage_v, pf, "전류 계산 분모가 0이므로 0 반환");
        return 0.0;
    }
    power_w / denominator
}

fn drop_numerator(
    current_a: f64,
    length_m: f64,
    system: ElectricalSystem,
    power_factor: f64,
) -> f64 {
    let pf = system.effective_power_factor(power_factor);
    system.drop_constant() * length_m * current_a * pf
}

/// 전압강하 [V]. ΔU = k·L·I·pf / (σ·S). 단면적이 0이면 0.
pub fn voltage_drop(
    current_a: f64,
    length_m: f64,
    section_mm2: f64,
    system: ElectricalSystem,
    material: ConductorMaterial,
    power_factor: f64,
) -> f64 {
    if section_mm2 == 0.0 {
        tracing::debug!("단면적 0, 전압강하 0 반환");
        return 0.0;
    }
    drop_numerator(current_a, length_m, system, power_factor)
        / (material.conductivity() * section_mm2)
}

/// 허용 전압강하를 만족하는 이론 단면적 [mm²]. S = k·L·I·pf / (σ·ΔU). 허용값이 0이면 0.
pub fn required_section(
    current_a: f64,
    length_m: f64,
    max_drop_v: f64,
    system: ElectricalSystem,
    material: ConductorMaterial,
    power_factor: f64,
) -> f64 {
    if max_drop_v == 0.0 {
        tracing::debug!("허용 전압강하 0, 단면적 0 반환");
        return 0.0;
    }
    drop_numerator(current_a, length_m, system, power_factor)
        / (material.conductivity() * max_drop_v)
}
