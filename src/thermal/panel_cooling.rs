use serde::{Deserialize, Serialize};

/// 외함 재질. IEC 60890 열관류계수 k [W/m²·K]를 결정한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelMaterial {
    PaintedSteel,
    StainlessSteel,
    Aluminum,
    Plastic,
}

impl PanelMaterial {
    pub fn k_w_per_m2k(self) -> f64 {
        match self {
            PanelMaterial::PaintedSteel => 5.5,
            PanelMaterial::StainlessSteel => 3.7,
            PanelMaterial::Aluminum => 12.0,
            PanelMaterial::Plastic => 3.5,
        }
    }
}

/// 외함 설치 형태.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelInstallationMode {
    /// 단독 자립 (6면 개방)
    Free,
    /// 벽부착 (5면 개방)
    WallMounted,
    /// 열반 배치 (4면 개방)
    RowMounted,
    /// 매입 (전면만 개방)
    Recessed,
}

impl PanelInstallationMode {
    /// 유효 열교환 면적 A [m²]. 치수는 m 단위.
    pub fn effective_area_m2(self, w: f64, h: f64, d: f64) -> f64 {
        match self {
            PanelInstallationMode::Free => 1.8 * h * (w + d) + 1.4 * w * d,
            PanelInstallationMode::WallMounted => 1.4 * w * h + 0.7 * w * d + 1.8 * d * h,
            PanelInstallationMode::RowMounted => 1.4 * w * h + 1.4 * w * d + 0.9 * d * h,
            PanelInstallationMode::Recessed => 1.4 * w * h + 0.7 * w * d,
        }
    }
}

/// 냉각 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoolingMode {
    /// 냉방기(열교환 제어): 필요 냉각능력 [W]
    AirConditioning,
    /// 강제 환기: 필요 풍량 [m³/h]
    ForcedVentilation,
}

/// 해수면 기준 공기 특성 계수 [m³·K/(W·h)].
pub const AIR_FACTOR_SEA_LEVEL: f64 = 3.1;
/// 인버터 손실 추정 비율 (정격의 3%).
pub const VFD_LOSS_RATIO: f64 = 0.03;

/// 외함 냉각 계산 입력.
#[derive(Debug, Clone)]
pub struct PanelCoolingInput {
    pub width_mm: f64,
    pub height_mm: f64,
    pub depth_mm: f64,
    /// 인버터 외 기타 발열 [W]
    pub other_losses_w: f64,
    pub vfd_count: f64,
    /// 인버터 1대당 정격 [kW]
    pub vfd_power_kw: f64,
    /// 내부 허용 온도 [°C]
    pub t_internal_c: f64,
    /// 외기 온도 [°C]
    pub t_external_c: f64,
    pub material: PanelMaterial,
    pub installation: PanelInstallationMode,
    pub cooling_mode: CoolingMode,
}

/// 필요 냉각량. 방식에 따라 단위가 다르다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoolingDemand {
    /// 냉방 능력 [W]
    CoolingPowerW(f64),
    /// 환기 풍량 [m³/h]
    AirflowM3PerH(f64),
}

impl CoolingDemand {
    pub fn value(&self) -> f64 {
        match *self {
            CoolingDemand::CoolingPowerW(v) | CoolingDemand::AirflowM3PerH(v) => v,
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            CoolingDemand::CoolingPowerW(_) => "W",
            CoolingDemand::AirflowM3PerH(_) => "m³/h",
        }
    }
}

/// 외함 냉각 계산 결과.
#[derive(Debug, Clone)]
pub struct PanelCoolingResult {
    pub demand: CoolingDemand,
    /// 총 발열량 [W]
    pub total_power_loss_w: f64,
    /// 인버터 발열 추정치 [W]
    pub vfd_losses_w: f64,
    /// 유효 열교환 면적 [m²]
    pub surface_area_m2: f64,
    /// 내부 - 외기 [K]
    pub delta_t_k: f64,
    pub mode: CoolingMode,
    /// 경고/주의 메시지
    pub warnings: Vec<String>,
}

/// 외함 열수지로부터 필요 냉각능력 또는 환기 풍량을 계산한다.
///
/// 외함 표면을 통한 자연 방열 k·A·ΔT를 총 발열에서 뺀 잔여분만 능동 냉각 대상이다.
/// ΔT가 음수(외기가 더 뜨거움)이면 외함이 오히려 열을 받아 부하가 늘어난다.
pub fn panel_cooling(input: PanelCoolingInput) -> PanelCoolingResult {
    let w = input.width_mm / 1000.0;
    let h = input.height_mm / 1000.0;
    let d = input.depth_mm / 1000.0;
    let area = input.installation.effective_area_m2(w, h, d);

    let vfd_losses = input.vfd_count * (input.vfd_power_kw * 1000.0) * VFD_LOSS_RATIO;
    let total_loss = input.other_losses_w + vfd_losses;
    let delta_t = input.t_internal_c - input.t_external_c;
    let natural = input.material.k_w_per_m2k() * area * delta_t;
    let net_loss = (total_loss - natural).max(0.0);

    let mut warnings = Vec::new();
    if net_loss == 0.0 {
        warnings.push("외함 자연 방열만으로 발열을 처리할 수 있습니다.".into());
    }

    let demand = match input.cooling_mode {
        CoolingMode::AirConditioning => CoolingDemand::CoolingPowerW(net_loss),
        CoolingMode::ForcedVentilation => {
            if delta_t <= 0.0 {
                tracing::debug!(delta_t, "ΔT ≤ 0, 환기 풍량 0 반환");
                warnings.push(format!(
                    "외기 온도 {:.1}°C가 내부 허용 온도 {:.1}°C 이상이므로 환기로 냉각할 수 없습니다. 냉방기를 검토하세요.",
                    input.t_external_c, input.t_internal_c
                ));
                CoolingDemand::AirflowM3PerH(0.0)
            } else {
                CoolingDemand::AirflowM3PerH(AIR_FACTOR_SEA_LEVEL * net_loss / delta_t)
            }
        }
    };

    PanelCoolingResult {
        demand,
        total_power_loss_w: total_loss,
        vfd_losses_w: vfd_losses,
        surface_area_m2: area,
        delta_t_k: delta_t,
        mode: input.cooling_mode,
        warnings,
    }
}
