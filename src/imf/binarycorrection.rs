use crate::constants::PhysicalConstants;
use crate::imf::imf::Imf;
use crate::math::interval::{
    value_in_interval,
    MassInterval
};
use crate::math::quadrature::newton_cotes;

// ─────────────────────────────────────────────────────────────────────────────
// Binary correction
// ─────────────────────────────────────────────────────────────────────────────
//
// 在 binary 總質量區間 [B_MIN, B_MAX] 內，比例 BIN_FRACTION 的質量以雙星形式形成。
// 質量 m 的恆星密度拆成三部分：
//
//   global_imf(m) = imf_zero(m) + imf_binary_primary(m) + imf_binary_secondary(m)
//
// 質量比 μ = m2 / (m1 + m2) ∈ [0, 0.5]，分布 f(μ) = 24μ²。
//   - primary：  μ = 1 - m/m_b，m_b ∈ [m, 2m]
//   - secondary：μ = m/m_b，    m_b ∈ [2m, B_MAX]

/// 雙星質量比的分布 f(μ) = 24μ²，在 [0, 0.5] 上積分為 1。
pub fn secondary_mass_fraction(mu: f64) -> f64 {
    24.0 * mu * mu
}

/// 非雙星部分的密度。
pub fn imf_zero(m: f64, imf: &dyn Imf, constants: &PhysicalConstants) -> f64 {
    if constants.binary_mass_interval().contains(m) {
        imf.for_mass(m) * (1.0 - constants.bin_fraction())
    } else {
        imf.for_mass(m)
    }
}

/// 以 binary 總質量 m_b 為自變數的被積函數：質量 m 的恆星作為 primary 的貢獻。
pub fn phi_primary<'a>(m: f64, imf: &'a dyn Imf, constants: &PhysicalConstants) -> impl Fn(f64) -> f64 + 'a {
    let bin_fraction = constants.bin_fraction();
    move |m_b: f64| {
        bin_fraction * imf.for_mass(m_b) * secondary_mass_fraction(1.0 - m / m_b) / m_b
    }
}

/// 以 binary 總質量 m_b 為自變數的被積函數：質量 m 的恆星作為 secondary 的貢獻。
pub fn phi_secondary<'a>(m: f64, imf: &'a dyn Imf, constants: &PhysicalConstants) -> impl Fn(f64) -> f64 + 'a {
    let bin_fraction = constants.bin_fraction();
    move |m_b: f64| {
        bin_fraction * imf.for_mass(m_b) * secondary_mass_fraction(m / m_b) / m_b
    }
}

/// ∫ phi_primary dm_b，積分範圍 [m, 2m] 與 [B_MIN, B_MAX] 的交集；交集為空時為 0。
pub fn imf_binary_primary(m: f64, imf: &dyn Imf, constants: &PhysicalConstants) -> f64 {
    if m <= 0.0 {
        return 0.0;
    }
    MassInterval::new(m, 2.0 * m)
        .intersect(&constants.binary_mass_interval())
        .map_or(0.0, |window| {
            newton_cotes(window.min(), window.max(), phi_primary(m, imf, constants))
        })
}

/// ∫ phi_secondary dm_b，積分範圍 [max(B_MIN, 2m), B_MAX]；為空時為 0。
pub fn imf_binary_secondary(m: f64, imf: &dyn Imf, constants: &PhysicalConstants) -> f64 {
    let m_inf = constants.b_min().max(2.0 * m);
    let m_sup = constants.b_max();
    if m <= 0.0 || m_inf >= m_sup {
        return 0.0;
    }
    newton_cotes(m_inf, m_sup, phi_secondary(m, imf, constants))
}

/// 含雙星修正的總密度。
///
/// `m < M_MIN`（含負值）回傳 0，不外插。
/// `m >= B_MAX` 時兩個雙星項皆為 0，結果等於 `imf_zero`。
pub fn global_imf(m: f64, imf: &dyn Imf, constants: &PhysicalConstants) -> f64 {
    if m < constants.m_min() {
        return 0.0;
    }
    let zero = imf_zero(m, imf, constants);
    let primary = imf_binary_primary(m, imf, constants);
    let secondary = imf_binary_secondary(m, imf, constants);
    zero + primary + secondary
}

/// ∫_{m_inf}^{m_sup} global_imf(m) dm，上下限先夾限到 [M_MIN, M_MAX]。
pub fn global_imf_integral(m_inf: f64, m_sup: f64, imf: &dyn Imf, constants: &PhysicalConstants) -> f64 {
    let interval = constants.stellar_mass_interval();
    let lower = value_in_interval(m_inf, interval);
    let upper = value_in_interval(m_sup, interval);
    if lower >= upper {
        return 0.0;
    }
    newton_cotes(lower, upper, |m| global_imf(m, imf, constants))
}
