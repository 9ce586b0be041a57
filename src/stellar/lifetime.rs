use tracing::debug;

use crate::constants::{
    M_MAX,
    M_MIN
};
use crate::math::interval::{
    value_in_interval,
    MassInterval
};
use crate::math::rootfinding::{
    brent_root,
    RootFindingError
};

// ─────────────────────────────────────────────────────────────────────────────
// 主序星壽命－質量關係（Raiteri, Villata & Navarro 1996）
// ─────────────────────────────────────────────────────────────────────────────
//
//   log τ[yr] = a0(Z) + a1(Z)·log m + a2(Z)·(log m)²
//
// 係數為 log Z 的二次式。Z 夾限在擬合有效範圍 [7e-5, 0.03] 內；
// 在此範圍與 [M_MIN, M_MAX] 上，拋物線頂點皆位於 M_MAX 之上，τ 對 m 嚴格遞減。

pub const METALLICITY_INTERVAL: [f64; 2] = [7.0e-5, 0.03];

const YEARS_PER_GYR: f64 = 1.0e9;

#[derive(Debug, Clone, Copy, PartialEq)]
struct LifetimeCoefficients {
    a0: f64,
    a1: f64,
    a2: f64
}

impl LifetimeCoefficients {
    fn for_metallicity(z: f64) -> LifetimeCoefficients {
        let log_z = value_in_interval(z, METALLICITY_INTERVAL).log10();
        LifetimeCoefficients {
            a0: 10.13 + 0.07547 * log_z - 0.008084 * log_z * log_z,
            a1: -4.424 - 0.7939 * log_z - 0.1187 * log_z * log_z,
            a2: 1.262 + 0.3385 * log_z + 0.05417 * log_z * log_z
        }
    }

    /// log10 τ[yr]，以 log10 m 為自變數
    fn log_lifetime(&self, log_m: f64) -> f64 {
        self.a0 + log_m * (self.a1 + self.a2 * log_m)
    }
}

/// 質量 `m`（M☉）、金屬量 `z` 的恆星主序壽命，單位 Gyr。
pub fn stellar_lifetime(m: f64, z: f64) -> f64 {
    let coefficients = LifetimeCoefficients::for_metallicity(z);
    10.0_f64.powf(coefficients.log_lifetime(m.log10())) / YEARS_PER_GYR
}

/// `stellar_lifetime` 的反函數：壽命 `t`（Gyr）對應的恆星質量。
///
/// 以 Brent 法在 log m ∈ [log M_MIN, log M_MAX] 上求根。
/// `t` 先夾限到該質量區間對應的壽命範圍，因此非正值或超出範圍的壽命
/// 仍經由同一迭代收斂到區間端點的有限質量。
pub fn stellar_mass(t: f64, z: f64) -> Result<f64, RootFindingError> {
    stellar_mass_in_interval(t, z, MassInterval::new(M_MIN, M_MAX))
}

pub fn stellar_mass_in_interval(t: f64, z: f64, mass_interval: MassInterval) -> Result<f64, RootFindingError> {
    let coefficients = LifetimeCoefficients::for_metallicity(z);
    let log_m_min = mass_interval.min().log10();
    let log_m_max = mass_interval.max().log10();

    let lifetime_interval = MassInterval::new(
        coefficients.log_lifetime(log_m_max),
        coefficients.log_lifetime(log_m_min)
    );
    // f64::max 忽略 NaN：t < 0 的 log 為 NaN、t = 0 為 -inf，皆落在下界
    let log_t = (t * YEARS_PER_GYR)
        .log10()
        .max(lifetime_interval.min())
        .min(lifetime_interval.max());
    debug!(t, z, log_t, "inverting stellar lifetime");

    let log_m = brent_root(log_m_min, log_m_max, |log_m| coefficients.log_lifetime(log_m) - log_t)?;
    Ok(10.0_f64.powf(log_m))
}
