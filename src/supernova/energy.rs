const YEARS_PER_GYR: f64 = 1.0e9;

/// 殼層形成時間（yr）
const SHELL_FORMATION_TIME: f64 = 3.0e4;

/// 超新星殘骸在時間 `t`（Gyr）時仍保留在 ISM 的能量，單位 erg。
///
/// 殼層形成前為初始能量的 72%，之後以 (t / t_sf)^-0.62 衰減（Cioffi et al. 1988）。
pub fn total_energy_ejected(t: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    let t_years = t * YEARS_PER_GYR;
    if t_years < SHELL_FORMATION_TIME {
        7.2e50
    } else {
        2.2e50 * (t_years / SHELL_FORMATION_TIME).powf(-0.62)
    }
}
