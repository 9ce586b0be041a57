// ─────────────────────────────────────────────────────────────────────────────
// Newton-Cotes 閉型積分（Boole's rule，複合形式）
// ─────────────────────────────────────────────────────────────────────────────
//
// 單一 panel（4 個子區間，5 個節點）：
//
//   ∫_{x0}^{x4} f ≈ (2h/45)·(7f0 + 32f1 + 12f2 + 32f3 + 7f4)
//
// 複合形式中，相鄰 panel 共用端點，權重序列為：
//   7, 32, 12, 32, 14, 32, 12, 32, 14, ..., 32, 7
//
// 注意：
//   - panel 數固定，不做 adaptive refinement，相同輸入保證 bit-identical 結果
//   - 對 5 次以下多項式為精確

/// `newton_cotes` 使用的 panel 數（共 4·8 + 1 = 33 個節點）
pub const NEWTON_COTES_PANELS: usize = 8;

/// 以固定階數的複合 Boole rule 近似 ∫_a^b f(x) dx。
///
/// # 前置條件
/// `a <= b`。呼叫端負責排序，此處不會自動交換上下限。
/// `a == b` 時回傳 0。
pub fn newton_cotes<F>(a: f64, b: f64, f: F) -> f64
    where F: Fn(f64) -> f64 {
    newton_cotes_with_panels(a, b, NEWTON_COTES_PANELS, f)
}

pub fn newton_cotes_with_panels<F>(a: f64, b: f64, panels: usize, f: F) -> f64
    where F: Fn(f64) -> f64 {
    debug_assert!(a <= b, "integration bounds out of order: [{}, {}]", a, b);
    debug_assert!(panels > 0);
    if a == b {
        return 0.0;
    }

    let intervals = 4 * panels;
    let h = (b - a) / intervals as f64;
    let mut sum = 7.0 * (f(a) + f(b));
    for i in 1..intervals {
        let weight = match i % 4 {
            0 => 14.0,
            2 => 12.0,
            _ => 32.0
        };
        sum += weight * f(a + i as f64 * h);
    }
    2.0 * h / 45.0 * sum
}

/// 在對數等距的子區間上分段套用 `newton_cotes` 後加總。
///
/// 適用於跨越數個數量級、且在低端變化劇烈的被積函數（例如 IMF 的正規化）。
/// 需要 `0 < a <= b`。
pub fn integrate_log_spaced<F>(a: f64, b: f64, segments_per_decade: usize, f: F) -> f64
    where F: Fn(f64) -> f64 {
    debug_assert!(a > 0.0 && a <= b);
    if a == b {
        return 0.0;
    }

    let ratio = b / a;
    let segments = ((ratio.log10() * segments_per_decade as f64).ceil() as usize).max(1);
    let step = ratio.powf(1.0 / segments as f64);

    let mut result = 0.0;
    let mut lower = a;
    for k in 1..=segments {
        let upper = if k == segments { b } else { lower * step };
        result += newton_cotes(lower, upper, &f);
        lower = upper;
    }
    result
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn newton_cotes_is_exact_for_quintic() {
        let result = newton_cotes(0.0, 2.0, |x| x.powi(5) - 3.0 * x.powi(2) + 1.0);
        assert_relative_eq!(result, 64.0 / 6.0 - 8.0 + 2.0, epsilon = 1e-12);
    }

    #[test]
    fn newton_cotes_empty_interval_is_zero() {
        assert_eq!(newton_cotes(5.0, 5.0, |x| 1.0 / x), 0.0);
    }

    #[test]
    fn newton_cotes_is_deterministic() {
        let f = |x: f64| (-x).exp() * x.sin();
        assert_eq!(newton_cotes(0.3, 7.1, f), newton_cotes(0.3, 7.1, f));
    }

    #[test]
    fn log_spaced_integration_handles_steep_power_law() {
        // ∫_{0.1}^{100} m^-1.35 dm
        let exact = (0.1_f64.powf(-0.35) - 100.0_f64.powf(-0.35)) / 0.35;
        let result = integrate_log_spaced(0.1, 100.0, 4, |m| m.powf(-1.35));
        assert_relative_eq!(result, exact, max_relative = 1e-8);
    }
}
