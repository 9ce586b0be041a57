use serde::{
    Deserialize,
    Serialize
};

use crate::math::interval::MassInterval;

// ─────────────────────────────────────────────────────────────────────────────
// 預設物理常數（太陽質量為單位）
// ─────────────────────────────────────────────────────────────────────────────

pub const M_MIN: f64 = 0.1;
pub const M_MAX: f64 = 100.0;
pub const B_MIN: f64 = 3.0;
pub const B_MAX: f64 = 16.0;
pub const BIN_FRACTION: f64 = 0.15;

/// IMF 核心所需的物理常數。
///
/// # 設計說明
/// 不使用全域狀態，而是以不可變值顯式傳入每個需要的函數，
/// 讓 binary fraction 可以由 settings 覆寫，且各計算保持無副作用。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalConstants {
    m_min: f64,
    m_max: f64,
    b_min: f64,
    b_max: f64,
    bin_fraction: f64
}

impl PhysicalConstants {
    pub fn new(m_min: f64, m_max: f64, b_min: f64, b_max: f64, bin_fraction: f64) -> PhysicalConstants {
        debug_assert!(m_min <= m_max && b_min <= b_max);
        debug_assert!((0.0..=1.0).contains(&bin_fraction));
        PhysicalConstants { m_min, m_max, b_min, b_max, bin_fraction }
    }

    pub fn with_bin_fraction(&self, bin_fraction: f64) -> PhysicalConstants {
        PhysicalConstants::new(self.m_min, self.m_max, self.b_min, self.b_max, bin_fraction)
    }

    pub fn m_min(&self) -> f64 {
        self.m_min
    }

    pub fn m_max(&self) -> f64 {
        self.m_max
    }

    pub fn b_min(&self) -> f64 {
        self.b_min
    }

    pub fn b_max(&self) -> f64 {
        self.b_max
    }

    pub fn bin_fraction(&self) -> f64 {
        self.bin_fraction
    }

    pub fn stellar_mass_interval(&self) -> MassInterval {
        MassInterval::new(self.m_min, self.m_max)
    }

    pub fn binary_mass_interval(&self) -> MassInterval {
        MassInterval::new(self.b_min, self.b_max)
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        PhysicalConstants::new(M_MIN, M_MAX, B_MIN, B_MAX, BIN_FRACTION)
    }
}
