use std::fmt;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize
};
use tracing::debug;

use crate::constants::M_MAX;
use crate::math::interval::MassInterval;
use crate::math::quadrature::{
    integrate_log_spaced,
    newton_cotes
};
use crate::selection::selectionerror::SelectionError;

/// 正規化積分時每個數量級切分的子區間數
pub const NORMALIZATION_SEGMENTS_PER_DECADE: usize = 8;

pub const DEFAULT_SALPETER_ALPHA: f64 = 2.35;
pub const DEFAULT_IMF_M_LOW: f64 = 0.15;
pub const DEFAULT_IMF_M_UP: f64 = M_MAX;

// ─────────────────────────────────────────────────────────────────────────────
// ImfType
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImfType {
    Salpeter,
    Starburst,
    Chabrier,
    Ferrini,
    Kroupa,
    MillerScalo,
    Maschberger
}

impl ImfType {
    pub const ALL: [ImfType; 7] = [
        ImfType::Salpeter,
        ImfType::Starburst,
        ImfType::Chabrier,
        ImfType::Ferrini,
        ImfType::Kroupa,
        ImfType::MillerScalo,
        ImfType::Maschberger
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ImfType::Salpeter => "salpeter",
            ImfType::Starburst => "starburst",
            ImfType::Chabrier => "chabrier",
            ImfType::Ferrini => "ferrini",
            ImfType::Kroupa => "kroupa",
            ImfType::MillerScalo => "miller_scalo",
            ImfType::Maschberger => "maschberger"
        }
    }
}

impl FromStr for ImfType {
    type Err = SelectionError;

    /// 大小寫敏感，未知 key 不做任何 fallback。
    fn from_str(key: &str) -> Result<Self, Self::Err> {
        ImfType::ALL
            .iter()
            .find(|imf_type| imf_type.key() == key)
            .copied()
            .ok_or_else(|| SelectionError::UnknownModel(key.to_owned()))
    }
}

impl fmt::Display for ImfType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ImfParameters
// ─────────────────────────────────────────────────────────────────────────────

/// 建構 IMF 時可由 settings 覆寫的參數。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImfParameters {
    alpha: f64,
    mass_interval: MassInterval
}

impl ImfParameters {
    /// 需要有限的 `alpha` 與 `0 < m_low < m_up < ∞`，否則回傳 `InvalidParameters`。
    pub fn new(alpha: f64, m_low: f64, m_up: f64) -> Result<ImfParameters, SelectionError> {
        if !alpha.is_finite() {
            return Err(SelectionError::InvalidParameters(format!("IMF slope {} is not finite", alpha)));
        }
        if !(m_low > 0.0 && m_low < m_up && m_up.is_finite()) {
            return Err(SelectionError::InvalidParameters(
                format!("[{}, {}] is not a valid IMF mass interval", m_low, m_up)
            ));
        }
        Ok(ImfParameters { alpha, mass_interval: MassInterval::new(m_low, m_up) })
    }

    /// Salpeter 斜率；其他模型忽略此值
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn mass_interval(&self) -> MassInterval {
        self.mass_interval
    }
}

impl Default for ImfParameters {
    fn default() -> Self {
        ImfParameters {
            alpha: DEFAULT_SALPETER_ALPHA,
            mass_interval: MassInterval::new(DEFAULT_IMF_M_LOW, DEFAULT_IMF_M_UP)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Imf trait
// ─────────────────────────────────────────────────────────────────────────────

/// Initial mass function φ(m) = dN/dm。
///
/// 各模型只需提供未正規化的 `shape`；`for_mass` 乘上建構時算好的
/// 正規化係數，使 ∫ m·φ(m) dm 在模型的質量區間上為 1（每單位形成質量的星數）。
///
/// `Send + Sync` 為 supertrait，使 `Arc<dyn Imf>` 可跨執行緒共享。
pub trait Imf: Send + Sync {
    fn imf_type(&self) -> ImfType;

    fn mass_interval(&self) -> MassInterval;

    fn normalization_factor(&self) -> f64;

    fn shape(&self, m: f64) -> f64;

    fn for_mass(&self, m: f64) -> f64 {
        self.normalization_factor() * self.shape(m)
    }

    fn m_min(&self) -> f64 {
        self.mass_interval().min()
    }

    fn m_max(&self) -> f64 {
        self.mass_interval().max()
    }

    /// ∫_{m_inf}^{m_sup} φ(m) dm
    fn stars_per_mass_unit(&self, m_inf: f64, m_sup: f64) -> f64 {
        newton_cotes(m_inf, m_sup, |m| self.for_mass(m))
    }

    /// ∫_{m_inf}^{m_sup} m·φ(m) dm
    fn integrated_mass(&self, m_inf: f64, m_sup: f64) -> f64 {
        newton_cotes(m_inf, m_sup, |m| m * self.for_mass(m))
    }
}

/// 計算使 `imf.shape` 在其質量區間上總質量為 1 的係數。
pub fn normalization_factor<T>(imf: &T) -> f64
    where T: Imf + ?Sized {
    let mass_interval = imf.mass_interval();
    let total_mass = integrate_log_spaced(
        mass_interval.min(),
        mass_interval.max(),
        NORMALIZATION_SEGMENTS_PER_DECADE,
        |m| m * imf.shape(m)
    );
    debug!(imf = %imf.imf_type(), total_mass, "normalizing IMF");
    1.0 / total_mass
}
