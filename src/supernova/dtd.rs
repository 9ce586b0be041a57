use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize
};

use crate::selection::selectionerror::SelectionError;

// ─────────────────────────────────────────────────────────────────────────────
// SN Ia delay time distributions
// ─────────────────────────────────────────────────────────────────────────────
//
// 時間 t 以 Gyr 為單位，t <= 0 一律回傳 0。

pub type Dtd = fn(f64) -> f64;

const YEARS_PER_GYR: f64 = 1.0e9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DtdType {
    #[serde(rename = "rlp")]
    RuizLapuente,
    #[serde(rename = "mdvp")]
    MannucciDellaVallePanagia
}

impl DtdType {
    pub const ALL: [DtdType; 2] = [DtdType::RuizLapuente, DtdType::MannucciDellaVallePanagia];

    pub fn key(&self) -> &'static str {
        match self {
            DtdType::RuizLapuente => "rlp",
            DtdType::MannucciDellaVallePanagia => "mdvp"
        }
    }

    pub fn function(&self) -> Dtd {
        match self {
            DtdType::RuizLapuente => dtd_ruiz_lapuente,
            DtdType::MannucciDellaVallePanagia => dtd_mannucci_della_valle_panagia
        }
    }
}

impl FromStr for DtdType {
    type Err = SelectionError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        DtdType::ALL
            .iter()
            .find(|dtd_type| dtd_type.key() == key)
            .copied()
            .ok_or_else(|| SelectionError::unknown_key("DTD", key))
    }
}

impl fmt::Display for DtdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

pub fn select_dtd(key: &str) -> Result<Dtd, SelectionError> {
    key.parse::<DtdType>().map(|dtd_type| dtd_type.function())
}

/// Ruiz-Lapuente et al. (2000)：log t[yr] 上的對數常態分布。
pub fn dtd_ruiz_lapuente(t: f64) -> f64 {
    const CENTER: f64 = 8.8;
    const SIGMA: f64 = 0.5;

    if t <= 0.0 {
        return 0.0;
    }
    let x = (t * YEARS_PER_GYR).log10() - CENTER;
    (-x * x / (2.0 * SIGMA * SIGMA)).exp() / (SIGMA * (2.0 * PI).sqrt())
}

/// Mannucci, Della Valle & Panagia (2006) 雙峰分布：
///
///   log t < 7.93：log DTD = 1.4 - 50·(log t - 7.7)²
///   其餘：       log DTD = -0.8 - 0.9·(log t - 8.7)
pub fn dtd_mannucci_della_valle_panagia(t: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    let log_t = (t * YEARS_PER_GYR).log10();
    let log_dtd = if log_t < 7.93 {
        1.4 - 50.0 * (log_t - 7.7).powi(2)
    } else {
        -0.8 - 0.9 * (log_t - 8.7)
    };
    10.0_f64.powf(log_dtd)
}
