use std::fmt;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize
};

use crate::selection::selectionerror::SelectionError;

// ─────────────────────────────────────────────────────────────────────────────
// 太陽光球豐度表
// ─────────────────────────────────────────────────────────────────────────────
//
// 以 log ε(X) = log10(N_X / N_H) + 12 儲存，元素順序同 ELEMENTS。

pub const ELEMENTS: [&str; 12] = ["H", "He", "C", "N", "O", "Ne", "Mg", "Si", "S", "Ca", "Fe", "Ni"];

const ANDERS_GREVESSE_1989: [f64; 12] = [12.00, 10.99, 8.56, 8.05, 8.93, 8.09, 7.58, 7.55, 7.21, 6.36, 7.67, 6.25];
const GREVESSE_SAUVAL_1998: [f64; 12] = [12.00, 10.93, 8.52, 7.92, 8.83, 8.08, 7.58, 7.55, 7.33, 6.36, 7.50, 6.25];
const ASPLUND_2005: [f64; 12] = [12.00, 10.93, 8.39, 7.78, 8.66, 7.84, 7.53, 7.51, 7.14, 6.31, 7.45, 6.23];
const ASPLUND_2009: [f64; 12] = [12.00, 10.93, 8.43, 7.83, 8.69, 7.93, 7.60, 7.51, 7.12, 6.34, 7.50, 6.22];
const HEGER_2010: [f64; 12] = [12.00, 10.89, 8.39, 7.83, 8.69, 7.87, 7.55, 7.54, 7.19, 6.34, 7.47, 6.22];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbundancesType {
    #[serde(rename = "ag89")]
    AndersGrevesse1989,
    #[serde(rename = "gs98")]
    GrevesseSauval1998,
    #[serde(rename = "as05")]
    Asplund2005,
    #[serde(rename = "as09")]
    Asplund2009,
    #[serde(rename = "he10")]
    Heger2010
}

impl AbundancesType {
    pub const ALL: [AbundancesType; 5] = [
        AbundancesType::AndersGrevesse1989,
        AbundancesType::GrevesseSauval1998,
        AbundancesType::Asplund2005,
        AbundancesType::Asplund2009,
        AbundancesType::Heger2010
    ];

    pub fn key(&self) -> &'static str {
        match self {
            AbundancesType::AndersGrevesse1989 => "ag89",
            AbundancesType::GrevesseSauval1998 => "gs98",
            AbundancesType::Asplund2005 => "as05",
            AbundancesType::Asplund2009 => "as09",
            AbundancesType::Heger2010 => "he10"
        }
    }

    /// 該資料集的太陽金屬量 Z☉
    pub fn z_sun(&self) -> f64 {
        match self {
            AbundancesType::AndersGrevesse1989 => 0.0201,
            AbundancesType::GrevesseSauval1998 => 0.0170,
            AbundancesType::Asplund2005 => 0.0122,
            AbundancesType::Asplund2009 => 0.0134,
            AbundancesType::Heger2010 => 0.0133
        }
    }

    fn log_epsilon_table(&self) -> &'static [f64; 12] {
        match self {
            AbundancesType::AndersGrevesse1989 => &ANDERS_GREVESSE_1989,
            AbundancesType::GrevesseSauval1998 => &GREVESSE_SAUVAL_1998,
            AbundancesType::Asplund2005 => &ASPLUND_2005,
            AbundancesType::Asplund2009 => &ASPLUND_2009,
            AbundancesType::Heger2010 => &HEGER_2010
        }
    }
}

impl FromStr for AbundancesType {
    type Err = SelectionError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        AbundancesType::ALL
            .iter()
            .find(|abundances_type| abundances_type.key() == key)
            .copied()
            .ok_or_else(|| SelectionError::unknown_key("abundances", key))
    }
}

impl fmt::Display for AbundancesType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SolarAbundances
// ─────────────────────────────────────────────────────────────────────────────

/// 縮放到金屬量 `z` 的太陽豐度。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarAbundances {
    abundances_type: AbundancesType,
    z: f64
}

impl SolarAbundances {
    pub fn new(abundances_type: AbundancesType, z: f64) -> SolarAbundances {
        SolarAbundances { abundances_type, z }
    }

    pub fn abundances_type(&self) -> AbundancesType {
        self.abundances_type
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    pub fn z_sun(&self) -> f64 {
        self.abundances_type.z_sun()
    }

    /// [Fe/H] ≈ log10(Z / Z☉)
    pub fn feh(&self) -> f64 {
        (self.z / self.z_sun()).log10()
    }

    pub fn elements(&self) -> &'static [&'static str] {
        &ELEMENTS
    }

    /// 元素相對於 H 的數量比 N_X / N_H。
    ///
    /// H、He 取太陽值；金屬依 Z / Z☉ 線性縮放。未收錄的元素回傳 `None`。
    pub fn abundance(&self, element: &str) -> Option<f64> {
        let index = ELEMENTS.iter().position(|name| *name == element)?;
        let solar = 10.0_f64.powf(self.abundances_type.log_epsilon_table()[index] - 12.0);
        if index < 2 {
            Some(solar)
        } else {
            Some(solar * self.z / self.z_sun())
        }
    }
}

pub fn select_abundances(key: &str, z: f64) -> Result<SolarAbundances, SelectionError> {
    let abundances_type: AbundancesType = key.parse()?;
    Ok(SolarAbundances::new(abundances_type, z))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solar_metallicity_gives_zero_feh() {
        let abundances = select_abundances("as09", 0.0134).unwrap();
        assert!(abundances.feh().abs() < 1e-12);
    }

    #[test]
    fn metals_scale_with_metallicity() {
        let solar = select_abundances("gs98", 0.0170).unwrap();
        let poor = select_abundances("gs98", 0.0017).unwrap();
        let ratio = poor.abundance("Fe").unwrap() / solar.abundance("Fe").unwrap();
        assert!((ratio - 0.1).abs() < 1e-12);
        assert_eq!(poor.abundance("He"), solar.abundance("He"));
        assert_eq!(poor.abundance("U"), None);
    }
}
