use std::fmt;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize
};

use crate::selection::selectionerror::SelectionError;

// ─────────────────────────────────────────────────────────────────────────────
// Type Ia 超新星拋射質量表
// ─────────────────────────────────────────────────────────────────────────────
//
// 每次爆發各元素的拋射質量（M☉），依 [Fe/H] 分段取常數表，元素順序同 SN_ELEMENTS。

pub const SN_ELEMENTS: [&str; 11] = ["He4", "C12", "C13", "N14", "O16", "Ne", "Mg", "Si", "S", "Ca", "Fe"];

type YieldsTable = [f64; 11];

static IWAMOTO_1998_LOW_FEH: YieldsTable =
    [0.0, 0.0508, 1.56e-9, 3.31e-8, 0.133, 0.00229, 0.0158, 0.142, 0.0914, 0.0181, 0.68];
static IWAMOTO_1998_HIGH_FEH: YieldsTable =
    [0.0, 0.0483, 1.40e-6, 1.16e-6, 0.143, 0.00202, 0.0085, 0.154, 0.0846, 0.0119, 0.626];

// Seitenzahl 2013 的四組模型對應 [Fe/H] = -2, -1, -0.301, 0，以中點分段
static SEITENZAHL_2013: [(f64, YieldsTable); 3] = [
    (-1.5, [0.0, 3.16e-03, 2.72e-10, 7.22e-08, 9.47e-02, 3.74e-03, 2.90e-02, 2.89e-01, 1.15e-01, 1.77e-02, 6.72e-01]),
    (-0.65, [0.0, 3.15e-03, 1.91e-09, 4.71e-07, 9.64e-02, 3.69e-03, 2.69e-02, 2.94e-01, 1.12e-01, 1.66e-02, 6.66e-01]),
    (-0.15, [0.0, 3.10e-03, 8.47e-09, 1.80e-06, 9.87e-02, 3.06e-03, 2.02e-02, 2.90e-01, 1.12e-01, 1.57e-02, 6.46e-01])
];
static SEITENZAHL_2013_SOLAR: YieldsTable =
    [0.0, 3.04e-03, 1.74e-08, 3.21e-06, 1.01e-01, 3.53e-03, 1.52e-02, 2.84e-01, 1.11e-01, 1.47e-02, 6.22e-01];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YieldsType {
    #[serde(rename = "iwa1998")]
    Iwamoto1998,
    #[serde(rename = "sei2013")]
    Seitenzahl2013
}

impl YieldsType {
    pub const ALL: [YieldsType; 2] = [YieldsType::Iwamoto1998, YieldsType::Seitenzahl2013];

    pub fn key(&self) -> &'static str {
        match self {
            YieldsType::Iwamoto1998 => "iwa1998",
            YieldsType::Seitenzahl2013 => "sei2013"
        }
    }

    fn table(&self, feh: f64) -> &'static YieldsTable {
        match self {
            YieldsType::Iwamoto1998 => {
                if feh < -0.3 {
                    &IWAMOTO_1998_LOW_FEH
                } else {
                    &IWAMOTO_1998_HIGH_FEH
                }
            },
            YieldsType::Seitenzahl2013 => SEITENZAHL_2013
                .iter()
                .find(|(upper_feh, _)| feh <= *upper_feh)
                .map_or(&SEITENZAHL_2013_SOLAR, |(_, table)| table)
        }
    }
}

impl FromStr for YieldsType {
    type Err = SelectionError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        YieldsType::ALL
            .iter()
            .find(|yields_type| yields_type.key() == key)
            .copied()
            .ok_or_else(|| SelectionError::unknown_key("yields", key))
    }
}

impl fmt::Display for YieldsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SupernovaYields
// ─────────────────────────────────────────────────────────────────────────────

/// 某資料集在給定 [Fe/H] 下的拋射質量。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SupernovaYields {
    yields_type: YieldsType,
    feh: f64,
    masses: &'static YieldsTable
}

impl SupernovaYields {
    pub fn new(yields_type: YieldsType, feh: f64) -> SupernovaYields {
        SupernovaYields { yields_type, feh, masses: yields_type.table(feh) }
    }

    pub fn yields_type(&self) -> YieldsType {
        self.yields_type
    }

    pub fn feh(&self) -> f64 {
        self.feh
    }

    pub fn elements(&self) -> &'static [&'static str] {
        &SN_ELEMENTS
    }

    /// 未收錄的元素回傳 `None`
    pub fn mass(&self, element: &str) -> Option<f64> {
        let index = SN_ELEMENTS.iter().position(|name| *name == element)?;
        Some(self.masses[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        SN_ELEMENTS.iter().copied().zip(self.masses.iter().copied())
    }
}

/// 依資料集 key 與 [Fe/H] 取拋射質量；未知 key 回傳 `SelectionError::UnknownKey`。
pub fn yields(key: &str, feh: f64) -> Result<SupernovaYields, SelectionError> {
    let yields_type: YieldsType = key.parse()?;
    Ok(SupernovaYields::new(yields_type, feh))
}
