use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{
    Deserialize,
    Serialize
};
use tracing::{
    debug,
    info
};

use crate::abundances::solarabundances::AbundancesType;
use crate::constants::{
    PhysicalConstants,
    BIN_FRACTION
};
use crate::imf::imf::{
    ImfParameters,
    ImfType,
    DEFAULT_IMF_M_LOW,
    DEFAULT_IMF_M_UP,
    DEFAULT_SALPETER_ALPHA
};
use crate::selection::selectionerror::SelectionError;
use crate::settings::settingserror::SettingsError;
use crate::supernova::dtd::DtdType;
use crate::supernova::yields::YieldsType;

/// 各個字串型設定的合法值
pub struct ValidValues {
    pub imf: Vec<&'static str>,
    pub dtd_sn: Vec<&'static str>,
    pub sol_ab: Vec<&'static str>,
    pub sn_yields: Vec<&'static str>
}

pub fn valid_values() -> ValidValues {
    ValidValues {
        imf: ImfType::ALL.iter().map(|imf_type| imf_type.key()).collect(),
        dtd_sn: DtdType::ALL.iter().map(|dtd_type| dtd_type.key()).collect(),
        sol_ab: AbundancesType::ALL.iter().map(|abundances_type| abundances_type.key()).collect(),
        sn_yields: YieldsType::ALL.iter().map(|yields_type| yields_type.key()).collect()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings
// ─────────────────────────────────────────────────────────────────────────────

/// 模型設定。JSON 中缺少的欄位取預設值。
///
/// 字串 key 在 `validate` 與各 `select_*` 時才檢查。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub z: f64,
    pub imf: String,
    pub imf_alpha: f64,
    pub imf_m_low: f64,
    pub imf_m_up: f64,
    pub dtd_sn: String,
    pub sol_ab: String,
    pub sn_yields: String,
    pub binary_fraction: f64
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            z: 0.02,
            imf: ImfType::Kroupa.key().to_owned(),
            imf_alpha: DEFAULT_SALPETER_ALPHA,
            imf_m_low: DEFAULT_IMF_M_LOW,
            imf_m_up: DEFAULT_IMF_M_UP,
            dtd_sn: DtdType::RuizLapuente.key().to_owned(),
            sol_ab: AbundancesType::Asplund2009.key().to_owned(),
            sn_yields: YieldsType::Iwamoto1998.key().to_owned(),
            binary_fraction: BIN_FRACTION
        }
    }
}

impl Settings {
    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<Settings, SettingsError> {
        let file = File::open(file_path.as_ref())?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        info!(path = %file_path.as_ref().display(), "loading settings");
        Settings::from_json(json_value)
    }

    pub fn from_json(json_value: serde_json::Value) -> Result<Settings, SettingsError> {
        let settings: Settings = serde_json::from_value(json_value)?;
        settings.validate()?;
        debug!(?settings, "settings accepted");
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        self.imf.parse::<ImfType>()?;
        self.dtd_sn.parse::<DtdType>()?;
        self.sol_ab.parse::<AbundancesType>()?;
        self.sn_yields.parse::<YieldsType>()?;

        if !(self.z >= 0.0) {
            return Err(SettingsError::invalid_value("z", format!("{} is negative", self.z)));
        }
        if !(0.0..=1.0).contains(&self.binary_fraction) {
            return Err(SettingsError::invalid_value(
                "binary_fraction",
                format!("{} is outside [0, 1]", self.binary_fraction)
            ));
        }
        self.imf_parameters()
            .map_err(|error| SettingsError::invalid_value("imf_m_low", error.to_string()))?;
        Ok(())
    }

    pub fn imf_parameters(&self) -> Result<ImfParameters, SelectionError> {
        ImfParameters::new(self.imf_alpha, self.imf_m_low, self.imf_m_up)
    }

    pub fn physical_constants(&self) -> PhysicalConstants {
        PhysicalConstants::default().with_bin_fraction(self.binary_fraction)
    }
}
