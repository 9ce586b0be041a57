use std::sync::Arc;

use tracing::debug;

use crate::imf::chabrier::Chabrier;
use crate::imf::ferrini::Ferrini;
use crate::imf::imf::{
    Imf,
    ImfParameters,
    ImfType
};
use crate::imf::kroupa::Kroupa;
use crate::imf::maschberger::Maschberger;
use crate::imf::millerscalo::MillerScalo;
use crate::imf::salpeter::Salpeter;
use crate::imf::starburst::Starburst;
use crate::selection::selectionerror::SelectionError;
use crate::settings::settings::Settings;

/// 依 key 建構 IMF，參數取自 `settings`。
///
/// 未知 key 回傳 `SelectionError::UnknownModel`；
/// 斜率或質量區間不合法時回傳 `SelectionError::InvalidParameters`。
pub fn select_imf(key: &str, settings: &Settings) -> Result<Arc<dyn Imf>, SelectionError> {
    let imf_type: ImfType = key.parse()?;
    let parameters = settings.imf_parameters()?;
    Ok(build_imf(imf_type, &parameters))
}

pub fn build_imf(imf_type: ImfType, parameters: &ImfParameters) -> Arc<dyn Imf> {
    debug!(imf = %imf_type, ?parameters, "building IMF");
    match imf_type {
        ImfType::Salpeter => Arc::new(Salpeter::new(parameters)),
        ImfType::Starburst => Arc::new(Starburst::new(parameters)),
        ImfType::Chabrier => Arc::new(Chabrier::new(parameters)),
        ImfType::Ferrini => Arc::new(Ferrini::new(parameters)),
        ImfType::Kroupa => Arc::new(Kroupa::new(parameters)),
        ImfType::MillerScalo => Arc::new(MillerScalo::new(parameters)),
        ImfType::Maschberger => Arc::new(Maschberger::new(parameters))
    }
}
