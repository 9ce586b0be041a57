use crate::imf::imf::{
    normalization_factor,
    Imf,
    ImfParameters,
    ImfType
};
use crate::math::interval::MassInterval;

const ALPHA: f64 = 2.3;
const BETA: f64 = 1.4;
const MU: f64 = 0.2;

/// Maschberger (2013) L3 IMF：
///
///   φ(m) ∝ (m/μ)^-α · (1 + (m/μ)^(1-α))^-β
///
/// 高質量端趨近 Salpeter 斜率 α，低質量端趨近 α + β(1 - α)。
pub struct Maschberger {
    mass_interval: MassInterval,
    normalization_factor: f64
}

impl Maschberger {
    pub fn new(parameters: &ImfParameters) -> Maschberger {
        let mut imf = Maschberger {
            mass_interval: parameters.mass_interval(),
            normalization_factor: 1.0
        };
        imf.normalization_factor = normalization_factor(&imf);
        imf
    }
}

impl Imf for Maschberger {
    fn imf_type(&self) -> ImfType {
        ImfType::Maschberger
    }

    fn mass_interval(&self) -> MassInterval {
        self.mass_interval
    }

    fn normalization_factor(&self) -> f64 {
        self.normalization_factor
    }

    fn shape(&self, m: f64) -> f64 {
        let x = m / MU;
        x.powf(-ALPHA) * (1.0 + x.powf(1.0 - ALPHA)).powf(-BETA)
    }
}
