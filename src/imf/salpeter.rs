use crate::imf::imf::{
    normalization_factor,
    Imf,
    ImfParameters,
    ImfType
};
use crate::math::interval::MassInterval;

/// Salpeter (1955) 單一冪律：φ(m) ∝ m^-α
pub struct Salpeter {
    alpha: f64,
    mass_interval: MassInterval,
    normalization_factor: f64
}

impl Salpeter {
    pub fn new(parameters: &ImfParameters) -> Salpeter {
        let mut imf = Salpeter {
            alpha: parameters.alpha(),
            mass_interval: parameters.mass_interval(),
            normalization_factor: 1.0
        };
        imf.normalization_factor = normalization_factor(&imf);
        imf
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Imf for Salpeter {
    fn imf_type(&self) -> ImfType {
        ImfType::Salpeter
    }

    fn mass_interval(&self) -> MassInterval {
        self.mass_interval
    }

    fn normalization_factor(&self) -> f64 {
        self.normalization_factor
    }

    fn shape(&self, m: f64) -> f64 {
        m.powf(-self.alpha)
    }
}
