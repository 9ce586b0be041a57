use crate::imf::imf::{
    normalization_factor,
    Imf,
    ImfParameters,
    ImfType
};
use crate::math::interval::MassInterval;

const BREAK_MASS: f64 = 0.5;
const LOW_MASS_SLOPE: f64 = 1.3;
const HIGH_MASS_SLOPE: f64 = 2.3;

/// Starburst99 預設的兩段冪律 IMF，在 0.5 M☉ 處連續。
pub struct Starburst {
    mass_interval: MassInterval,
    normalization_factor: f64
}

impl Starburst {
    pub fn new(parameters: &ImfParameters) -> Starburst {
        let mut imf = Starburst {
            mass_interval: parameters.mass_interval(),
            normalization_factor: 1.0
        };
        imf.normalization_factor = normalization_factor(&imf);
        imf
    }
}

impl Imf for Starburst {
    fn imf_type(&self) -> ImfType {
        ImfType::Starburst
    }

    fn mass_interval(&self) -> MassInterval {
        self.mass_interval
    }

    fn normalization_factor(&self) -> f64 {
        self.normalization_factor
    }

    fn shape(&self, m: f64) -> f64 {
        if m < BREAK_MASS {
            m.powf(-LOW_MASS_SLOPE)
        } else {
            BREAK_MASS.powf(HIGH_MASS_SLOPE - LOW_MASS_SLOPE) * m.powf(-HIGH_MASS_SLOPE)
        }
    }
}
