use std::f64::consts::LN_10;

use crate::imf::imf::{
    normalization_factor,
    Imf,
    ImfParameters,
    ImfType
};
use crate::math::interval::MassInterval;

// Miller & Scalo (1979) 對數常態：ξ(log m) = C0·exp(-C1·(log m - C2)²)
// C0 併入正規化係數。
const C1: f64 = 1.09;
const C2: f64 = -1.02;

pub struct MillerScalo {
    mass_interval: MassInterval,
    normalization_factor: f64
}

impl MillerScalo {
    pub fn new(parameters: &ImfParameters) -> MillerScalo {
        let mut imf = MillerScalo {
            mass_interval: parameters.mass_interval(),
            normalization_factor: 1.0
        };
        imf.normalization_factor = normalization_factor(&imf);
        imf
    }
}

impl Imf for MillerScalo {
    fn imf_type(&self) -> ImfType {
        ImfType::MillerScalo
    }

    fn mass_interval(&self) -> MassInterval {
        self.mass_interval
    }

    fn normalization_factor(&self) -> f64 {
        self.normalization_factor
    }

    fn shape(&self, m: f64) -> f64 {
        let x = m.log10() - C2;
        (-C1 * x * x).exp() / (m * LN_10)
    }
}
