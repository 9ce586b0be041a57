use crate::imf::imf::{
    normalization_factor,
    Imf,
    ImfParameters,
    ImfType
};
use crate::math::interval::MassInterval;

/// Ferrini, Palla & Penco (1990)：
///
///   φ(m) = 2.01·m^-1.52 / 10^sqrt(0.73 + log m·(1.92 + 2.07·log m))
///
/// 根號內的二次式判別式為負，對任意 m > 0 皆為正值。
pub struct Ferrini {
    mass_interval: MassInterval,
    normalization_factor: f64
}

impl Ferrini {
    pub fn new(parameters: &ImfParameters) -> Ferrini {
        let mut imf = Ferrini {
            mass_interval: parameters.mass_interval(),
            normalization_factor: 1.0
        };
        imf.normalization_factor = normalization_factor(&imf);
        imf
    }
}

impl Imf for Ferrini {
    fn imf_type(&self) -> ImfType {
        ImfType::Ferrini
    }

    fn mass_interval(&self) -> MassInterval {
        self.mass_interval
    }

    fn normalization_factor(&self) -> f64 {
        self.normalization_factor
    }

    fn shape(&self, m: f64) -> f64 {
        let log_m = m.log10();
        let exponent = (0.73 + log_m * (1.92 + 2.07 * log_m)).sqrt();
        2.01 * m.powf(-1.52) / 10.0_f64.powf(exponent)
    }
}
