use crate::imf::imf::{
    normalization_factor,
    Imf,
    ImfParameters,
    ImfType
};
use crate::math::interval::MassInterval;

const FIRST_BREAK_MASS: f64 = 0.08;
const SECOND_BREAK_MASS: f64 = 0.5;
const SLOPES: [f64; 3] = [0.3, 1.3, 2.3];

/// Kroupa (2001) 三段冪律 IMF。
///
/// 斷點 0.08 與 0.5 M☉，斜率 0.3 / 1.3 / 2.3，各段在斷點處連續。
pub struct Kroupa {
    mass_interval: MassInterval,
    normalization_factor: f64
}

impl Kroupa {
    pub fn new(parameters: &ImfParameters) -> Kroupa {
        let mut imf = Kroupa {
            mass_interval: parameters.mass_interval(),
            normalization_factor: 1.0
        };
        imf.normalization_factor = normalization_factor(&imf);
        imf
    }
}

impl Imf for Kroupa {
    fn imf_type(&self) -> ImfType {
        ImfType::Kroupa
    }

    fn mass_interval(&self) -> MassInterval {
        self.mass_interval
    }

    fn normalization_factor(&self) -> f64 {
        self.normalization_factor
    }

    fn shape(&self, m: f64) -> f64 {
        if m < FIRST_BREAK_MASS {
            (m / FIRST_BREAK_MASS).powf(-SLOPES[0])
        } else if m < SECOND_BREAK_MASS {
            (m / FIRST_BREAK_MASS).powf(-SLOPES[1])
        } else {
            (SECOND_BREAK_MASS / FIRST_BREAK_MASS).powf(-SLOPES[1])
                * (m / SECOND_BREAK_MASS).powf(-SLOPES[2])
        }
    }
}
