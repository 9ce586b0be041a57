use std::f64::consts::LN_10;

use crate::imf::imf::{
    normalization_factor,
    Imf,
    ImfParameters,
    ImfType
};
use crate::math::interval::MassInterval;

// ─────────────────────────────────────────────────────────────────────────────
// Chabrier (2003) 單星 IMF
// ─────────────────────────────────────────────────────────────────────────────
//
//   m <= 1 M☉：ξ(log m) = 0.158·exp(-(log m - log 0.079)² / (2·0.69²))
//   m >  1 M☉：ξ(log m) = k·m^-1.3
//
// 其中 φ(m) = ξ(log m) / (m·ln10)，k 取使兩段在 m = 1 連續的值（≈ 0.0441）。

const LOG_NORMAL_AMPLITUDE: f64 = 0.158;
const CHARACTERISTIC_MASS: f64 = 0.079;
const SIGMA: f64 = 0.69;
const BREAK_MASS: f64 = 1.0;
const HIGH_MASS_SLOPE: f64 = 1.3;

fn log_normal(m: f64) -> f64 {
    let x = m.log10() - CHARACTERISTIC_MASS.log10();
    LOG_NORMAL_AMPLITUDE * (-x * x / (2.0 * SIGMA * SIGMA)).exp()
}

pub struct Chabrier {
    power_law_amplitude: f64,
    mass_interval: MassInterval,
    normalization_factor: f64
}

impl Chabrier {
    pub fn new(parameters: &ImfParameters) -> Chabrier {
        let mut imf = Chabrier {
            power_law_amplitude: log_normal(BREAK_MASS) * BREAK_MASS.powf(HIGH_MASS_SLOPE),
            mass_interval: parameters.mass_interval(),
            normalization_factor: 1.0
        };
        imf.normalization_factor = normalization_factor(&imf);
        imf
    }

    pub fn power_law_amplitude(&self) -> f64 {
        self.power_law_amplitude
    }
}

impl Imf for Chabrier {
    fn imf_type(&self) -> ImfType {
        ImfType::Chabrier
    }

    fn mass_interval(&self) -> MassInterval {
        self.mass_interval
    }

    fn normalization_factor(&self) -> f64 {
        self.normalization_factor
    }

    fn shape(&self, m: f64) -> f64 {
        let xi = if m <= BREAK_MASS {
            log_normal(m)
        } else {
            self.power_law_amplitude * m.powf(-HIGH_MASS_SLOPE)
        };
        xi / (m * LN_10)
    }
}
