use std::thread;

use approx::assert_relative_eq;

use galchem::constants::PhysicalConstants;
use galchem::imf::binarycorrection::{
    global_imf,
    global_imf_integral
};
use galchem::imf::imf::{
    Imf,
    ImfParameters,
    ImfType
};
use galchem::imf::imfselector::{
    build_imf,
    select_imf
};
use galchem::imf::salpeter::Salpeter;
use galchem::math::quadrature::integrate_log_spaced;
use galchem::selection::selectionerror::SelectionError;
use galchem::settings::settings::Settings;

/// 各模型分段函數的接點；平滑模型取兩個代表質量
fn break_masses(imf_type: ImfType) -> &'static [f64] {
    match imf_type {
        ImfType::Kroupa => &[0.08, 0.5],
        ImfType::Starburst => &[0.5],
        ImfType::Chabrier => &[1.0],
        ImfType::Salpeter
        | ImfType::Ferrini
        | ImfType::MillerScalo
        | ImfType::Maschberger => &[0.5, 1.0]
    }
}

#[test]
fn salpeter_normalization_matches_closed_form() {
    let alpha = 2.35;
    let (m_low, m_up) = (0.1, 100.0);
    let imf = Salpeter::new(&ImfParameters::new(alpha, m_low, m_up).unwrap());

    let total_mass = (m_up.powf(2.0 - alpha) - m_low.powf(2.0 - alpha)) / (2.0 - alpha);
    assert_relative_eq!(imf.normalization_factor(), 1.0 / total_mass, max_relative = 1e-8);
    assert_relative_eq!(imf.for_mass(1.0), 1.0 / total_mass, max_relative = 1e-8);
}

#[test]
fn every_model_forms_unit_mass() {
    let parameters = ImfParameters::default();
    for imf_type in ImfType::ALL {
        let imf = build_imf(imf_type, &parameters);
        let total_mass = integrate_log_spaced(imf.m_min(), imf.m_max(), 16, |m| m * imf.for_mass(m));
        assert_relative_eq!(total_mass, 1.0, max_relative = 1e-4);
    }
}

#[test]
fn densities_are_positive_and_continuous_at_breaks() {
    let parameters = ImfParameters::default();
    for imf_type in ImfType::ALL {
        let imf = build_imf(imf_type, &parameters);
        for &break_mass in break_masses(imf_type) {
            let below = imf.for_mass(break_mass * (1.0 - 1e-9));
            let above = imf.for_mass(break_mass * (1.0 + 1e-9));
            assert!(below > 0.0 && above > 0.0, "{} not positive at {}", imf_type, break_mass);
            assert_relative_eq!(below, above, max_relative = 1e-6);
        }
    }
}

#[test]
fn settings_override_imf_parameters() {
    let mut settings = Settings::default();
    settings.imf_alpha = 2.7;
    settings.imf_m_low = 0.5;
    settings.imf_m_up = 60.0;

    let imf = select_imf("salpeter", &settings).unwrap();
    assert_eq!(imf.m_min(), 0.5);
    assert_eq!(imf.m_max(), 60.0);
    assert_relative_eq!(imf.for_mass(2.0) / imf.for_mass(1.0), 2.0_f64.powf(-2.7), max_relative = 1e-12);
}

#[test]
fn invalid_mass_bounds_are_rejected_before_normalization() {
    let inverted = Settings { imf_m_low: 50.0, imf_m_up: 10.0, ..Settings::default() };
    let zero_low = Settings { imf_m_low: 0.0, ..Settings::default() };
    let infinite_up = Settings { imf_m_up: f64::INFINITY, ..Settings::default() };

    for settings in [inverted, zero_low, infinite_up] {
        for imf_type in ImfType::ALL {
            let result = select_imf(imf_type.key(), &settings);
            assert!(matches!(result, Err(SelectionError::InvalidParameters(_))), "{} accepted {:?}", imf_type, settings);
        }
    }
    assert!(ImfParameters::new(f64::NAN, 0.1, 100.0).is_err());
}

#[test]
fn global_imf_integral_is_clamped_to_stellar_masses() {
    let settings = Settings::default();
    let constants = PhysicalConstants::default();
    let imf = select_imf("kroupa", &settings).unwrap();

    let clamped = global_imf_integral(0.01, 500.0, imf.as_ref(), &constants);
    let inside = global_imf_integral(0.1, 100.0, imf.as_ref(), &constants);
    assert_eq!(clamped, inside);
    assert!(inside > 0.0);
    assert_eq!(global_imf_integral(120.0, 500.0, imf.as_ref(), &constants), 0.0);
}

#[test]
fn imf_can_be_shared_across_threads() {
    let settings = Settings::default();
    let constants = settings.physical_constants();
    let imf = select_imf(&settings.imf, &settings).unwrap();
    let expected: Vec<f64> = [1.0, 5.0, 12.0]
        .iter()
        .map(|m| global_imf(*m, imf.as_ref(), &constants))
        .collect();

    thread::scope(|scope| {
        let handles: Vec<_> = [1.0, 5.0, 12.0]
            .into_iter()
            .map(|m| {
                let imf = imf.clone();
                scope.spawn(move || global_imf(m, imf.as_ref(), &constants))
            })
            .collect();
        for (handle, value) in handles.into_iter().zip(expected) {
            assert_eq!(handle.join().unwrap(), value);
        }
    });
}
