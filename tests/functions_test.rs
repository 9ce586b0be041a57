use approx::assert_relative_eq;

use galchem::abundances::solarabundances::{
    select_abundances,
    AbundancesType
};
use galchem::constants::{
    PhysicalConstants,
    B_MAX,
    B_MIN,
    BIN_FRACTION,
    M_MIN
};
use galchem::imf::binarycorrection::{
    global_imf,
    imf_binary_primary,
    imf_binary_secondary,
    imf_zero,
    phi_primary,
    phi_secondary,
    secondary_mass_fraction
};
use galchem::imf::imf::ImfType;
use galchem::imf::imfselector::select_imf;
use galchem::math::interval::value_in_interval;
use galchem::math::quadrature::newton_cotes;
use galchem::selection::selectionerror::SelectionError;
use galchem::settings::settings::{
    valid_values,
    Settings
};
use galchem::stellar::lifetime::{
    stellar_lifetime,
    stellar_mass
};
use galchem::supernova::dtd::{
    dtd_mannucci_della_valle_panagia,
    dtd_ruiz_lapuente,
    select_dtd
};
use galchem::supernova::energy::total_energy_ejected;

const SAMPLE_TIMES: [f64; 5] = [0.013, 0.27, 1.4, 4.9, 8.8];

#[test]
fn select_imf_returns_matching_model() {
    let settings = Settings::default();
    let expected = [
        ("salpeter", ImfType::Salpeter),
        ("starburst", ImfType::Starburst),
        ("chabrier", ImfType::Chabrier),
        ("ferrini", ImfType::Ferrini),
        ("kroupa", ImfType::Kroupa),
        ("miller_scalo", ImfType::MillerScalo),
        ("maschberger", ImfType::Maschberger)
    ];

    for (key, imf_type) in expected {
        let imf = select_imf(key, &settings).unwrap();
        assert_eq!(imf.imf_type(), imf_type);
    }
}

#[test]
fn select_imf_rejects_unknown_key() {
    let settings = Settings::default();
    assert_eq!(
        select_imf("Salpeter", &settings).err(),
        Some(SelectionError::UnknownModel("Salpeter".to_owned()))
    );
    assert!(select_imf("top_heavy", &settings).is_err());
}

#[test]
fn select_abundances_keeps_metallicity() {
    let expected = [
        ("ag89", AbundancesType::AndersGrevesse1989),
        ("gs98", AbundancesType::GrevesseSauval1998),
        ("as05", AbundancesType::Asplund2005),
        ("as09", AbundancesType::Asplund2009),
        ("he10", AbundancesType::Heger2010)
    ];

    for (key, abundances_type) in expected {
        let abundances = select_abundances(key, 0.033).unwrap();
        assert_eq!(abundances.abundances_type(), abundances_type);
        assert_eq!(abundances.z(), 0.033);
    }
    assert!(matches!(
        select_abundances("lo03", 0.02),
        Err(SelectionError::UnknownKey { kind: "abundances", .. })
    ));
}

#[test]
fn select_dtd_returns_matching_formula() {
    let rlp = select_dtd("rlp").unwrap();
    let mdvp = select_dtd("mdvp").unwrap();

    for t in SAMPLE_TIMES {
        assert_eq!(rlp(t), dtd_ruiz_lapuente(t));
        assert_eq!(mdvp(t), dtd_mannucci_della_valle_panagia(t));
    }
    assert!(select_dtd("greggio").is_err());
}

#[test]
fn value_in_interval_clamps() {
    let interval = [1.0, 100.0];
    assert_eq!(value_in_interval(25.0, interval), 25.0);
    assert_eq!(value_in_interval(0.8, interval), 1.0);
    assert_eq!(value_in_interval(101.0, interval), 100.0);
}

#[test]
fn secondary_mass_fraction_is_quadratic() {
    for m in [0.33, 3.33, 33.7, 73.0] {
        assert_eq!(secondary_mass_fraction(m), 24.0 * m * m);
    }
}

#[test]
fn mean_lifetime_stellar_mass_relation_round_trips() {
    let z = 0.02;
    let stellar_mass_test = 4.0;
    let lifetime_test = 0.15;

    let mass = stellar_mass(lifetime_test, z).unwrap();
    let lifetime = stellar_lifetime(stellar_mass_test, z);

    assert_relative_eq!(stellar_mass(lifetime, z).unwrap(), stellar_mass_test, max_relative = 0.005);
    assert_relative_eq!(stellar_lifetime(mass, z), lifetime_test, max_relative = 0.005);
}

#[test]
fn no_negative_time_values() {
    let t = -1.0;
    assert_eq!(total_energy_ejected(t), 0.0);
    assert_eq!(dtd_ruiz_lapuente(t), 0.0);
    assert_eq!(dtd_mannucci_della_valle_panagia(t), 0.0);

    let t = stellar_lifetime(5.0, 0.02);
    assert!(total_energy_ejected(t) > 0.0);
    assert!(dtd_ruiz_lapuente(t) > 0.0);
    assert!(dtd_mannucci_della_valle_panagia(t) > 0.0);
}

#[test]
fn imf_zero_removes_binary_fraction_inside_window() {
    let settings = Settings::default();
    let constants = PhysicalConstants::default();
    let m_in_binaries_range = 5.0;
    let m_lower = B_MIN - 0.5;
    let m_up = B_MAX + 0.5;

    for key in valid_values().imf {
        let imf = select_imf(key, &settings).unwrap();
        let imf = imf.as_ref();

        assert_eq!(imf_zero(m_lower, imf, &constants), imf.for_mass(m_lower));
        assert_eq!(imf_zero(m_up, imf, &constants), imf.for_mass(m_up));

        let imf_bin = imf.for_mass(m_in_binaries_range) * (1.0 - BIN_FRACTION);
        assert_eq!(imf_zero(m_in_binaries_range, imf, &constants), imf_bin);
    }
}

#[test]
fn imf_binary_primary_integrates_phi_primary() {
    let settings = Settings::default();
    let constants = PhysicalConstants::default();
    let m_in_binaries_range = 5.0;
    let m_sup = 2.0 * m_in_binaries_range;

    for key in valid_values().imf {
        let imf = select_imf(key, &settings).unwrap();
        let imf = imf.as_ref();

        let expected = newton_cotes(m_in_binaries_range, m_sup, phi_primary(m_in_binaries_range, imf, &constants));
        assert_eq!(imf_binary_primary(m_in_binaries_range, imf, &constants), expected);
    }
}

#[test]
fn imf_binary_secondary_integrates_phi_secondary() {
    let settings = Settings::default();
    let constants = PhysicalConstants::default();
    let m_in_binaries_range = 5.0;
    let m_inf = 2.0 * m_in_binaries_range;

    for key in valid_values().imf {
        let imf = select_imf(key, &settings).unwrap();
        let imf = imf.as_ref();

        let expected = newton_cotes(m_inf, B_MAX, phi_secondary(m_in_binaries_range, imf, &constants));
        assert_eq!(imf_binary_secondary(m_in_binaries_range, imf, &constants), expected);
    }
}

#[test]
fn global_imf_bounds() {
    let settings = Settings::default();
    let constants = PhysicalConstants::default();

    for key in valid_values().imf {
        let imf = select_imf(key, &settings).unwrap();
        let imf = imf.as_ref();
        let upper = imf_zero(100.0, imf, &constants);

        assert_eq!(global_imf(M_MIN - 0.001, imf, &constants), 0.0);
        assert_eq!(global_imf(-3.0, imf, &constants), 0.0);
        assert_eq!(global_imf(100.0, imf, &constants), upper);
        assert!(upper > 0.0);
        for m in [1.0, 4.0, 8.0, 10.0, 40.0] {
            let value = global_imf(m, imf, &constants);
            assert!(value > 0.0, "{}: global_imf({}) = {}", key, m, value);
            assert!(value > upper, "{}: global_imf({}) = {} <= {}", key, m, value, upper);
        }
    }
}
