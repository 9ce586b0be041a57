use std::env;
use std::error::Error;

use galchem::imf::binarycorrection::{
    global_imf,
    imf_zero
};
use galchem::imf::imfselector::select_imf;
use galchem::settings::settings::Settings;
use galchem::stellar::lifetime::stellar_lifetime;
use galchem::supernova::dtd::select_dtd;

const MASSES: [f64; 10] = [0.1, 0.5, 1.0, 2.0, 4.0, 8.0, 10.0, 16.0, 40.0, 100.0];

fn main() -> Result<(), Box<dyn Error>> {
    let settings = match env::args().nth(1) {
        Some(config_path) => Settings::from_reader(config_path)?,
        None => Settings::default()
    };
    let constants = settings.physical_constants();
    let imf = select_imf(&settings.imf, &settings)?;
    let dtd = select_dtd(&settings.dtd_sn)?;

    println!("mass, imf_zero, global_imf, lifetime [Gyr], dtd");
    for m in MASSES {
        let lifetime = stellar_lifetime(m, settings.z);
        println!("{}, {:e}, {:e}, {:e}, {:e}",
                 m,
                 imf_zero(m, imf.as_ref(), &constants),
                 global_imf(m, imf.as_ref(), &constants),
                 lifetime,
                 dtd(lifetime));
    }
    Ok(())
}
