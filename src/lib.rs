pub mod constants;

pub mod abundances {
    pub mod solarabundances;
}

pub mod imf {
    pub mod imf;
    pub mod salpeter;
    pub mod starburst;
    pub mod chabrier;
    pub mod ferrini;
    pub mod kroupa;
    pub mod millerscalo;
    pub mod maschberger;
    pub mod imfselector;
    pub mod binarycorrection;
}

pub mod math {
    pub mod interval;
    pub mod quadrature;
    pub mod rootfinding;
}

pub mod selection {
    pub mod selectionerror;
}

pub mod settings {
    pub mod settings;
    pub mod settingserror;
}

pub mod stellar {
    pub mod lifetime;
}

pub mod supernova {
    pub mod dtd;
    pub mod energy;
    pub mod yields;
}
