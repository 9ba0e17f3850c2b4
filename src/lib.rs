pub mod configuration;
pub mod configurationerror;

pub mod display {
    pub mod axismapper;
    pub mod displaystate;
    pub mod format;
    pub mod pixelpolyline;
    pub mod plotregion;
    pub mod validrange;
}

pub mod engine {
    pub mod shapeparameters;
    pub mod curveengine;
}

pub mod explorer;

pub mod math {
    pub mod boxcox;
    pub mod curve {
        pub mod curve;
        pub mod yieldcurve;
        pub mod growthcurve;
    }
}

pub mod sampling {
    pub mod spacingmode;
    pub mod sampleset;
    pub mod asymptoteguard;
}
