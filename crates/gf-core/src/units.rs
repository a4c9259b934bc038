// gf-core/src/units.rs

use uom::si::f64::{Frequency as UomFrequency, Ratio as UomRatio, Time as UomTime};

// Public canonical unit types (SI, f64)
pub type Frequency = UomFrequency;
pub type Ratio = UomRatio;
pub type Time = UomTime;

#[inline]
pub fn hz(v: f64) -> Frequency {
    use uom::si::frequency::hertz;
    Frequency::new::<hertz>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

/// Per-unit quantity (dimensionless, 1.0 = rated value).
#[inline]
pub fn pu(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

pub mod constants {
    use super::*;

    /// Nominal grid frequency (European synchronous area).
    pub const F0_HZ: f64 = 50.0;

    #[inline]
    pub fn f0() -> Frequency {
        hz(F0_HZ)
    }
}
