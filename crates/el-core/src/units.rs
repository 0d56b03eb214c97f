// el-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, Length as UomLength, Pressure as UomPressure, Ratio as UomRatio,
    ThermodynamicTemperature as UomThermodynamicTemperature, Time as UomTime,
    Volume as UomVolume,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type Length = UomLength;
pub type Pressure = UomPressure;
pub type Ratio = UomRatio;
pub type Temperature = UomThermodynamicTemperature;
pub type Time = UomTime;
pub type Volume = UomVolume;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn atm(v: f64) -> Pressure {
    use uom::si::pressure::atmosphere;
    Pressure::new::<atmosphere>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn cm(v: f64) -> Length {
    use uom::si::length::centimeter;
    Length::new::<centimeter>(v)
}

#[inline]
pub fn m2(v: f64) -> Area {
    use uom::si::area::square_meter;
    Area::new::<square_meter>(v)
}

#[inline]
pub fn m3(v: f64) -> Volume {
    use uom::si::volume::cubic_meter;
    Volume::new::<cubic_meter>(v)
}

#[inline]
pub fn ml(v: f64) -> Volume {
    use uom::si::volume::milliliter;
    Volume::new::<milliliter>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn celsius(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

// Display-unit getters. The lab UI reads out atm / cm / mL / °C, not SI base.

#[inline]
pub fn to_atm(p: Pressure) -> f64 {
    use uom::si::pressure::atmosphere;
    p.get::<atmosphere>()
}

#[inline]
pub fn to_cm(l: Length) -> f64 {
    use uom::si::length::centimeter;
    l.get::<centimeter>()
}

#[inline]
pub fn to_ml(v: Volume) -> f64 {
    use uom::si::volume::milliliter;
    v.get::<milliliter>()
}

#[inline]
pub fn to_celsius(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::degree_celsius;
    t.get::<degree_celsius>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Tolerances, nearly_equal};

    #[test]
    fn constructors_smoke() {
        let _p = pa(101_325.0);
        let _l = cm(15.0);
        let _a = m2(5.0e-3);
        let _v = ml(750.0);
        let _t = celsius(24.0);
        let _dt = s(1.0 / 60.0);
        let _r = unitless(0.5);
    }

    #[test]
    fn atm_round_trip() {
        let tol = Tolerances::default();
        assert!(nearly_equal(to_atm(atm(1.0)), 1.0, tol));
        assert!(nearly_equal(atm(1.0).value, 101_325.0, tol));
    }

    #[test]
    fn ml_matches_cubic_meters() {
        let tol = Tolerances::default();
        assert!(nearly_equal(ml(1_000_000.0).value, 1.0, tol));
        assert!(nearly_equal(to_ml(m3(7.5398e-5)), 75.398, tol));
    }

    #[test]
    fn celsius_offset() {
        let tol = Tolerances::default();
        assert!(nearly_equal(celsius(0.0).value, 273.15, tol));
        assert!(nearly_equal(to_celsius(celsius(100.0)), 100.0, tol));
    }
}
