// pd-core/src/units.rs

use uom::si::f64::{
    Acceleration as UomAcceleration, Energy as UomEnergy, Length as UomLength,
    MassDensity as UomMassDensity, Power as UomPower, Time as UomTime,
    VolumeRate as UomVolumeRate,
};

// Public canonical unit types (SI, f64)
pub type Accel = UomAcceleration;
pub type Energy = UomEnergy;
pub type Head = UomLength;
pub type Density = UomMassDensity;
pub type Power = UomPower;
pub type Time = UomTime;
pub type FlowRate = UomVolumeRate;

#[inline]
pub fn m3h(v: f64) -> FlowRate {
    use uom::si::volume_rate::cubic_meter_per_hour;
    FlowRate::new::<cubic_meter_per_hour>(v)
}

#[inline]
pub fn m(v: f64) -> Head {
    use uom::si::length::meter;
    Head::new::<meter>(v)
}

#[inline]
pub fn kw(v: f64) -> Power {
    use uom::si::power::kilowatt;
    Power::new::<kilowatt>(v)
}

#[inline]
pub fn hours(v: f64) -> Time {
    use uom::si::time::hour;
    Time::new::<hour>(v)
}

#[inline]
pub fn in_kw(p: Power) -> f64 {
    use uom::si::power::kilowatt;
    p.get::<kilowatt>()
}

#[inline]
pub fn in_kwh(e: Energy) -> f64 {
    use uom::si::energy::kilowatt_hour;
    e.get::<kilowatt_hour>()
}

pub mod constants {
    use super::*;

    /// Standard gravity used by the sizing formulas (spec value, not g0).
    pub const G_MPS2: f64 = 9.81;
    /// Density of pumped water.
    pub const RHO_WATER_KG_M3: f64 = 1000.0;

    #[inline]
    pub fn g() -> Accel {
        use uom::si::acceleration::meter_per_second_squared;
        Accel::new::<meter_per_second_squared>(G_MPS2)
    }

    #[inline]
    pub fn rho_water() -> Density {
        use uom::si::mass_density::kilogram_per_cubic_meter;
        Density::new::<kilogram_per_cubic_meter>(RHO_WATER_KG_M3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _q = m3h(50.0);
        let _h = m(100.0);
        let _p = kw(18.9);
        let _t = hours(4000.0);
        let _g = constants::g();
        let _rho = constants::rho_water();
    }

    #[test]
    fn hydraulic_power_dimensions() {
        // rho * g * Q * H must come out as power: 50 m3/h of water lifted
        // 100 m is 50*100*1000*9.81/3.6e6 = 13.625 kW.
        let p: Power = constants::rho_water() * constants::g() * m3h(50.0) * m(100.0);
        assert!((in_kw(p) - 13.625).abs() < 1e-9);
    }

    #[test]
    fn energy_in_kilowatt_hours() {
        let e: Energy = kw(2.0) * hours(3.0);
        assert!((in_kwh(e) - 6.0).abs() < 1e-9);
    }
}
