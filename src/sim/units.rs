pub(crate) type Float = f64;
pub(crate) const DIMENSIONALITY: usize = 2;

//Distances are measured in meters, masses in kg and time in seconds.
pub(crate) const AU: Float = 149.6e6 * 1000.;
pub(crate) const G: Float = 6.67428e-11;

pub(crate) const METERS_PER_MILLION_KM: Float = 1e9;
