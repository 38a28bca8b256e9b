use thiserror::Error;

/// Validation failures raised at construction boundaries.
///
/// An astronomically undefined result (polar sun, Vincenty non-convergence)
/// is not an error; those are reported as `None` and flow through every
/// derived computation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZmanimError {
    #[error("latitude, longitude or elevation out of range")]
    InvalidCoordinate,
    #[error("no such date on the proleptic Gregorian calendar")]
    InvalidCivilDate,
    #[error("no such date on the Hebrew calendar")]
    InvalidHebrewDate,
    #[error("date precedes the start of the daf yomi cycle")]
    BeforeCycleStart,
}
