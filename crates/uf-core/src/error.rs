use thiserror::Error;

pub type UnitResult<T> = Result<T, UnitError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    #[error("Dimension mismatch in {op}: {left} vs {right}")]
    DimensionMismatch {
        op: &'static str,
        left: String,
        right: String,
    },

    #[error("Invalid unit composition in {op}: {unit} carries an offset")]
    InvalidUnitComposition { op: &'static str, unit: String },

    #[error("Unsupported exponent {exponent} for {unit}: {reason}")]
    UnsupportedExponent {
        unit: String,
        exponent: String,
        reason: &'static str,
    },

    #[error("Unknown unit: {name}")]
    UnknownUnit { name: String },

    #[error("Unit name already registered: {name}")]
    NameCollision { name: String },

    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
