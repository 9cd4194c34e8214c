use std::{error::Error, fmt, io, num::ParseFloatError};

#[derive(Debug)]
pub enum MassError {
    InvalidMassFormat(String),
    UnrecognizedUnit(String),
    NonPhysicalMass(f64),
    ParseFloatError(ParseFloatError),
    IoError(io::Error),
}

impl fmt::Display for MassError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MassError::InvalidMassFormat(input) => write!(
                f,
                "Invalid mass input {:?}. Please use a valid format (In grams, kilograms, metric tons, Earths or Suns).",
                input
            ),
            MassError::UnrecognizedUnit(unit) => {
                write!(f, "Unrecognized unit {:?}. Please input a valid unit.", unit)
            }
            MassError::NonPhysicalMass(kg) => {
                write!(f, "Mass must be a finite positive number, got {} kg", kg)
            }
            MassError::ParseFloatError(e) => write!(f, "Float parsing error: {}", e),
            MassError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl Error for MassError {}

impl From<ParseFloatError> for MassError {
    fn from(err: ParseFloatError) -> Self {
        MassError::ParseFloatError(err)
    }
}

impl From<io::Error> for MassError {
    fn from(err: io::Error) -> Self {
        MassError::IoError(err)
    }
}
