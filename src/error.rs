use thiserror::Error;
use crate::model::entity::{FamilyName, Id};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FamilyError {
    #[error("Maximum members in a family cannot exceed 5.")]
    FamilyFull,
    #[error("A child must be accompanied by an adult in the family.")]
    UnaccompaniedChild,
    #[error("Cannot add more children to the family.")]
    TooManyChildren,
    #[error("Cannot add more adults to the family.")]
    TooManyAdults,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormationError {
    #[error("passenger {passenger} references unknown family {family:?}")]
    UnknownFamilyReference { family: FamilyName, passenger: Id },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Passenger count must be greater than zero.")]
    InvalidCount,
    #[error("family size bound {0} is outside 1..=5")]
    InvalidFamilySize(usize),
    #[error(transparent)]
    Family(#[from] FamilyError),
}
