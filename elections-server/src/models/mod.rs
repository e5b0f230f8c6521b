//! Domain models for divisions
//!
//! Request input is accepted as-is; the only derived value is the candidate
//! count, read leniently from the division code.

pub mod division;
pub mod numeric;

pub use division::{
    DivisionInput, DivisionNominationRow, DivisionRecord, DivisionRow, DivisionView,
    DivisionWithNominationView, InsertedDivisions, NominationView,
};
pub use numeric::parse_leading_int;
