pub mod domains;
pub mod scales;
pub mod scores;
pub mod validation;
