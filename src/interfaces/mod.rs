pub mod cards;
pub mod csv;
