pub mod branch;
pub mod member;
pub mod ports;
pub mod registration;
