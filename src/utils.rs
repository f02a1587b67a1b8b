pub mod date;
pub mod hash;
pub mod seed;
pub mod trace;
