pub mod lap;
pub mod track;
