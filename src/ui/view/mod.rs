pub mod gallery;
pub mod piano_roll;
