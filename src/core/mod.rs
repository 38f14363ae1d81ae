pub mod gallery;
pub mod gradient;
pub mod loader;
pub mod note;
pub mod roll;
pub mod selection;
