//! Constants shared by the symmetric collaborators

pub mod hash;
