pub mod hash;
pub mod net;
