pub mod bess;
pub mod degradation;
pub mod solar;
pub mod validation;
