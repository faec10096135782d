pub mod benefits;
pub mod incentive;
pub mod leave;
pub mod overtime;
pub mod shift;
