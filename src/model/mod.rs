pub mod benefits;
pub mod credential;
pub mod incentive;
pub mod leave;
pub mod overtime;
pub mod shift;
