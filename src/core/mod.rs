pub mod audit;
pub mod clock;
pub mod log;
pub mod status;
