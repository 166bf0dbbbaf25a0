pub mod action;
pub mod category;
pub mod event;
pub mod state;
