pub mod domain;
pub mod error;
pub mod ranking;
pub mod strategies;
