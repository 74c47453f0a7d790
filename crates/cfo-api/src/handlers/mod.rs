//! Handler modules

pub mod assistant;
pub mod financial;
pub mod health;
pub mod reports;
pub mod scenario;
pub mod usage;

pub use assistant::*;
pub use financial::*;
pub use health::*;
pub use reports::*;
pub use scenario::*;
pub use usage::*;
