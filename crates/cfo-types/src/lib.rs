pub mod report;
pub mod response;
pub mod scenario;
pub mod snapshot;
pub mod usage;

pub use report::*;
pub use response::*;
pub use scenario::*;
pub use snapshot::*;
pub use usage::*;
