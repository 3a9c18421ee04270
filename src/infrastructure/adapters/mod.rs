//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod papla;
pub mod storage;

pub use papla::*;
pub use storage::*;
