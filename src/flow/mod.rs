pub mod connector;
pub mod conversion;
pub mod element;
pub mod graph;
pub mod summary;

pub use connector::*;
pub use conversion::*;
pub use element::*;
pub use graph::*;
pub use summary::*;
