pub mod dataset;
pub mod export;
pub mod metric;
pub mod selection;
pub mod source;
