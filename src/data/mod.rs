pub mod dataset;
pub mod dimension;
pub mod export;
