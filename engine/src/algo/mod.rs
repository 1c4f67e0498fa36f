pub mod builder;
pub mod component;
pub mod contract;
pub mod prune;
pub mod router;
