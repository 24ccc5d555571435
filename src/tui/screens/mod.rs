//! Screen rendering module

pub mod about;
pub mod list;
pub mod nav;
pub mod page;
