pub mod audience;
pub mod registry;
pub mod remote;
pub mod store;
