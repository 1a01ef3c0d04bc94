pub mod datastore_wrapper;
pub mod memory;
pub mod remote_store;
pub mod store;
pub mod tables;
