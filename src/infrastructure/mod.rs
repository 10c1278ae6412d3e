//! Infrastructure Layer
//!
//! Adapters to the outside world. The only external dependency of this
//! application is the remote object store.

pub mod store;
