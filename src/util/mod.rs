//! Utility code; candidates for factoring out.

pub mod rw_lock;
