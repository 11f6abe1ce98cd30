//! Progress indicators shown while a turn is running

pub mod reporter;
