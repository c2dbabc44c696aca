//! Core infrastructure shared by every generator instance

pub mod time;
