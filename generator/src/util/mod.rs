//! Stateless helpers shared by the generator modules

pub mod conversion;
