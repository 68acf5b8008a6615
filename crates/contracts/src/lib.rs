//! Shared wire types between the analyzer client and the `/analyze` endpoint.

pub mod usecases;
