//! # Repository Implementations
//!
//! One repository per table. Each holds a cheap pool clone and exposes the
//! queries the services need; nothing above this layer writes SQL.
//!
//! Queries are runtime-checked (`sqlx::query_as`) rather than macro-verified
//! since the workspace builds without a live database; row mapping is by
//! column name through `FromRow` derives on the revive-core types.

pub mod account;
pub mod customer;
pub mod inventory;
pub mod repair;
pub mod sale;
