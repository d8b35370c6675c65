//! geoschool - register schools and rank them by distance
//!
//! The core is two pure pieces:
//!
//! - [`validation`]: turns loosely typed request input into a normalized
//!   [`school::NewSchool`] or a single rejection reason
//! - [`proximity`]: orders stored schools by great-circle distance from a
//!   reference point, breaking ties by name
//!
//! Everything else ([`storage`], [`http_server`], [`cli`]) is plumbing
//! around them.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod proximity;
pub mod school;
pub mod storage;
pub mod validation;
