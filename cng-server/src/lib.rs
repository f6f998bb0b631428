//! CNG station finder server.
//!
//! Generates a session's worth of mock CNG refuelling stations and serves
//! search, filter, proximity and route-sketch queries over them.

pub mod config;
pub mod domain;
pub mod query;
pub mod repository;
pub mod route;
pub mod web;
