//! Pressroom - An article publishing demo
//!
//! This library provides an in-memory article and comment store together
//! with the reader, admin and authentication layers that call into it.

pub mod config;
pub mod models;
pub mod services;
pub mod storage;
pub mod store;
