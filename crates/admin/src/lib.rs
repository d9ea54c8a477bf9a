//! Cartwheel Admin library.
//!
//! This crate provides the admin panel as a library, allowing it to be
//! tested and reused.
//!
//! The panel renders server-side (Axum + Askama) and owns no data of its
//! own: every page fetches fresh lists from the storefront backend API and
//! derives what it displays (statistics, search results, pages) in memory.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod backend;
pub mod components;
pub mod config;
pub mod error;
pub mod filters;
pub mod routes;
pub mod state;
