//! api-colombia.com REST client.

mod client;
mod dto;

pub use client::{API_COLOMBIA_BASE, ApiColombiaClient};
