//! Separates CDN, reverse-proxy and anti-DDoS provider IPs from origin IPs.
//!
//! Published provider ranges and ASN announcements are collected into one
//! [`core::RangeSet`], then every input address is tested against it.

pub mod config;
pub mod core;
pub mod providers;
pub mod service;
pub mod utils;

pub use service::CdnCheckService;
