//! `industrialerp-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO): record ids, money,
//! coded enums with their badges, the search/filter predicate and aggregate
//! helpers shared by every module.

pub mod aggregate;
pub mod badge;
pub mod code;
pub mod entity;
pub mod error;
pub mod filter;
pub mod id;
pub mod money;

pub use aggregate::Summarize;
pub use badge::{Badge, BadgeTier, Labeled};
pub use code::CodedEnum;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use filter::{CategoryFilter, RecordFilter, Searchable};
pub use id::RecordId;
pub use money::Money;
