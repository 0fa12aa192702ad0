//! Erdraft Core Types
//!
//! This crate provides the entity/relationship model shared by the erdraft
//! parser and exporters:
//!
//! - **Model**: the parsed graph of entities and relationships ([`model::Model`])
//! - **Entities**: named record types with ordered attributes ([`model::Entity`])
//! - **Relationships**: directed, labeled edges between entity names ([`model::Relationship`])

pub mod model;
