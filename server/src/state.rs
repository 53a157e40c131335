//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. Leads
//! live in an in-memory map behind a `tokio` `RwLock`; the process starts with
//! a small demo pipeline.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::collections::HashMap;
use std::sync::Arc;

use client::net::types::Lead;
use tokio::sync::RwLock;

use crate::config::ServerConfig;

/// Shared application state. Clone is required by Axum; every field is
/// `Arc`-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub leads: Arc<RwLock<HashMap<u64, Lead>>>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig, leads: Vec<Lead>) -> Self {
        let leads = leads.into_iter().map(|lead| (lead.id, lead)).collect();
        Self { leads: Arc::new(RwLock::new(leads)), config: Arc::new(config) }
    }

    /// State preloaded with [`seed_leads`].
    #[must_use]
    pub fn seeded(config: ServerConfig) -> Self {
        Self::new(config, seed_leads())
    }
}

fn lead(id: u64, name: &str, company: &str, status: &str, tags: &[&str]) -> Lead {
    Lead {
        id,
        name: name.to_owned(),
        company: Some(company.to_owned()),
        status: status.to_owned(),
        tags: tags.iter().map(|t| (*t).to_owned()).collect(),
    }
}

/// Demo pipeline covering every default status.
#[must_use]
pub fn seed_leads() -> Vec<Lead> {
    vec![
        lead(42, "Ada Lovelace", "Analytical Engines", "nouveau", &["Rust"]),
        lead(7, "Grace Hopper", "Compilers Inc", "nouveau", &["saas"]),
        lead(13, "Alan Turing", "Bletchley Labs", "contacted", &["Ruby", "Rails"]),
        lead(21, "Katherine Johnson", "Orbital", "qualified", &["JavaScript"]),
        lead(3, "Margaret Hamilton", "Apollo Software", "proposal", &["Rust", "saas"]),
        lead(5, "Edsger Dijkstra", "Structured Ltd", "won", &["retail"]),
        lead(8, "Barbara Liskov", "Substitution SA", "lost", &["Ruby"]),
    ]
}
