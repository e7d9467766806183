//! # pharmakon
//!
//! Compound compatibility scoring and knowledge-graph neighborhood extraction
//! for drug-repurposing research.
//!
//! ## Architecture
//!
//! - **Profiles** (`profile`): load-once store of per-compound annotation sets
//! - **Scoring** (`score`): pairwise compatibility, store-wide ranking, and
//!   combination search over candidate pairs
//! - **Knowledge graph** (`graph`): petgraph-backed entity-relation multigraph
//!   with relation-filtered neighborhood extraction
//! - **Relations** (`relations`): curated relation allow-lists per query size
//! - **Mapping** (`mapping`): entity ID ↔ display name resolution
//!
//! ## Library usage
//!
//! ```no_run
//! use pharmakon::engine::{Engine, EngineConfig};
//!
//! let engine = Engine::new(EngineConfig {
//!     profiles: Some("data/profiles.json".into()),
//!     graph: Some("data/graph.json".into()),
//!     relations: Some("data/relations.toml".into()),
//!     names: Some("data/entity_names.json".into()),
//! }).unwrap();
//! let top = engine.rank("Compound::DB00945", 5).unwrap();
//! ```

pub mod engine;
pub mod error;
pub mod graph;
pub mod mapping;
pub mod profile;
pub mod relations;
pub mod score;
