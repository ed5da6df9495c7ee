//! # Core
//!
//! The item directory's business logic. It knows nothing about HTTP or the
//! terminal; the remote collection is reached only through [`crate::api::ItemApi`].
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • item  (data model)   │
//!                    │  • view  (derivations)  │
//!                    │  • store (state + sync) │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    CLI     │              │  ItemApi   │
//!           │  Adapter   │              │  (reqwest) │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`item`]: `Item`, `ItemForm`, `SortBy` and identifier derivation
//! - [`view`]: headers, facets, filter predicates and comparators
//! - [`store`]: the `ItemStore` struct, the only stateful piece
//! - [`config`]: layered settings that pick the API endpoint

pub mod config;
pub mod item;
pub mod store;
pub mod view;
