//! Core library for frontpage
//!
//! This crate implements the **Functional Core** of the frontpage application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The frontpage project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`frontpage_core`** (this crate): Pure transformation functions with zero I/O
//! - **`frontpage`**: CLI, HTTP server, clock and randomness (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Injected non-determinism**: The only impure inputs (current time and a random
//!   sample) arrive through the [`environment::Environment`] trait
//!
//! # Module Organization
//!
//! - [`dataset`]: The static, read-only blog content (posts, categories, weather)
//! - [`query`]: Coercion of raw URL query parameters into typed page parameters
//! - [`pagination`]: Page bounds and slicing
//! - [`resolver`]: The page-load pipeline that assembles a [`resolver::HomePage`]
//! - [`locale`]: Date and timestamp formatting
//! - [`environment`]: The clock/random-source seam
//! - [`page`]: Static page options (prerendering, SSR, invalidation key)
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use frontpage_core::dataset::Dataset;
//! use frontpage_core::environment::FixedEnvironment;
//! use frontpage_core::query::PageParams;
//! use frontpage_core::resolver::{resolve, ResolverOptions};
//!
//! let params = PageParams::from_query_string("q=svelte");
//! let env = FixedEnvironment::default();
//! let page = resolve(Dataset::sample(), &params, &ResolverOptions::default(), &env);
//!
//! assert_eq!(page.posts.len(), 1);
//! assert_eq!(page.current_page, 1);
//! ```

pub mod dataset;
pub mod environment;
pub mod locale;
pub mod page;
pub mod pagination;
pub mod query;
pub mod resolver;
