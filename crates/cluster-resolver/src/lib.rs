//! Cluster Credential Resolution
//!
//! Turns a detected cluster candidate plus operator overrides into a stored
//! credential and a connectable cluster:
//!
//! 1. [`dispatcher::dispatch`] picks the resolver for the candidate's declared
//!    auth mechanism, which merges kubeconfig data with overrides, validates the
//!    required fields and persists the credential
//! 2. [`builder::build`] composes the cluster descriptor around that credential
//! 3. [`ClusterResolver`] sequences both and persists the cluster
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use cluster_models::ResolverOverrides;
//! use cluster_resolver::ClusterResolver;
//! # use cluster_store::ClusterStore;
//!
//! # async fn example(store: Arc<dyn ClusterStore>) -> Result<(), cluster_resolver::ResolveError> {
//! let resolver = ClusterResolver::new(store);
//! let overrides = ResolverOverrides {
//!     token_data: "abc123".to_string(),
//!     ..Default::default()
//! };
//! let cluster = resolver.resolve_candidate(7, &overrides, 1, 1).await?;
//! println!("created cluster {}", cluster.id);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod candidate;
pub mod dispatcher;
pub mod encoding;
pub mod error;
pub mod orchestrator;
pub mod resolvers;

mod merge;

pub use candidate::ParsedCandidate;
pub use error::ResolveError;
pub use orchestrator::ClusterResolver;
