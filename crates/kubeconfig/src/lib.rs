//! Kubeconfig Loading
//!
//! Parses kubeconfig YAML into name-keyed clusters, contexts and users, the
//! same shape `kubectl config view --raw` works with. Missing sections are not
//! an error: an empty or partial kubeconfig yields empty maps, so callers can
//! degrade instead of failing.
//!
//! # Example
//!
//! ```no_run
//! use kubeconfig::RawConfig;
//!
//! # fn example() -> Result<(), kubeconfig::KubeconfigError> {
//! let config = RawConfig::load("/home/me/.kube/config")?;
//! let current = config.current_context();
//! println!("{} -> {}", current.context_name, current.cluster.server);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod discovery;
pub mod error;

pub use config::*;
pub use discovery::ClusterConfig;
pub use error::KubeconfigError;
