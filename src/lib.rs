//! Version-aware JVM options file parsing.
//!
//! ```no_run
//! use jvm_options::options::JvmOptionsBuilder;
//!
//! let options = JvmOptionsBuilder::new("/etc/elasticsearch")
//!     .java_major_version(17)
//!     .substitution("ES_PATH_CONF", "/etc/elasticsearch")
//!     .build()?;
//! println!("{}", options.join(" "));
//! # Ok::<(), jvm_options::error::OptionsError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod options;
pub mod utils;
pub mod version;

pub use error::OptionsError;
pub use options::JvmOptionsBuilder;
