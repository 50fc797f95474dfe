//! Disk-backed configuration loading.
//!
//! Pure parsing of the buildout model lives in `domain::buildout`.

mod load_buildout;

pub use load_buildout::{DEFAULT_BUILDOUT_FILE, load_buildout};
