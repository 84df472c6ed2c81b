//! Database backend implementations.
//!
//! Each backend implements [`ProductStorage`](crate::core::ProductStorage)
//! and is gated behind a feature flag.
//!
//! | Backend | Feature | Description |
//! |---------|---------|-------------|
//! | SQLite | `sqlite` | Embedded database, in-memory or file-based |

#[cfg(feature = "sqlite")]
pub mod sqlite;
