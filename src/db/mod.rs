//! Persistence layer for playplan.
//!
//! All data lives in a single plain-text file holding one user, their
//! children and every scheduled activity.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use playplan::db::codec::ParseMode;
//! use playplan::db::store::Store;
//! use playplan::libs::user::User;
//!
//! let store = Store::new("userData.txt", ParseMode::Permissive);
//! let user = store.load().map(|decoded| decoded.user).unwrap_or_default();
//! if !store.save(&user) {
//!     eprintln!("could not save");
//! }
//! ```

/// Text encoding of the user graph.
///
/// Token-delimited blocks for children and activities with `key:value`
/// fields, permissive or strict decoding, and escaping of free text.
pub mod codec;

/// File access around the codec.
///
/// Converts I/O and format failures into plain `bool` / `Option` results.
pub mod store;
