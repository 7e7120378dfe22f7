/*!
 * Hosted content store integration.
 *
 * This module contains the record model fetched from the content store and
 * the store client:
 *
 * - `record`: fetched record shape and its mapping to a `Document`
 * - `store`: the `ContentStore` trait and the reqwest-backed implementation
 */

pub use self::record::ContentRecord;
pub use self::store::{ContentStore, HostedContentStore};

pub mod record;
pub mod store;
