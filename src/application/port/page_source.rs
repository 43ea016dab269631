// SPDX-License-Identifier: MPL-2.0
//! Remote page source port.
//!
//! The grid never talks HTTP itself. It hands a [`PageQuery`] to a
//! [`PageSource`] and later receives the envelope (or a [`FetchError`]) as a
//! message.

use crate::domain::paging::{PageEnvelope, PageQuery};
pub use crate::error::FetchError;
use futures_util::future::BoxFuture;

/// Outcome of one remote query.
pub type FetchResult = Result<PageEnvelope, FetchError>;

/// A paginated, searchable collection of records.
pub trait PageSource: Send + Sync {
    /// Fetches one page.
    ///
    /// The returned future owns everything it needs, so it can outlive the
    /// borrow of `self` and run on a background executor. No ordering is
    /// promised between concurrent calls.
    fn fetch(&self, query: PageQuery) -> BoxFuture<'static, FetchResult>;
}
