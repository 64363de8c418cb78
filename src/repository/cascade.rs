use crate::repository::{Repository, RepositoryError};

use futures::{StreamExt, stream};
use std::future::Future;
use tracing::{info, warn};

/// Maximum number of deletions in flight during a cascade.
pub const CASCADE_CONCURRENCY: usize = 8;

/// Run `delete` for every target with at most `limit` calls in flight.
///
/// Every started deletion is awaited even after a failure; the first failure
/// observed is then returned. Dropping the returned future stops deletions
/// that have not started yet.
pub async fn delete_bounded<I, F, Fut, E>(targets: I, limit: usize, delete: F) -> Result<(), E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = Result<(), E>>,
{
    let mut deletions = stream::iter(targets).map(delete).buffer_unordered(limit.max(1));
    let mut first_error = None;
    let mut failed = 0_usize;
    while let Some(result) = deletions.next().await {
        if let Err(error) = result {
            failed += 1;
            first_error.get_or_insert(error);
        }
    }
    match first_error {
        Some(error) => {
            warn!(failed, "cascade deletion incomplete");
            Err(error)
        }
        None => Ok(()),
    }
}

/// Delete the items of `order_id`, then the order record via `delete_record`.
///
/// Items are deleted through `repository` with [`delete_bounded`]. When any item
/// deletion fails `delete_record` is never called, so the order stays in place
/// and the whole operation can be retried.
pub async fn delete_order<R, F, Fut>(
    repository: &R,
    order_id: &str,
    delete_record: F,
) -> Result<(), RepositoryError>
where
    R: Repository + ?Sized,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<(), RepositoryError>>,
{
    let items = repository.list_order_items(order_id).await?;
    info!(count = items.len(), "deleting order items");
    delete_bounded(items, CASCADE_CONCURRENCY, |item| async move {
        repository.delete_order_item(&item.order_id, &item.id).await
    })
    .await?;
    delete_record().await
}
