//! Dispatcher that materialises notification drafts into inbox records.

use crate::notification::{
    domain::{Notification, NotificationDraft},
    ports::{NotificationRepository, NotificationRepositoryResult},
};
use mockable::Clock;
use std::sync::Arc;

/// Converts pure [`NotificationDraft`] effects into persisted
/// [`Notification`] records.
///
/// Shared by the directory and task lifecycle services so that transition
/// logic never touches the inbox directly.
#[derive(Clone)]
pub struct NotificationDispatcher<N, C>
where
    N: NotificationRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<N>,
    clock: Arc<C>,
}

impl<N, C> NotificationDispatcher<N, C>
where
    N: NotificationRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new dispatcher.
    #[must_use]
    pub const fn new(repository: Arc<N>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Stamps and appends each draft, returning the stored records in
    /// emission order.
    ///
    /// # Errors
    ///
    /// Returns the repository error when an append fails; drafts already
    /// dispatched at that point remain stored.
    pub async fn dispatch(
        &self,
        drafts: Vec<NotificationDraft>,
    ) -> NotificationRepositoryResult<Vec<Notification>> {
        let mut dispatched = Vec::with_capacity(drafts.len());
        for draft in drafts {
            let notification = Notification::new(draft, &*self.clock);
            self.repository.append(&notification).await?;
            dispatched.push(notification);
        }
        Ok(dispatched)
    }
}
