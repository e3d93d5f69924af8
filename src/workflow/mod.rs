//! Review workflow for public submissions.
//!
//! Approving an event request publishes a derived event and marks the
//! request reviewed inside one transaction, with every request-side write
//! predicated on `status = 'pending'`. A request that is missing or already
//! reviewed yields `Ok(false)` rather than an error: the admin screen
//! surfaces it as "nothing happened" and simply reloads.
//!
//! Mail is never sent from here. Callers dispatch notifications after the
//! transition commits, so a delivery failure cannot roll back or block a
//! review outcome.

use uuid::Uuid;

use crate::media::MediaStore;
use crate::models::{Associate, EventRequest, ReviewStatus};
use crate::store::{events, Store};

/// Publishes the event described by a pending request and marks the request
/// approved, atomically.
pub async fn approve_event_request(store: &Store, request_id: Uuid) -> Result<bool, sqlx::Error> {
    let mut tx = store.pool().begin().await?;

    let request = sqlx::query_as::<_, EventRequest>(
        "SELECT * FROM event_requests WHERE id = $1 FOR UPDATE",
    )
    .bind(request_id)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(request) = request else {
        return Ok(false);
    };
    if !request.status.request_can_transition(ReviewStatus::Approved) {
        return Ok(false);
    }

    let payload = request.to_event_payload();
    events::insert_with(&mut tx, Uuid::new_v4(), &payload).await?;

    let reviewed = sqlx::query(
        "UPDATE event_requests
         SET status = 'approved', reviewed_at = now()
         WHERE id = $1 AND status = 'pending'",
    )
    .bind(request_id)
    .execute(&mut *tx)
    .await?;

    if reviewed.rows_affected() == 0 {
        tx.rollback().await?;
        return Ok(false);
    }

    tx.commit().await?;
    tracing::info!(%request_id, "Event request approved and event published");
    Ok(true)
}

/// Records a rejection with its reason. The reason is validated non-empty at
/// the HTTP boundary before this becomes reachable.
pub async fn reject_event_request(
    store: &Store,
    request_id: Uuid,
    reason: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE event_requests
         SET status = 'rejected', rejection_reason = $2, reviewed_at = now()
         WHERE id = $1 AND status = 'pending'",
    )
    .bind(request_id)
    .bind(reason)
    .execute(store.pool())
    .await?;

    let rejected = result.rows_affected() > 0;
    if rejected {
        tracing::info!(%request_id, "Event request rejected");
    }
    Ok(rejected)
}

/// Associate reviews mutate the record in place; visibility in the public
/// directory follows from the status alone.
pub async fn set_associate_status(
    store: &Store,
    id: Uuid,
    to: ReviewStatus,
) -> Result<Option<Associate>, sqlx::Error> {
    let Some(current) = store.get_associate(id).await? else {
        return Ok(None);
    };
    if !current.status.associate_can_transition(to) {
        return Ok(None);
    }

    let updated = store.set_associate_status(id, to).await?;
    if updated.is_some() {
        tracing::info!(associate_id = %id, status = ?to, "Associate review updated");
    }
    Ok(updated)
}

pub async fn approve_associate(store: &Store, id: Uuid) -> Result<Option<Associate>, sqlx::Error> {
    set_associate_status(store, id, ReviewStatus::Approved).await
}

pub async fn reject_associate(store: &Store, id: Uuid) -> Result<Option<Associate>, sqlx::Error> {
    set_associate_status(store, id, ReviewStatus::Rejected).await
}

/// Removes an associate and, best-effort, its stored logo. A failed asset
/// delete is logged and does not stop the row delete.
pub async fn delete_associate(
    store: &Store,
    media: &MediaStore,
    id: Uuid,
) -> Result<bool, sqlx::Error> {
    let Some(associate) = store.get_associate(id).await? else {
        return Ok(false);
    };

    media.delete_by_url(&associate.logo_url).await;

    store.delete_associate(id).await
}
