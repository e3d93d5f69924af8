use sqlx::PgConnection;
use uuid::Uuid;

use crate::models::{Event, EventPayload};
use crate::store::Store;

/// Shared by the admin create endpoint and the approval workflow, which
/// runs it inside its transaction.
pub(crate) async fn insert_with(
    conn: &mut PgConnection,
    id: Uuid,
    payload: &EventPayload,
) -> Result<Event, sqlx::Error> {
    sqlx::query_as::<_, Event>(
        "INSERT INTO events (id, title, description, date, end_date, location,
                             image_url, external_link, is_featured, category, status)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
         RETURNING *",
    )
    .bind(id)
    .bind(&payload.title)
    .bind(&payload.description)
    .bind(payload.date)
    .bind(payload.end_date)
    .bind(&payload.location)
    .bind(&payload.image_url)
    .bind(&payload.external_link)
    .bind(payload.is_featured)
    .bind(payload.category)
    .bind(payload.status)
    .fetch_one(&mut *conn)
    .await
}

impl Store {
    pub async fn list_events(&self) -> Result<Vec<Event>, sqlx::Error> {
        sqlx::query_as::<_, Event>("SELECT * FROM events ORDER BY date ASC")
            .fetch_all(self.pool())
            .await
    }

    pub async fn get_event(&self, id: Uuid) -> Result<Option<Event>, sqlx::Error> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool())
            .await
    }

    pub async fn insert_event(&self, payload: &EventPayload) -> Result<Event, sqlx::Error> {
        let mut conn = self.pool().acquire().await?;
        insert_with(&mut conn, Uuid::new_v4(), payload).await
    }

    pub async fn update_event(
        &self,
        id: Uuid,
        payload: &EventPayload,
    ) -> Result<Option<Event>, sqlx::Error> {
        sqlx::query_as::<_, Event>(
            "UPDATE events
             SET title = $2, description = $3, date = $4, end_date = $5,
                 location = $6, image_url = $7, external_link = $8,
                 is_featured = $9, category = $10, status = $11,
                 updated_at = now()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(&payload.title)
        .bind(&payload.description)
        .bind(payload.date)
        .bind(payload.end_date)
        .bind(&payload.location)
        .bind(&payload.image_url)
        .bind(&payload.external_link)
        .bind(payload.is_featured)
        .bind(payload.category)
        .bind(payload.status)
        .fetch_optional(self.pool())
        .await
    }

    pub async fn delete_event(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn toggle_event_featured(&self, id: Uuid) -> Result<Option<Event>, sqlx::Error> {
        sqlx::query_as::<_, Event>(
            "UPDATE events
             SET is_featured = NOT is_featured, updated_at = now()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await
    }
}
