use uuid::Uuid;

use crate::models::{EventRequest, EventRequestPayload};
use crate::store::Store;

impl Store {
    /// Newest submissions first; the review screen filters by status in
    /// memory.
    pub async fn list_event_requests(&self) -> Result<Vec<EventRequest>, sqlx::Error> {
        sqlx::query_as::<_, EventRequest>(
            "SELECT * FROM event_requests ORDER BY submitted_at DESC",
        )
        .fetch_all(self.pool())
        .await
    }

    pub async fn get_event_request(&self, id: Uuid) -> Result<Option<EventRequest>, sqlx::Error> {
        sqlx::query_as::<_, EventRequest>("SELECT * FROM event_requests WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool())
            .await
    }

    pub async fn insert_event_request(
        &self,
        payload: &EventRequestPayload,
    ) -> Result<EventRequest, sqlx::Error> {
        sqlx::query_as::<_, EventRequest>(
            "INSERT INTO event_requests (id, title, description, date, end_date, location,
                                         image_url, external_link, category,
                                         name, email, phone, organization)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&payload.title)
        .bind(&payload.description)
        .bind(payload.date)
        .bind(payload.end_date)
        .bind(&payload.location)
        .bind(&payload.image_url)
        .bind(&payload.external_link)
        .bind(payload.category)
        .bind(&payload.submitted_by.name)
        .bind(&payload.submitted_by.email)
        .bind(&payload.submitted_by.phone)
        .bind(&payload.submitted_by.organization)
        .fetch_one(self.pool())
        .await
    }
}
