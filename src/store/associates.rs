use uuid::Uuid;

use crate::models::{Associate, AssociatePayload, ReviewStatus};
use crate::store::Store;

impl Store {
    pub async fn list_associates(&self) -> Result<Vec<Associate>, sqlx::Error> {
        sqlx::query_as::<_, Associate>("SELECT * FROM associates ORDER BY name ASC")
            .fetch_all(self.pool())
            .await
    }

    pub async fn get_associate(&self, id: Uuid) -> Result<Option<Associate>, sqlx::Error> {
        sqlx::query_as::<_, Associate>("SELECT * FROM associates WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool())
            .await
    }

    pub async fn insert_associate(
        &self,
        payload: &AssociatePayload,
    ) -> Result<Associate, sqlx::Error> {
        sqlx::query_as::<_, Associate>(
            "INSERT INTO associates (id, name, category, logo_url, instagram, site_url,
                                     razao_social, cnpj, address, city, state, postal_code,
                                     contact_name, contact_email, contact_phone, employee_count)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&payload.name)
        .bind(&payload.category)
        .bind(&payload.logo_url)
        .bind(&payload.instagram)
        .bind(&payload.site_url)
        .bind(&payload.registration.razao_social)
        .bind(&payload.registration.cnpj)
        .bind(&payload.registration.address)
        .bind(&payload.registration.city)
        .bind(&payload.registration.state)
        .bind(&payload.registration.postal_code)
        .bind(&payload.registration.contact_name)
        .bind(&payload.registration.contact_email)
        .bind(&payload.registration.contact_phone)
        .bind(payload.registration.employee_count)
        .fetch_one(self.pool())
        .await
    }

    pub async fn set_associate_status(
        &self,
        id: Uuid,
        status: ReviewStatus,
    ) -> Result<Option<Associate>, sqlx::Error> {
        sqlx::query_as::<_, Associate>(
            "UPDATE associates SET status = $2, updated_at = now() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(self.pool())
        .await
    }

    pub async fn delete_associate(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM associates WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
