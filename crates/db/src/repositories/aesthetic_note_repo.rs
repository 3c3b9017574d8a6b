//! Repository for the `aesthetic_notes` table.

use clinica_core::types::DbId;
use sqlx::PgPool;

use crate::models::aesthetic_note::{AestheticNote, CreateAestheticNote, UpdateAestheticNote};

/// Column list for `aesthetic_notes` queries.
const COLUMNS: &str = "id, patient_id, titulo, contenido, zona, created_at, updated_at";

/// Provides CRUD operations for aesthetic notes.
pub struct AestheticNoteRepo;

impl AestheticNoteRepo {
    /// Insert a new note for a patient, returning the created row.
    pub async fn create(
        pool: &PgPool,
        patient_id: DbId,
        input: &CreateAestheticNote,
    ) -> Result<AestheticNote, sqlx::Error> {
        let query = format!(
            "INSERT INTO aesthetic_notes (patient_id, titulo, contenido, zona)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AestheticNote>(&query)
            .bind(patient_id)
            .bind(&input.titulo)
            .bind(&input.contenido)
            .bind(&input.zona)
            .fetch_one(pool)
            .await
    }

    /// Find a note by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<AestheticNote>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM aesthetic_notes WHERE id = $1");
        sqlx::query_as::<_, AestheticNote>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a patient's notes, newest first.
    pub async fn list_for_patient(
        pool: &PgPool,
        patient_id: DbId,
    ) -> Result<Vec<AestheticNote>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM aesthetic_notes
             WHERE patient_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, AestheticNote>(&query)
            .bind(patient_id)
            .fetch_all(pool)
            .await
    }

    /// Update a note. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAestheticNote,
    ) -> Result<Option<AestheticNote>, sqlx::Error> {
        let query = format!(
            "UPDATE aesthetic_notes SET
                titulo = COALESCE($2, titulo),
                contenido = COALESCE($3, contenido),
                zona = COALESCE($4, zona),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AestheticNote>(&query)
            .bind(id)
            .bind(&input.titulo)
            .bind(&input.contenido)
            .bind(&input.zona)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a note. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM aesthetic_notes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
