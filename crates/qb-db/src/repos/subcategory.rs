//! Subcategory repository. The parent id is stored as given; nothing checks
//! that the category exists.

use chrono::Utc;
use qb_core::entities::SubCategory;
use qb_core::ids::PREFIX_SUBCATEGORY;

use crate::error::DatabaseError;
use crate::helpers::parse_datetime;
use crate::service::QbService;

const SELECT_COLS: &str = "id, name, category_id, created_at";

fn row_to_subcategory(row: &libsql::Row) -> Result<SubCategory, DatabaseError> {
    Ok(SubCategory {
        id: row.get(0)?,
        name: row.get(1)?,
        category_id: row.get(2)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}

impl QbService {
    pub async fn create_subcategory(
        &self,
        name: &str,
        category_id: &str,
    ) -> Result<SubCategory, DatabaseError> {
        let id = self.db().generate_id(PREFIX_SUBCATEGORY).await?;
        let sub = SubCategory {
            id,
            name: name.to_string(),
            category_id: category_id.to_string(),
            created_at: Utc::now(),
        };
        self.insert_subcategory(&sub).await?;
        Ok(sub)
    }

    pub(crate) async fn insert_subcategory(&self, sub: &SubCategory) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT OR REPLACE INTO subcategories ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4)"
                ),
                libsql::params![
                    sub.id.as_str(),
                    sub.name.as_str(),
                    sub.category_id.as_str(),
                    sub.created_at.to_rfc3339()
                ],
            )
            .await?;
        Ok(())
    }

    pub async fn get_subcategory(&self, id: &str) -> Result<SubCategory, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM subcategories WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("subcategory", id))?;
        row_to_subcategory(&row)
    }

    pub async fn list_subcategories(&self) -> Result<Vec<SubCategory>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM subcategories ORDER BY rowid"),
                (),
            )
            .await?;

        let mut subs = Vec::new();
        while let Some(row) = rows.next().await? {
            subs.push(row_to_subcategory(&row)?);
        }
        Ok(subs)
    }

    pub async fn rename_subcategory(
        &self,
        id: &str,
        name: &str,
    ) -> Result<SubCategory, DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute(
                "UPDATE subcategories SET name = ?1 WHERE id = ?2",
                libsql::params![name, id],
            )
            .await?;
        if affected == 0 {
            return Err(DatabaseError::not_found("subcategory", id));
        }
        self.get_subcategory(id).await
    }

    pub async fn delete_subcategory(&self, id: &str) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM subcategories WHERE id = ?1", [id])
            .await?;
        if affected == 0 {
            return Err(DatabaseError::not_found("subcategory", id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::helpers::test_service;

    #[tokio::test]
    async fn create_under_missing_parent_is_allowed() {
        let svc = test_service().await;
        let sub = svc.create_subcategory("Orphan", "cat-ghost").await.unwrap();
        assert!(sub.id.starts_with("sub-"));
        assert_eq!(svc.get_subcategory(&sub.id).await.unwrap().category_id, "cat-ghost");
    }

    #[tokio::test]
    async fn rename_and_delete() {
        let svc = test_service().await;
        let sub = svc.create_subcategory("Reakt", "cat-1").await.unwrap();
        let renamed = svc.rename_subcategory(&sub.id, "React").await.unwrap();
        assert_eq!(renamed.name, "React");
        assert_eq!(renamed.category_id, "cat-1");

        svc.delete_subcategory(&sub.id).await.unwrap();
        assert!(svc.list_subcategories().await.unwrap().is_empty());
        assert!(svc.delete_subcategory(&sub.id).await.unwrap_err().is_not_found());
    }
}
