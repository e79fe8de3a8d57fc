//! Category repository.

use chrono::Utc;
use qb_core::entities::Category;
use qb_core::ids::PREFIX_CATEGORY;

use crate::error::DatabaseError;
use crate::helpers::parse_datetime;
use crate::service::QbService;

const SELECT_COLS: &str = "id, name, created_at";

fn row_to_category(row: &libsql::Row) -> Result<Category, DatabaseError> {
    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
        created_at: parse_datetime(&row.get::<String>(2)?)?,
    })
}

impl QbService {
    pub async fn create_category(&self, name: &str) -> Result<Category, DatabaseError> {
        let id = self.db().generate_id(PREFIX_CATEGORY).await?;
        let category = Category {
            id,
            name: name.to_string(),
            created_at: Utc::now(),
        };
        self.insert_category(&category).await?;
        Ok(category)
    }

    pub(crate) async fn insert_category(&self, category: &Category) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute(
                &format!("INSERT OR REPLACE INTO categories ({SELECT_COLS}) VALUES (?1, ?2, ?3)"),
                libsql::params![
                    category.id.as_str(),
                    category.name.as_str(),
                    category.created_at.to_rfc3339()
                ],
            )
            .await?;
        Ok(())
    }

    pub async fn get_category(&self, id: &str) -> Result<Category, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM categories WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("category", id))?;
        row_to_category(&row)
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM categories ORDER BY rowid"),
                (),
            )
            .await?;

        let mut categories = Vec::new();
        while let Some(row) = rows.next().await? {
            categories.push(row_to_category(&row)?);
        }
        Ok(categories)
    }

    pub async fn rename_category(&self, id: &str, name: &str) -> Result<Category, DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute(
                "UPDATE categories SET name = ?1 WHERE id = ?2",
                libsql::params![name, id],
            )
            .await?;
        if affected == 0 {
            return Err(DatabaseError::not_found("category", id));
        }
        self.get_category(id).await
    }

    /// Delete one category row. Child subcategories are left alone.
    pub async fn delete_category(&self, id: &str) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM categories WHERE id = ?1", [id])
            .await?;
        if affected == 0 {
            return Err(DatabaseError::not_found("category", id));
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
    async fn create_and_list() {
        let svc = test_service().await;
        let fe = svc.create_category("Frontend").await.unwrap();
        let be = svc.create_category("Backend").await.unwrap();
        assert!(fe.id.starts_with("cat-"));

        let names: Vec<String> = svc
            .list_categories()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Frontend", "Backend"]);
        assert_eq!(svc.get_category(&be.id).await.unwrap().name, "Backend");
    }

    #[tokio::test]
    async fn rename_category() {
        let svc = test_service().await;
        let cat = svc.create_category("Frontnd").await.unwrap();
        let renamed = svc.rename_category(&cat.id, "Frontend").await.unwrap();
        assert_eq!(renamed.name, "Frontend");
        assert_eq!(renamed.id, cat.id);
    }

    #[tokio::test]
    async fn delete_leaves_subcategories() {
        let svc = test_service().await;
        let cat = svc.create_category("Frontend").await.unwrap();
        svc.create_subcategory("React", &cat.id).await.unwrap();

        svc.delete_category(&cat.id).await.unwrap();
        assert!(svc.get_category(&cat.id).await.unwrap_err().is_not_found());
        assert_eq!(svc.list_subcategories().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn missing_category() {
        let svc = test_service().await;
        assert!(svc.rename_category("cat-nope", "x").await.unwrap_err().is_not_found());
        assert!(svc.delete_category("cat-nope").await.unwrap_err().is_not_found());
    }
}
