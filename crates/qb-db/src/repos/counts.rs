//! Question count queries.
//!
//! Per-id counts answer one taxonomy id at a time; [`QbService::question_tallies`]
//! answers every id in two grouped queries.

use std::collections::HashMap;

use crate::error::DatabaseError;
use crate::helpers::get_u32;
use crate::service::QbService;
use crate::store::Tallies;

impl QbService {
    pub async fn count_questions_by_category(&self, category_id: &str) -> Result<u32, DatabaseError> {
        self.count_where("category", category_id).await
    }

    pub async fn count_questions_by_subcategory(
        &self,
        subcategory_id: &str,
    ) -> Result<u32, DatabaseError> {
        self.count_where("sub_category", subcategory_id).await
    }

    async fn count_where(&self, column: &str, value: &str) -> Result<u32, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT COUNT(*) FROM questions WHERE {column} = ?1"),
                [value],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        get_u32(&row, 0)
    }

    /// Question counts grouped by category and by subcategory.
    pub async fn question_tallies(&self) -> Result<Tallies, DatabaseError> {
        Ok((
            self.group_count("category").await?,
            self.group_count("sub_category").await?,
        ))
    }

    async fn group_count(&self, column: &str) -> Result<HashMap<String, u32>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {column}, COUNT(*) FROM questions GROUP BY {column}"),
                (),
            )
            .await?;

        let mut tally = HashMap::new();
        while let Some(row) = rows.next().await? {
            tally.insert(row.get::<String>(0)?, get_u32(&row, 1)?);
        }
        Ok(tally)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::test_support::helpers::{new_question, test_service};

    #[tokio::test]
    async fn per_id_and_grouped_counts_agree() {
        let svc = test_service().await;
        for _ in 0..3 {
            svc.create_question(&new_question("f", "frontend", "react")).await.unwrap();
        }
        for _ in 0..2 {
            svc.create_question(&new_question("b", "backend", "sql")).await.unwrap();
        }

        assert_eq!(svc.count_questions_by_category("frontend").await.unwrap(), 3);
        assert_eq!(svc.count_questions_by_category("backend").await.unwrap(), 2);
        assert_eq!(svc.count_questions_by_category("devops").await.unwrap(), 0);
        assert_eq!(svc.count_questions_by_subcategory("react").await.unwrap(), 3);

        let (by_category, by_sub) = svc.question_tallies().await.unwrap();
        assert_eq!(by_category.get("frontend"), Some(&3));
        assert_eq!(by_category.get("backend"), Some(&2));
        assert_eq!(by_category.get("devops"), None);
        assert_eq!(by_sub.get("sql"), Some(&2));
    }
}
