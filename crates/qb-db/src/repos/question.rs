//! Question repository: CRUD plus edit-history bookkeeping.

use chrono::Utc;
use qb_core::entities::{EditRecord, NewQuestion, Question};
use qb_core::ids::PREFIX_QUESTION;

use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, parse_json_list, to_json_text};
use crate::service::QbService;
use crate::updates::question::QuestionUpdate;

const SELECT_COLS: &str = "id, title, category, sub_category, difficulty, question, answer, \
     tags, mastered, date_added, last_reviewed, related_questions, edit_history";

fn row_to_question(row: &libsql::Row) -> Result<Question, DatabaseError> {
    let difficulty = row.get::<i64>(4)?;
    Ok(Question {
        id: row.get(0)?,
        title: row.get(1)?,
        category: row.get(2)?,
        sub_category: row.get(3)?,
        difficulty: u8::try_from(difficulty).map_err(|_| {
            DatabaseError::InvalidState(format!("difficulty out of range: {difficulty}"))
        })?,
        question: row.get(5)?,
        answer: row.get(6)?,
        tags: parse_json_list(row.get::<Option<String>>(7)?.as_deref())?,
        mastered: row.get::<i64>(8)? != 0,
        date_added: parse_datetime(&row.get::<String>(9)?)?,
        last_reviewed: parse_datetime(&row.get::<String>(10)?)?,
        related_questions: parse_json_list(row.get::<Option<String>>(11)?.as_deref())?,
        edit_history: parse_json_list(row.get::<Option<String>>(12)?.as_deref())?,
    })
}

impl QbService {
    /// Insert a new question. The store assigns the id; `date_added` and
    /// `last_reviewed` are both now, mastery starts off, history starts empty.
    pub async fn create_question(&self, new: &NewQuestion) -> Result<Question, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_QUESTION).await?;

        let question = Question {
            id: id.clone(),
            title: new.title.clone(),
            category: new.category.clone(),
            sub_category: new.sub_category.clone(),
            difficulty: new.difficulty,
            question: new.question.clone(),
            answer: new.answer.clone(),
            tags: new.tags.clone(),
            mastered: false,
            date_added: now,
            last_reviewed: now,
            related_questions: new.related_questions.clone(),
            edit_history: Vec::new(),
        };
        self.insert_question(&question).await?;
        Ok(question)
    }

    /// Write a fully formed question row, replacing any row with the same id.
    pub(crate) async fn insert_question(&self, q: &Question) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT OR REPLACE INTO questions ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)"
                ),
                libsql::params![
                    q.id.as_str(),
                    q.title.as_str(),
                    q.category.as_str(),
                    q.sub_category.as_str(),
                    i64::from(q.difficulty),
                    q.question.as_str(),
                    q.answer.as_str(),
                    to_json_text(&q.tags)?,
                    i64::from(q.mastered),
                    q.date_added.to_rfc3339(),
                    q.last_reviewed.to_rfc3339(),
                    to_json_text(&q.related_questions)?,
                    to_json_text(&q.edit_history)?
                ],
            )
            .await?;
        Ok(())
    }

    pub async fn get_question(&self, id: &str) -> Result<Question, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM questions WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("question", id))?;
        row_to_question(&row)
    }

    /// All questions in insertion order.
    pub async fn list_questions(&self) -> Result<Vec<Question>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM questions ORDER BY rowid"),
                (),
            )
            .await?;

        let mut questions = Vec::new();
        while let Some(row) = rows.next().await? {
            questions.push(row_to_question(&row)?);
        }
        Ok(questions)
    }

    /// Apply a partial update. Any content edit sets `last_reviewed` to now
    /// unless the update supplies its own; an `edit_note` also appends to the
    /// edit history.
    pub async fn update_question(
        &self,
        id: &str,
        update: &QuestionUpdate,
    ) -> Result<Question, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(ref title) = update.title {
            sets.push(format!("title = ?{idx}"));
            params.push(title.clone().into());
            idx += 1;
        }
        if let Some(ref category) = update.category {
            sets.push(format!("category = ?{idx}"));
            params.push(category.clone().into());
            idx += 1;
        }
        if let Some(ref sub_category) = update.sub_category {
            sets.push(format!("sub_category = ?{idx}"));
            params.push(sub_category.clone().into());
            idx += 1;
        }
        if let Some(difficulty) = update.difficulty {
            sets.push(format!("difficulty = ?{idx}"));
            params.push(i64::from(difficulty).into());
            idx += 1;
        }
        if let Some(ref question) = update.question {
            sets.push(format!("question = ?{idx}"));
            params.push(question.clone().into());
            idx += 1;
        }
        if let Some(ref answer) = update.answer {
            sets.push(format!("answer = ?{idx}"));
            params.push(answer.clone().into());
            idx += 1;
        }
        if let Some(ref tags) = update.tags {
            sets.push(format!("tags = ?{idx}"));
            params.push(to_json_text(tags)?.into());
            idx += 1;
        }
        if let Some(ref related) = update.related_questions {
            sets.push(format!("related_questions = ?{idx}"));
            params.push(to_json_text(related)?.into());
            idx += 1;
        }
        if let Some(mastered) = update.mastered {
            sets.push(format!("mastered = ?{idx}"));
            params.push(i64::from(mastered).into());
            idx += 1;
        }

        let now = Utc::now();
        let mut last_reviewed = update.last_reviewed;
        if update.edits_content() {
            last_reviewed.get_or_insert(now);
        }
        if let Some(ref note) = update.edit_note {
            let mut history = self.get_question(id).await?.edit_history;
            history.push(EditRecord {
                description: note.clone(),
                timestamp: now,
            });
            sets.push(format!("edit_history = ?{idx}"));
            params.push(to_json_text(&history)?.into());
            idx += 1;
        }
        if let Some(at) = last_reviewed {
            sets.push(format!("last_reviewed = ?{idx}"));
            params.push(at.to_rfc3339().into());
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_question(id).await;
        }

        params.push(id.into());
        let sql = format!("UPDATE questions SET {} WHERE id = ?{idx}", sets.join(", "));
        let affected = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if affected == 0 {
            return Err(DatabaseError::not_found("question", id));
        }

        self.get_question(id).await
    }

    pub async fn delete_question(&self, id: &str) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM questions WHERE id = ?1", [id])
            .await?;
        if affected == 0 {
            return Err(DatabaseError::not_found("question", id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::helpers::{new_question, test_service};
    use crate::updates::question::QuestionUpdateBuilder;

    #[tokio::test]
    async fn create_question_roundtrip() {
        let svc = test_service().await;

        let mut new = new_question("Explain closures", "cat-1", "sub-1");
        new.tags = vec!["js".into(), "functions".into()];
        new.related_questions = vec!["qst-other".into()];
        let q = svc.create_question(&new).await.unwrap();

        assert!(q.id.starts_with("qst-"));
        assert!(!q.mastered);
        assert_eq!(q.date_added, q.last_reviewed);
        assert!(q.edit_history.is_empty());

        let fetched = svc.get_question(&q.id).await.unwrap();
        assert_eq!(fetched.title, "Explain closures");
        assert_eq!(fetched.tags, vec!["js", "functions"]);
        assert_eq!(fetched.related_questions, vec!["qst-other"]);
        assert_eq!(fetched.difficulty, 3);
    }

    #[tokio::test]
    async fn list_keeps_insertion_order() {
        let svc = test_service().await;
        let a = svc.create_question(&new_question("A", "c", "s")).await.unwrap();
        let b = svc.create_question(&new_question("B", "c", "s")).await.unwrap();
        let ids: Vec<String> = svc
            .list_questions()
            .await
            .unwrap()
            .into_iter()
            .map(|q| q.id)
            .collect();
        assert_eq!(ids, vec![a.id, b.id]);
    }

    #[tokio::test]
    async fn update_question_partial() {
        let svc = test_service().await;
        let q = svc.create_question(&new_question("Original", "c", "s")).await.unwrap();
        let stale = q.date_added - chrono::Duration::days(3);
        let q = svc
            .update_question(&q.id, &QuestionUpdateBuilder::new().last_reviewed(stale).build())
            .await
            .unwrap();
        assert_eq!(q.last_reviewed, stale);

        let update = QuestionUpdateBuilder::new().title("Updated").difficulty(5).build();
        let updated = svc.update_question(&q.id, &update).await.unwrap();
        assert_eq!(updated.title, "Updated");
        assert_eq!(updated.difficulty, 5);
        assert_eq!(updated.answer, q.answer);
        assert!(updated.last_reviewed > stale);
        assert!(updated.edit_history.is_empty());
    }

    #[tokio::test]
    async fn mastery_only_update_keeps_supplied_review_time() {
        let svc = test_service().await;
        let q = svc.create_question(&new_question("Q", "c", "s")).await.unwrap();

        let update = QuestionUpdateBuilder::new()
            .mastered(true)
            .last_reviewed(q.date_added)
            .build();
        let updated = svc.update_question(&q.id, &update).await.unwrap();
        assert!(updated.mastered);
        assert_eq!(updated.last_reviewed, q.date_added);
    }

    #[tokio::test]
    async fn edit_note_appends_history_and_marks_reviewed() {
        let svc = test_service().await;
        let q = svc.create_question(&new_question("Q", "c", "s")).await.unwrap();

        let first = QuestionUpdateBuilder::new().answer("Better").edit_note("reworded").build();
        let updated = svc.update_question(&q.id, &first).await.unwrap();
        assert_eq!(updated.edit_history.len(), 1);
        assert_eq!(updated.edit_history[0].description, "reworded");
        assert!(updated.last_reviewed >= q.last_reviewed);

        let second = QuestionUpdateBuilder::new().edit_note("typo").build();
        let updated = svc.update_question(&q.id, &second).await.unwrap();
        let notes: Vec<&str> = updated
            .edit_history
            .iter()
            .map(|e| e.description.as_str())
            .collect();
        assert_eq!(notes, vec!["reworded", "typo"]);
    }

    #[tokio::test]
    async fn empty_update_returns_current() {
        let svc = test_service().await;
        let q = svc.create_question(&new_question("Q", "c", "s")).await.unwrap();
        let same = svc
            .update_question(&q.id, &QuestionUpdate::default())
            .await
            .unwrap();
        assert_eq!(same, q);
    }

    #[tokio::test]
    async fn missing_question_is_not_found() {
        let svc = test_service().await;
        assert!(matches!(
            svc.get_question("qst-missing").await,
            Err(DatabaseError::NotFound { entity: "question", .. })
        ));
        let update = QuestionUpdateBuilder::new().title("x").build();
        assert!(svc.update_question("qst-missing", &update).await.unwrap_err().is_not_found());
        assert!(svc.delete_question("qst-missing").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn delete_question() {
        let svc = test_service().await;
        let q = svc.create_question(&new_question("To delete", "c", "s")).await.unwrap();
        svc.delete_question(&q.id).await.unwrap();
        assert!(svc.get_question(&q.id).await.unwrap_err().is_not_found());
    }
}
