//! Tag repository. Tags are read-only outside of seed import.

use qb_core::entities::Tag;
use qb_core::ids::PREFIX_TAG;

use crate::error::DatabaseError;
use crate::helpers::get_u32;
use crate::service::QbService;

const SELECT_COLS: &str = "id, name, count";

fn row_to_tag(row: &libsql::Row) -> Result<Tag, DatabaseError> {
    Ok(Tag {
        id: row.get(0)?,
        name: row.get(1)?,
        count: get_u32(row, 2)?,
    })
}

impl QbService {
    pub async fn list_tags(&self) -> Result<Vec<Tag>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM tags ORDER BY rowid"),
                (),
            )
            .await?;

        let mut tags = Vec::new();
        while let Some(row) = rows.next().await? {
            tags.push(row_to_tag(&row)?);
        }
        Ok(tags)
    }

    /// Store a tag with its precomputed count. Generates an id when none is given.
    pub(crate) async fn insert_tag(
        &self,
        id: Option<&str>,
        name: &str,
        count: u32,
    ) -> Result<Tag, DatabaseError> {
        let id = match id {
            Some(id) => id.to_string(),
            None => self.db().generate_id(PREFIX_TAG).await?,
        };
        self.db()
            .conn()
            .execute(
                &format!("INSERT OR REPLACE INTO tags ({SELECT_COLS}) VALUES (?1, ?2, ?3)"),
                libsql::params![id.as_str(), name, i64::from(count)],
            )
            .await?;
        Ok(Tag {
            id,
            name: name.to_string(),
            count,
        })
    }
}
