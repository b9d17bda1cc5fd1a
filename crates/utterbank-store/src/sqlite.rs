use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rusqlite::{Connection, params};
use utterbank_types::{Example, ExampleMetadata, ExampleUpdate, Scope};

use crate::error::{Error, Result};
use crate::selector::{Selector, SortSpec};
use crate::store::ExampleStore;

// Schema version (increment when changing table definitions)
const SCHEMA_VERSION: i32 = 1;

// NOTE: Storage Design Rationale
//
// Why one flat table with JSON entity spans?
// - Scope narrowing (project_id, language) is the only filter worth
//   doing in SQL; everything else goes through Selector in Rust so the
//   memory and SQLite backends share one set of matching semantics
// - Entity lists are small and always read whole; a child table would
//   only add join bookkeeping
//
// Why refuse to open on version mismatch instead of migrating?
// - The store is the source of truth for the corpus, so silently
//   dropping tables is not an option here
// - Refusing loudly leaves the file untouched for the operator to
//   export with the version that wrote it

/// SQLite-backed store: one file, one flat `examples` table.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

fn init_schema(conn: &Connection) -> Result<()> {
    let current_version: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    if current_version == SCHEMA_VERSION {
        return Ok(());
    }
    if current_version != 0 {
        return Err(Error::Corrupt(format!(
            "store schema version {} is not supported (expected {})",
            current_version, SCHEMA_VERSION
        )));
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS examples (
            id TEXT PRIMARY KEY,
            project_id TEXT NOT NULL,
            language TEXT NOT NULL,
            intent TEXT,
            text TEXT NOT NULL,
            entities TEXT NOT NULL DEFAULT '[]',
            draft INTEGER NOT NULL DEFAULT 0,
            canonical INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_examples_scope ON examples(project_id, language);
        CREATE INDEX IF NOT EXISTS idx_examples_text ON examples(project_id, language, text);
        "#,
    )?;

    conn.execute(&format!("PRAGMA user_version = {}", SCHEMA_VERSION), [])?;

    Ok(())
}

struct ExampleRow {
    id: String,
    project_id: String,
    language: String,
    intent: Option<String>,
    text: String,
    entities_json: String,
    draft: bool,
    canonical: bool,
    created_at: String,
    updated_at: String,
}

fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ExampleRow> {
    Ok(ExampleRow {
        id: row.get(0)?,
        project_id: row.get(1)?,
        language: row.get(2)?,
        intent: row.get(3)?,
        text: row.get(4)?,
        entities_json: row.get(5)?,
        draft: row.get(6)?,
        canonical: row.get(7)?,
        created_at: row.get(8)?,
        updated_at: row.get(9)?,
    })
}

impl ExampleRow {
    fn into_example(self) -> Result<Example> {
        Ok(Example {
            id: self.id,
            project_id: self.project_id,
            intent: self.intent,
            text: self.text,
            entities: serde_json::from_str(&self.entities_json)?,
            metadata: ExampleMetadata {
                language: self.language,
                draft: self.draft,
                canonical: self.canonical,
            },
            created_at: parse_timestamp(&self.created_at)?,
            updated_at: parse_timestamp(&self.updated_at)?,
        })
    }
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|err| Error::Corrupt(format!("bad timestamp {:?}: {}", raw, err)))
}

fn placeholders(count: usize) -> String {
    let mut sql = String::new();
    for index in 0..count {
        if index > 0 {
            sql.push(',');
        }
        sql.push('?');
    }
    sql
}

impl ExampleStore for SqliteStore {
    async fn find(&self, selector: &Selector, sort: &SortSpec) -> Result<Vec<Example>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            r#"
            SELECT id, project_id, language, intent, text, entities, draft, canonical, created_at, updated_at
            FROM examples
            WHERE project_id = ?1 AND language = ?2
            ORDER BY rowid
            "#,
        )?;

        let rows = stmt
            .query_map(params![selector.project_id, selector.language], read_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut examples = Vec::new();
        for row in rows {
            let example = row.into_example()?;
            if selector.matches(&example) {
                examples.push(example);
            }
        }
        // Stable sort on top of rowid order keeps insertion order for ties.
        examples.sort_by(|a, b| sort.compare(a, b));
        Ok(examples)
    }

    async fn insert_many(&self, examples: Vec<Example>) -> Result<usize> {
        let mut conn = self.conn.lock().unwrap();
        let tx = conn.transaction()?;

        let mut inserted = 0;
        for example in &examples {
            let entities = serde_json::to_string(&example.entities)?;
            tx.execute(
                r#"
                INSERT INTO examples (id, project_id, language, intent, text, entities, draft, canonical, created_at, updated_at)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
                "#,
                params![
                    &example.id,
                    &example.project_id,
                    &example.metadata.language,
                    &example.intent,
                    &example.text,
                    &entities,
                    example.metadata.draft,
                    example.metadata.canonical,
                    example.created_at.to_rfc3339(),
                    example.updated_at.to_rfc3339(),
                ],
            )?;
            inserted += 1;
        }

        tx.commit()?;
        Ok(inserted)
    }

    async fn update_one(
        &self,
        update: &ExampleUpdate,
        stamped_at: DateTime<Utc>,
    ) -> Result<Option<Example>> {
        let mut conn = self.conn.lock().unwrap();
        let tx = conn.transaction()?;

        let entities = serde_json::to_string(&update.entities)?;
        let changed = tx.execute(
            r#"
            UPDATE examples
            SET text = ?2, intent = ?3, entities = ?4, language = ?5, draft = ?6, canonical = ?7, updated_at = ?8
            WHERE id = ?1
            "#,
            params![
                &update.id,
                &update.text,
                &update.intent,
                &entities,
                &update.metadata.language,
                update.metadata.draft,
                update.metadata.canonical,
                stamped_at.to_rfc3339(),
            ],
        )?;

        if changed == 0 {
            return Ok(None);
        }

        let row = tx.query_row(
            r#"
            SELECT id, project_id, language, intent, text, entities, draft, canonical, created_at, updated_at
            FROM examples
            WHERE id = ?1
            "#,
            [update.id.as_str()],
            read_row,
        )?;

        tx.commit()?;
        row.into_example().map(Some)
    }

    async fn delete_by_ids(&self, ids: &[String]) -> Result<usize> {
        if ids.is_empty() {
            return Ok(0);
        }

        let mut conn = self.conn.lock().unwrap();
        let tx = conn.transaction()?;

        let sql = format!(
            "SELECT COUNT(*) FROM examples WHERE id IN ({})",
            placeholders(ids.len())
        );
        let matched: i64 = tx.query_row(&sql, rusqlite::params_from_iter(ids), |row| row.get(0))?;
        let matched = matched as usize;

        // All or nothing: a missing id leaves the batch untouched.
        if matched != ids.len() {
            return Ok(matched);
        }

        let sql = format!(
            "DELETE FROM examples WHERE id IN ({})",
            placeholders(ids.len())
        );
        tx.execute(&sql, rusqlite::params_from_iter(ids))?;
        tx.commit()?;
        Ok(matched)
    }

    async fn delete_by_texts(&self, scope: &Scope, texts: &[String]) -> Result<usize> {
        if texts.is_empty() {
            return Ok(0);
        }

        let conn = self.conn.lock().unwrap();
        let sql = format!(
            "DELETE FROM examples WHERE project_id = ? AND language = ? AND text IN ({})",
            placeholders(texts.len())
        );

        let mut sql_params: Vec<&dyn rusqlite::ToSql> = vec![&scope.project_id, &scope.language];
        for text in texts {
            sql_params.push(text);
        }

        let deleted = conn.execute(&sql, sql_params.as_slice())?;
        Ok(deleted)
    }
}
