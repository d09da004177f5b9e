//! SQLite-backed profile directory

use crate::StoreError;
use entwine_domain::traits::{RecordSource, RecordStore};
use entwine_domain::{Facet, MaritalStatus, ProfilePatch, ProfileRecord, RelationshipFields, UserId};
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

/// SQLite-based implementation of the profile directory
///
/// One row per user with per-facet relationship columns; partner lists
/// and tags are JSON-encoded text. Writes are facet-scoped partial
/// updates so a public-facet patch can never touch private columns.
///
/// # Thread Safety
///
/// The connection sits behind a mutex; operations hold it only for the
/// duration of one statement batch. There is no cross-record transaction,
/// matching the remote store this directory stands in for.
pub struct SqliteDirectory {
    conn: Mutex<Connection>,
}

impl SqliteDirectory {
    /// Open (or create) a directory at the given database path
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use entwine_store::SqliteDirectory;
    ///
    /// let store = SqliteDirectory::new("profiles.db").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path.as_ref())?;
        conn.execute_batch(include_str!("schema.sql"))?;
        tracing::debug!(path = %path.as_ref().display(), "profile directory opened");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory directory (useful for testing)
    pub fn in_memory() -> Result<Self, StoreError> {
        Self::new(":memory:")
    }

    /// Insert a new record; duplicate ids are rejected by the schema
    pub fn insert(&self, record: &ProfileRecord) -> Result<(), StoreError> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO profiles (id, public_status, public_partner, public_partners,
                                   private_status, private_partner, private_partners, looking_for)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                record.id.as_str(),
                record.public.status.as_str(),
                record.public.partner.as_ref().map(|p| p.as_str()),
                encode_ids(&record.public.partners)?,
                record.private.status.as_str(),
                record.private.partner.as_ref().map(|p| p.as_str()),
                encode_ids(&record.private.partners)?,
                encode_tags(&record.looking_for)?,
            ],
        )?;
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn
            .lock()
            .map_err(|_| StoreError::Internal("connection lock poisoned".to_string()))
    }
}

#[async_trait]
impl RecordSource for SqliteDirectory {
    type Error = StoreError;

    async fn fetch(&self, id: &UserId) -> Result<Option<ProfileRecord>, Self::Error> {
        let conn = self.lock()?;
        let record = conn
            .query_row(
                "SELECT id, public_status, public_partner, public_partners,
                        private_status, private_partner, private_partners, looking_for
                 FROM profiles WHERE id = ?1",
                params![id.as_str()],
                |row| {
                    let public = facet_from_row(row, 1)?;
                    let private = facet_from_row(row, 4)?;
                    let tags_raw: String = row.get(7)?;
                    let looking_for = decode_tags(&tags_raw).map_err(|e| decode_error(7, e))?;
                    Ok(ProfileRecord {
                        id: UserId::new(row.get::<_, String>(0)?),
                        public,
                        private,
                        looking_for,
                    })
                },
            )
            .optional()?;
        Ok(record)
    }
}

#[async_trait]
impl RecordStore for SqliteDirectory {
    async fn apply(&self, id: &UserId, patch: &ProfilePatch) -> Result<(), Self::Error> {
        let (status_col, partner_col, partners_col) = match patch.facet {
            Facet::Public => ("public_status", "public_partner", "public_partners"),
            Facet::Private => ("private_status", "private_partner", "private_partners"),
        };
        let partners_json = encode_ids(&patch.partners)?;
        let partner = patch.partner.as_ref().map(|p| p.as_str());

        let conn = self.lock()?;
        let mut sql = format!(
            "UPDATE profiles SET {} = ?1, {} = ?2, {} = ?3",
            status_col, partner_col, partners_col
        );
        let changed = if let Some(tags) = &patch.looking_for {
            sql.push_str(", looking_for = ?4 WHERE id = ?5");
            conn.execute(
                &sql,
                params![
                    patch.status.as_str(),
                    partner,
                    partners_json,
                    encode_tags(tags)?,
                    id.as_str()
                ],
            )?
        } else {
            sql.push_str(" WHERE id = ?4");
            conn.execute(
                &sql,
                params![patch.status.as_str(), partner, partners_json, id.as_str()],
            )?
        };

        if changed == 0 {
            return Err(StoreError::NotFound(id.clone()));
        }
        Ok(())
    }
}

/// Read one facet's three columns starting at the given index
fn facet_from_row(row: &rusqlite::Row<'_>, base: usize) -> rusqlite::Result<RelationshipFields> {
    let status_raw: String = row.get(base)?;
    let status = MaritalStatus::parse(&status_raw).ok_or_else(|| {
        decode_error(
            base,
            StoreError::Encoding(format!("Unknown marital status: {}", status_raw)),
        )
    })?;
    let partner: Option<String> = row.get(base + 1)?;
    let partners_raw: String = row.get(base + 2)?;
    let partners = decode_ids(&partners_raw).map_err(|e| decode_error(base + 2, e))?;
    Ok(RelationshipFields {
        status,
        partner: partner.map(UserId::new),
        partners,
    })
}

fn decode_error(column: usize, e: StoreError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(e))
}

fn encode_ids(ids: &[UserId]) -> Result<String, StoreError> {
    let raw: Vec<&str> = ids.iter().map(|i| i.as_str()).collect();
    serde_json::to_string(&raw).map_err(|e| StoreError::Encoding(e.to_string()))
}

fn decode_ids(raw: &str) -> Result<Vec<UserId>, StoreError> {
    let ids: Vec<String> =
        serde_json::from_str(raw).map_err(|e| StoreError::Encoding(e.to_string()))?;
    Ok(ids.into_iter().map(UserId::new).collect())
}

fn encode_tags(tags: &[String]) -> Result<String, StoreError> {
    serde_json::to_string(tags).map_err(|e| StoreError::Encoding(e.to_string()))
}

fn decode_tags(raw: &str) -> Result<Vec<String>, StoreError> {
    serde_json::from_str(raw).map_err(|e| StoreError::Encoding(e.to_string()))
}
