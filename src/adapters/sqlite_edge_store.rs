//! SQLite implementation of the edge store.
//!
//! The relation is a single `edges(from_node, to_node, weight)` table with an
//! index on `from_node`, so `children_of` is a point lookup regardless of the
//! size of the tree.

use std::{
    fs,
    path::{Path, PathBuf},
};

use rusqlite::{Connection, params};
use tracing::debug;

use crate::{
    Result,
    error::Error,
    identifiers::NodeId,
    ports::EdgeStore,
    types::{ChildEdge, Edge},
};

const CREATE_SCHEMA_SQL: &str = "\
CREATE TABLE IF NOT EXISTS edges (
    from_node INTEGER NOT NULL,
    to_node INTEGER NOT NULL,
    weight INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_edges_from_node ON edges (from_node);";

const DROP_SCHEMA_SQL: &str = "\
DROP INDEX IF EXISTS idx_edges_from_node;
DROP TABLE IF EXISTS edges;";

const INSERT_EDGE_SQL: &str = "INSERT INTO edges (from_node, to_node, weight) VALUES (?1, ?2, ?3)";

const CHILDREN_SQL: &str = "\
SELECT to_node, weight
FROM edges
WHERE from_node = ?1
ORDER BY weight ASC, to_node ASC";

const COUNT_SQL: &str = "SELECT COUNT(*) FROM edges";

/// SQLite-backed [`EdgeStore`].
///
/// # Examples
///
/// ```no_run
/// use dfbnb::adapters::SqliteEdgeStore;
/// use dfbnb::ports::EdgeStore;
/// use dfbnb::tree::{CostDistribution, TreeConfig, TreeGenerator};
/// use std::path::Path;
///
/// let mut store = SqliteEdgeStore::open(Path::new("databases/tree_b3_d6.db"))?;
/// let config = TreeConfig::new(3, 6, CostDistribution::Uniform);
/// TreeGenerator::seeded(7).generate(&config, &mut store)?;
/// assert_eq!(store.edge_count()?, config.shape()?.edge_count());
/// # Ok::<(), dfbnb::Error>(())
/// ```
pub struct SqliteEdgeStore {
    conn: Connection,
    path: Option<PathBuf>,
}

impl SqliteEdgeStore {
    /// Open (or create) a store file, creating parent directories as needed.
    ///
    /// An existing relation is kept, so a tree generated earlier can be
    /// searched by a later process.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the directory, the database or the schema
    /// cannot be created.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| Error::StorageIo {
                operation: format!("create store directory {parent:?}"),
                source,
            })?;
        }

        let conn = Connection::open(path)
            .map_err(|e| Error::storage(format!("open edge store {path:?}"), e))?;
        Self::with_connection(conn, Some(path.to_path_buf()))
    }

    /// Open a private in-memory SQLite database.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| Error::storage("open in-memory edge store", e))?;
        Self::with_connection(conn, None)
    }

    fn with_connection(conn: Connection, path: Option<PathBuf>) -> Result<Self> {
        conn.pragma_update(None, "synchronous", "NORMAL")
            .map_err(|e| Error::storage("configure edge store", e))?;
        conn.execute_batch(CREATE_SCHEMA_SQL)
            .map_err(|e| Error::storage("create edges table", e))?;
        Ok(Self { conn, path })
    }

    /// Backing file, or `None` for an in-memory database.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

fn to_column(column: &'static str, value: u64) -> Result<i64> {
    i64::try_from(value).map_err(|_| Error::ColumnOutOfRange {
        column,
        value: i128::from(value),
    })
}

fn node_from_column(column: &'static str, value: i64) -> Result<NodeId> {
    u64::try_from(value)
        .ok()
        .filter(|id| *id > 0)
        .map(NodeId::new)
        .ok_or(Error::ColumnOutOfRange {
            column,
            value: i128::from(value),
        })
}

fn weight_from_column(value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| Error::ColumnOutOfRange {
        column: "weight",
        value: i128::from(value),
    })
}

impl EdgeStore for SqliteEdgeStore {
    fn reset(&mut self) -> Result<()> {
        self.conn
            .execute_batch(DROP_SCHEMA_SQL)
            .map_err(|e| Error::storage("drop edges table", e))?;
        self.conn.flush_prepared_statement_cache();
        self.conn
            .execute_batch(CREATE_SCHEMA_SQL)
            .map_err(|e| Error::storage("create edges table", e))?;
        debug!(path = ?self.path, "Edge store reset");
        Ok(())
    }

    fn insert(&mut self, edge: Edge) -> Result<()> {
        let from = to_column("from_node", edge.from.value())?;
        let to = to_column("to_node", edge.to.value())?;
        let mut stmt = self
            .conn
            .prepare_cached(INSERT_EDGE_SQL)
            .map_err(|e| Error::storage("prepare edge insert", e))?;
        stmt.execute(params![from, to, edge.weight])
            .map_err(|e| Error::storage(format!("insert edge {edge}"), e))?;
        Ok(())
    }

    fn write_batch(&mut self, edges: &[Edge]) -> Result<()> {
        let tx = self
            .conn
            .transaction()
            .map_err(|e| Error::storage("begin edge batch", e))?;
        {
            let mut stmt = tx
                .prepare_cached(INSERT_EDGE_SQL)
                .map_err(|e| Error::storage("prepare edge insert", e))?;
            for edge in edges {
                let from = to_column("from_node", edge.from.value())?;
                let to = to_column("to_node", edge.to.value())?;
                stmt.execute(params![from, to, edge.weight])
                    .map_err(|e| Error::storage(format!("insert edge {edge}"), e))?;
            }
        }
        tx.commit()
            .map_err(|e| Error::storage("commit edge batch", e))
    }

    fn children_of(&self, node: NodeId) -> Result<Vec<ChildEdge>> {
        let from = to_column("from_node", node.value())?;
        let mut stmt = self
            .conn
            .prepare_cached(CHILDREN_SQL)
            .map_err(|e| Error::storage("prepare children query", e))?;
        let rows = stmt
            .query_map(params![from], |row| {
                Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?))
            })
            .map_err(|e| Error::storage(format!("query children of node {node}"), e))?;

        let mut children = Vec::new();
        for row in rows {
            let (to, weight) =
                row.map_err(|e| Error::storage(format!("read children of node {node}"), e))?;
            children.push(ChildEdge::new(
                node_from_column("to_node", to)?,
                weight_from_column(weight)?,
            ));
        }
        Ok(children)
    }

    fn edge_count(&self) -> Result<u64> {
        let count: i64 = self
            .conn
            .query_row(COUNT_SQL, [], |row| row.get(0))
            .map_err(|e| Error::storage("count edges", e))?;
        Ok(u64::try_from(count).unwrap_or_default())
    }
}
