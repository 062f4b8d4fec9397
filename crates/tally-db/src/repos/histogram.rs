//! Histogram repository: grouped, counted, filtered, sorted and paged
//! annotation text within a tree range.
//!
//! Every query is assembled from one scoped `FROM ... WHERE` body so the two
//! counts and the page agree on which rows qualify. Filters contribute one
//! clause per [`HistogramFilter`] variant; user values are always bound.
//!
//! The text filter is the exception. SQLite `LIKE` only folds ASCII case, so
//! text-filtered queries fetch every sorted group in scope and apply
//! [`text_contains`] in Rust before counting and paging.

use tally_core::entities::{HistogramBucket, HistogramPage, TreeRange};
use tally_core::enums::{AnnotationKind, SortColumn};
use tally_core::query::{
    HistogramFilter, HistogramSort, NO_LICENSE_SHORTNAMES, Page, text_contains,
};

use crate::error::DatabaseError;
use crate::helpers::{commit_or_rollback, family_table, get_count, sql_int};
use crate::repos::tree::{files_in_range, range_params};
use crate::service::TallyService;

/// A `FROM ... WHERE ...` body plus its bound parameters, and the text
/// pattern groups must contain, if any.
struct ScopedRows {
    body: String,
    params: Vec<libsql::Value>,
    contains: Option<String>,
}

impl ScopedRows {
    /// Rows of `kind` whose file lies in `range`, optionally from one agent.
    fn new(range: &TreeRange, kind: AnnotationKind, agent_id: Option<i64>) -> Self {
        let table = family_table(kind.family());
        let mut params: Vec<libsql::Value> = range_params(range).into();
        params.push(libsql::Value::Text(kind.as_str().to_string()));
        let mut body = format!(
            "FROM {table} AS cp
             WHERE cp.pfile_fk IN ({files})
               AND cp.type = ?4",
            files = files_in_range(1)
        );
        if let Some(agent_id) = agent_id {
            params.push(libsql::Value::Integer(agent_id));
            body.push_str(&format!(" AND cp.agent_fk = ?{}", params.len()));
        }
        Self {
            body,
            params,
            contains: None,
        }
    }

    /// Narrow by `filter`. The caller passes the filter already made
    /// effective for the kind.
    fn filtered(mut self, filter: &HistogramFilter) -> Self {
        match filter {
            HistogramFilter::None => {}
            HistogramFilter::NoLicenseFound => {
                let first = self.params.len() + 1;
                for name in NO_LICENSE_SHORTNAMES {
                    self.params.push(libsql::Value::Text(name.to_string()));
                }
                self.body.push_str(&format!(
                    " AND EXISTS (SELECT 1 FROM license_file AS lf
                                  JOIN license_ref AS lr ON lr.rf_pk = lf.rf_fk
                                  WHERE lf.pfile_fk = cp.pfile_fk
                                    AND lr.rf_shortname IN (?{first}, ?{}))",
                    first + 1
                ));
            }
            HistogramFilter::TextContains(pattern) => {
                self.contains = Some(pattern.clone());
            }
        }
        self
    }
}

/// `ORDER BY` terms. Ties fall back to content then hash so pages are stable.
fn order_by(sort: HistogramSort) -> String {
    let dir = sort.direction.as_sql();
    match sort.column {
        SortColumn::Count => format!("copyright_count {dir}, cp.content ASC, cp.hash ASC"),
        SortColumn::Content => format!("cp.content {dir}, cp.hash ASC"),
    }
}

/// Every group in scope, in `order`, with the text pattern applied.
async fn text_matched_groups(
    conn: &libsql::Connection,
    rows: ScopedRows,
    pattern: &str,
    order: &str,
) -> Result<Vec<HistogramBucket>, DatabaseError> {
    let sql = format!(
        "SELECT cp.content, cp.hash, count(*) AS copyright_count
         {body}
         GROUP BY cp.content, cp.hash
         ORDER BY {order}",
        body = rows.body
    );
    let mut result = conn.query(&sql, libsql::params_from_iter(rows.params)).await?;
    let mut buckets = Vec::new();
    while let Some(row) = result.next().await? {
        let content = row.get::<String>(0)?;
        if text_contains(&content, pattern) {
            buckets.push(HistogramBucket {
                content,
                hash: row.get::<String>(1)?,
                count: get_count(&row, 2)?,
            });
        }
    }
    Ok(buckets)
}

async fn count_groups(conn: &libsql::Connection, rows: ScopedRows) -> Result<u64, DatabaseError> {
    if let Some(pattern) = rows.contains.clone() {
        let matched =
            text_matched_groups(conn, rows, &pattern, "cp.content ASC, cp.hash ASC").await?;
        return Ok(matched.len() as u64);
    }

    let sql = format!(
        "SELECT count(*) FROM (SELECT cp.content, cp.hash {} GROUP BY cp.content, cp.hash)",
        rows.body
    );
    let mut result = conn
        .query(&sql, libsql::params_from_iter(rows.params))
        .await?;
    let row = result.next().await?.ok_or(DatabaseError::NoResult)?;
    get_count(&row, 0)
}

async fn page_groups(
    conn: &libsql::Connection,
    rows: ScopedRows,
    sort: HistogramSort,
    page: Page,
) -> Result<Vec<HistogramBucket>, DatabaseError> {
    if let Some(pattern) = rows.contains.clone() {
        let matched = text_matched_groups(conn, rows, &pattern, &order_by(sort)).await?;
        let skip = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(page.limit()).unwrap_or(usize::MAX);
        return Ok(matched.into_iter().skip(skip).take(take).collect());
    }

    let ScopedRows {
        body, mut params, ..
    } = rows;
    params.push(sql_int(page.limit()));
    let limit_idx = params.len();
    params.push(sql_int(page.offset()));
    let offset_idx = params.len();

    let sql = format!(
        "SELECT cp.content, cp.hash, count(*) AS copyright_count
         {body}
         GROUP BY cp.content, cp.hash
         ORDER BY {order}
         LIMIT ?{limit_idx} OFFSET ?{offset_idx}",
        order = order_by(sort)
    );

    let mut result = conn.query(&sql, libsql::params_from_iter(params)).await?;
    let mut buckets = Vec::new();
    while let Some(row) = result.next().await? {
        buckets.push(HistogramBucket {
            content: row.get::<String>(0)?,
            hash: row.get::<String>(1)?,
            count: get_count(&row, 2)?,
        });
    }
    Ok(buckets)
}

impl TallyService {
    /// Number of distinct `(content, hash)` groups in scope after `filter`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn count_grouped(
        &self,
        range: &TreeRange,
        kind: AnnotationKind,
        agent_id: Option<i64>,
        filter: &HistogramFilter,
    ) -> Result<u64, DatabaseError> {
        let rows = ScopedRows::new(range, kind, agent_id).filtered(&filter.effective_for(kind));
        count_groups(self.db().conn(), rows).await
    }

    /// One page of groups in scope after `filter`, ordered by `sort`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn query_grouped(
        &self,
        range: &TreeRange,
        kind: AnnotationKind,
        agent_id: Option<i64>,
        filter: &HistogramFilter,
        sort: HistogramSort,
        page: Page,
    ) -> Result<Vec<HistogramBucket>, DatabaseError> {
        let rows = ScopedRows::new(range, kind, agent_id).filtered(&filter.effective_for(kind));
        page_groups(self.db().conn(), rows, sort, page).await
    }

    /// Page of histogram buckets with both the filtered and unfiltered group
    /// totals, read in one transaction so all three agree.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if any of the three queries fails; no partial
    /// page is returned.
    pub async fn aggregate_histogram(
        &self,
        range: &TreeRange,
        kind: AnnotationKind,
        agent_id: Option<i64>,
        filter: &HistogramFilter,
        sort: HistogramSort,
        page: Page,
    ) -> Result<HistogramPage, DatabaseError> {
        let filter = filter.effective_for(kind);
        tracing::debug!(
            upload_id = range.upload_id,
            left = range.bounds.left,
            right = range.bounds.right,
            %kind,
            ?agent_id,
            ?filter,
            ?sort,
            offset = page.offset(),
            limit = page.limit(),
            "aggregating histogram"
        );

        let tx = self.db().conn().transaction().await?;
        let result = async {
            let total_unfiltered =
                count_groups(&tx, ScopedRows::new(range, kind, agent_id)).await?;
            let total_matching = if filter == HistogramFilter::None {
                total_unfiltered
            } else {
                count_groups(&tx, ScopedRows::new(range, kind, agent_id).filtered(&filter))
                    .await?
            };
            let buckets = page_groups(
                &tx,
                ScopedRows::new(range, kind, agent_id).filtered(&filter),
                sort,
                page,
            )
            .await?;
            Ok::<_, DatabaseError>(HistogramPage {
                buckets,
                total_matching,
                total_unfiltered,
            })
        }
        .await;

        commit_or_rollback(tx, result, "histogram read").await
    }
}
