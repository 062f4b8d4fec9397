//! Shared test utilities for tally-db unit tests.

pub(crate) mod helpers {
    use tally_core::digest::content_hash;
    use tally_core::policy::AuditPolicy;

    use crate::TallyDb;
    use crate::service::TallyService;

    /// Ids of the seeded rows.
    ///
    /// ```text
    /// upload 1 "acme-1.0.tar.gz"
    ///   root      1  [1, 100]
    ///     src     2  [10, 50]
    ///       a.c   3  [11, 12]  pfile 101
    ///       b.c   4  [13, 14]  pfile 102
    ///       lib   5  [20, 40]
    ///         c.c 6  [21, 22]  pfile 103
    ///         d.c 7  [23, 24]  pfile 104
    ///     docs    8  [60, 90]
    ///       e.md  9  [61, 62]  pfile 105
    /// upload 2 "other.zip"
    ///   root     20  [1, 10]
    ///     f.c    21  [2, 3]    pfile 201
    /// ```
    pub struct Fixture {
        pub upload: i64,
        pub other_upload: i64,
        pub root: i64,
        pub src_dir: i64,
        pub file_a: i64,
        pub file_b: i64,
        pub lib_dir: i64,
        pub docs_dir: i64,
        pub agent: i64,
        pub other_agent: i64,
        pub mit_license_id: i64,
        pub mit_finding: i64,
    }

    impl Fixture {
        pub fn all_nodes(&self) -> Vec<i64> {
            vec![1, 2, 3, 4, 5, 6, 7, 8, 9]
        }
    }

    const TREE: &str = "
        INSERT INTO upload (upload_pk, upload_filename) VALUES (1, 'acme-1.0.tar.gz'), (2, 'other.zip');
        INSERT INTO uploadtree (uploadtree_pk, upload_fk, parent, pfile_fk, lft, rgt, ufile_name) VALUES
            (1, 1, NULL, NULL, 1, 100, 'acme-1.0'),
            (2, 1, 1, NULL, 10, 50, 'src'),
            (3, 1, 2, 101, 11, 12, 'a.c'),
            (4, 1, 2, 102, 13, 14, 'b.c'),
            (5, 1, 2, NULL, 20, 40, 'lib'),
            (6, 1, 5, 103, 21, 22, 'c.c'),
            (7, 1, 5, 104, 23, 24, 'd.c'),
            (8, 1, 1, NULL, 60, 90, 'docs'),
            (9, 1, 8, 105, 61, 62, 'e.md'),
            (20, 2, NULL, NULL, 1, 10, 'other'),
            (21, 2, 20, 201, 2, 3, 'f.c');
        INSERT INTO license_ref (rf_pk, rf_shortname) VALUES
            (1, 'MIT'), (2, 'No_license_found'), (3, 'Void');
        INSERT INTO license_file (fl_pk, rf_fk, agent_fk, pfile_fk) VALUES
            (1, 1, 1, 101),
            (2, 2, 1, 102),
            (3, 3, 1, 104),
            (4, 1, 2, 101);
        INSERT INTO highlight (fl_fk, type, start, len, rf_start, rf_len) VALUES
            (1, 'M ', 0, 10, 0, 10),
            (1, 'M+', 20, 5, 12, 0),
            (1, 'L', 50, 8, 0, 0),
            (4, 'MR', 70, 4, 30, 6);
        INSERT INTO highlight_keyword (pfile_fk, start, len) VALUES
            (101, 80, 7),
            (101, 5, 3),
            (105, 1, 1);
    ";

    /// `(table, agent, pfile, type, content)` rows seeded on top of [`TREE`].
    const ANNOTATIONS: &[(&str, i64, i64, &str, &str)] = &[
        ("copyright", 1, 101, "statement", "MIT License"),
        ("copyright", 1, 103, "statement", "MIT License"),
        ("copyright", 1, 104, "statement", "MIT License"),
        ("copyright", 1, 102, "statement", "Copyright 2020 Acme"),
        ("copyright", 1, 105, "statement", "Copyright 2019 Outside"),
        ("copyright", 1, 101, "email", "dev@acme.test"),
        ("copyright", 2, 101, "statement", "Copyright (c) Other Agent"),
        ("copyright", 1, 201, "statement", "MIT License"),
        ("ip", 1, 101, "ip", "Patent 123"),
        ("ecc", 1, 103, "ecc", "ECCN 5D002"),
    ];

    /// Create an in-memory service with the default audit policy.
    pub async fn test_service() -> TallyService {
        test_service_with_policy(AuditPolicy::default()).await
    }

    pub async fn test_service_with_policy(policy: AuditPolicy) -> TallyService {
        let db = TallyDb::open_local(":memory:").await.unwrap();
        TallyService::from_db(db, policy)
    }

    /// Insert one annotation row, computing its hash.
    pub async fn insert_annotation(
        svc: &TallyService,
        table: &str,
        agent: i64,
        pfile: i64,
        kind: &str,
        content: &str,
    ) {
        svc.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO {table} (agent_fk, pfile_fk, content, hash, type) VALUES (?1, ?2, ?3, ?4, ?5)"
                ),
                libsql::params![agent, pfile, content, content_hash(content), kind],
            )
            .await
            .unwrap();
    }

    pub async fn seed(svc: &TallyService) -> Fixture {
        svc.db().conn().execute_batch(TREE).await.unwrap();
        for (table, agent, pfile, kind, content) in ANNOTATIONS {
            insert_annotation(svc, table, *agent, *pfile, kind, content).await;
        }
        Fixture {
            upload: 1,
            other_upload: 2,
            root: 1,
            src_dir: 2,
            file_a: 3,
            file_b: 4,
            lib_dir: 5,
            docs_dir: 8,
            agent: 1,
            other_agent: 2,
            mit_license_id: 1,
            mit_finding: 1,
        }
    }

    pub async fn seeded_service() -> (TallyService, Fixture) {
        let svc = test_service().await;
        let fx = seed(&svc).await;
        (svc, fx)
    }

    pub async fn count_rows(svc: &TallyService, sql: &str) -> i64 {
        let mut rows = svc.db().conn().query(sql, ()).await.unwrap();
        rows.next().await.unwrap().unwrap().get::<i64>(0).unwrap()
    }
}
