use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Show the nested-set bounds of a tree node.
    Resolve(ScopeArgs),
    /// Grouped annotation counts under a tree node.
    Histogram(HistogramArgs),
    /// Rewrite every annotation in a histogram row.
    Update(UpdateArgs),
    /// Delete every annotation in a histogram row.
    Delete(DeleteArgs),
    /// Merged diff and keyword highlights for one file.
    Highlights(HighlightsArgs),
    /// List audit records of superseded annotation text.
    Audit(AuditArgs),
    /// Copyright notices of an upload.
    Notices(NoticesArgs),
    /// Dump JSON schema for a response type.
    Schema(SchemaArgs),
}

/// An upload and one of its tree nodes.
#[derive(Clone, Debug, Args)]
pub struct ScopeArgs {
    #[arg(long)]
    pub upload: i64,
    /// Tree node (`uploadtree` row) id. Defaults to the upload's root.
    #[arg(long)]
    pub item: Option<i64>,
}

/// Histogram filter selection on the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum FilterMode {
    None,
    /// Only files without a real license finding (statements only).
    Nolic,
}

/// Arguments for `tally histogram`.
#[derive(Clone, Debug, Args)]
pub struct HistogramArgs {
    #[command(flatten)]
    pub scope: ScopeArgs,
    /// Annotation kind: statement, email, url, author, ip, ecc, export_control
    #[arg(long, default_value = "statement")]
    pub kind: String,
    /// Only rows written by this agent.
    #[arg(long)]
    pub agent: Option<i64>,
    #[arg(long, value_enum, default_value = "none", conflicts_with = "contains")]
    pub filter: FilterMode,
    /// Only rows whose text contains this substring.
    #[arg(long)]
    pub contains: Option<String>,
    /// Sort column: count, content
    #[arg(long, default_value = "count")]
    pub sort: String,
    /// Sort direction: asc, desc
    #[arg(long, default_value = "desc")]
    pub order: String,
    #[arg(long, default_value_t = 0)]
    pub offset: u64,
}

/// Arguments for `tally update`.
#[derive(Clone, Debug, Args)]
pub struct UpdateArgs {
    /// Row id as printed by `tally histogram` (`upload,item,hash,kind`).
    pub row: String,
    /// Replacement text.
    #[arg(long)]
    pub content: String,
}

/// Arguments for `tally delete`.
#[derive(Clone, Debug, Args)]
pub struct DeleteArgs {
    /// Row id as printed by `tally histogram` (`upload,item,hash,kind`).
    pub row: String,
}

/// Arguments for `tally highlights`.
#[derive(Clone, Debug, Args)]
pub struct HighlightsArgs {
    #[command(flatten)]
    pub scope: ScopeArgs,
    /// Only diff spans of this license.
    #[arg(long)]
    pub license: Option<i64>,
    /// Only diff spans found by this agent.
    #[arg(long)]
    pub agent: Option<i64>,
    /// Only diff spans of this license finding.
    #[arg(long)]
    pub finding: Option<i64>,
}

/// Arguments for `tally audit`.
#[derive(Clone, Debug, Args)]
pub struct AuditArgs {
    #[arg(long)]
    pub upload: i64,
    /// Annotation row id.
    #[arg(long)]
    pub annotation: Option<i64>,
    /// Family: copyright, ip, ecc, export_control
    #[arg(long)]
    pub family: Option<String>,
    /// Only records written by this user.
    #[arg(long)]
    pub by: Option<i64>,
}

/// Arguments for `tally notices`.
#[derive(Clone, Debug, Args)]
pub struct NoticesArgs {
    #[arg(long)]
    pub upload: i64,
    /// Print the README text layout instead of structured output.
    #[arg(long)]
    pub readme: bool,
}

/// Arguments for `tally schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    pub type_name: String,
}
