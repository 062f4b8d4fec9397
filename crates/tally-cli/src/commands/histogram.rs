use tally_core::enums::{AnnotationKind, SortColumn, SortDirection};
use tally_core::query::{HistogramFilter, HistogramSort, Page};
use tally_core::responses::HistogramResponse;
use tally_config::HistogramConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{FilterMode, HistogramArgs};
use crate::commands::shared::actor::reader;
use crate::commands::shared::parse::parse_enum;
use crate::commands::shared::scope::resolve_scope;
use crate::context::AppContext;
use crate::output::output_with_rows;

/// Handle `tally histogram`.
pub async fn handle(
    args: &HistogramArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let kind = parse_enum::<AnnotationKind>(&args.kind, "kind")?;
    let sort = HistogramSort {
        column: parse_enum::<SortColumn>(&args.sort, "sort")?,
        direction: parse_enum::<SortDirection>(&args.order, "order")?,
    };
    let filter = build_filter(args.filter, args.contains.as_deref());
    let page = page(&ctx.config.histogram, args.offset, flags.limit)?;
    let scope = resolve_scope(&args.scope, ctx).await?;

    let histogram = ctx
        .service
        .checked_histogram(reader(flags), scope, kind, args.agent, &filter, sort, page)
        .await?;

    let response = HistogramResponse {
        upload_id: scope.upload_id,
        tree_node_id: scope.tree_node_id,
        kind,
        agent_id: args.agent,
        filter,
        sort,
        offset: page.offset(),
        limit: page.limit(),
        rows: HistogramResponse::rows_for(
            scope.upload_id,
            scope.tree_node_id,
            kind,
            histogram.buckets,
        ),
        total_matching: histogram.total_matching,
        total_unfiltered: histogram.total_unfiltered,
    };
    output_with_rows(&response, &response.rows, flags.format)
}

fn build_filter(mode: FilterMode, contains: Option<&str>) -> HistogramFilter {
    match (mode, contains) {
        (_, Some(pattern)) => HistogramFilter::TextContains(pattern.to_string()),
        (FilterMode::Nolic, None) => HistogramFilter::NoLicenseFound,
        (FilterMode::None, None) => HistogramFilter::None,
    }
}

/// Page window from `--offset` and `--limit`, defaulted and clamped by config.
fn page(config: &HistogramConfig, offset: u64, limit: Option<u32>) -> anyhow::Result<Page> {
    let limit = config.effective_limit(limit.map(u64::from));
    Ok(Page::new(offset, limit)?)
}
