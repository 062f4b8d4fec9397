use tally_core::responses::HighlightsResponse;
use tally_db::repos::highlight::HighlightSelection;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::HighlightsArgs;
use crate::commands::shared::actor::reader;
use crate::commands::shared::scope::resolve_scope;
use crate::context::AppContext;
use crate::output::output_with_rows;

/// Handle `tally highlights`.
pub async fn handle(
    args: &HighlightsArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let file = resolve_scope(&args.scope, ctx).await?;
    let selection = HighlightSelection {
        license_id: args.license,
        agent_id: args.agent,
        highlight_id: args.finding,
    };

    let highlights = ctx
        .service
        .checked_highlights(reader(flags), file, &selection)
        .await?;
    let response = HighlightsResponse {
        upload_id: file.upload_id,
        tree_node_id: file.tree_node_id,
        highlights,
    };
    output_with_rows(&response, &response.highlights, flags.format)
}
