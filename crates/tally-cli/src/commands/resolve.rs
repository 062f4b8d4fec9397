use tally_core::responses::ResolveResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ScopeArgs;
use crate::commands::shared::actor::reader;
use crate::commands::shared::scope::resolve_scope;
use crate::context::AppContext;
use crate::output::output;

/// Handle `tally resolve`.
pub async fn handle(args: &ScopeArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.service.require_read(reader(flags), args.upload)?;
    let scope = resolve_scope(args, ctx).await?;
    let bounds = ctx
        .service
        .resolve_tree_range(scope.upload_id, scope.tree_node_id)
        .await?;
    let response = ResolveResponse {
        upload_id: scope.upload_id,
        tree_node_id: scope.tree_node_id,
        bounds,
    };
    output(&response, flags.format)
}
