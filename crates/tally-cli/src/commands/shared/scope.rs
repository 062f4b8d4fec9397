use tally_core::entities::TreeScope;

use crate::cli::root_commands::ScopeArgs;
use crate::context::AppContext;

/// Resolve `--upload`/`--item` into a scope, using the upload's root node
/// when `--item` is absent.
pub async fn resolve_scope(args: &ScopeArgs, ctx: &AppContext) -> anyhow::Result<TreeScope> {
    let tree_node_id = match args.item {
        Some(item) => item,
        None => ctx.service.root_node(args.upload).await?.id,
    };
    Ok(TreeScope {
        upload_id: args.upload,
        tree_node_id,
    })
}
