use tally_core::bucket_ref::BucketRef;
use tally_core::responses::DeleteResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DeleteArgs;
use crate::commands::shared::actor::require_actor;
use crate::context::AppContext;
use crate::output::output;

/// Handle `tally delete`.
pub async fn handle(args: &DeleteArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let actor = require_actor(flags)?;
    let target: BucketRef = args.row.parse()?;

    let rows_deleted = ctx.service.checked_delete(actor, &target).await?;
    output(
        &DeleteResponse {
            target,
            rows_deleted,
        },
        flags.format,
    )
}
