use tally_core::bucket_ref::BucketRef;
use tally_core::digest::content_hash;
use tally_core::responses::UpdateResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::UpdateArgs;
use crate::commands::shared::actor::require_actor;
use crate::context::AppContext;
use crate::output::output;

/// Handle `tally update`.
pub async fn handle(args: &UpdateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let actor = require_actor(flags)?;
    let target: BucketRef = args.row.parse()?;

    let rows_updated = ctx
        .service
        .checked_update(actor, &target, &args.content)
        .await?;

    let response = UpdateResponse {
        target,
        new_hash: content_hash(&args.content),
        rows_updated,
    };
    output(&response, flags.format)
}
