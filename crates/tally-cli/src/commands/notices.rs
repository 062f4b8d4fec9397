use tally_core::notices::render_readme;
use tally_core::responses::NoticesResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::NoticesArgs;
use crate::commands::shared::actor::reader;
use crate::context::AppContext;
use crate::output::output;

/// Handle `tally notices`.
pub async fn handle(args: &NoticesArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.service.require_read(reader(flags), args.upload)?;

    let package_name = ctx.service.upload_filename(args.upload).await?;
    let notices = ctx.service.copyright_notices(args.upload).await?;

    if args.readme {
        print!("{}", render_readme(&package_name, &notices));
        return Ok(());
    }

    output(
        &NoticesResponse {
            upload_id: args.upload,
            package_name,
            notices,
        },
        flags.format,
    )
}
