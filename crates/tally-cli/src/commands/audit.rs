use tally_core::enums::AnnotationFamily;
use tally_core::responses::AuditListResponse;
use tally_db::repos::audit::AuditFilter;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AuditArgs;
use crate::commands::shared::actor::reader;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output_with_rows;

/// Handle `tally audit`.
pub async fn handle(args: &AuditArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let filter = AuditFilter {
        upload_id: None,
        annotation_id: args.annotation,
        family: args
            .family
            .as_deref()
            .map(|value| parse_enum::<AnnotationFamily>(value, "family"))
            .transpose()?,
        actor_id: args.by,
        limit: Some(flags.limit.unwrap_or(100)),
    };

    let response = AuditListResponse {
        records: ctx
            .service
            .checked_list_audit(reader(flags), args.upload, filter)
            .await?,
    };
    output_with_rows(&response, &response.records, flags.format)
}
