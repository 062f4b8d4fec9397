use anyhow::bail;
use schemars::schema_for;
use tally_core::responses::{
    AuditListResponse, DeleteResponse, HighlightsResponse, HistogramResponse, NoticesResponse,
    ResolveResponse, UpdateResponse,
};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;

/// Names accepted by `tally schema`.
pub const TYPE_NAMES: [&str; 7] = [
    "audit", "delete", "highlights", "histogram", "notices", "resolve", "update",
];

/// Handle `tally schema`.
pub fn handle(args: &SchemaArgs, _flags: &GlobalFlags) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&schema_json(&args.type_name)?)?);
    Ok(())
}

fn schema_json(type_name: &str) -> anyhow::Result<serde_json::Value> {
    let schema = match type_name {
        "audit" => schema_for!(AuditListResponse),
        "delete" => schema_for!(DeleteResponse),
        "highlights" => schema_for!(HighlightsResponse),
        "histogram" => schema_for!(HistogramResponse),
        "notices" => schema_for!(NoticesResponse),
        "resolve" => schema_for!(ResolveResponse),
        "update" => schema_for!(UpdateResponse),
        other => bail!(
            "unknown schema type '{other}' (expected one of: {})",
            TYPE_NAMES.join(", ")
        ),
    };
    Ok(serde_json::to_value(schema)?)
}
