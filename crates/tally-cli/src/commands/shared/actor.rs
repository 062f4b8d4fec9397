use crate::cli::GlobalFlags;

/// User id presented to permission checks on reads when `--actor` is absent.
pub const ANONYMOUS: i64 = 0;

/// The acting user for a read.
#[must_use]
pub fn reader(flags: &GlobalFlags) -> i64 {
    flags.actor.unwrap_or(ANONYMOUS)
}

/// The acting user for a write, which is recorded in audit records.
pub fn require_actor(flags: &GlobalFlags) -> anyhow::Result<i64> {
    flags
        .actor
        .ok_or_else(|| anyhow::anyhow!("this command modifies annotations; pass --actor <user id>"))
}
