use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

const RUN_STAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]_[hour]-[minute]-[second]");

/// Per-run values shared by every file of one invocation.
///
/// Captured once when the run starts and passed explicitly to the pipeline,
/// so all outputs of a run carry the same generation stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunContext {
    generated_at: OffsetDateTime,
}

impl RunContext {
    /// Captures the current local time, falling back to UTC when the local
    /// offset cannot be determined.
    pub fn capture() -> Self {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        Self::at(now)
    }

    pub const fn at(generated_at: OffsetDateTime) -> Self {
        Self { generated_at }
    }

    pub const fn generated_at(&self) -> OffsetDateTime {
        self.generated_at
    }

    /// `YYYY-MM-DD_HH-MM-SS`, as embedded in output file names.
    pub fn run_stamp(&self) -> String {
        self.generated_at
            .format(RUN_STAMP_FORMAT)
            .expect("run stamp components are always formattable")
    }
}
