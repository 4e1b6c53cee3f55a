use serde::{Deserialize, Serialize};

/// Snapshot of a `job_market::JobObject` as it existed at query time.
///
/// `price` and `deadline` are fixed at creation; only `status` transitions
/// over the object's lifetime, and transitions are driven by the contract,
/// never by this client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Object id of the on-chain job. Unique among live jobs.
    pub id: String,
    pub employer: String,
    pub freelancer: String,
    pub description_url: String,
    /// Escrowed amount in MIST.
    pub price: u64,
    pub status: JobStatus,
    /// Milliseconds since epoch.
    pub deadline: u64,
    /// Not sourced from chain state; `None` until enriched from an external
    /// metadata source.
    pub company: Option<String>,
    pub title: Option<String>,
}

/// Lifecycle codes of a job as defined by the `job_market` module.
///
/// The mapping is total: any code outside the contract's table lands in
/// `Unknown` rather than failing, so a contract upgrade that adds a status
/// cannot break the read path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    InProgress,
    Submitted,
    /// Payment released. Terminal.
    Completed,
    /// Terminal.
    Cancelled,
    Unknown(u8),
}

/// Display attributes for a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub label: &'static str,
    pub text_color: &'static str,
    pub bg_color: &'static str,
    pub border_color: &'static str,
}

impl JobStatus {
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => JobStatus::InProgress,
            2 => JobStatus::Submitted,
            3 => JobStatus::Completed,
            4 => JobStatus::Cancelled,
            other => JobStatus::Unknown(other),
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            JobStatus::InProgress => 1,
            JobStatus::Submitted => 2,
            JobStatus::Completed => 3,
            JobStatus::Cancelled => 4,
            JobStatus::Unknown(code) => *code,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Cancelled)
    }

    pub fn style(&self) -> StatusStyle {
        match self {
            JobStatus::InProgress => StatusStyle {
                label: "IN PROGRESS",
                text_color: "text-blue-500",
                bg_color: "bg-blue-500/10",
                border_color: "border-blue-500/20",
            },
            JobStatus::Submitted => StatusStyle {
                label: "SUBMITTED",
                text_color: "text-yellow-500",
                bg_color: "bg-yellow-500/10",
                border_color: "border-yellow-500/20",
            },
            JobStatus::Completed => StatusStyle {
                label: "COMPLETED",
                text_color: "text-green-500",
                bg_color: "bg-green-500/10",
                border_color: "border-green-500/20",
            },
            JobStatus::Cancelled => StatusStyle {
                label: "CANCELLED",
                text_color: "text-red-500",
                bg_color: "bg-red-500/10",
                border_color: "border-red-500/20",
            },
            JobStatus::Unknown(_) => StatusStyle {
                label: "UNKNOWN",
                text_color: "text-gray-500",
                bg_color: "bg-gray-500/10",
                border_color: "border-gray-500/20",
            },
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.style().label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_table_labels() {
        assert_eq!(JobStatus::from_code(1).style().label, "IN PROGRESS");
        assert_eq!(JobStatus::from_code(2).style().label, "SUBMITTED");
        assert_eq!(JobStatus::from_code(3).style().label, "COMPLETED");
        assert_eq!(JobStatus::from_code(4).style().label, "CANCELLED");
    }

    #[test]
    fn all_other_codes_are_unknown() {
        for code in [0u8, 5, 42, u8::MAX] {
            let status = JobStatus::from_code(code);
            assert_eq!(status, JobStatus::Unknown(code));
            assert_eq!(status.style().label, "UNKNOWN");
        }
    }

    #[test]
    fn code_round_trips() {
        for code in 0..=u8::MAX {
            assert_eq!(JobStatus::from_code(code).code(), code);
        }
    }

    #[test]
    fn only_completed_and_cancelled_are_terminal() {
        assert!(JobStatus::Completed.is_terminal());
        assert!(JobStatus::Cancelled.is_terminal());
        assert!(!JobStatus::InProgress.is_terminal());
        assert!(!JobStatus::Submitted.is_terminal());
        assert!(!JobStatus::Unknown(9).is_terminal());
    }
}
