use serde::{Deserialize, Serialize};

/// Display category of a payment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTone {
    Success,
    Warning,
    Error,
    Default,
}

impl StatusTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusTone::Success => "success",
            StatusTone::Warning => "warning",
            StatusTone::Error => "error",
            StatusTone::Default => "default",
        }
    }
}

/// Maps a payment-status label to its tone, ignoring case.
pub fn classify_status(label: &str) -> StatusTone {
    match label.to_lowercase().as_str() {
        "paid" => StatusTone::Success,
        "partial" => StatusTone::Warning,
        "pending" => StatusTone::Error,
        _ => StatusTone::Default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifies_known_labels_case_insensitively() {
        assert_eq!(classify_status("Paid"), StatusTone::Success);
        assert_eq!(classify_status("PARTIAL"), StatusTone::Warning);
        assert_eq!(classify_status("pending"), StatusTone::Error);
    }

    #[test]
    fn test_unknown_labels_fall_back_to_default() {
        assert_eq!(classify_status("unknown"), StatusTone::Default);
        assert_eq!(classify_status(""), StatusTone::Default);
        assert_eq!(classify_status(" paid "), StatusTone::Default);
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&StatusTone::Warning).unwrap(),
            "\"warning\""
        );
        assert_eq!(StatusTone::Error.as_str(), "error");
    }
}
