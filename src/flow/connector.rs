use serde::Serialize;

/// A directed transition between two elements of a flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowConnector {
    pub from: String,
    pub to: String,
    pub label: Option<String>,
    pub is_fault: bool,
    pub is_scheduled: bool,
}

impl FlowConnector {
    /// An unlabeled, regular transition.
    pub fn plain(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            label: None,
            is_fault: false,
            is_scheduled: false,
        }
    }

    pub fn labeled(from: impl Into<String>, to: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::plain(from, to)
        }
    }

    pub fn fault(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            is_fault: true,
            ..Self::labeled(from, to, "Fault")
        }
    }

    pub fn scheduled(
        from: impl Into<String>,
        to: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            is_scheduled: true,
            ..Self::labeled(from, to, label)
        }
    }
}
