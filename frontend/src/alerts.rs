#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Info,
    Success,
}

impl Severity {
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Success => "success",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertRecord {
    pub severity: Severity,
    pub icon: &'static str,
    pub title: &'static str,
    pub message: &'static str,
    pub time: &'static str,
}

pub const CANNED_ALERTS: &[AlertRecord] = &[
    AlertRecord {
        severity: Severity::Warning,
        icon: "fas fa-exclamation-triangle",
        title: "Flood Warning",
        message: "High risk of flooding in Southeast region within 48 hours",
        time: "2 hours ago",
    },
    AlertRecord {
        severity: Severity::Info,
        icon: "fas fa-info-circle",
        title: "Drought Alert",
        message: "Prolonged dry conditions expected in Southwest region",
        time: "5 hours ago",
    },
    AlertRecord {
        severity: Severity::Success,
        icon: "fas fa-check-circle",
        title: "System Update",
        message: "AI models successfully updated with latest satellite data",
        time: "1 hour ago",
    },
];

/// Round-robin cursor over a fixed alert list.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertRotation {
    alerts: &'static [AlertRecord],
    next: usize,
}

impl AlertRotation {
    pub fn new(alerts: &'static [AlertRecord]) -> Self {
        Self { alerts, next: 0 }
    }

    /// Index of the alert to show now; the cursor moves on. `None` only for an
    /// empty list.
    pub fn advance(&mut self) -> Option<usize> {
        if self.alerts.is_empty() {
            return None;
        }
        let index = self.next % self.alerts.len();
        self.next = (index + 1) % self.alerts.len();
        Some(index)
    }

    pub fn get(&self, index: usize) -> Option<&'static AlertRecord> {
        self.alerts.get(index)
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_closes_after_list_length() {
        let mut rotation = AlertRotation::new(CANNED_ALERTS);
        let shown: Vec<usize> = (0..=rotation.len()).filter_map(|_| rotation.advance()).collect();
        assert_eq!(shown, vec![0, 1, 2, 0]);
        assert_eq!(rotation.get(shown[3]), rotation.get(shown[0]));
    }

    #[test]
    fn empty_list_never_yields() {
        let mut rotation = AlertRotation::new(&[]);
        assert_eq!(rotation.advance(), None);
    }
}
