use serde::Serialize;

/// A url handed off to the browser or the operating system. Once handed off,
/// nothing about its outcome is observable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Handoff {
    pub url: String,
    pub target: HandoffTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HandoffTarget {
    /// Replace the current browsing context (`mailto:` and `tel:` links).
    SameWindow,
    /// Open a new browsing context.
    NewWindow,
}

impl Handoff {
    pub fn same_window(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            target: HandoffTarget::SameWindow,
        }
    }

    pub fn new_window(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            target: HandoffTarget::NewWindow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize() {
        assert_eq!(
            serde_json::to_value(Handoff::new_window("https://wa.me/1")).unwrap(),
            serde_json::json!({"url": "https://wa.me/1", "target": "new_window"})
        );
    }
}
