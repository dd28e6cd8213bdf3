use serde::Serialize;

/// Visual weight of a notification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    #[default]
    Default,
    /// Something failed; prior card state was kept
    Destructive,
}

/// Non-blocking toast raised after an action completes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            title: "Success!".to_owned(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            title: "Error".to_owned(),
            description: description.into(),
            variant: NotificationVariant::Destructive,
        }
    }

    /// Status line followed by one `- issue` line per problem
    pub fn from_issues(message: &str, issues: &[String]) -> Self {
        if issues.is_empty() {
            return Self::error(message);
        }

        Self::error(format!("{message}\n- {}", issues.join("\n- ")))
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issues_are_listed_under_status_line() {
        let notification = Notification::from_issues(
            "Please check the fields below.",
            &["Name must be at least 2 characters.".to_owned(), "Please list some interests.".to_owned()],
        );

        assert_eq!(notification.title, "Error");
        assert_eq!(
            notification.description,
            "Please check the fields below.\n- Name must be at least 2 characters.\n- Please list some interests."
        );
        assert!(notification.is_destructive());
    }

    #[test]
    fn serializes_variant_lowercase() {
        let json = serde_json::to_value(Notification::success("done")).unwrap();
        assert_eq!(json["variant"], "default");
        assert_eq!(json["title"], "Success!");
    }
}
