pub const APP_NAME: &str = "Performer Console";
pub const APP_AUTHOR: &str = "Performer Logistics";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

/// Release tag when the build ran inside a tagged checkout, otherwise the crate version.
pub fn version_label() -> String {
    match GIT_TAG {
        Some(tag) => tag.to_string(),
        None => format!("v{APP_VERSION}"),
    }
}

/// Sent with every backend request so server logs can tell console builds apart.
pub fn user_agent() -> String {
    format!(
        "{}/{}",
        APP_NAME.to_ascii_lowercase().replace(' ', "-"),
        version_label().trim_start_matches('v')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_prefers_the_build_tag() {
        let expected = GIT_TAG
            .map(str::to_string)
            .unwrap_or_else(|| format!("v{APP_VERSION}"));
        assert_eq!(version_label(), expected);
    }

    #[test]
    fn user_agent_is_header_safe() {
        let agent = user_agent();
        assert!(agent.starts_with("performer-console/"));
        assert!(!agent.contains(' '));
        assert!(!agent.ends_with('/'));
    }
}
