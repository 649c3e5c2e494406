pub const APP_NAME: &str = "Metric Cards";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

/// Version shown in the footer: the release tag when built from one,
/// otherwise `v` + the crate version.
pub fn version_label() -> String {
    label_for(GIT_TAG, APP_VERSION)
}

fn label_for(tag: Option<&str>, version: &str) -> String {
    match tag {
        Some(tag) if !tag.trim().is_empty() => tag.trim().to_string(),
        _ => format!("v{version}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_git_tag() {
        assert_eq!(label_for(Some("v1.2.0"), "1.0.0"), "v1.2.0");
    }

    #[test]
    fn falls_back_to_crate_version() {
        assert_eq!(label_for(None, "1.0.0"), "v1.0.0");
        assert_eq!(label_for(Some("  "), "1.0.0"), "v1.0.0");
    }
}
