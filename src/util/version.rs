pub const APP_NAME: &str = "Review Lift";
pub const APP_TITLE: &str = "Google Reviews & Revenue Impact Calculator";
pub const APP_TAGLINE: &str =
    "See how improving your online reviews can boost your business revenue!";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

pub fn version_label() -> String {
    label_for(GIT_TAG, APP_VERSION)
}

fn label_for(tag: Option<&str>, version: &str) -> String {
    match tag {
        Some(tag) => tag.to_string(),
        None => format!("v{version}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_git_tag() {
        assert_eq!(label_for(Some("v2.1.0"), "2.0.0"), "v2.1.0");
        assert_eq!(label_for(None, "2.0.0"), "v2.0.0");
    }
}
