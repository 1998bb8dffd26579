/// Default values for configuration fields

pub fn out_path() -> String {
    "dist/publish".to_string()
}

pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# updrop configuration

[publish]
# Directory builds are published into
out_path = "dist/publish"

# Base URL the output root is served under; required for public file URLs
# remote_url = "https://example.com/updates"
"#;
