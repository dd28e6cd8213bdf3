use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Expand `{{ env.VAR }}` and `{{ env.VAR | default("fallback") }}` placeholders
///
/// Runs on the raw TOML text before deserialization so secrets such as the
/// Gemini API key never need to be committed. Comment lines are left as-is.
pub fn expand_env(input: &str) -> Result<String, String> {
    fn placeholder() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r#"\{\{\s*([A-Za-z0-9_.]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#)
                .expect("must be valid regex")
        })
    }

    let mut lines = Vec::new();

    for line in input.split('\n') {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_owned());
            continue;
        }

        let mut failure = None;
        let expanded = placeholder().replace_all(line, |caps: &Captures<'_>| {
            resolve(&caps[1], caps.get(2).map(|m| m.as_str())).unwrap_or_else(|e| {
                failure.get_or_insert(e);
                String::new()
            })
        });

        if let Some(e) = failure {
            return Err(e);
        }
        lines.push(expanded.into_owned());
    }

    Ok(lines.join("\n"))
}

fn resolve(key: &str, default: Option<&str>) -> Result<String, String> {
    let Some(var_name) = key.strip_prefix("env.").filter(|name| !name.contains('.')) else {
        return Err(format!("only variables scoped with 'env.' are supported: `{key}`"));
    };

    match (std::env::var(var_name), default) {
        (Ok(value), _) => Ok(value),
        (Err(_), Some(default)) => Ok(default.to_owned()),
        (Err(_), None) => Err(format!("environment variable not found: `{var_name}`")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_without_placeholders_is_unchanged() {
        let input = "[message]\nmodel = \"gemini-2.0-flash\"\n";
        assert_eq!(expand_env(input).unwrap(), input);
    }

    #[test]
    fn substitutes_api_key() {
        temp_env::with_var("BLISS_TEST_KEY", Some("secret"), || {
            let result = expand_env("api_key = \"{{ env.BLISS_TEST_KEY }}\"").unwrap();
            assert_eq!(result, "api_key = \"secret\"");
        });
    }

    #[test]
    fn substitutes_several_per_line() {
        let vars = [("BLISS_HOST", Some("127.0.0.1")), ("BLISS_PORT", Some("8080"))];
        temp_env::with_vars(vars, || {
            let result = expand_env("listen_address = \"{{env.BLISS_HOST}}:{{ env.BLISS_PORT }}\"").unwrap();
            assert_eq!(result, "listen_address = \"127.0.0.1:8080\"");
        });
    }

    #[test]
    fn missing_var_is_an_error() {
        temp_env::with_var_unset("BLISS_MISSING", || {
            let err = expand_env("api_key = \"{{ env.BLISS_MISSING }}\"").unwrap_err();
            assert!(err.contains("BLISS_MISSING"));
        });
    }

    #[test]
    fn default_applies_only_when_unset() {
        temp_env::with_var_unset("BLISS_VOICE", || {
            let result = expand_env("voice = \"{{ env.BLISS_VOICE | default(\"Algenib\") }}\"").unwrap();
            assert_eq!(result, "voice = \"Algenib\"");
        });
        temp_env::with_var("BLISS_VOICE", Some("Puck"), || {
            let result = expand_env("voice = \"{{ env.BLISS_VOICE | default(\"Algenib\") }}\"").unwrap();
            assert_eq!(result, "voice = \"Puck\"");
        });
    }

    #[test]
    fn rejects_non_env_scope() {
        let err = expand_env("key = \"{{ secrets.KEY }}\"").unwrap_err();
        assert!(err.contains("only variables scoped with 'env.'"));
    }

    #[test]
    fn comment_lines_are_not_expanded() {
        temp_env::with_var_unset("BLISS_MISSING", || {
            let input = "  # api_key = \"{{ env.BLISS_MISSING }}\"\nvoice = \"Algenib\"";
            assert_eq!(expand_env(input).unwrap(), input);
        });
    }
}
