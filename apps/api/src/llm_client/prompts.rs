// Shared prompt constants and prompt-building utilities.
// Task-specific prompt templates live next to the module that uses them.

/// System message sent with every completion request.
pub const RESUME_WRITER_SYSTEM: &str = "Expert resume writer";

/// Substitutes `{name}` placeholders in a single left-to-right pass.
///
/// Substituted values are copied verbatim and never rescanned, so user text
/// that happens to contain a placeholder is left as written.
pub fn render_template(template: &str, values: &[(&str, &str)]) -> String {
    let extra: usize = values.iter().map(|(_, v)| v.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;

    loop {
        let next = values
            .iter()
            .filter_map(|(placeholder, value)| {
                rest.find(placeholder).map(|pos| (pos, *placeholder, *value))
            })
            .min_by_key(|(pos, _, _)| *pos);

        match next {
            Some((pos, placeholder, value)) => {
                out.push_str(&rest[..pos]);
                out.push_str(value);
                rest = &rest[pos + placeholder.len()..];
            }
            None => {
                out.push_str(rest);
                return out;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_template_replaces_every_occurrence() {
        let out = render_template("{a} and {b}, then {a}", &[("{a}", "x"), ("{b}", "y")]);
        assert_eq!(out, "x and y, then x");
    }

    #[test]
    fn test_render_template_does_not_rescan_values() {
        let out = render_template("A={a} B={b}", &[("{a}", "{b}"), ("{b}", "{a}")]);
        assert_eq!(out, "A={b} B={a}");
    }

    #[test]
    fn test_render_template_without_placeholders() {
        assert_eq!(render_template("plain", &[("{a}", "x")]), "plain");
    }
}
