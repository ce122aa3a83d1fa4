//! Named `{placeholder}` substitution for text templates
//!
//! Unlike positional formatting, placeholders are matched by exact name and
//! may repeat. A placeholder whose name is not in the variable map is kept
//! verbatim, substituted values are never re-scanned, and an unmatched `{`
//! is plain text.

use std::collections::HashMap;
use std::fmt::{Display, Write};

/// Replace every `{name}` in `template` with `vars[name]`.
pub fn interpolate<V: Display>(template: &str, vars: &HashMap<&str, V>) -> String {
    let mut out = String::with_capacity(template.len() * 2);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let Some(close) = after.find(['{', '}']) else {
            out.push_str(&rest[open..]);
            return out;
        };

        if after.as_bytes()[close] == b'{' {
            // `{` inside a candidate name: emit the first brace and retry from the second
            out.push('{');
            out.push_str(&after[..close]);
            rest = &after[close..];
            continue;
        }

        let name = &after[..close];
        match vars.get(name) {
            Some(value) => {
                let _ = write!(out, "{}", value);
            }
            None => {
                out.push('{');
                out.push_str(name);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}
