use throwguard_enforce::types::{Severity, Violation};

pub(crate) fn format_violation_human(v: &Violation) -> String {
    let severity_label = match v.severity {
        Severity::Error => "error",
        Severity::Info => "info",
    };

    let location = match (v.line, v.column) {
        (Some(line), Some(col)) => format!("{}:{}:{}", v.file, line, col),
        _ => format!("{} @ {}", v.file, v.problem_range),
    };

    let mut out = format!(
        "{}[{}]: {}\n  --> {}\n",
        severity_label, v.issue_id, v.message, location,
    );

    out.push_str(&format!("   = call: `{}`\n", v.callee));

    for (i, choice) in v.fix.choices().iter().enumerate() {
        if let Some(name) = choice.name() {
            out.push_str(&format!("   = fix {}: {}\n", i + 1, name));
        }
    }

    if !v.fingerprint.is_empty() {
        out.push_str(&format!("   = fingerprint: {}\n", v.fingerprint));
    }

    if v.suppressed {
        if let Some(hint) = &v.suppress_hint {
            out.push_str(&format!("   = {}\n", hint));
        }
    }

    out
}
