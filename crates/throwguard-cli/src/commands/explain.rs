use throwguard_enforce::registry;
use throwguard_output::OutputFormatter;

/// Run `throwguard explain <issue_id>`: print an issue's description.
pub fn run(formatter: &dyn OutputFormatter, issue_id: String) -> i32 {
    match registry::find(&issue_id) {
        Some(issue) => {
            let output = formatter.format_explain(issue);
            if !output.is_empty() {
                println!("{}", output.trim_end());
            }
            0
        }
        None => {
            eprintln!("error: unknown issue id: {}", issue_id);
            let known: Vec<&str> = registry::issues().iter().map(|i| i.id).collect();
            eprintln!("hint: known issues: {}", known.join(", "));
            2
        }
    }
}
