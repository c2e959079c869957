use throwguard_enforce::registry;
use throwguard_output::OutputFormatter;

/// Run `throwguard issues`: list the registry.
pub fn run(formatter: &dyn OutputFormatter) -> i32 {
    let output = formatter.format_issues(registry::issues());
    if !output.is_empty() {
        print!("{}", output);
        if !output.ends_with('\n') {
            println!();
        }
    }
    0
}
