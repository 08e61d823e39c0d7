// Console summary of run counters

use console::Style;
use std::fmt::Write;

use crate::state::RunStats;

const HEAVY_RULE: &str =
    "════════════════════════════════════════════════════════════════════════════════";
const LIGHT_RULE: &str =
    "────────────────────────────────────────────────────────────────────────────────";

/// Human-readable counters, printed to stderr after the report
pub struct ConsoleSummary;

impl ConsoleSummary {
    pub fn render(stats: &RunStats) -> String {
        let mut out = String::new();
        let duration = stats.duration_ms().unwrap_or(0);

        let _ = writeln!(out, "{}", HEAVY_RULE);
        if stats.failures > 0 {
            let style = Style::new().red().bold();
            let _ = writeln!(
                out,
                "{}",
                style.apply_to(format!(
                    "❌ FAILED ({} failed of {} tests in {}ms)",
                    stats.failures, stats.tests, duration
                ))
            );
        } else {
            let style = Style::new().green().bold();
            let _ = writeln!(
                out,
                "{}",
                style.apply_to(format!("✅ PASSED ({} tests in {}ms)", stats.tests, duration))
            );
        }
        let _ = writeln!(out, "{}", LIGHT_RULE);
        let _ = writeln!(out, "📊 Run Statistics:");
        let _ = writeln!(out, "   • Suites: {}", stats.suites);
        let _ = writeln!(out, "   • Tests: {}", stats.tests);
        let _ = writeln!(out, "   • Passed groups: {}", stats.passes);
        let _ = writeln!(out, "   • Pending: {}", stats.pending);
        let _ = writeln!(out, "   • Failures: {}", stats.failures);
        let _ = writeln!(out, "   • Duration: {}ms", duration);
        let _ = writeln!(out, "{}", HEAVY_RULE);
        out
    }

    pub fn print(stats: &RunStats) {
        eprint!("{}", Self::render(stats));
    }
}
