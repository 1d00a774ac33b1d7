//! Console output formatter for assistant replies

use colored::Colorize;

/// Formats assistant output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format an assistant reply line
    pub fn reply(text: &str) -> String {
        format!("{} {}", "clerk:".green().bold(), text)
    }

    /// Format the loaded-store summary shown at startup
    pub fn store_summary(products: usize, orders: usize, faqs: usize) -> String {
        format!(
            "{} {} products, {} orders, {} FAQ entries",
            "Loaded:".cyan().bold(),
            products,
            orders,
            faqs
        )
    }

    /// Format the registered tool list
    pub fn tool_list(names: &[String]) -> String {
        let mut sorted = names.to_vec();
        sorted.sort();
        format!("{} {}", "Tools:".cyan().bold(), sorted.join(", "))
    }
}
