//! Console reporter with colored output

use crate::catalog::Catalog;
use crate::{AnalysisReport, ImagePair, Tier};
use colored::Colorize;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Print the full evaluation dashboard
    pub fn dashboard(&self, report: &AnalysisReport, catalog: &Catalog) {
        println!();
        println!("{}", "📊 Evaluation Dashboard".bold());
        println!();

        println!("   {}", "Executive Summary:".bold());
        for line in wrap(&report.summary, 72) {
            println!("   {}", line);
        }
        println!();

        self.print_metrics(report);
        self.print_distribution(report, catalog);
    }

    /// One-line report for quiet mode
    pub fn report_quiet(&self, report: &AnalysisReport) {
        let status = if report.passes { "pass" } else { "fail" };
        println!(
            "{:.2}/5 ({:.1}%) {}",
            report.average,
            report.percentage,
            self.colorize_status(status, report.passes)
        );
    }

    /// Progress line shown at the top of each rating step
    pub fn progress(&self, index: usize, total: usize, name: &str) {
        let bar = self.create_progress_bar(index + 1, total);
        println!();
        println!("{}", bar);
        println!("{}", format!("Image {} of {}: {}", index + 1, total, name).bold());
    }

    /// Show one catalogue item with the rating scale
    pub fn item_view(&self, pair: &ImagePair, current: Option<Tier>, catalog: &Catalog) {
        println!("   Original:  {}", pair.original.dimmed());
        println!("   Processed: {}", pair.processed.dimmed());
        println!();
        println!("   {}", "Rate the background removal result:".bold());
        for tier in Tier::ALL {
            let marker = if current == Some(tier) { "●" } else { "○" };
            let label = format!("{} - {}", tier.value(), catalog.label_for(tier));
            let label = self.colorize_hex(&label, catalog.color_for(tier));
            println!("   {} {}", marker, label);
            println!("       {}", catalog.description_for(tier).dimmed());
        }
        println!();
    }

    /// Banner printed once the last rating is submitted
    pub fn completion_banner(&self) {
        println!();
        println!("{}", "🎉 Evaluation Complete! 🎉".bold());
        println!("Thank you for your participation!");
        println!("Your responses have been recorded successfully.");
        println!();
    }

    fn print_metrics(&self, report: &AnalysisReport) {
        let status = if report.passes {
            self.colorize_status("✅ Meets Standard", true)
        } else {
            self.colorize_status("❌ Below Standard", false)
        };
        println!("   Images Evaluated: {}", report.total_items.to_string().bold());
        println!(
            "   Average Score:    {} ({:.1}%)",
            format!("{:.2}/5", report.average).bold(),
            report.percentage
        );
        println!("   Quality Status:   {}", status);
        println!();
    }

    fn print_distribution(&self, report: &AnalysisReport, catalog: &Catalog) {
        println!("   {}", "Rating Distribution:".bold());
        let max_count = Tier::ALL
            .iter()
            .map(|&t| report.distribution.count(t))
            .max()
            .unwrap_or(0);

        for tier in Tier::ALL {
            let count = report.distribution.count(tier);
            let percent = report.distribution.percent(tier);
            let bar = self.create_count_bar(count, max_count);
            let label = format!("{} - {}", tier.value(), catalog.label_for(tier));
            let label = self.colorize_hex(&label, catalog.color_for(tier));
            let annotation = if count > 0 {
                format!("{} ({:.1}%)", count, percent)
            } else {
                "0".to_string()
            };
            println!("   {} {:>10} {}", bar, annotation, label);
        }
        println!();
    }

    fn colorize_status(&self, text: &str, passes: bool) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        if passes {
            text.green().bold().to_string()
        } else {
            text.red().bold().to_string()
        }
    }

    /// Apply a catalogue hex color (e.g. "#dc2626") via truecolor
    fn colorize_hex(&self, text: &str, hex: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        match parse_hex(hex) {
            Some((r, g, b)) => text.truecolor(r, g, b).to_string(),
            None => text.to_string(),
        }
    }

    fn create_progress_bar(&self, position: usize, total: usize) -> String {
        let width = 20usize;
        let filled = if total > 0 { position * width / total } else { 0 };
        let empty = width - filled.min(width);
        let bar = format!("[{}{}]", "█".repeat(filled.min(width)), "░".repeat(empty));
        if self.use_colors {
            bar.blue().to_string()
        } else {
            bar
        }
    }

    fn create_count_bar(&self, count: u32, max: u32) -> String {
        let width = 10usize;
        let filled = if max > 0 {
            (count as usize * width) / max as usize
        } else {
            0
        };
        format!("[{}{}]", "▓".repeat(filled), "░".repeat(width - filled))
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Greedy word wrap for the summary block
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
