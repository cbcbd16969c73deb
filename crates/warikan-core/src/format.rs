//! Rendering of payment schedules and the roster.
//!
//! Everything here is derived from a [`PaymentResult`] or the role list
//! alone, so a schedule can be re-rendered long after the calculation that
//! produced it.

use warikan_types::{PaymentResult, Role};

/// Presentation options for rendered schedules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportStyle {
    /// Currency marker printed before each amount.
    pub currency: String,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            currency: "\u{a5}".to_string(),
        }
    }
}

/// One per-role line of a rendered schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleLine {
    /// Role display name.
    pub name: String,
    /// Number of people paying this amount.
    pub count: u32,
    /// Formatted per-person payment.
    pub individual: String,
    /// Formatted group total for this role.
    pub group: String,
}

/// A schedule prepared for on-screen presentation: per-role lines plus the
/// summary amounts, all pre-formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleView {
    /// Per-role lines in display order.
    pub lines: Vec<ScheduleLine>,
    /// The amount that was split.
    pub original_total: String,
    /// Sum actually collected after rounding.
    pub collected_total: String,
    /// Overshoot kept by the collector.
    pub excess: String,
    /// Total number of payers.
    pub head_count: u32,
}

/// Builds the presentation view of a result.
#[must_use]
pub fn schedule_view(result: &PaymentResult, style: &ReportStyle) -> ScheduleView {
    let lines = result
        .roles
        .iter()
        .map(|role| ScheduleLine {
            name: role.name.clone(),
            count: role.count,
            individual: amount(role.final_individual_payment, style),
            group: amount(role.group_total(), style),
        })
        .collect();
    ScheduleView {
        lines,
        original_total: amount_f64(result.total_amount, style),
        collected_total: amount(result.total_collected_amount, style),
        excess: amount_f64(result.excess_amount, style),
        head_count: result.head_count(),
    }
}

/// Renders a result as a line-oriented plain-text report, suitable for the
/// clipboard or a chat message.
#[must_use]
pub fn plain_text_report(result: &PaymentResult, style: &ReportStyle) -> String {
    let view = schedule_view(result, style);
    let mut out = String::new();
    out.push_str("Warikan payment schedule\n");
    out.push_str("========================\n");
    out.push_str(&format!(
        "Split of {} among {}\n\n",
        view.original_total,
        people(view.head_count)
    ));
    for line in &view.lines {
        out.push_str(&format!("{} ({})\n", line.name, people(line.count)));
        out.push_str(&format!("  per person:  {}\n", line.individual));
        out.push_str(&format!("  group total: {}\n\n", line.group));
    }
    out.push_str("------------------------\n");
    out.push_str(&format!("Collected total: {}\n", view.collected_total));
    out.push_str(&format!("Original total:  {}\n", view.original_total));
    out.push_str(&format!("Collector keeps: {}\n", view.excess));
    out
}

/// Renders the roster as an aligned table with ids, for listing commands.
#[must_use]
pub fn roster_view(roles: &[Role]) -> String {
    let name_width = roles
        .iter()
        .map(|role| role.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);
    let mut out = String::new();
    out.push_str(&format!(
        "{:>4}  {:<name_width$}  {:>6}  {:>5}\n",
        "ID", "NAME", "WEIGHT", "COUNT"
    ));
    for role in roles {
        out.push_str(&format!(
            "{:>4}  {:<name_width$}  {:>6}  {:>5}\n",
            role.id, role.name, role.weight, role.count
        ));
    }
    out
}

/// Pluralizes a payer count for report text.
#[must_use]
pub fn people(count: u32) -> String {
    if count == 1 {
        "1 person".to_string()
    } else {
        format!("{count} people")
    }
}

fn amount(value: u64, style: &ReportStyle) -> String {
    format!("{}{}", style.currency, thousands(value))
}

fn amount_f64(value: f64, style: &ReportStyle) -> String {
    let rounded = value.round();
    if (value - rounded).abs() < 1e-9 && rounded.abs() < 9.0e15 {
        if rounded < 0.0 {
            format!("-{}{}", style.currency, thousands(rounded.abs() as u64))
        } else {
            format!("{}{}", style.currency, thousands(rounded as u64))
        }
    } else if value < 0.0 {
        format!("-{}{:.2}", style.currency, value.abs())
    } else {
        format!("{}{value:.2}", style.currency)
    }
}

fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yen() -> ReportStyle {
        ReportStyle::default()
    }

    #[test]
    fn thousands_groups_digits() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(1234567), "1,234,567");
    }

    #[test]
    fn integral_amounts_drop_the_fraction() {
        assert_eq!(amount_f64(10000.0, &yen()), "\u{a5}10,000");
        assert_eq!(amount_f64(0.0, &yen()), "\u{a5}0");
    }

    #[test]
    fn fractional_amounts_keep_two_decimals() {
        assert_eq!(amount_f64(100.5, &yen()), "\u{a5}100.50");
        assert_eq!(amount_f64(-0.25, &yen()), "-\u{a5}0.25");
    }

    #[test]
    fn people_pluralizes() {
        assert_eq!(people(1), "1 person");
        assert_eq!(people(3), "3 people");
    }
}
