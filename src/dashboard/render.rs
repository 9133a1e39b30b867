use crate::model::DriverRecord;
use std::fmt::Write;

/// Fixed two-decimal formatting used for every numeric figure
pub fn format_stat(value: f64) -> String {
    format!("{:.2}", value)
}

struct Stat<'a> {
    title: &'a str,
    value: f64,
    suffix: &'a str,
}

fn stat<'a>(title: &'a str, value: f64, suffix: &'a str) -> Stat<'a> {
    Stat {
        title,
        value,
        suffix,
    }
}

fn write_section(out: &mut String, title: &str, stats: &[Stat<'_>]) {
    let _ = writeln!(out, "{}", title);
    for s in stats {
        let _ = writeln!(out, "  {:<12} {}{}", s.title, format_stat(s.value), s.suffix);
    }
}

/// Driver dashboard: identity, rank card, performance and delivery figures.
pub fn render_driver_dashboard(record: &DriverRecord) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Welcome,");
    let _ = writeln!(out, "{}", record.driver_name);
    let _ = writeln!(out, "ID: {}", record.driver_id);
    let _ = writeln!(out);

    let _ = writeln!(out, "Current Rank");
    let _ = writeln!(out, "  {}", record.rank);
    let _ = writeln!(out, "  {}", record.org_name);
    let _ = writeln!(out);

    write_section(
        &mut out,
        "Performance Overview",
        &[
            stat("Rating", record.avg_rating, "/5"),
            stat("Days Worked", record.days_worked, ""),
            stat("Overall %", record.percentage, "%"),
            stat("UTR Daily", record.utr_daily, ""),
        ],
    );
    let _ = writeln!(out);

    write_section(
        &mut out,
        "Delivery Statistics",
        &[
            stat("Delivered", record.delivered, ""),
            stat("On-time", record.on_time_orders, ""),
            // Stored as a ratio
            stat("On-time %", record.on_time * 100.0, "%"),
            stat("Acceptance", record.acceptance_percentage, "%"),
        ],
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "Fleet Type:      {}", record.fleet_type);
    let _ = writeln!(out, "Civil ID:        {}", record.civil_id);
    let _ = write!(out, "Organization ID: {}", record.org_id);
    out
}

pub fn render_admin_dashboard(username: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Welcome Admin,");
    let _ = writeln!(out, "{}", username);
    let _ = writeln!(out);
    let _ = writeln!(out, "System Overview");
    let _ = write!(out, "  Search a driver with QUERY <civil-id>");
    out
}

/// Every field of a record, as listed by the admin driver search.
pub fn render_driver_details(record: &DriverRecord) -> String {
    let rows: [(&str, String); 16] = [
        ("Driver Name", record.driver_name.clone()),
        ("Civil ID", record.civil_id.clone()),
        ("Driver ID", record.driver_id.clone()),
        ("Rank", record.rank.clone()),
        ("Organization", record.org_name.clone()),
        ("Fleet Type", record.fleet_type.clone()),
        ("Average Rating", format_stat(record.avg_rating)),
        ("Days Worked", format_stat(record.days_worked)),
        ("Delivered Orders", format_stat(record.delivered)),
        ("On-time Orders", format_stat(record.on_time_orders)),
        (
            "On-time Percentage",
            format!("{}%", format_stat(record.on_time * 100.0)),
        ),
        (
            "Acceptance Rate",
            format!("{}%", format_stat(record.acceptance_percentage)),
        ),
        (
            "Overall Percentage",
            format!("{}%", format_stat(record.percentage)),
        ),
        ("Rejected Orders", format_stat(record.rejected)),
        ("Timeout Orders", format_stat(record.timeout)),
        ("UTR Daily", format_stat(record.utr_daily)),
    ];

    rows.iter()
        .map(|(label, value)| format!("{}: {}", label, value))
        .collect::<Vec<_>>()
        .join("\n")
}
