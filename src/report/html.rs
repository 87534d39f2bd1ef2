//! Self-contained HTML location report.
//!
//! The page has no external stylesheet or script references so it can be
//! opened straight from disk or printed to PDF by the browser.

use chrono::NaiveDate;

use crate::domain::LocationRecord;

use super::format::{fmt_miles, fmt_report_date, html_escape};

const BRAND: &str = "VendSite Scout";

const NEGOTIATION_TIPS: [&str; 5] = [
    "Lead with the foot traffic data — shows you're data-driven",
    "Offer a percentage of monthly revenue vs. flat rent",
    "Ask for 2-year contract with annual CPI adjustment",
    "Request exclusivity within the building",
    "Mention you'll handle all maintenance and restocking",
];

/// Render the full report page for `record` as of `date`.
pub fn render_report(record: &LocationRecord, date: NaiveDate) -> String {
    let address = html_escape(&record.address);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Location Analysis Report - {address}</title>
    <style>{css}</style>
</head>
<body>
    <div class="container">
        {header}
        {score_card}
        {location}
        {metrics}
        {demographics}
        {competition}
        {placement}
        {tips}
        {footer}
    </div>
</body>
</html>
"#,
        css = REPORT_CSS,
        header = render_header(date),
        score_card = render_score_card(record),
        location = render_location(record),
        metrics = render_metrics(record),
        demographics = render_demographics(record),
        competition = render_competition(record),
        placement = render_placement(record),
        tips = render_tips(),
        footer = render_footer(),
    )
}

fn render_header(date: NaiveDate) -> String {
    format!(
        r#"<div class="header">
            <div class="logo">{BRAND}</div>
            <div class="report-date">{}</div>
        </div>"#,
        fmt_report_date(date)
    )
}

fn render_score_card(record: &LocationRecord) -> String {
    let tier = record.tier();
    let color = tier.color();
    format!(
        r#"<div class="score-card score-{class}">
            <div class="score-value" style="color: {color};">{score}</div>
            <div class="score-label">Location Score</div>
            <div class="recommendation" style="background: {color};">{recommendation}</div>
        </div>"#,
        class = tier.class_name(),
        score = record.score(),
        recommendation = html_escape(record.recommendation()),
    )
}

fn render_location(record: &LocationRecord) -> String {
    format!(
        r#"<div class="section">
            <h2>📍 Location</h2>
            <p class="address">{}</p>
            <p class="location-type">{}</p>
        </div>"#,
        html_escape(&record.address),
        html_escape(record.location_type()),
    )
}

fn render_metrics(record: &LocationRecord) -> String {
    let cards = [
        ("Daily Foot Traffic", html_escape(record.foot_traffic_daily())),
        ("Traffic Score", format!("{}/100", record.foot_traffic_score())),
        (
            "Nearby Competitors",
            format!(
                "{} within {}mi",
                record.competition_count(),
                fmt_miles(record.competition_radius_miles())
            ),
        ),
        ("Est. Monthly Revenue", html_escape(record.estimated_monthly_revenue())),
    ];

    let body: String = cards
        .iter()
        .map(|(label, value)| {
            format!(
                r#"
                <div class="metric-card">
                    <div class="metric-label">{label}</div>
                    <div class="metric-value">{value}</div>
                </div>"#
            )
        })
        .collect();

    format!(
        r#"<div class="section">
            <h2>📊 Key Metrics</h2>
            <div class="metrics-grid">{body}
            </div>
        </div>"#
    )
}

fn render_demographics(record: &LocationRecord) -> String {
    render_detail_section(
        "👥 Demographics",
        &[
            ("Primary Audience", html_escape(record.demographic_primary())),
            ("Median Income (1mi radius)", html_escape(record.demographic_median_income())),
            ("Population (1mi radius)", html_escape(record.demographic_population())),
            ("Operating Hours", html_escape(record.hours())),
        ],
    )
}

fn render_competition(record: &LocationRecord) -> String {
    render_detail_section(
        "🏪 Competition Analysis",
        &[
            ("Vending Machines Nearby", record.competition_count().to_string()),
            (
                "Search Radius",
                format!("{} miles", fmt_miles(record.competition_radius_miles())),
            ),
            ("Competition Level", record.competition_level().label().to_string()),
        ],
    )
}

fn render_detail_section(title: &str, rows: &[(&str, String)]) -> String {
    let body: String = rows
        .iter()
        .map(|(label, value)| {
            format!(
                r#"
            <div class="detail-row">
                <span class="detail-label">{label}</span>
                <span class="detail-value">{value}</span>
            </div>"#
            )
        })
        .collect();

    format!(
        r#"<div class="section">
            <h2>{title}</h2>{body}
        </div>"#
    )
}

fn render_placement(record: &LocationRecord) -> String {
    format!(
        r#"<div class="section">
            <h2>💡 Placement Recommendations</h2>
            <p class="best-spot"><strong>Best spot:</strong> {}</p>
            <p><strong>Amenities:</strong> {}</p>
        </div>"#,
        html_escape(record.suggested_placement()),
        html_escape(&record.amenities_line()),
    )
}

fn render_tips() -> String {
    let items: String = NEGOTIATION_TIPS
        .iter()
        .map(|tip| format!("\n                    <li>{}</li>", html_escape(tip)))
        .collect();

    format!(
        r#"<div class="section">
            <div class="tips">
                <h3>📋 Negotiation Tips</h3>
                <ul>{items}
                </ul>
            </div>
        </div>"#
    )
}

fn render_footer() -> String {
    format!(
        r#"<div class="footer">
            <p>Report generated by {BRAND}</p>
            <p class="disclaimer">This analysis is an estimate based on available data. Actual results may vary.</p>
        </div>"#
    )
}

const REPORT_CSS: &str = r#"
        :root {
            --bg: #ffffff;
            --text: #1a1a2e;
            --accent: #0066cc;
            --border: #e0e0e0;
            --muted: #6b7280;
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: var(--bg);
            color: var(--text);
            line-height: 1.6;
            padding: 20px;
        }
        .container { max-width: 600px; margin: 0 auto; }

        .header {
            display: flex;
            justify-content: space-between;
            align-items: center;
            margin-bottom: 24px;
            padding-bottom: 16px;
            border-bottom: 2px solid var(--border);
        }
        .logo { font-size: 20px; font-weight: 700; color: var(--accent); }
        .report-date { font-size: 12px; color: var(--muted); }

        .score-card {
            background: linear-gradient(135deg, #f0f9ff 0%, #e0f2fe 100%);
            border: 1px solid #bae6fd;
            border-radius: 16px;
            padding: 32px;
            text-align: center;
            margin-bottom: 24px;
        }
        .score-value { font-size: 72px; font-weight: 700; line-height: 1; }
        .score-label { font-size: 14px; color: var(--muted); margin-top: 8px; }
        .recommendation {
            display: inline-block;
            margin-top: 16px;
            padding: 8px 20px;
            color: white;
            border-radius: 20px;
            font-weight: 600;
            font-size: 14px;
        }

        .section { margin-bottom: 24px; }
        .section h2 {
            font-size: 18px;
            margin-bottom: 16px;
            color: var(--accent);
            border-bottom: 2px solid var(--border);
            padding-bottom: 8px;
        }
        .address { font-size: 16px; font-weight: 500; }
        .location-type { color: var(--muted); font-size: 14px; margin-top: 4px; }

        .metrics-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 12px; }
        .metric-card { background: #f8f9fa; border-radius: 8px; padding: 16px; }
        .metric-label { font-size: 12px; color: var(--muted); margin-bottom: 4px; }
        .metric-value { font-size: 18px; font-weight: 600; }

        .detail-row {
            display: flex;
            justify-content: space-between;
            padding: 12px 0;
            border-bottom: 1px solid var(--border);
        }
        .detail-row:last-child { border-bottom: none; }
        .detail-label { color: var(--muted); font-size: 14px; }
        .detail-value { font-weight: 500; font-size: 14px; }

        .best-spot { margin-bottom: 12px; }

        .tips { background: #fef9c3; border: 1px solid #fde047; border-radius: 8px; padding: 16px; }
        .tips h3 { font-size: 14px; margin-bottom: 12px; color: #854d0e; }
        .tips ul { margin-left: 16px; font-size: 14px; }
        .tips li { margin-bottom: 6px; color: #713f12; }

        .footer {
            margin-top: 32px;
            padding-top: 16px;
            border-top: 1px solid var(--border);
            text-align: center;
            font-size: 12px;
            color: var(--muted);
        }
        .disclaimer { margin-top: 4px; }

        @media print {
            body { padding: 0; }
            .section { break-inside: avoid; }
        }
    "#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::mock::sample_record;
    use crate::domain::Demographics;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn with_score(score: u8) -> LocationRecord {
        LocationRecord {
            score: Some(score),
            ..LocationRecord::bare("1 Main St")
        }
    }

    #[test]
    fn mock_record_renders_high_tier() {
        let html = render_report(&sample_record("456 Business Park, San Jose, CA"), day());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<div class="score-value" style="color: #22c55e;">82</div>"#));
        assert!(html.contains(
            r#"<div class="recommendation" style="background: #22c55e;">Good fit - proceed with negotiation</div>"#
        ));
        assert!(html.contains("score-card score-high"));
        assert!(html.contains("October 16, 2026"));
        assert!(html.contains("2 within 0.5mi"));
        assert!(html.contains("75/100"));
        assert!(html.contains("Parking, Break Room, Elevator"));
        assert!(html.contains(r#"<span class="detail-value">Medium</span>"#));
    }

    #[test]
    fn score_thresholds_pick_tier_styling() {
        let cases = [
            (70, "score-high", "#22c55e"),
            (69, "score-medium", "#f59e0b"),
            (50, "score-medium", "#f59e0b"),
            (49, "score-low", "#ef4444"),
        ];
        for (score, class, color) in cases {
            let html = render_report(&with_score(score), day());
            assert!(html.contains(class), "score {score} should use {class}");
            assert!(
                html.contains(&format!(r#"class="recommendation" style="background: {color};""#)),
                "score {score} badge should be {color}"
            );
        }
    }

    #[test]
    fn bare_record_renders_every_fallback() {
        let html = render_report(&LocationRecord::bare("1 Main St"), day());
        assert!(html.contains("N/A/100"));
        assert!(html.contains("0 within 0.5mi"));
        assert!(html.contains("0.5 miles"));
        assert!(html.contains("Commercial"));
        assert!(html.contains("Review carefully"));
        assert!(html.contains("Near main entrance"));
        assert!(html.contains("<strong>Amenities:</strong> </p>"));
        assert!(html.contains(r#"<span class="detail-value">Low</span>"#));
        assert!(html.contains("score-card score-low"));
        assert_eq!(html.matches(r#"<span class="detail-value">N/A</span>"#).count(), 4);
    }

    #[test]
    fn renders_with_any_subset_of_optional_fields() {
        let full = sample_record("1 Main St");
        for mask in 0u32..(1 << 6) {
            let mut r = full.clone();
            if mask & 1 != 0 {
                r.demographics = None;
            }
            if mask & 2 != 0 {
                r.amenities.clear();
            }
            if mask & 4 != 0 {
                r.score = None;
                r.recommendation = None;
            }
            if mask & 8 != 0 {
                r.competition_count = None;
                r.competition_radius_miles = None;
            }
            if mask & 16 != 0 {
                r.foot_traffic_daily = None;
                r.foot_traffic_score = None;
                r.estimated_monthly_revenue = None;
            }
            if mask & 32 != 0 {
                r.location_type = None;
                r.hours = None;
                r.suggested_placement = None;
                r.demographics = Some(Demographics::default());
            }
            let html = render_report(&r, day());
            assert!(html.ends_with("</html>\n"));
            assert!(html.contains("1 Main St"));
        }
    }

    #[test]
    fn amenities_line_in_placement_section() {
        let record = LocationRecord {
            amenities: vec!["Parking".to_string(), "Break Room".to_string()],
            ..LocationRecord::bare("1 Main St")
        };
        let html = render_report(&record, day());
        assert!(html.contains("<strong>Amenities:</strong> Parking, Break Room</p>"));
    }

    #[test]
    fn record_text_is_escaped() {
        let record = LocationRecord {
            recommendation: Some("<script>alert(1)</script>".to_string()),
            ..LocationRecord::bare("Ben & Jerry's Plaza")
        };
        let html = render_report(&record, day());
        assert!(!html.contains("<script>"));
        assert!(html.contains("Ben &amp; Jerry&#39;s Plaza"));
    }

    #[test]
    fn page_is_self_contained() {
        let html = render_report(&sample_record("1 Main St"), day());
        assert!(!html.contains("<link"));
        assert!(!html.contains("<script"));
        assert!(!html.contains("http://"));
        assert!(!html.contains("https://"));
    }
}
