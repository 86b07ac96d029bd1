//! HTML report generator
//!
//! Generates a styled, standalone HTML document carrying the same data as
//! the JSON report.

use crate::reporting::ScanReport;
use crate::scanner::Severity;

/// Generate the HTML report
pub fn generate(report: &ScanReport) -> String {
    let mut html = String::new();

    html.push_str(&generate_header("vscan Security Report"));
    html.push_str("<body>\n<div class=\"container\">\n");
    html.push_str(&generate_summary(report));
    html.push_str(&generate_findings(report));
    html.push_str(&generate_footer());
    html.push_str("</div>\n</body>\n</html>\n");

    html
}

fn generate_header(title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        :root {{
            --bg-primary: #0d1117;
            --bg-secondary: #161b22;
            --text-primary: #c9d1d9;
            --text-secondary: #8b949e;
            --border-color: #30363d;
            --critical: #f85149;
            --high: #db6d28;
            --medium: #d29922;
            --low: #3fb950;
            --info: #58a6ff;
        }}
        * {{ box-sizing: border-box; }}
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: var(--bg-primary);
            color: var(--text-primary);
            line-height: 1.6;
            margin: 0;
        }}
        .container {{ max-width: 1000px; margin: 0 auto; padding: 2rem; }}
        h1 {{ color: var(--info); border-bottom: 1px solid var(--border-color); padding-bottom: 0.5rem; }}
        .meta {{ color: var(--text-secondary); margin-bottom: 2rem; }}
        .finding {{
            background: var(--bg-secondary);
            border: 1px solid var(--border-color);
            border-radius: 8px;
            padding: 1.25rem;
            margin: 1rem 0;
        }}
        .finding h3 {{ margin-top: 0; }}
        .severity {{
            display: inline-block;
            padding: 0.1rem 0.6rem;
            border-radius: 12px;
            font-size: 0.8rem;
            font-weight: bold;
            color: #0d1117;
        }}
        .severity.critical {{ background: var(--critical); }}
        .severity.high {{ background: var(--high); }}
        .severity.medium {{ background: var(--medium); }}
        .severity.low {{ background: var(--low); }}
        .severity.informational {{ background: var(--info); }}
        code {{
            background: var(--bg-primary);
            border: 1px solid var(--border-color);
            border-radius: 4px;
            padding: 0.1rem 0.4rem;
            word-break: break-all;
        }}
        table {{ width: 100%; border-collapse: collapse; }}
        td {{ padding: 0.3rem 0.6rem; border-bottom: 1px solid var(--border-color); vertical-align: top; }}
        td.label {{ color: var(--text-secondary); width: 8rem; }}
        .clean {{ color: var(--low); font-size: 1.1rem; }}
        .footer {{ color: var(--text-secondary); margin-top: 2rem; font-size: 0.85rem; }}
    </style>
</head>
"#
    )
}

fn generate_summary(report: &ScanReport) -> String {
    format!(
        "<h1>Security Scan Report</h1>\n<div class=\"meta\">\
         Target: <code>{}</code><br>\
         Scan time: {} &middot; Total vulnerabilities: <strong>{}</strong>\
         </div>\n",
        escape(&report.target_url),
        escape(&report.scan_timestamp),
        report.total_vulnerabilities
    )
}

fn generate_findings(report: &ScanReport) -> String {
    if report.vulnerabilities.is_empty() {
        return "<p class=\"clean\">No vulnerabilities detected.</p>\n".to_string();
    }

    let mut section = String::new();

    for (idx, finding) in report.vulnerabilities.iter().enumerate() {
        let severity_class = severity_class(finding.severity);
        let parameter = finding
            .parameter
            .as_deref()
            .map(escape)
            .unwrap_or_else(|| "&mdash;".to_string());
        let status = finding
            .status_code
            .map(|s| s.to_string())
            .unwrap_or_else(|| "&mdash;".to_string());

        section.push_str(&format!(
            "<div class=\"finding\">\n\
             <h3>#{num} {vuln_type} <span class=\"severity {severity_class}\">{severity}</span></h3>\n\
             <table>\n\
             <tr><td class=\"label\">Parameter</td><td>{parameter}</td></tr>\n\
             <tr><td class=\"label\">Payload</td><td><code>{payload}</code></td></tr>\n\
             <tr><td class=\"label\">URL</td><td><code>{url}</code></td></tr>\n\
             <tr><td class=\"label\">Status</td><td>{status}</td></tr>\n\
             <tr><td class=\"label\">Description</td><td>{description}</td></tr>\n\
             </table>\n\
             </div>\n",
            num = idx + 1,
            vuln_type = escape(&finding.vuln_type),
            severity = finding.severity.name(),
            payload = escape(&finding.payload),
            url = escape(&finding.url),
            description = escape(&finding.description),
        ));
    }

    section
}

fn generate_footer() -> String {
    format!(
        "<div class=\"footer\">Generated by vscan {}</div>\n",
        env!("CARGO_PKG_VERSION")
    )
}

fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "critical",
        Severity::High => "high",
        Severity::Medium => "medium",
        Severity::Low => "low",
        Severity::Informational => "informational",
    }
}

/// Escape HTML special characters
fn escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::{Finding, Severity};

    #[test]
    fn payloads_are_escaped_in_html_output() {
        let report = ScanReport {
            scan_timestamp: "2026-01-01 00:00:00".to_string(),
            target_url: "http://example.com/?q=1".to_string(),
            total_vulnerabilities: 1,
            vulnerabilities: vec![Finding::new(
                "XSS (Reflected)",
                Severity::High,
                "http://example.com/?q=x",
            )
            .with_parameter("q")
            .with_payload("<script>alert(1)</script>")],
        };

        let html = generate(&report);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn empty_report_renders_clean_message() {
        let report = ScanReport {
            scan_timestamp: "2026-01-01 00:00:00".to_string(),
            target_url: "http://example.com/".to_string(),
            total_vulnerabilities: 0,
            vulnerabilities: Vec::new(),
        };

        let html = generate(&report);
        assert!(html.contains("No vulnerabilities detected"));
    }
}
