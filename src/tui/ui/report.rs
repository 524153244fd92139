//! Report view: findings, flags, and recommendations.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::domain::{HealthDomain, HealthReport, Severity};
use crate::tui::styles::VitalsTheme;

/// Render the evaluated report
pub fn render_report(f: &mut Frame, area: Rect, report: &HealthReport, status: Option<&str>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header (with emergency banner)
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_header(f, chunks[0], report);
    render_content(f, chunks[1], report);
    render_footer(f, chunks[2], status);
}

fn render_header(f: &mut Frame, area: Rect, report: &HealthReport) {
    let line = if report.emergency {
        Line::from(vec![
            Span::styled(" Health Report ", VitalsTheme::title()),
            Span::styled(
                "│ URGENT: possible medical emergency - seek immediate care",
                VitalsTheme::danger(),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled(" Health Report ", VitalsTheme::title()),
            Span::styled(
                format!("│ worst finding: {}", report.worst_severity()),
                VitalsTheme::severity(report.worst_severity()),
            ),
        ])
    };

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(VitalsTheme::border()),
    );

    f.render_widget(header, area);
}

fn render_content(f: &mut Frame, area: Rect, report: &HealthReport) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_findings(f, columns[0], report);
    render_plans(f, columns[1], report);
}

fn render_findings(f: &mut Frame, area: Rect, report: &HealthReport) {
    let mut lines: Vec<Line> = Vec::new();

    for (domain, finding) in HealthDomain::ALL.iter().zip(&report.summary) {
        let severity = report
            .result(*domain)
            .and_then(|r| r.worst_severity())
            .unwrap_or(Severity::Normal);
        let style = if finding.ends_with("not evaluated") {
            VitalsTheme::text_muted()
        } else {
            VitalsTheme::severity(severity)
        };
        lines.push(Line::from(Span::styled(format!("• {finding}"), style)));
    }

    let flags: Vec<_> = report.flags().collect();
    if !flags.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Flags", VitalsTheme::subtitle())));
        for flag in flags {
            lines.push(Line::from(Span::styled(
                format!("! {}", flag.description()),
                VitalsTheme::severity(Severity::High),
            )));
        }
    }

    if !report.warnings.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Input warnings",
            VitalsTheme::subtitle(),
        )));
        for warning in &report.warnings {
            lines.push(Line::from(Span::styled(
                format!("~ {}: {}", warning.field, warning.reason),
                VitalsTheme::text_secondary(),
            )));
        }
    }

    let findings = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(" Findings ", VitalsTheme::subtitle()))
                .borders(Borders::ALL)
                .border_style(VitalsTheme::border()),
        );

    f.render_widget(findings, area);
}

fn render_plans(f: &mut Frame, area: Rect, report: &HealthReport) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let diet = Paragraph::new(report.diet_plan.as_str())
        .wrap(Wrap { trim: true })
        .style(VitalsTheme::text())
        .block(
            Block::default()
                .title(Span::styled(" Diet ", VitalsTheme::subtitle()))
                .borders(Borders::ALL)
                .border_style(VitalsTheme::border()),
        );
    f.render_widget(diet, rows[0]);

    let exercise = Paragraph::new(report.exercise_plan.as_str())
        .wrap(Wrap { trim: true })
        .style(VitalsTheme::text())
        .block(
            Block::default()
                .title(Span::styled(" Exercise ", VitalsTheme::subtitle()))
                .borders(Borders::ALL)
                .border_style(VitalsTheme::border()),
        );
    f.render_widget(exercise, rows[1]);
}

fn render_footer(f: &mut Frame, area: Rect, status: Option<&str>) {
    let content = match status {
        Some(message) => Line::from(Span::styled(message, VitalsTheme::text_secondary())),
        None => Line::from(vec![
            Span::styled("[C] ", VitalsTheme::key_hint()),
            Span::styled("Export CSV ", VitalsTheme::key_desc()),
            Span::styled("[T] ", VitalsTheme::key_hint()),
            Span::styled("Export text ", VitalsTheme::key_desc()),
            Span::styled("[N] ", VitalsTheme::key_hint()),
            Span::styled("New entry ", VitalsTheme::key_desc()),
            Span::styled("[Esc] ", VitalsTheme::key_hint()),
            Span::styled("Back", VitalsTheme::key_desc()),
        ]),
    };

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(VitalsTheme::border()),
    );

    f.render_widget(footer, area);
}
