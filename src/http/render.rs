//! Server-side rendering of the browser page
//!
//! The page holds no client state. Criteria and the expanded record travel in
//! the URL, so every control is a link or a GET form whose target already
//! encodes the state it leads to.

use crate::filter::FilterCriteria;
use crate::index::DerivedIndexes;
use crate::record::RecordId;
use crate::session::{BrowserView, Card, Expansion};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use std::fmt::Write;

/// Escape text for HTML element content and attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Link to the page in the given state
pub fn state_href(criteria: &FilterCriteria, expansion: Expansion) -> String {
    let mut params: Vec<(&str, String)> = Vec::new();
    if let Some(q) = criteria.search() {
        params.push(("q", q.to_string()));
    }
    if let Some(person) = criteria.person() {
        params.push(("person", person.to_string()));
    }
    if let Some(classification) = criteria.classification() {
        params.push(("classification", classification.as_str().to_string()));
    }
    if let Some(role) = criteria.role() {
        params.push(("role", role.to_string()));
    }
    if let Some(id) = expansion.expanded() {
        params.push(("expanded", id.to_string()));
    }

    if params.is_empty() {
        return "/".to_string();
    }
    let query: Vec<String> = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, utf8_percent_encode(v, NON_ALPHANUMERIC)))
        .collect();
    format!("/?{}", query.join("&"))
}

fn card_anchor(id: RecordId) -> String {
    format!("record-{}", id)
}

fn render_select(
    out: &mut String,
    label: &str,
    name: &str,
    all_label: &str,
    options: &[(String, String)],
    selected: Option<&str>,
) {
    let _ = write!(
        out,
        r#"<div class="filter-group"><label class="filter-label" for="{name}">{label}</label><select id="{name}" name="{name}" class="filter-select" onchange="this.form.submit()"><option value="">{all}</option>"#,
        name = name,
        label = label,
        all = escape(all_label),
    );
    for (value, text) in options {
        let is_selected = selected == Some(value.as_str());
        let _ = write!(
            out,
            r#"<option value="{}"{}>{}</option>"#,
            escape(value),
            if is_selected { " selected" } else { "" },
            escape(text)
        );
    }
    out.push_str("</select></div>");
}

fn render_filters(out: &mut String, indexes: &DerivedIndexes, view: &BrowserView<'_>) {
    let criteria = &view.criteria;
    let clear_href = state_href(&FilterCriteria::new(), view.expanded);

    let _ = write!(
        out,
        r#"<section class="filters-section"><div class="filters-header"><div class="folder-tab">FILTERS</div><a href="{}" class="clear-btn">CLEAR ALL</a></div>"#,
        escape(&clear_href)
    );
    out.push_str(r#"<form method="get" action="/" class="filters-grid">"#);

    let _ = write!(
        out,
        r#"<div class="filter-group"><label class="filter-label" for="q">SEARCH DOCUMENTS</label><input id="q" type="text" name="q" value="{}" placeholder="Enter keywords..." class="filter-input"></div>"#,
        escape(criteria.search().unwrap_or(""))
    );

    let persons: Vec<(String, String)> =
        indexes.persons.iter().map(|p| (p.clone(), p.clone())).collect();
    render_select(out, "PERSON INVOLVED", "person", "All Persons", &persons, criteria.person());

    let classifications: Vec<(String, String)> = indexes
        .classifications
        .iter()
        .map(|c| (c.as_str().to_string(), c.label().to_string()))
        .collect();
    render_select(
        out,
        "CLASSIFICATION",
        "classification",
        "All Classifications",
        &classifications,
        criteria.classification().map(|c| c.as_str()),
    );

    let roles: Vec<(String, String)> =
        indexes.roles.iter().map(|r| (r.clone(), r.clone())).collect();
    render_select(out, "ROLE", "role", "All Roles", &roles, criteria.role());

    if let Some(id) = view.expanded.expanded() {
        let _ = write!(out, r#"<input type="hidden" name="expanded" value="{}">"#, id);
    }
    out.push_str(r#"<noscript><button type="submit" class="apply-btn">APPLY</button></noscript></form></section>"#);
}

fn render_card(out: &mut String, view: &BrowserView<'_>, card: &Card<'_>, position: usize) {
    let record = card.record;
    let anchor = card_anchor(record.id);
    let toggle_href = format!(
        "{}#{}",
        state_href(&view.criteria, view.expanded.toggled(record.id)),
        anchor
    );

    let _ = write!(
        out,
        r#"<article id="{anchor}" class="file-card{expanded}" style="animation-delay: {delay:.2}s"><a class="file-card-inner" href="{href}">"#,
        anchor = anchor,
        expanded = if card.expanded { " expanded" } else { "" },
        delay = position as f64 * 0.05,
        href = escape(&toggle_href),
    );
    let _ = write!(
        out,
        r#"<div class="file-header"><span class="classification-badge {}">{}</span><span class="file-date">{}</span></div>"#,
        record.classification.css_class(),
        record.classification.label(),
        escape(&record.date)
    );
    let _ = write!(
        out,
        r#"<h3 class="file-person">{}</h3><span class="file-role">{}</span><div class="file-type"><span class="type-icon">&#128196;</span>{}</div><p class="file-summary">{}</p>"#,
        escape(&record.person),
        escape(&record.role),
        escape(&record.document_type),
        escape(&record.summary)
    );
    let _ = write!(
        out,
        r#"<div class="file-footer"><span class="expand-hint">{}</span></div></a>"#,
        if card.expanded { "&#9650; COLLAPSE" } else { "&#9660; EXPAND" }
    );

    // Connection tags sit outside the toggle link: following one changes the
    // person filter and keeps the current expansion.
    if card.expanded {
        out.push_str(r#"<div class="file-connections"><span class="connections-label">CONNECTED TO:</span><div class="connections-list">"#);
        for connection in &record.connections {
            let criteria = view.criteria.clone().with_person(connection.as_str());
            let _ = write!(
                out,
                r#"<a class="connection-tag" href="{}">{}</a>"#,
                escape(&state_href(&criteria, view.expanded)),
                escape(connection)
            );
        }
        out.push_str("</div></div>");
    }
    out.push_str("</article>");
}

fn render_results(out: &mut String, view: &BrowserView<'_>) {
    let _ = write!(
        out,
        r#"<section class="results-section"><div class="results-header"><span class="results-count">{} DOCUMENTS FOUND</span><div class="results-line"></div></div><div class="files-grid">"#,
        view.count
    );
    for (position, card) in view.cards.iter().enumerate() {
        render_card(out, view, card, position);
    }
    out.push_str("</div>");
    if view.is_empty {
        out.push_str(r#"<div class="no-results"><div class="redacted-block"><span>[REDACTED]</span></div><p>No documents match your current filters.</p></div>"#);
    }
    out.push_str("</section>");
}

/// Full HTML document for `view`
pub fn render_page(indexes: &DerivedIndexes, view: &BrowserView<'_>) -> String {
    let mut out = String::with_capacity(16 * 1024);
    out.push_str(r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1"><title>Case File Index</title><link rel="stylesheet" href="/assets/styles.css"></head><body><div class="app-container"><div class="grain-overlay"></div><div class="scanlines"></div>"#);
    out.push_str(r#"<header class="header"><div class="header-content"><div class="classified-stamp">CASE FILE</div><h1 class="title"><span class="title-sub">THE</span>EPSTEIN FILES</h1><p class="subtitle">Document Tracker &amp; Index</p><div class="header-decoration"><span class="case-number">CASE NO. 18-2868</span><span class="divider">|</span><span class="court">S.D.N.Y.</span></div></div><div class="red-thread thread-1"></div><div class="red-thread thread-2"></div></header>"#);
    out.push_str(r#"<main class="main-content">"#);
    render_filters(&mut out, indexes, view);
    render_results(&mut out, view);
    out.push_str("</main>");
    out.push_str(r#"<footer class="footer"><p>Requested by @urmomlovesbtc &middot; Built by @clonkbot</p></footer>"#);
    out.push_str("</div></body></html>");
    out
}
