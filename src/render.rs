//! Diagnostic and summary text rendering (pt-BR).
//!
//! The rule engine emits structured records only; all prose lives here,
//! at the presentation boundary, so the engine stays locale-free and
//! tests can match on data instead of strings. Wording follows the
//! schedule editor's established messages.

use std::collections::BTreeMap;

use crate::models::{Company, Weekday};
use crate::rules::{Diagnostic, DiagnosticKind};

/// Formats a minute total as "H horas e M minutos".
pub fn hours_and_minutes(total_min: u32) -> String {
    format!("{} horas e {} minutos", total_min / 60, total_min % 60)
}

/// Renders one diagnostic as its display line.
pub fn render_diagnostic(diagnostic: &Diagnostic) -> String {
    match &diagnostic.kind {
        DiagnosticKind::Overlap {
            day,
            first,
            second,
            transit,
        } => {
            let subject = if *transit {
                "um conflito de deslocamento e horários entre as entradas"
            } else {
                "um conflito de horários de trabalhos entre os vínculos"
            };
            format!(
                "- Erro: {day} possui {subject} ID {} ({} às {}) e ID {} ({} às {}).",
                first.id, first.start, first.end, second.id, second.start, second.end
            )
        }
        DiagnosticKind::ContinuousWorkExceeded {
            day,
            company,
            worked_min,
            limit_min,
        } => format!(
            "- Erro: {day} possui {} de trabalho contínuo, sem o intervalo mínimo de 1 hora, \
             no vínculo {company}. (Máximo são {} horas)",
            hours_and_minutes(*worked_min),
            limit_min / 60
        ),
        DiagnosticKind::DailyTotalExceeded {
            day,
            company,
            worked_min,
            limit_min,
        } => format!(
            "- Erro: {day} possui {} totais de trabalho no vínculo {company}. \
             (Máximo são {} horas)",
            hours_and_minutes(*worked_min),
            limit_min / 60
        ),
        DiagnosticKind::InsufficientRest {
            from,
            to,
            rest_min,
            recommended_min,
        } => format!(
            "- Recomendação: Entre {from} e {to} existem apenas {} de descanso. \
             (Recomendado {} horas)",
            hours_and_minutes(*rest_min),
            recommended_min / 60
        ),
        DiagnosticKind::MissingWeeklyRest => {
            "- Recomendação: A escala não possui descanso semanal recomendado de um dia."
                .to_string()
        }
    }
}

/// Renders a diagnostic list in order, one line each.
pub fn render_diagnostics(diagnostics: &[Diagnostic]) -> Vec<String> {
    diagnostics.iter().map(render_diagnostic).collect()
}

/// Renders the weekly per-bond summary, one line per bond.
pub fn render_company_hours(totals: &BTreeMap<Company, u32>) -> Vec<String> {
    totals
        .iter()
        .map(|(company, &minutes)| format!("{company}: {}", hours_and_minutes(minutes)))
        .collect()
}

/// Renders the per-day per-bond summary, one line per day/bond pair.
pub fn render_daily_company_hours(
    daily: &BTreeMap<Weekday, BTreeMap<Company, u32>>,
) -> Vec<String> {
    let mut lines = Vec::new();
    for (day, totals) in daily {
        for (company, &minutes) in totals {
            lines.push(format!("{day}: {company}: {}", hours_and_minutes(minutes)));
        }
    }
    lines
}
