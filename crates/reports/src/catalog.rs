//! Downloadable report catalogue.

use chrono::NaiveDate;
use serde::Serialize;

use industrialerp_core::{Badge, BadgeTier, Labeled, coded_enum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportStatus {
    Ready,
    Processing,
}

coded_enum!(ReportStatus, "report status", {
    Ready => "ready",
    Processing => "processing",
});

impl Labeled for ReportStatus {
    fn badge(&self) -> Badge {
        match self {
            ReportStatus::Ready => Badge::new("Listo", BadgeTier::Default),
            ReportStatus::Processing => Badge::new("Procesando", BadgeTier::Secondary),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub title: String,
    pub description: String,
    pub last_generated: NaiveDate,
    pub status: ReportStatus,
}

impl ReportEntry {
    pub fn is_downloadable(&self) -> bool {
        self.status == ReportStatus::Ready
    }
}

/// Number of reports ready for download.
pub fn ready_count(catalog: &[ReportEntry]) -> usize {
    catalog.iter().filter(|r| r.is_downloadable()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use industrialerp_core::DomainError;

    fn entry(title: &str, status: ReportStatus) -> ReportEntry {
        ReportEntry {
            title: title.to_string(),
            description: String::new(),
            last_generated: NaiveDate::from_ymd_opt(2024, 1, 13).unwrap(),
            status,
        }
    }

    #[test]
    fn badges() {
        assert_eq!(ReportStatus::Ready.label(), "Listo");
        assert_eq!(ReportStatus::Processing.tier(), BadgeTier::Secondary);
    }

    #[test]
    fn only_ready_reports_count() {
        let catalog = vec![
            entry("Reporte Financiero", ReportStatus::Ready),
            entry("Reporte de Ventas", ReportStatus::Processing),
            entry("Análisis de Compras", ReportStatus::Ready),
        ];
        assert_eq!(ready_count(&catalog), 2);
    }

    #[test]
    fn unknown_status_is_rejected() {
        match "failed".parse::<ReportStatus>() {
            Err(DomainError::UnknownEnumValue { kind, value }) => {
                assert_eq!(kind, "report status");
                assert_eq!(value, "failed");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
