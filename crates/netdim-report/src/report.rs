//! Printable HTML report of one dimensioning run.

use crate::error::ExportResult;
use crate::format::{capitalize, escape_html, format_amount};
use crate::output::write_output;
use crate::snapshot::Snapshot;
use netdim_core::{format_number, Breakdown};
use std::fmt;
use std::path::{Path, PathBuf};

const STYLE: &str = r#"        body { font-family: Arial, sans-serif; margin: 20px; line-height: 1.6; }
        .header { text-align: center; border-bottom: 2px solid #333; padding-bottom: 20px; margin-bottom: 30px; }
        .section { margin-bottom: 25px; }
        .section h2 { color: #2563eb; border-bottom: 1px solid #ddd; padding-bottom: 5px; }
        table { width: 100%; border-collapse: collapse; margin: 10px 0; }
        th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
        th { background-color: #f5f5f5; }
        .footer { margin-top: 40px; text-align: center; font-size: 12px; color: #666; }
        .cost { font-weight: bold; color: #059669; }"#;

const RECOMMENDATIONS: [&str; 5] = [
    "Optimiser la position des sites pour une meilleure couverture",
    "Considérer les obstacles géographiques et climatiques",
    "Prévoir une marge de capacité pour la croissance future",
    "Intégrer les aspects de sécurité et redondance",
    "Valider les résultats avec des mesures sur site",
];

const NOT_AVAILABLE: &str = "N/A";

/// HTML report built from a snapshot.
///
/// Rendered through [`fmt::Display`]; every interpolated value is escaped.
///
/// # Example
///
/// ```
/// use netdim_core::{DimensioningConstants, NetworkType, ParameterSet};
/// use netdim_report::{Report, ReportMetadata, Snapshot};
///
/// let snapshot = Snapshot::capture(
///     ParameterSet::defaults(NetworkType::Gsm),
///     &DimensioningConstants::default(),
///     ReportMetadata::default(),
/// );
/// let html = Report::new(&snapshot).to_string();
/// assert!(html.contains("RAPPORT DE DIMENSIONNEMENT GSM"));
/// ```
#[derive(Debug, Clone)]
pub struct Report<'a> {
    snapshot: &'a Snapshot,
    breakdown: Option<Breakdown>,
}

impl<'a> Report<'a> {
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self {
            snapshot,
            breakdown: None,
        }
    }

    /// Add a section listing the intermediate quantities of the calculation.
    pub fn with_breakdown(mut self, breakdown: Breakdown) -> Self {
        self.breakdown = Some(breakdown);
        self
    }

    /// `rapport_<NAME>_<epoch ms>.html`
    pub fn file_name(&self) -> String {
        format!(
            "rapport_{}_{}.html",
            self.snapshot.network.name(),
            self.snapshot.timestamp.timestamp_millis()
        )
    }

    /// Write the report into `dir` under [`Report::file_name`].
    pub fn write_to(&self, dir: &Path) -> ExportResult<PathBuf> {
        write_output(dir, &self.file_name(), &self.to_string())
    }

    fn write_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.snapshot;
        let metadata = &snapshot.metadata;
        writeln!(f, "    <div class=\"header\">")?;
        writeln!(
            f,
            "        <h1>RAPPORT DE DIMENSIONNEMENT {}</h1>",
            snapshot.network.name()
        )?;
        writeln!(f, "        <p><strong>{}</strong></p>", escape_html(&metadata.projet))?;
        if let Some(institution) = &metadata.institution {
            writeln!(f, "        <p>{}</p>", escape_html(institution))?;
        }
        writeln!(
            f,
            "        <p>Date de génération: {}</p>",
            snapshot.timestamp.format("%d/%m/%Y %H:%M:%S UTC")
        )?;
        writeln!(f, "    </div>")
    }

    fn write_parameters(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    <div class=\"section\">")?;
        writeln!(f, "        <h2>Paramètres de Configuration</h2>")?;
        writeln!(f, "        <table class=\"parameter-table\">")?;
        writeln!(
            f,
            "            <thead><tr><th>Paramètre</th><th>Valeur</th><th>Unité</th></tr></thead>"
        )?;
        writeln!(f, "            <tbody>")?;
        for (def, value) in self.snapshot.parameters.entries() {
            writeln!(
                f,
                "                <tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape_html(&capitalize(def.name)),
                format_number(value),
                escape_html(def.unit)
            )?;
        }
        writeln!(f, "            </tbody>")?;
        writeln!(f, "        </table>")?;
        writeln!(f, "    </div>")
    }

    fn write_results(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let results = &self.snapshot.results;
        let currency = &self.snapshot.metadata.currency;

        let sites = non_zero(results.sites as u64, || results.sites.to_string());
        let coverage = non_zero(results.coverage as u64, || format!("{}%", results.coverage));
        let cost = non_zero(results.cost, || format_amount(results.cost, currency));

        writeln!(f, "    <div class=\"section\">")?;
        writeln!(f, "        <h2>Résultats du Dimensionnement</h2>")?;
        writeln!(f, "        <table class=\"result-table\">")?;
        writeln!(f, "            <thead><tr><th>Métrique</th><th>Valeur</th></tr></thead>")?;
        writeln!(f, "            <tbody>")?;
        result_row(f, "Sites nécessaires", &sites, None)?;
        result_row(f, "Capacité totale", &results.capacity.to_string(), None)?;
        result_row(f, "Taux de couverture", &coverage, None)?;
        result_row(f, "Coût estimé", &cost, Some("cost"))?;
        result_row(f, results.extra.label(), &results.extra.to_string(), None)?;
        writeln!(f, "            </tbody>")?;
        writeln!(f, "        </table>")?;
        writeln!(f, "    </div>")
    }

    fn write_breakdown(&self, f: &mut fmt::Formatter<'_>, breakdown: &Breakdown) -> fmt::Result {
        writeln!(f, "    <div class=\"section\">")?;
        writeln!(f, "        <h2>Détail du Calcul</h2>")?;
        writeln!(f, "        <table class=\"breakdown-table\">")?;
        writeln!(f, "            <tbody>")?;
        for (name, value) in breakdown.rows() {
            writeln!(
                f,
                "                <tr><td>{}</td><td>{}</td></tr>",
                escape_html(name),
                escape_html(&value)
            )?;
        }
        writeln!(f, "            </tbody>")?;
        writeln!(f, "        </table>")?;
        writeln!(f, "    </div>")
    }

    fn write_analysis(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    <div class=\"section\">")?;
        writeln!(f, "        <h2>Analyse et Recommandations</h2>")?;
        writeln!(f, "        <h3>Méthodologie</h3>")?;
        writeln!(
            f,
            "        <p>Ce dimensionnement a été calculé en utilisant les algorithmes standards pour les réseaux {}.</p>",
            self.snapshot.network.name()
        )?;
        writeln!(f, "        <h3>Recommandations</h3>")?;
        writeln!(f, "        <ul>")?;
        for item in RECOMMENDATIONS {
            writeln!(f, "            <li>{}</li>", item)?;
        }
        writeln!(f, "        </ul>")?;
        writeln!(f, "    </div>")
    }

    fn write_footer(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let metadata = &self.snapshot.metadata;
        writeln!(f, "    <div class=\"footer\">")?;
        writeln!(
            f,
            "        <p>Rapport généré par l'Outil de Dimensionnement des Réseaux Télécoms</p>"
        )?;
        let credits: Vec<&str> = [metadata.institution.as_deref(), metadata.course.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        if !credits.is_empty() {
            writeln!(f, "        <p>{}</p>", escape_html(&credits.join(" - ")))?;
        }
        writeln!(f, "    </div>")
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let network = self.snapshot.network.name();
        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, "<html lang=\"fr\">")?;
        writeln!(f, "<head>")?;
        writeln!(f, "    <meta charset=\"UTF-8\">")?;
        writeln!(f, "    <title>Rapport de Dimensionnement {}</title>", network)?;
        writeln!(f, "    <style>\n{}\n    </style>", STYLE)?;
        writeln!(f, "</head>")?;
        writeln!(f, "<body>")?;
        self.write_header(f)?;
        self.write_parameters(f)?;
        self.write_results(f)?;
        if let Some(breakdown) = &self.breakdown {
            self.write_breakdown(f, breakdown)?;
        }
        self.write_analysis(f)?;
        self.write_footer(f)?;
        writeln!(f, "</body>")?;
        writeln!(f, "</html>")
    }
}

/// Zero values read as missing.
fn non_zero(value: u64, render: impl FnOnce() -> String) -> String {
    if value == 0 {
        NOT_AVAILABLE.to_string()
    } else {
        render()
    }
}

fn result_row(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    value: &str,
    class: Option<&str>,
) -> fmt::Result {
    let class = class.map(|c| format!(" class=\"{}\"", c)).unwrap_or_default();
    writeln!(
        f,
        "                <tr><td>{}</td><td{}><strong>{}</strong></td></tr>",
        escape_html(label),
        class,
        escape_html(value)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::ReportMetadata;
    use chrono::{TimeZone, Utc};
    use netdim_core::{breakdown, DimensioningConstants, GsmParams, NetworkType, ParameterSet};

    fn snapshot(params: ParameterSet, metadata: ReportMetadata) -> Snapshot {
        let mut snapshot = Snapshot::capture(params, &DimensioningConstants::default(), metadata);
        snapshot.timestamp = Utc.with_ymd_and_hms(2025, 6, 15, 10, 30, 0).unwrap();
        snapshot
    }

    #[test]
    fn test_gsm_report_contents() {
        let snapshot = snapshot(ParameterSet::defaults(NetworkType::Gsm), ReportMetadata::default());
        let html = Report::new(&snapshot).to_string();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Rapport de Dimensionnement GSM</title>"));
        assert!(html.contains("<p><strong>Outil de Dimensionnement Télécoms</strong></p>"));
        assert!(html.contains("Date de génération: 15/06/2025 10:30:00 UTC"));
        assert!(html.contains("<tr><td>BusyHour</td><td>15</td><td>%</td></tr>"));
        assert!(html.contains("<tr><td>Area</td><td>100</td><td>km²</td></tr>"));
        assert!(html.contains("<strong>38</strong>"));
        assert!(html.contains("<strong>2432 canaux</strong>"));
        assert!(html.contains("<strong>100%</strong>"));
        assert!(html.contains("<td class=\"cost\"><strong>3\u{202F}420\u{202F}000\u{202F}000 FCFA</strong>"));
        assert!(html.contains("<strong>300 Erl</strong>"));
        assert!(html.contains("algorithmes standards pour les réseaux GSM"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_zero_results_show_not_available() {
        let params = GsmParams {
            area: 0.0,
            density: 0.0,
            ..GsmParams::default()
        };
        let snapshot = snapshot(params.into(), ReportMetadata::default());
        let html = Report::new(&snapshot).to_string();

        assert!(html.contains("<tr><td>Sites nécessaires</td><td><strong>N/A</strong></td></tr>"));
        assert!(html.contains("<tr><td>Taux de couverture</td><td><strong>N/A</strong></td></tr>"));
        assert!(html.contains("<td class=\"cost\"><strong>N/A</strong>"));
        assert!(html.contains("<strong>0 canaux</strong>"));
    }

    #[test]
    fn test_metadata_lines_are_escaped() {
        let metadata = ReportMetadata {
            projet: "Plan <réseau>".to_string(),
            institution: Some("École & Co".to_string()),
            course: Some("Réseaux télécoms".to_string()),
            currency: "FCFA".to_string(),
        };
        let snapshot = snapshot(ParameterSet::defaults(NetworkType::Lte), metadata);
        let html = Report::new(&snapshot).to_string();

        assert!(html.contains("Plan &lt;réseau&gt;"));
        assert!(html.contains("<p>École &amp; Co</p>"));
        assert!(html.contains("<p>École &amp; Co - Réseaux télécoms</p>"));
        assert!(!html.contains("<réseau>"));
    }

    #[test]
    fn test_breakdown_section_is_optional() {
        let snapshot = snapshot(ParameterSet::defaults(NetworkType::Optical), ReportMetadata::default());
        assert!(!Report::new(&snapshot).to_string().contains("Détail du Calcul"));

        let detail = breakdown(&snapshot.parameters, &DimensioningConstants::default());
        let html = Report::new(&snapshot).with_breakdown(detail).to_string();
        assert!(html.contains("Détail du Calcul"));
        assert!(html.contains("<tr><td>total loss (dB)</td><td>11.00</td></tr>"));
    }

    #[test]
    fn test_file_name_and_write() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = snapshot(ParameterSet::defaults(NetworkType::Microwave), ReportMetadata::default());
        let report = Report::new(&snapshot);

        assert_eq!(report.file_name(), "rapport_HERTZIEN_1749983400000.html");
        let path = report.write_to(dir.path()).unwrap();
        let written = std::fs::read_to_string(path).unwrap();
        assert_eq!(written, report.to_string());
    }
}
