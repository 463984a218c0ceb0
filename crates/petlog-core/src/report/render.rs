//! Print-ready history report and its renderers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::history::{diagnosis_history, sorted_by_date_descending};
use super::ReportResult;
use crate::format::{format_date, format_yen, or_placeholder, PLACEHOLDER};
use crate::models::{Pet, VetVisit};

/// Medical history report for one pet.
///
/// Every display field is pre-formatted; absent values are `-`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryReport {
    pub pet_id: i64,
    pub pet_name: String,
    /// Shown only when known
    pub species: Option<String>,
    /// `YYYY/MM/DD`, shown only when known
    pub birth_date: Option<String>,
    /// `YYYY/MM/DD`
    pub issued_on: String,
    /// Diagnosis table, newest first
    pub diagnoses: Vec<DiagnosisRow>,
    /// Every visit, newest first
    pub visits: Vec<VisitRow>,
}

/// Diagnosis table row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosisRow {
    pub visited_on: String,
    pub diagnosis: String,
    pub hospital_name: String,
}

/// Visit detail card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VisitRow {
    pub visit_id: i64,
    pub visited_on: String,
    /// Formatted yen amount
    pub cost: String,
    pub hospital_name: String,
    pub doctor_name: String,
    pub chief_complaint: String,
    pub diagnosis: String,
    /// Free-form note, omitted from the card when absent
    pub note: Option<String>,
}

impl HistoryReport {
    /// Project a pet and its visits into display rows. Pure; visits may
    /// arrive in any order.
    pub fn build(pet: &Pet, visits: Vec<VetVisit>, issued_on: NaiveDate) -> Self {
        let sorted = sorted_by_date_descending(visits);

        let diagnoses = diagnosis_history(&sorted)
            .into_iter()
            .map(|entry| DiagnosisRow {
                visited_on: format_date(entry.visited_on),
                diagnosis: entry.diagnosis,
                hospital_name: or_placeholder(entry.hospital_name.as_deref()).to_string(),
            })
            .collect();

        let visits = sorted
            .iter()
            .map(|visit| VisitRow {
                visit_id: visit.id,
                visited_on: format_date(visit.visited_on),
                cost: visit
                    .cost_yen
                    .map(format_yen)
                    .unwrap_or_else(|| PLACEHOLDER.to_string()),
                hospital_name: or_placeholder(visit.hospital_name.as_deref()).to_string(),
                doctor_name: or_placeholder(visit.doctor_name.as_deref()).to_string(),
                chief_complaint: or_placeholder(visit.chief_complaint.as_deref()).to_string(),
                diagnosis: or_placeholder(visit.diagnosis_text()).to_string(),
                note: visit
                    .note
                    .as_deref()
                    .map(str::trim)
                    .filter(|n| !n.is_empty())
                    .map(String::from),
            })
            .collect();

        Self {
            pet_id: pet.id,
            pet_name: pet.name.clone(),
            species: pet
                .species
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from),
            birth_date: pet.birth_date.map(format_date),
            issued_on: format_date(issued_on),
            diagnoses,
            visits,
        }
    }

    pub fn title(&self) -> String {
        format!("{}: Medical History", self.pet_name)
    }

    /// Export to JSON.
    pub fn to_json(&self) -> ReportResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Plain text, one section per table.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let title = self.title();

        out.push_str(&title);
        out.push('\n');
        out.push_str(&"=".repeat(title.chars().count()));
        out.push('\n');
        if let Some(species) = &self.species {
            out.push_str(&format!("Species:    {}\n", species));
        }
        if let Some(birth_date) = &self.birth_date {
            out.push_str(&format!("Born:       {}\n", birth_date));
        }
        out.push_str(&format!("Issued:     {}\n", self.issued_on));

        out.push_str("\nDiagnosis History\n-----------------\n");
        if self.diagnoses.is_empty() {
            out.push_str("No diagnoses recorded.\n");
        }
        for row in &self.diagnoses {
            out.push_str(&format!(
                "{}  {}  ({})\n",
                row.visited_on, row.diagnosis, row.hospital_name
            ));
        }

        out.push_str("\nVet Visits\n----------\n");
        if self.visits.is_empty() {
            out.push_str("No vet visits recorded.\n");
        }
        for visit in &self.visits {
            out.push_str(&format!("\n{}  {}\n", visit.visited_on, visit.cost));
            out.push_str(&format!("  Hospital:   {}\n", visit.hospital_name));
            out.push_str(&format!("  Doctor:     {}\n", visit.doctor_name));
            out.push_str(&format!("  Complaint:  {}\n", visit.chief_complaint));
            out.push_str(&format!("  Diagnosis:  {}\n", visit.diagnosis));
            if let Some(note) = &visit.note {
                let note = note.replace('\n', "\n              ");
                out.push_str(&format!("  Note:       {}\n", note));
            }
        }

        out
    }

    /// Standalone HTML document laid out for an A4 page.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        let title = escape_html(&self.title());

        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        html.push_str(&format!("<title>{}</title>\n", title));
        html.push_str(HTML_STYLE);
        html.push_str("</head>\n<body>\n<main class=\"page\">\n");

        html.push_str("<header>\n");
        html.push_str(&format!("<h1>{}</h1>\n", title));
        if let Some(species) = &self.species {
            html.push_str(&format!("<p>Species: {}</p>\n", escape_html(species)));
        }
        if let Some(birth_date) = &self.birth_date {
            html.push_str(&format!("<p>Born: {}</p>\n", escape_html(birth_date)));
        }
        html.push_str(&format!("<p>Issued: {}</p>\n", escape_html(&self.issued_on)));
        html.push_str("</header>\n");

        html.push_str("<section>\n<h2>Diagnosis History</h2>\n");
        if self.diagnoses.is_empty() {
            html.push_str("<p class=\"empty\">No diagnoses recorded.</p>\n");
        } else {
            html.push_str(
                "<table>\n<thead><tr><th>Date</th><th>Diagnosis</th><th>Hospital</th></tr></thead>\n<tbody>\n",
            );
            for row in &self.diagnoses {
                html.push_str(&format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                    escape_html(&row.visited_on),
                    escape_html(&row.diagnosis),
                    escape_html(&row.hospital_name),
                ));
            }
            html.push_str("</tbody>\n</table>\n");
        }
        html.push_str("</section>\n");

        html.push_str("<section>\n<h2>Vet Visits</h2>\n");
        if self.visits.is_empty() {
            html.push_str("<p class=\"empty\">No vet visits recorded.</p>\n");
        }
        for visit in &self.visits {
            html.push_str("<article class=\"visit\">\n");
            html.push_str(&format!(
                "<h3><span>{}</span><span>{}</span></h3>\n<dl>\n",
                escape_html(&visit.visited_on),
                escape_html(&visit.cost),
            ));
            for (label, value) in [
                ("Hospital", &visit.hospital_name),
                ("Doctor", &visit.doctor_name),
                ("Complaint", &visit.chief_complaint),
                ("Diagnosis", &visit.diagnosis),
            ] {
                html.push_str(&format!(
                    "<dt>{}</dt><dd>{}</dd>\n",
                    label,
                    escape_html(value)
                ));
            }
            html.push_str("</dl>\n");
            if let Some(note) = &visit.note {
                html.push_str(&format!("<p class=\"note\">{}</p>\n", escape_html(note)));
            }
            html.push_str("</article>\n");
        }
        html.push_str("</section>\n</main>\n</body>\n</html>\n");

        html
    }
}

const HTML_STYLE: &str = "<style>
@page { size: A4; margin: 15mm; }
body { font-family: sans-serif; font-size: 10.5pt; color: #222; }
.page { width: 180mm; margin: 0 auto; }
header { border-bottom: 1px solid #ccc; margin-bottom: 6mm; }
table { width: 100%; border-collapse: collapse; }
th, td { text-align: left; padding: 2mm; border-bottom: 1px solid #ddd; vertical-align: top; }
.visit { border: 1px solid #ddd; border-radius: 2mm; padding: 3mm; margin-bottom: 3mm; break-inside: avoid; }
.visit h3 { display: flex; justify-content: space-between; margin: 0 0 2mm; }
dl { display: grid; grid-template-columns: 25mm 1fr; margin: 0; }
.note { white-space: pre-wrap; }
.empty { color: #777; }
</style>
";

/// Escape text for HTML element content and attribute values.
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn sample() -> HistoryReport {
        let mut pet = Pet::new(7, "Mugi");
        pet.species = Some("dog".into());
        pet.birth_date = Some(date("2019-04-02"));

        let mut older = VetVisit::new(1, 7, date("2024-01-15"));
        older.hospital_name = Some("Sakura Animal Clinic".into());
        older.diagnosis = Some("Otitis externa".into());
        older.cost_yen = Some(12345);

        let mut newer = VetVisit::new(2, 7, date("2024-03-02"));
        newer.chief_complaint = Some("Vomiting <2 days>".into());
        newer.note = Some("Bland diet & rest".into());

        HistoryReport::build(&pet, vec![older, newer], date("2024-06-01"))
    }

    #[test]
    fn test_build_orders_and_fills_placeholders() {
        let report = sample();
        assert_eq!(report.issued_on, "2024/06/01");
        assert_eq!(report.birth_date.as_deref(), Some("2019/04/02"));

        assert_eq!(report.visits[0].visit_id, 2);
        assert_eq!(report.visits[0].hospital_name, "-");
        assert_eq!(report.visits[0].diagnosis, "-");
        assert_eq!(report.visits[0].cost, "-");
        assert_eq!(report.visits[1].cost, "¥12,345");

        assert_eq!(report.diagnoses.len(), 1);
        assert_eq!(report.diagnoses[0].visited_on, "2024/01/15");
        assert_eq!(report.diagnoses[0].hospital_name, "Sakura Animal Clinic");
    }

    #[test]
    fn test_build_without_optional_pet_fields() {
        let report = HistoryReport::build(&Pet::new(3, "Sora"), vec![], date("2024-06-01"));
        assert!(report.species.is_none());
        assert!(report.birth_date.is_none());
        assert!(report.to_text().contains("No vet visits recorded."));
        assert!(!report.to_text().contains("Species"));
    }

    #[test]
    fn test_html_is_escaped() {
        let html = sample().to_html();
        assert!(html.contains("Vomiting &lt;2 days&gt;"));
        assert!(html.contains("Bland diet &amp; rest"));
        assert!(html.contains("size: A4"));
        assert!(html.contains("<title>Mugi: Medical History</title>"));
    }

    #[test]
    fn test_text_lists_diagnoses() {
        let text = sample().to_text();
        assert!(text.starts_with("Mugi: Medical History\n"));
        assert!(text.contains("2024/01/15  Otitis externa  (Sakura Animal Clinic)"));
        assert!(text.contains("Species:    dog"));
    }

    #[test]
    fn test_json_round_trips() {
        let report = sample();
        let json = report.to_json().unwrap();
        let parsed: HistoryReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }
}
