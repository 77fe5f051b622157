#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use leadgrid::core::Workbook;
use leadgrid::models::{EmailStatus, EnrichmentResult, Record};
use leadgrid::provider::Enricher;
use std::cell::RefCell;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const SAMPLE_CSV: &str = "\
importedData,companyName,companyWebsite,linkedinUrl,emailWaterfall
Acme,Acme,https://acme.com,https://linkedin.com/company/acme,Found
Globex,,,,
Initech,Initech,initech.io,,Not Met
Umbrella,Acme,,,Pending
";

pub const FIXTURES_JSON: &str = r#"{
  "Globex": {
    "companyName": "Globex Corporation",
    "website": "https://globex.com",
    "domain": "globex.com",
    "linkedin": "https://linkedin.com/company/globex",
    "emailStatus": "Found"
  },
  "Initech": {
    "website": "https://initech.io",
    "domain": "initech.io",
    "linkedin": "https://linkedin.com/company/initech",
    "emailStatus": "Not Met"
  }
}"#;

pub fn lg() -> Command {
    cargo_bin_cmd!("leadgrid")
}

/// Unique path inside the system temp dir; any existing file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("leadgrid_{}.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn write_temp(name: &str, ext: &str, content: &str) -> String {
    let p = temp_path(name, ext);
    fs::write(&p, content).expect("write temp file");
    p
}

/// Config path that does not exist, so every command runs on defaults.
pub fn no_config(name: &str) -> String {
    temp_path(&format!("{name}_config"), "conf")
}

pub fn record(id: u64, imported: &str, name: &str, website: &str) -> Record {
    let mut r = Record::new(id, imported, "Jan 1, 2024, 9:00 AM");
    r.company_name = name.to_string();
    r.company_website = website.to_string();
    r
}

pub fn result(domain: &str, status: EmailStatus) -> EnrichmentResult {
    EnrichmentResult {
        company_name: None,
        website: format!("https://{domain}"),
        domain: domain.to_string(),
        linkedin: format!("https://linkedin.com/company/{domain}"),
        email_status: status,
    }
}

pub fn fixed_clock() -> chrono::NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(2024, 3, 5)
        .and_then(|d| d.and_hms_opt(15, 7, 0))
        .expect("valid date")
}

/// Workbook with the given rows appended in order (ids 1..=n).
pub fn workbook_with(rows: Vec<Record>) -> Workbook {
    let mut wb = Workbook::new().with_clock(fixed_clock);
    wb.import_records(rows);
    wb
}

/// Enricher answering from a map and recording every query it receives.
#[derive(Default)]
pub struct MapEnricher {
    pub answers: HashMap<String, EnrichmentResult>,
    pub calls: RefCell<Vec<String>>,
}

impl MapEnricher {
    pub fn with(answers: Vec<(&str, EnrichmentResult)>) -> Self {
        Self {
            answers: answers
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl Enricher for MapEnricher {
    fn enrich(&self, query: &str) -> Option<EnrichmentResult> {
        self.calls.borrow_mut().push(query.to_string());
        self.answers.get(query).cloned()
    }
}
