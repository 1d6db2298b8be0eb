//! The shipped sample dataset

use super::types::{Classification, Record, RecordId};

#[allow(clippy::too_many_arguments)]
fn entry(
    id: u64,
    person: &str,
    role: &str,
    document_type: &str,
    date: &str,
    summary: &str,
    classification: Classification,
    connections: &[&str],
) -> Record {
    Record {
        id: RecordId::new(id),
        person: person.to_string(),
        role: role.to_string(),
        document_type: document_type.to_string(),
        date: date.to_string(),
        summary: summary.to_string(),
        classification,
        connections: connections.iter().map(|c| c.to_string()).collect(),
    }
}

/// The twelve case-file records shipped with the browser, in display order
pub fn sample_records() -> Vec<Record> {
    use Classification::*;

    vec![
        entry(
            1,
            "Ghislaine Maxwell",
            "Associate",
            "Deposition Transcript",
            "2016-04-22",
            "Testimony regarding recruitment activities and travel logs between 1999-2005.",
            PartiallyRedacted,
            &["Jeffrey Epstein", "Virginia Giuffre"],
        ),
        entry(
            2,
            "Virginia Giuffre",
            "Victim/Witness",
            "Civil Complaint",
            "2015-01-02",
            "Initial filing detailing allegations against multiple high-profile individuals.",
            Unsealed,
            &["Ghislaine Maxwell", "Prince Andrew", "Alan Dershowitz"],
        ),
        entry(
            3,
            "Prince Andrew",
            "Named Individual",
            "Flight Manifest",
            "2001-02-19",
            "Private jet travel records documenting trips to Caribbean locations.",
            Declassified,
            &["Jeffrey Epstein", "Virginia Giuffre"],
        ),
        entry(
            4,
            "Alan Dershowitz",
            "Named Individual",
            "Legal Motion",
            "2015-04-07",
            "Motion to intervene and strike allegations from court record.",
            Unsealed,
            &["Virginia Giuffre", "Jeffrey Epstein"],
        ),
        entry(
            5,
            "Bill Clinton",
            "Named Individual",
            "Flight Log Entry",
            "2002-09-21",
            "Multiple entries in flight manifests for Lolita Express aircraft.",
            Declassified,
            &["Jeffrey Epstein", "Ghislaine Maxwell"],
        ),
        entry(
            6,
            "Jean-Luc Brunel",
            "Associate",
            "Witness Statement",
            "2019-08-12",
            "Modeling agency connections and recruitment network documentation.",
            PartiallyRedacted,
            &["Jeffrey Epstein", "Ghislaine Maxwell"],
        ),
        entry(
            7,
            "Sarah Kellen",
            "Employee",
            "Address Book Entry",
            "2009-03-15",
            "Personal assistant scheduling records and contact information.",
            Declassified,
            &["Jeffrey Epstein", "Ghislaine Maxwell", "Nadia Marcinkova"],
        ),
        entry(
            8,
            "Leslie Wexner",
            "Financial Associate",
            "Financial Records",
            "2008-06-30",
            "Power of attorney documentation and property transfer records.",
            PartiallyRedacted,
            &["Jeffrey Epstein"],
        ),
        entry(
            9,
            "Nadia Marcinkova",
            "Named Individual",
            "Deposition Reference",
            "2016-05-03",
            "Referenced in multiple victim depositions regarding property activities.",
            Unsealed,
            &["Jeffrey Epstein", "Sarah Kellen"],
        ),
        entry(
            10,
            "Donald Trump",
            "Named Individual",
            "Deposition Mention",
            "2016-04-22",
            "Referenced in Maxwell deposition regarding social connections.",
            Declassified,
            &["Jeffrey Epstein", "Ghislaine Maxwell"],
        ),
        entry(
            11,
            "Kevin Spacey",
            "Named Individual",
            "Flight Record",
            "2002-08-22",
            "Africa trip flight manifest alongside Clinton Foundation members.",
            Declassified,
            &["Jeffrey Epstein", "Bill Clinton"],
        ),
        entry(
            12,
            "Courtney Wild",
            "Victim/Witness",
            "Victim Impact Statement",
            "2019-07-15",
            "Statement submitted during federal prosecution detailing abuse timeline.",
            Unsealed,
            &["Jeffrey Epstein", "Sarah Kellen"],
        ),
    ]
}
