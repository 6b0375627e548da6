//! Record renderer.
//!
//! [`render`] is a pure function of the held record and the visibility flags.
//! It produces display-ready strings; the front end decides how to draw them.

use crate::format::{calculate_days_between_dates, format_host_names, format_long_date};
use crate::types::WhoisRecord;

pub const DOMAIN_SECTION_TITLE: &str = "Domain Information";
pub const CONTACT_SECTION_TITLE: &str = "Contact Information";
pub const DOMAIN_HIDDEN_PLACEHOLDER: &str = "Domain Information Table Hidden";
pub const CONTACT_HIDDEN_PLACEHOLDER: &str = "Contact Information Table Hidden";

pub const DOMAIN_HEADERS: [&str; 6] = [
    "Domain Name",
    "Registrar",
    "Registration Date",
    "Expiration Date",
    "Estimated Domain Age",
    "Hostnames",
];

pub const CONTACT_HEADERS: [&str; 4] = [
    "Registrant Name",
    "Technical Contact Name",
    "Administrative Contact Name",
    "Contact Email",
];

/// Which of the two tables are hidden. Both are visible by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityFlags {
    pub registry_hidden: bool,
    pub contact_hidden: bool,
}

impl VisibilityFlags {
    pub fn toggle_registry(&mut self) {
        self.registry_hidden = !self.registry_hidden;
    }

    pub fn toggle_contact(&mut self) {
        self.contact_hidden = !self.contact_hidden;
    }
}

/// Registry facts, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainRow {
    pub domain_name: String,
    pub registrar: String,
    pub registration_date: String,
    pub expiration_date: String,
    /// Days between creation and expiration.
    pub estimated_age: String,
    pub host_names: String,
}

impl DomainRow {
    /// Cells in [`DOMAIN_HEADERS`] order.
    pub fn cells(&self) -> [&str; 6] {
        [
            self.domain_name.as_str(),
            self.registrar.as_str(),
            self.registration_date.as_str(),
            self.expiration_date.as_str(),
            self.estimated_age.as_str(),
            self.host_names.as_str(),
        ]
    }
}

/// Contact facts, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRow {
    pub registrant_name: String,
    pub technical_contact_name: String,
    pub administrative_contact_name: String,
    pub contact_email: String,
}

impl ContactRow {
    /// Cells in [`CONTACT_HEADERS`] order.
    pub fn cells(&self) -> [&str; 4] {
        [
            self.registrant_name.as_str(),
            self.technical_contact_name.as_str(),
            self.administrative_contact_name.as_str(),
            self.contact_email.as_str(),
        ]
    }
}

/// One collapsible section: its table, or the hidden placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionView<R> {
    Table(R),
    Hidden,
}

impl<R> SectionView<R> {
    pub fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub fn table(&self) -> Option<&R> {
        match self {
            Self::Table(row) => Some(row),
            Self::Hidden => None,
        }
    }
}

/// Everything below the input form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordView {
    /// No record held yet: only the form is shown.
    Empty,
    Record {
        domain: SectionView<DomainRow>,
        contact: SectionView<ContactRow>,
    },
}

/// Build the display model for the held record.
pub fn render(record: Option<&WhoisRecord>, flags: VisibilityFlags) -> RecordView {
    let Some(record) = record else {
        return RecordView::Empty;
    };

    let domain = if flags.registry_hidden {
        SectionView::Hidden
    } else {
        SectionView::Table(domain_row(record))
    };
    let contact = if flags.contact_hidden {
        SectionView::Hidden
    } else {
        SectionView::Table(contact_row(record))
    };

    RecordView::Record { domain, contact }
}

fn domain_row(record: &WhoisRecord) -> DomainRow {
    let registry = &record.registry_data;
    DomainRow {
        domain_name: registry.domain_name.clone(),
        registrar: registry.registrar_name.clone(),
        registration_date: format_long_date(&registry.created_date),
        expiration_date: format_long_date(&registry.expires_date),
        estimated_age: calculate_days_between_dates(
            &registry.created_date,
            &registry.expires_date,
        ),
        host_names: format_host_names(&registry.name_servers.host_names),
    }
}

fn contact_row(record: &WhoisRecord) -> ContactRow {
    ContactRow {
        registrant_name: record.registrant.name.clone(),
        technical_contact_name: record.technical_contact.name.clone(),
        administrative_contact_name: record.administrative_contact.name.clone(),
        contact_email: record.contact_email.clone(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::types::{Contact, NameServers, RegistryData};

    fn sample_record() -> WhoisRecord {
        WhoisRecord {
            registry_data: RegistryData {
                domain_name: "example.com".to_string(),
                registrar_name: "Example Registrar, Inc.".to_string(),
                created_date: "2020-01-01".to_string(),
                expires_date: "2020-01-11".to_string(),
                name_servers: NameServers {
                    host_names: vec!["ns1.example.com".to_string(), "ns2.example.com".to_string()],
                },
            },
            registrant: Contact {
                name: "Jane Registrant".to_string(),
            },
            technical_contact: Contact {
                name: "Tech Desk".to_string(),
            },
            administrative_contact: Contact {
                name: "Admin Desk".to_string(),
            },
            contact_email: "hostmaster@example.com".to_string(),
        }
    }

    #[test]
    fn test_no_record_renders_empty() {
        assert_eq!(render(None, VisibilityFlags::default()), RecordView::Empty);
        let hidden = VisibilityFlags {
            registry_hidden: true,
            contact_hidden: true,
        };
        assert_eq!(render(None, hidden), RecordView::Empty);
    }

    #[test]
    fn test_record_renders_both_tables_by_default() {
        let record = sample_record();
        let RecordView::Record { domain, contact } = render(Some(&record), VisibilityFlags::default())
        else {
            panic!("expected a record view");
        };

        let domain = domain.table().unwrap();
        assert_eq!(domain.domain_name, "example.com");
        assert_eq!(domain.registrar, "Example Registrar, Inc.");
        assert_eq!(domain.registration_date, "January 1, 2020");
        assert_eq!(domain.expiration_date, "January 11, 2020");
        assert_eq!(domain.estimated_age, "10 Days");
        assert_eq!(domain.host_names, "ns1.example.com, ns2.exam...");

        let contact = contact.table().unwrap();
        assert_eq!(
            contact.cells(),
            [
                "Jane Registrant",
                "Tech Desk",
                "Admin Desk",
                "hostmaster@example.com"
            ]
        );
    }

    #[test]
    fn test_toggling_one_section_leaves_the_other() {
        let record = sample_record();
        let mut flags = VisibilityFlags::default();
        flags.toggle_registry();

        let RecordView::Record { domain, contact } = render(Some(&record), flags) else {
            panic!("expected a record view");
        };
        assert!(domain.is_hidden());
        assert!(!contact.is_hidden());

        flags.toggle_registry();
        flags.toggle_contact();
        let RecordView::Record { domain, contact } = render(Some(&record), flags) else {
            panic!("expected a record view");
        };
        assert!(!domain.is_hidden());
        assert!(contact.is_hidden());
    }

    #[test]
    fn test_render_does_not_touch_record() {
        let record = sample_record();
        let before = record.clone();
        let mut flags = VisibilityFlags::default();
        for _ in 0..3 {
            flags.toggle_contact();
            let _ = render(Some(&record), flags);
        }
        assert_eq!(record, before);
        assert!(flags.contact_hidden);
    }

    #[test]
    fn test_unparseable_dates_render_sentinels() {
        let mut record = sample_record();
        record.registry_data.created_date = String::new();
        let RecordView::Record { domain, .. } = render(Some(&record), VisibilityFlags::default())
        else {
            panic!("expected a record view");
        };
        let domain = domain.table().unwrap();
        assert_eq!(domain.registration_date, "Invalid Date");
        assert_eq!(domain.estimated_age, "NaN Days");
    }

    #[test]
    fn test_headers_match_cells() {
        let record = sample_record();
        let row = domain_row(&record);
        assert_eq!(row.cells().len(), DOMAIN_HEADERS.len());
        assert_eq!(contact_row(&record).cells().len(), CONTACT_HEADERS.len());
    }
}
