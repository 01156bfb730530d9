//! "Request a Home Visit" form model.
//!
//! The form collects input but has no submission endpoint. The only logic
//! is required-field marking.

use std::fmt;

/// Services offered in the form's dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    HomeNursing,
    Physiotherapy,
    ElderlyCare,
    PatientAttendant,
    MotherBaby,
    SpecialNeeds,
}

impl ServiceKind {
    /// Dropdown order.
    pub const ALL: [ServiceKind; 6] = [
        ServiceKind::HomeNursing,
        ServiceKind::Physiotherapy,
        ServiceKind::ElderlyCare,
        ServiceKind::PatientAttendant,
        ServiceKind::MotherBaby,
        ServiceKind::SpecialNeeds,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ServiceKind::HomeNursing => "Home Nursing Care",
            ServiceKind::Physiotherapy => "Physiotherapy",
            ServiceKind::ElderlyCare => "Elderly Care",
            ServiceKind::PatientAttendant => "Patient Attendant",
            ServiceKind::MotherBaby => "Mother & Baby Care",
            ServiceKind::SpecialNeeds => "Special Needs Care",
        }
    }

    /// Inverse of [`ServiceKind::label`]. The "Select Service" placeholder
    /// and anything unknown map to `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fields of the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingField {
    Name,
    Phone,
    Address,
    Service,
    PreferredTime,
    Message,
}

impl BookingField {
    pub const ALL: [BookingField; 6] = [
        BookingField::Name,
        BookingField::Phone,
        BookingField::Address,
        BookingField::Service,
        BookingField::PreferredTime,
        BookingField::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BookingField::Name => "Name",
            BookingField::Phone => "Phone",
            BookingField::Address => "Address",
            BookingField::Service => "Required Service",
            BookingField::PreferredTime => "Preferred Time",
            BookingField::Message => "Additional Message",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, BookingField::Message)
    }
}

/// What the visitor has typed so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingDraft {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub service: Option<ServiceKind>,
    /// `HH:MM` as produced by `<input type="time">`.
    pub preferred_time: String,
    pub message: String,
}

impl BookingDraft {
    fn is_filled(&self, field: BookingField) -> bool {
        match field {
            BookingField::Name => !self.name.trim().is_empty(),
            BookingField::Phone => !self.phone.trim().is_empty(),
            BookingField::Address => !self.address.trim().is_empty(),
            BookingField::Service => self.service.is_some(),
            BookingField::PreferredTime => !self.preferred_time.trim().is_empty(),
            BookingField::Message => !self.message.trim().is_empty(),
        }
    }

    /// Required fields still empty, in form order.
    pub fn missing_required(&self) -> Vec<BookingField> {
        BookingField::ALL
            .into_iter()
            .filter(|field| field.is_required() && !self.is_filled(*field))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_required().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn labels_round_trip() {
        for kind in ServiceKind::ALL {
            assert_eq!(ServiceKind::from_label(kind.label()), Some(kind));
        }
    }

    #[test]
    fn placeholder_is_no_service() {
        assert_eq!(ServiceKind::from_label("Select Service"), None);
    }

    #[test]
    fn empty_draft_misses_all_required() {
        let draft = BookingDraft::default();
        assert_eq!(
            draft.missing_required(),
            vec![
                BookingField::Name,
                BookingField::Phone,
                BookingField::Address,
                BookingField::Service,
                BookingField::PreferredTime,
            ]
        );
    }

    #[test]
    fn whitespace_counts_as_missing() {
        let draft = BookingDraft {
            name: "   ".into(),
            phone: "98765 43210".into(),
            address: "12 Park Road".into(),
            service: Some(ServiceKind::ElderlyCare),
            preferred_time: "09:30".into(),
            ..Default::default()
        };
        assert_eq!(draft.missing_required(), vec![BookingField::Name]);
    }

    #[test]
    fn message_is_optional() {
        let draft = BookingDraft {
            name: "Priya Sharma".into(),
            phone: "98765 43210".into(),
            address: "12 Park Road".into(),
            service: Some(ServiceKind::Physiotherapy),
            preferred_time: "17:00".into(),
            message: String::new(),
        };
        assert!(draft.is_complete());
    }
}
