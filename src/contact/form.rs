use std::fmt;

use serde::Serialize;

use super::country;
use super::error::ContactError;
use crate::components::notification::Toast;
use crate::config::RESET_DELAY_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Company,
    CountryCode,
    Phone,
    Message,
}

impl Field {
    pub const REQUIRED: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Company => "Company",
            Field::CountryCode => "Country code",
            Field::Phone => "Phone number",
            Field::Message => "Message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

impl Status {
    pub fn can_transition_to(self, next: Status) -> bool {
        matches!(
            (self, next),
            (Status::Idle, Status::Submitting)
                | (Status::Submitting, Status::Submitted)
                | (Status::Submitting, Status::Idle)
                | (Status::Submitted, Status::Idle)
        )
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Idle => "idle",
            Status::Submitting => "submitting",
            Status::Submitted => "submitted",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub company: String,
    pub country_code: String,
    pub phone: String,
    pub message: String,
}

impl Default for ContactFields {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            company: String::new(),
            country_code: country::default_code().to_string(),
            phone: String::new(),
            message: String::new(),
        }
    }
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::CountryCode => &self.country_code,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Company => &mut self.company,
            Field::CountryCode => &mut self.country_code,
            Field::Phone => &mut self.phone,
            Field::Message => &mut self.message,
        }
    }

    /// Country code and number joined by one space, nothing else touched.
    pub fn full_phone(&self) -> String {
        format!("{} {}", self.country_code, self.phone)
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        for field in Field::REQUIRED {
            if self.get(field).trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail(self.email.clone()));
        }
        if !country::is_known(&self.country_code) {
            return Err(ContactError::UnknownCountryCode(self.country_code.clone()));
        }
        Ok(())
    }
}

// Same bar as the browser's type=email check: local@domain, no spaces.
fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// What goes over the wire to Basin, one multipart field per struct field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub message: String,
}

impl From<&ContactFields> for ContactPayload {
    fn from(fields: &ContactFields) -> Self {
        Self {
            name: fields.name.clone(),
            email: fields.email.trim().to_string(),
            company: fields.company.clone(),
            phone: fields.full_phone(),
            message: fields.message.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AfterSubmit {
    pub toast: Toast,
    pub reset_after_ms: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactForm {
    fields: ContactFields,
    status: Status,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.status != Status::Idle
    }

    /// Last write wins. Nothing is checked until submission.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        *self.fields.slot(field) = value.into();
    }

    pub fn set_status(&mut self, next: Status) -> Result<(), ContactError> {
        if !self.status.can_transition_to(next) {
            return Err(ContactError::InvalidTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }

    /// Gate for a submit action. Only an idle form with valid fields moves to
    /// `Submitting` and hands back the payload to send; anything else leaves
    /// the form untouched.
    pub fn begin_submission(&mut self) -> Result<ContactPayload, ContactError> {
        if self.status != Status::Idle {
            return Err(ContactError::Busy(self.status));
        }
        self.fields.validate()?;
        self.set_status(Status::Submitting)?;
        Ok(ContactPayload::from(&self.fields))
    }

    /// Applies the outcome of the request. Fields are kept on failure so the
    /// user can resubmit.
    pub fn finish_submission(&mut self, outcome: &Result<(), ContactError>) -> Result<Status, ContactError> {
        let next = match outcome {
            Ok(()) => Status::Submitted,
            Err(_) => Status::Idle,
        };
        self.set_status(next)?;
        Ok(next)
    }

    /// Settles the in-flight submission and says what the view should do
    /// next: which toast to show and whether to schedule the reset. A result
    /// that arrives when nothing is in flight is refused.
    pub fn on_outcome(&mut self, outcome: &Result<(), ContactError>) -> Result<AfterSubmit, ContactError> {
        self.finish_submission(outcome)?;
        Ok(match outcome {
            Ok(()) => AfterSubmit {
                toast: Toast::success(
                    "Message Sent!",
                    "We've received your message and will get back to you soon.",
                ),
                reset_after_ms: Some(RESET_DELAY_MS),
            },
            Err(_) => AfterSubmit {
                toast: Toast::error(
                    "Submission Failed",
                    "There was an issue sending your message. Please try again later.",
                ),
                reset_after_ms: None,
            },
        })
    }

    /// Fired by the reset timer after a successful submission.
    pub fn reset(&mut self) -> Result<(), ContactError> {
        if self.status != Status::Submitted {
            return Err(ContactError::InvalidTransition {
                from: self.status,
                to: Status::Idle,
            });
        }
        self.fields = ContactFields::default();
        self.status = Status::Idle;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::notification::ToastKind;
    use proptest::prelude::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.update_field(Field::Name, "Jane Doe");
        form.update_field(Field::Email, "jane@x.com");
        form.update_field(Field::Company, "");
        form.update_field(Field::CountryCode, "+1");
        form.update_field(Field::Phone, "5551234");
        form.update_field(Field::Message, "Hello");
        form
    }

    #[test]
    fn starts_idle_with_default_country_code() {
        let form = ContactForm::new();
        assert_eq!(form.status(), Status::Idle);
        assert_eq!(form.fields().country_code, "+91");
        assert!(!form.is_submit_disabled());
    }

    #[test]
    fn submit_moves_to_submitting_and_disables_button() {
        let mut form = filled();
        let payload = form.begin_submission().unwrap();
        assert_eq!(form.status(), Status::Submitting);
        assert!(form.is_submit_disabled());
        assert_eq!(payload.phone, "+1 5551234");
        assert_eq!(payload.company, "");
    }

    #[test]
    fn second_submit_while_in_flight_is_rejected() {
        let mut form = filled();
        assert!(form.begin_submission().is_ok());
        assert_eq!(
            form.begin_submission(),
            Err(ContactError::Busy(Status::Submitting))
        );
    }

    #[test]
    fn success_then_reset_restores_defaults() {
        let mut form = filled();
        form.begin_submission().unwrap();
        assert_eq!(form.finish_submission(&Ok(())), Ok(Status::Submitted));
        assert!(form.is_submit_disabled());

        form.reset().unwrap();
        assert_eq!(form.status(), Status::Idle);
        assert_eq!(form.fields(), &ContactFields::default());
        assert_eq!(form.fields().country_code, "+91");
    }

    #[test]
    fn failure_returns_to_idle_and_keeps_fields() {
        let mut form = filled();
        let before = form.fields().clone();
        form.begin_submission().unwrap();
        let outcome = Err(ContactError::Rejected {
            status: 500,
            reason: "Internal Server Error".to_string(),
        });
        assert_eq!(form.finish_submission(&outcome), Ok(Status::Idle));
        assert_eq!(form.fields(), &before);
        assert!(!form.is_submit_disabled());
    }

    #[test]
    fn reset_only_from_submitted() {
        let mut form = filled();
        assert!(form.reset().is_err());
        form.begin_submission().unwrap();
        assert!(form.reset().is_err());
        assert_eq!(form.fields().name, "Jane Doe");
    }

    #[test]
    fn invalid_transitions_are_refused() {
        let mut form = ContactForm::new();
        assert!(form.set_status(Status::Submitted).is_err());
        assert!(form.set_status(Status::Idle).is_err());
        assert!(form.set_status(Status::Submitting).is_ok());
        assert!(form.set_status(Status::Submitting).is_err());
        assert!(form.set_status(Status::Submitted).is_ok());
        assert!(form.set_status(Status::Submitting).is_err());
    }

    #[test]
    fn finishing_without_a_request_in_flight_fails() {
        let mut form = filled();
        assert!(form.finish_submission(&Ok(())).is_err());
        assert_eq!(form.status(), Status::Idle);
    }

    #[test]
    fn missing_required_fields_block_submission() {
        for field in Field::REQUIRED {
            let mut form = filled();
            form.update_field(field, "   ");
            assert_eq!(form.begin_submission(), Err(ContactError::MissingField(field)));
            assert_eq!(form.status(), Status::Idle);
        }
    }

    #[test]
    fn company_is_optional() {
        let mut form = filled();
        form.update_field(Field::Company, "");
        assert!(form.begin_submission().is_ok());
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut form = filled();
        form.update_field(Field::Email, "jane.x.com");
        assert!(matches!(form.begin_submission(), Err(ContactError::InvalidEmail(_))));

        form.update_field(Field::Email, "jane @x.com");
        assert!(matches!(form.begin_submission(), Err(ContactError::InvalidEmail(_))));
    }

    #[test]
    fn unknown_country_code_is_rejected() {
        let mut form = filled();
        form.update_field(Field::CountryCode, "+0000");
        assert_eq!(
            form.begin_submission(),
            Err(ContactError::UnknownCountryCode("+0000".to_string()))
        );
    }

    #[test]
    fn phone_is_joined_with_a_single_space() {
        let mut fields = ContactFields::default();
        fields.phone = "9876543210".to_string();
        assert_eq!(ContactPayload::from(&fields).phone, "+91 9876543210");
    }

    #[test]
    fn form_is_reusable_after_reset() {
        let mut form = filled();
        form.begin_submission().unwrap();
        form.finish_submission(&Ok(())).unwrap();
        form.reset().unwrap();

        form.update_field(Field::Name, "Sam");
        form.update_field(Field::Email, "sam@example.org");
        form.update_field(Field::Phone, "12345");
        form.update_field(Field::Message, "Again");
        assert!(form.begin_submission().is_ok());
    }

    #[test]
    fn success_shows_sent_toast_and_schedules_reset() {
        let mut form = filled();
        form.begin_submission().unwrap();
        let after = form.on_outcome(&Ok(())).unwrap();
        assert_eq!(after.toast.kind, ToastKind::Success);
        assert_eq!(after.toast.title, "Message Sent!");
        assert_eq!(after.reset_after_ms, Some(RESET_DELAY_MS));
        assert_eq!(form.status(), Status::Submitted);
    }

    #[test]
    fn failure_shows_error_toast_and_schedules_nothing() {
        let mut form = filled();
        let before = form.fields().clone();
        form.begin_submission().unwrap();
        let after = form
            .on_outcome(&Err(ContactError::Transport("offline".to_string())))
            .unwrap();
        assert_eq!(after.toast.kind, ToastKind::Error);
        assert_eq!(after.toast.title, "Submission Failed");
        assert_eq!(after.reset_after_ms, None);
        assert_eq!(form.status(), Status::Idle);
        assert_eq!(form.fields(), &before);
    }

    #[test]
    fn late_outcome_is_refused() {
        let mut form = filled();
        assert!(form.on_outcome(&Ok(())).is_err());
        assert_eq!(form.status(), Status::Idle);

        form.begin_submission().unwrap();
        form.on_outcome(&Ok(())).unwrap();
        assert!(form.on_outcome(&Ok(())).is_err());
        assert_eq!(form.status(), Status::Submitted);
    }

    #[test]
    fn elapsed_reset_clears_form_once() {
        let mut form = filled();
        form.begin_submission().unwrap();
        form.on_outcome(&Ok(())).unwrap();

        form.reset().unwrap();
        assert_eq!(form.fields(), &ContactFields::default());
        assert_eq!(form.status(), Status::Idle);

        // a second timer firing finds nothing to reset
        form.update_field(Field::Name, "Sam");
        assert!(form.reset().is_err());
        assert_eq!(form.fields().name, "Sam");
    }

    #[test]
    fn payload_email_is_trimmed() {
        let mut form = filled();
        form.update_field(Field::Email, " jane@x.com ");
        let payload = form.begin_submission().unwrap();
        assert_eq!(payload.email, "jane@x.com");
    }

    proptest! {
        #[test]
        fn payload_phone_is_code_space_number(
            idx in 0..country::COUNTRY_CODES.len(),
            phone in "[0-9 ()-]{1,15}",
        ) {
            let code = country::COUNTRY_CODES[idx].code;
            let mut form = filled();
            form.update_field(Field::CountryCode, code);
            form.update_field(Field::Phone, phone.clone());
            prop_assume!(!phone.trim().is_empty());
            let payload = form.begin_submission().unwrap();
            prop_assert_eq!(payload.phone, format!("{} {}", code, phone));
        }

        #[test]
        fn failed_submission_leaves_fields_untouched(
            name in "[A-Za-z][A-Za-z ]{0,20}",
            company in "[A-Za-z ]{0,20}",
            message in "[A-Za-z0-9][A-Za-z0-9 .!?]{0,60}",
            status in 400u16..600,
        ) {
            let mut form = filled();
            form.update_field(Field::Name, name);
            form.update_field(Field::Company, company);
            form.update_field(Field::Message, message);
            let before = form.fields().clone();

            form.begin_submission().unwrap();
            let outcome = Err(ContactError::Rejected { status, reason: String::new() });
            form.finish_submission(&outcome).unwrap();

            prop_assert_eq!(form.status(), Status::Idle);
            prop_assert_eq!(form.fields(), &before);
        }

        #[test]
        fn repeated_submits_yield_one_payload(extra in 1usize..10) {
            let mut form = filled();
            let accepted = (0..=extra)
                .filter(|_| form.begin_submission().is_ok())
                .count();
            prop_assert_eq!(accepted, 1);
        }
    }
}
