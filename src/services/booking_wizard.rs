use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::bookings::{CreateBookingRequest, GuestDetails};
use crate::models::property::Room;

pub const DEFAULT_BED_OPTION: &str = "2 separate beds";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    Amenities,
    Personal,
    Payment,
    Submitted,
}

impl WizardStep {
    /// 1-based position shown in the progress bar. `Submitted` has none.
    pub fn number(&self) -> Option<u8> {
        match self {
            WizardStep::Amenities => Some(1),
            WizardStep::Personal => Some(2),
            WizardStep::Payment => Some(3),
            WizardStep::Submitted => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Amenities => "Property amenities",
            WizardStep::Personal => "Personal data",
            WizardStep::Payment => "Payment details",
            WizardStep::Submitted => "Submitted",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    MissingFields(Vec<&'static str>),
    InvalidTransition(WizardStep),
}

impl std::fmt::Display for WizardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WizardError::MissingFields(fields) => {
                write!(f, "Missing required fields: {}", fields.join(", "))
            }
            WizardError::InvalidTransition(step) => {
                write!(f, "No transition available from \"{}\"", step.title())
            }
        }
    }
}

impl std::error::Error for WizardError {}

/// What the booking is for. Supplied by the page that opens the wizard.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingContext {
    pub property_id: String,
    pub room_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PaymentDetails {
    pub card_name: String,
    pub card_number: String,
    pub card_expiry: String,
    pub card_cvc: String,
}

/// Every field the wizard collects, across all steps.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingForm {
    pub bed_option: String,
    pub breakfast_included: bool,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub payment: PaymentDetails,
}

impl BookingForm {
    pub fn for_room(room: &Room) -> Self {
        Self {
            bed_option: DEFAULT_BED_OPTION.to_string(),
            breakfast_included: room.breakfast_included,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            payment: PaymentDetails::default(),
        }
    }

    /// Split a full name on spaces: the first word is the first name, the rest the last name.
    pub fn set_full_name(&mut self, full_name: &str) {
        let mut names = full_name.split(' ');
        self.first_name = names.next().unwrap_or_default().to_string();
        self.last_name = names.collect::<Vec<_>>().join(" ");
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Presence check only; formats are not validated.
    fn missing_fields(&self, step: WizardStep) -> Vec<&'static str> {
        let required: Vec<(&'static str, &str)> = match step {
            WizardStep::Personal => vec![
                ("firstName", self.first_name.as_str()),
                ("lastName", self.last_name.as_str()),
                ("email", self.email.as_str()),
                ("phone", self.phone.as_str()),
            ],
            WizardStep::Payment => vec![
                ("cardName", self.payment.card_name.as_str()),
                ("cardNumber", self.payment.card_number.as_str()),
                ("cardExpiry", self.payment.card_expiry.as_str()),
                ("cardCVC", self.payment.card_cvc.as_str()),
            ],
            WizardStep::Amenities | WizardStep::Submitted => vec![],
        };

        required
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect()
    }
}

/// Outcome of [`BookingWizard::next`].
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    Step(WizardStep),
    Submit(CreateBookingRequest),
}

/// Three-step booking form: amenities, personal data, payment.
///
/// Field values survive navigation in both directions. Leaving the payment
/// step yields the request to send to `POST /api/bookings`; card details stay here.
#[derive(Debug, Clone)]
pub struct BookingWizard {
    step: WizardStep,
    context: BookingContext,
    form: BookingForm,
}

impl BookingWizard {
    pub fn new(context: BookingContext, room: &Room) -> Self {
        Self {
            step: WizardStep::Amenities,
            context,
            form: BookingForm::for_room(room),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn context(&self) -> &BookingContext {
        &self.context
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut BookingForm {
        &mut self.form
    }

    pub fn next(&mut self) -> Result<Advance, WizardError> {
        let missing = self.form.missing_fields(self.step);
        if !missing.is_empty() {
            return Err(WizardError::MissingFields(missing));
        }

        match self.step {
            WizardStep::Amenities => {
                self.step = WizardStep::Personal;
                Ok(Advance::Step(self.step))
            }
            WizardStep::Personal => {
                self.step = WizardStep::Payment;
                Ok(Advance::Step(self.step))
            }
            WizardStep::Payment => {
                self.step = WizardStep::Submitted;
                Ok(Advance::Submit(self.request()))
            }
            WizardStep::Submitted => Err(WizardError::InvalidTransition(self.step)),
        }
    }

    /// One step back; stays put on the first step and after submission.
    pub fn back(&mut self) -> WizardStep {
        self.step = match self.step {
            WizardStep::Personal => WizardStep::Amenities,
            WizardStep::Payment => WizardStep::Personal,
            other => other,
        };
        self.step
    }

    /// The submitted request did not go through; reopen the payment step.
    pub fn submission_failed(&mut self) -> Result<WizardStep, WizardError> {
        if self.step != WizardStep::Submitted {
            return Err(WizardError::InvalidTransition(self.step));
        }
        self.step = WizardStep::Payment;
        Ok(self.step)
    }

    fn request(&self) -> CreateBookingRequest {
        CreateBookingRequest {
            property_id: self.context.property_id.clone(),
            room_id: self.context.room_id.clone(),
            check_in: self.context.check_in,
            check_out: self.context.check_out,
            guests: Some(self.context.guests),
            details: GuestDetails {
                bed_option: Some(self.form.bed_option.clone()),
                breakfast_included: Some(self.form.breakfast_included),
                first_name: Some(self.form.first_name.clone()),
                last_name: Some(self.form.last_name.clone()),
                email: Some(self.form.email.clone()),
                phone: Some(self.form.phone.clone()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room() -> Room {
        Room {
            id: "1-2".to_string(),
            name: "Superior Twin Room".to_string(),
            size: "26 m²".to_string(),
            capacity: 2,
            bed_type: "2 single beds".to_string(),
            price: 150.0,
            image: String::new(),
            breakfast_included: true,
            refundable: true,
        }
    }

    fn wizard() -> BookingWizard {
        BookingWizard::new(
            BookingContext {
                property_id: "1".to_string(),
                room_id: "1-2".to_string(),
                check_in: "2022-12-09".parse().unwrap(),
                check_out: "2022-12-12".parse().unwrap(),
                guests: 2,
            },
            &room(),
        )
    }

    fn fill_personal(wizard: &mut BookingWizard) {
        let form = wizard.form_mut();
        form.set_full_name("Maria Lost");
        form.email = "maria@example.com".to_string();
        form.phone = "+123 001 234 567".to_string();
    }

    fn fill_payment(wizard: &mut BookingWizard) {
        wizard.form_mut().payment = PaymentDetails {
            card_name: "Maria Lost".to_string(),
            card_number: "4242 4242 4242 4242".to_string(),
            card_expiry: "12/25".to_string(),
            card_cvc: "123".to_string(),
        };
    }

    #[test]
    fn test_defaults_come_from_room() {
        let wizard = wizard();
        assert_eq!(wizard.step(), WizardStep::Amenities);
        assert_eq!(wizard.form().bed_option, DEFAULT_BED_OPTION);
        assert!(wizard.form().breakfast_included);
    }

    #[test]
    fn test_full_name_split() {
        let mut form = BookingForm::for_room(&room());
        form.set_full_name("Maria de la Cruz");
        assert_eq!(form.first_name, "Maria");
        assert_eq!(form.last_name, "de la Cruz");

        form.set_full_name("Cher");
        assert_eq!(form.first_name, "Cher");
        assert_eq!(form.last_name, "");
        assert_eq!(form.full_name(), "Cher ");
    }

    #[test]
    fn test_personal_step_requires_fields() {
        let mut wizard = wizard();
        assert_eq!(wizard.next().unwrap(), Advance::Step(WizardStep::Personal));

        wizard.form_mut().set_full_name("Maria");
        let err = wizard.next().unwrap_err();
        assert_eq!(
            err,
            WizardError::MissingFields(vec!["lastName", "email", "phone"])
        );
        assert_eq!(wizard.step(), WizardStep::Personal);
    }

    #[test]
    fn test_full_flow_emits_request() {
        let mut wizard = wizard();
        wizard.form_mut().bed_option = "1 king size bed".to_string();
        wizard.next().unwrap();
        fill_personal(&mut wizard);
        assert_eq!(wizard.next().unwrap(), Advance::Step(WizardStep::Payment));

        assert!(matches!(wizard.next(), Err(WizardError::MissingFields(_))));
        fill_payment(&mut wizard);

        let request = match wizard.next().unwrap() {
            Advance::Submit(request) => request,
            other => panic!("expected submission, got {:?}", other),
        };
        assert_eq!(wizard.step(), WizardStep::Submitted);
        assert_eq!(request.property_id, "1");
        assert_eq!(request.room_id, "1-2");
        assert_eq!(request.guests, Some(2));
        assert_eq!(request.details.first_name.as_deref(), Some("Maria"));
        assert_eq!(request.details.last_name.as_deref(), Some("Lost"));
        assert_eq!(request.details.bed_option.as_deref(), Some("1 king size bed"));
        assert_eq!(request.details.breakfast_included, Some(true));

        assert_eq!(
            wizard.next(),
            Err(WizardError::InvalidTransition(WizardStep::Submitted))
        );
    }

    #[test]
    fn test_back_keeps_values() {
        let mut wizard = wizard();
        wizard.next().unwrap();
        fill_personal(&mut wizard);
        wizard.next().unwrap();

        assert_eq!(wizard.back(), WizardStep::Personal);
        assert_eq!(wizard.back(), WizardStep::Amenities);
        assert_eq!(wizard.back(), WizardStep::Amenities);
        assert_eq!(wizard.form().email, "maria@example.com");

        wizard.next().unwrap();
        assert_eq!(wizard.next().unwrap(), Advance::Step(WizardStep::Payment));
    }

    #[test]
    fn test_failed_submission_returns_to_payment() {
        let mut wizard = wizard();
        assert!(wizard.submission_failed().is_err());

        wizard.next().unwrap();
        fill_personal(&mut wizard);
        wizard.next().unwrap();
        fill_payment(&mut wizard);
        wizard.next().unwrap();

        assert_eq!(wizard.submission_failed().unwrap(), WizardStep::Payment);
        assert_eq!(wizard.form().payment.card_cvc, "123");
        assert!(matches!(wizard.next().unwrap(), Advance::Submit(_)));
    }

    #[test]
    fn test_submitted_request_leaves_card_details_out() {
        let mut wizard = wizard();
        wizard.next().unwrap();
        fill_personal(&mut wizard);
        wizard.next().unwrap();
        fill_payment(&mut wizard);

        let Advance::Submit(request) = wizard.next().unwrap() else {
            panic!("payment step should submit");
        };
        let body = serde_json::to_string(&request).unwrap();
        assert!(!body.contains("card"));
        assert!(!body.contains("4242"));
        assert!(body.contains("\"email\":\"maria@example.com\""));
    }

    #[test]
    fn test_step_numbers() {
        assert_eq!(WizardStep::Amenities.number(), Some(1));
        assert_eq!(WizardStep::Payment.number(), Some(3));
        assert_eq!(WizardStep::Submitted.number(), None);
        assert_eq!(WizardStep::Personal.title(), "Personal data");
    }

    #[test]
    fn test_error_messages_name_fields_and_step() {
        assert_eq!(
            WizardError::MissingFields(vec!["email", "phone"]).to_string(),
            "Missing required fields: email, phone"
        );
        assert_eq!(
            WizardError::InvalidTransition(WizardStep::Submitted).to_string(),
            "No transition available from \"Submitted\""
        );
    }
}
