//! Card and billing form state plus the tokenization payload.
use crate::constants::NEW_CARD_SENTINEL;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Raw card fields typed by the customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFields {
    pub number: String,
    pub expiry_month: String,
    pub expiry_year: String,
    pub cvc: String,
}

/// Billing name and address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingAddress {
    pub name: String,
    pub address1: String,
    pub address2: String,
    pub address3: String,
    pub city: String,
    pub county: String,
    pub postcode: String,
    pub country: String,
}

/// Editable card inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardField {
    Number,
    ExpiryMonth,
    ExpiryYear,
    Cvc,
}

/// Editable billing inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressField {
    Name,
    Address1,
    Address2,
    Address3,
    City,
    County,
    Postcode,
    Country,
}

impl CardFields {
    #[must_use]
    pub fn field(&self, field: CardField) -> &str {
        match field {
            CardField::Number => &self.number,
            CardField::ExpiryMonth => &self.expiry_month,
            CardField::ExpiryYear => &self.expiry_year,
            CardField::Cvc => &self.cvc,
        }
    }
}

impl BillingAddress {
    #[must_use]
    pub fn field(&self, field: AddressField) -> &str {
        match field {
            AddressField::Name => &self.name,
            AddressField::Address1 => &self.address1,
            AddressField::Address2 => &self.address2,
            AddressField::Address3 => &self.address3,
            AddressField::City => &self.city,
            AddressField::County => &self.county,
            AddressField::Postcode => &self.postcode,
            AddressField::Country => &self.country,
        }
    }
}

/// Card the customer wants to pay with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ChosenCard {
    /// The page named no card and the customer has not picked one.
    #[default]
    Unset,
    NewCard,
    Stored(String),
}

impl ChosenCard {
    /// Interpret a card chooser value.
    ///
    /// Only the `card_new` sentinel selects a new card; empty or missing
    /// values leave the choice unset.
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => Self::Unset,
            Some(NEW_CARD_SENTINEL) => Self::NewCard,
            Some(card) => Self::Stored(card.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unset => "",
            Self::NewCard => NEW_CARD_SENTINEL,
            Self::Stored(card) => card,
        }
    }

    #[must_use]
    pub const fn is_new(&self) -> bool {
        matches!(self, Self::NewCard)
    }
}

impl fmt::Display for ChosenCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ChosenCard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unset => serializer.serialize_none(),
            card => serializer.serialize_str(card.as_str()),
        }
    }
}

impl<'de> Deserialize<'de> for ChosenCard {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(Self::parse(raw.as_deref()))
    }
}

/// Payload handed to the card tokenization service.
///
/// Field names follow the processor's card object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDetails {
    pub number: String,
    pub name: String,
    pub exp_month: String,
    pub exp_year: String,
    pub cvc: String,
    pub address_line1: String,
    pub address_line2: String,
    pub address_city: String,
    pub address_state: String,
    pub address_zip: String,
    pub address_country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
}

/// Error object returned by the tokenization service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenError {
    pub message: String,
    #[serde(default, rename = "type")]
    pub error_type: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

/// Tokenization response: `{ id }` on success or `{ error: { message } }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub error: Option<TokenError>,
}

impl TokenResponse {
    #[must_use]
    pub fn token(id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            error: None,
        }
    }

    #[must_use]
    pub fn failure(message: &str) -> Self {
        Self {
            id: None,
            error: Some(TokenError {
                message: message.to_string(),
                error_type: None,
                code: None,
            }),
        }
    }

    /// Token id, or the message explaining why there is none.
    ///
    /// # Errors
    ///
    /// Returns the processor's message when tokenization failed, or a generic
    /// message when the response carried neither a token nor an error.
    pub fn into_result(self) -> Result<String, String> {
        if let Some(error) = self.error {
            return Err(error.message);
        }
        self.id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| String::from("The payment processor did not return a token."))
    }
}

/// Card and billing inputs of one basket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentForm {
    pub card: CardFields,
    pub address: BillingAddress,
    seed_address: BillingAddress,
    stored_card: Option<String>,
    chosen_card: ChosenCard,
    billing_address: bool,
    additional_card: bool,
}

impl PaymentForm {
    /// Form prefilled with the stored billing address.
    #[must_use]
    pub fn new(seed_address: BillingAddress, chosen_card: ChosenCard) -> Self {
        Self {
            card: CardFields::default(),
            address: seed_address.clone(),
            seed_address,
            stored_card: match &chosen_card {
                ChosenCard::Stored(card) => Some(card.clone()),
                ChosenCard::Unset | ChosenCard::NewCard => None,
            },
            chosen_card,
            billing_address: true,
            additional_card: true,
        }
    }

    #[must_use]
    pub const fn chosen_card(&self) -> &ChosenCard {
        &self.chosen_card
    }

    /// Card reference the page was seeded with, if any.
    #[must_use]
    pub fn stored_card(&self) -> Option<&str> {
        self.stored_card.as_deref()
    }

    /// Whether the new-card panel is shown.
    #[must_use]
    pub const fn additional_card(&self) -> bool {
        self.additional_card
    }

    pub fn set_additional_card(&mut self, shown: bool) {
        self.additional_card = shown;
    }

    #[must_use]
    pub const fn billing_address(&self) -> bool {
        self.billing_address
    }

    /// Switch cards; choosing a new card reveals the card panel.
    pub fn choose_card(&mut self, card: ChosenCard) {
        self.additional_card = card.is_new();
        self.chosen_card = card;
    }

    /// Toggle between the stored billing address and a blank one.
    ///
    /// Unticking blanks every address line (the billing name stays);
    /// ticking restores the stored address.
    pub fn set_billing_address(&mut self, use_stored: bool) {
        self.billing_address = use_stored;
        let source = if use_stored {
            self.seed_address.clone()
        } else {
            BillingAddress::default()
        };
        self.address = BillingAddress {
            name: std::mem::take(&mut self.address.name),
            ..source
        };
    }

    pub fn set_card_field(&mut self, field: CardField, value: String) {
        let slot = match field {
            CardField::Number => &mut self.card.number,
            CardField::ExpiryMonth => &mut self.card.expiry_month,
            CardField::ExpiryYear => &mut self.card.expiry_year,
            CardField::Cvc => &mut self.card.cvc,
        };
        *slot = value;
    }

    pub fn set_address_field(&mut self, field: AddressField, value: String) {
        let slot = match field {
            AddressField::Name => &mut self.address.name,
            AddressField::Address1 => &mut self.address.address1,
            AddressField::Address2 => &mut self.address.address2,
            AddressField::Address3 => &mut self.address.address3,
            AddressField::City => &mut self.address.city,
            AddressField::County => &mut self.address.county,
            AddressField::Postcode => &mut self.address.postcode,
            AddressField::Country => &mut self.address.country,
        };
        *slot = value;
    }

    /// Tokenization payload for the current inputs.
    #[must_use]
    pub fn card_details(&self, stored_customer: Option<&str>) -> CardDetails {
        let address = &self.address;
        CardDetails {
            number: self.card.number.clone(),
            name: address.name.clone(),
            exp_month: self.card.expiry_month.clone(),
            exp_year: self.card.expiry_year.clone(),
            cvc: self.card.cvc.clone(),
            address_line1: address.address1.clone(),
            address_line2: format!("{} {}", address.address2, address.address3),
            address_city: address.city.clone(),
            address_state: address.county.clone(),
            address_zip: address.postcode.clone(),
            address_country: address.country.clone(),
            customer: stored_customer.map(str::to_string),
        }
    }
}
