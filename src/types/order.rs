use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DeliveryMethod {
    #[serde(rename = "Delivery")]
    Delivery,
    #[serde(rename = "Pick up")]
    PickUp,
}

impl DeliveryMethod {
    pub const ALL: [DeliveryMethod; 2] = [DeliveryMethod::Delivery, DeliveryMethod::PickUp];

    pub fn from_label(label: &str) -> Option<DeliveryMethod> {
        DeliveryMethod::ALL.into_iter().find(|method| method.to_string() == label)
    }
}

impl ToString for DeliveryMethod {
    fn to_string(&self) -> String {
        match self {
            DeliveryMethod::Delivery => String::from("Delivery"),
            DeliveryMethod::PickUp => String::from("Pick up"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentMethod {
    #[serde(rename = "Cash on Delivery")]
    CashOnDelivery,
    #[serde(rename = "Zelle")]
    Zelle,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 2] = [PaymentMethod::CashOnDelivery, PaymentMethod::Zelle];

    pub fn from_label(label: &str) -> Option<PaymentMethod> {
        PaymentMethod::ALL.into_iter().find(|method| method.to_string() == label)
    }
}

impl ToString for PaymentMethod {
    fn to_string(&self) -> String {
        match self {
            PaymentMethod::CashOnDelivery => String::from("Cash on Delivery"),
            PaymentMethod::Zelle => String::from("Zelle"),
        }
    }
}

/// A validated order request, exactly as it travels to the order endpoint.
///
/// `preferred_date` serializes as `YYYY-MM-DD`; absent optional fields are
/// omitted from the JSON body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub customer_name: String,
    pub customer_phone: String,
    pub delivery_method: DeliveryMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<String>,
    pub products: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(default)]
    pub cupcake_flavors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
    pub payment_method: PaymentMethod,
    pub preferred_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_image_url: Option<String>,
}

/// Lenient shape of an order before validation. Every field may be missing
/// so that the validator, not the deserializer, reports what is wrong.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderDraft {
    pub customer_name: String,
    pub customer_phone: String,
    pub delivery_method: Option<DeliveryMethod>,
    pub delivery_address: Option<String>,
    pub products: Vec<String>,
    pub quantity: Option<String>,
    pub cupcake_flavors: Vec<String>,
    pub additional_notes: Option<String>,
    pub payment_method: Option<PaymentMethod>,
    pub preferred_date: Option<NaiveDate>,
    pub preferred_time: Option<String>,
    pub reference_image_url: Option<String>,
}

/// The order page's `<form>` as a browser posts it
/// (`application/x-www-form-urlencoded`). Checkbox groups arrive as repeated
/// keys and unanswered radio groups are left out entirely.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderFormFields {
    pub customer_name: String,
    pub customer_phone: String,
    pub delivery_method: Option<String>,
    pub delivery_address: String,
    pub products: Vec<String>,
    pub quantity: String,
    pub cupcake_flavors: Vec<String>,
    pub additional_notes: String,
    pub payment_method: Option<String>,
    pub preferred_date: String,
    pub preferred_time: String,
    pub reference_image_url: String,
}

/// An accepted order as handed to the delivery sink.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub id: String,
    pub received_at: DateTime<Utc>,
    #[serde(flatten)]
    pub order: OrderRequest,
}
