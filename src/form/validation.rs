use crate::types::catalog::Catalog;
use crate::types::order::{DeliveryMethod, OrderDraft, OrderRequest};
use crate::utilities::helpers::valid_url;
use std::collections::BTreeMap;

pub const NAME_MIN_LENGTH: usize = 2;
pub const PHONE_MIN_LENGTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    CustomerName,
    CustomerPhone,
    DeliveryMethod,
    DeliveryAddress,
    Products,
    Quantity,
    CupcakeFlavors,
    AdditionalNotes,
    PaymentMethod,
    PreferredDate,
    PreferredTime,
    ReferenceImageUrl,
}

impl Field {
    pub const ALL: [Field; 12] = [
        Field::CustomerName,
        Field::CustomerPhone,
        Field::DeliveryMethod,
        Field::DeliveryAddress,
        Field::Products,
        Field::Quantity,
        Field::CupcakeFlavors,
        Field::AdditionalNotes,
        Field::PaymentMethod,
        Field::PreferredDate,
        Field::PreferredTime,
        Field::ReferenceImageUrl,
    ];

    /// Name of the field on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::CustomerName => "customerName",
            Field::CustomerPhone => "customerPhone",
            Field::DeliveryMethod => "deliveryMethod",
            Field::DeliveryAddress => "deliveryAddress",
            Field::Products => "products",
            Field::Quantity => "quantity",
            Field::CupcakeFlavors => "cupcakeFlavors",
            Field::AdditionalNotes => "additionalNotes",
            Field::PaymentMethod => "paymentMethod",
            Field::PreferredDate => "preferredDate",
            Field::PreferredTime => "preferredTime",
            Field::ReferenceImageUrl => "referenceImageUrl",
        }
    }
}

/// Validation messages keyed by field, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, String>,
}

impl FieldErrors {
    pub fn new() -> FieldErrors {
        FieldErrors {
            errors: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn remove(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }

    pub fn first_message(&self) -> Option<&str> {
        self.errors.values().next().map(String::as_str)
    }

    pub fn to_wire(&self) -> BTreeMap<String, String> {
        self.errors
            .iter()
            .map(|(field, message)| (field.as_str().to_string(), message.clone()))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Reject "Delivery" orders that carry no address.
    pub require_delivery_address: bool,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        ValidationPolicy {
            require_delivery_address: true,
        }
    }
}

fn present(value: &Option<String>) -> Option<String> {
    value
        .as_ref()
        .filter(|v| !v.trim().is_empty())
        .cloned()
}

fn dedup(values: &[String]) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        if !unique.contains(value) {
            unique.push(value.clone());
        }
    }
    unique
}

/// Checks a single field of `draft`, returning its message when invalid.
pub fn validate_field(
    draft: &OrderDraft,
    field: Field,
    catalog: &Catalog,
    policy: &ValidationPolicy,
) -> Option<String> {
    match field {
        Field::CustomerName => {
            if draft.customer_name.trim().chars().count() < NAME_MIN_LENGTH {
                return Some(String::from("Name must be at least 2 characters"));
            }
        }
        Field::CustomerPhone => {
            if draft.customer_phone.trim().chars().count() < PHONE_MIN_LENGTH {
                return Some(String::from("Please enter a valid phone number"));
            }
        }
        Field::DeliveryMethod => {
            if draft.delivery_method.is_none() {
                return Some(String::from("Please choose a delivery method"));
            }
        }
        Field::DeliveryAddress => {
            if policy.require_delivery_address
                && draft.delivery_method == Some(DeliveryMethod::Delivery)
                && present(&draft.delivery_address).is_none()
            {
                return Some(String::from("Please enter a delivery address"));
            }
        }
        Field::Products => {
            if draft.products.is_empty() {
                return Some(String::from("Please select at least one product"));
            }
            if let Some(unknown) = draft.products.iter().find(|id| !catalog.contains_product(id)) {
                return Some(format!("Unknown product: {}", unknown));
            }
        }
        Field::CupcakeFlavors => {
            if let Some(unknown) = draft
                .cupcake_flavors
                .iter()
                .find(|flavor| !catalog.contains_flavor(flavor))
            {
                return Some(format!("Unknown cupcake flavor: {}", unknown));
            }
        }
        Field::PaymentMethod => {
            if draft.payment_method.is_none() {
                return Some(String::from("Please choose a payment method"));
            }
        }
        Field::PreferredDate => {
            if draft.preferred_date.is_none() {
                return Some(String::from("Please pick a date"));
            }
        }
        Field::ReferenceImageUrl => {
            if let Some(url) = present(&draft.reference_image_url) {
                if !valid_url(url.trim()) {
                    return Some(String::from("Please enter a valid URL"));
                }
            }
        }
        Field::Quantity | Field::AdditionalNotes | Field::PreferredTime => {}
    }

    None
}

/// Runs the whole schema and reports every violation at once.
pub fn validate(
    draft: &OrderDraft,
    catalog: &Catalog,
    policy: &ValidationPolicy,
) -> Result<OrderRequest, FieldErrors> {
    let mut errors = FieldErrors::new();
    for field in Field::ALL {
        if let Some(message) = validate_field(draft, field, catalog, policy) {
            errors.insert(field, message);
        }
    }

    let (delivery_method, payment_method, preferred_date) =
        match (draft.delivery_method, draft.payment_method, draft.preferred_date) {
            (Some(delivery), Some(payment), Some(date)) if errors.is_empty() => (delivery, payment, date),
            _ => return Err(errors),
        };

    Ok(OrderRequest {
        customer_name: draft.customer_name.clone(),
        customer_phone: draft.customer_phone.clone(),
        delivery_method,
        delivery_address: present(&draft.delivery_address),
        products: dedup(&draft.products),
        quantity: present(&draft.quantity),
        cupcake_flavors: dedup(&draft.cupcake_flavors),
        additional_notes: present(&draft.additional_notes),
        payment_method,
        preferred_date,
        preferred_time: present(&draft.preferred_time),
        reference_image_url: present(&draft.reference_image_url),
    })
}
