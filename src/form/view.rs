use crate::form::validation::FieldErrors;
use crate::types::catalog::ProductCategory;
use crate::types::order::{DeliveryMethod, PaymentMethod};
use chrono::NaiveDate;

pub const SUBMIT_LABEL: &str = "Place Order";
pub const SUBMITTING_LABEL: &str = "Submitting...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub value: String,
    pub label: String,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductGroupView {
    pub category: ProductCategory,
    pub title: String,
    pub options: Vec<OptionView>,
}

/// Everything needed to draw the order form in its current state.
///
/// Conditional inputs are always present so a page can reveal them without
/// a round trip; the `*_visible` flags say whether they apply right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub customer_name: String,
    pub customer_phone: String,
    pub delivery_method: Option<DeliveryMethod>,
    pub delivery_address: String,
    pub delivery_address_visible: bool,
    pub product_groups: Vec<ProductGroupView>,
    pub quantity: String,
    pub flavor_options: Vec<OptionView>,
    pub cupcake_flavors_visible: bool,
    pub preferred_date: Option<NaiveDate>,
    pub preferred_date_label: String,
    pub preferred_time: String,
    pub payment_method: Option<PaymentMethod>,
    pub additional_notes: String,
    pub reference_image_url: String,
    pub errors: FieldErrors,
    pub submit_label: &'static str,
    pub submit_disabled: bool,
}

impl FormView {
    pub fn shows_delivery_address(&self) -> bool {
        self.delivery_address_visible
    }

    pub fn shows_cupcake_flavors(&self) -> bool {
        self.cupcake_flavors_visible
    }
}
