pub mod gateway;
pub mod selection;
pub mod toast;
pub mod validation;
pub mod view;

use crate::types::catalog::{Catalog, ProductCategory, CUPCAKES};
use crate::types::order::{DeliveryMethod, OrderDraft, OrderFormFields, OrderRequest, PaymentMethod};
use chrono::NaiveDate;
use gateway::{OrderGateway, SubmitError};
use log::{debug, warn};
use selection::Selection;
use std::{sync::Arc, time::Duration};
use toast::Toast;
use validation::{validate, validate_field, Field, FieldErrors, ValidationPolicy};
use view::{FormView, OptionView, ProductGroupView, SUBMITTING_LABEL, SUBMIT_LABEL};

const GENERIC_FAILURE: &str = "Failed to submit order. Please try again or contact us directly.";

#[derive(Debug, Clone)]
pub struct FormConfig {
    pub catalog: Arc<Catalog>,
    pub policy: ValidationPolicy,
    pub owner_name: String,
    pub submit_timeout: Duration,
}

impl FormConfig {
    pub fn new(catalog: Arc<Catalog>) -> FormConfig {
        FormConfig {
            catalog,
            policy: ValidationPolicy::default(),
            owner_name: String::from("Aanya"),
            submit_timeout: Duration::from_secs(15),
        }
    }

    pub fn with_policy(mut self, policy: ValidationPolicy) -> FormConfig {
        self.policy = policy;
        self
    }

    pub fn with_owner_name(mut self, owner_name: impl Into<String>) -> FormConfig {
        self.owner_name = owner_name.into();
        self
    }

    pub fn with_submit_timeout(mut self, submit_timeout: Duration) -> FormConfig {
        self.submit_timeout = submit_timeout;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// A previous submission has not finished yet.
    InFlight,
    /// Validation failed; messages are in `OrderForm::errors`.
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Invalid,
    InFlight,
    Placed,
    Failed(SubmitError),
}

/// In-memory state of one order form.
///
/// Nothing is persisted: a successful submission clears the form, a failed
/// one leaves every value in place so the customer can retry.
#[derive(Debug)]
pub struct OrderForm {
    config: FormConfig,
    customer_name: String,
    customer_phone: String,
    delivery_method: Option<DeliveryMethod>,
    delivery_address: String,
    products: Selection,
    quantity: String,
    flavors: Selection,
    additional_notes: String,
    payment_method: Option<PaymentMethod>,
    preferred_date: Option<NaiveDate>,
    preferred_time: String,
    reference_image_url: String,
    errors: FieldErrors,
    attempted: bool,
    submitting: bool,
    toasts: Vec<Toast>,
}

impl OrderForm {
    pub fn new(config: FormConfig) -> OrderForm {
        OrderForm {
            config,
            customer_name: String::new(),
            customer_phone: String::new(),
            delivery_method: None,
            delivery_address: String::new(),
            products: Selection::new(),
            quantity: String::new(),
            flavors: Selection::new(),
            additional_notes: String::new(),
            payment_method: None,
            preferred_date: None,
            preferred_time: String::new(),
            reference_image_url: String::new(),
            errors: FieldErrors::new(),
            attempted: false,
            submitting: false,
            toasts: Vec::new(),
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn set_customer_name(&mut self, value: impl Into<String>) {
        self.customer_name = value.into();
        self.revalidate(Field::CustomerName);
    }

    pub fn set_customer_phone(&mut self, value: impl Into<String>) {
        self.customer_phone = value.into();
        self.revalidate(Field::CustomerPhone);
    }

    pub fn set_delivery_method(&mut self, method: DeliveryMethod) {
        self.delivery_method = Some(method);
        self.revalidate(Field::DeliveryMethod);
        self.revalidate(Field::DeliveryAddress);
    }

    pub fn set_delivery_address(&mut self, value: impl Into<String>) {
        self.delivery_address = value.into();
        self.revalidate(Field::DeliveryAddress);
    }

    pub fn set_quantity(&mut self, value: impl Into<String>) {
        self.quantity = value.into();
    }

    pub fn set_additional_notes(&mut self, value: impl Into<String>) {
        self.additional_notes = value.into();
    }

    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = Some(method);
        self.revalidate(Field::PaymentMethod);
    }

    pub fn set_preferred_date(&mut self, date: Option<NaiveDate>) {
        self.preferred_date = date;
        self.revalidate(Field::PreferredDate);
    }

    pub fn set_preferred_time(&mut self, value: impl Into<String>) {
        self.preferred_time = value.into();
    }

    pub fn set_reference_image_url(&mut self, value: impl Into<String>) {
        self.reference_image_url = value.into();
        self.revalidate(Field::ReferenceImageUrl);
    }

    /// Ids outside the catalog are ignored.
    pub fn toggle_product(&mut self, id: &str) -> bool {
        if !self.config.catalog.contains_product(id) {
            return false;
        }
        let selected = self.products.toggle(id);
        self.revalidate(Field::Products);
        self.revalidate(Field::CupcakeFlavors);
        selected
    }

    pub fn toggle_flavor(&mut self, flavor: &str) -> bool {
        if !self.config.catalog.contains_flavor(flavor) {
            return false;
        }
        let selected = self.flavors.toggle(flavor);
        self.revalidate(Field::CupcakeFlavors);
        selected
    }

    /// Replays a posted `<form>` through the setters. Unknown choices are
    /// dropped, so they surface as the usual "please select" messages.
    pub fn apply(&mut self, fields: OrderFormFields) {
        self.set_customer_name(fields.customer_name);
        self.set_customer_phone(fields.customer_phone);
        if let Some(method) = fields.delivery_method.as_deref().and_then(DeliveryMethod::from_label) {
            self.set_delivery_method(method);
        }
        self.set_delivery_address(fields.delivery_address);
        for id in &fields.products {
            if !self.products.contains(id) {
                self.toggle_product(id);
            }
        }
        self.set_quantity(fields.quantity);
        for flavor in &fields.cupcake_flavors {
            if !self.flavors.contains(flavor) {
                self.toggle_flavor(flavor);
            }
        }
        self.set_additional_notes(fields.additional_notes);
        if let Some(method) = fields.payment_method.as_deref().and_then(PaymentMethod::from_label) {
            self.set_payment_method(method);
        }
        self.set_preferred_date(NaiveDate::parse_from_str(fields.preferred_date.trim(), "%Y-%m-%d").ok());
        self.set_preferred_time(fields.preferred_time);
        self.set_reference_image_url(fields.reference_image_url);
    }

    pub fn shows_delivery_address(&self) -> bool {
        self.delivery_method == Some(DeliveryMethod::Delivery)
    }

    pub fn shows_cupcake_flavors(&self) -> bool {
        self.products.contains(CUPCAKES)
    }

    pub fn products(&self) -> &Selection {
        &self.products
    }

    pub fn flavors(&self) -> &Selection {
        &self.flavors
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn preferred_date(&self) -> Option<NaiveDate> {
        self.preferred_date
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn take_toasts(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.toasts)
    }

    /// The order as the customer has filled it so far. Inputs that are not
    /// shown contribute nothing.
    pub fn draft(&self) -> OrderDraft {
        OrderDraft {
            customer_name: self.customer_name.clone(),
            customer_phone: self.customer_phone.clone(),
            delivery_method: self.delivery_method,
            delivery_address: if self.shows_delivery_address() {
                Some(self.delivery_address.clone())
            } else {
                None
            },
            products: self.products.to_vec(),
            quantity: Some(self.quantity.clone()),
            cupcake_flavors: if self.shows_cupcake_flavors() {
                self.flavors.to_vec()
            } else {
                Vec::new()
            },
            additional_notes: Some(self.additional_notes.clone()),
            payment_method: self.payment_method,
            preferred_date: self.preferred_date,
            preferred_time: Some(self.preferred_time.clone()),
            reference_image_url: Some(self.reference_image_url.clone()),
        }
    }

    // fields are re-checked on change once a submit has been attempted
    fn revalidate(&mut self, field: Field) {
        if !self.attempted {
            return;
        }
        match validate_field(&self.draft(), field, &self.config.catalog, &self.config.policy) {
            Some(message) => self.errors.insert(field, message),
            None => self.errors.remove(field),
        }
    }

    pub fn begin_submit(&mut self) -> Result<OrderRequest, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }
        self.attempted = true;

        match validate(&self.draft(), &self.config.catalog, &self.config.policy) {
            Ok(request) => {
                self.errors.clear();
                self.submitting = true;
                Ok(request)
            }
            Err(errors) => {
                self.errors = errors;
                Err(SubmitBlocked::Invalid)
            }
        }
    }

    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) -> SubmitOutcome {
        self.submitting = false;

        match result {
            Ok(()) => {
                debug!("order placed");
                self.toasts.push(Toast::success(format!(
                    "Order placed successfully! {} will contact you soon.",
                    self.config.owner_name
                )));
                self.reset();
                SubmitOutcome::Placed
            }
            Err(err) => {
                warn!("order submission error: {}", err);
                let message = match err.server_message() {
                    Some(reason) => format!(
                        "Failed to submit order: {}. Please try again or contact us directly.",
                        reason
                    ),
                    None => String::from(GENERIC_FAILURE),
                };
                self.toasts.push(Toast::error(message));
                SubmitOutcome::Failed(err)
            }
        }
    }

    pub async fn submit<G>(&mut self, gateway: &G) -> SubmitOutcome
    where
        G: OrderGateway + ?Sized,
    {
        let request = match self.begin_submit() {
            Ok(request) => request,
            Err(SubmitBlocked::Invalid) => return SubmitOutcome::Invalid,
            Err(SubmitBlocked::InFlight) => return SubmitOutcome::InFlight,
        };

        let result = match tokio::time::timeout(self.config.submit_timeout, gateway.create_order(&request)).await {
            Ok(result) => result,
            Err(_) => Err(SubmitError::Timeout),
        };

        self.finish_submit(result)
    }

    fn reset(&mut self) {
        let config = self.config.clone();
        let toasts = std::mem::take(&mut self.toasts);
        *self = OrderForm::new(config);
        self.toasts = toasts;
    }

    pub fn view(&self) -> FormView {
        let catalog = &self.config.catalog;
        let product_groups = [ProductCategory::Hair, ProductCategory::Baked]
            .into_iter()
            .map(|category| ProductGroupView {
                category,
                title: category.to_string(),
                options: catalog
                    .products_in(category)
                    .map(|product| OptionView {
                        value: product.id.clone(),
                        label: product.name.clone(),
                        checked: self.products.contains(&product.id),
                    })
                    .collect(),
            })
            .collect();

        let flavor_options = catalog
            .cupcake_flavors
            .iter()
            .map(|flavor| OptionView {
                value: flavor.clone(),
                label: flavor.clone(),
                checked: self.flavors.contains(flavor),
            })
            .collect();

        FormView {
            customer_name: self.customer_name.clone(),
            customer_phone: self.customer_phone.clone(),
            delivery_method: self.delivery_method,
            delivery_address: self.delivery_address.clone(),
            delivery_address_visible: self.shows_delivery_address(),
            product_groups,
            quantity: self.quantity.clone(),
            flavor_options,
            cupcake_flavors_visible: self.shows_cupcake_flavors(),
            preferred_date: self.preferred_date,
            preferred_date_label: match self.preferred_date {
                Some(date) => date.format("%B %-d, %Y").to_string(),
                None => String::from("Pick a date"),
            },
            preferred_time: self.preferred_time.clone(),
            payment_method: self.payment_method,
            additional_notes: self.additional_notes.clone(),
            reference_image_url: self.reference_image_url.clone(),
            errors: self.errors.clone(),
            submit_label: self.submit_label(),
            submit_disabled: !self.can_submit(),
        }
    }
}
