#[derive(Debug)]
pub enum APIMessages {
    // Generic
    InternalServerError,
    NotFound,
    // Catalog
    Catalog(CatalogMessages),
    // Orders
    Order(OrderMessages),
}

#[derive(Debug)]
pub enum CatalogMessages {
    Found,
}

#[derive(Debug)]
pub enum OrderMessages {
    Created,
    InvalidPayload,
    Invalid,
    DeliveryFailed,
}

impl ToString for APIMessages {
    fn to_string(&self) -> String {
        match self {
            APIMessages::InternalServerError => "generic.internal_server_error".to_string(),
            APIMessages::NotFound => "generic.not_found".to_string(),
            APIMessages::Catalog(catalog_message) => catalog_message.to_string(),
            APIMessages::Order(order_message) => order_message.to_string(),
        }
    }
}

impl ToString for CatalogMessages {
    fn to_string(&self) -> String {
        match self {
            CatalogMessages::Found => "catalog.found".to_string(),
        }
    }
}

impl ToString for OrderMessages {
    fn to_string(&self) -> String {
        match self {
            OrderMessages::Created => "order.created".to_string(),
            OrderMessages::InvalidPayload => "order.invalid_payload".to_string(),
            OrderMessages::Invalid => "order.invalid".to_string(),
            OrderMessages::DeliveryFailed => "order.delivery_failed".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_messages_use_their_own_keys() {
        assert_eq!(APIMessages::Order(OrderMessages::Invalid).to_string(), "order.invalid");
        assert_eq!(APIMessages::Catalog(CatalogMessages::Found).to_string(), "catalog.found");
        assert_eq!(APIMessages::NotFound.to_string(), "generic.not_found");
        assert_eq!(APIMessages::InternalServerError.to_string(), "generic.internal_server_error");
    }
}
