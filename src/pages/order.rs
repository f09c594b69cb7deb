use super::layout;
use crate::form::toast::{Toast, ToastKind};
use crate::form::validation::Field;
use crate::form::view::{FormView, OptionView};
use crate::types::order::{DeliveryMethod, PaymentMethod};
use crate::utilities::helpers::escape_html;
use std::fmt::Write;

fn error_line(out: &mut String, view: &FormView, field: Field) {
    if let Some(message) = view.errors.get(field) {
        let _ = writeln!(out, "<p class=\"error\">{}</p>", escape_html(message));
    }
}

fn text_input(out: &mut String, view: &FormView, field: Field, label: &str, kind: &str, value: &str, placeholder: &str) {
    let _ = writeln!(
        out,
        "<label for=\"{name}\">{label}</label>\n<input id=\"{name}\" name=\"{name}\" type=\"{kind}\" value=\"{value}\" placeholder=\"{placeholder}\">",
        name = field.as_str(),
        label = escape_html(label),
        kind = kind,
        value = escape_html(value),
        placeholder = escape_html(placeholder),
    );
    error_line(out, view, field);
}

fn textarea(out: &mut String, field: Field, label: &str, value: &str, placeholder: &str, rows: u8) {
    let _ = writeln!(
        out,
        "<label for=\"{name}\">{label}</label>\n<textarea id=\"{name}\" name=\"{name}\" rows=\"{rows}\" placeholder=\"{placeholder}\">{value}</textarea>",
        name = field.as_str(),
        label = escape_html(label),
        rows = rows,
        placeholder = escape_html(placeholder),
        value = escape_html(value),
    );
}

fn radio<T: ToString + PartialEq>(out: &mut String, field: Field, options: &[T], selected: Option<T>) {
    for option in options {
        let value = escape_html(&option.to_string());
        let checked = if selected.as_ref() == Some(option) { " checked" } else { "" };
        let _ = writeln!(
            out,
            "<label><input type=\"radio\" name=\"{}\" value=\"{}\"{}> {}</label>",
            field.as_str(),
            value,
            checked,
            value
        );
    }
}

fn checkboxes(out: &mut String, field: Field, options: &[OptionView]) {
    for option in options {
        let _ = writeln!(
            out,
            "<label><input type=\"checkbox\" name=\"{}\" value=\"{}\"{}> {}</label>",
            field.as_str(),
            escape_html(&option.value),
            if option.checked { " checked" } else { "" },
            escape_html(&option.label)
        );
    }
}

// Reveals the address and flavor sections as choices change. Without it the
// server still re-renders them after a post.
const CONDITIONAL_SECTIONS_SCRIPT: &str = "<script>\n\
(function () {\n\
  var form = document.getElementById('order-form');\n\
  function sync() {\n\
    var method = form.querySelector('input[name=\"deliveryMethod\"]:checked');\n\
    document.getElementById('delivery-address-section').hidden = !(method && method.value === 'Delivery');\n\
    var cupcakes = form.querySelector('input[name=\"products\"][value=\"cupcakes\"]');\n\
    document.getElementById('cupcake-flavors-section').hidden = !(cupcakes && cupcakes.checked);\n\
  }\n\
  form.addEventListener('change', sync);\n\
  form.addEventListener('submit', function () {\n\
    var button = form.querySelector('button[type=\"submit\"]');\n\
    button.disabled = true;\n\
    button.textContent = 'Submitting...';\n\
  });\n\
  sync();\n\
})();\n\
</script>\n";

fn hidden_unless(visible: bool) -> &'static str {
    if visible {
        ""
    } else {
        " hidden"
    }
}

fn toast_line(out: &mut String, toast: &Toast) {
    let class = match toast.kind {
        ToastKind::Success => "toast toast-success",
        ToastKind::Error => "toast toast-error",
    };
    let _ = writeln!(out, "<div class=\"{}\" role=\"status\">{}</div>", class, escape_html(&toast.message));
}

/// HTML for the order form in the state described by `view`, with any
/// pending notifications above it. The form posts back to `/order`.
pub fn render_order_page(view: &FormView, owner_name: &str, toasts: &[Toast]) -> String {
    let mut body = String::new();

    let _ = writeln!(
        body,
        "<h1>Place Your Order</h1>\n<p>Fill out the form below and {} will get back to you shortly!</p>",
        escape_html(owner_name)
    );
    for toast in toasts {
        toast_line(&mut body, toast);
    }
    body.push_str("<form id=\"order-form\" method=\"post\" action=\"/order\">\n");

    body.push_str("<fieldset><h2>Customer Information</h2>\n");
    text_input(&mut body, view, Field::CustomerName, "Full Name *", "text", &view.customer_name, "Your name");
    text_input(&mut body, view, Field::CustomerPhone, "Phone Number *", "tel", &view.customer_phone, "(469) 982-4237");
    body.push_str("</fieldset>\n");

    body.push_str("<fieldset><h2>Delivery Method *</h2>\n");
    radio(&mut body, Field::DeliveryMethod, &DeliveryMethod::ALL, view.delivery_method);
    error_line(&mut body, view, Field::DeliveryMethod);
    let _ = writeln!(
        body,
        "<div id=\"delivery-address-section\"{}>",
        hidden_unless(view.shows_delivery_address())
    );
    textarea(&mut body, Field::DeliveryAddress, "Delivery Address *", &view.delivery_address, "Street address, city, state, ZIP", 3);
    error_line(&mut body, view, Field::DeliveryAddress);
    body.push_str("</div>\n</fieldset>\n");

    body.push_str("<fieldset><h2>Select Products *</h2>\n");
    for group in &view.product_groups {
        let _ = writeln!(body, "<h3>{}</h3>", escape_html(&group.title));
        checkboxes(&mut body, Field::Products, &group.options);
    }
    error_line(&mut body, view, Field::Products);
    text_input(&mut body, view, Field::Quantity, "Quantity (if applicable)", "text", &view.quantity, "e.g., 12 cupcakes, 6 brownies");
    body.push_str("</fieldset>\n");

    let _ = writeln!(
        body,
        "<fieldset id=\"cupcake-flavors-section\"{}><h2>Cupcake Flavors</h2>",
        hidden_unless(view.shows_cupcake_flavors())
    );
    checkboxes(&mut body, Field::CupcakeFlavors, &view.flavor_options);
    error_line(&mut body, view, Field::CupcakeFlavors);
    body.push_str("</fieldset>\n");

    body.push_str("<fieldset><h2>Scheduling *</h2>\n");
    let _ = writeln!(
        body,
        "<label for=\"{name}\">Preferred Date *</label>\n<input id=\"{name}\" name=\"{name}\" type=\"date\" value=\"{value}\" aria-label=\"{label}\">",
        name = Field::PreferredDate.as_str(),
        value = view
            .preferred_date
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        label = escape_html(&view.preferred_date_label),
    );
    error_line(&mut body, view, Field::PreferredDate);
    text_input(&mut body, view, Field::PreferredTime, "Preferred Time", "time", &view.preferred_time, "");
    body.push_str("</fieldset>\n");

    body.push_str("<fieldset><h2>Payment Method *</h2>\n");
    radio(&mut body, Field::PaymentMethod, &PaymentMethod::ALL, view.payment_method);
    error_line(&mut body, view, Field::PaymentMethod);
    body.push_str("</fieldset>\n");

    body.push_str("<fieldset><h2>Additional Information</h2>\n");
    textarea(&mut body, Field::AdditionalNotes, "Additional Notes", &view.additional_notes, "Any special requests or details...", 4);
    text_input(&mut body, view, Field::ReferenceImageUrl, "Reference Image URL (optional)", "url", &view.reference_image_url, "https://...");
    body.push_str("<p><small>Upload your image to a service like Imgur and paste the link here</small></p>\n</fieldset>\n");

    let _ = writeln!(
        body,
        "<button type=\"submit\"{}>{}</button>\n</form>",
        if view.submit_disabled { " disabled" } else { "" },
        escape_html(view.submit_label)
    );
    body.push_str(CONDITIONAL_SECTIONS_SCRIPT);

    layout("Place Your Order", &body)
}
