use super::layout;
use crate::types::catalog::{Catalog, ProductCategory};
use crate::utilities::helpers::escape_html;
use std::fmt::Write;

// unit and bulk pricing shown under each baked good, keyed by product id
const BAKED_PRICING: [(&str, &str, &str); 4] = [
    ("cupcakes", "$1.25 each", "$7 for 6 / $14 for 12"),
    ("brownies", "$0.75 each", "$4 for 6 / $8 for 12"),
    ("strawberries", "$0.75 each", ""),
    ("tiramisu", "$2.50 each", ""),
];

const CTA: &str = "<a class=\"cta\" href=\"/order\">Place an Order</a>";

pub fn render_landing(catalog: &Catalog) -> String {
    let mut body = String::new();

    let _ = write!(
        body,
        "<header><strong>Curls &amp; Cupcakes</strong> \
<nav><a href=\"#services\">Services</a> <a href=\"#baked\">Baked Goods</a> <a href=\"#contact\">Contact</a></nav> {}</header>\n\
<section><p>Beautiful Hair. Delightful Treats.</p><h1>Curls and Cupcakes</h1>\
<p>Expert hairstyling and handcrafted baked goods that bring joy to every occasion.</p>{}</section>\n",
        CTA, CTA
    );

    body.push_str("<section id=\"services\"><h2>Hair Services</h2><ul>\n");
    for product in catalog.products_in(ProductCategory::Hair) {
        let _ = writeln!(body, "<li>{}</li>", escape_html(&product.name));
    }
    body.push_str("</ul><p><em>All products are supplied for your convenience, but you're welcome to bring your own favorites.</em></p></section>\n");

    body.push_str("<section id=\"baked\"><h2>Baked Goods</h2><ul>\n");
    for product in catalog.products_in(ProductCategory::Baked) {
        let _ = write!(body, "<li><strong>{}</strong>", escape_html(&product.name));
        if let Some((_, each, bulk)) = BAKED_PRICING.iter().find(|(id, _, _)| *id == product.id) {
            let _ = write!(body, " {}", escape_html(each));
            if !bulk.is_empty() {
                let _ = write!(body, " <small>{}</small>", escape_html(bulk));
            }
        }
        body.push_str("</li>\n");
    }
    body.push_str("</ul><p><em>We can handle large orders for all our baked goods.</em></p></section>\n");

    if !catalog.cupcake_flavors.is_empty() {
        let flavors: Vec<String> = catalog.cupcake_flavors.iter().map(|f| escape_html(f)).collect();
        let _ = writeln!(body, "<p>Cupcake flavors: {}</p>", flavors.join(", "));
    }

    body.push_str("<section id=\"contact\"><h2>Contact</h2><p>Call or text (469) 982-4237.</p></section>\n");

    layout("Curls & Cupcakes", &body)
}
