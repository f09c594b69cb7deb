pub mod landing;
pub mod order;

use crate::utilities::helpers::escape_html;

const STYLE: &str = "body{font-family:system-ui,sans-serif;max-width:48rem;margin:0 auto;padding:1.5rem;line-height:1.5}\
.cta{display:inline-block;background:#ec4899;color:#fff;padding:.6rem 1.4rem;border-radius:.4rem;text-decoration:none}\
.error{color:#dc2626;font-size:.875rem}\
.toast{padding:.75rem 1rem;border-radius:.4rem;margin:1rem 0}.toast-success{background:#dcfce7}.toast-error{background:#fee2e2}label{display:block}fieldset{border:0;padding:0;margin:1.5rem 0}";

pub(crate) fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
<title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape_html(title),
        STYLE,
        body
    )
}
