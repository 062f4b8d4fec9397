//! Plain-text README layout for an upload's copyright notices.

const SEPARATOR: &str = "=======================================================================================================================";
const BREAK: &str = "\r\n\r\n";

/// Render the package banner followed by the notices list, or the
/// `<Copyright notices>` placeholder when there are none.
#[must_use]
pub fn render_readme(package_name: &str, notices: &[String]) -> String {
    let mut out = String::new();
    out.push_str(SEPARATOR);
    out.push_str(BREAK);
    out.push_str(package_name);
    out.push_str(BREAK);

    if notices.is_empty() {
        out.push_str("<Copyright notices>");
        out.push_str(BREAK);
        out.push_str("<notices>");
    } else {
        out.push_str("Copyright notices");
        out.push_str(BREAK);
        for notice in notices {
            out.push_str(notice);
            out.push_str("\r\n");
        }
    }
    out
}
