//! Report builders behind the CSV / text / HTML ("PDF") export buttons.
//!
//! Everything here produces strings; triggering the browser download lives
//! in the frontend.

use crate::dashboards::d400_sales_metrics::{CategorySlice, MonthlyPoint, RegionShare, SalesMetrics};
use crate::domain::a001_product::Product;
use crate::domain::a002_user::User;

/// Rows that can be exported as a table
pub trait Exportable {
    /// Column headers
    fn headers() -> Vec<&'static str>;

    /// Cell values in header order
    fn to_row(&self) -> Vec<String>;
}

impl Exportable for Product {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Name", "Category", "Price", "Stock", "Status", "Sales"]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.category.clone(),
            format!("${:.2}", self.price),
            self.stock.to_string(),
            self.status.to_string(),
            self.sales.to_string(),
        ]
    }
}

impl Exportable for User {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Name", "Email", "Phone", "Role", "Status"]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.role.as_str().to_string(),
            self.status.to_string(),
        ]
    }
}

impl Exportable for MonthlyPoint {
    fn headers() -> Vec<&'static str> {
        vec!["month", "sales", "users", "revenue", "orders"]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.month.clone(),
            self.sales.to_string(),
            self.users.to_string(),
            self.revenue.to_string(),
            self.orders.to_string(),
        ]
    }
}

impl Exportable for CategorySlice {
    fn headers() -> Vec<&'static str> {
        vec!["name", "value", "color"]
    }

    fn to_row(&self) -> Vec<String> {
        vec![self.name.clone(), self.value.to_string(), self.color.clone()]
    }
}

impl Exportable for RegionShare {
    fn headers() -> Vec<&'static str> {
        vec!["region", "sales", "percentage"]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.region.clone(),
            self.sales.to_string(),
            format!("{}%", self.percentage),
        ]
    }
}

/// One titled table of a report
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSection {
    pub heading: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ExportSection {
    pub fn from_rows<T: Exportable>(heading: &str, items: &[T]) -> Self {
        Self {
            heading: heading.to_string(),
            headers: T::headers().into_iter().map(String::from).collect(),
            rows: items.iter().map(Exportable::to_row).collect(),
        }
    }

    /// Two-column key/value table
    pub fn key_values(heading: &str, pairs: Vec<(&str, String)>) -> Self {
        Self {
            heading: heading.to_string(),
            headers: vec!["key".to_string(), "value".to_string()],
            rows: pairs
                .into_iter()
                .map(|(k, v)| vec![k.to_string(), v])
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportDocument {
    pub title: String,
    /// Generation timestamp, already formatted
    pub generated_at: String,
    pub sections: Vec<ExportSection>,
}

impl ExportDocument {
    pub fn single<T: Exportable>(title: &str, generated_at: &str, items: &[T]) -> Self {
        Self {
            title: title.to_string(),
            generated_at: generated_at.to_string(),
            sections: vec![ExportSection::from_rows(title, items)],
        }
    }

    /// Summary, monthly, category and region tables for the analytics page
    pub fn analytics_report(title: &str, generated_at: &str, metrics: &SalesMetrics) -> Self {
        let summary = ExportSection::key_values(
            "Summary",
            vec![
                ("totalSales", metrics.total_orders.to_string()),
                ("totalRevenue", format!("{:.2}", metrics.total_revenue)),
                ("newUsers", metrics.active_users.to_string()),
                ("avgOrder", format!("{:.2}", metrics.average_order)),
                ("totalOrders", metrics.total_orders.to_string()),
            ],
        );
        Self {
            title: title.to_string(),
            generated_at: generated_at.to_string(),
            sections: vec![
                summary,
                ExportSection::from_rows("Monthly", &metrics.monthly),
                ExportSection::from_rows("Categories", &metrics.categories),
                ExportSection::from_rows("Regions", &metrics.regions),
            ],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|s| s.rows.is_empty())
    }
}

/// `;`-separated CSV with a UTF-8 BOM so spreadsheet apps pick the right encoding
pub fn to_csv(section: &ExportSection) -> String {
    let mut csv = String::new();
    csv.push('\u{FEFF}');
    csv.push_str(&join_csv(&section.headers));
    csv.push('\n');
    for row in &section.rows {
        csv.push_str(&join_csv(row));
        csv.push('\n');
    }
    csv
}

fn join_csv(cells: &[String]) -> String {
    cells
        .iter()
        .map(|cell| escape_csv_cell(cell))
        .collect::<Vec<_>>()
        .join(";")
}

/// Quote cells containing the separator, quotes or line breaks
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// Plain text report with space-padded columns
pub fn to_text(doc: &ExportDocument) -> String {
    let mut out = String::new();
    out.push_str(&doc.title);
    out.push('\n');
    out.push_str(&"=".repeat(doc.title.chars().count()));
    out.push('\n');
    out.push_str(&format!("Generated: {}\n", doc.generated_at));

    for section in &doc.sections {
        out.push('\n');
        out.push_str(&section.heading);
        out.push('\n');
        out.push_str(&"-".repeat(section.heading.chars().count()));
        out.push('\n');

        let mut widths: Vec<usize> = section.headers.iter().map(|h| h.chars().count()).collect();
        for row in &section.rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(cell.chars().count());
                }
            }
        }

        out.push_str(&pad_row(&section.headers, &widths));
        for row in &section.rows {
            out.push_str(&pad_row(row, &widths));
        }
    }
    out
}

fn pad_row(cells: &[String], widths: &[usize]) -> String {
    let line = cells
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let width = widths.get(i).copied().unwrap_or(0);
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ");
    format!("{}\n", line.trim_end())
}

/// Printable HTML document; the browser's print dialog turns it into a PDF
pub fn to_html(doc: &ExportDocument, lang: &str) -> String {
    let mut body = String::new();
    for section in &doc.sections {
        body.push_str(&format!("<h2>{}</h2>\n<table>\n<thead><tr>", escape_html(&section.heading)));
        for header in &section.headers {
            body.push_str(&format!("<th>{}</th>", escape_html(header)));
        }
        body.push_str("</tr></thead>\n<tbody>\n");
        for row in &section.rows {
            body.push_str("<tr>");
            for cell in row {
                body.push_str(&format!("<td>{}</td>", escape_html(cell)));
            }
            body.push_str("</tr>\n");
        }
        body.push_str("</tbody>\n</table>\n");
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"{lang}\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
<style>body{{font-family:sans-serif;margin:2rem}}table{{border-collapse:collapse;width:100%;margin-bottom:1.5rem}}\
th,td{{border:1px solid #ddd;padding:6px 8px;text-align:left}}th{{background:#f3f4f6}}</style>\n\
</head>\n<body>\n<h1>{title}</h1>\n<p>Generated: {generated}</p>\n{body}</body>\n</html>\n",
        lang = escape_html(lang),
        title = escape_html(&doc.title),
        generated = escape_html(&doc.generated_at),
        body = body,
    )
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_sales_metrics::compute_metrics;
    use crate::domain::a001_product::ProductId;
    use crate::domain::common::RecordStatus;

    fn product(name: &str) -> Product {
        Product {
            id: ProductId(1),
            name: name.to_string(),
            category: "Accessories".into(),
            price: 39.9,
            stock: 0,
            status: RecordStatus::Inactive,
            image: String::new(),
            sales: 421,
        }
    }

    #[test]
    fn test_csv_escaping() {
        let section = ExportSection::from_rows("Products", &[product("Hub; \"Pro\"")]);
        let csv = to_csv(&section);
        assert!(csv.starts_with('\u{FEFF}'));
        let lines: Vec<&str> = csv.trim_start_matches('\u{FEFF}').lines().collect();
        assert_eq!(lines[0], "ID;Name;Category;Price;Stock;Status;Sales");
        assert_eq!(lines[1], "1;\"Hub; \"\"Pro\"\"\";Accessories;$39.90;0;inactive;421");
    }

    #[test]
    fn test_text_columns_are_aligned() {
        let doc = ExportDocument::single("Products", "2024-10-01", &[product("USB-C Hub")]);
        let text = to_text(&doc);
        assert!(text.starts_with("Products\n========\nGenerated: 2024-10-01\n"));
        assert!(text.contains("ID  Name       Category"));
        assert!(text.contains("1   USB-C Hub  Accessories"));
    }

    #[test]
    fn test_html_escapes_content() {
        let doc = ExportDocument::single("A <b> report", "now", &[product("x & y")]);
        let html = to_html(&doc, "en-US");
        assert!(html.contains("<title>A &lt;b&gt; report</title>"));
        assert!(html.contains("<td>x &amp; y</td>"));
        assert!(html.contains("<html lang=\"en-US\">"));
    }

    #[test]
    fn test_analytics_report_sections() {
        let metrics = compute_metrics(&[], &[], &[]);
        let doc = ExportDocument::analytics_report("Analytics", "now", &metrics);
        let headings: Vec<_> = doc.sections.iter().map(|s| s.heading.as_str()).collect();
        assert_eq!(headings, vec!["Summary", "Monthly", "Categories", "Regions"]);
        assert_eq!(doc.sections[0].rows[1], vec!["totalRevenue".to_string(), "0.00".to_string()]);
        assert!(!doc.is_empty());
    }

    #[test]
    fn test_empty_document() {
        let doc = ExportDocument::single::<Product>("Products", "now", &[]);
        assert!(doc.is_empty());
    }
}
