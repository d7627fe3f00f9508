//! Styled XLSX rendering.
//!
//! Both report variants share one sheet shape: a merged title banner, a
//! blank row, the three metadata rows, a blank row, then bold header rows
//! above the data. Every non-empty cell gets a thin border, and each column
//! is widened to its longest rendered value plus three characters. Empty
//! values are simply not written, so they pick up neither border nor width.

use crate::models::{NsgReport, RouteRecord, RouteTableReport, SecurityRuleRecord, SubnetRecord};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet, XlsxError};
use std::error::Error;
use std::path::Path;

const TITLE_FILL: Color = Color::RGB(0xBDD7EE);
const HEADER_FILL: Color = Color::RGB(0xD9E1F2);

const NSG_COLUMNS: [&str; 9] = [
    "Priority",
    "Direction",
    "RuleName",
    "Port",
    "Protocol",
    "Source",
    "Destination",
    "Access",
    "Description",
];
const ROUTE_COLUMNS: [&str; 4] = ["Name", "Address Prefix", "Next Hop Type", "Next Hop IP Address"];
const SUBNET_COLUMNS: [&str; 4] = ["Name", "Address Range", "Virtual Network", "Security Group"];

/// The cell formats used by both sheets.
struct Styles {
    title: Format,
    label: Format,
    header: Format,
    cell: Format,
}

impl Styles {
    fn new() -> Styles {
        let bordered = Format::new().set_border(FormatBorder::Thin);
        Styles {
            title: bordered
                .clone()
                .set_bold()
                .set_font_size(14)
                .set_background_color(TITLE_FILL)
                .set_align(FormatAlign::Center),
            label: bordered.clone().set_bold(),
            header: bordered
                .clone()
                .set_bold()
                .set_background_color(HEADER_FILL),
            cell: bordered,
        }
    }
}

/// Row cursor plus per-column width tracking for one sheet.
struct SheetCursor {
    row: u32,
    widths: Vec<usize>,
}

impl SheetCursor {
    fn new(columns: usize) -> SheetCursor {
        SheetCursor {
            row: 0,
            widths: vec![0; columns],
        }
    }

    /// Write a string cell unless it is empty, tracking column width.
    fn put(
        &mut self,
        sheet: &mut Worksheet,
        col: u16,
        value: &str,
        format: &Format,
    ) -> Result<(), XlsxError> {
        if value.is_empty() {
            return Ok(());
        }
        self.track(col, value.chars().count());
        sheet.write_string_with_format(self.row, col, value, format)?;
        Ok(())
    }

    /// Write a numeric cell, tracking the width of its rendering.
    fn put_number(
        &mut self,
        sheet: &mut Worksheet,
        col: u16,
        value: i64,
        format: &Format,
    ) -> Result<(), XlsxError> {
        self.track(col, value.to_string().len());
        sheet.write_number_with_format(self.row, col, value as f64, format)?;
        Ok(())
    }

    fn track(&mut self, col: u16, len: usize) {
        let col = col as usize;
        if col < self.widths.len() && len > self.widths[col] {
            self.widths[col] = len;
        }
    }

    fn end_row(&mut self) {
        self.row += 1;
    }

    fn blank_row(&mut self) {
        self.row += 1;
    }

    /// Widen every populated column to its longest value plus padding.
    fn apply_widths(&self, sheet: &mut Worksheet) -> Result<(), XlsxError> {
        for (col, width) in self.widths.iter().enumerate() {
            if *width > 0 {
                sheet.set_column_width(col as u16, (*width + 3) as f64)?;
            }
        }
        Ok(())
    }

    /// Title banner merged across all data columns, then the metadata block.
    fn header_block(
        &mut self,
        sheet: &mut Worksheet,
        title: &str,
        rows: &[(&str, &str)],
        styles: &Styles,
    ) -> Result<(), XlsxError> {
        let last_col = (self.widths.len() - 1) as u16;
        sheet.merge_range(self.row, 0, self.row, last_col, title, &styles.title)?;
        self.track(0, title.chars().count());
        self.end_row();
        self.blank_row();
        for (key, value) in rows {
            self.put(sheet, 0, key, &styles.label)?;
            self.put(sheet, 1, value, &styles.cell)?;
            self.end_row();
        }
        self.blank_row();
        Ok(())
    }

    fn header_row(
        &mut self,
        sheet: &mut Worksheet,
        columns: &[&str],
        styles: &Styles,
    ) -> Result<(), XlsxError> {
        for (i, name) in columns.iter().enumerate() {
            self.put(sheet, i as u16, name, &styles.header)?;
        }
        self.end_row();
        Ok(())
    }
}

/// Render the NSG report onto a worksheet. Returns the number of rows used.
fn render_nsg_sheet(
    sheet: &mut Worksheet,
    report: &NsgReport,
    styles: &Styles,
) -> Result<u32, XlsxError> {
    sheet.set_name("NSG_RULES")?;
    let mut cur = SheetCursor::new(NSG_COLUMNS.len());

    let meta = report.metadata.rows();
    cur.header_block(sheet, &report.metadata.name, &meta, styles)?;
    cur.header_row(sheet, &NSG_COLUMNS, styles)?;

    for rule in &report.rules {
        write_rule_row(sheet, &mut cur, rule, styles)?;
    }
    cur.apply_widths(sheet)?;
    Ok(cur.row)
}

fn write_rule_row(
    sheet: &mut Worksheet,
    cur: &mut SheetCursor,
    rule: &SecurityRuleRecord,
    styles: &Styles,
) -> Result<(), XlsxError> {
    cur.put_number(sheet, 0, rule.priority, &styles.cell)?;
    cur.put(sheet, 1, rule.direction.as_str(), &styles.cell)?;
    cur.put(sheet, 2, &rule.rule_name, &styles.cell)?;
    cur.put(sheet, 3, &rule.port, &styles.cell)?;
    cur.put(sheet, 4, &rule.protocol, &styles.cell)?;
    cur.put(sheet, 5, &rule.source, &styles.cell)?;
    cur.put(sheet, 6, &rule.destination, &styles.cell)?;
    cur.put(sheet, 7, &rule.access, &styles.cell)?;
    cur.put(sheet, 8, &rule.description, &styles.cell)?;
    cur.end_row();
    Ok(())
}

/// Render the route table report onto a worksheet. Returns the rows used.
fn render_route_table_sheet(
    sheet: &mut Worksheet,
    report: &RouteTableReport,
    styles: &Styles,
) -> Result<u32, XlsxError> {
    sheet.set_name("ROUTE_TABLE")?;
    let mut cur = SheetCursor::new(ROUTE_COLUMNS.len());

    let meta = report.metadata.rows();
    cur.header_block(sheet, &report.metadata.name, &meta, styles)?;

    cur.put(sheet, 0, "ROUTES", &styles.cell)?;
    cur.end_row();
    cur.header_row(sheet, &ROUTE_COLUMNS, styles)?;
    for route in &report.routes {
        write_route_row(sheet, &mut cur, route, styles)?;
    }

    cur.blank_row();
    cur.put(sheet, 0, "SUBNETS", &styles.cell)?;
    cur.end_row();
    cur.header_row(sheet, &SUBNET_COLUMNS, styles)?;
    for subnet in &report.subnets {
        write_subnet_row(sheet, &mut cur, subnet, styles)?;
    }
    cur.apply_widths(sheet)?;
    Ok(cur.row)
}

fn write_route_row(
    sheet: &mut Worksheet,
    cur: &mut SheetCursor,
    route: &RouteRecord,
    styles: &Styles,
) -> Result<(), XlsxError> {
    cur.put(sheet, 0, &route.name, &styles.cell)?;
    cur.put(sheet, 1, &route.address_prefix, &styles.cell)?;
    cur.put(sheet, 2, &route.next_hop_type, &styles.cell)?;
    cur.put(sheet, 3, &route.next_hop_ip_address, &styles.cell)?;
    cur.end_row();
    Ok(())
}

fn write_subnet_row(
    sheet: &mut Worksheet,
    cur: &mut SheetCursor,
    subnet: &SubnetRecord,
    styles: &Styles,
) -> Result<(), XlsxError> {
    cur.put(sheet, 0, &subnet.name, &styles.cell)?;
    cur.put(sheet, 1, &subnet.address_range, &styles.cell)?;
    cur.put(sheet, 2, &subnet.virtual_network, &styles.cell)?;
    cur.put(sheet, 3, &subnet.security_group, &styles.cell)?;
    cur.end_row();
    Ok(())
}

/// Write the NSG report spreadsheet to `path`.
pub fn write_nsg_report(report: &NsgReport, path: &Path) -> Result<(), Box<dyn Error>> {
    let mut workbook = Workbook::new();
    let styles = Styles::new();
    let rows = render_nsg_sheet(workbook.add_worksheet(), report, &styles)?;
    workbook.save(path)?;
    log::info!(
        "Wrote NSG report with {} rules ({rows} sheet rows) to {}",
        report.rules.len(),
        path.display()
    );
    Ok(())
}

/// Write the route table report spreadsheet to `path`.
pub fn write_route_table_report(
    report: &RouteTableReport,
    path: &Path,
) -> Result<(), Box<dyn Error>> {
    let mut workbook = Workbook::new();
    let styles = Styles::new();
    let rows = render_route_table_sheet(workbook.add_worksheet(), report, &styles)?;
    workbook.save(path)?;
    log::info!(
        "Wrote route table report with {} routes and {} subnets ({rows} sheet rows) to {}",
        report.routes.len(),
        report.subnets.len(),
        path.display()
    );
    Ok(())
}
