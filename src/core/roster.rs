use crate::store::layout;
use crate::store::workbook::Workbook;

pub struct RosterLogic;

impl RosterLogic {
    /// Personnel names from the roster sheet, in sheet order.
    /// Entries carrying the exemption marker are excluded from
    /// auto-scheduling.
    pub fn officer_list(wb: &Workbook) -> Vec<String> {
        let Some(sheet) = wb.sheet(layout::ROSTER_SHEET) else {
            return Vec::new();
        };

        let mut out = Vec::new();
        for r in (layout::ROSTER_HEADER_ROW + 1)..sheet.row_count() {
            let Some(name) = sheet.cell(r, layout::ROSTER_COL_NAME).as_text() else {
                continue;
            };
            if name.eq_ignore_ascii_case("nan") {
                continue;
            }

            let exempt = sheet
                .cell(r, layout::ROSTER_COL_EXEMPT)
                .as_text()
                .map(|s| s.to_lowercase())
                .unwrap_or_default();
            if exempt == layout::EXEMPT_MARKER {
                continue;
            }

            out.push(name);
        }

        out
    }
}
