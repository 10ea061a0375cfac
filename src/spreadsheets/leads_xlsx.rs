use crate::domain::lead::Lead;
use crate::errors::ServerError;
use rust_xlsxwriter::Workbook;

const HEADERS: [&str; 7] = [
    "ID",
    "Received (UTC)",
    "Name",
    "Email",
    "Phone",
    "Listing",
    "Message",
];

/// Builds the enquiry workbook in memory.
pub fn leads_workbook(leads: &[Lead]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    for (i, lead) in leads.iter().enumerate() {
        let r = (i + 1) as u32;
        let received = lead.created_at.format("%Y-%m-%d %H:%M").to_string();

        worksheet
            .write_number(r, 0, lead.id as f64)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write id: {}", e)))?;

        let cells = [
            (1, received.as_str()),
            (2, lead.name.as_str()),
            (3, lead.email.as_str()),
            (4, lead.phone.as_deref().unwrap_or("")),
            (5, lead.listing_id.as_deref().unwrap_or("")),
            (6, lead.message.as_str()),
        ];

        for (col, value) in cells {
            worksheet.write_string(r, col, value).map_err(|e| {
                ServerError::XlsxError(format!("Failed to write {}: {}", HEADERS[col as usize], e))
            })?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}
