//! Text layout of persisted records.
//!
//! Each record is a run of `Label: value` lines closed by a dashed separator.
//! Measurements use shortest round-trip float formatting (`0.0`, `-2.5`).

use crate::models::PrescriptionDetails;

/// Line closing every record.
pub const SEPARATOR: &str = "-------------------------------------------------";

/// Render a prescription block. Returns `None` if the date never parsed.
pub fn format_prescription_block(details: &PrescriptionDetails) -> Option<String> {
    let date = details.examination_date.formatted()?;

    let mut block = String::new();
    block.push_str(&format!("First Name: {}\n", details.first_name));
    block.push_str(&format!("Last Name: {}\n", details.last_name));
    block.push_str(&format!("Address: {}\n", details.address));
    block.push_str(&format!("Sphere: {:?}\n", details.sphere));
    block.push_str(&format!("Cylinder: {:?}\n", details.cylinder));
    block.push_str(&format!("Axis: {:?}\n", details.axis));
    block.push_str(&format!("Examination Date: {}\n", date));
    block.push_str(&format!("Optometrist: {}\n", details.optometrist));
    block.push_str(SEPARATOR);
    block.push('\n');

    Some(block)
}

/// Render a remark block. The category is written as supplied.
pub fn format_remark_block(text: &str, category: &str) -> String {
    format!("Remark: {}\nCategory: {}\n{}\n", text, category, SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExaminationDate, PrescriptionInput};

    fn details(date: &str) -> PrescriptionDetails {
        PrescriptionInput {
            first_name: "Sophia".into(),
            last_name: "Turner".into(),
            address: "5678 Cedar Avenue, District, 98765, Country".into(),
            sphere: -6.25,
            cylinder: -1.25,
            axis: 80.0,
            examination_date: date.into(),
            optometrist: "Dr. Glasses".into(),
        }
        .into()
    }

    #[test]
    fn test_prescription_block_layout() {
        let block = format_prescription_block(&details("18/06/23")).unwrap();
        let lines: Vec<&str> = block.lines().collect();

        assert_eq!(
            lines,
            vec![
                "First Name: Sophia",
                "Last Name: Turner",
                "Address: 5678 Cedar Avenue, District, 98765, Country",
                "Sphere: -6.25",
                "Cylinder: -1.25",
                "Axis: 80.0",
                "Examination Date: 18/06/23",
                "Optometrist: Dr. Glasses",
                SEPARATOR,
            ]
        );
        assert!(block.ends_with('\n'));
    }

    #[test]
    fn test_prescription_block_needs_date() {
        let mut d = details("18/06/23");
        d.examination_date = ExaminationDate::Invalid;
        assert!(format_prescription_block(&d).is_none());
    }

    #[test]
    fn test_remark_block_keeps_category_text() {
        let block = format_remark_block("Lenses are comfortable for daily wear.", "Client");
        assert_eq!(
            block,
            format!(
                "Remark: Lenses are comfortable for daily wear.\nCategory: Client\n{}\n",
                SEPARATOR
            )
        );
    }
}
