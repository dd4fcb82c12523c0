//! Column schemas of the CRUD pages
//!
//! Labels are derived from the keys unless a column overrides them.

use super::Page;
use contracts::shared::form::{ColumnDescriptor, DataType};

pub fn columns_for(page: Page) -> Vec<ColumnDescriptor> {
    match page {
        Page::Home => vec![],
        Page::Staff => vec![
            ColumnDescriptor::new("staffID", DataType::String).required(),
            ColumnDescriptor::new("fullName", DataType::String).required(),
            ColumnDescriptor::new("dob", DataType::Date).with_label("Date of birth"),
            ColumnDescriptor::new("phoneNumber", DataType::String),
            ColumnDescriptor::new("avatar", DataType::Image),
            ColumnDescriptor::new("isActive", DataType::Boolean),
        ],
        Page::ProductInformation => vec![
            ColumnDescriptor::new("productID", DataType::String).required(),
            ColumnDescriptor::new("productName", DataType::String).required(),
            ColumnDescriptor::new("baseUoM", DataType::String),
            ColumnDescriptor::new("unitPrice", DataType::Number),
            ColumnDescriptor::new("image", DataType::Image),
        ],
        Page::ProductBatch => vec![
            ColumnDescriptor::new("batchID", DataType::String).required(),
            ColumnDescriptor::new("productID", DataType::String).required(),
            ColumnDescriptor::new("quantity", DataType::Number),
            ColumnDescriptor::new("manufactureDate", DataType::Date),
            ColumnDescriptor::new("expiryDate", DataType::Date),
        ],
        Page::Supplier => vec![
            ColumnDescriptor::new("supplierID", DataType::String).required(),
            ColumnDescriptor::new("supplierName", DataType::String).required(),
            ColumnDescriptor::new("address", DataType::String),
            ColumnDescriptor::new("websiteURL", DataType::String),
        ],
        Page::GoodsReceipt => vec![
            ColumnDescriptor::new("goodsReceiptID", DataType::String).required(),
            ColumnDescriptor::new("supplierID", DataType::String),
            ColumnDescriptor::new("staffID", DataType::String),
            ColumnDescriptor::new("receiptDate", DataType::Date),
            ColumnDescriptor::new("productBatches", DataType::Table),
        ],
        Page::GoodsReturn => vec![
            ColumnDescriptor::new("goodsReturnID", DataType::String).required(),
            ColumnDescriptor::new("goodsReceiptID", DataType::String),
            ColumnDescriptor::new("returnDate", DataType::Date),
            ColumnDescriptor::new("reason", DataType::String),
            ColumnDescriptor::new("productBatches", DataType::Table),
        ],
    }
}

/// Key of the first image column, the one a picked file is attached to.
pub fn image_column(columns: &[ColumnDescriptor]) -> Option<&str> {
    columns
        .iter()
        .find(|column| column.data_type == DataType::Image)
        .and_then(ColumnDescriptor::key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::form::create_empty_rule_form;

    #[test]
    fn test_labels() {
        let labels: Vec<_> = columns_for(Page::ProductInformation)
            .iter()
            .map(ColumnDescriptor::display_label)
            .collect();
        assert_eq!(
            labels,
            vec!["Product ID", "Product Name", "Base UoM", "Unit Price", "Image"]
        );
    }

    #[test]
    fn test_image_column() {
        assert_eq!(image_column(&columns_for(Page::ProductInformation)), Some("image"));
        assert_eq!(image_column(&columns_for(Page::Staff)), Some("avatar"));
        assert_eq!(image_column(&columns_for(Page::Supplier)), None);
        assert_eq!(image_column(&[]), None);
    }

    #[test]
    fn test_empty_forms_have_one_key_per_column() {
        for page in [Page::Staff, Page::Supplier, Page::GoodsReceipt] {
            let columns = columns_for(page);
            let form = create_empty_rule_form(&columns);
            assert_eq!(form.len(), columns.len());
            assert!(form.values().all(|value| value.is_null()));
        }
    }
}
