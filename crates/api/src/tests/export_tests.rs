// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    create_january_dataset, create_mixed_orders, create_order, create_test_attributes, finalize,
};
use crate::{DashboardFilter, EXPORT_HEADERS, export_file_name, orders_to_csv, write_orders_csv};
use salesdash::Dataset;
use salesdash_domain::{OrderAttributes, OrderRecord, ProductCategory, Region};
use time::macros::date;

fn read_back(csv_text: &str) -> (Vec<String>, Vec<csv::StringRecord>) {
    let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
    let headers: Vec<String> = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_string)
        .collect();
    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    (headers, rows)
}

#[test]
fn test_export_headers_in_order() {
    let csv_text: String = orders_to_csv(&create_mixed_orders()).unwrap();
    let (headers, _) = read_back(&csv_text);

    assert_eq!(headers.len(), 24);
    assert_eq!(headers, EXPORT_HEADERS);
}

#[test]
fn test_export_one_row_per_record() {
    let records: Vec<OrderRecord> = create_mixed_orders();
    let mut buffer: Vec<u8> = Vec::new();

    let written: usize = write_orders_csv(&records, &mut buffer).unwrap();
    assert_eq!(written, 4);

    let (_, rows) = read_back(&String::from_utf8(buffer).unwrap());
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|row| row.len() == EXPORT_HEADERS.len()));
}

#[test]
fn test_export_row_content() {
    let csv_text: String = orders_to_csv(&create_mixed_orders()).unwrap();
    let (_, rows) = read_back(&csv_text);

    let third: &csv::StringRecord = &rows[2];
    assert_eq!(&third[0], "ORD_00003");
    assert_eq!(&third[1], "2022-01-07");
    assert_eq!(&third[2], "2022");
    assert_eq!(&third[3], "1");
    assert_eq!(&third[4], "January");
    assert_eq!(&third[5], "Q1");
    assert_eq!(&third[6], "Friday");
    assert_eq!(&third[7], "CUST_1001");
    assert_eq!(&third[8], "Small Business");
    assert_eq!(&third[11], "South");
    assert_eq!(&third[12], "Bob Smith");

    let net_sales: f64 = third[17].parse().unwrap();
    assert!((net_sales - 50.0).abs() < 1e-9);
    let lifetime_value: f64 = third[23].parse().unwrap();
    assert!((lifetime_value - 150.0).abs() < 1e-9);
}

#[test]
fn test_export_multi_word_labels() {
    let attributes: OrderAttributes = OrderAttributes {
        product_category: ProductCategory::HomeAndGarden,
        product_name: String::from("Garden Tools"),
        ..create_test_attributes("ORD_00001", date!(2022 - 01 - 05))
    };
    let records: Vec<OrderRecord> = finalize(vec![create_order(attributes, 80.0, 0.5, 1.0)]);

    let csv_text: String = orders_to_csv(&records).unwrap();
    let (_, rows) = read_back(&csv_text);
    assert_eq!(&rows[0][9], "Home & Garden");
    assert_eq!(&rows[0][10], "Garden Tools");
}

#[test]
fn test_empty_export_has_header_only() {
    let csv_text: String = orders_to_csv(&[]).unwrap();
    let (headers, rows) = read_back(&csv_text);

    assert_eq!(headers.len(), EXPORT_HEADERS.len());
    assert!(rows.is_empty());
    assert_eq!(csv_text.lines().count(), 1);
}

#[test]
fn test_export_of_filtered_generated_data() {
    let dataset: Dataset = create_january_dataset();
    let filtered: Vec<OrderRecord> = DashboardFilter::all()
        .with_regions(&[Region::East])
        .apply(dataset.records());

    let csv_text: String = orders_to_csv(&filtered).unwrap();
    let (_, rows) = read_back(&csv_text);
    assert_eq!(rows.len(), filtered.len());
    assert!(rows.iter().all(|row| &row[11] == "East"));
}

#[test]
fn test_export_file_name_uses_date_stamp() {
    assert_eq!(
        export_file_name(date!(2024 - 03 - 07)),
        "sales_data_filtered_20240307.csv"
    );
}
