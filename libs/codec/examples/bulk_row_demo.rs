//! # Bulk Row Conversion Demo
//!
//! Walks a downloaded bulk row through the mapper registry and back:
//! - Text-to-value normalization on download
//! - Micro-denominated money handling
//! - Upload rendering with the billable floor applied
//!
//! Run with `RUST_LOG=debug` to see the degradation events the codec emits
//! for unparseable cells.

use adwire_codec::{
    mapper_for, round_up_to_cents, units_to_micros, FieldType, FieldValue,
};

fn main() {
    tracing_subscriber::fmt::init();

    println!("🔄 Adwire Bulk Row Conversion Demo");
    println!("==================================\n");

    demo_download_normalization();
    demo_upload_rendering();
    demo_billable_floor();

    println!("✅ Demo complete");
}

fn demo_download_normalization() {
    println!("1. Download: raw cells into domain values");

    let row = [
        (FieldType::Money, FieldValue::from("2500000")),
        (FieldType::Bid, FieldValue::from("750000")),
        (FieldType::Long, FieldValue::from("1,234")),
        (FieldType::Double, FieldValue::from("0.075")),
        (FieldType::Double, FieldValue::from("n/a")),
        (FieldType::String, FieldValue::from("Campaign #1")),
        (FieldType::Money, FieldValue::Missing),
    ];

    for (field_type, cell) in &row {
        let converted = mapper_for(*field_type).from_external(cell).unwrap();
        println!("   {:>8}: {:>12} -> {:?}", field_type, format!("{:?}", cell), converted);
    }
    println!();
}

fn demo_upload_rendering() {
    println!("2. Upload: domain values back onto the wire");

    let money = mapper_for(FieldType::Money);
    let long = mapper_for(FieldType::Long);
    let text = mapper_for(FieldType::String);

    let bid = FieldValue::Float(2.504);
    let impressions = FieldValue::Integer(1_234);
    let label = FieldValue::Float(0.075);

    println!("   Money  {:?} -> {:?}", bid, money.to_external(&bid).unwrap());
    println!("   Long   {:?} -> {:?}", impressions, long.to_external(&impressions).unwrap());
    println!("   String {:?} -> {:?}", label, text.to_external(&label).unwrap());
    println!();
}

fn demo_billable_floor() {
    println!("3. Billable floor: outbound money never drops below one cent");

    for units in [1.001, 0.004, 0.0, -5.0] {
        println!(
            "   {:>7} units -> {:.2} units -> {} micros",
            units,
            round_up_to_cents(units),
            units_to_micros(units).raw()
        );
    }
    println!();
}
