use super::*;

#[test]
fn format_availability_uses_two_decimals() {
    assert_eq!(format_availability(0.9349), "0.93");
    assert_eq!(format_availability(1.0), "1.00");
}

#[test]
fn store_label_prefers_name() {
    let store = StoreAvailability { store_id: "3".to_owned(), store_name: "Downtown".to_owned(), on_shelf_availability: 0.5 };
    assert_eq!(store_label(&store), "Downtown");
}

#[test]
fn store_label_falls_back_to_id() {
    let store = StoreAvailability { store_id: "3".to_owned(), store_name: String::new(), on_shelf_availability: 0.5 };
    assert_eq!(store_label(&store), "Store 3");
}

#[test]
fn sku_label_falls_back_to_id() {
    let sku = SkuSales { sku_id: "SKU-9".to_owned(), sku_name: String::new(), units_sold: 2 };
    assert_eq!(sku_label(&sku), "SKU SKU-9");
}
