//! Canned listings served by `--mock`.

use shifts_types::{Coordinates, ShiftId, ShiftRecord, WorkType};

fn work_type(id: u64, name: &str, one: &str, lt5: &str, gt5: &str) -> WorkType {
    WorkType {
        id,
        name: name.to_string(),
        name_gt5: gt5.to_string(),
        name_lt5: lt5.to_string(),
        name_one: one.to_string(),
    }
}

/// Shifts around the default search position.
pub fn shifts() -> Vec<ShiftRecord> {
    let loader = work_type(1, "Loader", "грузчик", "грузчика", "грузчиков");
    let packer = work_type(2, "Packer", "упаковщик", "упаковщика", "упаковщиков");
    let cleaner = work_type(3, "Cleaner", "уборщик", "уборщика", "уборщиков");

    vec![
        ShiftRecord {
            id: ShiftId::new("1001"),
            coordinates: Coordinates::new(55.7601, 37.6187),
            address: "Tverskaya St, 7".to_string(),
            company_name: "Northwind Logistics".to_string(),
            logo: None,
            date_start_by_city: "12.05.2025".to_string(),
            time_start_by_city: "09:00".to_string(),
            time_end_by_city: "18:00".to_string(),
            current_workers: 2,
            plan_workers: 5,
            work_types: vec![loader.clone()],
            price_worker: 2500.0,
            bonus_price_worker: 300.0,
            customer_feedbacks_count: "48".to_string(),
            customer_rating: Some(4.7),
            is_promotion_enabled: true,
        },
        ShiftRecord {
            id: ShiftId::new("1002"),
            coordinates: Coordinates::new(55.7512, 37.5971),
            address: "Arbat St, 24".to_string(),
            company_name: "Fresh Market".to_string(),
            logo: Some("https://cdn.example.com/logos/fresh-market.png".to_string()),
            date_start_by_city: "12.05.2025".to_string(),
            time_start_by_city: "08:00".to_string(),
            time_end_by_city: "14:00".to_string(),
            current_workers: 3,
            plan_workers: 3,
            work_types: vec![packer.clone(), loader],
            price_worker: 1800.0,
            bonus_price_worker: 0.0,
            customer_feedbacks_count: "12".to_string(),
            customer_rating: Some(4.2),
            is_promotion_enabled: false,
        },
        ShiftRecord {
            id: ShiftId::new("1003"),
            coordinates: Coordinates::new(55.7423, 37.6290),
            address: "Pyatnitskaya St, 3".to_string(),
            company_name: String::new(),
            logo: None,
            date_start_by_city: "13.05.2025".to_string(),
            time_start_by_city: "20:00".to_string(),
            time_end_by_city: "06:00".to_string(),
            current_workers: 0,
            plan_workers: 1,
            work_types: vec![cleaner],
            price_worker: 3200.0,
            bonus_price_worker: 800.0,
            customer_feedbacks_count: "0".to_string(),
            customer_rating: None,
            is_promotion_enabled: false,
        },
        ShiftRecord {
            id: ShiftId::new("1004"),
            coordinates: Coordinates::new(55.7689, 37.6441),
            address: "Myasnitskaya St, 40".to_string(),
            company_name: "Parcel Point".to_string(),
            logo: None,
            date_start_by_city: "14.05.2025".to_string(),
            time_start_by_city: "10:00".to_string(),
            time_end_by_city: "19:00".to_string(),
            current_workers: 1,
            plan_workers: 4,
            work_types: vec![packer],
            price_worker: 2100.0,
            bonus_price_worker: 150.0,
            customer_feedbacks_count: "7".to_string(),
            customer_rating: Some(3.9),
            is_promotion_enabled: false,
        },
    ]
}
