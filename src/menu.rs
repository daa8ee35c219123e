//! # Menu catalog
//!
//! Static, read-only collaborator supplying the dish catalog and the table
//! labels. The core only ever reads from here.

use crate::model::{Dish, DishId};

/// Table labels a customer can pick at checkout. "Mang về" is the takeaway
/// sentinel.
pub const TABLES: [&str; 7] = [
    "Bàn 01", "Bàn 02", "Bàn 03", "Bàn 04", "Bàn 05", "Bàn 06", "Mang về",
];

/// The fixed dish catalog, in menu order.
pub fn dishes() -> Vec<Dish> {
    fn dish(id: &str, name: &str, description: &str, price: u64, category: &str, seed: &str) -> Dish {
        Dish {
            id: DishId::from(id),
            name: name.to_string(),
            description: description.to_string(),
            price,
            category: category.to_string(),
            image: format!("https://picsum.photos/seed/{seed}/400/300"),
        }
    }

    vec![
        dish(
            "1",
            "Phở Bò Truyền Thống",
            "Nước dùng trong veo, thơm mùi hồi quế cùng thịt bò tươi thái mỏng.",
            65000,
            "Món nước",
            "pho",
        ),
        dish(
            "2",
            "Bún Chả Hà Nội",
            "Chả nướng than hoa vàng ươm ăn kèm nước chấm chua ngọt và bún tươi.",
            55000,
            "Món khô",
            "buncha",
        ),
        dish(
            "3",
            "Cơm Tấm Sườn Bì Chả",
            "Sườn nướng thơm lừng kết hợp cùng bì thính và chả trứng đậm đà.",
            45000,
            "Cơm",
            "comtam",
        ),
        dish(
            "4",
            "Gỏi Cuốn Tôm Thịt",
            "Món khai vị nhẹ nhàng với tôm tươi, thịt luộc và rau sống tươi mát.",
            35000,
            "Khai vị",
            "goicuon",
        ),
        dish(
            "5",
            "Bánh Mì Đặc Biệt",
            "Vỏ bánh giòn rụm với nhân pate, chả lụa, xá xíu và bơ trứng.",
            25000,
            "Ăn nhẹ",
            "banhmi",
        ),
        dish(
            "6",
            "Cà Phê Muối",
            "Vị mặn nhẹ của kem muối hòa quyện cùng vị đắng của cà phê pha phin.",
            30000,
            "Đồ uống",
            "cafe",
        ),
    ]
}

/// Catalog lookup by dish id.
pub fn find_dish(id: &DishId) -> Option<Dish> {
    dishes().into_iter().find(|dish| &dish.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        let all = dishes();
        let mut ids: Vec<_> = all.iter().map(|d| d.id.clone()).collect();
        ids.sort_by(|a, b| a.0.cmp(&b.0));
        ids.dedup();
        assert_eq!(ids.len(), all.len());
    }

    #[test]
    fn find_dish_returns_the_catalog_entry() {
        let pho = find_dish(&DishId::from("1")).unwrap();
        assert_eq!(pho.name, "Phở Bò Truyền Thống");
        assert_eq!(pho.price, 65000);
        assert!(find_dish(&DishId::from("99")).is_none());
    }
}
