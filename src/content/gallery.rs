use crate::types::CategoryDescription;
use site_core::gallery::{GalleryCategory, GalleryItem, GalleryItemKind};

pub const DEFAULT_CATEGORY: &str = "SCOAN HQ";

const fn item(id: u32, title: &'static str, image: &'static str, rotation: f32, scale: f32, z_index: i32) -> GalleryItem {
    GalleryItem {
        id,
        title,
        image,
        kind: GalleryItemKind::Image,
        rotation,
        scale: Some(scale),
        z_index,
    }
}

static CATEGORIES: &[(&str, &[GalleryItem])] = &[
    (
        "SCOAN HQ",
        &[
            item(1, "SCOAN Headquarters Service", "/mum1.jpg", -8.0, 0.85, 1),
            item(2, "Sunday Service", "/mummy.jpg", -4.0, 0.9, 2),
            item(3, "Prayer Session", "/Evelyn-Joshua3.jpg", 0.0, 1.0, 30),
        ],
    ),
    (
        "Ghana",
        &[
            item(4, "Ghana Crusade", "/mum2.jpg", 4.0, 0.9, 3),
            item(5, "Accra Outreach", "/mum3.jpg", 8.0, 0.85, 30),
            item(6, "Kumasi Ministry", "/mum4.jpg", 8.0, 0.85, 1),
        ],
    ),
    (
        "Kenya",
        &[
            item(7, "Nairobi Crusade", "/mum1.jpg", -6.0, 0.88, 2),
            item(8, "Mombasa Outreach", "/mummy.jpg", 2.0, 0.92, 1),
            item(9, "Eldoret Ministry", "/Evelyn-Joshua3.jpg", 0.0, 1.0, 30),
        ],
    ),
    (
        "Lagos",
        &[
            item(10, "Lagos Crusade", "/mum2.jpg", -4.0, 0.9, 3),
            item(11, "Victoria Island Service", "/mum3.jpg", 6.0, 0.87, 1),
            item(12, "Ikeja Outreach", "/mum4.jpg", 0.0, 1.0, 30),
        ],
    ),
    (
        "Colombia",
        &[
            item(13, "Bogotá Crusade", "/mum1.jpg", -8.0, 0.85, 1),
            item(14, "Medellín Ministry", "/mummy.jpg", 4.0, 0.9, 2),
            item(15, "Cali Outreach", "/Evelyn-Joshua3.jpg", 0.0, 1.0, 30),
        ],
    ),
    (
        "Indonesia",
        &[
            item(16, "Jakarta Crusade", "/mum2.jpg", -2.0, 0.89, 3),
            item(17, "Bali Ministry", "/mum3.jpg", 8.0, 0.85, 1),
            item(18, "Surabaya Outreach", "/mum4.jpg", 0.0, 1.0, 30),
        ],
    ),
    (
        "Ecuador",
        &[
            item(19, "Quito Crusade", "/mum1.jpg", -6.0, 0.88, 2),
            item(20, "Guayaquil Ministry", "/mummy.jpg", 6.0, 0.87, 1),
            item(21, "Cuenca Outreach", "/Evelyn-Joshua3.jpg", 0.0, 1.0, 30),
        ],
    ),
    (
        "South Africa",
        &[
            item(34, "Cape Town Crusade", "/mum1.jpg", -6.0, 0.88, 2),
            item(35, "Johannesburg Ministry", "/mummy.jpg", 6.0, 0.87, 1),
            item(36, "Durban Outreach", "/Evelyn-Joshua3.jpg", 0.0, 1.0, 30),
        ],
    ),
    (
        "Argentina",
        &[
            item(22, "Buenos Aires Crusade", "/mum2.jpg", -4.0, 0.9, 3),
            item(23, "Rosario Ministry", "/mum3.jpg", 8.0, 0.85, 1),
            item(24, "Cordoba Outreach", "/Evelyn-Joshua3.jpg", 0.0, 1.0, 30),
        ],
    ),
    (
        "Spain",
        &[
            item(25, "Madrid Crusade", "/mum1.jpg", -6.0, 0.88, 2),
            item(26, "Barcelona Ministry", "/mummy.jpg", 6.0, 0.87, 1),
            item(27, "Valencia Outreach", "/Evelyn-Joshua3.jpg", 0.0, 1.0, 30),
        ],
    ),
    (
        "Dominican Republic",
        &[
            item(28, "Santo Domingo Crusade", "/mum2.jpg", -4.0, 0.9, 3),
            item(29, "La Union Ministry", "/mum3.jpg", 8.0, 0.85, 1),
            item(30, "Cartagena Outreach", "/Evelyn-Joshua3.jpg", 0.0, 1.0, 30),
        ],
    ),
    (
        "Israel",
        &[
            item(31, "Jerusalem Ministry", "/mum1.jpg", -6.0, 0.88, 2),
            item(32, "Tel Aviv Outreach", "/mummy.jpg", 6.0, 0.87, 1),
            item(33, "Haifa Service", "/Evelyn-Joshua3.jpg", 0.0, 1.0, 30),
        ],
    ),
];

/// Every category in filter order.
pub fn categories() -> Vec<GalleryCategory> {
    CATEGORIES
        .iter()
        .map(|&(name, items)| GalleryCategory { name, items: items.to_vec() })
        .collect()
}

pub fn description(category: &str) -> Option<CategoryDescription> {
    let found = match category {
        "SCOAN HQ" => CategoryDescription {
            title: "SCOAN Headquarters",
            description: "The Synagogue, Church Of All Nations (SCOAN) headquarters in Lagos, Nigeria, serves as the spiritual epicenter of our global ministry. Here, thousands gather weekly to experience powerful worship, healing, and deliverance services that transform lives.",
            read_more_url: "https://www.scoan.org/about-us",
        },
        "Ghana" => CategoryDescription {
            title: "Ghana Ministry",
            description: "Our Ghana ministry extends the healing and deliverance mission across West Africa. Through crusades and outreach programs, we bring hope to communities, offering spiritual guidance and practical support to those in need.",
            read_more_url: "https://www.scoan.org/scoan-ghana-charity-2024/",
        },
        "Kenya" => CategoryDescription {
            title: "Kenya Outreach",
            description: "In Kenya, our ministry focuses on community development and spiritual empowerment. From Nairobi to rural villages, we conduct healing services, educational programs, and humanitarian initiatives that impact thousands.",
            read_more_url: "https://www.scoan.org/kenya-outreach",
        },
        "Lagos" => CategoryDescription {
            title: "Lagos Crusades",
            description: "Lagos, Nigeria's commercial capital, hosts some of our largest crusades. These massive gatherings bring together people from all walks of life seeking healing, deliverance, and spiritual renewal in the power of God.",
            read_more_url: "https://www.scoan.org/lagos-crusades",
        },
        "Colombia" => CategoryDescription {
            title: "Colombian Mission",
            description: "Our Colombian ministry brings the message of hope and healing to South America. Through strategic partnerships and community engagement, we reach diverse populations with the transformative power of the Gospel.",
            read_more_url: "https://www.scoan.org/colombia-mission",
        },
        "Indonesia" => CategoryDescription {
            title: "Indonesian Outreach",
            description: "Spanning thousands of islands, our Indonesian ministry reaches diverse communities with healing and deliverance. We conduct crusades in major cities and remote areas, bringing spiritual renewal to this vast nation.",
            read_more_url: "https://www.scoan.org/indonesia-outreach",
        },
        "Ecuador" => CategoryDescription {
            title: "Ecuadorian Ministry",
            description: "In Ecuador, our ministry focuses on both spiritual and practical needs. From Quito to coastal cities, we conduct healing services while supporting community development projects that improve quality of life.",
            read_more_url: "https://www.scoan.org/ecuador-ministry",
        },
        "South Africa" => CategoryDescription {
            title: "South African Revival",
            description: "In South Africa, our ministry focuses on community development, healing, and deliverance. Through various programs and initiatives, we reach marginalized communities, offering spiritual guidance and practical support to those in need.",
            read_more_url: "https://www.scoan.org/gods-love-at-the-holy-spirit-visitation-in-south-africa/",
        },
        "Argentina" => CategoryDescription {
            title: "Argentinian Crusade",
            description: "In Argentina, our ministry focuses on community development, healing, and deliverance. Through various programs and initiatives, we reach marginalized communities, offering spiritual guidance and practical support to those in need.",
            read_more_url: "https://www.scoan.org/argentina-crusade-day-1-the-rain-of-the-holy-spirit/",
        },
        "Spain" => CategoryDescription {
            title: "Spanish Crusade",
            description: "In Spain, our ministry focuses on community development, healing, and deliverance. Through various programs and initiatives, we reach marginalized communities, offering spiritual guidance and practical support to those in need.",
            read_more_url: "https://www.scoan.org/the-crusade-in-spain-day-1believe-jesus-christ-redeem-time/",
        },
        "Dominican Republic" => CategoryDescription {
            title: "Dominican Mission",
            description: "In the Dominican Republic, our ministry focuses on community development, healing, and deliverance. Through various programs and initiatives, we reach marginalized communities, offering spiritual guidance and practical support to those in need.",
            read_more_url: "https://www.scoan.org/dominican-republic-mission",
        },
        "Israel" => CategoryDescription {
            title: "Israel Mission",
            description: "In Israel, our ministry focuses on community development, healing, and deliverance. Through various programs and initiatives, we reach marginalized communities, offering spiritual guidance and practical support to those in need.",
            read_more_url: "https://www.scoan.org/israel-mission",
        },
        _ => return None,
    };
    Some(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_a_description() {
        let cats = categories();
        assert_eq!(cats.len(), 12);
        assert_eq!(cats[0].name, DEFAULT_CATEGORY);
        for cat in &cats {
            assert!(description(cat.name).is_some(), "{}", cat.name);
            assert!(!cat.items.is_empty());
        }
    }
}
