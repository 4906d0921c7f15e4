use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub date: NaiveDate,
    pub description: String,
    pub available_seats: u32,
    pub total_seats: u32,
    pub image: String,
}

impl Event {
    pub fn is_sold_out(&self) -> bool {
        self.available_seats == 0
    }
}

// Начальный набор событий: используется при старте и восстанавливается через /reset
pub fn seed_events() -> Vec<Event> {
    vec![
        seed(
            1,
            "Tech Conference 2024",
            (2024, 9, 15),
            "The biggest tech conference of the year featuring industry leaders.",
            50,
            100,
            "tech",
        ),
        seed(
            2,
            "Music Festival",
            (2024, 10, 20),
            "A weekend of live music, food, and fun.",
            120,
            500,
            "music",
        ),
        seed(
            3,
            "Art Gallery Opening",
            (2024, 11, 5),
            "Exclusive viewing of modern art masterpieces.",
            5,
            30,
            "art",
        ),
    ]
}

fn seed(
    id: i64,
    title: &str,
    (year, month, day): (i32, u32, u32),
    description: &str,
    available_seats: u32,
    total_seats: u32,
    image_seed: &str,
) -> Event {
    Event {
        id,
        title: title.to_string(),
        date: NaiveDate::from_ymd_opt(year, month, day).expect("seed date is a valid calendar date"),
        description: description.to_string(),
        available_seats,
        total_seats,
        image: format!("https://picsum.photos/seed/{image_seed}/800/600"),
    }
}
