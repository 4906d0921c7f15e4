use chrono::NaiveDate;

use crate::models::Event;

pub fn format_event_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

pub fn seat_badge(event: &Event) -> String {
    if event.is_sold_out() {
        "Sold Out".to_string()
    } else {
        format!("{} seats left", event.available_seats)
    }
}

pub fn event_card(event: &Event) -> String {
    format!(
        "#{id} {title} [{badge}]\n    {date}\n    {description}",
        id = event.id,
        title = event.title,
        badge = seat_badge(event),
        date = format_event_date(event.date),
        description = event.description,
    )
}

pub fn event_list(events: &[Event]) -> String {
    if events.is_empty() {
        return "No upcoming events.".to_string();
    }
    events.iter().map(event_card).collect::<Vec<_>>().join("\n\n")
}
