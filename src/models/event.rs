//! Упрощённое представление концерта из Ticketmaster Discovery API.
//!
//! Ответ апстрима разбирается как `serde_json::Value`. Все вложенные поля
//! необязательны: отсутствие `_embedded`, `images`, `venues` и т.п. или
//! неожиданный тип не считается ошибкой и даёт `null` в итоговой записи.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Запись, которую отдаёт `/api/tm-events`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: Option<String>,
    pub name: Option<String>,
    pub image: Option<String>,
    pub venue: Option<String>,
    pub link: Option<String>,
    pub seatmap: Option<String>,
    pub date: Option<String>,
}

impl Event {
    /// Переводит ответ Discovery API в список `Event`, сохраняя исходный порядок.
    ///
    /// `None`, если верхний уровень ответа не объект. Список событий лежит в
    /// `_embedded.events`; если его нет или он не массив, результат пустой.
    pub fn list_from_search(body: &Value) -> Option<Vec<Event>> {
        body.as_object()?;

        let events: Vec<Event> = body
            .pointer("/_embedded/events")
            .and_then(Value::as_array)
            .map(|events| events.iter().map(Event::from_discovery).collect())
            .unwrap_or_default();

        Some(events)
    }

    // Любое вложенное поле может отсутствовать или иметь не тот тип: тогда null
    fn from_discovery(event: &Value) -> Self {
        // Точное время важнее локальной даты; пустая строка считается отсутствием
        let date = non_empty_str(event, "/dates/start/dateTime")
            .or_else(|| non_empty_str(event, "/dates/start/localDate"));

        Event {
            id: str_at(event, "/id"),
            name: str_at(event, "/name"),
            image: str_at(event, "/images/0/url"),
            venue: str_at(event, "/_embedded/venues/0/name"),
            link: str_at(event, "/url"),
            seatmap: str_at(event, "/seatmap/staticUrl"),
            date,
        }
    }
}

fn str_at(value: &Value, pointer: &str) -> Option<String> {
    value
        .pointer(pointer)
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn non_empty_str(value: &Value, pointer: &str) -> Option<String> {
    str_at(value, pointer).filter(|v| !v.is_empty())
}
