//! Texts the bot sends back. Every inbound message gets exactly one of these.

pub const WELCOME: &str = "Привет! Я SmartPlannerBot 🤖\n\n\
Я помогу тебе управлять своим расписанием.\n\n\
📅 Команды:\n\
/add — добавить событие на конкретную дату\n\
/show — показать расписание на выбранную дату\n\n\
Я также умею показывать расписание по дням недели.\n\
Просто введи дату в формате ДД.ММ.ГГГГ.";

pub const ASK_ADD_DATE: &str = "Введи дату для события в формате ДД.ММ.ГГГГ\nПример: 22.07.2025";

pub const RETRY_ADD_DATE: &str = "Некорректная дата. Введи в формате ДД.ММ.ГГГГ, например 22.07.2025.";

pub const ASK_EVENT_TEXT: &str = "Отлично! Теперь введи время и название события через пробел.\n\
Пример: 14:30 Математика с репетитором";

pub const RETRY_EVENT_TEXT: &str = "Пожалуйста, введи время и название события через пробел.\n\
Пример: 14:30 Контрольная по геометрии";

pub const RETRY_EVENT_TIME: &str = "Время должно быть в формате ЧЧ:ММ (например, 09:00). Попробуй снова.";

pub const ASK_SHOW_DATE: &str = "Введи дату в формате ДД.ММ.ГГГГ, чтобы показать расписание на этот день.\n\
Например: 22.07.2025";

pub const RETRY_SHOW_DATE: &str = "Пожалуйста, введи дату в правильном формате: ДД.ММ.ГГГГ";

pub const CANCELLED: &str = "Действие отменено.";

pub const NOTHING_TO_CANCEL: &str = "Сейчас нечего отменять.";

pub const IDLE_HINT: &str = "Чтобы добавить событие, используй /add, чтобы посмотреть расписание — /show.\n\
Список команд: /help";

pub const STORAGE_FAILURE: &str = "⚠️ Не удалось обработать запрос: хранилище расписания недоступно. Попробуй ещё раз позже.";

pub fn event_added(date: &str, entry: &str) -> String {
    format!("✅ Событие добавлено на {date}: {entry}")
}

pub fn nothing_planned(date: &str) -> String {
    format!("❌ На {date} ничего не запланировано.")
}

/// Lessons first, then personal events, each line bulleted.
pub fn schedule_view(date: &str, lessons: &[String], events: &[String]) -> String {
    let bulleted = |items: &[String]| {
        items
            .iter()
            .map(|item| format!("• {item}"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let mut response = format!("📅 Расписание на {date}:\n");
    if !lessons.is_empty() {
        response.push_str("\n📚 Уроки по расписанию:\n");
        response.push_str(&bulleted(lessons));
    }
    if !events.is_empty() {
        response.push_str("\n\n📝 Личные события:\n");
        response.push_str(&bulleted(events));
    }
    response
}
