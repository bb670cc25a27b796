use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Команды SmartPlannerBot:")]
pub enum Command {
    #[command(description = "начать работу с ботом")]
    Start,
    #[command(description = "показать список команд")]
    Help,
    #[command(description = "добавить событие на конкретную дату")]
    Add,
    #[command(description = "показать расписание на выбранную дату")]
    Show,
    #[command(description = "отменить текущее действие")]
    Cancel,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Start => "/start",
            Command::Help => "/help",
            Command::Add => "/add",
            Command::Show => "/show",
            Command::Cancel => "/cancel",
        }
    }
}
