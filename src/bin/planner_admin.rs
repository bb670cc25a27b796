use anyhow::{anyhow, Result};
use smart_planner_bot::config::StoreConfig;
use smart_planner_bot::database::{JsonFileStore, ScheduleStore};
use std::env;

fn main() -> Result<()> {
    // Initialize basic logging for the admin tool
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match command {
        "init" => init_document(),
        "check" => check_document(),
        "set-lessons" => set_lessons(&args[2..]),
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            print_help();
            std::process::exit(1);
        }
    }
}

fn open_store() -> Result<(JsonFileStore, StoreConfig)> {
    dotenvy::dotenv().ok();
    let config = StoreConfig::from_env()?;
    log::debug!("Using data file {}", config.data_file.display());
    Ok((JsonFileStore::new(&config.data_file, config.weekdays.clone()), config))
}

fn init_document() -> Result<()> {
    let (store, _) = open_store()?;

    if store.path().exists() {
        println!("ℹ️  {} already exists, leaving it untouched", store.path().display());
        return Ok(());
    }

    let doc = store.load()?;
    store.save(&doc)?;
    println!("✅ Created {} with an empty weekly schedule", store.path().display());
    Ok(())
}

fn check_document() -> Result<()> {
    let (store, config) = open_store()?;
    println!("🔍 Checking {}...", store.path().display());

    let doc = match store.load() {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    println!("📚 Weekly schedule:");
    for day in config.weekdays.iter() {
        println!("  • {}: {} lessons", day, doc.lessons_for(day).len());
    }
    for day in doc.schedule.keys().filter(|day| !config.weekdays.contains(day)) {
        println!("  ⚠️  '{day}' is not a configured weekday and will never be shown");
    }
    println!("👥 {} users, {} events", doc.users.len(), doc.event_count());
    Ok(())
}

fn set_lessons(args: &[String]) -> Result<()> {
    let Some((weekday, lessons)) = args.split_first() else {
        return Err(anyhow!("Usage: planner-admin set-lessons <weekday> [lesson; lesson; ...]"));
    };

    let (store, config) = open_store()?;
    let weekday = weekday.trim().to_lowercase();
    if !config.weekdays.contains(&weekday) {
        let known: Vec<&str> = config.weekdays.iter().collect();
        return Err(anyhow!("Unknown weekday '{}', expected one of: {}", weekday, known.join(", ")));
    }

    let lessons: Vec<String> = lessons
        .join(" ")
        .split(';')
        .map(|lesson| lesson.trim().to_string())
        .filter(|lesson| !lesson.is_empty())
        .collect();

    let mut doc = store.load()?;
    let count = lessons.len();
    doc.set_lessons(&weekday, lessons);
    store.save(&doc)?;

    println!("✅ {weekday}: {count} lessons saved to {}", store.path().display());
    Ok(())
}

fn print_help() {
    println!("📅 SmartPlanner Bot - Schedule Admin Tool");
    println!();
    println!("USAGE:");
    println!("    planner-admin [COMMAND]");
    println!();
    println!("COMMANDS:");
    println!("    init                       Create the data file if it does not exist");
    println!("    check                      Validate the data file and print a summary");
    println!("    set-lessons <day> [list]   Replace one weekday's lessons (separated by ';')");
    println!("    help                       Show this help message");
    println!();
    println!("ENVIRONMENT:");
    println!("    DATA_FILE       Path to the schedule document (default: data.json)");
    println!("    WEEKDAY_NAMES   Seven comma-separated weekday names, Monday first");
    println!();
    println!("EXAMPLES:");
    println!("    planner-admin init");
    println!("    planner-admin set-lessons вторник \"Алгебра; Физика; История\"");
    println!("    planner-admin set-lessons суббота            # clear Saturday");
    println!();
}
