//! ironlog - workout log with personal record tracking
//!
//! Command line front end: import and finish workouts, list personal
//! records, and manage templates, exercises, settings and body
//! measurements.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use ironlog_core::calculations::{total_completed_sets, workout_volume};
use ironlog_core::format::{format_duration_between, format_pr_diff, format_relative_time};
use ironlog_core::settings::WeightUnit;
use ironlog_core::catalog::{ExerciseCategory, MuscleGroup, NewExercise};
use ironlog_core::{
    AppSettings, BackfillOutcome, Config, Database, Journal, PartialSettings, PrEvent, PrMetric,
    Template, Workout,
};

#[derive(Parser)]
#[command(name = "ironlog")]
#[command(about = "Workout log with personal record tracking")]
#[command(version)]
struct Args {
    /// Database file to use instead of the configured one
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Import workouts from a JSON file (array of workouts)
    Import { file: PathBuf },

    /// Finish a workout from a JSON file and show its personal records
    Finish {
        file: PathBuf,

        /// End time (RFC 3339); defaults to now
        #[arg(long)]
        at: Option<DateTime<Utc>>,
    },

    /// List workouts, most recent first
    Workouts {
        /// Only completed workouts containing this exercise
        #[arg(short, long)]
        exercise: Option<String>,
    },

    /// Replay workout history into the record log (runs once)
    Backfill,

    /// List personal records, newest first
    Records {
        /// Only records for this exercise
        #[arg(short, long)]
        exercise: Option<String>,

        /// Maximum number of records to show
        #[arg(short, long, default_value_t = 10)]
        limit: usize,

        /// Output format: text (default) or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Progression of one metric for an exercise, oldest first
    Timeline {
        exercise: String,

        /// weight, reps, volume or estimated1rm
        metric: PrMetric,
    },

    /// Show or change settings
    #[command(subcommand)]
    Settings(SettingsCommand),

    /// Record or list body measurements
    #[command(subcommand)]
    Measure(MeasureCommand),

    /// Manage workout templates
    #[command(subcommand)]
    Templates(TemplatesCommand),

    /// Manage template folders
    #[command(subcommand)]
    Folders(FoldersCommand),

    /// Browse the exercise library and manage custom exercises
    #[command(subcommand)]
    Exercises(ExercisesCommand),
}

#[derive(Subcommand)]
enum TemplatesCommand {
    /// List templates, newest first
    List {
        /// Only templates in this folder
        #[arg(long)]
        folder: Option<String>,
    },

    /// Save a stored workout as a template
    FromWorkout {
        workout_id: String,
        name: String,

        #[arg(long)]
        folder: Option<String>,
    },

    /// Copy a template
    Duplicate { id: String },

    /// Start a workout from a template and write it as JSON
    Start {
        id: String,

        /// File to write the workout to; prints to stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Delete a template
    Delete { id: String },
}

#[derive(Subcommand)]
enum FoldersCommand {
    /// List folders in display order
    List,

    /// Add a folder after the existing ones
    Add { name: String },

    Rename { id: String, name: String },

    /// Delete a folder; its templates move to the top level
    Delete { id: String },
}

#[derive(Subcommand)]
enum ExercisesCommand {
    /// List exercises, built-in first
    List {
        /// Only exercises for this muscle group (e.g. chest, full_body)
        #[arg(short, long)]
        muscle: Option<MuscleGroup>,

        /// Match name or equipment, ignoring case
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Add a custom exercise
    Add {
        name: String,

        /// barbell, dumbbell, machine, cable, bodyweight, band, kettlebell or other
        #[arg(long)]
        category: ExerciseCategory,

        #[arg(long)]
        muscle: MuscleGroup,

        #[arg(long, default_value = "")]
        equipment: String,
    },

    /// Delete a custom exercise
    Delete { id: String },
}

#[derive(Subcommand)]
enum SettingsCommand {
    /// Print the current settings
    Show,

    /// Change personal record thresholds or the weight unit
    Set {
        /// Minimum weight gain in kg
        #[arg(long)]
        threshold_weight: Option<f64>,

        /// Minimum rep gain
        #[arg(long)]
        threshold_reps: Option<u32>,

        /// Minimum volume gain in percent
        #[arg(long)]
        threshold_volume: Option<f64>,

        /// Minimum estimated 1RM gain in percent
        #[arg(long = "threshold-1rm")]
        threshold_1rm: Option<f64>,

        /// kg or lbs
        #[arg(long)]
        unit: Option<WeightUnit>,
    },

    /// Restore all defaults
    Reset,
}

#[derive(Subcommand)]
enum MeasureCommand {
    /// Add a measurement
    Add {
        /// Body weight in kg
        #[arg(long)]
        weight: Option<f64>,

        #[arg(long)]
        body_fat: Option<f64>,

        #[arg(long)]
        calories: Option<f64>,

        /// Measurement time (RFC 3339); defaults to now
        #[arg(long)]
        date: Option<DateTime<Utc>>,
    },

    /// List measurements, most recent first
    List,
}

fn main() -> Result<()> {
    let args = Args::parse();

    Config::ensure_xdg_env();

    // Load configuration
    let config = Config::load().context("failed to load configuration")?;

    // Initialize logging
    let _log_guard =
        ironlog_core::logging::init(&config.logging).context("failed to initialize logging")?;

    // Open database
    let db_path = args
        .database
        .clone()
        .unwrap_or_else(|| config.resolved_database_path());
    tracing::info!(path = %db_path.display(), "Opening database");

    let db = Database::open(&db_path).context("failed to open database")?;
    db.migrate().context("failed to run database migrations")?;
    let journal = Journal::new(db);

    // The backfill command reports its own outcome
    if !matches!(args.command, Command::Backfill) {
        journal
            .backfill_if_needed()
            .context("failed to backfill personal records")?;
    }

    match args.command {
        Command::Import { file } => import(&journal, &file),
        Command::Finish { file, at } => finish(&journal, &file, at.unwrap_or_else(Utc::now)),
        Command::Workouts { exercise } => list_workouts(&journal, exercise.as_deref()),
        Command::Backfill => backfill(&journal),
        Command::Records {
            exercise,
            limit,
            format,
        } => list_records(&journal, exercise.as_deref(), limit, &format),
        Command::Timeline { exercise, metric } => timeline(&journal, &exercise, metric),
        Command::Settings(command) => settings(&journal, command),
        Command::Measure(command) => measure(&journal, command),
        Command::Templates(command) => templates(&journal, command),
        Command::Folders(command) => folders(&journal, command),
        Command::Exercises(command) => exercises(&journal, command),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

fn import(journal: &Journal, file: &Path) -> Result<()> {
    let workouts: Vec<Workout> = read_json(file)?;
    for workout in &workouts {
        journal
            .save_workout(workout)
            .with_context(|| format!("failed to save workout {}", workout.id))?;
    }

    tracing::info!(count = workouts.len(), "Imported workouts");
    println!("Imported {} workout(s).", workouts.len());
    Ok(())
}

fn finish(journal: &Journal, file: &Path, end_time: DateTime<Utc>) -> Result<()> {
    let workout: Workout = read_json(file)?;
    let name = workout.name.clone();
    let outcome = journal
        .finish_workout(workout, end_time)
        .context("failed to finish workout")?;

    println!("Finished {}.", name);
    if outcome.events.is_empty() {
        println!("No new personal records.");
        return Ok(());
    }

    if outcome.added > 0 {
        println!("{} new personal record(s):", outcome.added);
    } else {
        println!(
            "{} personal record(s), already recorded:",
            outcome.events.len()
        );
    }
    for event in &outcome.events {
        println!(
            "  {:<24} {:<16} {}",
            journal.exercise_name(&event.exercise_id)?,
            event.metric.label(),
            format_pr_diff(event)
        );
    }
    Ok(())
}

fn list_workouts(journal: &Journal, exercise: Option<&str>) -> Result<()> {
    let workouts = match exercise {
        Some(exercise_id) => journal.workouts_for_exercise(exercise_id)?,
        None => journal.workouts()?,
    };

    if workouts.is_empty() {
        println!("No workouts found.");
        return Ok(());
    }

    for workout in &workouts {
        let sets: usize = workout
            .exercises
            .iter()
            .map(|e| total_completed_sets(&e.sets))
            .sum();
        let status = if workout.is_completed() { "" } else { " (active)" };
        println!(
            "{}  {:<24} {:>8}  {:>3} sets  {:>8} kg{}",
            workout.start_time.format("%Y-%m-%d"),
            workout.name,
            format_duration_between(workout.start_time, workout.end_time),
            sets,
            workout_volume(workout),
            status
        );
    }
    Ok(())
}

fn backfill(journal: &Journal) -> Result<()> {
    match journal.backfill_if_needed()? {
        BackfillOutcome::AlreadyBackfilled => println!("Personal records already backfilled."),
        BackfillOutcome::NoCompletedWorkouts => {
            println!("No completed workouts yet, nothing to backfill.")
        }
        BackfillOutcome::Completed { detected, added } => {
            println!("Backfill complete: {} record(s) detected, {} added.", detected, added)
        }
    }
    Ok(())
}

fn list_records(journal: &Journal, exercise: Option<&str>, limit: usize, format: &str) -> Result<()> {
    let mut events = match exercise {
        Some(exercise_id) => journal.for_exercise(exercise_id)?,
        None => journal.recent(limit)?,
    };
    events.truncate(limit);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&events)?);
        return Ok(());
    }

    if events.is_empty() {
        println!("No personal records yet.");
        return Ok(());
    }

    for event in &events {
        print_record(journal, event)?;
    }
    Ok(())
}

fn print_record(journal: &Journal, event: &PrEvent) -> Result<()> {
    println!(
        "{}  {:<24} {:<16} {:>10}  {:<12} ({})",
        event.date.format("%Y-%m-%d"),
        journal.exercise_name(&event.exercise_id)?,
        event.metric.label(),
        event.new_value,
        format_pr_diff(event),
        format_relative_time(event.date)
    );
    Ok(())
}

fn timeline(journal: &Journal, exercise: &str, metric: PrMetric) -> Result<()> {
    let events = journal.timeline(exercise, metric)?;
    if events.is_empty() {
        println!("No {} records for {}.", metric, exercise);
        return Ok(());
    }

    println!("{} - {}", journal.exercise_name(exercise)?, metric.label());
    for event in &events {
        println!(
            "  {}  {:>10}  {}",
            event.date.format("%Y-%m-%d"),
            event.new_value,
            format_pr_diff(event)
        );
    }
    Ok(())
}

fn settings(journal: &Journal, command: SettingsCommand) -> Result<()> {
    match command {
        SettingsCommand::Show => print_settings(&journal.settings()?),
        SettingsCommand::Set {
            threshold_weight,
            threshold_reps,
            threshold_volume,
            threshold_1rm,
            unit,
        } => {
            let update = PartialSettings {
                weight_unit: unit,
                pr_threshold_weight: threshold_weight,
                pr_threshold_reps: threshold_reps,
                pr_threshold_volume_percent: threshold_volume,
                pr_threshold_1rm_percent: threshold_1rm,
                ..Default::default()
            };
            if update == PartialSettings::default() {
                anyhow::bail!("Nothing to change; pass at least one option (see --help)");
            }
            let settings = journal.update_settings(update)?;
            println!("Settings updated.");
            print_settings(&settings);
        }
        SettingsCommand::Reset => {
            journal.reset_settings()?;
            println!("Settings reset to defaults.");
        }
    }
    Ok(())
}

fn print_settings(settings: &AppSettings) {
    println!("Weight unit:           {}", settings.weight_unit.as_str());
    println!("Rest timer (work):     {}s", settings.default_rest_timer_work);
    println!("Rest timer (warmup):   {}s", settings.default_rest_timer_warmup);
    println!("PR threshold weight:   +{} kg", settings.pr_threshold_weight);
    println!("PR threshold reps:     +{}", settings.pr_threshold_reps);
    println!("PR threshold volume:   +{}%", settings.pr_threshold_volume_percent);
    println!("PR threshold 1RM:      +{}%", settings.pr_threshold_1rm_percent);
}

fn measure(journal: &Journal, command: MeasureCommand) -> Result<()> {
    match command {
        MeasureCommand::Add {
            weight,
            body_fat,
            calories,
            date,
        } => {
            if weight.is_none() && body_fat.is_none() && calories.is_none() {
                anyhow::bail!("Pass at least one of --weight, --body-fat or --calories");
            }
            let entry = journal.add_measurement(date.unwrap_or_else(Utc::now), weight, body_fat, calories)?;
            println!("Added measurement {}.", entry.id);
        }
        MeasureCommand::List => {
            let measurements = journal.measurements()?;
            if measurements.is_empty() {
                println!("No measurements yet.");
            }
            for m in &measurements {
                println!(
                    "{}  {:>8}  {:>6}  {:>8}",
                    m.date.format("%Y-%m-%d"),
                    optional(m.weight, " kg"),
                    optional(m.body_fat_percent, "%"),
                    optional(m.calories, " kcal")
                );
            }
        }
    }
    Ok(())
}

fn optional(value: Option<f64>, suffix: &str) -> String {
    value
        .map(|v| format!("{}{}", v, suffix))
        .unwrap_or_else(|| "-".to_string())
}

fn templates(journal: &Journal, command: TemplatesCommand) -> Result<()> {
    match command {
        TemplatesCommand::List { folder } => {
            let templates = match folder.as_deref() {
                Some(folder_id) => journal.templates_in_folder(Some(folder_id))?,
                None => journal.templates()?,
            };
            if templates.is_empty() {
                println!("No templates found.");
            }
            for template in &templates {
                print_template(template);
            }
        }
        TemplatesCommand::FromWorkout {
            workout_id,
            name,
            folder,
        } => {
            if let Some(folder_id) = folder.as_deref() {
                ensure_folder(journal, folder_id)?;
            }
            let template = journal.save_workout_as_template(&workout_id, &name, folder, Utc::now())?;
            println!("Saved template {} ({}).", template.name, template.id);
        }
        TemplatesCommand::Duplicate { id } => {
            let copy = journal.duplicate_template(&id, Utc::now())?;
            println!("Created {} ({}).", copy.name, copy.id);
        }
        TemplatesCommand::Start { id, output } => {
            let workout = journal.start_from_template(&id, Utc::now())?;
            let json = serde_json::to_string_pretty(&workout)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("Started {}; workout written to {}.", workout.name, path.display());
                }
                None => println!("{}", json),
            }
        }
        TemplatesCommand::Delete { id } => {
            journal.delete_template(&id)?;
            println!("Deleted template {}.", id);
        }
    }
    Ok(())
}

fn print_template(template: &Template) {
    let last_used = template
        .last_used
        .map(format_relative_time)
        .unwrap_or_else(|| "never used".to_string());
    println!(
        "{}  {:<24} {:>2} exercise(s)  {}",
        template.id,
        template.name,
        template.exercises.len(),
        last_used
    );
}

fn ensure_folder(journal: &Journal, folder_id: &str) -> Result<()> {
    if !journal.folders()?.iter().any(|f| f.id == folder_id) {
        anyhow::bail!("No folder with id {}", folder_id);
    }
    Ok(())
}

fn folders(journal: &Journal, command: FoldersCommand) -> Result<()> {
    match command {
        FoldersCommand::List => {
            let folders = journal.folders()?;
            if folders.is_empty() {
                println!("No folders yet.");
            }
            for folder in &folders {
                let count = journal.templates_in_folder(Some(&folder.id))?.len();
                println!("{}  {:<24} {} template(s)", folder.id, folder.name, count);
            }
        }
        FoldersCommand::Add { name } => {
            let folder = journal.create_folder(&name)?;
            println!("Created folder {} ({}).", folder.name, folder.id);
        }
        FoldersCommand::Rename { id, name } => {
            let folder = journal.rename_folder(&id, &name)?;
            println!("Renamed folder to {}.", folder.name);
        }
        FoldersCommand::Delete { id } => {
            journal.delete_folder(&id, Utc::now())?;
            println!("Deleted folder {}.", id);
        }
    }
    Ok(())
}

fn exercises(journal: &Journal, command: ExercisesCommand) -> Result<()> {
    match command {
        ExercisesCommand::List { muscle, search } => {
            let mut exercises = match search.as_deref() {
                Some(query) => journal.search_exercises(query)?,
                None => journal.exercises()?,
            };
            if let Some(muscle) = muscle {
                exercises.retain(|e| e.muscle_group == muscle);
            }
            if exercises.is_empty() {
                println!("No exercises found.");
            }
            for exercise in &exercises {
                println!(
                    "{:<28} {:<32} {:<12} {:<10} {}{}",
                    exercise.id,
                    exercise.name,
                    exercise.muscle_group.as_str(),
                    exercise.category.as_str(),
                    exercise.equipment,
                    if exercise.is_custom { " (custom)" } else { "" }
                );
            }
        }
        ExercisesCommand::Add {
            name,
            category,
            muscle,
            equipment,
        } => {
            let exercise = journal.create_exercise(NewExercise {
                name,
                category,
                muscle_group: muscle,
                equipment,
            })?;
            println!("Added exercise {} ({}).", exercise.name, exercise.id);
        }
        ExercisesCommand::Delete { id } => {
            journal.delete_exercise(&id)?;
            println!("Deleted exercise {}.", id);
        }
    }
    Ok(())
}
