// ABOUTME: Vitarva CLI - command-line front end for the practice toolkit
// ABOUTME: Dosha assessment, diet plans, AyurBot chat, appointments, session, and patient lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva
//!
//! Usage:
//! ```bash
//! # Print the assessment questionnaire
//! vitarva-cli questions
//!
//! # Score a filled questionnaire ({"1": "vata", "2": "pitta", ...})
//! vitarva-cli score --answers answers.json
//!
//! # Generate a reproducible diet plan
//! vitarva-cli plan --vata 60 --pitta 25 --kapha 15 --allergy dairy --diet-type jain --seed 7
//!
//! # Ask AyurBot (needs GEMINI_API_KEY)
//! vitarva-cli chat "Which spices balance Kapha in winter?"
//!
//! # Manage appointments in the local store
//! vitarva-cli appointment add --patient "Asha Rao" --date 2025-03-14 --time 10:30 --kind Consultation
//! vitarva-cli appointment list
//! ```
//!
//! Results are printed as pretty JSON on stdout; logs go to stderr.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;
use vitarva::config::AppConfig;
use vitarva::logging;
use vitarva_core::errors::{AppError, AppResult};
use vitarva_core::models::{Allergy, DietaryType};

#[derive(Parser)]
#[command(
    name = "vitarva-cli",
    about = "Vitarva Ayurvedic practice toolkit",
    long_about = "Dosha assessment, diet plan generation, AyurBot chat, and practice records from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Print the assessment questionnaire
    Questions,

    /// Score questionnaire answers
    Score {
        /// JSON object mapping question id to dosha
        #[arg(long)]
        answers: PathBuf,

        /// Fail when any question is unanswered
        #[arg(long)]
        strict: bool,
    },

    /// Generate a one-day diet plan
    Plan {
        /// Vata percentage
        #[arg(long)]
        vata: u8,

        /// Pitta percentage
        #[arg(long)]
        pitta: u8,

        /// Kapha percentage
        #[arg(long)]
        kapha: u8,

        /// Allergy to exclude (repeatable)
        #[arg(long = "allergy")]
        allergies: Vec<Allergy>,

        /// Dietary type to honour (repeatable)
        #[arg(long = "diet-type")]
        diet_types: Vec<DietaryType>,

        /// Disliked food name fragment (repeatable)
        #[arg(long = "dislike")]
        dislikes: Vec<String>,

        /// Free-text special requirements
        #[arg(long)]
        special: Option<String>,

        /// Seed for reproducible selections
        #[arg(long)]
        seed: Option<u64>,

        /// Food table overriding `VITARVA_FOOD_LIBRARY` and the bundled table
        #[arg(long)]
        food_library: Option<PathBuf>,
    },

    /// Ask AyurBot a question
    Chat {
        /// Message to send
        message: String,
    },

    /// Appointment book commands
    Appointment {
        #[command(subcommand)]
        action: AppointmentCommand,
    },

    /// Practitioner session commands
    Session {
        #[command(subcommand)]
        action: SessionCommand,
    },

    /// Patient-record service commands
    Patient {
        #[command(subcommand)]
        action: PatientCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum AppointmentCommand {
    /// List appointments in schedule order
    List {
        /// Only this day
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Book an appointment
    Add {
        /// Patient name
        #[arg(long)]
        patient: String,

        /// Day, YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,

        /// Start time, HH:MM
        #[arg(long)]
        time: String,

        /// Appointment type
        #[arg(long, default_value = "Consultation")]
        kind: String,

        /// Notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Move or edit an appointment
    Update {
        /// Appointment id
        id: Uuid,

        /// New day
        #[arg(long)]
        date: Option<NaiveDate>,

        /// New start time
        #[arg(long)]
        time: Option<String>,

        /// New notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Cancel an appointment
    Delete {
        /// Appointment id
        id: Uuid,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum SessionCommand {
    /// Record a signed-in practitioner
    Login {
        /// Display name
        #[arg(long)]
        name: String,

        /// Email
        #[arg(long)]
        email: String,

        /// Role
        #[arg(long, default_value = "Ayurvedic Dietitian")]
        role: String,
    },

    /// Show the signed-in practitioner
    Show,

    /// Sign out and clear local data
    Logout,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum PatientCommand {
    /// List patients
    List,

    /// Show one patient
    Show {
        /// Patient id
        id: String,
    },

    /// Show a patient's notes
    Notes {
        /// Patient id
        id: String,
    },
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let cli = Cli::parse();

    logging::init_from_env()
        .map_err(|e| AppError::internal(format!("Failed to initialise logging: {e}")))?;

    let config = AppConfig::from_env()?;
    info!("Vitarva CLI");

    match cli.command {
        Command::Questions => commands::assessment::questions(),
        Command::Score { answers, strict } => commands::assessment::score(&answers, strict),
        Command::Plan {
            vata,
            pitta,
            kapha,
            allergies,
            diet_types,
            dislikes,
            special,
            seed,
            food_library,
        } => commands::plan::generate(
            &config,
            &commands::plan::PlanArgs {
                percentages: (vata, pitta, kapha),
                allergies,
                diet_types,
                dislikes,
                special,
                seed,
                food_library,
            },
        ),
        Command::Chat { message } => commands::chat::ask(&config, &message).await,
        Command::Appointment { action } => match action {
            AppointmentCommand::List { date } => commands::appointments::list(&config, date),
            AppointmentCommand::Add {
                patient,
                date,
                time,
                kind,
                notes,
            } => commands::appointments::add(&config, patient, date, time, kind, notes),
            AppointmentCommand::Update {
                id,
                date,
                time,
                notes,
            } => commands::appointments::update(&config, id, date, time, notes),
            AppointmentCommand::Delete { id } => commands::appointments::delete(&config, id),
        },
        Command::Session { action } => match action {
            SessionCommand::Login { name, email, role } => {
                commands::session::login(&config, name, email, role)
            }
            SessionCommand::Show => commands::session::show(&config),
            SessionCommand::Logout => commands::session::logout(&config),
        },
        Command::Patient { action } => match action {
            PatientCommand::List => commands::patients::list(&config).await,
            PatientCommand::Show { id } => commands::patients::show(&config, &id).await,
            PatientCommand::Notes { id } => commands::patients::notes(&config, &id).await,
        },
    }
}
