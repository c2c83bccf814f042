use clap::{Parser, Subcommand};
use fitplan_core::*;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "fitplan")]
#[command(about = "Fitness plan registration and matching system", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a profile and match it against the plan catalog (default)
    Register,

    /// List the available fitness plans
    Plans,
}

fn main() -> Result<()> {
    // Initialize logging
    fitplan_core::logging::init();

    let cli = Cli::parse();

    // Determine data directory
    let mut config = Config::load()?;
    if let Some(data_dir) = cli.data_dir {
        config.data.data_dir = data_dir;
    }

    match cli.command {
        Some(Commands::Plans) => cmd_plans(),
        Some(Commands::Register) | None => cmd_register(&config),
    }
}

fn cmd_plans() -> Result<()> {
    let catalog = load_valid_catalog()?;
    display_catalog(catalog);
    Ok(())
}

fn cmd_register(config: &Config) -> Result<()> {
    let catalog = load_valid_catalog()?;

    std::fs::create_dir_all(&config.data.data_dir)?;
    let registry = UserRegistry::new(config.data.users_file());

    display_catalog(catalog);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let user = collect_registration(&mut input, &registry)?;

    // Persist the profile. A failed append is logged but does not stop the
    // match/report flow; the profile still exists in memory.
    if let Err(e) = registry.append(&user) {
        tracing::error!(
            "Failed to save user information to {:?}: {}",
            registry.path(),
            e
        );
        println!("Error saving user information: {}", e);
    }

    let matched = match_plans(&user, catalog);
    let total = weekly_exercise_time(user.fitness_level, matched.len(), &config.schedule);

    display_matched_plans(&matched);
    println!("Total Weekly Exercise Time: {} minutes", total);
    println!("Additional Notes: Consider consulting a healthcare professional based on your medical history.");

    Ok(())
}

/// Load the default catalog, refusing to run with an inconsistent one
fn load_valid_catalog() -> Result<&'static [FitnessPlan]> {
    let catalog = get_default_catalog();
    let errors = catalog::validate(catalog);
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation("Invalid catalog".into()));
    }
    Ok(catalog)
}

/// Run the interactive registration prompts and build the profile.
///
/// Each prompt re-asks until the answer is valid; end of input aborts with
/// `Error::InputClosed` instead of looping forever.
fn collect_registration(input: &mut impl BufRead, registry: &UserRegistry) -> Result<UserProfile> {
    let username = loop {
        let candidate = prompt(input, "Enter a username for registration:")?;
        if registry.is_username_taken(&candidate) {
            println!("Username is already taken. Please choose another.");
            continue;
        }
        break candidate;
    };

    let password_hash = loop {
        let candidate = prompt(input, "Enter a password:")?;
        if candidate.is_empty() {
            println!("Password cannot be empty. Please try again.");
            continue;
        }
        let hash = hash_password(&candidate);
        if registry.is_password_taken(&hash) {
            println!("Password is already taken. Please choose another.");
            continue;
        }

        let confirmation = prompt(input, "Confirm your password:")?;
        if confirmation != candidate {
            println!("Passwords do not match. Please try again:");
            continue;
        }
        break hash;
    };

    let email = loop {
        let candidate = prompt(input, "Enter your email:")?;
        if !validate::is_valid_email(&candidate) {
            println!("Invalid email format. Please enter a valid email.");
            continue;
        }
        if registry.is_email_taken(&candidate) {
            println!("Email is already taken. Please choose another.");
            continue;
        }
        break candidate;
    };

    let fitness_goals = loop {
        println!("Choose your fitness goals from the following options:");
        for goal in GOAL_VOCABULARY {
            println!(" - {}", goal);
        }
        let line = prompt(input, "Enter your goals separated by commas:")?;
        let goals = validate::parse_goals(&line);
        if goals.is_empty() {
            println!("Invalid input. Please enter at least one valid fitness goal from the list.");
            continue;
        }
        break goals;
    };

    let fitness_level = loop {
        let candidate = prompt(
            input,
            "Enter your current fitness level (Beginner, Intermediate, Advanced):",
        )?;
        match FitnessLevel::from_str(&candidate) {
            Ok(level) => break level,
            Err(_) => {
                println!("Invalid input. Please enter Beginner, Intermediate, or Advanced.")
            }
        }
    };

    let age = loop {
        let candidate = prompt(input, "Enter your age:")?;
        if validate::is_valid_age(&candidate) {
            // is_valid_age guarantees a digits-only value below 130
            break candidate.parse::<u8>().map_err(|e| Error::Other(e.to_string()))?;
        }
        println!("Invalid age. Please enter a valid number between 1 and 129.");
    };

    let illnesses = loop {
        let candidate = prompt(input, "Enter any illnesses (if none, type 'None'):")?;
        if validate::is_non_empty(&candidate) {
            break candidate;
        }
        println!("Invalid input. This field cannot be empty.");
    };

    let surgeries = loop {
        let candidate = prompt(input, "Enter any surgeries (if none, type 'None'):")?;
        if validate::is_non_empty(&candidate) {
            break candidate;
        }
        println!("Invalid input. This field cannot be empty.");
    };

    Ok(UserProfile {
        username,
        password_hash,
        email,
        fitness_goals,
        fitness_level,
        age,
        illnesses,
        surgeries,
    })
}

/// Print a message and read one trimmed answer line.
///
/// Returns `Error::InputClosed` if the input stream is exhausted.
fn prompt(input: &mut impl BufRead, message: &str) -> Result<String> {
    println!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::InputClosed);
    }
    Ok(line.trim().to_string())
}

fn display_catalog(catalog: &[FitnessPlan]) {
    println!("\n--- Available Fitness Plans ---");
    for plan in catalog {
        display_plan(plan);
    }
}

fn display_matched_plans(matched: &[&FitnessPlan]) {
    if matched.is_empty() {
        println!("\nNo matching fitness plans found based on your input.");
    } else {
        println!("\n--- Matched Fitness Plans ---");
        for plan in matched {
            display_plan(plan);
        }
    }
}

fn display_plan(plan: &FitnessPlan) {
    println!("{}:", plan.category);
    println!(
        "  - Minimum recommended duration per week: {} minutes",
        plan.min_duration_minutes
    );
    println!(
        "  - Minimum required fitness level: {}",
        plan.min_fitness_level
    );
    println!("  - Health goal: {}", plan.health_goal);
    println!();
}
