use clap::{Parser, Subcommand};
use std::io::{self, Write};
use tracing::debug;
use zerowaste::prelude::*;
use zerowaste::scaling::{DEMO_BASE_SERVINGS, DEMO_SERVINGS_RANGE};

/// Zero-waste recipe adaptation and scaling CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Optional path to a recipe catalog JSON file (defaults to the built-in recipes)
    #[arg(long, global = true)]
    catalog: Option<String>,

    /// Optional path to a substitution table JSON file
    #[arg(long, global = true)]
    substitutions: Option<String>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List catalog recipes, optionally filtered by title or cuisine
    List {
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Build a zero-waste plan for a recipe from the ingredients you have
    Plan {
        /// Recipe id or title
        recipe: String,
        /// Comma-separated list of ingredients you have
        #[arg(long, default_value = "")]
        have: String,
        /// Print the plan as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Scale the demo batter ingredients to a number of servings
    Scale {
        #[arg(short, long, default_value_t = DEMO_BASE_SERVINGS)]
        servings: u32,
    },
    /// Show the placeholder nutrition figures
    Nutrition,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let catalog = load_catalog(cli.catalog.as_deref());
    let planner = load_planner(cli.substitutions.as_deref());

    if cli.human {
        run_interactive(&catalog, &planner);
        return;
    }

    match cli.command {
        Some(Command::List { search }) => run_list(&catalog, &search),
        Some(Command::Plan { recipe, have, json }) => {
            run_plan(&catalog, &planner, &recipe, &have, json)
        }
        Some(Command::Scale { servings }) => run_scale(servings),
        Some(Command::Nutrition) => run_nutrition(),
        None => exit_with_error("A subcommand is required in non-interactive mode."),
    }
}

fn init_tracing(fallback_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(fallback_level))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn load_catalog(path: Option<&str>) -> RecipeCatalog {
    let Some(path) = path else {
        return RecipeCatalog::builtin();
    };
    RecipeCatalog::from_file(path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load catalog: {}", e)))
}

fn load_planner(path: Option<&str>) -> Planner {
    let mut builder = Planner::builder();
    if let Some(path) = path {
        let table = SubstitutionTable::from_file(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to load substitutions: {}", e))
        });
        builder = builder.substitutions(table);
    }
    builder.build()
}

fn resolve_recipe<'a>(catalog: &'a RecipeCatalog, key: &str) -> &'a Recipe {
    let found = match key.trim().parse::<u32>() {
        Ok(id) => catalog.get(id),
        Err(_) => catalog.find_by_title(key),
    };
    found.unwrap_or_else(|| exit_with_error(&format!("No recipe matches '{}'", key)))
}

fn run_list(catalog: &RecipeCatalog, search: &str) {
    let matches = catalog.search(search);
    if matches.is_empty() {
        println!("No recipes match '{}'.", search);
        return;
    }
    for recipe in matches {
        println!(
            "{:>3}  {:<24} {:<15} {:<7} {}",
            recipe.id,
            recipe.title,
            recipe.cuisine.as_deref().unwrap_or("-"),
            recipe.time.as_deref().unwrap_or("-"),
            recipe
                .rating
                .map_or("-".to_string(), |r| format!("{:.1}", r)),
        );
    }
}

fn run_plan(catalog: &RecipeCatalog, planner: &Planner, key: &str, have: &str, json: bool) {
    let recipe = resolve_recipe(catalog, key);
    let plan = planner.build_plan(recipe, have);
    debug!(branch = ?plan.branch(), "plan ready");

    if json {
        let out = serde_json::to_string_pretty(&plan)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize plan: {}", e)));
        println!("{}", out);
        return;
    }

    println!("\n--- {} ---", recipe.title);
    for ingredient in &recipe.ingredients {
        let mark = if plan.have.contains(ingredient) { "x" } else { " " };
        println!("  [{}] {}", mark, ingredient);
    }
    let pantry = PantrySet::parse(have);
    let unused = pantry.unused_by(recipe);
    if !unused.is_empty() {
        println!("  (not in this recipe: {})", unused.join(", "));
    }
    println!();
    for line in plan.plan_lines() {
        println!("{}", line);
    }
}

fn run_scale(servings: u32) {
    if !DEMO_SERVINGS_RANGE.contains(&servings) {
        exit_with_error(&format!(
            "Servings must be between {} and {}.",
            DEMO_SERVINGS_RANGE.start(),
            DEMO_SERVINGS_RANGE.end()
        ));
    }
    let ratio = ServingRatio::new(DEMO_BASE_SERVINGS as f64, servings as f64)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));

    println!("Servings: {}", servings);
    for (ingredient, scaled) in scale_ingredients(&demo_ingredients(), &ratio) {
        println!("  {:<8} {} {}", ingredient.name, scaled, ingredient.unit);
    }
}

fn run_nutrition() {
    for nutrient in NutritionFacts::placeholder().nutrients {
        println!("  {}", nutrient);
    }
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive(catalog: &RecipeCatalog, planner: &Planner) {
    println!("--- Zerowaste Interactive Mode ---");
    run_list(catalog, "");

    let key = prompt_for_input("\nEnter recipe id or title", Some("1"));
    let have = prompt_for_input("Enter the ingredients you have (comma-separated)", None);
    run_plan(catalog, planner, &key, &have, false);

    let servings = loop {
        let raw = prompt_for_input("\nScale demo batter to servings", Some("4"));
        match raw.parse::<u32>() {
            Ok(n) if DEMO_SERVINGS_RANGE.contains(&n) => break n,
            _ => println!("Please enter a whole number between 1 and 12."),
        }
    };
    run_scale(servings);
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    if let Err(e) = io::stdout().flush() {
        exit_with_error(&format!("Failed to flush stdout: {}", e));
    }
    if let Err(e) = io::stdin().read_line(&mut line) {
        exit_with_error(&format!("Failed to read line: {}", e));
    }
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
