use anyhow::{bail, Context, Result};
use healthy_bites::api_connection::GeminiConnection;
use healthy_bites::bmi::{classify, compute_bmi};
use healthy_bites::cli::{parse_args, Cli, Command};
use healthy_bites::config::GatewayConfig;
use healthy_bites::controllers::health_assistant::DISCLAIMER;
use healthy_bites::controllers::{HealthAssistantScreen, RequestState};
use healthy_bites::gateway::HealthGateway;
use healthy_bites::logging::init_tracing;
use healthy_bites::models::{MealType, WellnessProfile};
use healthy_bites::render;
use healthy_bites::shell::{Screen, Shell, ViewState};
use tokio::io::{AsyncBufReadExt, BufReader};

type AppShell = Shell<GeminiConnection>;

fn load_config(cli: &Cli) -> GatewayConfig {
    let mut config = GatewayConfig::from_env();
    if let Some(model) = &cli.model {
        config.model = model.clone();
    }
    if let Some(api_base) = &cli.api_base {
        config.api_base = api_base.clone();
    }
    config
}

fn report<T>(state: &RequestState<T>, render_result: impl Fn(&T) -> String) -> Result<()> {
    match state {
        RequestState::Success(value) => {
            println!("{}", render_result(value));
            Ok(())
        }
        RequestState::Failure(message) => bail!("{}", message),
        RequestState::Idle | RequestState::Loading => bail!("request did not complete"),
    }
}

async fn run_recipe(
    shell: &mut AppShell,
    ingredients: String,
    dietary: String,
    meal_type: MealType,
) -> Result<()> {
    shell.navigate(ViewState::RecipeGenerator);
    let (gateway, screen) = shell.parts_mut();
    let Screen::Recipe(screen) = screen else {
        bail!("recipe screen is not mounted");
    };
    screen.ingredients = ingredients;
    screen.dietary_restrictions = dietary;
    screen.meal_type = meal_type;
    println!("Cooking up something healthy...");
    screen.submit(gateway).await?;
    report(screen.state(), render::recipe)
}

async fn run_analyze(shell: &mut AppShell, description: String) -> Result<()> {
    shell.navigate(ViewState::NutritionAnalyzer);
    let (gateway, screen) = shell.parts_mut();
    let Screen::Nutrition(screen) = screen else {
        bail!("nutrition screen is not mounted");
    };
    screen.food_description = description;
    println!("Analyzing...");
    screen.submit(gateway).await?;
    report(screen.state(), render::analysis)
}

async fn run_plan(shell: &mut AppShell, profile: WellnessProfile) -> Result<()> {
    shell.navigate(ViewState::WellnessPlanner);
    let (gateway, screen) = shell.parts_mut();
    let Screen::Wellness(screen) = screen else {
        bail!("wellness screen is not mounted");
    };
    screen.profile = profile;
    println!("Building your plan...");
    screen.submit(gateway).await?;
    report(screen.state(), render::plan)
}

fn print_new_messages(screen: &HealthAssistantScreen<GeminiConnection>, from: usize) {
    for message in &screen.messages()[from..] {
        println!("{}", render::chat_message(message));
    }
}

async fn run_chat(shell: &mut AppShell) -> Result<()> {
    shell.navigate(ViewState::HealthAssistant);
    let screen = shell
        .health_assistant_mut()
        .context("health assistant screen is not mounted")?;

    println!("{DISCLAIMER}\n");
    print_new_messages(screen, 0);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read from stdin")? {
        let line = line.trim_end().to_string();
        if line == "/quit" {
            break;
        }
        if let Some(args) = line.strip_prefix("/bmi") {
            let mut parts = args.split_whitespace();
            screen.height_input = parts.next().unwrap_or_default().to_string();
            screen.weight_input = parts.next().unwrap_or_default().to_string();
            match (screen.calculate_bmi(), screen.bmi_category()) {
                (Some(bmi), Some(category)) => println!("{}", render::bmi(bmi, category)),
                _ => println!("Usage: /bmi <height_cm> <weight_kg>"),
            }
            continue;
        }

        screen.input = line;
        let before = screen.messages().len();
        match screen.send().await {
            Ok(()) => print_new_messages(screen, before + 1),
            Err(e) => tracing::debug!("message not sent: {}", e),
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = parse_args();
    init_tracing(&cli.log_level);

    let config = load_config(&cli);
    let gateway = HealthGateway::new(GeminiConnection::new(&config));
    let mut shell = Shell::new(gateway);

    match cli.command.unwrap_or(Command::Home) {
        Command::Home => {
            println!("{}\n", render::header(shell.current_view()));
            println!("{}\n", render::home());
            println!("{}", render::footer());
        }
        Command::Recipe { ingredients, dietary, meal_type } => {
            run_recipe(&mut shell, ingredients, dietary, meal_type).await?;
        }
        Command::Analyze { description } => run_analyze(&mut shell, description).await?,
        Command::Plan { age, gender, weight, height, goal, activity_level } => {
            let profile = WellnessProfile {
                age,
                gender: gender.to_string(),
                weight,
                height,
                goal: goal.to_string(),
                activity_level: activity_level.to_string(),
            };
            run_plan(&mut shell, profile).await?;
        }
        Command::Chat => run_chat(&mut shell).await?,
        Command::Bmi { height, weight } => match compute_bmi(height, weight) {
            Some(bmi) => println!("{}", render::bmi(bmi, classify(bmi))),
            None => bail!("height and weight must both be positive numbers"),
        },
    }

    Ok(())
}
