mod display;
mod error;
mod parser;
mod planner;
mod web;

use display::{print_study_plan, write_plan_to_file};
use parser::load_request;
use planner::generate_study_plan;
use web::ServerConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Check if we should run in web mode
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 && args[1] == "web" {
        let mut config = ServerConfig::default();
        if let Some(port) = args.get(2).and_then(|p| p.parse::<u16>().ok()) {
            config.port = port;
        }
        if let Ok(origin) = std::env::var("ALLOWED_ORIGIN") {
            config.allowed_origin = origin;
        }

        println!("Starting web server on port {}...", config.port);
        println!("Allowed CORS origin: {}", config.allowed_origin);
        println!("Access the API at http://localhost:{}", config.port);

        web::start_server(config).await?;
        return Ok(());
    }

    // CLI mode: read a plan request from a JSON file and print the schedule
    let request_path = args.get(1).map(String::as_str).unwrap_or("request.json");

    println!("Loading plan request from {}...", request_path);
    let request = load_request(request_path)?;
    println!(
        "Loaded {} subjects, {} daily study hours",
        request.subjects.len(),
        request.daily_hours
    );

    let plan = generate_study_plan(&request)?;
    print_study_plan(&plan);

    write_plan_to_file(&plan, "study_plan.txt")?;
    println!("\nPlan saved to study_plan.txt");

    Ok(())
}
