use std::env;
use std::error::Error;
use std::process::ExitCode;

use log::error;

use grex::configuration::Configuration;
use grex::display::displaystate::DisplayState;
use grex::engine::shapeparameters::ShapeParameters;
use grex::explorer::GrowthExplorer;

// grex [config.json] [a_hundredths b_hundredths]
fn run(args: &[String]) -> Result<String, Box<dyn Error>> {
    let configuration = match args.first() {
        Some(path) => Configuration::from_reader(path)?,
        None => Configuration::new()
    };
    let initial = ShapeParameters::default();
    let parameters = match (args.get(1), args.get(2)) {
        (Some(a), Some(b)) => ShapeParameters::new(a.parse()?, b.parse()?),
        _ => initial
    };
    let display = DisplayState::default()
        .with_density(true)
        .with_parameter_change(initial, parameters);
    let explorer = GrowthExplorer::new(&configuration)?;
    let frame = explorer.render(parameters, display);
    Ok(serde_json::to_string_pretty(&frame)?)
}

fn main() -> ExitCode {
    env_logger::init();
    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        },
        Err(err) => {
            error!("{}", err);
            eprintln!("grex: {}", err);
            ExitCode::FAILURE
        }
    }
}
