use azure_network_report::build_route_table_report;
use azure_network_report::output::write_route_table_report;
use azure_network_report::prompt::{select_input_file, select_output_file};
use colored::Colorize;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    log::info!("#Start route-table-report");

    let Some(input) = select_input_file("Azure route table JSON export to convert")? else {
        println!("{}", "No file selected.".red());
        std::process::exit(1);
    };

    let report = build_route_table_report(&input.to_string_lossy())?;

    let Some(output) = select_output_file("Save Excel report as")? else {
        println!("{}", "Save canceled.".yellow());
        return Ok(());
    };

    write_route_table_report(&report, &output)?;
    println!("{} {}", "Saved:".green(), output.display());
    Ok(())
}
