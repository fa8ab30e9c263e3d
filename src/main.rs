//! Payroll engine command-line runner.
//!
//! Usage: `payroll-engine [config-path]`
//!
//! Loads the employee CSV files named in the configuration, runs the
//! configured batch operations, prints the payroll summary, exports the
//! payroll CSV and, when a server section is present, serves the HTTP API.

use std::error::Error;
use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::{BatchConfig, ConfigLoader};
use payroll_engine::io::{
    export_payroll_csv, load_employees_from_file, render_employee_line, render_summary,
};
use payroll_engine::models::{Employee, EmployeeType};
use payroll_engine::system::SalarySystem;

const DEFAULT_CONFIG_PATH: &str = "config/payroll.yaml";

#[tokio::main]
async fn main() -> ExitCode {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let loader = match ConfigLoader::load(&config_path) {
        Ok(loader) => loader,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    // RUST_LOG wins over the configured level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&loader.config().log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(loader).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Payroll run failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(loader: ConfigLoader) -> Result<(), Box<dyn Error>> {
    let mut system = SalarySystem::new();
    for employee_type in EmployeeType::ALL {
        match load_employees_from_file(loader.data_path(employee_type), employee_type) {
            Ok(outcome) => {
                info!(
                    employee_type = %employee_type,
                    loaded = outcome.employees.len(),
                    rejected = outcome.rejected.len(),
                    "Employees loaded"
                );
                system.add_employees(outcome.employees);
            }
            Err(err) => warn!(error = %err, "Continuing without employee file"),
        }
    }

    run_batch(&mut system, &loader.config().batch);

    let report = system.generate_report();
    println!("\n{}", render_summary(&report));

    if let Some(path) = loader.export_path() {
        export_payroll_csv(&report, &path)?;
        println!("Payroll exported to {}", path.display());
    }

    if let Some(server) = &loader.config().server {
        let listener = tokio::net::TcpListener::bind(&server.bind).await?;
        info!(address = %server.bind, "Serving payroll API");
        axum::serve(listener, create_router(AppState::new(system))).await?;
    }

    Ok(())
}

fn run_batch(system: &mut SalarySystem, batch: &BatchConfig) {
    if let Some(adjustment) = &batch.bulk_adjustment {
        let summary = system.bulk_adjust(
            adjustment.employee_type,
            adjustment.basic_pay,
            adjustment.housing_allowance,
            adjustment.bonus,
        );
        println!(
            "Applied bulk salary adjustment to {} of {} {} employees",
            summary.adjusted, summary.matched, adjustment.employee_type
        );
        for failure in &summary.failures {
            println!("  {} rejected: {}", failure.id, failure.reason);
        }
    }

    if let Some(range) = &batch.salary_range {
        println!(
            "\nEmployees with salary between {:.2} and {:.2}:",
            range.min, range.max
        );
        let ids = ids_of(system.filter_by_salary(range.min, range.max));
        print_employees(system, &ids);
    }

    if let Some(employee_type) = batch.list_type {
        println!("\n{} employees:", employee_type);
        let ids = ids_of(system.filter_by_type(employee_type));
        print_employees(system, &ids);
    }

    if let Some(range) = &batch.hire_date_range {
        println!("\nEmployees hired from {} to {}:", range.start, range.end);
        let ids = ids_of(system.filter_by_hire_date(range.start, range.end));
        print_employees(system, &ids);
    }

    let direction = if batch.sort_descending {
        "descending"
    } else {
        "ascending"
    };
    println!("\nEmployees sorted by salary ({}):", direction);
    let ids = ids_of(system.sort_by_salary(!batch.sort_descending));
    print_employees(system, &ids);
}

fn ids_of(employees: Vec<&Employee>) -> Vec<String> {
    employees
        .into_iter()
        .map(|employee| employee.id().to_string())
        .collect()
}

fn print_employees(system: &mut SalarySystem, ids: &[String]) {
    for id in ids {
        let Some(salary) = system.employee_salary(id) else {
            continue;
        };
        if let Some(employee) = system.get(id) {
            println!("{}", render_employee_line(employee, salary));
        }
    }
}
