mod cli;

use clap::Parser;
use evalscore::config;
use evalscore::documents;
use evalscore::engine::{select_auto_evaluation_level, select_rubric_level, toggle_checklist_item};
use evalscore::error::EvalError;
use evalscore::fingerprint;
use evalscore::logging;
use evalscore::report::{self, OutputFormat};
use evalscore::types::config::EvalConfig;
use evalscore::types::methodology::Methodology;
use evalscore::types::report::EvaluationReport;
use std::path::Path;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn output_format(
    requested: Option<cli::ReportFormat>,
    config: &EvalConfig,
) -> Result<OutputFormat, EvalError> {
    match requested {
        Some(cli::ReportFormat::Json) => Ok(OutputFormat::Json),
        Some(cli::ReportFormat::Md) => Ok(OutputFormat::Md),
        None => config
            .report_format()
            .map(OutputFormat::parse)
            .unwrap_or(Ok(OutputFormat::Md)),
    }
}

fn evaluate_all(root: &Path, config: &EvalConfig) -> Result<Vec<EvaluationReport>, EvalError> {
    Ok(documents::load_all(root)?
        .iter()
        .map(|(path, methodology)| report::build_report(path, methodology, config))
        .collect())
}

fn emit(path: &Path, methodology: &Methodology, write: bool) -> Result<(), EvalError> {
    if write {
        documents::write(path, methodology)?;
        println!(
            "updated {}: score {:.2}, {}",
            path.display(),
            methodology.score(),
            methodology.completion()
        );
    } else {
        println!("{}", documents::to_pretty_json(methodology)?);
    }
    Ok(())
}

fn run() -> Result<i32, EvalError> {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(&cwd, cli.config.as_deref())?;

    match cli.command {
        cli::Commands::Score(cmd) => {
            let format = output_format(cmd.format, &loaded)?;
            let reports = evaluate_all(&cmd.path, &loaded)?;
            println!("{}", report::render(&reports, format)?);

            if reports.iter().any(EvaluationReport::has_blocking) {
                Ok(exit_code::BLOCKING)
            } else if reports.is_empty() || reports.iter().any(EvaluationReport::has_warnings) {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Validate(cmd) => {
            let format = output_format(cmd.format, &loaded)?;
            let reports = evaluate_all(&cmd.path, &loaded)?;

            if matches!(format, OutputFormat::Json) {
                println!("{}", report::render(&reports, format)?);
            } else {
                for report in &reports {
                    let verdict = if report.has_blocking() { "invalid" } else { "valid" };
                    println!("{}: {} {}", report.path, report.kind, verdict);
                    for issue in &report.issues {
                        let level = if issue.blocking { "BLOCKING" } else { "WARN" };
                        println!("  [{}] {}: {}", level, issue.id, issue.message);
                    }
                }
            }

            if reports.iter().any(EvaluationReport::has_blocking) {
                Ok(exit_code::BLOCKING)
            } else if reports.is_empty() || reports.iter().any(|report| !report.issues.is_empty())
            {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Select(cmd) => {
            let methodology = documents::load(&cmd.file)?;
            let updated = match (&methodology, cmd.dimension) {
                (Methodology::Rubric(rubric), None) => Methodology::Rubric(select_rubric_level(
                    rubric,
                    cmd.criterion,
                    cmd.level,
                )?),
                (Methodology::Rubric(_), Some(_)) => {
                    return Err(EvalError::InvalidDocument(
                        "--dimension only applies to auto-evaluations".to_string(),
                    ))
                }
                (Methodology::AutoEvaluation(auto), Some(dimension)) => {
                    Methodology::AutoEvaluation(select_auto_evaluation_level(
                        auto,
                        dimension,
                        cmd.criterion,
                        cmd.level,
                    )?)
                }
                (Methodology::AutoEvaluation(_), None) => {
                    return Err(EvalError::InvalidDocument(
                        "auto-evaluation selection requires --dimension".to_string(),
                    ))
                }
                (Methodology::Checklist(_), _) => {
                    return Err(EvalError::InvalidDocument(
                        "checklist items are toggled, not selected; use `toggle`".to_string(),
                    ))
                }
            };
            emit(&cmd.file, &updated, cmd.write)?;
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Toggle(cmd) => {
            let methodology = documents::load(&cmd.file)?;
            let Methodology::Checklist(checklist) = &methodology else {
                return Err(EvalError::InvalidDocument(format!(
                    "only checklists have items to toggle (found {})",
                    methodology.kind()
                )));
            };
            let updated = Methodology::Checklist(toggle_checklist_item(checklist, cmd.item)?);
            emit(&cmd.file, &updated, cmd.write)?;
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Verify(cmd) => {
            let published = documents::load(&cmd.published)?;
            let evaluated = documents::load(&cmd.evaluated)?;
            match fingerprint::verify_structure(&published, &evaluated) {
                Ok(digest) => {
                    println!("structure verified: {digest}");
                    Ok(exit_code::SUCCESS)
                }
                Err(EvalError::StructureChanged(detail)) => {
                    eprintln!("error: methodology structure changed: {detail}");
                    Ok(exit_code::BLOCKING)
                }
                Err(e) => Err(e),
            }
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
