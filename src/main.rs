//! Illustration Engine CLI
//!
//! Runs one plan comparison from a form-inputs JSON file and an optional
//! transcribed tax-free plan CSV, prints the side-by-side table, and writes
//! the full combined series to CSV.

use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use illustration_engine::{
    comparison::death_benefit_advantage,
    scenario::{Alignment, ComparisonRunner},
    taxfree::load_table,
    DeclaredTable, RawPlanInputs,
};

#[derive(Debug, Parser)]
#[command(name = "illustration_engine", about = "Retirement plan comparison illustrations")]
struct Args {
    /// Path to the plan inputs JSON (form payload; missing fields fall back
    /// to documented defaults)
    #[arg(long)]
    inputs: PathBuf,

    /// Path to a transcribed tax-free plan table CSV
    #[arg(long)]
    table: Option<PathBuf>,

    /// Where to write the full combined series
    #[arg(long, default_value = "comparison_output.csv")]
    output: PathBuf,

    /// Align the two series by age (outer join) instead of by row position
    #[arg(long)]
    by_age: bool,

    /// Number of rows to preview on the console
    #[arg(long, default_value_t = 24)]
    preview: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let payload = fs::read_to_string(&args.inputs)
        .with_context(|| format!("reading inputs from {}", args.inputs.display()))?;
    let raw = RawPlanInputs::from_json(&payload)
        .with_context(|| format!("parsing inputs JSON {}", args.inputs.display()))?;

    let table = match &args.table {
        Some(path) => load_table(path)
            .with_context(|| format!("loading declared table {}", path.display()))?,
        None => DeclaredTable::default(),
    };

    let alignment = if args.by_age {
        Alignment::ByAge
    } else {
        Alignment::Positional
    };
    let comparison = ComparisonRunner::with_alignment(alignment).run_raw(&raw, &table);

    println!("Illustration Engine v0.1.0");
    println!("==========================\n");
    println!("Prepared on: {}", comparison.prepared_on);
    println!(
        "Ages: now {}, stop saving {}, retire {}, horizon {}",
        comparison.inputs.current_age,
        comparison.inputs.stop_saving_age,
        comparison.inputs.retirement_age,
        comparison.inputs.horizon_age,
    );
    println!(
        "Return {:.2}%, fee {:.2}%, taxes {:.0}%/{:.0}%, inflation {:.1}%\n",
        comparison.inputs.rate_of_return,
        comparison.inputs.annual_fee_rate,
        comparison.inputs.working_tax_rate,
        comparison.inputs.retirement_tax_rate,
        comparison.inputs.inflation_rate,
    );

    if comparison.combined.is_empty() {
        println!("No data: age ordering does not produce a projection.");
        return Ok(());
    }

    println!(
        "{:>4} {:>3} {:>14} {:>12} {:>12} {:>14} {:>12} {:>14}",
        "Year", "Age", "CurrBalance", "CurrNet", "NetToday", "TaxFreeBal", "TFDist", "TFDeathBen"
    );
    println!("{}", "-".repeat(94));

    let current_age = comparison.inputs.current_age;
    let inflation = comparison.inputs.inflation_rate / 100.0;
    for row in comparison.combined.iter().take(args.preview) {
        // "Today's dollars" view of this year's net income
        let years_out = row.age.saturating_sub(current_age) as i32;
        let deflator = (1.0 + inflation).powi(years_out);
        let net_today = row.current.net_retirement_income / deflator;

        println!(
            "{:>4} {:>3} {:>14.2} {:>12.2} {:>12.2} {:>14.2} {:>12.2} {:>14.2}",
            row.year_index,
            row.age,
            row.current.cumulative_account_balance,
            row.current.net_retirement_income,
            net_today,
            row.tax_free.cumulative_balance,
            row.tax_free.distribution,
            row.tax_free.death_benefit,
        );
    }
    if comparison.combined.len() > args.preview {
        println!("... ({} more years)", comparison.combined.len() - args.preview);
    }

    write_combined_csv(&args.output, &comparison)
        .with_context(|| format!("writing {}", args.output.display()))?;
    println!("\nFull results written to: {}", args.output.display());

    let totals = &comparison.totals;
    println!("\nTotal Advantage:");
    println!("  Fees saved:            ${:.2}", totals.fees_saved());
    println!("  Extra net income:      ${:.2}", totals.extra_net_income());
    println!("  Income tax avoided:    ${:.2}", totals.tax_advantage());
    println!(
        "  Death benefit delta:   ${:.2}",
        death_benefit_advantage(&comparison.combined)
    );

    Ok(())
}

fn write_combined_csv(
    path: &Path,
    comparison: &illustration_engine::PlanComparison,
) -> std::io::Result<()> {
    let mut file = File::create(path)?;

    writeln!(
        file,
        "YearIndex,Age,CurrStartBalance,CurrContribution,CurrMatch,CurrFees,CurrGrossIncome,\
         CurrIncomeTax,CurrNetIncome,CurrTaxesDeferred,CurrTaxesPaid,CurrCumFees,CurrCumNetIncome,\
         CurrBalance,CurrDeathBenefit,TFContribution,TFDistribution,TFFee,TFBalance,\
         TFCumDistribution,TFCumFees,TFDeathBenefit"
    )?;

    for row in &comparison.combined {
        let c = &row.current;
        let t = &row.tax_free;
        writeln!(
            file,
            "{},{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
            row.year_index,
            row.age,
            c.starting_balance_of_year,
            c.annual_contribution,
            c.annual_employer_match,
            c.annual_fees_paid,
            c.gross_retirement_income,
            c.income_tax,
            c.net_retirement_income,
            c.cumulative_taxes_deferred,
            c.cumulative_taxes_paid,
            c.cumulative_fees_paid,
            c.cumulative_net_income,
            c.cumulative_account_balance,
            c.death_benefit,
            t.annual_contribution,
            t.distribution,
            t.fee,
            t.cumulative_balance,
            t.cumulative_distribution,
            t.cumulative_fees,
            t.death_benefit,
        )?;
    }

    Ok(())
}
