use casgo_engine::calculator::{IncentiveSummary, Payback};
use casgo_engine::engine::{Advice, BaselineAssessment, RecommendationAnalysis, RecommendationResult};
use casgo_engine::error::AppError;
use casgo_engine::templates::TemplateSummary;
use clap::ValueEnum;
use serde::Serialize;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// Flat projection of a recommendation for spreadsheet export.
#[derive(Debug, Serialize)]
struct RecommendationRow<'a> {
    rank: usize,
    id: &'a str,
    title: &'a str,
    category: &'a str,
    difficulty: &'static str,
    estimated_cost_savings: f64,
    estimated_co2_reduction: f64,
    roi_months: Option<f64>,
    priority_score: f64,
}

pub(crate) fn advice(out: &mut impl Write, advice: &Advice, format: OutputFormat) -> Result<(), AppError> {
    match format {
        OutputFormat::Json => json(out, advice),
        OutputFormat::Csv => recommendations_csv(out, &advice.recommendations),
        OutputFormat::Table => {
            writeln!(out, "Template: {}", advice.template_id)?;
            if advice.degraded {
                writeln!(out, "Note: ranking unavailable, showing baseline suggestions")?;
            }
            if advice.recommendations.is_empty() {
                writeln!(out, "No recommendations matched this profile")?;
                return Ok(());
            }
            writeln!(
                out,
                "{:<4} {:<34} {:>12} {:>10} {:>14} {:<7} {:>6}",
                "#", "Recommendation", "Savings/yr", "CO2 t/yr", "Payback", "Effort", "Score"
            )?;
            for (index, result) in advice.recommendations.iter().enumerate() {
                writeln!(
                    out,
                    "{:<4} {:<34} {:>12.2} {:>10.2} {:>14} {:<7} {:>6.2}",
                    index + 1,
                    truncate(&result.title, 34),
                    result.estimated_cost_savings,
                    result.estimated_co2_reduction,
                    result.roi_months.to_string(),
                    result.difficulty.label(),
                    result.priority_score
                )?;
            }
            Ok(())
        }
    }
}

pub(crate) fn analysis(
    out: &mut impl Write,
    analysis: &RecommendationAnalysis,
    format: OutputFormat,
) -> Result<(), AppError> {
    if format != OutputFormat::Table {
        return json(out, analysis);
    }

    let result = &analysis.recommendation;
    let roi = &analysis.roi;
    writeln!(out, "{} ({})", result.title, result.id)?;
    writeln!(out, "Applies to profile: {}", if analysis.applicable { "yes" } else { "no" })?;
    writeln!(out, "Region: {}", analysis.region)?;
    writeln!(out, "Implementation cost: ${:.2}", analysis.implementation_cost)?;
    writeln!(out, "Annual savings: ${:.2}", roi.annual_savings)?;
    writeln!(
        out,
        "Payback: {} (typical {} months)",
        roi.payback, analysis.reference_payback_months
    )?;
    writeln!(out, "NPV: ${:.2}  IRR: {:.2}%", roi.net_present_value, roi.irr_percent)?;
    writeln!(out, "CO2 avoided: {:.2} t/yr", roi.co2_reduction_tons)?;
    writeln!(
        out,
        "Incentives: ${:.2} -> post-incentive cost ${:.2}, payback {}",
        analysis.incentives.total_incentive_value,
        analysis.incentives.post_incentive_cost,
        analysis.post_incentive_payback
    )?;
    writeln!(
        out,
        "Equivalent to {} trees planted or {} cars off the road",
        analysis.equivalents.trees_planted, analysis.equivalents.cars_off_road
    )?;
    writeln!(out, "Priority score: {:.2}", result.priority_score)?;
    Ok(())
}

pub(crate) fn baseline(
    out: &mut impl Write,
    baseline: &BaselineAssessment,
    format: OutputFormat,
) -> Result<(), AppError> {
    if format != OutputFormat::Table {
        return json(out, baseline);
    }

    let costs = &baseline.energy_costs;
    let footprint = &baseline.carbon_footprint;
    let solar = &baseline.solar;
    writeln!(
        out,
        "{} / {} in region {} (template {})",
        baseline.industry, baseline.company_size, baseline.region, baseline.template_id
    )?;
    writeln!(out, "\nEnergy costs")?;
    writeln!(out, "- Electricity: ${:.2}/yr at ${}/kWh", costs.annual_electricity_cost, costs.electricity_rate)?;
    writeln!(out, "- Natural gas: ${:.2}/yr at ${}/therm", costs.annual_gas_cost, costs.gas_rate)?;
    if costs.annual_demand_cost > 0.0 {
        writeln!(out, "- Demand charges: ${:.2}/yr", costs.annual_demand_cost)?;
    }
    writeln!(out, "- Total: ${:.2}/yr", costs.total_annual_cost)?;

    writeln!(out, "\nCarbon footprint")?;
    writeln!(
        out,
        "- {:.2} t CO2/yr ({:.2} lbs electricity, {:.2} lbs gas per month)",
        footprint.annual_co2_tons, footprint.electricity_co2_lbs, footprint.gas_co2_lbs
    )?;
    writeln!(
        out,
        "- Equivalent to {} trees, {} cars, {} homes",
        baseline.equivalents.trees_planted,
        baseline.equivalents.cars_off_road,
        baseline.equivalents.homes_powered
    )?;

    let area_note = if baseline.facility_sqft_estimated {
        " (estimated)"
    } else {
        ""
    };
    writeln!(out, "\nSolar potential")?;
    writeln!(out, "- Facility: {:.0} sqft{area_note}", solar.facility_sqft)?;
    writeln!(
        out,
        "- {:.1} kW system, {:.0} kWh/yr, ${:.2}/yr savings",
        solar.system_size_kw, solar.annual_generation_kwh, solar.annual_savings
    )?;
    match solar.payback_years {
        Some(years) => writeln!(out, "- Cost ${:.2}, payback {years:.1} years", solar.estimated_cost)?,
        None => writeln!(out, "- Cost ${:.2}, never pays back", solar.estimated_cost)?,
    }
    Ok(())
}

pub(crate) fn incentives(
    out: &mut impl Write,
    summary: &IncentiveSummary,
    format: OutputFormat,
) -> Result<(), AppError> {
    if format != OutputFormat::Table {
        return json(out, summary);
    }

    writeln!(
        out,
        "Incentives for '{}' in region {} on ${:.2}",
        summary.category, summary.region, summary.implementation_cost
    )?;
    if summary.applicable.is_empty() {
        writeln!(out, "No eligible programs")?;
    }
    for record in &summary.applicable {
        let expires = record
            .expiration
            .map(|date| format!(", expires {date}"))
            .unwrap_or_default();
        writeln!(out, "- {} [{:?}]{expires}: {}", record.name, record.kind, record.description)?;
    }
    writeln!(
        out,
        "Total ${:.2}, post-incentive cost ${:.2} ({:.1}% reduction)",
        summary.total_incentive_value, summary.post_incentive_cost, summary.payback_reduction_pct
    )?;
    Ok(())
}

pub(crate) fn templates(
    out: &mut impl Write,
    templates: &[TemplateSummary],
    format: OutputFormat,
) -> Result<(), AppError> {
    if format != OutputFormat::Table {
        return json(out, templates);
    }

    for template in templates {
        writeln!(
            out,
            "{:<26} {:<38} v{:<6} {}",
            template.id,
            template.name,
            template.version,
            template.industries.join(", ")
        )?;
    }
    Ok(())
}

fn json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> Result<(), AppError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn recommendations_csv(
    out: &mut impl Write,
    recommendations: &[RecommendationResult],
) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_writer(out);
    for (index, result) in recommendations.iter().enumerate() {
        writer
            .serialize(RecommendationRow {
                rank: index + 1,
                id: &result.id,
                title: &result.title,
                category: &result.category,
                difficulty: result.difficulty.label(),
                estimated_cost_savings: result.estimated_cost_savings,
                estimated_co2_reduction: result.estimated_co2_reduction,
                roi_months: match result.roi_months {
                    Payback::Months(months) => Some(months),
                    Payback::Unbounded => None,
                },
                priority_score: result.priority_score,
            })
            .map_err(io::Error::from)?;
    }
    writer.flush()?;
    Ok(())
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let kept: String = text.chars().take(width.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
