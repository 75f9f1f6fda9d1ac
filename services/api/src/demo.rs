use crate::infra::read_json_file;
use chrono::{Local, Months, NaiveDate};
use clap::Args;
use std::path::PathBuf;
use storeops_pricing::config::AppConfig;
use storeops_pricing::error::AppError;
use storeops_pricing::fixtures::{
    daily_breakdown, demo_facility, demo_roster, generate_monthly_history,
};
use storeops_pricing::import::TenantRosterImporter;
use storeops_pricing::pricing::{
    check_hierarchy_violations, evaluate_roster, ninety_day_trend, price_facility,
    HierarchyViolation, PricedUnitGroup, Signal, TenantDecision, Tier, UnitGroup,
};
use storeops_pricing::report::{EcriBatchSummary, StreetRateBatchSummary};
use storeops_pricing::review::{
    JsonFileSessionStore, ReviewSession, ReviewSessionStore,
    OVERRIDE_REASONS, VP_OVERRIDE_REASONS,
};

const DEMO_FACILITY: &str = "Eastside Storage";
const DEMO_TENANTS: u32 = 24;

#[derive(Args, Debug)]
pub(crate) struct EcriEvaluateArgs {
    /// Tenant roster CSV export
    #[arg(long)]
    pub(crate) roster: PathBuf,
    /// Saved review session (JSON). Defaults to PRICING_REVIEW_SESSION_PATH.
    #[arg(long)]
    pub(crate) session: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct StreetRateRecommendArgs {
    /// Unit groups for one facility as a JSON array
    #[arg(long)]
    pub(crate) groups: PathBuf,
    /// Saved review session (JSON) holding street-rate overrides. Defaults to
    /// PRICING_REVIEW_SESSION_PATH.
    #[arg(long)]
    pub(crate) session: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Seed for the generated facility and roster
    #[arg(long, default_value_t = 42)]
    pub(crate) seed: u64,
    /// Reporting date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
}

pub(crate) fn run_ecri_evaluate(args: EcriEvaluateArgs) -> Result<(), AppError> {
    let records = TenantRosterImporter::from_path(&args.roster)?;
    let mut decisions = evaluate_roster(records);

    let session = session_store(args.session)?.load()?;
    for decision in &mut decisions {
        session.apply_to_tenant(decision);
    }

    println!("ECRI review: {} tenants", decisions.len());
    render_tenant_decisions(&decisions, &session);
    render_ecri_summary(&EcriBatchSummary::from_decisions(&decisions));
    Ok(())
}

pub(crate) fn run_street_rate_recommend(args: StreetRateRecommendArgs) -> Result<(), AppError> {
    let groups: Vec<UnitGroup> = read_json_file(&args.groups)?;
    let (mut priced, _) = price_facility(groups);

    let session = session_store(args.session)?.load()?;
    for group in &mut priced {
        session.apply_to_group(group);
    }
    let violations = check_hierarchy_violations(&priced);

    println!("Street-rate review: {} unit groups", priced.len());
    render_priced_groups(&priced, None);
    render_violations(&violations);
    render_street_rate_summary(&StreetRateBatchSummary::from_groups(&priced, &violations));
    Ok(())
}

/// An explicit `--session` path wins over the configured one.
fn session_store(path: Option<PathBuf>) -> Result<JsonFileSessionStore, AppError> {
    let path = match path {
        Some(path) => path,
        None => AppConfig::load()?.pricing.review_session_path,
    };
    Ok(JsonFileSessionStore::new(path))
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let as_of = args.as_of.unwrap_or_else(|| Local::now().date_naive());
    let seed = args.seed;

    println!("Self-storage pricing demo for {DEMO_FACILITY} (seed {seed}, as of {as_of})");

    let groups = demo_facility(seed, DEMO_FACILITY, as_of);
    let total_units: u32 = groups.iter().map(|group| group.total_units).sum();
    let occupied_units: u32 = groups.iter().map(|group| group.occupied_units).sum();
    let base_occupancy = if total_units == 0 {
        0.0
    } else {
        f64::from(occupied_units) / f64::from(total_units) * 100.0
    };

    let start_month = as_of.checked_sub_months(Months::new(11)).unwrap_or(as_of);
    let history = generate_monthly_history(seed, start_month, 12, base_occupancy, total_units);
    println!(
        "\nFacility: {occupied_units}/{total_units} units occupied ({base_occupancy:.1}%) | 90-day occupancy trend {}",
        ninety_day_trend(&history).label()
    );
    for snapshot in history.iter().rev().take(3).rev() {
        println!(
            "  - {}: {:.1}% occupied | {} in / {} out | street ${}",
            snapshot.month.format("%Y-%m"),
            snapshot.occupancy_pct,
            snapshot.move_ins,
            snapshot.move_outs,
            snapshot.street_rate
        );
    }

    if let Some(group) = groups.first() {
        let busiest = daily_breakdown(seed, &group.day7, 7)
            .into_iter()
            .max_by_key(|day| day.move_ins);
        if let Some(day) = busiest {
            println!(
                "  Busiest day in the last week for {}: day {} with {} move-ins",
                group.display_name(),
                day.day_offset + 1,
                day.move_ins
            );
        }
    }

    println!("\nStreet-rate recommendations");
    let (mut priced, _) = price_facility(groups);
    let stale_days = config.pricing.competitor_stale_days;
    render_priced_groups(&priced, Some((as_of, stale_days)));

    let mut street_session = ReviewSession::new();
    if let Some(group) = priced
        .iter()
        .find(|group| group.recommendation.direction == Signal::Decrease)
    {
        let rate = group.group.street_rate;
        street_session = street_session.modify(group.id(), rate, VP_OVERRIDE_REASONS[2])?;
        println!(
            "\nReviewer holds {} at ${rate} ({})",
            group.group.display_name(),
            VP_OVERRIDE_REASONS[2]
        );
    }
    for group in &mut priced {
        street_session.apply_to_group(group);
    }
    let violations = check_hierarchy_violations(&priced);
    render_violations(&violations);
    render_street_rate_summary(&StreetRateBatchSummary::from_groups(&priced, &violations));

    println!("\nExisting customer rate increases");
    let (decisions, session) = reviewed_roster(seed, DEMO_TENANTS)?;

    render_tenant_decisions(&decisions, &session);
    render_ecri_summary(&EcriBatchSummary::from_decisions(&decisions));
    Ok(())
}

fn reviewed_roster(
    seed: u64,
    tenants: u32,
) -> Result<(Vec<TenantDecision>, ReviewSession), AppError> {
    let mut decisions = evaluate_roster(demo_roster(seed, DEMO_FACILITY, tenants));
    let session = demo_review(&decisions)?;
    for decision in &mut decisions {
        session.apply_to_tenant(decision);
    }
    Ok((decisions, session))
}

/// Approves baseline tenants, trims catch-up increases on multi-unit
/// renters and skips seasonal move-ins.
fn demo_review(decisions: &[TenantDecision]) -> Result<ReviewSession, AppError> {
    let mut session = ReviewSession::new();
    for decision in decisions {
        let id = decision.id();
        session = if decision.is_seasonal_low_rate {
            session
                .skip(id, OVERRIDE_REASONS[2])?
                .annotate(id, "Seasonal promotion move-in; revisit next cycle")
        } else if decision.assigned_tier == Tier::Tier1 && decision.record.is_multi_unit {
            let trimmed = (decision.record.current_rent * 1.2).round();
            session.modify(id, trimmed, OVERRIDE_REASONS[3])?
        } else if decision.assigned_tier == Tier::Tier4 {
            session.approve(id)
        } else {
            session
        };
    }
    Ok(session)
}

fn render_tenant_decisions(decisions: &[TenantDecision], session: &ReviewSession) {
    for decision in decisions {
        let mut flags = Vec::new();
        if decision.is_above_street {
            flags.push("above street");
        }
        if decision.is_seasonal_low_rate {
            flags.push("seasonal");
        }
        let flags = if flags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", flags.join(", "))
        };

        println!(
            "  - {} {}: ${} -> ${} ({} {:.0}%) | {}{}",
            decision.id(),
            decision.record.unit,
            decision.record.current_rent,
            session.final_rent(decision),
            decision.assigned_tier.label(),
            decision.tier_percent * 100.0,
            decision.status.label(),
            flags
        );
    }
}

fn render_ecri_summary(summary: &EcriBatchSummary) {
    println!(
        "Summary: {} tenants | +${} per month | ${:.2} average increase | {} above street | {} seasonal",
        summary.tenants,
        summary.total_monthly_increase,
        summary.average_increase,
        summary.above_street,
        summary.seasonal_low_rate
    );
    for entry in &summary.tier_counts {
        println!(
            "  - Tier {} {} ({:.0}%): {} tenants",
            entry.tier_number,
            entry.tier_label,
            entry.percent * 100.0,
            entry.tenants
        );
    }
    for entry in summary.status_counts.iter().filter(|entry| entry.count > 0) {
        println!("  - {}: {}", entry.status_label, entry.count);
    }
}

fn render_priced_groups(groups: &[PricedUnitGroup], staleness: Option<(NaiveDate, i64)>) {
    for group in groups {
        let recommendation = &group.recommendation;
        println!(
            "  - {}: ${} -> ${} {} ({}, {} confidence, comp avg ${})",
            group.group.display_name(),
            group.group.street_rate,
            group.final_rate(),
            recommendation.direction.label(),
            recommendation.mode.label(),
            recommendation.confidence.label(),
            group.comp_weighted_avg
        );
        println!("    {}", recommendation.rationale);

        if let Some((as_of, max_age_days)) = staleness {
            let stale: Vec<&str> = group
                .group
                .competitors
                .iter()
                .filter(|quote| quote.is_stale(as_of, max_age_days))
                .map(|quote| quote.name.as_str())
                .collect();
            if !stale.is_empty() {
                println!(
                    "    Competitor quotes older than {max_age_days} days: {}",
                    stale.join(", ")
                );
            }
        }
    }
}

fn render_violations(violations: &[HierarchyViolation]) {
    if violations.is_empty() {
        println!("Hierarchy: no access-type pricing violations");
        return;
    }

    println!("Hierarchy violations:");
    for violation in violations {
        println!("  - {}", violation.rationale);
    }
}

fn render_street_rate_summary(summary: &StreetRateBatchSummary) {
    println!(
        "Summary: {} groups | {} increases / {} decreases / {} holds | {} high / {} medium confidence | {} overrides",
        summary.groups,
        summary.increases,
        summary.decreases,
        summary.holds,
        summary.high_confidence,
        summary.medium_confidence,
        summary.overrides
    );
}
