use chrono::NaiveDate;
use colored::{ColoredString, Colorize};
use comfy_table::{Table, presets::UTF8_FULL};

use crate::core::phase::Episode;
use crate::core::status::StatusData;
use crate::models::{DayLog, PhaseType, Workout, WorkoutPlan};

/// Phase name colored for terminals.
pub fn phase_label(phase: PhaseType) -> ColoredString {
    let s = phase.to_string();
    match phase {
        PhaseType::Menstrual => s.red(),
        PhaseType::Follicular => s.green(),
        PhaseType::Ovulation => s.yellow(),
        PhaseType::Luteal => s.blue(),
    }
}

/// One-line summary of a logged day.
pub fn format_day_log(date: NaiveDate, day: &DayLog) -> String {
    let mut parts = Vec::new();
    if let Some(ref p) = day.period {
        let mut s = format!("flow={}", p.flow);
        if !p.symptoms.is_empty() {
            let names: Vec<String> = p.symptoms.iter().map(ToString::to_string).collect();
            s.push_str(&format!(" [{}]", names.join(", ")));
        }
        parts.push(s);
    }
    if let Some(m) = day.mood {
        parts.push(format!("mood={}", m));
    }
    if day.is_empty() {
        format!("{} | (empty)", date)
    } else {
        format!("{} | {}", date, parts.join("  "))
    }
}

pub fn format_workout(w: &Workout) -> String {
    let mut out = format!("{}\n", w.title.bold());
    for e in w.exercises {
        out.push_str(&format!("  - {}: {}\n", e.name, e.description));
    }
    out
}

/// Full plan for one phase: mobility, main workouts, stretch.
pub fn format_plan(plan: &WorkoutPlan, phase: Option<PhaseType>) -> String {
    let mut out = format!("=== {} ===\n\n", plan.title);
    out.push_str(&format_workout(&plan.mobility));
    match phase {
        Some(p) => {
            out.push_str(&format!("\n-- {} workouts --\n", phase_label(p)));
            for w in plan.workouts_for(p) {
                out.push_str(&format_workout(w));
            }
        }
        None => out.push_str("\nLog a period day to see phase workouts.\n"),
    }
    out.push('\n');
    out.push_str(&format_workout(&plan.stretch));
    out
}

pub fn format_plan_list(plans: &[WorkoutPlan]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["type", "level", "title", "workouts"]);
    for p in plans {
        let count: usize = PhaseType::ALL
            .iter()
            .map(|ph| p.workouts_for(*ph).len())
            .sum();
        table.add_row(vec![
            p.plan_type.to_string(),
            p.level.to_string(),
            p.title.to_string(),
            count.to_string(),
        ]);
    }
    table.to_string()
}

pub fn format_history(episodes: &[Episode], last_start: Option<NaiveDate>) -> String {
    if episodes.is_empty() {
        return match last_start {
            Some(d) => format!("No period days logged. Onboarding start: {}", d),
            None => "No period days logged.".to_string(),
        };
    }
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["start", "end", "span (days)", "logged days"]);
    for ep in episodes {
        table.add_row(vec![
            ep.start.to_string(),
            ep.end.to_string(),
            ep.length_days().to_string(),
            ep.logged_days.to_string(),
        ]);
    }
    let mut out = table.to_string();
    if let Some(d) = last_start {
        out.push_str(&format!("\nCurrent cycle started: {}", d));
    }
    out
}

/// Pretty-print the status overview.
pub fn format_status(s: &StatusData) -> String {
    let mut out = format!("=== CycleFit Status — {} ===\n\n", s.date);
    if !s.name.is_empty() {
        out.push_str(&format!("Hi {}!\n", s.name));
    }

    match (s.cycle.phase, s.cycle.period_day, s.cycle.last_period_start) {
        (Some(phase), Some(day), Some(start)) => {
            out.push_str(&format!(
                "Phase: {} (day {} since {})\n",
                phase_label(phase),
                day,
                start
            ));
            if let (Some(next), Some(left)) = (s.cycle.next_phase, s.cycle.days_until_next_phase) {
                out.push_str(&format!("Next: {} in {} day(s)\n", next, left));
            }
        }
        _ => out.push_str("Phase: unknown (log a period day or set your last period date)\n"),
    }

    match &s.plan {
        Some(plan) => {
            out.push_str(&format!("Plan: {}\n", plan.title));
            if let Some(ref ws) = plan.workouts {
                out.push_str(&format!("Today's workouts: {}\n", ws.join(", ")));
            }
        }
        None => out.push_str("Plan: none selected\n"),
    }

    match &s.today {
        Some(day) => out.push_str(&format!("Logged today: {}", format_day_log(s.date, day))),
        None => out.push_str("Nothing logged today."),
    }

    if let Some(ref tip) = s.tip {
        out.push_str(&format!("\n\nTip ({}): {}", tip.category, tip.text));
    }
    out
}
