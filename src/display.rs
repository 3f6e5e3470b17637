use std::fs::File;
use std::io::Write;

use crate::parser::DATE_FORMAT;
use crate::planner::StudyPlan;

/// Formats a fractional hour count as "<H>h <M>m", truncating both parts
pub fn format_duration(hours: f64) -> String {
    let whole_hours = hours as u32;
    let minutes = ((hours - f64::from(whole_hours)) * 60.0) as u32;
    format!("{}h {}m", whole_hours, minutes)
}

/// Prints a study plan in a readable format
pub fn print_study_plan(plan: &StudyPlan) {
    println!("\n=== Study Plan ===");
    println!("Total study days: {}", plan.len());

    for day in plan {
        println!("\n{}", day.date.format(DATE_FORMAT));
        for session in &day.plan {
            println!(
                "  {} -> {} ({})",
                session.subject,
                session.chapter,
                format_duration(session.hours)
            );
        }
    }
}

/// Writes a study plan to a file, one day per block
pub fn write_plan_to_file(plan: &StudyPlan, filename: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = File::create(filename)?;

    for day in plan {
        writeln!(file, "** {} **", day.date.format(DATE_FORMAT))?;
        for session in &day.plan {
            writeln!(
                file,
                "{} - {} ({})",
                session.subject,
                session.chapter,
                format_duration(session.hours)
            )?;
        }
        writeln!(file)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_truncates() {
        assert_eq!(format_duration(1.5), "1h 30m");
        assert_eq!(format_duration(2.0), "2h 0m");
        assert_eq!(format_duration(0.25), "0h 15m");
        assert_eq!(format_duration(3.999), "3h 59m");
    }

    #[test]
    fn test_minutes_stay_in_range() {
        let mut value = 0.0;
        while value < 10.0 {
            let formatted = format_duration(value);
            let minutes: u32 = formatted
                .split(' ')
                .nth(1)
                .and_then(|m| m.trim_end_matches('m').parse().ok())
                .unwrap();
            assert!(minutes <= 59, "{} produced {}", value, formatted);
            value += 0.137;
        }
    }
}
