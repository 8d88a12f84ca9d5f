use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};
use serde::Serialize;

/// Seeded xoshiro256** generator so every run writes the same roster.
struct RosterRng {
    state: [u64; 4],
}

impl RosterRng {
    fn new(seed: u64) -> Self {
        let mut state = [0u64; 4];
        let mut x = seed;
        for slot in &mut state {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        RosterRng { state }
    }

    fn next_u64(&mut self) -> u64 {
        let [s0, s1, s2, s3] = &mut self.state;
        let result = s1.wrapping_mul(5).rotate_left(7).wrapping_mul(9);
        let t = *s1 << 17;
        *s2 ^= *s0;
        *s3 ^= *s1;
        *s1 ^= *s2;
        *s0 ^= *s3;
        *s2 ^= t;
        *s3 = s3.rotate_left(45);
        result
    }

    /// Uniform in `(0, 1]`, so it is always safe to take the log of.
    fn unit(&mut self) -> f64 {
        ((self.next_u64() >> 11) + 1) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    /// Normally distributed draw (Box-Muller) for completion days and
    /// scores, which cluster around a per-department typical value.
    fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        let radius = (-2.0 * self.unit().ln()).sqrt();
        let angle = std::f64::consts::TAU * self.unit();
        mean + std_dev * radius * angle.cos()
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len())]
    }
}

#[derive(Serialize)]
struct Row {
    #[serde(rename = "Intern_ID")]
    intern_id: u32,
    #[serde(rename = "Department")]
    department: &'static str,
    #[serde(rename = "Completion_Status")]
    completion_status: &'static str,
    #[serde(rename = "Task_Completion_Days")]
    task_completion_days: Option<u32>,
    #[serde(rename = "Project_Quality_Score")]
    project_quality_score: f64,
    #[serde(rename = "Mentor_Feedback_Score")]
    mentor_feedback_score: f64,
    #[serde(rename = "Date of Assignment")]
    date_of_assignment: NaiveDate,
    #[serde(rename = "Date of Completion")]
    date_of_completion: Option<NaiveDate>,
}

/// Scores are on a 1–10 scale with one decimal.
fn score(rng: &mut RosterRng, mean: f64) -> f64 {
    (rng.normal(mean, 1.2).clamp(1.0, 10.0) * 10.0).round() / 10.0
}

fn main() -> Result<()> {
    let mut rng = RosterRng::new(42);

    // (department, typical days, typical quality, typical feedback)
    let departments = [
        ("Data Science", 14.0, 7.8, 8.1),
        ("Engineering", 18.0, 7.2, 7.6),
        ("Marketing", 9.0, 6.9, 7.9),
        ("Finance", 11.0, 7.5, 7.0),
        ("HR", 7.0, 8.0, 8.4),
    ];
    let statuses = ["Completed", "Completed", "Completed", "In Progress", "Delayed"];
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).context("invalid start date")?;

    let output_path = "Cleaned_Intern_Performance_Data.csv";
    let mut writer = csv::Writer::from_path(output_path).context("creating output file")?;

    let n_rows = 500;
    for id in 1..=n_rows {
        let (department, days_mean, quality_mean, feedback_mean) =
            departments[rng.below(departments.len())];
        let status = rng.pick(&statuses);

        let assigned = start + Duration::days(rng.below(300) as i64);
        let (days, completed) = if status == "In Progress" {
            (None, None)
        } else {
            let mut d = rng.normal(days_mean, days_mean * 0.3).round().max(1.0) as u32;
            if status == "Delayed" {
                d += 7;
            }
            (Some(d), Some(assigned + Duration::days(d as i64)))
        };

        writer
            .serialize(Row {
                intern_id: id,
                department,
                completion_status: status,
                task_completion_days: days,
                project_quality_score: score(&mut rng, quality_mean),
                mentor_feedback_score: score(&mut rng, feedback_mean),
                date_of_assignment: assigned,
                date_of_completion: completed,
            })
            .with_context(|| format!("writing row {id}"))?;
    }
    writer.flush().context("flushing output file")?;

    println!("Wrote {n_rows} intern records to {output_path}");
    Ok(())
}
