//! Lab work functions panel

use labdesk_lib::LabDeskClient;
use labdesk_lib::error::Error;
use labdesk_lib::model::LabWork;

use crate::command::FunctionCall;

/// Runs a function call and describes its result.
pub async fn run(client: &LabDeskClient, call: FunctionCall) -> Result<String, Error> {
    log::info!("Running {call:?}");
    let message = match call {
        FunctionCall::Sum => {
            let result = client.minimal_point_sum().await?;
            format!("Sum of minimal points: {}", result.sum)
        }
        FunctionCall::Count { author_id } => {
            let result = client.count_by_author_id_greater_than(author_id).await?;
            format!(
                "Lab works with author id greater than {author_id}: {}",
                result.count
            )
        }
        FunctionCall::Purge { minimal_point } => {
            let result = client.delete_by_minimal_point(minimal_point).await?;
            format!(
                "Deleted {} lab work(s) with minimal point {minimal_point}",
                result.deleted
            )
        }
        FunctionCall::Decrease { lab_work_id, steps } => {
            let work = client.decrease_difficulty(lab_work_id, steps).await?;
            format!(
                "{} (#{}) difficulty is now {}",
                work.name, work.id, work.difficulty
            )
        }
        FunctionCall::Top10 { discipline_id } => {
            let works = client.assign_top10_to_discipline(discipline_id).await?;
            assigned_summary(discipline_id, &works)
        }
    };
    Ok(message)
}

fn assigned_summary(discipline_id: i64, works: &[LabWork]) -> String {
    if works.is_empty() {
        return format!("No lab works assigned to discipline #{discipline_id}");
    }
    let names: Vec<String> = works
        .iter()
        .map(|work| format!("{} ({})", work.name, work.difficulty))
        .collect();
    format!(
        "Assigned {} lab work(s) to discipline #{discipline_id}: {}",
        works.len(),
        names.join(", ")
    )
}
