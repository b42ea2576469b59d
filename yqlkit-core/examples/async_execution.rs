use std::time::{SystemTime, UNIX_EPOCH};

use serde::Deserialize;
use yqlkit_core::{
    bulk_upsert, select, upsert, ExecutableStatement, Executor, Outcome, Params, Row,
    FAILURE_CODE,
};

#[derive(Debug, Deserialize)]
struct Snapshot {
    date: u64,
    count: u32,
}

// Executor that prints statements instead of sending them anywhere
struct PrintingExecutor;

impl Executor for PrintingExecutor {
    async fn execute(&self, query: &str, params: Option<&Params>) -> Outcome {
        println!("EXECUTE:\n{}", query);
        if let Some(params) = params {
            for (name, param) in params.iter() {
                println!("  bound {} = {:?}", name, param);
            }
        }

        if query.contains("FROM broken") {
            Outcome::Failure(FAILURE_CODE)
        } else if query.starts_with("SELECT") {
            Outcome::Rows(vec![
                Row::new().with("date", 1714557600000u64).with("count", 312),
                Row::new().with("date", 1714561200000u64).with("count", 287),
            ])
        } else {
            Outcome::Success
        }
    }
}

fn snapshot_row(count: u32) -> Row {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or_default();
    Row::new().with("date", millis).with("count", count)
}

#[tokio::main]
async fn main() -> yqlkit_core::Result<()> {
    let executor = PrintingExecutor;

    // Save one visitor count
    let outcome = upsert(snapshot_row(312))
        .into("attendance")?
        .execute(&executor)
        .await;
    println!("-> {:?}\n", outcome.status_code());

    // Save several at once through a bound row list
    let bulk = bulk_upsert(("$rows", [("date", "Uint64"), ("count", "Uint32")]))
        .into("attendance")?;
    let params = bulk.bind([snapshot_row(10), snapshot_row(11)]);
    let outcome = bulk.execute_with(&executor, &params).await;
    println!("-> success: {}\n", outcome.is_success());

    // Read them back
    let snapshots: Vec<Snapshot> = select(("date", "count"))
        .from("attendance")?
        .order_by("date")
        .limit(10)
        .execute(&executor)
        .await
        .deserialize_rows()?;
    for snapshot in &snapshots {
        println!("-> {} visitors at {}", snapshot.count, snapshot.date);
    }
    println!();

    // Failures surface as an error code
    let outcome = select(()).from("broken")?.execute(&executor).await;
    if let Err(err) = outcome.into_result() {
        println!("-> {}", err);
    }

    Ok(())
}
