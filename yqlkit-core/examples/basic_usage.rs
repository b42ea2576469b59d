use yqlkit_core::{bulk_upsert, op, select, upsert, Predicate, QueryBuilder, Row, StructDescriptor};

fn main() -> yqlkit_core::Result<()> {
    println!("=== yqlkit Core - Basic Usage Examples ===\n");

    // SELECT with raw and structured predicates
    let select_query = select(("date", "count"))
        .from("attendance")?
        .where_(["year = 2024", "month = 5"])
        .or_where(("hour", op::GTE, 18))
        .order_by("date")
        .limit(50)
        .offset(100);

    println!("1. SELECT:");
    println!("   SQL: {}\n", select_query.build());

    // SELECT * with an IN list
    let star_query = select(())
        .from("attendance")?
        .where_(Predicate::in_list("day", [1, 2, 3]));

    println!("2. SELECT *:");
    println!("   SQL: {}\n", star_query.build());

    // Single-row UPSERT
    let row = Row::new()
        .with("date", 1714557600000u64)
        .with("year", 2024)
        .with("month", 5)
        .with("count", 312)
        .with("note", None::<String>);
    let upsert_query = upsert(row).into("attendance")?;

    println!("3. UPSERT:");
    println!("   SQL: {}\n", upsert_query.build());

    // Bulk UPSERT through a declared typed list
    let descriptor = StructDescriptor::new("$rows")
        .field("date", "Uint64")
        .field("year", "Uint32")
        .field("count", "Uint32");
    let bulk_query = bulk_upsert(descriptor).into("attendance")?;

    println!("4. Bulk UPSERT:");
    println!("{}\n", bulk_query.build());

    // Empty table names are rejected
    match select(()).from("") {
        Ok(_) => println!("5. unexpected success"),
        Err(err) => println!("5. Error: {}", err),
    }

    Ok(())
}
