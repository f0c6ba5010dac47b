use schemaql::dynamic::Schema;
use schemaql::{Operator, QueryBuilder, Result};

const SCHEMA: &str = r#"{
    "users": {
        "id": {"type": "integer"},
        "userName": {"type": "text"},
        "isActive": {"type": "boolean"}
    },
    "posts": {
        "id": {"type": "integer"},
        "userId": {"type": "integer"},
        "content": {"type": "text"},
        "likes": {"type": "integer", "nullable": true}
    }
}"#;

fn main() -> Result<()> {
    println!("=== SchemaQL - Runtime Schema Examples ===\n");

    let schema = Schema::from_json(SCHEMA)?;

    // Operators can come from user input too
    let gt: Operator = ">".parse()?;

    let query = schema
        .query("posts")?
        .select(["id", "content"])?
        .where_("likes", gt, 10)?
        .or_where_null("likes")?
        .join("users", |join| {
            join.on_column("users.id", Operator::EQ, "posts.userId")?
                .on("isActive", Operator::EQ, true)
        })?;
    println!("1. Checked query:");
    println!("   SQL: {}\n", query.build());

    println!("2. Rejected calls:");
    match schema.query("users")?.where_("id", Operator::EQ, "1") {
        Ok(query) => println!("   Unexpected success: {}", query.build()),
        Err(e) => println!("   ✓ Caught type mismatch: {}", e),
    }
    match schema.query("users")?.where_null("userName") {
        Ok(query) => println!("   Unexpected success: {}", query.build()),
        Err(e) => println!("   ✓ Caught null check: {}", e),
    }
    match schema.query("users")?.join("users", Ok) {
        Ok(query) => println!("   Unexpected success: {}", query.build()),
        Err(e) => println!("   ✓ Caught self join: {}", e),
    }
    match "LIKE".parse::<Operator>() {
        Ok(op) => println!("   Unexpected operator: {}", op),
        Err(e) => println!("   ✓ Caught unknown operator: {}", e),
    }

    println!("\n=== All examples completed successfully! ===");
    Ok(())
}
