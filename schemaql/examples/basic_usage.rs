use schemaql::prelude::*;

schema! {
    users {
        id -> i64,
        userName -> String,
        password -> String,
        isActive -> bool,
    }
    posts {
        id -> i64,
        userId -> i64,
        content -> String,
        likes -> Option<i64>,
        comments -> Option<i64>,
    }
}

fn main() {
    println!("=== SchemaQL - Basic Usage Examples ===\n");

    // Everything from one table
    let all_users = from(users::table);
    println!("1. SELECT *:");
    println!("   SQL: {}\n", all_users.build());

    // Typed WHERE clauses; literals must match the column type
    let login = from(users::table)
        .select((users::id, users::userName))
        .where_(users::userName, op::EQ, "admin")
        .and_where(users::password, op::EQ, "it's-a-secret")
        .where_(users::isActive, op::EQ, true);
    println!("2. Typed WHERE:");
    println!("   SQL: {}\n", login.build());

    // AND/OR are applied strictly in call order
    let popular = from(posts::table)
        .where_(posts::likes, op::GT, 10i64)
        .or_where(posts::comments, op::GT, 10i64);
    println!("3. AND/OR combinations:");
    println!("   SQL: {}\n", popular.build());

    // Null checks only compile for Option<_> columns
    let quiet = from(posts::table)
        .select((posts::id, posts::content))
        .where_null(posts::likes)
        .or_where_not_null(posts::comments);
    println!("4. NULL checks:");
    println!("   SQL: {}\n", quiet.build());

    // Column-to-column comparison
    let controversial = from(posts::table).where_column(posts::comments, op::GT, posts::likes);
    println!("5. Column comparison:");
    println!("   SQL: {}\n", controversial.build());

    // Joins between tables declared in the same schema
    let feed = from(users::table)
        .select((users::id, users::userName))
        .left_join(posts::table, |join| {
            join.on_column(posts::userId, op::EQ, users::id)
                .on(posts::likes, op::GT, 0i64)
        })
        .where_(users::isActive, op::EQ, true);
    println!("6. JOIN:");
    println!("   SQL: {}\n", feed.build());

    // Unquoted rendering
    println!("7. Plain rendering:");
    println!("   SQL: {}\n", login.build_with(&RenderOptions::plain()));

    println!("=== All examples completed successfully! ===");
}
