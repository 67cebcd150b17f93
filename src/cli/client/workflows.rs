//! Scripted client runs: the CRUD demo and the validation checks

use reqwest::StatusCode;

use super::api::{ClientError, UserDirectoryClient};
use super::output;

/// Outcome of a completed demo run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoSummary {
    pub created: usize,
    pub deleted: usize,
    pub remaining: usize,
}

/// Walk through every endpoint: health, create, list, get, update, paginate, delete.
/// Stops at the first failing call.
pub async fn run_demo(client: &UserDirectoryClient) -> Result<DemoSummary, ClientError> {
    output::banner("User Directory API demo");

    output::step(1, "Health check");
    let health = client.health_check().await?;
    output::print_json(&health, Some("API status"));

    output::step(2, "Creating users");
    let alice = client
        .create_user(
            "alice_smith",
            "alice@example.com",
            "SecurePass123!",
            Some("Alice Smith"),
        )
        .await?;
    output::print_json(&alice, Some("User 1 created"));

    let bob = client
        .create_user(
            "bob_jones",
            "bob@example.com",
            "AnotherPass456!",
            Some("Bob Jones"),
        )
        .await?;
    output::print_json(&bob, Some("User 2 created"));

    let charlie = client
        .create_user("charlie_brown", "charlie@example.com", "MyPassword789!", None)
        .await?;
    output::print_json(&charlie, Some("User 3 created (no full name)"));

    output::step(3, "Listing users");
    let users = client.list_users(0, 100).await?;
    let title = format!("All users ({})", users.len());
    output::print_json(&users, Some(title.as_str()));

    output::step(4, "Fetching a user");
    let user = client.get_user(alice.id).await?;
    let title = format!("User {}", alice.id);
    output::print_json(&user, Some(title.as_str()));

    output::step(5, "Updating a user");
    let updated = client
        .update_user(
            alice.id,
            "alice_smith_updated",
            "alice.updated@example.com",
            Some("Alice Smith (Updated)"),
        )
        .await?;
    output::print_json(&updated, Some("Updated user"));

    output::step(6, "Pagination");
    let page1 = client.list_users(0, 2).await?;
    output::print_json(&page1, Some("Page 1 (first two users)"));
    let page2 = client.list_users(2, 2).await?;
    output::print_json(&page2, Some("Page 2 (next users)"));

    output::step(7, "Deleting a user");
    client.delete_user(bob.id).await?;
    output::success(&format!("User {} deleted", bob.id));

    output::step(8, "Listing after deletion");
    let final_users = client.list_users(0, 100).await?;
    let title = format!("Final list ({} users)", final_users.len());
    output::print_json(&final_users, Some(title.as_str()));

    let summary = DemoSummary {
        created: 3,
        deleted: 1,
        remaining: final_users.len(),
    };

    println!("{}", output::rule('='));
    output::success("Demo completed");
    println!("{}", output::rule('='));
    println!("\nSummary:");
    println!("  • Users created: {}", summary.created);
    println!("  • Users deleted: {}", summary.deleted);
    println!("  • Users remaining: {}", summary.remaining);
    println!();

    Ok(summary)
}

/// One create request that the server must refuse
struct RejectionCase {
    title: &'static str,
    username: &'static str,
    email: &'static str,
    password: &'static str,
}

const REJECTION_CASES: [RejectionCase; 3] = [
    RejectionCase {
        title: "Invalid email",
        username: "testuser1",
        email: "not-an-email",
        password: "password123",
    },
    RejectionCase {
        title: "Username too short",
        username: "ab",
        email: "test@example.com",
        password: "password123",
    },
    RejectionCase {
        title: "Password too short",
        username: "testuser3",
        email: "test@example.com",
        password: "short",
    },
];

/// Outcome of the validation checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub passed: usize,
    pub failed: usize,
}

/// Submit malformed creates and check each is rejected with 422.
/// Transport failures abort the run.
pub async fn run_validation(client: &UserDirectoryClient) -> Result<ValidationReport, ClientError> {
    output::banner("Validation checks");

    let mut report = ValidationReport {
        passed: 0,
        failed: 0,
    };

    for (index, case) in REJECTION_CASES.iter().enumerate() {
        output::step(index + 1, case.title);

        let result = client
            .create_user(case.username, case.email, case.password, None)
            .await;

        match result {
            Err(ClientError::Status { status, body }) if status == StatusCode::UNPROCESSABLE_ENTITY => {
                println!("{}", body);
                output::success(&format!("{}: rejected as expected", case.title));
                report.passed += 1;
            }
            Err(ClientError::Status { status, body }) => {
                output::failure(&format!(
                    "{}: expected 422, got {} ({})",
                    case.title, status, body
                ));
                report.failed += 1;
            }
            Err(e) => return Err(e),
            Ok(user) => {
                output::failure(&format!(
                    "{}: accepted unexpectedly as user {}",
                    case.title, user.id
                ));
                report.failed += 1;
            }
        }
    }

    Ok(report)
}
