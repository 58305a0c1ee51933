use crate::domain::models::category::Category;
use crate::domain::models::transaction::{KIND_EXPENSE, KIND_INCOME};

/// The fixed category set seeded for every new company: two income and four
/// expense categories. Seeding happens in the same transaction as the
/// company insert.
pub fn default_categories(company_id: &str) -> Vec<Category> {
    let defaults = [
        ("Sales", KIND_INCOME, "Revenue from product sales"),
        ("Services", KIND_INCOME, "Revenue from services rendered"),
        ("Salaries", KIND_EXPENSE, "Employee salaries and wages"),
        ("Rent", KIND_EXPENSE, "Office and workspace rent"),
        ("Supplies", KIND_EXPENSE, "Raw materials and supplies"),
        ("Marketing", KIND_EXPENSE, "Marketing and advertising spend"),
    ];

    defaults
        .into_iter()
        .map(|(name, kind, description)| {
            Category::new(
                company_id.to_string(),
                name.to_string(),
                kind.to_string(),
                Some(description.to_string()),
            )
        })
        .collect()
}
