use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::CategoryError;

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub fn new(name: String) -> Result<Self, CategoryError> {
        let name = normalize_name(name)?;
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            created_at,
            updated_at,
        }
    }

    pub fn renamed(&self, name: String) -> Result<Self, CategoryError> {
        Ok(Self {
            id: self.id,
            name: normalize_name(name)?,
            created_at: self.created_at,
            updated_at: Utc::now(),
        })
    }
}

fn normalize_name(name: String) -> Result<String, CategoryError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CategoryError::NameEmpty);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_category_with_trimmed_name() {
        let category = Category::new("  Beverages ".to_string()).unwrap();
        assert_eq!(category.name, "Beverages");
    }

    #[test]
    fn should_reject_blank_name() {
        let result = Category::new(" ".to_string());
        assert!(matches!(result.unwrap_err(), CategoryError::NameEmpty));
    }

    #[test]
    fn should_keep_identity_when_renamed() {
        let category = Category::new("Snacks".to_string()).unwrap();

        let renamed = category.renamed("Sweets".to_string()).unwrap();

        assert_eq!(renamed.id, category.id);
        assert_eq!(renamed.name, "Sweets");
        assert_eq!(renamed.created_at, category.created_at);
    }
}
